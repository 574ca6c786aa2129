//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphbook")]
#[command(
    author,
    version,
    about = "Terminal client for the document knowledge-graph platform"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in (session is stored locally)
    Login(LoginArgs),

    /// Log out and clear the stored session
    Logout,

    /// Backend health and feature flags
    Status,

    /// Upload a PDF or DOCX document
    Upload(UploadArgs),

    /// List uploaded documents
    Ls,

    /// Show one document
    Get(GetArgs),

    /// Delete a document
    #[command(alias = "delete")]
    Rm(RmArgs),

    /// List a document's extracted entities
    Entities(DocRefArgs),

    /// List a document's extracted relations
    Relations(DocRefArgs),

    /// Knowledge-graph queries
    Kg(KgArgs),

    /// Semantic passage search
    Search(SearchArgs),

    /// Hybrid semantic+keyword search
    Hybrid(HybridArgs),

    /// Ask a question over the indexed documents
    Ask(AskArgs),

    /// Summarize a document
    Summarize(SummarizeArgs),

    /// LLM provider management
    Llm(LlmArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Cli,
    /// Pretty-printed JSON
    Json,
    /// Markdown
    Md,
}

#[derive(Args)]
pub struct LoginArgs {
    pub username: String,

    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct UploadArgs {
    /// File to upload (.pdf or .docx, at most 10 MiB)
    pub file: PathBuf,
}

#[derive(Args)]
pub struct GetArgs {
    pub document_id: String,

    /// Print the full extracted text instead of the detail view
    #[arg(long)]
    pub text: bool,
}

#[derive(Args)]
pub struct RmArgs {
    pub document_id: String,
}

#[derive(Args)]
pub struct DocRefArgs {
    pub document_id: String,
}

#[derive(Args)]
pub struct KgArgs {
    #[command(subcommand)]
    pub action: KgAction,
}

#[derive(Subcommand)]
pub enum KgAction {
    /// Aggregate graph statistics
    Stats,
    /// Node/edge list of one document's graph
    Graph {
        document_id: String,
        /// Render quality tier for the preview (low caps at 100 nodes)
        #[arg(long, default_value = "high")]
        quality: String,
    },
    /// Neighborhood subgraph around an entity
    Entity {
        text: String,
        #[arg(long, default_value_t = 2)]
        max_depth: u32,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Search entities by label
    Search {
        label: String,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Query text
    pub query: Vec<String>,

    /// Number of results (defaults from config)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Restrict to one document
    #[arg(long)]
    pub document: Option<String>,
}

#[derive(Args)]
pub struct HybridArgs {
    /// Query text
    pub query: Vec<String>,

    /// Number of results (defaults from config)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Semantic weight in [0, 1] (defaults from config)
    #[arg(short, long)]
    pub weight: Option<f32>,
}

#[derive(Args)]
pub struct AskArgs {
    /// Question text
    pub question: Vec<String>,

    /// Restrict retrieval to one document
    #[arg(long)]
    pub document: Option<String>,

    /// Passages to retrieve (defaults from config)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Retrieve with semantic-only search instead of hybrid
    #[arg(long)]
    pub keyword_only: bool,

    /// Include knowledge-graph context
    #[arg(long)]
    pub graph: bool,
}

#[derive(Args)]
pub struct SummarizeArgs {
    pub document_id: String,

    /// Maximum summary length
    #[arg(long, default_value_t = 500)]
    pub max_length: u32,
}

#[derive(Args)]
pub struct LlmArgs {
    #[command(subcommand)]
    pub action: LlmAction,
}

#[derive(Subcommand)]
pub enum LlmAction {
    /// List providers
    Providers {
        /// Include unconfigured providers
        #[arg(long)]
        all: bool,
    },
    /// Show the provider/model currently in use
    Current,
    /// Test an API key without saving it
    Test {
        provider: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        model: Option<String>,
    },
    /// Save a provider configuration
    Config {
        provider: String,
        #[arg(long)]
        key: String,
        #[arg(long)]
        model: Option<String>,
        /// Do not make this provider current
        #[arg(long)]
        no_current: bool,
    },
    /// Switch the active provider/model
    Switch {
        provider: String,
        #[arg(long)]
        model: Option<String>,
    },
}
