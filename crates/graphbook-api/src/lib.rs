//! Graphbook Client Library
//!
//! Typed client for the document knowledge-graph platform backend.
//!
//! # Features
//! - Document upload/list/fetch/delete with client-side validation
//! - Per-document knowledge-graph fetch and entity subgraph queries
//! - Semantic and hybrid passage search
//! - RAG question answering with an append-only transcript
//! - LLM provider management with an explicit configuration state machine
//! - Seeded 3D layout jitter and a render-settings-aware object cache

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod graph;
pub mod panel;
pub mod session;
pub mod transcript;
pub mod upload;

pub use api::documents::{DocumentDetail, DocumentList, DocumentSummary, UploadReport};
pub use api::kg::{GraphData, GraphEdge, GraphNode, KgStats};
pub use api::llm::{CurrentModel, ProviderInfo, TestOutcome};
pub use api::qa::{Answer, AskRequest, SourcePassage, Summary};
pub use api::search::{SearchHit, SearchRequest, SearchResponse};
pub use api::system::{FeatureFlags, Health, PlatformInfo};
pub use client::ApiClient;
pub use config::Config;
pub use error::{Error, GraphbookError, Result};
pub use graph::{GraphView, NodeKind, NodeObjectCache, RenderQuality, RenderSettings};
pub use panel::{PanelState, ProviderPanel};
pub use session::Session;
pub use transcript::{ConfidenceBand, Transcript, Turn};
pub use upload::{validate_upload, FileKind, MAX_UPLOAD_BYTES};

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "graphbook";
