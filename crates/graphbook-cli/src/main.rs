//! Graphbook CLI
//!
//! Terminal client for the document knowledge-graph platform: upload and
//! manage documents, explore extracted graphs, search passages, and ask
//! questions over the indexed corpus.

use anyhow::Result;
use clap::Parser;
use graphbook_api::{ApiClient, Config, GraphbookError, Session};

mod app;
mod commands;
mod output;
mod progress;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<GraphbookError>()
            .map(|ge| ge.exit_code())
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(&config)?;

    // Session-free commands first.
    match cli.command {
        Commands::Login(args) => return commands::auth::login(args),
        Commands::Logout => return commands::auth::logout(),
        _ => {}
    }

    let session = Session::load()?;
    if !session.logged_in {
        anyhow::bail!("not logged in: run 'graphbook login <username>' first");
    }

    match cli.command {
        Commands::Login(_) | Commands::Logout => unreachable!("handled above"),
        Commands::Status => commands::status::run(&client, cli.format).await,
        Commands::Upload(args) => commands::documents::upload(args, &client, cli.format).await,
        Commands::Ls => commands::documents::list(&client, cli.format).await,
        Commands::Get(args) => commands::documents::get(args, &client, cli.format).await,
        Commands::Rm(args) => commands::documents::remove(args, &client).await,
        Commands::Entities(args) => {
            commands::documents::entities(args, &client, cli.format).await
        }
        Commands::Relations(args) => {
            commands::documents::relations(args, &client, cli.format).await
        }
        Commands::Kg(args) => commands::kg::run(args, &client, cli.format).await,
        Commands::Search(args) => {
            commands::search::semantic(args, &client, &config, cli.format).await
        }
        Commands::Hybrid(args) => {
            commands::search::hybrid(args, &client, &config, cli.format).await
        }
        Commands::Ask(args) => commands::qa::ask(args, &client, &config, cli.format).await,
        Commands::Summarize(args) => commands::qa::summarize(args, &client, cli.format).await,
        Commands::Llm(args) => commands::llm::run(args, &client, cli.format).await,
    }
}
