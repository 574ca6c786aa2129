//! Graphbook TUI
//!
//! Terminal user interface for the document knowledge-graph platform.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use graphbook_api::{ApiClient, Config, FeatureFlags, Session};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod event;
mod ui;

use app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(&config)?;

    // Feature flags are fetched once; views never re-read them mid-session.
    // When discovery fails, assume everything is enabled and let each call
    // fail on its own.
    let features = match client.platform_info().await {
        Ok(info) => info.features,
        Err(e) => {
            tracing::warn!("feature discovery failed: {}", e);
            FeatureFlags {
                file_parsing: true,
                nlp_processing: true,
                knowledge_graph: true,
                vector_search: true,
                rag_qa: true,
            }
        }
    };

    let session = Session::load()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client, &config, session, features);
    if app.session.logged_in {
        app.refresh_documents().await;
    }

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        event::handle_events(app).await?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
