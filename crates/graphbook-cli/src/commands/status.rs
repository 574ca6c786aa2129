//! Status command: backend health and feature flags

use crate::app::OutputFormat;
use anyhow::Result;
use graphbook_api::ApiClient;

pub async fn run(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let info = client.platform_info().await?;
    let health = client.health().await?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "platform": info,
                    "health": health,
                }))?
            );
        }
        _ => {
            println!("Backend:          {}", client.base_url());
            println!("Version:          {}", info.version);
            println!("Status:           {}", health.status);
            println!();
            println!("Features:");
            println!("  File parsing:    {}", enabled(info.features.file_parsing));
            println!("  NLP processing:  {}", enabled(info.features.nlp_processing));
            println!(
                "  Knowledge graph: {}",
                enabled(info.features.knowledge_graph)
            );
            println!("  Vector search:   {}", enabled(info.features.vector_search));
            println!("  RAG QA:          {}", enabled(info.features.rag_qa));
        }
    }
    Ok(())
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}
