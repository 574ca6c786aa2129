//! Knowledge-graph commands

use crate::app::{KgAction, KgArgs, OutputFormat};
use anyhow::Result;
use graphbook_api::{ApiClient, GraphView, RenderQuality, RenderSettings};

pub async fn run(args: KgArgs, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match args.action {
        KgAction::Stats => stats(client, format).await,
        KgAction::Graph {
            document_id,
            quality,
        } => graph(client, &document_id, &quality, format).await,
        KgAction::Entity {
            text,
            max_depth,
            limit,
        } => entity(client, &text, max_depth, limit, format).await,
        KgAction::Search { label, limit } => search(client, &label, limit, format).await,
    }
}

async fn stats(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let stats = client.kg_stats().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => {
            println!("Connected:     {}", stats.connected);
            println!("Nodes:         {}", stats.nodes);
            println!("Relationships: {}", stats.relationships);
        }
    }
    Ok(())
}

async fn graph(
    client: &ApiClient,
    document_id: &str,
    quality: &str,
    format: OutputFormat,
) -> Result<()> {
    let data = client.document_graph(document_id).await?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if data.nodes.is_empty() {
        println!("No knowledge-graph data for this document yet");
        return Ok(());
    }

    let view = GraphView::build(&data, GraphView::seed_for(document_id));
    let settings = RenderSettings {
        quality: parse_quality(quality)?,
        ..RenderSettings::default()
    };
    let visible = view.visible(&settings);

    println!(
        "{} nodes, {} edges (showing {} / {})",
        view.nodes.len(),
        view.links.len(),
        visible.nodes.len(),
        visible.links.len()
    );
    println!();
    for (kind, count) in view.kind_counts() {
        println!("  {:<13} {}", kind.label(), count);
    }
    println!();
    for link in visible.links.iter().take(50) {
        println!("  {} --[{}]--> {}", link.source, link.label, link.target);
    }
    if visible.links.len() > 50 {
        println!("  ... and {} more edges", visible.links.len() - 50);
    }
    Ok(())
}

async fn entity(
    client: &ApiClient,
    text: &str,
    max_depth: u32,
    limit: u32,
    format: OutputFormat,
) -> Result<()> {
    let data = client
        .entity_subgraph(text, Some(max_depth), Some(limit))
        .await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        _ => {
            println!(
                "Subgraph of '{}': {} nodes, {} edges",
                text,
                data.nodes.len(),
                data.edges.len()
            );
            for edge in &data.edges {
                println!(
                    "  {} --[{}]--> {}",
                    edge.source,
                    edge.relation.as_deref().unwrap_or("RELATED"),
                    edge.target
                );
            }
        }
    }
    Ok(())
}

async fn search(client: &ApiClient, label: &str, limit: u32, format: OutputFormat) -> Result<()> {
    let entities = client.search_entities(label, Some(limit)).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entities)?),
        _ => {
            for entity in &entities {
                println!(
                    "[{}] {}",
                    entity.label.as_deref().unwrap_or("UNKNOWN"),
                    entity.text
                );
            }
        }
    }
    Ok(())
}

fn parse_quality(value: &str) -> Result<RenderQuality> {
    match value {
        "low" => Ok(RenderQuality::Low),
        "medium" => Ok(RenderQuality::Medium),
        "high" => Ok(RenderQuality::High),
        other => anyhow::bail!("unknown render quality '{}'", other),
    }
}
