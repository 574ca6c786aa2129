//! Search commands

use crate::app::{HybridArgs, OutputFormat, SearchArgs};
use crate::output;
use anyhow::Result;
use graphbook_api::{ApiClient, Config};

pub async fn semantic(
    args: SearchArgs,
    client: &ApiClient,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let query = args.query.join(" ");
    let top_k = args.top_k.unwrap_or(config.top_k);
    let response = client
        .semantic_search(&query, top_k, args.document.as_deref())
        .await?;
    print!("{}", output::format_search_results(&response, format));
    Ok(())
}

pub async fn hybrid(
    args: HybridArgs,
    client: &ApiClient,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let query = args.query.join(" ");
    let top_k = args.top_k.unwrap_or(config.top_k);
    let weight = args.weight.unwrap_or(config.semantic_weight);
    let response = client.hybrid_search(&query, top_k, weight).await?;
    print!("{}", output::format_search_results(&response, format));
    Ok(())
}
