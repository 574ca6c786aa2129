//! QA commands: ask and summarize

use crate::app::{AskArgs, OutputFormat, SummarizeArgs};
use crate::output;
use anyhow::Result;
use graphbook_api::{ApiClient, AskRequest, Config};

pub async fn ask(
    args: AskArgs,
    client: &ApiClient,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let request = AskRequest {
        question: args.question.join(" "),
        document_id: args.document,
        top_k: args.top_k.unwrap_or(config.top_k),
        use_hybrid: !args.keyword_only,
        include_graph: args.graph,
    };
    let answer = client.ask(&request).await?;
    print!("{}", output::format_answer(&answer, format));
    Ok(())
}

pub async fn summarize(
    args: SummarizeArgs,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<()> {
    let summary = client
        .summarize(&args.document_id, Some(args.max_length))
        .await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => println!("{}", summary.summary),
    }
    Ok(())
}
