//! LLM provider management commands

use crate::app::{LlmAction, LlmArgs, OutputFormat};
use anyhow::Result;
use graphbook_api::{ApiClient, ProviderInfo};

pub async fn run(args: LlmArgs, client: &ApiClient, format: OutputFormat) -> Result<()> {
    match args.action {
        LlmAction::Providers { all } => providers(client, all, format).await,
        LlmAction::Current => current(client, format).await,
        LlmAction::Test {
            provider,
            key,
            model,
        } => test(client, &provider, &key, model.as_deref()).await,
        LlmAction::Config {
            provider,
            key,
            model,
            no_current,
        } => config(client, &provider, &key, model.as_deref(), !no_current).await,
        LlmAction::Switch { provider, model } => {
            switch(client, &provider, model.as_deref()).await
        }
    }
}

async fn providers(client: &ApiClient, all: bool, format: OutputFormat) -> Result<()> {
    let providers: Vec<ProviderInfo> = if all {
        client.llm_all_providers().await?
    } else {
        client.llm_providers().await?.providers
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&providers)?),
        _ => {
            if providers.is_empty() {
                println!("No providers configured");
                return Ok(());
            }
            for provider in &providers {
                let marker = if provider.current {
                    "*"
                } else if provider.configured {
                    "+"
                } else {
                    " "
                };
                println!(
                    "{} {:<10} {:<20} [{}]",
                    marker,
                    provider.id,
                    provider.name,
                    provider.models.join(", ")
                );
            }
        }
    }
    Ok(())
}

async fn current(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let current = client.llm_current().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&current)?),
        _ => {
            if current.is_none() {
                println!("No provider configured");
            } else {
                println!("{} ({})", current.name, current.model);
            }
        }
    }
    Ok(())
}

async fn test(
    client: &ApiClient,
    provider: &str,
    key: &str,
    model: Option<&str>,
) -> Result<()> {
    let outcome = client.llm_test(provider, key, model).await?;
    if outcome.success {
        println!("Test passed: {}", outcome.message);
    } else {
        println!("Test failed: {}", outcome.message);
    }
    Ok(())
}

async fn config(
    client: &ApiClient,
    provider: &str,
    key: &str,
    model: Option<&str>,
    set_as_current: bool,
) -> Result<()> {
    let outcome = client
        .llm_configure(provider, key, model, set_as_current)
        .await?;
    println!("{}", outcome.message);
    Ok(())
}

async fn switch(client: &ApiClient, provider: &str, model: Option<&str>) -> Result<()> {
    let outcome = client.llm_switch(provider, model).await?;
    println!("{}", outcome.message);
    Ok(())
}
