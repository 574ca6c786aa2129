//! Document commands: upload, list, get, remove

use crate::app::{DocRefArgs, GetArgs, OutputFormat, RmArgs, UploadArgs};
use crate::output;
use crate::progress::UploadProgress;
use anyhow::Result;
use graphbook_api::ApiClient;

pub async fn upload(args: UploadArgs, client: &ApiClient, format: OutputFormat) -> Result<()> {
    let progress = UploadProgress::new();
    let report = client
        .upload_document(&args.file, Some(move |sent, total| progress.update(sent, total)))
        .await?;
    UploadProgress::finish();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => {
            println!("Uploaded {} ({})", report.file_name, report.file_type);
            println!("  Document id:  {}", report.document_id);
            println!("  Text length:  {}", report.text_length);
            println!("  Entities:     {}", report.entities_count);
            println!("  Relations:    {}", report.relations_count);
            println!("  Chunks:       {}", report.chunks_count);
            if !report.processing.knowledge_graph {
                println!("  (knowledge graph indexing was skipped by the backend)");
            }
            if !report.processing.vector_store {
                println!("  (vector indexing was skipped by the backend)");
            }
        }
    }
    Ok(())
}

pub async fn list(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let list = client.list_documents().await?;
    print!("{}", output::format_document_list(&list, format));
    Ok(())
}

pub async fn get(args: GetArgs, client: &ApiClient, format: OutputFormat) -> Result<()> {
    if args.text {
        let text = client.get_document_text(&args.document_id).await?;
        println!("{}", text.text);
        return Ok(());
    }

    let detail = client.get_document(&args.document_id).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        _ => {
            println!("{} ({})", detail.file_name, detail.file_type);
            println!("  Document id:  {}", detail.document_id);
            println!("  Text length:  {}", detail.text_length);
            println!("  Entities:     {}", detail.entities_count);
            println!("  Relations:    {}", detail.relations_count);
            println!("  Chunks:       {}", detail.chunks_count);
            if !detail.metadata.is_null() {
                println!("  Metadata:     {}", detail.metadata);
            }
        }
    }
    Ok(())
}

pub async fn remove(args: RmArgs, client: &ApiClient) -> Result<()> {
    let ack = client.delete_document(&args.document_id).await?;
    println!("{}", ack.message);
    Ok(())
}

pub async fn entities(args: DocRefArgs, client: &ApiClient, format: OutputFormat) -> Result<()> {
    let list = client.get_document_entities(&args.document_id).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list.entities)?),
        _ => {
            println!("{} entities:", list.entities_count);
            for entity in &list.entities {
                println!("  [{}] {}", entity.label, entity.text);
            }
        }
    }
    Ok(())
}

pub async fn relations(args: DocRefArgs, client: &ApiClient, format: OutputFormat) -> Result<()> {
    let list = client.get_document_relations(&args.document_id).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&list.relations)?),
        _ => {
            println!("{} relations:", list.relations_count);
            for relation in &list.relations {
                println!(
                    "  {} --[{}]--> {}",
                    relation.subject, relation.predicate, relation.object
                );
            }
        }
    }
    Ok(())
}
