//! Output formatters

pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use graphbook_api::{Answer, DocumentList, SearchResponse};

/// Format a document list
pub fn format_document_list(list: &DocumentList, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_document_list(list),
        OutputFormat::Md => markdown::format_document_list(list),
        OutputFormat::Cli => terminal::format_document_list(list),
    }
}

/// Format search results
pub fn format_search_results(response: &SearchResponse, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_search_results(response),
        OutputFormat::Md => markdown::format_search_results(response),
        OutputFormat::Cli => terminal::format_search_results(response),
    }
}

/// Format a QA answer with its cited sources
pub fn format_answer(answer: &Answer, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_answer(answer),
        OutputFormat::Md => markdown::format_answer(answer),
        OutputFormat::Cli => terminal::format_answer(answer),
    }
}
