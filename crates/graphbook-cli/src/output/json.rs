//! JSON output formatter

use graphbook_api::{Answer, DocumentList, SearchResponse};

pub fn format_document_list(list: &DocumentList) -> String {
    serde_json::to_string_pretty(&list.documents).unwrap_or_else(|_| "[]".to_string()) + "\n"
}

pub fn format_search_results(response: &SearchResponse) -> String {
    let output: Vec<serde_json::Value> = response
        .results
        .iter()
        .map(|hit| {
            serde_json::json!({
                "score": hit.display_score(),
                "semantic_score": hit.score,
                "keyword_score": hit.keyword_score,
                "document_id": hit.metadata.document_id,
                "chunk_id": hit.metadata.chunk_id,
                "text": hit.text,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}

pub fn format_answer(answer: &Answer) -> String {
    serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
