//! Markdown output formatter

use graphbook_api::{Answer, DocumentList, SearchResponse};

pub fn format_document_list(list: &DocumentList) -> String {
    let mut output = String::new();
    output.push_str("| Document | Type | Entities | Chunks |\n");
    output.push_str("|---|---|---|---|\n");
    for doc in &list.documents {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            doc.file_name, doc.file_type, doc.entities_count, doc.chunks_count
        ));
    }
    output
}

pub fn format_search_results(response: &SearchResponse) -> String {
    let mut output = format!("## Results for \"{}\"\n\n", response.query);
    for (i, hit) in response.results.iter().enumerate() {
        output.push_str(&format!(
            "### {}. score {:.2}\n\n{}\n\n",
            i + 1,
            hit.display_score(),
            hit.text
        ));
    }
    output
}

pub fn format_answer(answer: &Answer) -> String {
    // The answer body is already markdown.
    let mut output = format!("{}\n\n", answer.answer);
    output.push_str(&format!(
        "*Confidence {:.1}%, model {}*\n",
        answer.confidence * 100.0,
        answer.model
    ));
    if !answer.sources.is_empty() {
        output.push_str("\n#### Sources\n\n");
        for source in &answer.sources {
            output.push_str(&format!("- ({:.2}) {}\n", source.score, source.text));
        }
    }
    output
}
