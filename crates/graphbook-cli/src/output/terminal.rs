//! Terminal output formatter

use graphbook_api::{Answer, ConfidenceBand, DocumentList, SearchResponse};

pub fn format_document_list(list: &DocumentList) -> String {
    if list.documents.is_empty() {
        return "No documents uploaded yet\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{} document(s):\n", list.total));
    for doc in &list.documents {
        output.push_str(&format!(
            "{}  {:<30} [{}] {} entities, {} chunks\n",
            doc.document_id,
            doc.file_name,
            doc.file_type.to_uppercase(),
            doc.entities_count,
            doc.chunks_count
        ));
    }
    output
}

pub fn format_search_results(response: &SearchResponse) -> String {
    if response.results.is_empty() {
        return format!("No results for '{}'\n", response.query);
    }

    let mut output = String::new();
    for hit in &response.results {
        let score_pct = (hit.display_score() * 100.0) as u32;
        let source = hit.metadata.document_id.as_deref().unwrap_or("?");
        output.push_str(&format!("{:>3}% {}\n", score_pct, source));

        if let Some(keyword) = hit.keyword_score {
            output.push_str(&format!(
                "     semantic {:.2} / keyword {:.2}\n",
                hit.score, keyword
            ));
        }

        for line in hit.text.lines().take(3) {
            output.push_str(&format!("  {}\n", line));
        }
        if hit.text.lines().count() > 3 {
            output.push_str("  ...\n");
        }
    }
    output
}

pub fn format_answer(answer: &Answer) -> String {
    let mut output = String::new();
    output.push_str(&answer.answer);
    output.push('\n');

    let band = match ConfidenceBand::of(answer.confidence) {
        ConfidenceBand::High => "high",
        ConfidenceBand::Good => "good",
        ConfidenceBand::Fair => "fair",
        ConfidenceBand::Low => "low",
    };
    output.push_str(&format!(
        "\nConfidence: {:.1}% ({})  Model: {}\n",
        answer.confidence * 100.0,
        band,
        answer.model
    ));

    if !answer.sources.is_empty() {
        output.push_str(&format!("\nSources ({}):\n", answer.sources.len()));
        for source in &answer.sources {
            let snippet: String = source.text.chars().take(120).collect();
            output.push_str(&format!(
                "  [{:>3}%] {}\n",
                (source.score * 100.0) as u32,
                snippet
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbook_api::DocumentSummary;

    #[test]
    fn list_renders_one_row_per_document() {
        let list = DocumentList {
            total: 2,
            documents: vec![
                DocumentSummary {
                    document_id: "a".to_string(),
                    file_name: "a.pdf".to_string(),
                    file_type: "pdf".to_string(),
                    text_length: 10,
                    entities_count: 12,
                    chunks_count: 5,
                },
                DocumentSummary {
                    document_id: "b".to_string(),
                    file_name: "b.docx".to_string(),
                    file_type: "docx".to_string(),
                    text_length: 20,
                    entities_count: 3,
                    chunks_count: 2,
                },
            ],
        };
        let output = format_document_list(&list);
        let rows = output
            .lines()
            .filter(|l| l.contains("entities"))
            .count();
        assert_eq!(rows, list.documents.len());
        assert!(output.contains("12 entities"));
        assert!(output.contains("5 chunks"));
        assert!(output.contains("[PDF]"));
    }
}
