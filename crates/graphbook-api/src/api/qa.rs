//! QA service adapter: question answering and summarization

use crate::client::ApiClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A cited source passage attached to an answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePassage {
    #[serde(default)]
    pub chunk_id: String,
    pub text: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Response of `POST /api/qa/ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    /// Markdown answer text
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourcePassage>,
    /// Confidence in [0, 1]
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub graph_info: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /api/qa/summarize/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub document_id: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// Parameters of one ask call
#[derive(Debug, Clone)]
pub struct AskRequest {
    pub question: String,
    pub document_id: Option<String>,
    pub top_k: usize,
    pub use_hybrid: bool,
    pub include_graph: bool,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            document_id: None,
            top_k: 5,
            use_hybrid: true,
            include_graph: false,
        }
    }

    /// Wire query pairs (the backend takes everything as query parameters
    /// with an empty request body).
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("question", self.question.clone())];
        if let Some(ref id) = self.document_id {
            pairs.push(("document_id", id.clone()));
        }
        pairs.push(("top_k", self.top_k.to_string()));
        pairs.push(("use_hybrid", self.use_hybrid.to_string()));
        pairs.push(("include_graph", self.include_graph.to_string()));
        pairs
    }
}

impl ApiClient {
    /// Ask a question over the indexed corpus
    pub async fn ask(&self, request: &AskRequest) -> Result<Answer> {
        let pairs = request.query_pairs();
        let borrowed: Vec<(&str, String)> =
            pairs.iter().map(|(k, v)| (*k, v.clone())).collect();
        self.post_json("/api/qa/ask", &borrowed).await
    }

    /// Summarize one document (`max_length` defaults to 500)
    pub async fn summarize(&self, document_id: &str, max_length: Option<u32>) -> Result<Summary> {
        let query = [("max_length", max_length.unwrap_or(500).to_string())];
        self.post_json(&format!("/api/qa/summarize/{}", document_id), &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_pairs_include_booleans_as_strings() {
        let request = AskRequest {
            question: "what is rust".to_string(),
            document_id: Some("doc-9".to_string()),
            top_k: 3,
            use_hybrid: false,
            include_graph: true,
        };
        let pairs = request.query_pairs();
        assert!(pairs.contains(&("question", "what is rust".to_string())));
        assert!(pairs.contains(&("document_id", "doc-9".to_string())));
        assert!(pairs.contains(&("use_hybrid", "false".to_string())));
        assert!(pairs.contains(&("include_graph", "true".to_string())));
    }

    #[test]
    fn unscoped_ask_omits_document_id() {
        let request = AskRequest::new("hello");
        assert!(request
            .query_pairs()
            .iter()
            .all(|(k, _)| *k != "document_id"));
    }

    #[test]
    fn decodes_answer_with_sources() {
        let json = r#"{
            "question": "q",
            "answer": "**bold** answer",
            "sources": [{"chunk_id": "c1", "text": "passage", "score": 0.83, "metadata": {}}],
            "confidence": 0.78,
            "model": "qwen-turbo"
        }"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.sources.len(), 1);
        assert!(answer.confidence > 0.7);
        assert!(answer.error.is_none());
    }
}
