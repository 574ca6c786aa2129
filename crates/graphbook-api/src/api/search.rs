//! Search service adapter: semantic and hybrid passage retrieval
//!
//! Result ordering is backend-assigned; nothing here re-ranks. Query
//! parameters are built by pure functions so the exact wire contract is
//! testable without a server.

use crate::client::ApiClient;
use crate::error::{GraphbookError, Result};
use serde::{Deserialize, Serialize};

/// Chunk provenance attached to every hit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkRef {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub chunk_id: Option<String>,
}

/// One retrieved passage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    /// Semantic relevance score
    pub score: f32,
    /// Hybrid mode only: blended score
    #[serde(default)]
    pub combined_score: Option<f32>,
    /// Hybrid mode only: keyword overlap sub-score
    #[serde(default)]
    pub keyword_score: Option<f32>,
    #[serde(default)]
    pub metadata: ChunkRef,
}

impl SearchHit {
    /// Score to display: the blended score when the backend computed one
    pub fn display_score(&self) -> f32 {
        self.combined_score.unwrap_or(self.score)
    }
}

/// Search endpoint response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results_count: usize,
    pub results: Vec<SearchHit>,
}

/// A validated search request
#[derive(Debug, Clone)]
pub enum SearchRequest {
    Semantic {
        query: String,
        top_k: usize,
        document_id: Option<String>,
    },
    Hybrid {
        query: String,
        top_k: usize,
        semantic_weight: f32,
    },
}

impl SearchRequest {
    pub fn semantic(query: impl Into<String>, top_k: usize, document_id: Option<String>) -> Self {
        Self::Semantic {
            query: query.into(),
            top_k,
            document_id,
        }
    }

    /// Build a hybrid request; the weight must lie in [0, 1].
    pub fn hybrid(query: impl Into<String>, top_k: usize, semantic_weight: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&semantic_weight) {
            return Err(GraphbookError::InvalidInput(format!(
                "semantic weight {} is outside [0, 1]",
                semantic_weight
            )));
        }
        Ok(Self::Hybrid {
            query: query.into(),
            top_k,
            semantic_weight,
        })
    }

    /// Endpoint path for this request
    pub fn path(&self) -> &'static str {
        match self {
            Self::Semantic { .. } => "/api/search",
            Self::Hybrid { .. } => "/api/search/hybrid",
        }
    }

    /// Wire query pairs, in the order the backend documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Semantic {
                query,
                top_k,
                document_id,
            } => {
                let mut pairs = vec![
                    ("query", query.clone()),
                    ("top_k", top_k.to_string()),
                ];
                if let Some(id) = document_id {
                    pairs.push(("document_id", id.clone()));
                }
                pairs
            }
            Self::Hybrid {
                query,
                top_k,
                semantic_weight,
            } => vec![
                ("query", query.clone()),
                ("top_k", top_k.to_string()),
                ("semantic_weight", semantic_weight.to_string()),
            ],
        }
    }
}

impl ApiClient {
    /// Run a search request against the backend
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let pairs = request.query_pairs();
        let borrowed: Vec<(&str, String)> =
            pairs.iter().map(|(k, v)| (*k, v.clone())).collect();
        self.get_json(request.path(), &borrowed).await
    }

    /// Semantic-only search, optionally scoped to one document
    pub async fn semantic_search(
        &self,
        query: &str,
        top_k: usize,
        document_id: Option<&str>,
    ) -> Result<SearchResponse> {
        let request =
            SearchRequest::semantic(query, top_k, document_id.map(String::from));
        self.search(&request).await
    }

    /// Hybrid semantic+keyword search
    pub async fn hybrid_search(
        &self,
        query: &str,
        top_k: usize,
        semantic_weight: f32,
    ) -> Result<SearchResponse> {
        let request = SearchRequest::hybrid(query, top_k, semantic_weight)?;
        self.search(&request).await
    }
}
