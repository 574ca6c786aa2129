//! Knowledge-graph service adapter

use crate::client::ApiClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Aggregate graph statistics from `GET /api/kg/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KgStats {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub nodes: u64,
    #[serde(default)]
    pub relationships: u64,
}

/// A graph node scoped to one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub text: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// A directed, labeled edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub relation: Option<String>,
}

/// Node/edge list from the graph endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// One entity search match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMatch {
    pub text: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntitySearchResponse {
    pub entities: Vec<EntityMatch>,
}

impl ApiClient {
    /// Aggregate knowledge-graph statistics
    pub async fn kg_stats(&self) -> Result<KgStats> {
        self.get_json("/api/kg/stats", &[]).await
    }

    /// Fetch the node/edge list for one document
    pub async fn document_graph(&self, document_id: &str) -> Result<GraphData> {
        self.get_json(&format!("/api/kg/graph/{}", document_id), &[])
            .await
    }

    /// Fetch the neighborhood subgraph around an entity.
    ///
    /// `max_depth` defaults to 2 and `limit` to 50 when `None`.
    pub async fn entity_subgraph(
        &self,
        entity_text: &str,
        max_depth: Option<u32>,
        limit: Option<u32>,
    ) -> Result<GraphData> {
        let url = self.endpoint_with_segment("/api/kg/entity", entity_text)?;
        let query = [
            ("max_depth", max_depth.unwrap_or(2).to_string()),
            ("limit", limit.unwrap_or(50).to_string()),
        ];
        self.get_json_at(url, &query).await
    }

    /// Search entities by label
    pub async fn search_entities(&self, label: &str, limit: Option<u32>) -> Result<Vec<EntityMatch>> {
        let query = [
            ("label", label.to_string()),
            ("limit", limit.unwrap_or(20).to_string()),
        ];
        let response: EntitySearchResponse = self.get_json("/api/kg/search", &query).await?;
        Ok(response.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_graph_with_renamed_edge_type() {
        let json = r#"{
            "nodes": [{"text": "transformer", "label": "TECH"}],
            "edges": [{"source": "transformer", "target": "attention", "type": "uses"}]
        }"#;
        let graph: GraphData = serde_json::from_str(json).unwrap();
        assert_eq!(graph.edges[0].relation.as_deref(), Some("uses"));
    }

    #[test]
    fn tolerates_empty_graph_payload() {
        let graph: GraphData = serde_json::from_str("{}").unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }
}
