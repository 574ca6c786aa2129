//! System adapter: health check and feature-flag discovery

use crate::client::ApiClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Feature flags announced by `GET /`.
///
/// Fetched once at startup into an immutable session context; views never
/// re-read them mid-session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub file_parsing: bool,
    #[serde(default)]
    pub nlp_processing: bool,
    #[serde(default)]
    pub knowledge_graph: bool,
    #[serde(default)]
    pub vector_search: bool,
    #[serde(default)]
    pub rag_qa: bool,
}

/// Response of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub services: serde_json::Value,
}

impl ApiClient {
    /// Backend health report
    pub async fn health(&self) -> Result<Health> {
        self.get_json("/health", &[]).await
    }

    /// Platform info including feature flags
    pub async fn platform_info(&self) -> Result<PlatformInfo> {
        self.get_json("/", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_feature_flags() {
        let json = r#"{
            "message": "Welcome",
            "version": "0.2.0",
            "features": {
                "file_parsing": true,
                "nlp_processing": true,
                "knowledge_graph": false,
                "vector_search": true,
                "rag_qa": false
            }
        }"#;
        let info: PlatformInfo = serde_json::from_str(json).unwrap();
        assert!(info.features.vector_search);
        assert!(!info.features.rag_qa);
    }

    #[test]
    fn missing_flags_default_to_disabled() {
        let info: PlatformInfo = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert!(!info.features.knowledge_graph);
    }
}
