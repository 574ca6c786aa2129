//! LLM provider management adapter
//!
//! API keys travel only inside the request; nothing here persists them.

use crate::client::ApiClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One provider entry from the providers endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub configured: bool,
    #[serde(default)]
    pub current: bool,
}

/// The provider/model pair currently answering questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentModel {
    pub provider: String,
    pub model: String,
    pub name: String,
}

impl CurrentModel {
    /// True when the backend has no provider configured
    pub fn is_none(&self) -> bool {
        self.provider == "none"
    }
}

/// Result of an API key test or a configuration call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ProviderListResponse {
    #[serde(default)]
    providers: Vec<ProviderInfo>,
    #[serde(default)]
    current: Option<CurrentModel>,
}

/// Configured providers plus the active selection
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    pub providers: Vec<ProviderInfo>,
    pub current: Option<CurrentModel>,
}

impl ApiClient {
    /// Providers that already hold a working configuration
    pub async fn llm_providers(&self) -> Result<ProviderCatalog> {
        let response: ProviderListResponse = self.get_json("/api/llm/providers", &[]).await?;
        Ok(ProviderCatalog {
            providers: response.providers,
            current: response.current,
        })
    }

    /// Every supported provider, configured or not
    pub async fn llm_all_providers(&self) -> Result<Vec<ProviderInfo>> {
        let response: ProviderListResponse =
            self.get_json("/api/llm/providers/all", &[]).await?;
        Ok(response.providers)
    }

    /// The provider/model pair currently in use
    pub async fn llm_current(&self) -> Result<CurrentModel> {
        self.get_json("/api/llm/current", &[]).await
    }

    /// Test an API key against a provider without saving it
    pub async fn llm_test(
        &self,
        provider: &str,
        api_key: &str,
        model: Option<&str>,
    ) -> Result<TestOutcome> {
        let mut query = vec![
            ("provider", provider.to_string()),
            ("api_key", api_key.to_string()),
        ];
        if let Some(m) = model {
            query.push(("model", m.to_string()));
        }
        self.post_json("/api/llm/test", &query).await
    }

    /// Save a provider configuration, optionally making it current
    pub async fn llm_configure(
        &self,
        provider: &str,
        api_key: &str,
        model: Option<&str>,
        set_as_current: bool,
    ) -> Result<TestOutcome> {
        let mut query = vec![
            ("provider", provider.to_string()),
            ("api_key", api_key.to_string()),
        ];
        if let Some(m) = model {
            query.push(("model", m.to_string()));
        }
        query.push(("set_as_current", set_as_current.to_string()));
        self.post_json("/api/llm/config", &query).await
    }

    /// Switch the active provider/model
    pub async fn llm_switch(&self, provider: &str, model: Option<&str>) -> Result<TestOutcome> {
        let mut query = vec![("provider", provider.to_string())];
        if let Some(m) = model {
            query.push(("model", m.to_string()));
        }
        self.post_json("/api/llm/switch", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_catalog() {
        let json = r#"{
            "providers": [
                {"id": "qwen", "name": "Qwen", "models": ["qwen-turbo", "qwen-plus"],
                 "configured": true, "current": true},
                {"id": "deepseek", "name": "DeepSeek", "models": ["deepseek-chat"],
                 "configured": false}
            ],
            "current": {"provider": "qwen", "model": "qwen-turbo", "name": "Qwen"}
        }"#;
        let response: ProviderListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.providers.len(), 2);
        assert!(response.providers[0].current);
        assert!(!response.providers[1].configured);
        assert_eq!(response.current.unwrap().model, "qwen-turbo");
    }

    #[test]
    fn unconfigured_current_is_none() {
        let json = r#"{"provider": "none", "model": "none", "name": "unconfigured"}"#;
        let current: CurrentModel = serde_json::from_str(json).unwrap();
        assert!(current.is_none());
    }
}
