//! HTTP client for the platform backend
//!
//! Thin typed wrapper over reqwest. Every adapter in [`crate::api`] goes
//! through the helpers here so status mapping is uniform: a 503 from any
//! feature endpoint means "feature not enabled" and is reported distinctly
//! from a generic backend failure.

use crate::config::Config;
use crate::error::{GraphbookError, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the document knowledge-graph platform API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GraphbookError::Http)?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GraphbookError::Config(format!("invalid base URL: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GraphbookError::Config(format!("invalid endpoint {}: {}", path, e)))
    }

    /// Endpoint with a trailing path segment that needs percent-encoding
    /// (entity texts can contain spaces, slashes, CJK characters).
    pub(crate) fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| GraphbookError::Config("base URL cannot be a base".to_string()))?
            .push(segment);
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        self.get_json_at(url, query).await
    }

    pub(crate) async fn get_json_at<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).query(query).send().await?;
        decode(response).await
    }

    /// POST with query parameters and an empty body (the backend takes
    /// all QA/LLM parameters as query strings).
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        self.post_json_at(url, query).await
    }

    pub(crate) async fn post_json_at<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!("POST {}", url);
        let response = self.http.post(url).query(query).send().await?;
        decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        decode(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {} (multipart)", url);
        let response = self.http.post(url).multipart(form).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let body = response.text().await.unwrap_or_default();
    Err(api_error(status.as_u16(), &body))
}

/// Map a non-2xx response to an error, extracting the backend's
/// `{"detail": ...}` message when present.
pub(crate) fn api_error(status: u16, body: &str) -> GraphbookError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| {
            if body.is_empty() {
                "no detail provided".to_string()
            } else {
                body.to_string()
            }
        });

    match status {
        503 => GraphbookError::FeatureDisabled(detail),
        404 => GraphbookError::DocumentNotFound(detail),
        _ => GraphbookError::Api { status, detail },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_503_to_feature_disabled() {
        let err = api_error(503, r#"{"detail": "Knowledge Graph not available"}"#);
        match err {
            GraphbookError::FeatureDisabled(detail) => {
                assert_eq!(detail, "Knowledge Graph not available");
            }
            other => panic!("expected FeatureDisabled, got {:?}", other),
        }
    }

    #[test]
    fn maps_404_to_not_found() {
        let err = api_error(404, r#"{"detail": "Document not found"}"#);
        assert!(matches!(err, GraphbookError::DocumentNotFound(_)));
        assert_eq!(err.exit_code(), crate::error::exit_codes::NOT_FOUND);
    }

    #[test]
    fn falls_back_to_raw_body_without_detail() {
        let err = api_error(500, "internal blowup");
        match err {
            GraphbookError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "internal blowup");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn encodes_entity_path_segments() {
        let config = Config {
            base_url: "http://localhost:8000".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let url = client
            .endpoint_with_segment("/api/kg/entity", "machine learning")
            .unwrap();
        assert_eq!(url.path(), "/api/kg/entity/machine%20learning");
    }
}
