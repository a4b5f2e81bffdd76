// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Shopify Admin GraphQL API.
//!
//! Provides [`ShopifyClient`] which handles authentication, request
//! construction, GraphQL error envelopes, and transient error retry.

use std::time::Duration;

use posy_config::ShopifyConfig;
use posy_core::PosyError;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::types::{GraphQlRequest, GraphQlResponse};

/// HTTP client for Shopify Admin API communication.
///
/// Retries once on transient statuses (429, 5xx).
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    client: reqwest::Client,
    endpoint: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl ShopifyClient {
    /// Creates a client for the configured store.
    ///
    /// Fails with `PosyError::Config` when the store or token is missing.
    pub fn new(config: &ShopifyConfig) -> Result<Self, PosyError> {
        let endpoint = config
            .graphql_url()
            .ok_or_else(|| PosyError::Config("shopify.store is not set".into()))?;
        let token = config
            .access_token
            .as_deref()
            .ok_or_else(|| PosyError::Config("shopify.access_token is not set".into()))?;

        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(token)
            .map_err(|e| PosyError::Config(format!("invalid access token header value: {e}")))?;
        token.set_sensitive(true);
        headers.insert("X-Shopify-Access-Token", token);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PosyError::SourceUnavailable {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint,
            max_retries: 1,
            retry_delay: Duration::from_secs(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Overrides the endpoint (for testing with wiremock).
    #[cfg(test)]
    pub fn with_endpoint(mut self, url: String) -> Self {
        self.endpoint = url;
        self.retry_delay = Duration::from_millis(10);
        self
    }

    /// Runs a GraphQL query and decodes its `data`.
    ///
    /// A response carrying `errors` fails even when partial data is present.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, PosyError> {
        let request = GraphQlRequest { query, variables };
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying Shopify request after transient error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .json(&request)
                .send()
                .await
                .map_err(|e| PosyError::SourceUnavailable {
                    message: format!("Shopify request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "Shopify response received");

            if status.is_success() {
                let body = response
                    .text()
                    .await
                    .map_err(|e| PosyError::SourceUnavailable {
                        message: format!("failed to read Shopify response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return decode(&body);
            }

            let body = response.text().await.unwrap_or_default();
            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(PosyError::source_unavailable(format!(
                    "Shopify returned {status}"
                )));
                continue;
            }

            return Err(PosyError::source_unavailable(format!(
                "Shopify returned {status}: {}",
                truncate(&body, 500)
            )));
        }

        Err(last_error
            .unwrap_or_else(|| PosyError::source_unavailable("Shopify request failed after retries")))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, PosyError> {
    let envelope: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|e| PosyError::SourceUnavailable {
            message: format!("failed to parse Shopify response: {e}"),
            source: Some(Box::new(e)),
        })?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(PosyError::source_unavailable(format!(
            "Shopify GraphQL errors: {}",
            messages.join("; ")
        )));
    }

    envelope
        .data
        .ok_or_else(|| PosyError::source_unavailable("Shopify response has no data"))
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    status.as_u16() == 429 || status.is_server_error()
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShopData;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ShopifyClient {
        let config = ShopifyConfig {
            store: Some("test-shop".into()),
            access_token: Some("shpat_test".into()),
            ..ShopifyConfig::default()
        };
        ShopifyClient::new(&config)
            .unwrap()
            .with_endpoint(format!("{}/graphql.json", server.uri()))
    }

    #[test]
    fn endpoint_uses_versioned_admin_path() {
        let config = ShopifyConfig {
            store: Some("test-shop".into()),
            access_token: Some("shpat_test".into()),
            ..ShopifyConfig::default()
        };
        let client = ShopifyClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://test-shop.myshopify.com/admin/api/2025-07/graphql.json"
        );
    }

    #[test]
    fn missing_credentials_are_config_errors() {
        let err = ShopifyClient::new(&ShopifyConfig::default()).unwrap_err();
        assert!(matches!(err, PosyError::Config(_)));
    }

    #[tokio::test]
    async fn query_sends_token_and_decodes_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql.json"))
            .and(header("X-Shopify-Access-Token", "shpat_test"))
            .and(body_partial_json(serde_json::json!({"query": "{ shop { name } }"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"shop": {"name": "Prosto"}}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let data: ShopData = test_client(&server)
            .query("{ shop { name } }", serde_json::Value::Null)
            .await
            .unwrap();
        assert_eq!(data.shop.name, "Prosto");
    }

    #[tokio::test]
    async fn graphql_errors_fail_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "errors": [{"message": "Throttled"}]
            })))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .query::<ShopData>("{ shop { name } }", serde_json::Value::Null)
            .await
            .unwrap_err();
        assert!(matches!(err, PosyError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("Throttled"), "got: {err}");
    }

    #[tokio::test]
    async fn retries_once_on_429() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"shop": {"name": "ok"}}})),
            )
            .mount(&server)
            .await;

        let data: ShopData = test_client(&server)
            .query("{ shop { name } }", serde_json::Value::Null)
            .await
            .unwrap();
        assert_eq!(data.shop.name, "ok");
    }

    #[tokio::test]
    async fn gives_up_after_repeated_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .query::<ShopData>("{ shop { name } }", serde_json::Value::Null)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[tokio::test]
    async fn unauthorized_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .query::<ShopData>("{ shop { name } }", serde_json::Value::Null)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("bad token"), "got: {err}");
    }
}
