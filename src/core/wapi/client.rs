//! HTTP client for the Infoblox WAPI.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::{WapiError, WapiResult};
use super::request::WapiRequest;
use crate::core::config::InfobloxConfig;

/// Anything that can execute a WAPI request.
///
/// Tool handlers only see this trait, so tests can swap in a recording
/// implementation without a grid.
#[async_trait]
pub trait WapiApi: Send + Sync {
    /// Send one request and return the decoded JSON response.
    async fn send(&self, request: WapiRequest) -> WapiResult<Value>;

    /// Base URL requests are resolved against.
    fn base_url(&self) -> &str;
}

/// reqwest-backed WAPI client with basic authentication.
pub struct WapiClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl WapiClient {
    /// Build a client from the connection settings.
    pub fn new(config: &InfobloxConfig) -> WapiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs));

        if !config.verify_ssl {
            warn!("TLS certificate verification disabled for {}", config.host);
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|e| WapiError::setup(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }
}

#[async_trait]
impl WapiApi for WapiClient {
    async fn send(&self, request: WapiRequest) -> WapiResult<Value> {
        let url = request.url(&self.base_url)?;
        debug!("WAPI {}", request.describe());

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .basic_auth(&self.username, Some(&self.password));

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("WAPI {} returned {}", request.describe(), status);
            return Err(WapiError::status(status.as_u16(), text));
        }

        decode_body(&text)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Decode a successful response body. Empty bodies become `null`.
fn decode_body(text: &str) -> WapiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| WapiError::decode(e.to_string()))
}

impl std::fmt::Debug for WapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WapiClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
