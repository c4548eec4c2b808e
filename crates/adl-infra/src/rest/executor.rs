use std::time::Duration;

use adl_core::ports::StoreError;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::rest::ports::RestExecutor;

/// Error body returned by PostgREST on rejected requests.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    code: Option<String>,
}

/// reqwest-backed executor for a Supabase project's `/rest/v1` endpoint.
pub struct PostgrestExecutor {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
}

impl PostgrestExecutor {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }
}

#[async_trait::async_trait]
impl RestExecutor for PostgrestExecutor {
    async fn select<T>(&self, resource: &str, params: &[(String, String)]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = format!("{}/{}", self.rest_url, resource);
        debug!(url = %url, ?params, "Sending store request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let err = map_status_error(status, &body);
            warn!(status = status.as_u16(), error = %err, "Store request failed");
            return Err(err);
        }

        serde_json::from_slice::<Vec<T>>(&body).map_err(|e| StoreError::decode(e.to_string()))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> StoreError {
    if error.is_timeout() {
        StoreError::transport("request timed out")
    } else if error.is_connect() {
        StoreError::transport(format!("connection failed: {error}"))
    } else {
        StoreError::transport(error.to_string())
    }
}

/// 4xx means the store understood and rejected the request; everything else is
/// treated as the store being unavailable.
fn map_status_error(status: StatusCode, body: &[u8]) -> StoreError {
    let message = match serde_json::from_slice::<PostgrestErrorBody>(body) {
        Ok(parsed) => describe(parsed, status),
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            }
        }
    };

    if status.is_client_error() {
        StoreError::query(status.as_u16(), message)
    } else {
        StoreError::transport(format!("HTTP {}: {}", status.as_u16(), message))
    }
}

fn describe(body: PostgrestErrorBody, status: StatusCode) -> String {
    let mut message = body
        .message
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
    if let Some(details) = body.details.filter(|d| !d.is_empty()) {
        message = format!("{message} ({details})");
    }
    if let Some(hint) = body.hint.filter(|h| !h.is_empty()) {
        message = format!("{message}; hint: {hint}");
    }
    if let Some(code) = body.code.filter(|c| !c.is_empty()) {
        message = format!("[{code}] {message}");
    }
    message
}
