//! HTTP client for the code-improvement backend.

use std::time::Duration;

use reqwest::Client;

use crate::error::{RequestError, UNKNOWN_SERVER_ERROR};
use crate::types::{ErrorBody, ProcessRequest, ProcessResponse};

/// Path of the single endpoint the client talks to.
pub const PROCESS_PATH: &str = "/process_code";

/// Thin wrapper over `reqwest::Client` bound to one backend base URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ProcessClient {
    http: Client,
    base_url: String,
}

impl ProcessClient {
    /// Builds a client for `base_url` (e.g. `http://127.0.0.1:5000`).
    ///
    /// `timeout` of `None` leaves requests unbounded: a backend that never
    /// answers keeps the form busy until it does.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http: builder.build()?, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts `request` to `/process_code` and decodes the reply.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Server`] for any non-success status, carrying the
    ///   body's `error` field when present.
    /// - [`RequestError::Decode`] when a success body is not the expected JSON.
    /// - [`RequestError::Transport`] when no response arrived.
    pub async fn process(&self, request: &ProcessRequest) -> Result<ProcessResponse, RequestError> {
        let url = format!("{}{}", self.base_url, PROCESS_PATH);
        tracing::info!(%url, model = %request.model, code_len = request.code.len(), "sending process request");

        let res = self.http.post(&url).json(request).send().await?;
        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_owned());
            tracing::warn!(status = status.as_u16(), %message, "backend returned an error");
            return Err(RequestError::Server { status: status.as_u16(), message });
        }

        let response: ProcessResponse =
            serde_json::from_slice(&body).map_err(RequestError::Decode)?;
        tracing::debug!(
            has_code = response.improved_code.is_some(),
            has_explanation = response.explanation.is_some(),
            "process request succeeded"
        );
        Ok(response)
    }
}
