//! HTTP client wrapper for the role-store API

use crate::config::Config;
use crate::error::{CliError, CliResult};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use std::fmt;
use std::time::{Duration, Instant};

/// API client for making authenticated requests
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: Config) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Absolute URL for a path below the API prefix
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    fn access_token(&self) -> CliResult<&str> {
        self.config
            .access_token
            .as_deref()
            .ok_or(CliError::NotAuthenticated)
    }

    /// Build an authenticated request
    pub(crate) fn request(&self, method: Method, path: &str) -> CliResult<RequestBuilder> {
        let token = self.access_token()?;
        Ok(self
            .client
            .request(method, self.url(path))
            .bearer_auth(token))
    }

    /// Send a request, logging method, URL, status and timing at debug level
    pub(crate) async fn send(&self, request: RequestBuilder) -> CliResult<Response> {
        let (client, request) = request.build_split();
        let request = request?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, url = %crate::logging::redact(url.as_str()), "request");
        let started = Instant::now();

        let response = client.execute(request).await?;

        tracing::debug!(
            %method,
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response"
        );

        Ok(response)
    }

    /// Turn a non-success response into a [`CliError`].
    ///
    /// `not_found` is used as the message when the service answers 404.
    pub(crate) async fn check(response: Response, not_found: Option<String>) -> CliResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            if let Some(message) = not_found {
                return Err(CliError::NotFound(message));
            }
        }

        Err(CliError::Api {
            status: status.as_u16(),
            message: error_body(status, response.text().await),
        })
    }
}

/// Message for an error response; a failed body read is reported instead of dropped
fn error_body<E: fmt::Display>(status: StatusCode, body: Result<String, E>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status = status.as_u16(), error = %e, "failed to read error body");
            format!("failed to read response body: {e}")
        }
    }
}
