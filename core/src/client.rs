//! Generic HTTP wrapper used by every client of the booking API.
//!
//! # Design
//! `TransportClient` holds a base URL and a `Transport` and carries no
//! mutable state between calls. `build_request` turns a (method, path, body)
//! triple into an `HttpRequest`, rejecting a missing POST/PUT body before any
//! I/O. `request` executes it and applies the status contract: `[200, 300)`
//! yields the body, anything else becomes `ApiError::Remote`. Nothing is
//! retried.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};

/// Base endpoint of the booking REST API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/bookings";

/// Synchronous, stateless HTTP client with a status-code success contract.
#[derive(Debug, Clone)]
pub struct TransportClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl TransportClient<UreqTransport> {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl Default for TransportClient<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> TransportClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Describe a request without sending it.
    ///
    /// GET and DELETE drop any supplied body.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        let body = if method.requires_body() {
            match body {
                Some(body) => Some(body.to_string()),
                None => {
                    return Err(ApiError::InvalidArgument(format!(
                        "{method} request requires a body."
                    )))
                }
            }
        } else {
            None
        };

        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    /// Perform one round trip and return the response body on 2xx.
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, ApiError> {
        let request = self.build_request(method, path, body)?;
        tracing::debug!(%method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        check_status(response)
    }

    pub fn get(&self, path: &str) -> Result<String, ApiError> {
        self.request(HttpMethod::Get, path, None)
    }

    pub fn post(&self, path: &str, body: &str) -> Result<String, ApiError> {
        self.request(HttpMethod::Post, path, Some(body))
    }

    pub fn put(&self, path: &str, body: &str) -> Result<String, ApiError> {
        self.request(HttpMethod::Put, path, Some(body))
    }

    pub fn delete(&self, path: &str) -> Result<String, ApiError> {
        self.request(HttpMethod::Delete, path, None)
    }
}

/// Map non-2xx responses to `ApiError::Remote` carrying status and body.
fn check_status(response: HttpResponse) -> Result<String, ApiError> {
    if response.is_success() {
        return Ok(response.body);
    }
    tracing::debug!(status = response.status, "request rejected by server");
    Err(ApiError::Remote {
        status: response.status,
        body: response.body,
    })
}
