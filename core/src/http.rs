//! HTTP request and response types described as plain data.
//!
//! # Design
//! `TransportClient` builds an `HttpRequest`, hands it to a `Transport`
//! implementation, and classifies the `HttpResponse` it gets back. Keeping
//! the exchange as data lets tests script responses without a socket, while
//! `UreqTransport` performs the real round trip in production.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ApiError;

/// Connect timeout and overall request timeout, each.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// POST and PUT must carry a body; GET and DELETE never send one.
    pub fn requires_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(ApiError::InvalidArgument(format!("Invalid HTTP method: {s}"))),
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP round trip.
///
/// Implementations return every response that arrives, whatever its status;
/// only faults below HTTP become `ApiError::Transport`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent.
///
/// Redirects are not followed: a 3xx comes back as-is so the status
/// contract can reject it.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .timeout_connect(Some(REQUEST_TIMEOUT))
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(url.as_str());
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Delete, _) => {
                let mut builder = self.agent.delete(url.as_str());
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post | HttpMethod::Put, body) => {
                let mut builder = if method == HttpMethod::Post {
                    self.agent.post(url.as_str())
                } else {
                    self.agent.put(url.as_str())
                };
                for (name, value) in &headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                let body = body.unwrap_or_default();
                builder.send(body.as_bytes())
            }
        };

        let mut response = result.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "HTTP transport failure");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("PUT".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn unknown_method_is_invalid_argument() {
        let err = "INVALID".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid HTTP method: INVALID");
    }

    #[test]
    fn only_post_and_put_require_body() {
        assert!(HttpMethod::Post.requires_body());
        assert!(HttpMethod::Put.requires_body());
        assert!(!HttpMethod::Get.requires_body());
        assert!(!HttpMethod::Delete.requires_body());
    }

    #[test]
    fn success_range_is_200_inclusive_to_300_exclusive() {
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(299, "").is_success());
        assert!(!HttpResponse::new(300, "").is_success());
    }
}
