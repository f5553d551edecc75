//! The application's single HTTP client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: requests fail with `HttpError::Network` since there is no
//! browser to send them from.
//!
//! ERROR HANDLING
//! ==============
//! Every call goes through the installed `ResponseInterceptor`, so callers
//! only ever see the payload or the original `HttpError`. Notification of
//! failures has already happened by the time a caller sees the `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::interceptor::{Notifier, ResponseInterceptor};
use super::types::ErrorBody;

// =============================================================================
// ERROR
// =============================================================================

/// Failure of a single HTTP request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// The server responded with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<ErrorBody> },

    /// The server responded but the payload could not be read.
    #[error("response decode failed (status {status}): {reason}")]
    Decode { status: u16, reason: String },

    /// No response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The request could not be built.
    #[error("request build failed: {0}")]
    Encode(String),
}

impl HttpError {
    /// Whether the failure carries a server response.
    pub fn has_response(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Decode { .. })
    }

    /// Status code of the server response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Network(_) | Self::Encode(_) => None,
        }
    }

    /// Non-empty `message` field of a structured server error.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body: Some(body), .. } => body.message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// A response envelope before interception.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response<T> {
    pub status: u16,
    pub data: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request before it is handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Encode` if the body cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, HttpError> {
        let text = serde_json::to_string(body).map_err(|e| HttpError::Encode(e.to_string()))?;
        self.body = Some(text);
        Ok(self)
    }

    /// Absolute URL of this request relative to `base`.
    pub fn url(&self, base: &str) -> String {
        let mut url = join_url(base, &self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

/// Join `path` onto `base` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Split a raw response into success or `HttpError::Status`.
///
/// # Errors
///
/// Returns `HttpError::Status` for any status outside `200..=299`.
pub fn classify(status: u16, text: String) -> Result<Response<String>, HttpError> {
    if (200..300).contains(&status) {
        return Ok(Response { status, data: text });
    }
    let body = ErrorBody::parse(&text);
    Err(HttpError::Status { status, body })
}

/// Decode a JSON payload.
///
/// # Errors
///
/// Returns `HttpError::Decode` if the payload is not valid JSON for `T`.
pub fn decode_json<T: DeserializeOwned>(response: Response<String>) -> Result<Response<T>, HttpError> {
    let status = response.status;
    serde_json::from_str(&response.data)
        .map(|data| Response { status, data })
        .map_err(|e| HttpError::Decode { status, reason: e.to_string() })
}

/// Drop the payload of an empty-body response.
pub fn decode_empty(response: Response<String>) -> Response<()> {
    Response { status: response.status, data: () }
}

// =============================================================================
// CLIENT
// =============================================================================

/// The intercepted HTTP client, provided app-wide through context.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    interceptor: ResponseInterceptor,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            base_url: base_url.into(),
            interceptor: ResponseInterceptor::new(notifier),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and decode a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns the `HttpError` after the interceptor has reported it.
    pub async fn json<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, HttpError> {
        let result = self.execute(spec).await.and_then(decode_json);
        self.interceptor.intercept(result)
    }

    /// Send a request and return the payload as text.
    ///
    /// # Errors
    ///
    /// Returns the `HttpError` after the interceptor has reported it.
    pub async fn text(&self, spec: RequestSpec) -> Result<String, HttpError> {
        let result = self.execute(spec).await;
        self.interceptor.intercept(result)
    }

    /// Send a request whose success carries no payload.
    ///
    /// # Errors
    ///
    /// Returns the `HttpError` after the interceptor has reported it.
    pub async fn empty(&self, spec: RequestSpec) -> Result<(), HttpError> {
        let result = self.execute(spec).await.map(decode_empty);
        self.interceptor.intercept(result)
    }

    /// Route an already-built failure through the interceptor.
    ///
    /// # Errors
    ///
    /// Always returns `err`.
    pub fn reject<T>(&self, err: HttpError) -> Result<T, HttpError> {
        self.interceptor.intercept(Err(err))
    }

    /// POST a multipart form (file uploads) and return the payload as text.
    ///
    /// The browser sets the multipart `Content-Type` with its boundary.
    ///
    /// # Errors
    ///
    /// Returns the `HttpError` after the interceptor has reported it.
    #[cfg(feature = "csr")]
    pub async fn upload(&self, path: &str, form: web_sys::FormData) -> Result<String, HttpError> {
        let url = join_url(&self.base_url, path);
        log::debug!("Post {url} (multipart)");
        let result = match gloo_net::http::Request::post(&url).body(form) {
            Ok(request) => Self::send(request).await,
            Err(e) => Err(HttpError::Encode(e.to_string())),
        };
        self.interceptor.intercept(result)
    }

    #[cfg(feature = "csr")]
    async fn send(request: gloo_net::http::Request) -> Result<Response<String>, HttpError> {
        let resp = request.send().await.map_err(|e| HttpError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| HttpError::Decode {
            status,
            reason: e.to_string(),
        })?;
        classify(status, text)
    }

    async fn execute(&self, spec: RequestSpec) -> Result<Response<String>, HttpError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = spec.url(&self.base_url);
            log::debug!("{:?} {url}", spec.method);
            let builder = match spec.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            let request = match spec.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| HttpError::Encode(e.to_string()))?,
                None => builder.build().map_err(|e| HttpError::Encode(e.to_string()))?,
            };
            Self::send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(HttpError::Network(format!(
                "{} is only reachable from the browser",
                spec.url(&self.base_url)
            )))
        }
    }
}

/// The `HttpClient` provided by `App`.
pub fn use_http() -> HttpClient {
    leptos::prelude::expect_context::<HttpClient>()
}
