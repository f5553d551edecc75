//! Global response interceptor.
//!
//! Every response the client receives passes through `intercept` before the
//! caller sees it. Successes are unwrapped to their payload. Failures are
//! logged, reported through the installed `Notifier`, and handed back to the
//! caller unchanged.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::sync::Arc;

use super::http::{HttpError, Response};

/// Shown when the server responded without a usable message.
pub const REQUEST_FAILED: &str = "请求失败";
/// Shown when no response arrived at all.
pub const NETWORK_FAILED: &str = "网络连接失败";

/// Sink for user-facing error notifications.
pub trait Notifier: Send + Sync {
    fn error(&self, text: &str);
}

/// Notification text for a failed request.
pub fn failure_text(err: &HttpError) -> &str {
    if err.has_response() {
        err.server_message().unwrap_or(REQUEST_FAILED)
    } else {
        NETWORK_FAILED
    }
}

/// The response interceptor installed on the HTTP client.
#[derive(Clone)]
pub struct ResponseInterceptor {
    notifier: Arc<dyn Notifier>,
}

impl ResponseInterceptor {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Unwrap a success to its payload, or notify and re-raise a failure.
    ///
    /// # Errors
    ///
    /// Returns the input error unchanged.
    pub fn intercept<T>(&self, result: Result<Response<T>, HttpError>) -> Result<T, HttpError> {
        match result {
            Ok(response) => Ok(response.data),
            Err(err) => {
                match err.status() {
                    Some(status) => log::error!("API Error [{status}]: {err}"),
                    None => log::error!("API Error: {err}"),
                }
                self.notifier.error(failure_text(&err));
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for ResponseInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseInterceptor").finish_non_exhaustive()
    }
}
