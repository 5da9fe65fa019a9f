//! # API error taxonomy
//!
//! Two kinds of failure reach the views: transport failures (connection
//! refused, response body that fails to decode) and application failures
//! (non-2xx status with a server-supplied `detail` message). Both are
//! surfaced inline at the call site and never retried.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `detail` is the
    /// server's own message, surfaced verbatim.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The request never completed, or the response body failed to decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Build an application error from a non-success response body, falling
/// back to a generic message when the body carries no detail.
pub(crate) fn from_response(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Api { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_surfaced_verbatim() {
        let err = from_response(401, r#"{"detail": "Incorrect password"}"#);
        assert_eq!(err.to_string(), "Incorrect password");
        match err {
            ApiError::Api { status, .. } => assert_eq!(status, 401),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_falls_back_to_status() {
        let err = from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn missing_detail_falls_back_to_status() {
        let err = from_response(500, r#"{"error": "boom"}"#);
        assert_eq!(err.to_string(), "request failed with status 500");
    }
}
