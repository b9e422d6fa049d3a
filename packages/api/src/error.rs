//! Error taxonomy for calls against the scheduling API.

use serde::Deserialize;

/// A failed API call.
///
/// `Status` displays as the bare message so views can show it verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Status` error from a non-2xx response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: message_from_body(status, body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The message the server put in its error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.starts_with(GENERIC_PREFIX) => {
                Some(message)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

const GENERIC_PREFIX: &str = "Request failed (";

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Message carried by an error payload, or the generic status fallback.
pub fn message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("{GENERIC_PREFIX}{status})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins() {
        let body = r#"{"error":"Invalid credentials","message":"ignored"}"#;
        assert_eq!(message_from_body(400, body), "Invalid credentials");
    }

    #[test]
    fn test_message_field_fallback() {
        let body = r#"{"status":500,"message":"Internal failure"}"#;
        assert_eq!(message_from_body(500, body), "Internal failure");
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(message_from_body(502, "<html>Bad gateway</html>"), "Request failed (502)");
        assert_eq!(message_from_body(404, ""), "Request failed (404)");
        assert_eq!(message_from_body(400, r#"{"error":"  "}"#), "Request failed (400)");
    }

    #[test]
    fn test_display_is_verbatim_message() {
        let err = ApiError::from_response(403, r#"{"error":"Admin only"}"#);
        assert_eq!(err.to_string(), "Admin only");
        assert!(err.is_forbidden());
        assert!(!err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Admin only"));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
        assert_eq!(ApiError::from_response(500, "").server_message(), None);
    }
}
