//! Response bodies shared with clients.

use serde::{Deserialize, Serialize};

/// Error body returned for every failed request: `{ "message": "..." }`.
///
/// For validation failures the message describes the first offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorResponse::new("title is required")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "title is required" }));
    }
}
