//! Error responses (RFC 7807 Problem Details).

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Extension member mirroring `detail`; existing clients read the
    /// message from here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Seconds until a throttled request may be retried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u64>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            error: None,
            retry_after_secs: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.error = Some(detail.clone());
        self.detail = Some(detail);
        self
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn too_many_requests(retry_after_secs: u64) -> Self {
        let mut error = Self::new(429, "Too Many Requests").with_detail(format!(
            "Rate limit exceeded. Try again in {retry_after_secs} seconds."
        ));
        error.retry_after_secs = Some(retry_after_secs);
        error
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_document_shape() {
        let json = serde_json::to_value(ErrorResponse::bad_request("Invalid name")).unwrap();

        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "Invalid name");
        assert_eq!(json["error"], "Invalid name");
        assert!(json.get("retry_after_secs").is_none());
    }

    #[test]
    fn test_internal_error_has_no_message() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(json["status"], 500);
        assert!(json.get("detail").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_too_many_requests_carries_retry_hint() {
        let json = serde_json::to_value(ErrorResponse::too_many_requests(42)).unwrap();

        assert_eq!(json["status"], 429);
        assert_eq!(json["retry_after_secs"], 42);
    }
}
