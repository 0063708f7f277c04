//! Error handling - RFC 7807 compliant responses.

use std::fmt;
use std::time::Duration;

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header};
use timeline_core::TimelineError;
use timeline_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    TooManyRequests { retry_after: Duration },
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::TooManyRequests { retry_after } => {
                write!(f, "Too many requests, retry after {:?}", retry_after)
            }
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

/// Whole seconds a client should wait, rounded up.
fn retry_after_secs(retry_after: Duration) -> u64 {
    retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0)
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::TooManyRequests { retry_after } => {
                let secs = retry_after_secs(*retry_after);
                return HttpResponse::TooManyRequests()
                    .insert_header((header::RETRY_AFTER, secs.to_string()))
                    .json(ErrorResponse::too_many_requests(secs));
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<TimelineError> for AppError {
    fn from(err: TimelineError) -> Self {
        match err {
            TimelineError::Validation(e) => AppError::BadRequest(e.to_string()),
            TimelineError::RateLimited { retry_after } => AppError::TooManyRequests { retry_after },
            TimelineError::NotFound(id) => {
                AppError::NotFound(format!("Timeline post {} not found", id))
            }
            TimelineError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_core::{RepoError, ValidationError};

    #[test]
    fn test_timeline_errors_map_to_distinct_statuses() {
        let cases = [
            (
                AppError::from(TimelineError::Validation(ValidationError::InvalidEmail)),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(TimelineError::RateLimited {
                    retry_after: Duration::from_secs(5),
                }),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                AppError::from(TimelineError::NotFound(3)),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(TimelineError::Storage(RepoError::Connection(
                    "refused".to_string(),
                ))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status);
        }
    }

    #[test]
    fn test_retry_after_rounds_up() {
        assert_eq!(retry_after_secs(Duration::from_secs(40)), 40);
        assert_eq!(retry_after_secs(Duration::from_millis(39_001)), 40);
        assert_eq!(retry_after_secs(Duration::ZERO), 0);
    }
}
