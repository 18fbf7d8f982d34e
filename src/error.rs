use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every error response.
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A create or update payload lacking one or more required fields.
#[derive(Debug, Error, PartialEq)]
#[error("missing required field(s): {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Error)]
pub enum BlogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("blog post {0} not found")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for BlogError {
    fn status_code(&self) -> StatusCode {
        match self {
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::NotFound(_) => StatusCode::NOT_FOUND,
            BlogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            BlogError::Database(err) => {
                tracing::error!(error = %err, "database operation failed");
                String::from("internal server error")
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ApiError::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_missing_fields() {
        let err = ValidationError {
            missing: vec!["title", "url"],
        };
        assert_eq!(err.to_string(), "missing required field(s): title, url");
    }

    #[test]
    fn test_status_codes() {
        let validation = BlogError::from(ValidationError {
            missing: vec!["url"],
        });
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BlogError::NotFound(7).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BlogError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
