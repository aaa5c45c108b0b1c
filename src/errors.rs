use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// The model API call itself failed (transport, auth, rate limit).
    #[error("Model call failed: {0}")]
    Transport(String),

    /// The sanitized response could not be decoded as a structured record.
    #[error("Failed to parse model response: {reason}")]
    Parse { reason: String, raw: String },

    /// The decoded record is missing fields or malformed.
    #[error("Invalid question record: {0}")]
    Validation(String),

    /// Every generation attempt failed; no question is available.
    #[error("No valid question after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Parse { .. } => "PARSE_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::ExhaustedRetries { .. } => "EXHAUSTED_RETRIES",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::Parse { .. } => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ExhaustedRetries { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Transport("down".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::ExhaustedRetries { attempts: 3 }.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ExhaustedRetries { attempts: 3 };
        assert_eq!(err.to_string(), "No valid question after 3 attempts");

        let err = AppError::Parse {
            reason: "expected value".into(),
            raw: "not json".into(),
        };
        assert_eq!(err.to_string(), "Failed to parse model response: expected value");
    }
}
