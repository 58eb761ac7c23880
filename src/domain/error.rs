use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Internal(String),
    ValidationError(String),
    ConfigError(String),
    LLMError(String),
    NoJsonFound(String),
    MalformedJson(String),
    SecurityError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::LLMError(msg) => write!(f, "LLM error: {}", msg),
            AppError::NoJsonFound(msg) => write!(f, "No JSON found: {}", msg),
            AppError::MalformedJson(msg) => write!(f, "Malformed JSON: {}", msg),
            AppError::SecurityError(msg) => write!(f, "Security error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Message sent to HTTP clients. Extraction failures carry a raw output
    /// preview for the logs, which is not echoed back.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NoJsonFound(_) => {
                "Could not extract a JSON object from the model response.".to_string()
            }
            AppError::MalformedJson(msg) => {
                format!("The model response contained invalid JSON: {}", msg)
            }
            AppError::ConfigError(msg) | AppError::ValidationError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.public_message(),
        })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
