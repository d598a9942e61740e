use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::features::calculator::{ArithmeticError, Operation};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("Invalid operation '{0}': use supported operation: {}", Operation::supported_names())]
    InvalidOperation(String),
    #[error("Invalid numbers provided")]
    InvalidNumericInput,
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("{0}")]
    Unhandled(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn invalid_operation(name: impl Into<String>) -> Self {
        Self::InvalidOperation(name.into())
    }

    pub fn unhandled(message: String) -> Self {
        Self::Unhandled(message)
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidOperation(_) | Self::InvalidNumericInput => StatusCode::BAD_REQUEST,
            Self::Configuration(_)
            | Self::Arithmetic(_)
            | Self::Unhandled(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_bad_requests() {
        assert_eq!(
            AppError::invalid_operation("modulo").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidNumericInput.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn arithmetic_failures_are_server_errors() {
        let error = AppError::from(ArithmeticError::DivideByZero);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn invalid_operation_message_lists_supported_set() {
        let message = AppError::invalid_operation("modulo").to_string();
        assert!(message.starts_with("Invalid operation 'modulo'"));
        assert!(message.ends_with("add, subtract, multiply, divide"));
    }
}
