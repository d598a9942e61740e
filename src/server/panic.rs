use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::core::error::AppError;

/// Turns a panic inside a handler into a logged 500 with the usual error body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "request handler panicked".to_string()
    };

    tracing::error!(panic = %message, "unhandled error while processing request");
    AppError::unhandled(message).into_response()
}
