//! Mapping from service failures to HTTP responses.

use crate::todo::services::{ErrorKind, TodoServiceError};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The identity header is missing or malformed.
    #[error("missing or malformed x-user-id header")]
    Unauthenticated,

    /// A path segment does not name an existing resource.
    #[error("resource not found")]
    NotFound,

    /// A form field could not be interpreted.
    #[error("{field}: {message}")]
    InvalidField {
        /// Offending form field.
        field: &'static str,
        /// Message shown to the user.
        message: String,
    },

    /// A service operation failed.
    #[error(transparent)]
    Service(#[from] TodoServiceError),

    /// A page template failed to render.
    #[error("page rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl HttpError {
    fn field_error(&self) -> Option<(&'static str, String)> {
        match self {
            Self::InvalidField { field, message } => Some((*field, message.clone())),
            Self::Service(TodoServiceError::Validation(err)) => Some((err.field(), err.to_string())),
            _ => None,
        }
    }
}

impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(err) => match err.kind() {
                ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::NotFound | ErrorKind::Forbidden => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if let Some((field, message)) = self.field_error() {
            let errors = BTreeMap::from([(field, vec![message])]);
            return HttpResponse::build(status).json(json!({ "errors": errors }));
        }
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(status.canonical_reason().unwrap_or("Error"))
    }
}
