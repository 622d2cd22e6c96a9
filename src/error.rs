//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
///
/// User-facing messages are kept in Spanish to preserve the service's
/// published API contract.
#[derive(Error, Debug)]
pub enum AppError {
    /// The required `file_name` field was missing or empty
    #[error("El campo 'file_name' es obligatorio.")]
    MissingFileName,

    /// File name contains path separators or parent-directory references
    #[error("El nombre de archivo '{0}' no es válido.")]
    InvalidFileName(String),

    /// A file with the given name already exists; the API never overwrites
    #[error("El archivo '{0}' ya existe.")]
    FileAlreadyExists(String),

    /// The requested file does not exist or is not a regular file
    #[error("Archivo '{0}' no encontrado.")]
    FileNotFound(String),

    /// Internal server error (catch-all for I/O, encoding, and parse failures)
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingFileName => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidFileName(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::FileAlreadyExists(_) => (StatusCode::CONFLICT, self.to_string()),
            AppError::FileNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
