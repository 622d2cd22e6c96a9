//! File store API handlers
//!
//! Provides HTTP endpoints for listing, creating, and reading files.
//! Uses the file service layer for filesystem logic.

use crate::error::AppError;
use crate::services::files::FileStore;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request to create a file
#[derive(Deserialize)]
pub struct CreateFileRequest {
    /// Name for the new file; required and non-empty
    pub file_name: Option<String>,
    /// Content to write, defaults to an empty file
    #[serde(default)]
    pub content: String,
}

/// Response for a successful file creation
#[derive(Debug, Serialize)]
pub struct CreateFileResponse {
    /// Human-readable confirmation message
    pub message: String,
}

/// GET /files - List the names of all stored files
pub async fn list_files(
    State(store): State<Arc<FileStore>>,
) -> Result<Json<Vec<String>>, AppError> {
    let names = store.list().await?;
    Ok(Json(names))
}

/// POST /files - Create a new file from a JSON body
///
/// Takes the raw body instead of the `Json` extractor: a payload that is not
/// valid JSON is an internal error (500) in this API's contract, while the
/// extractor would answer 400 on its own.
pub async fn create_file(
    State(store): State<Arc<FileStore>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateFileResponse>), AppError> {
    let request: CreateFileRequest = serde_json::from_slice(&body)
        .map_err(|e| anyhow::anyhow!("Error al procesar la solicitud: {}", e))?;

    let file_name = request
        .file_name
        .filter(|name| !name.is_empty())
        .ok_or(AppError::MissingFileName)?;

    store.create(&file_name, &request.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateFileResponse {
            message: format!("Archivo '{}' creado exitosamente.", file_name),
        }),
    ))
}

/// GET /files/:file_name - Return a file's content as plain text
pub async fn get_file_content(
    State(store): State<Arc<FileStore>>,
    Path(file_name): Path<String>,
) -> Result<String, AppError> {
    store.read(&file_name).await
}
