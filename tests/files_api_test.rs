//! Integration tests for the file store API end-to-end flow
//!
//! These tests drive the HTTP handlers through the library crate, backed by
//! a real temporary store directory:
//! 1. Create a file via POST body
//! 2. Read it back as plain text
//! 3. List the store
//! 4. Error propagation for conflicts and invalid names

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use file_store_service::api::files::{create_file, get_file_content, list_files};
use file_store_service::error::AppError;
use file_store_service::services::files::FileStore;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

/// Helper to create a store over a fresh temporary root
async fn create_test_store() -> (TempDir, Arc<FileStore>) {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = Arc::new(FileStore::new(temp_dir.path().join("files")));
    store.init().await.expect("Store init should succeed");
    (temp_dir, store)
}

fn json_body(value: serde_json::Value) -> Bytes {
    Bytes::from(value.to_string())
}

/// Full create -> read -> list scenario on a fresh store
#[tokio::test]
async fn test_create_read_list_scenario() {
    let (_temp_dir, store) = create_test_store().await;

    // POST /files
    let body = json_body(serde_json::json!({
        "file_name": "notes.txt",
        "content": "hello"
    }));
    let (status, response) = create_file(State(store.clone()), body)
        .await
        .expect("Create should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response.message, "Archivo 'notes.txt' creado exitosamente.");

    // GET /files/notes.txt
    let content = get_file_content(State(store.clone()), Path("notes.txt".to_string()))
        .await
        .expect("Read should succeed");
    assert_eq!(content, "hello");

    // GET /files
    let names = list_files(State(store)).await.expect("List should succeed");
    assert_eq!(names.0, vec!["notes.txt".to_string()]);
}

/// Replaying the same create must conflict and leave the content untouched
#[tokio::test]
async fn test_duplicate_create_conflicts_and_preserves_content() {
    let (_temp_dir, store) = create_test_store().await;

    let body = serde_json::json!({
        "file_name": "notes.txt",
        "content": "hello"
    });

    create_file(State(store.clone()), json_body(body.clone()))
        .await
        .expect("First create should succeed");

    let error = create_file(State(store.clone()), json_body(body))
        .await
        .expect_err("Second create should conflict");
    assert_eq!(error.to_string(), "El archivo 'notes.txt' ya existe.");
    assert_eq!(
        error.into_response().status(),
        StatusCode::CONFLICT,
        "Conflict must map to 409"
    );

    let content = get_file_content(State(store), Path("notes.txt".to_string()))
        .await
        .expect("Read should succeed");
    assert_eq!(content, "hello");
}

/// Round trip holds for a variety of names and contents
#[tokio::test]
async fn test_round_trip_identity_on_content() {
    let (_temp_dir, store) = create_test_store().await;

    let cases = [
        ("plain.txt", "plain text"),
        ("empty.txt", ""),
        ("unicode.txt", "acentuación y ñ"),
        ("multiline.txt", "line one\nline two\n"),
        ("no-extension", "still a file"),
    ];

    for (name, content) in cases {
        let body = json_body(serde_json::json!({
            "file_name": name,
            "content": content
        }));
        create_file(State(store.clone()), body)
            .await
            .expect("Create should succeed");

        let read_back = get_file_content(State(store.clone()), Path(name.to_string()))
            .await
            .expect("Read should succeed");
        assert_eq!(read_back, content, "Content mismatch for {}", name);
    }
}

/// Missing and empty file names are rejected with 400 before any write
#[tokio::test]
async fn test_validation_errors_map_to_bad_request() {
    let (_temp_dir, store) = create_test_store().await;

    for body in [
        serde_json::json!({ "content": "orphan" }),
        serde_json::json!({ "file_name": "", "content": "orphan" }),
    ] {
        let error = create_file(State(store.clone()), json_body(body))
            .await
            .expect_err("Create should be rejected");
        assert_eq!(error.to_string(), "El campo 'file_name' es obligatorio.");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    let names = list_files(State(store)).await.expect("List should succeed");
    assert!(names.0.is_empty(), "No file may be created on validation failure");
}

/// Names that would escape the store root are rejected with 400
#[tokio::test]
async fn test_traversal_names_rejected_end_to_end() {
    let (temp_dir, store) = create_test_store().await;

    let body = json_body(serde_json::json!({
        "file_name": "../escape.txt",
        "content": "outside"
    }));
    let error = create_file(State(store.clone()), body)
        .await
        .expect_err("Traversal name should be rejected");
    assert!(matches!(error, AppError::InvalidFileName(_)));
    assert!(
        !temp_dir.path().join("escape.txt").exists(),
        "Nothing may be written outside the store root"
    );

    let error = get_file_content(State(store), Path("../escape.txt".to_string()))
        .await
        .expect_err("Traversal read should be rejected");
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}

/// A body that is not valid JSON surfaces as an internal error (500)
#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let (_temp_dir, store) = create_test_store().await;

    let error = create_file(State(store), Bytes::from("{file_name: notes.txt"))
        .await
        .expect_err("Malformed body should fail");
    assert_eq!(
        error.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

/// Reading a name that was never created maps to 404
#[tokio::test]
async fn test_read_missing_file_maps_to_not_found() {
    let (_temp_dir, store) = create_test_store().await;

    let error = get_file_content(State(store), Path("ghost.txt".to_string()))
        .await
        .expect_err("Read should fail");
    assert_eq!(error.to_string(), "Archivo 'ghost.txt' no encontrado.");
    assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
}
