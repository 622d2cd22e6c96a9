//! File store service
//!
//! Provides the flat file store backing the HTTP API: one directory of plain
//! files, addressed by name. All filesystem outcomes are translated into
//! `AppError` values here so handlers stay thin.

use crate::error::AppError;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Flat file store rooted at a single directory.
///
/// The root is injected at construction rather than read from ambient global
/// state, so tests can point each store at its own temporary directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store over the given root directory.
    ///
    /// The directory is not touched until [`FileStore::init`] is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory under which all managed files live.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    ///
    /// Idempotent; called once at startup before the server accepts requests.
    pub async fn init(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            anyhow::anyhow!(
                "Error al preparar el directorio '{}': {}",
                self.root.display(),
                e
            )
        })?;
        Ok(())
    }

    /// Resolve a file name to its path inside the root.
    ///
    /// Names carrying path separators or parent-directory components could
    /// escape the root via a raw join, so they are rejected here for both
    /// reads and writes.
    fn resolve(&self, name: &str) -> Result<PathBuf, AppError> {
        let candidate = Path::new(name);
        let is_plain_name = candidate.components().count() == 1
            && matches!(candidate.components().next(), Some(Component::Normal(_)))
            && !name.contains('/')
            && !name.contains('\\');

        if !is_plain_name {
            return Err(AppError::InvalidFileName(name.to_string()));
        }

        Ok(self.root.join(name))
    }

    /// List the names of all regular files directly under the root.
    ///
    /// Subdirectories and special files are excluded. Order follows the
    /// filesystem's enumeration order and is not part of the contract.
    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| anyhow::anyhow!("Error al listar archivos: {}", e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| anyhow::anyhow!("Error al listar archivos: {}", e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| anyhow::anyhow!("Error al listar archivos: {}", e))?;
            if file_type.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        Ok(names)
    }

    /// Create a new file with the given content, failing if it already exists.
    ///
    /// Uses the filesystem's create-if-absent primitive, so two concurrent
    /// creates for the same name cannot overwrite each other: one wins, the
    /// other gets [`AppError::FileAlreadyExists`].
    pub async fn create(&self, name: &str, content: &str) -> Result<(), AppError> {
        let path = self.resolve(name)?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => AppError::FileAlreadyExists(name.to_string()),
                _ => AppError::Internal(anyhow::anyhow!("Error al procesar la solicitud: {}", e)),
            })?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Error al procesar la solicitud: {}", e))?;

        // Tokio files buffer writes and finish them after drop; flush before
        // returning so the content is fully on disk once create succeeds
        file.flush()
            .await
            .map_err(|e| anyhow::anyhow!("Error al procesar la solicitud: {}", e))?;

        Ok(())
    }

    /// Read the full content of a file as UTF-8 text.
    pub async fn read(&self, name: &str) -> Result<String, AppError> {
        let path = self.resolve(name)?;

        // Existence check first so an absent file surfaces as 404, not 500
        let is_file = fs::metadata(&path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(AppError::FileNotFound(name.to_string()));
        }

        fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Error al leer el archivo: {}", e)))
    }
}
