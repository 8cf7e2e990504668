use std::fs;
use std::path::PathBuf;

use log::info;
use sha2::{Digest, Sha256};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid upload filename {0:?}")]
    InvalidFilename(String),
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Persists uploaded images under the public uploads directory and hands
/// back the URL path they are served from.
#[derive(Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Write the upload verbatim. The stored name is the client filename,
    /// sanitized, behind a short content-hash prefix so identical names
    /// from different uploads cannot clobber each other.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let sanitized = sanitize_filename(filename)
            .ok_or_else(|| StorageError::InvalidFilename(filename.to_string()))?;

        let digest = Sha256::digest(bytes);
        let stored_name = format!("{}_{}", hex::encode(&digest[..4]), sanitized);

        fs::write(self.root.join(&stored_name), bytes)?;
        info!("Saved upload {} as {}", filename, stored_name);
        Ok(format!("/static/uploads/{}", stored_name))
    }
}

/// Strip any path components, replace everything outside
/// `[A-Za-z0-9._-]` with `_`, and reject names with no usable stem.
fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.chars().all(|c| matches!(c, '.' | '_')) {
        return None;
    }
    Some(cleaned)
}
