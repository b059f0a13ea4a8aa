//! Destinations for generated documents.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A stored document and where it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub name: String,

    /// Store-specific location (a file path for [`DirectoryStore`])
    pub location: String,

    pub mime_type: String,

    /// Size in bytes
    pub size: usize,
}

/// Trait for document stores.
pub trait DocumentStore: Send + Sync {
    /// Store a document under a name.
    fn store(&self, name: &str, bytes: &[u8], mime_type: &str) -> Result<StoredDocument>;
}

/// Stores documents as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for DirectoryStore {
    fn store(&self, name: &str, bytes: &[u8], mime_type: &str) -> Result<StoredDocument> {
        let file_name = Path::new(name).file_name().and_then(|n| n.to_str());
        if file_name != Some(name) {
            return Err(Error::Other(format!("Invalid document name: {}", name)));
        }

        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        std::fs::write(&path, bytes)?;
        log::info!("Stored {} ({} bytes)", path.display(), bytes.len());

        Ok(StoredDocument {
            name: name.to_string(),
            location: path.to_string_lossy().into_owned(),
            mime_type: mime_type.to_string(),
            size: bytes.len(),
        })
    }
}
