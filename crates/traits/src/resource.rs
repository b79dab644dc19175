//! Loading of layout documents by name.
//!
//! Reports never touch the filesystem directly: every layout source goes
//! through a [`ResourceProvider`], so documents can come from disk, from an
//! embedded table, or from a test fixture.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Raw document bytes, shared between the provider and its callers.
pub type SharedResourceData = Arc<[u8]>;

pub trait ResourceProvider: Send + Sync + Debug {
    /// Loads the document stored under `path`.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, path: &str) -> bool;

    /// Short provider name for log messages.
    fn name(&self) -> &'static str;
}

/// Documents registered up front, keyed by the name reports refer to them by.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    documents: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InMemoryResourceProvider::add`] for fixtures.
    pub fn with(self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = data.into();
        if let Ok(mut documents) = self.documents.write() {
            documents.insert(path.into(), Arc::from(bytes));
        }
        self
    }

    /// Registers a document, replacing any previous one under the same name.
    pub fn add(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<(), ResourceError> {
        let path = path.into();
        let bytes: Vec<u8> = data.into();
        let mut documents = self.documents.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "document store lock poisoned".to_string(),
        })?;
        documents.insert(path, Arc::from(bytes));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let documents = self.documents.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "document store lock poisoned".to_string(),
        })?;
        documents
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.documents
            .read()
            .map(|d| d.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_documents_load_as_shared_bytes() {
        let provider = InMemoryResourceProvider::new();
        provider.add("invoice.tlf", br#"{"version":"0.9.0"}"#.to_vec()).unwrap();

        let first = provider.load("invoice.tlf").unwrap();
        let second = provider.load("invoice.tlf").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(&*first, br#"{"version":"0.9.0"}"#);
    }

    #[test]
    fn test_missing_document() {
        let provider = InMemoryResourceProvider::new().with("a.tlf", "{}");
        assert!(provider.exists("a.tlf"));
        assert_eq!(
            provider.load("b.tlf"),
            Err(ResourceError::NotFound("b.tlf".to_string()))
        );
    }

    #[test]
    fn test_re_adding_replaces() {
        let provider = InMemoryResourceProvider::new()
            .with("a.tlf", "old")
            .with("a.tlf", "new");
        assert_eq!(provider.len(), 1);
        assert_eq!(&*provider.load("a.tlf").unwrap(), b"new");
    }

    #[test]
    fn test_io_errors_convert() {
        let err: ResourceError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.to_string(), "I/O error: disk on fire");
    }
}
