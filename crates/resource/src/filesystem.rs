use log::debug;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use stencil_traits::{ResourceError, ResourceProvider, SharedResourceData};

/// Reads layout documents from a directory.
///
/// Names are resolved relative to the directory and may not climb out of it:
/// absolute names and names containing `..` are reported as not found.
#[derive(Debug, Clone)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
}

impl FilesystemResourceProvider {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve(path)
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))?;
        debug!("Reading layout source {}", full_path.display());

        match std::fs::read(&full_path) {
            Ok(bytes) => Ok(Arc::from(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ResourceError::NotFound(path.to_string())),
            Err(e) => Err(ResourceError::LoadFailed {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
