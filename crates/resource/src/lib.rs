//! Layout sources backed by the local filesystem.
//!
//! [`FilesystemResourceProvider`] resolves layout names against a directory.
//! The in-memory provider is re-exported from `stencil-traits` so callers can
//! pick either from one place.

mod filesystem;

pub use filesystem::FilesystemResourceProvider;
pub use stencil_traits::InMemoryResourceProvider;
