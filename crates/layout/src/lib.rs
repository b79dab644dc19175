//! Layout compilation: decoding a layout document, gating its version and
//! indexing its items by identifier.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Incompatible layout version '{version}', required: {}", rules.join(", "))]
    IncompatibleLayout { version: String, rules: Vec<String> },
    #[error("Failed to decode layout document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid item schema '{id}': {reason}")]
    InvalidItemSchema { id: String, reason: String },
    #[error("Item not found: '{0}'")]
    ItemNotFound(String),
}

pub mod compiled;
pub mod schema;
pub mod spec;
pub mod version;

pub use self::compiled::{ItemFilter, Layout, USER_PAPER_TYPE};
pub use self::schema::{ItemSchema, LayoutSchema, ReportMeta};
pub use self::spec::{BasicKind, ItemKind, ItemSpec, PageNumberSpec, TextBlockSpec};
pub use self::version::{is_compatible, LayoutVersion};
