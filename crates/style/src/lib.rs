//! Item style models.
//!
//! An [`ItemStyle`] wraps the raw style attributes of a layout item and exposes
//! them through a fixed set of logical names, depending on its [`StyleKind`].

pub mod error;
pub mod model;
pub mod name;
pub mod text;

pub use error::StyleError;
pub use model::ItemStyle;
pub use name::{RawAttribute, StyleKind, StyleName};
pub use text::{FontStyleFlag, TextAlign, VerticalAlign};
