// src/error.rs
//! The error type returned by report, page and item operations.

use stencil_layout::LayoutError;
use stencil_render_core::RenderError;
use stencil_style::StyleError;
use stencil_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout file not found: {0}")]
    LayoutFileNotFound(String),

    #[error("Layout not specified")]
    LayoutNotSpecified,

    #[error("Uneditable item: '{0}'")]
    UneditableItem(String),

    #[error("Readonly item: '{id}'. {reason}")]
    ReadonlyItem { id: String, reason: String },

    #[error("Not formattable: '{id}'. {reason}")]
    NotFormattable { id: String, reason: String },

    #[error("Page {0} is a blank page and has no items")]
    BlankPage(usize),

    #[error("No page at index {0}")]
    PageNotFound(usize),
}

impl ReportError {
    /// True for a lookup of an identifier the layout does not declare.
    pub fn is_item_not_found(&self) -> bool {
        matches!(self, ReportError::Layout(LayoutError::ItemNotFound(_)))
    }
}
