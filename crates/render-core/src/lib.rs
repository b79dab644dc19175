//! The boundary between report generation and a rendering backend.
//!
//! - [`RenderSink`] is the trait backends implement
//! - [`DrawRequest`] and [`PageFormat`] are what they receive
//! - [`DisplayListSink`] records requests and encodes them as JSON

mod display;
mod error;
mod traits;
mod types;
pub mod utils;

pub use display::{DisplayList, DisplayListSink, DisplayPage};
pub use error::RenderError;
pub use traits::RenderSink;
pub use types::{
    DEFAULT_PAPER_TYPE, DrawContent, DrawKind, DrawRequest, ImageAlign, PageFormat, TextHints,
};
