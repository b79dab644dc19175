//! Stencil compiles report layout documents and stamps data onto their pages.
//!
//! A [`Report`] holds an ordered list of pages. Each [`Page`] is laid out by a
//! compiled [`Layout`] and owns the [`Item`]s created for it. Generating the
//! report walks every page into a [`RenderSink`], which turns the resolved
//! draw requests into a document.
//!
//! ```no_run
//! use stencil::{DisplayListSink, ReportBuilder};
//!
//! let mut report = ReportBuilder::new()
//!     .with_layout_dir("layouts")
//!     .with_default_layout("invoice")
//!     .build()?;
//!
//! let page = report.add_page(None, true)?;
//! page.set_item_values([("customer", "ACME"), ("amount", "1200")])?;
//!
//! let mut sink = DisplayListSink::new();
//! report.generate_to_file(&mut sink, "invoice.json")?;
//! # Ok::<(), stencil::ReportError>(())
//! ```

mod builder;
mod error;
mod generator;
pub mod item;
mod page;
mod report;

pub use builder::ReportBuilder;
pub use error::ReportError;
pub use item::{BasicItem, ImageBlockItem, Item, PageNumberItem, PageNumbering, TextBlockItem};
pub use page::{BlankPage, Page, PageEntry};
pub use report::{LAYOUT_EXTENSION, Report};

pub use stencil_format::{TextFormat, TextFormatter};
pub use stencil_layout::{ItemFilter, Layout, LayoutError};
pub use stencil_render_core::{DisplayList, DisplayListSink, DisplayPage, DrawContent, DrawKind, DrawRequest, PageFormat, RenderError, RenderSink};
pub use stencil_resource::FilesystemResourceProvider;
pub use stencil_style::{ItemStyle, StyleError, StyleKind, StyleName};
pub use stencil_traits::{InMemoryResourceProvider, ResourceError, ResourceProvider};
pub use stencil_types::{Bounds, Ellipse, ItemId, Line, Orientation, PageSize, Rect};
