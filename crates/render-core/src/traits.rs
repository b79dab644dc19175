use crate::error::RenderError;
use crate::types::{DrawRequest, PageFormat};

/// A backend that turns resolved draw requests into page content.
///
/// Calls arrive in document order: `begin_document`, then for each page a
/// `begin_page`, its draws and an `end_page`, and finally `finish`.
pub trait RenderSink {
    fn begin_document(&mut self, title: &str) -> Result<(), RenderError>;

    fn begin_page(&mut self, format: &PageFormat) -> Result<(), RenderError>;

    fn draw(&mut self, request: DrawRequest) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    /// Completes the document and returns its encoded bytes.
    fn finish(&mut self) -> Result<Vec<u8>, RenderError>;
}
