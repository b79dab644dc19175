use crate::error::RenderError;
use crate::traits::RenderSink;
use crate::types::{DrawRequest, PageFormat};
use crate::utils::has_visible_paint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayPage {
    pub format: PageFormat,
    pub requests: Vec<DrawRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub title: String,
    pub pages: Vec<DisplayPage>,
}

/// A sink that records what would be painted and encodes it as JSON.
///
/// Requests that leave no mark (see [`has_visible_paint`]) are dropped.
#[derive(Debug, Default)]
pub struct DisplayListSink {
    list: DisplayList,
    open_page: Option<DisplayPage>,
    skipped: usize,
}

impl DisplayListSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    pub fn into_display_list(self) -> DisplayList {
        self.list
    }

    /// Number of requests dropped for painting nothing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl RenderSink for DisplayListSink {
    fn begin_document(&mut self, title: &str) -> Result<(), RenderError> {
        self.list = DisplayList {
            title: title.to_string(),
            pages: Vec::new(),
        };
        self.open_page = None;
        self.skipped = 0;
        Ok(())
    }

    fn begin_page(&mut self, format: &PageFormat) -> Result<(), RenderError> {
        if self.open_page.is_some() {
            return Err(RenderError::Sequence("begin_page called before end_page"));
        }
        self.open_page = Some(DisplayPage {
            format: format.clone(),
            requests: Vec::new(),
        });
        Ok(())
    }

    fn draw(&mut self, request: DrawRequest) -> Result<(), RenderError> {
        let page = self
            .open_page
            .as_mut()
            .ok_or(RenderError::Sequence("draw called outside a page"))?;
        if has_visible_paint(&request) {
            page.requests.push(request);
        } else {
            self.skipped += 1;
        }
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self
            .open_page
            .take()
            .ok_or(RenderError::Sequence("end_page called without an open page"))?;
        self.list.pages.push(page);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>, RenderError> {
        if self.open_page.is_some() {
            self.end_page()?;
        }
        Ok(serde_json::to_vec_pretty(&self.list)?)
    }
}
