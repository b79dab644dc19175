//! The report: an ordered list of pages sharing a page-number sequence.

use crate::error::ReportError;
use crate::generator::ReportGenerator;
use crate::item::PageNumbering;
use crate::page::{BlankPage, Page, PageEntry};
use log::debug;
use stencil_layout::Layout;
use stencil_render_core::RenderSink;
use stencil_traits::{ResourceError, ResourceProvider};
use stencil_types::LayoutIdentifier;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Extension of layout documents.
pub const LAYOUT_EXTENSION: &str = ".tlf";

#[derive(Debug)]
pub struct Report {
    provider: Arc<dyn ResourceProvider>,
    default_layout: Option<Arc<Layout>>,
    layouts: HashMap<String, Arc<Layout>>,
    compiled: HashMap<LayoutIdentifier, Arc<Layout>>,
    pages: Vec<PageEntry>,
    page_count: u32,
    start_page_number: u32,
}

impl Report {
    /// An empty report loading its layouts through `provider`.
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            provider,
            default_layout: None,
            layouts: HashMap::new(),
            compiled: HashMap::new(),
            pages: Vec::new(),
            page_count: 0,
            start_page_number: 1,
        }
    }

    /// Loads and compiles a layout by name, once per name.
    ///
    /// The `.tlf` extension is appended when `name` lacks it.
    pub fn load_layout(&mut self, name: &str) -> Result<Arc<Layout>, ReportError> {
        let name = layout_file_name(name);
        if let Some(layout) = self.layouts.get(&name) {
            debug!("Reusing compiled layout '{}'", name);
            return Ok(Arc::clone(layout));
        }

        let data = self.provider.load(&name).map_err(|err| match err {
            ResourceError::NotFound(_) => ReportError::LayoutFileNotFound(name.clone()),
            other => ReportError::Resource(other),
        })?;
        let layout = self.load_layout_data(&data)?;
        self.layouts.insert(name, Arc::clone(&layout));
        Ok(layout)
    }

    /// Compiles a layout from raw bytes. Byte-identical documents compile once.
    pub fn load_layout_data(&mut self, data: &[u8]) -> Result<Arc<Layout>, ReportError> {
        let layout = Layout::compile(data)?;
        if let Some(existing) = self.compiled.get(layout.identifier()) {
            debug!("Reusing compiled layout {}", existing.identifier());
            return Ok(Arc::clone(existing));
        }
        let layout = Arc::new(layout);
        self.compiled
            .insert(layout.identifier().clone(), Arc::clone(&layout));
        Ok(layout)
    }

    pub fn set_default_layout(&mut self, layout: Arc<Layout>) -> &mut Self {
        self.default_layout = Some(layout);
        self
    }

    pub fn default_layout(&self) -> Option<&Arc<Layout>> {
        self.default_layout.as_ref()
    }

    /// Appends a page laid out by the named layout, or by the default layout
    /// when `layout` is `None`.
    pub fn add_page(&mut self, layout: Option<&str>, countable: bool) -> Result<&mut Page, ReportError> {
        let layout = match layout {
            Some(name) => self.load_layout(name)?,
            None => self
                .default_layout
                .clone()
                .ok_or(ReportError::LayoutNotSpecified)?,
        };
        self.add_page_with(layout, countable)
    }

    /// Appends a page laid out by an already compiled layout.
    pub fn add_page_with(&mut self, layout: Arc<Layout>, countable: bool) -> Result<&mut Page, ReportError> {
        let number = self.next_page_number(countable);
        self.pages
            .push(PageEntry::Page(Page::new(layout, number, countable)));
        self.page_mut(self.pages.len() - 1)
    }

    pub fn add_blank_page(&mut self, countable: bool) -> BlankPage {
        let number = self.next_page_number(countable);
        let blank = BlankPage::new(number, countable);
        self.pages.push(PageEntry::Blank(blank));
        blank
    }

    fn next_page_number(&mut self, countable: bool) -> Option<u32> {
        if !countable {
            return None;
        }
        self.page_count = self.page_count.saturating_add(1);
        Some(self.last_page_number())
    }

    /// Number of countable pages added so far.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn last_page_number(&self) -> u32 {
        self.start_page_number
            .saturating_sub(1)
            .saturating_add(self.page_count)
    }

    /// Numbers pages added from now on starting at `number`. Pages already
    /// added keep their numbers.
    pub fn start_page_number_from(&mut self, number: u32) -> &mut Self {
        self.start_page_number = number;
        self
    }

    pub fn start_page_number(&self) -> u32 {
        self.start_page_number
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Result<&Page, ReportError> {
        match self.pages.get(index) {
            Some(PageEntry::Page(page)) => Ok(page),
            Some(PageEntry::Blank(_)) => Err(ReportError::BlankPage(index)),
            None => Err(ReportError::PageNotFound(index)),
        }
    }

    pub fn page_mut(&mut self, index: usize) -> Result<&mut Page, ReportError> {
        match self.pages.get_mut(index) {
            Some(PageEntry::Page(page)) => Ok(page),
            Some(PageEntry::Blank(_)) => Err(ReportError::BlankPage(index)),
            None => Err(ReportError::PageNotFound(index)),
        }
    }

    /// Numbers substituted into page-number items of `page`.
    pub fn numbering(&self, page: &Page) -> PageNumbering {
        PageNumbering {
            page: page.number(),
            total: self.last_page_number(),
        }
    }

    /// The text a page-number item of `page` prints, `""` for any other item.
    pub fn formatted_page_number(&self, page: &Page, id: &str) -> Result<String, ReportError> {
        let item = page.lookup(id)?;
        Ok(item
            .as_page_number()
            .map(|item| item.formatted_page_number(self.numbering(page)))
            .unwrap_or_default())
    }

    /// Walks every page into `sink` and returns the document it produces.
    pub fn generate<S: RenderSink>(&self, sink: &mut S) -> Result<Vec<u8>, ReportError> {
        ReportGenerator::new(self).generate(sink)
    }

    /// Generates the document and writes it to `path`.
    pub fn generate_to_file<S, P>(&self, sink: &mut S, path: P) -> Result<(), ReportError>
    where
        S: RenderSink,
        P: AsRef<Path>,
    {
        let bytes = self.generate(sink)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn layout_file_name(name: &str) -> String {
    if name.ends_with(LAYOUT_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{LAYOUT_EXTENSION}")
    }
}
