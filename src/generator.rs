//! Walks a report's pages into a [`RenderSink`].
//!
//! Each laid-out page is drawn in two layers: first the layout's anonymous
//! items, instantiated fresh for the page, then the page's identified items in
//! declaration order. Blank pages open and close a page with nothing on it.

use crate::error::ReportError;
use crate::item::Item;
use crate::page::{Page, PageEntry};
use crate::report::Report;
use log::{debug, info};
use serde_json::Value;
use stencil_layout::{BasicKind, Layout};
use stencil_render_core::{
    DrawContent, DrawKind, DrawRequest, ImageAlign, PageFormat, RenderSink, TextHints,
};

pub(crate) struct ReportGenerator<'a> {
    report: &'a Report,
}

impl<'a> ReportGenerator<'a> {
    pub(crate) fn new(report: &'a Report) -> Self {
        Self { report }
    }

    pub(crate) fn generate<S: RenderSink>(&self, sink: &mut S) -> Result<Vec<u8>, ReportError> {
        let pages = self.report.pages();
        info!("Generating report: {} pages", pages.len());

        sink.begin_document(self.title())?;

        let mut format = PageFormat::default();
        let mut drawn = 0;
        for entry in pages {
            match entry {
                PageEntry::Page(page) => {
                    format = page_format(page.layout());
                    sink.begin_page(&format)?;
                    drawn += self.draw_page(page, sink)?;
                }
                PageEntry::Blank(_) => sink.begin_page(&format)?,
            }
            sink.end_page()?;
        }

        let bytes = sink.finish()?;
        info!(
            "Generated report: {} pages, {} draw requests, {} bytes",
            pages.len(),
            drawn,
            bytes.len()
        );
        Ok(bytes)
    }

    fn title(&self) -> &str {
        self.report
            .default_layout()
            .map(|layout| layout.report_title())
            .or_else(|| {
                self.report
                    .pages()
                    .iter()
                    .find_map(PageEntry::as_page)
                    .map(|page| page.layout().report_title())
            })
            .unwrap_or_default()
    }

    fn draw_page<S: RenderSink>(&self, page: &Page, sink: &mut S) -> Result<usize, ReportError> {
        let mut drawn = 0;

        for spec in page.layout().anonymous_items() {
            drawn += self.draw_item(page, &Item::from_spec(spec), sink)?;
        }

        for item in page.finalized_items()? {
            drawn += self.draw_item(page, &item, sink)?;
        }

        debug!("Drew {} items on page {:?}", drawn, page.number());
        Ok(drawn)
    }

    fn draw_item<S: RenderSink>(
        &self,
        page: &Page,
        item: &Item,
        sink: &mut S,
    ) -> Result<usize, ReportError> {
        if !self.is_renderable(page, item) {
            return Ok(0);
        }
        match self.draw_request(page, item)? {
            Some(request) => {
                sink.draw(request)?;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn is_renderable(&self, page: &Page, item: &Item) -> bool {
        if !item.is_visible() {
            return false;
        }
        match item {
            Item::TextBlock(block) => block.has_reference() || !block.own_value().is_empty(),
            Item::ImageBlock(block) => block.is_present(),
            Item::PageNumber(number) => page.is_countable() && number.is_for_report(),
            Item::Basic(basic) => basic.is_drawable(),
        }
    }

    fn draw_request(&self, page: &Page, item: &Item) -> Result<Option<DrawRequest>, ReportError> {
        let (kind, content) = match item {
            Item::Basic(basic) => match basic.kind() {
                BasicKind::Image => (
                    DrawKind::Image,
                    DrawContent::Image {
                        source: basic.image_data().to_string(),
                        align: ImageAlign::default(),
                    },
                ),
                BasicKind::Text => (
                    DrawKind::Text,
                    DrawContent::Text {
                        text: basic.text_content(),
                        hints: Some(TextHints {
                            multiple: true,
                            vertical_align: item.schema().style_str("vertical-align").to_string(),
                            ..TextHints::default()
                        }),
                    },
                ),
                BasicKind::Rect => (DrawKind::Rect, DrawContent::Shape),
                BasicKind::Ellipse => (DrawKind::Ellipse, DrawContent::Shape),
                BasicKind::Line => (DrawKind::Line, DrawContent::Shape),
                BasicKind::Other => return Ok(None),
            },
            Item::TextBlock(block) => (
                DrawKind::TextBlock,
                DrawContent::Text {
                    text: block.display_value(&self.value_of(page, item)?),
                    hints: Some(text_block_hints(item, block.is_multiple())),
                },
            ),
            Item::ImageBlock(block) => (
                DrawKind::ImageBlock,
                DrawContent::Image {
                    source: block.source().to_string(),
                    align: ImageAlign {
                        position_x: block.position_x().to_string(),
                        position_y: block.position_y().to_string(),
                    },
                },
            ),
            Item::PageNumber(number) => (
                DrawKind::PageNumber,
                DrawContent::Text {
                    text: number.formatted_page_number(self.report.numbering(page)),
                    hints: None,
                },
            ),
        };

        Ok(Some(DrawRequest {
            kind,
            id: Some(item.id())
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            bounds: item.bounds(),
            styles: item.export_styles(),
            content,
        }))
    }

    /// The unformatted value of a text block, following its reference.
    fn value_of(&self, page: &Page, item: &Item) -> Result<String, ReportError> {
        match item.as_text_block() {
            Some(block) => match block.reference_id() {
                Some(reference) => page.item_value(reference.as_str()),
                None => Ok(block.own_value().to_string()),
            },
            None => Ok(String::new()),
        }
    }
}

fn text_block_hints(item: &Item, multiple: bool) -> TextHints {
    let schema = item.schema();
    let overflow = Some(schema.style_str("overflow"))
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    let line_height = schema
        .style
        .get("line-height")
        .filter(|value| !matches!(value, Value::Null) && value.as_str() != Some(""))
        .cloned();

    TextHints {
        multiple,
        vertical_align: schema.style_str("vertical-align").to_string(),
        overflow,
        line_height,
    }
}

fn page_format(layout: &Layout) -> PageFormat {
    PageFormat {
        paper_type: layout.paper_type().to_string(),
        orientation: layout.schema().report.orientation,
        size: layout.page_size(),
    }
}
