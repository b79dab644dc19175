//! Items: per-page instances of the elements a layout declares.
//!
//! An [`Item`] is created from its layout [`ItemSpec`] the first time a page
//! asks for it, and from then on belongs to that page alone.

mod basic;
mod block;
mod page_number;

pub use basic::BasicItem;
pub use block::{ImageBlockItem, TextBlockItem};
pub use page_number::{PageNumberItem, PageNumbering};

use crate::error::ReportError;
use serde_json::{Map, Value};
use stencil_layout::{BasicKind, ItemKind, ItemSchema, ItemSpec};
use stencil_style::{ItemStyle, StyleKind};
use stencil_types::Bounds;

/// Category name every basic item answers to in [`Item::is_type_of`].
pub const BASIC_CATEGORY: &str = "basic";
/// Category name every value-bearing item answers to in [`Item::is_type_of`].
pub const BLOCK_CATEGORY: &str = "block";

/// State shared by every kind of item.
#[derive(Debug, Clone)]
pub struct ItemCore {
    spec: ItemSpec,
    style: ItemStyle,
    visible: bool,
}

impl ItemCore {
    fn new(spec: &ItemSpec, style_kind: StyleKind) -> Self {
        let schema = spec.schema();
        Self {
            spec: spec.clone(),
            style: ItemStyle::new(style_kind, schema.style.clone()),
            visible: schema.display,
        }
    }

    pub fn spec(&self) -> &ItemSpec {
        &self.spec
    }

    pub fn schema(&self) -> &ItemSchema {
        self.spec.schema()
    }

    pub fn style(&self) -> &ItemStyle {
        &self.style
    }
}

#[derive(Debug, Clone)]
pub enum Item {
    Basic(BasicItem),
    TextBlock(TextBlockItem),
    ImageBlock(ImageBlockItem),
    PageNumber(PageNumberItem),
}

impl Item {
    pub fn from_spec(spec: &ItemSpec) -> Self {
        match spec.kind() {
            ItemKind::Basic(kind) => Item::Basic(BasicItem::new(spec, *kind)),
            ItemKind::TextBlock(detail) => Item::TextBlock(TextBlockItem::new(spec, detail)),
            ItemKind::ImageBlock => Item::ImageBlock(ImageBlockItem::new(spec)),
            ItemKind::PageNumber(detail) => Item::PageNumber(PageNumberItem::new(spec, detail)),
        }
    }

    fn core(&self) -> &ItemCore {
        match self {
            Item::Basic(item) => &item.core,
            Item::TextBlock(item) => &item.core,
            Item::ImageBlock(item) => &item.core,
            Item::PageNumber(item) => &item.core,
        }
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        match self {
            Item::Basic(item) => &mut item.core,
            Item::TextBlock(item) => &mut item.core,
            Item::ImageBlock(item) => &mut item.core,
            Item::PageNumber(item) => &mut item.core,
        }
    }

    pub fn id(&self) -> &str {
        self.core().spec.id()
    }

    pub fn item_type(&self) -> &str {
        self.core().spec.item_type()
    }

    pub fn schema(&self) -> &ItemSchema {
        self.core().schema()
    }

    pub fn spec(&self) -> &ItemSpec {
        &self.core().spec
    }

    pub fn bounds(&self) -> Bounds {
        self.core().spec.bounds()
    }

    pub fn is_visible(&self) -> bool {
        self.core().visible
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.core_mut().visible = visible;
        self
    }

    pub fn show(&mut self) -> &mut Self {
        self.set_visible(true)
    }

    pub fn hide(&mut self) -> &mut Self {
        self.set_visible(false)
    }

    /// Page-number items are always dynamic; others only when identified.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Item::PageNumber(_)) || !self.id().is_empty()
    }

    /// Matches the raw layout type, or the item's category (`"basic"` or `"block"`).
    pub fn is_type_of(&self, type_name: &str) -> bool {
        if self.item_type() == type_name {
            return true;
        }
        match self {
            Item::Basic(_) => type_name == BASIC_CATEGORY,
            Item::TextBlock(_) | Item::ImageBlock(_) => type_name == BLOCK_CATEGORY,
            Item::PageNumber(_) => false,
        }
    }

    pub fn is_block(&self) -> bool {
        self.is_type_of(BLOCK_CATEGORY)
    }

    pub fn style(&self) -> &ItemStyle {
        &self.core().style
    }

    pub fn set_style(&mut self, name: &str, value: Value) -> Result<&mut Self, ReportError> {
        self.core_mut().style.set(name, value)?;
        Ok(self)
    }

    pub fn get_style(&self, name: &str) -> Result<Value, ReportError> {
        Ok(self.core().style.get(name)?)
    }

    /// Sets each style in turn. Styles set before a failing one stay set.
    pub fn set_styles<'a, I>(&mut self, styles: I) -> Result<&mut Self, ReportError>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        self.core_mut().style.set_styles(styles)?;
        Ok(self)
    }

    pub fn export_styles(&self) -> Map<String, Value> {
        self.core().style.export()
    }

    pub fn basic_kind(&self) -> Option<BasicKind> {
        match self {
            Item::Basic(item) => Some(item.kind()),
            _ => None,
        }
    }

    pub fn as_text_block(&self) -> Option<&TextBlockItem> {
        match self {
            Item::TextBlock(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_text_block_mut(&mut self) -> Option<&mut TextBlockItem> {
        match self {
            Item::TextBlock(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_image_block(&self) -> Option<&ImageBlockItem> {
        match self {
            Item::ImageBlock(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_image_block_mut(&mut self) -> Option<&mut ImageBlockItem> {
        match self {
            Item::ImageBlock(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_page_number(&self) -> Option<&PageNumberItem> {
        match self {
            Item::PageNumber(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_page_number_mut(&mut self) -> Option<&mut PageNumberItem> {
        match self {
            Item::PageNumber(item) => Some(item),
            _ => None,
        }
    }
}
