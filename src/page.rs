//! Pages of a report and their per-page item instances.

use crate::error::ReportError;
use crate::item::Item;
use log::{debug, warn};
use stencil_layout::{ItemKind, Layout, LayoutError};
use stencil_types::ItemId;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// A page laid out by a [`Layout`].
///
/// Items are materialised the first time they are asked for and then kept
/// for the life of the page, so repeated lookups of one identifier always
/// reach the same instance. Two pages sharing a layout never share items.
#[derive(Debug, Clone)]
pub struct Page {
    layout: Arc<Layout>,
    number: Option<u32>,
    countable: bool,
    items: HashMap<ItemId, Item>,
}

impl Page {
    pub(crate) fn new(layout: Arc<Layout>, number: Option<u32>, countable: bool) -> Self {
        Self {
            layout,
            number,
            countable,
            items: HashMap::new(),
        }
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// The page number, `None` for a page that is not counted.
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn is_countable(&self) -> bool {
        self.countable
    }

    pub fn is_blank(&self) -> bool {
        false
    }

    /// The item with identifier `id`, created on first access.
    ///
    /// Creating a referencing text block also creates the item it refers to.
    pub fn item(&mut self, id: &str) -> Result<&mut Item, ReportError> {
        self.materialize(id)?;
        self.items
            .get_mut(id)
            .ok_or_else(|| LayoutError::ItemNotFound(id.to_string()).into())
    }

    /// The cached instance of `id`, if the page has created it.
    pub fn cached_item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    fn materialize(&mut self, id: &str) -> Result<(), ReportError> {
        if self.items.contains_key(id) {
            return Ok(());
        }
        let item = Item::from_spec(self.layout.item_spec(id)?);
        let reference = item
            .as_text_block()
            .and_then(|block| block.reference_id())
            .cloned();

        debug!("Materialised item '{}' ({}) on page {:?}", id, item.item_type(), self.number);
        self.items.insert(ItemId::from(id), item);

        if let Some(reference) = reference {
            if let Err(err) = self.materialize(reference.as_str()) {
                self.items.remove(id);
                return Err(err);
            }
        }
        Ok(())
    }

    /// The cached item, or a fresh instance for an item the page has not touched yet.
    pub(crate) fn lookup(&self, id: &str) -> Result<Cow<'_, Item>, ReportError> {
        match self.items.get(id) {
            Some(item) => Ok(Cow::Borrowed(item)),
            None => Ok(Cow::Owned(Item::from_spec(self.layout.item_spec(id)?))),
        }
    }

    /// The current unformatted value of a block item.
    ///
    /// A referencing text block reports the value of the item it refers to,
    /// read now rather than when the reference was created. Items without a
    /// value read as the empty string.
    pub fn item_value(&self, id: &str) -> Result<String, ReportError> {
        let mut visited: Vec<&str> = Vec::new();
        let mut current = id;
        loop {
            if visited.contains(&current) {
                warn!("Reference cycle through item '{}' on page {:?}", current, self.number);
                return Ok(String::new());
            }
            visited.push(current);

            if let Some(reference) = self.reference_of(current) {
                current = reference;
                continue;
            }
            let item = self.lookup(current)?;
            return Ok(match item.as_ref() {
                Item::TextBlock(block) => block.own_value().to_string(),
                Item::ImageBlock(block) => block.source().to_string(),
                Item::Basic(_) | Item::PageNumber(_) => String::new(),
            });
        }
    }

    fn reference_of(&self, id: &str) -> Option<&str> {
        let spec = self.layout.item_spec(id).ok()?;
        match spec.kind() {
            ItemKind::TextBlock(detail) => detail.reference_id.as_ref().map(ItemId::as_str),
            _ => None,
        }
    }

    /// The value handed to the renderer: formatted for a text block with
    /// formatting enabled, the source for an image block.
    pub fn real_value(&self, id: &str) -> Result<String, ReportError> {
        let value = self.item_value(id)?;
        let item = self.lookup(id)?;
        Ok(match item.as_text_block() {
            Some(block) => block.display_value(&value),
            None => value,
        })
    }

    /// Sets the value of a text block or the source of an image block.
    pub fn set_item_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), ReportError> {
        match self.item(id)? {
            Item::TextBlock(block) => {
                block.set_value(value)?;
            }
            Item::ImageBlock(block) => {
                block.set_source(value);
            }
            Item::Basic(_) | Item::PageNumber(_) => {
                return Err(ReportError::UneditableItem(id.to_string()));
            }
        }
        Ok(())
    }

    /// Sets several values in order, stopping at the first failure.
    pub fn set_item_values<I, K, V>(&mut self, values: I) -> Result<(), ReportError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (id, value) in values {
            self.set_item_value(id.as_ref(), value)?;
        }
        Ok(())
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.layout.has_item_by_id(id)
    }

    /// Identifiers of the layout's addressable items, in declaration order.
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.layout.item_ids()
    }

    /// Every identified item of the page in layout order: the page's own
    /// instance where one exists, a fresh one otherwise.
    pub fn finalized_items(&self) -> Result<Vec<Cow<'_, Item>>, ReportError> {
        self.layout
            .item_ids()
            .map(|id| self.lookup(id.as_str()))
            .collect()
    }
}

/// A page with no layout and no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankPage {
    number: Option<u32>,
    countable: bool,
}

impl BlankPage {
    pub(crate) fn new(number: Option<u32>, countable: bool) -> Self {
        Self { number, countable }
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn is_countable(&self) -> bool {
        self.countable
    }

    pub fn is_blank(&self) -> bool {
        true
    }
}

/// One entry of a report, in insertion order.
#[derive(Debug, Clone)]
pub enum PageEntry {
    Page(Page),
    Blank(BlankPage),
}

impl PageEntry {
    pub fn number(&self) -> Option<u32> {
        match self {
            PageEntry::Page(page) => page.number(),
            PageEntry::Blank(blank) => blank.number(),
        }
    }

    pub fn is_countable(&self) -> bool {
        match self {
            PageEntry::Page(page) => page.is_countable(),
            PageEntry::Blank(blank) => blank.is_countable(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, PageEntry::Blank(_))
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            PageEntry::Page(page) => Some(page),
            PageEntry::Blank(_) => None,
        }
    }

    pub fn as_page_mut(&mut self) -> Option<&mut Page> {
        match self {
            PageEntry::Page(page) => Some(page),
            PageEntry::Blank(_) => None,
        }
    }
}
