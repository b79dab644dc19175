use crate::LayoutError;
use crate::schema::{ItemSchema, LayoutSchema};
use crate::spec::ItemSpec;
use crate::version::{compatibility_rules, is_compatible};
use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{debug, warn};
use serde_json::Value;
use stencil_types::{ItemId, LayoutIdentifier, PageSize};

/// Paper type marking a layout with custom page dimensions.
pub const USER_PAPER_TYPE: &str = "user";

/// Which item schemas [`Layout::item_schemas`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFilter {
    #[default]
    All,
    WithId,
    WithoutId,
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    WithId(ItemId),
    WithoutId(usize),
}

/// A compiled, immutable layout.
#[derive(Debug, Clone)]
pub struct Layout {
    schema: LayoutSchema,
    identifier: LayoutIdentifier,
    with_id: IndexMap<ItemId, ItemSpec>,
    without_id: Vec<ItemSpec>,
    order: Vec<Slot>,
}

impl Layout {
    /// Decodes a layout document and checks its version.
    pub fn parse(data: &[u8]) -> Result<LayoutSchema, LayoutError> {
        let raw: Value = serde_json::from_slice(data)?;
        let version = raw.get("version").and_then(Value::as_str).unwrap_or("");
        if !is_compatible(version) {
            return Err(LayoutError::IncompatibleLayout {
                version: version.to_string(),
                rules: compatibility_rules(),
            });
        }
        Ok(serde_json::from_value(raw)?)
    }

    pub fn compile(data: &[u8]) -> Result<Self, LayoutError> {
        let mut schema = Self::parse(data)?;
        let identifier = content_identifier(data);

        let mut with_id: IndexMap<ItemId, ItemSpec> = IndexMap::new();
        let mut without_id = Vec::new();
        let mut order = Vec::new();

        for item in std::mem::take(&mut schema.items) {
            let spec = ItemSpec::from_schema(item)?;
            if spec.id().is_empty() {
                order.push(Slot::WithoutId(without_id.len()));
                without_id.push(spec);
                continue;
            }
            match with_id.entry(ItemId::from(spec.id())) {
                Entry::Occupied(mut entry) => {
                    warn!(
                        "Layout {} declares item '{}' more than once; the last declaration wins",
                        identifier,
                        entry.key()
                    );
                    entry.insert(spec);
                }
                Entry::Vacant(entry) => {
                    order.push(Slot::WithId(entry.key().clone()));
                    entry.insert(spec);
                }
            }
        }

        debug!(
            "Compiled layout {} (version {}): {} identified items, {} anonymous items",
            identifier,
            schema.version,
            with_id.len(),
            without_id.len()
        );

        Ok(Self {
            schema,
            identifier,
            with_id,
            without_id,
            order,
        })
    }

    pub fn identifier(&self) -> &LayoutIdentifier {
        &self.identifier
    }

    /// The document header. Its `items` are moved into the compiled index, see
    /// [`Layout::item_schemas`].
    pub fn schema(&self) -> &LayoutSchema {
        &self.schema
    }

    pub fn last_version(&self) -> &str {
        &self.schema.version
    }

    pub fn report_title(&self) -> &str {
        if self.schema.title.is_empty() {
            &self.schema.report.title
        } else {
            &self.schema.title
        }
    }

    pub fn paper_type(&self) -> &str {
        &self.schema.report.paper_type
    }

    pub fn is_portrait_page(&self) -> bool {
        self.schema.report.orientation == stencil_types::Orientation::Portrait
    }

    pub fn is_user_paper_type(&self) -> bool {
        self.paper_type() == USER_PAPER_TYPE
    }

    /// Custom page dimensions, only for the `"user"` paper type.
    pub fn page_size(&self) -> Option<PageSize> {
        if !self.is_user_paper_type() {
            return None;
        }
        let report = &self.schema.report;
        Some(PageSize::new(
            report.width.unwrap_or_default(),
            report.height.unwrap_or_default(),
        ))
    }

    pub fn has_item_by_id(&self, id: &str) -> bool {
        self.with_id.contains_key(id)
    }

    pub fn item_spec(&self, id: &str) -> Result<&ItemSpec, LayoutError> {
        self.with_id
            .get(id)
            .ok_or_else(|| LayoutError::ItemNotFound(id.to_string()))
    }

    /// Identified items in declaration order.
    pub fn identified_items(&self) -> impl Iterator<Item = &ItemSpec> {
        self.with_id.values()
    }

    pub fn anonymous_items(&self) -> &[ItemSpec] {
        &self.without_id
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.with_id.keys()
    }

    pub fn items(&self, filter: ItemFilter) -> Vec<&ItemSpec> {
        match filter {
            ItemFilter::All => self
                .order
                .iter()
                .filter_map(|slot| match slot {
                    Slot::WithId(id) => self.with_id.get(id),
                    Slot::WithoutId(index) => self.without_id.get(*index),
                })
                .collect(),
            ItemFilter::WithId => self.with_id.values().collect(),
            ItemFilter::WithoutId => self.without_id.iter().collect(),
        }
    }

    pub fn item_schemas(&self, filter: ItemFilter) -> Vec<&ItemSchema> {
        self.items(filter).into_iter().map(ItemSpec::schema).collect()
    }
}

fn content_identifier(data: &[u8]) -> LayoutIdentifier {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    LayoutIdentifier::from(format!("{:08x}-{:x}", hasher.finalize(), data.len()))
}
