//! Typed item specifications, checked once when a layout is compiled.

use crate::LayoutError;
use crate::schema::ItemSchema;
use log::debug;
use serde_json::Value;
use stencil_format::TextFormat;
use stencil_types::{Bounds, Ellipse, ItemId, Line, Rect};

pub const TEXT_BLOCK: &str = "text-block";
pub const IMAGE_BLOCK: &str = "image-block";
pub const PAGE_NUMBER: &str = "page-number";

/// The static shapes a basic item can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Image,
    Text,
    Rect,
    Ellipse,
    Line,
    /// Any other item type, such as `list` or `stack-view`. Addressable, never drawn.
    Other,
}

impl BasicKind {
    pub fn from_type(item_type: &str) -> Option<Self> {
        match item_type {
            "image" => Some(BasicKind::Image),
            "text" => Some(BasicKind::Text),
            "rect" => Some(BasicKind::Rect),
            "ellipse" => Some(BasicKind::Ellipse),
            "line" => Some(BasicKind::Line),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BasicKind::Image => "image",
            BasicKind::Text => "text",
            BasicKind::Rect => "rect",
            BasicKind::Ellipse => "ellipse",
            BasicKind::Line => "line",
            BasicKind::Other => "basic",
        }
    }

    pub fn is_drawable(&self) -> bool {
        *self != BasicKind::Other
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlockSpec {
    pub value: String,
    pub reference_id: Option<ItemId>,
    pub multiple: bool,
    pub format: TextFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageNumberSpec {
    pub format: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Basic(BasicKind),
    TextBlock(TextBlockSpec),
    ImageBlock,
    PageNumber(PageNumberSpec),
}

/// An item schema together with its decoded kind and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    schema: ItemSchema,
    kind: ItemKind,
    bounds: Bounds,
}

impl ItemSpec {
    pub fn from_schema(schema: ItemSchema) -> Result<Self, LayoutError> {
        let kind = match schema.item_type.as_str() {
            TEXT_BLOCK => ItemKind::TextBlock(text_block_spec(&schema)?),
            IMAGE_BLOCK => ItemKind::ImageBlock,
            PAGE_NUMBER => ItemKind::PageNumber(PageNumberSpec {
                format: schema.str_attribute("format").to_string(),
                target: schema.str_attribute("target").to_string(),
            }),
            other => ItemKind::Basic(BasicKind::from_type(other).unwrap_or_else(|| {
                debug!("Item '{}' of type '{}' will not be drawn", schema.id, other);
                BasicKind::Other
            })),
        };
        let bounds = read_bounds(&schema, &kind);

        Ok(Self {
            schema,
            kind,
            bounds,
        })
    }

    pub fn id(&self) -> &str {
        &self.schema.id
    }

    pub fn item_type(&self) -> &str {
        &self.schema.item_type
    }

    pub fn schema(&self) -> &ItemSchema {
        &self.schema
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn basic_kind(&self) -> Option<BasicKind> {
        match self.kind {
            ItemKind::Basic(kind) => Some(kind),
            _ => None,
        }
    }
}

fn text_block_spec(schema: &ItemSchema) -> Result<TextBlockSpec, LayoutError> {
    let format = match schema.attribute("format") {
        None | Some(Value::Null) => TextFormat::default(),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| invalid(schema, format!("invalid format settings: {e}")))?,
    };
    let reference_id = Some(schema.str_attribute("reference-id"))
        .filter(|id| !id.is_empty())
        .map(ItemId::from);
    let value = match schema.attribute("value") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    Ok(TextBlockSpec {
        value,
        reference_id,
        multiple: schema.bool_attribute("multiple-line"),
        format,
    })
}

/// Missing or non-numeric coordinates read as zero.
fn read_bounds(schema: &ItemSchema, kind: &ItemKind) -> Bounds {
    let coordinates = |names: [&str; 4]| names.map(|name| schema.f64_attribute(name).unwrap_or(0.0));

    match kind {
        ItemKind::Basic(BasicKind::Ellipse) => {
            let [cx, cy, rx, ry] = coordinates(["cx", "cy", "rx", "ry"]);
            Bounds::from(Ellipse::new(cx, cy, rx, ry))
        }
        ItemKind::Basic(BasicKind::Line) => {
            let [x1, y1, x2, y2] = coordinates(["x1", "y1", "x2", "y2"]);
            Bounds::from(Line::new(x1, y1, x2, y2))
        }
        _ => {
            let [x, y, width, height] = coordinates(["x", "y", "width", "height"]);
            Bounds::from(Rect::new(x, y, width, height))
        }
    }
}

fn invalid(schema: &ItemSchema, reason: String) -> LayoutError {
    LayoutError::InvalidItemSchema {
        id: schema.id.clone(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stencil_format::FormatType;

    fn spec(value: Value) -> Result<ItemSpec, LayoutError> {
        ItemSpec::from_schema(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_dispatches_on_type() {
        let rect = spec(json!({ "id": "", "type": "rect", "x": 0, "y": 0, "width": 5, "height": 5 }))
            .unwrap();
        assert_eq!(rect.basic_kind(), Some(BasicKind::Rect));
        assert_eq!(rect.bounds(), Bounds::from(Rect::new(0.0, 0.0, 5.0, 5.0)));

        let line = spec(json!({ "id": "l", "type": "line", "x1": 0, "y1": 1, "x2": 2, "y2": 3 }))
            .unwrap();
        assert_eq!(line.bounds(), Bounds::from(Line::new(0.0, 1.0, 2.0, 3.0)));

        let ellipse =
            spec(json!({ "id": "e", "type": "ellipse", "cx": 4, "cy": 4, "rx": 2, "ry": 1 })).unwrap();
        assert_eq!(ellipse.bounds(), Bounds::from(Ellipse::new(4.0, 4.0, 2.0, 1.0)));
    }

    #[test]
    fn test_text_block_details() {
        let item = spec(json!({
            "id": "price",
            "type": "text-block",
            "x": 0, "y": 0, "width": 50, "height": 10,
            "value": "100",
            "reference-id": "",
            "multiple-line": false,
            "format": { "type": "number", "base": "", "number": { "precision": 0, "delimiter": "," } }
        }))
        .unwrap();

        let ItemKind::TextBlock(text) = item.kind() else {
            panic!("expected a text block");
        };
        assert_eq!(text.value, "100");
        assert_eq!(text.reference_id, None);
        assert_eq!(text.format.kind(), Some(FormatType::Number));
    }

    #[test]
    fn test_page_number_format_is_a_template() {
        let item = spec(json!({
            "id": "", "type": "page-number",
            "x": 0, "y": 0, "width": 50, "height": 10,
            "format": "{page} / {total}", "target": ""
        }))
        .unwrap();
        assert_eq!(
            item.kind(),
            &ItemKind::PageNumber(PageNumberSpec {
                format: "{page} / {total}".into(),
                target: "".into()
            })
        );
    }

    #[test]
    fn test_missing_geometry_defaults_to_zero() {
        let item = spec(json!({ "id": "box", "type": "rect", "x": 3, "y": 4, "width": 5 })).unwrap();
        assert_eq!(item.bounds(), Bounds::from(Rect::new(3.0, 4.0, 5.0, 0.0)));
    }

    #[test]
    fn test_unknown_type_is_an_undrawable_basic_item() {
        let list = spec(json!({
            "id": "detail", "type": "list", "x": 10, "y": 20, "width": 300, "height": 200,
            "detail": { "height": 20 }
        }))
        .unwrap();
        assert_eq!(list.basic_kind(), Some(BasicKind::Other));
        assert_eq!(list.item_type(), "list");
        assert_eq!(list.bounds(), Bounds::from(Rect::new(10.0, 20.0, 300.0, 200.0)));
        assert!(!BasicKind::Other.is_drawable());

        let stack = spec(json!({ "id": "", "type": "stack-view" })).unwrap();
        assert_eq!(stack.basic_kind(), Some(BasicKind::Other));
        assert_eq!(stack.bounds(), Bounds::from(Rect::new(0.0, 0.0, 0.0, 0.0)));
    }
}
