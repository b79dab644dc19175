//! Serde model of a layout document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use stencil_types::Orientation;

/// The decoded layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSchema {
    pub version: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub report: ReportMeta,
    #[serde(default)]
    pub items: Vec<ItemSchema>,
    /// Top-level keys this model does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    #[serde(rename = "paper-type", default, deserialize_with = "null_as_empty")]
    pub paper_type: String,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the document's `items` array.
///
/// Only the keys every item shares are typed; geometry and the type-specific
/// keys stay in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSchema {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default = "visible_by_default")]
    pub display: bool,
    #[serde(default)]
    pub style: Map<String, Value>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ItemSchema {
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// A string attribute. Missing and `null` read as empty.
    pub fn str_attribute(&self, name: &str) -> &str {
        self.attribute(name).and_then(Value::as_str).unwrap_or("")
    }

    pub fn bool_attribute(&self, name: &str) -> bool {
        self.attribute(name).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn f64_attribute(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(Value::as_f64)
    }

    /// A string entry of the item's `style` map. Missing and `null` read as empty.
    pub fn style_str(&self, name: &str) -> &str {
        self.style.get(name).and_then(Value::as_str).unwrap_or("")
    }
}

fn visible_by_default() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
