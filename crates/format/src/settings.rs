//! Text format settings as they appear under a text block's `format` key.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The typed transform selected by a format's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    Number,
    Datetime,
    Padding,
}

impl FormatType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(FormatType::Number),
            "datetime" => Some(FormatType::Datetime),
            "padding" => Some(FormatType::Padding),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFormat {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub format_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub base: String,
    pub number: NumberFormat,
    pub datetime: DatetimeFormat,
    pub padding: PaddingFormat,
}

impl TextFormat {
    /// The configured transform. Unknown type names select none.
    pub fn kind(&self) -> Option<FormatType> {
        FormatType::from_name(&self.format_type)
    }

    /// True when either a type transform or a base template is declared.
    pub fn has_settings(&self) -> bool {
        !self.format_type.is_empty() || !self.base.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    #[serde(deserialize_with = "lenient_u32")]
    pub precision: u32,
    #[serde(deserialize_with = "lenient_string")]
    pub delimiter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatetimeFormat {
    #[serde(deserialize_with = "lenient_string")]
    pub format: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PadDirection {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingFormat {
    #[serde(rename = "char", deserialize_with = "lenient_string")]
    pub character: String,
    #[serde(deserialize_with = "lenient_string")]
    pub direction: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub length: u32,
}

impl PaddingFormat {
    /// `"L"` pads on the left; anything else pads on the right.
    pub fn pad_direction(&self) -> PadDirection {
        if self.direction == "L" {
            PadDirection::Left
        } else {
            PadDirection::Right
        }
    }
}

/// Accepts a string, a number, or `null` (read as empty).
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Accepts a non-negative integer, a numeric string, or an empty value (read as 0).
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Null => Some(0),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) if s.trim().is_empty() => Some(0),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| serde::de::Error::custom(format!("expected a count, found {value}")))
}
