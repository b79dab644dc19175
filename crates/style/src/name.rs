//! Logical style names, the raw schema attributes that back them, and the
//! per-kind whitelists.

use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A style name as seen by callers of [`ItemStyle::set`](crate::ItemStyle::set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    BorderColor,
    BorderWidth,
    Border,
    FillColor,
    Bold,
    Italic,
    Underline,
    Linethrough,
    Align,
    Valign,
    Color,
    FontSize,
}

impl StyleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleName::BorderColor => "border_color",
            StyleName::BorderWidth => "border_width",
            StyleName::Border => "border",
            StyleName::FillColor => "fill_color",
            StyleName::Bold => "bold",
            StyleName::Italic => "italic",
            StyleName::Underline => "underline",
            StyleName::Linethrough => "linethrough",
            StyleName::Align => "align",
            StyleName::Valign => "valign",
            StyleName::Color => "color",
            StyleName::FontSize => "font_size",
        }
    }

    /// The raw attributes written by a set of this name, in write order.
    pub fn raw_attributes(&self) -> &'static [RawAttribute] {
        match self {
            StyleName::BorderColor => &[RawAttribute::BorderColor],
            StyleName::BorderWidth => &[RawAttribute::BorderWidth],
            StyleName::Border => &[RawAttribute::BorderWidth, RawAttribute::BorderColor],
            StyleName::FillColor => &[RawAttribute::FillColor],
            StyleName::Bold | StyleName::Italic | StyleName::Underline | StyleName::Linethrough => {
                &[RawAttribute::FontStyle]
            }
            StyleName::Align => &[RawAttribute::TextAlign],
            StyleName::Valign => &[RawAttribute::VerticalAlign],
            StyleName::Color => &[RawAttribute::Color],
            StyleName::FontSize => &[RawAttribute::FontSize],
        }
    }
}

impl FromStr for StyleName {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = match s {
            "border_color" => StyleName::BorderColor,
            "border_width" => StyleName::BorderWidth,
            "border" => StyleName::Border,
            "fill_color" => StyleName::FillColor,
            "bold" => StyleName::Bold,
            "italic" => StyleName::Italic,
            "underline" => StyleName::Underline,
            "linethrough" => StyleName::Linethrough,
            "align" => StyleName::Align,
            "valign" => StyleName::Valign,
            "color" => StyleName::Color,
            "font_size" => StyleName::FontSize,
            _ => {
                return Err(StyleError::UnavailableStyleName {
                    name: s.to_string(),
                });
            }
        };
        Ok(name)
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute name as it appears in the layout document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawAttribute {
    BorderColor,
    BorderWidth,
    FillColor,
    FontStyle,
    TextAlign,
    VerticalAlign,
    Color,
    FontSize,
}

impl RawAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawAttribute::BorderColor => "border-color",
            RawAttribute::BorderWidth => "border-width",
            RawAttribute::FillColor => "fill-color",
            RawAttribute::FontStyle => "font-style",
            RawAttribute::TextAlign => "text-align",
            RawAttribute::VerticalAlign => "vertical-align",
            RawAttribute::Color => "color",
            RawAttribute::FontSize => "font-size",
        }
    }
}

impl fmt::Display for RawAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which style model an item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Raw passthrough with an empty whitelist. Used by image items.
    #[default]
    Basic,
    Graphic,
    Text,
}

impl StyleKind {
    pub fn available_names(&self) -> &'static [StyleName] {
        match self {
            StyleKind::Basic => &[],
            StyleKind::Graphic => &[
                StyleName::BorderColor,
                StyleName::BorderWidth,
                StyleName::Border,
                StyleName::FillColor,
            ],
            StyleKind::Text => &[
                StyleName::Bold,
                StyleName::Italic,
                StyleName::Underline,
                StyleName::Linethrough,
                StyleName::Align,
                StyleName::Valign,
                StyleName::Color,
                StyleName::FontSize,
            ],
        }
    }

    pub fn allows(&self, name: StyleName) -> bool {
        self.available_names().contains(&name)
    }
}
