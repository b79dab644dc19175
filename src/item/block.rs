use super::ItemCore;
use crate::error::ReportError;
use stencil_format::TextFormatter;
use stencil_layout::{ItemSpec, TextBlockSpec};
use stencil_style::StyleKind;
use stencil_types::ItemId;

const REFERENCED_REASON: &str = "It can't be overwritten, because it has references to the other.";
const MULTIPLE_LINE_REASON: &str = "It is multiple-line Text Block.";
const NO_FORMAT_REASON: &str = "It has no formatting configuration.";

/// A text field whose value is set per page.
///
/// A text block declaring a `reference-id` has no value of its own: it shows
/// the current value of the referenced item and rejects writes. References are
/// resolved by the owning [`Page`](crate::Page), see
/// [`Page::item_value`](crate::Page::item_value).
#[derive(Debug, Clone)]
pub struct TextBlockItem {
    pub(super) core: ItemCore,
    value: String,
    reference_id: Option<ItemId>,
    multiple: bool,
    formatter: TextFormatter,
    format_enabled: bool,
}

impl TextBlockItem {
    pub(super) fn new(spec: &ItemSpec, detail: &TextBlockSpec) -> Self {
        Self {
            core: ItemCore::new(spec, StyleKind::Text),
            value: detail.value.clone(),
            reference_id: detail.reference_id.clone(),
            multiple: detail.multiple,
            formatter: TextFormatter::new(detail.format.clone()),
            format_enabled: detail.format.has_settings(),
        }
    }

    /// The item's own value. Empty for a referencing item.
    pub fn own_value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> Result<&mut Self, ReportError> {
        if self.has_reference() {
            return Err(ReportError::ReadonlyItem {
                id: self.core.spec().id().to_string(),
                reason: REFERENCED_REASON.to_string(),
            });
        }
        self.value = value.into();
        Ok(self)
    }

    pub fn has_reference(&self) -> bool {
        self.reference_id.is_some()
    }

    pub fn reference_id(&self) -> Option<&ItemId> {
        self.reference_id.as_ref()
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn has_format_settings(&self) -> bool {
        self.formatter.settings().has_settings()
    }

    pub fn is_format_enabled(&self) -> bool {
        self.format_enabled
    }

    /// Turning formatting on requires a single-line block with format settings.
    pub fn set_format_enabled(&mut self, enable: bool) -> Result<&mut Self, ReportError> {
        if enable {
            let reason = if self.multiple {
                Some(MULTIPLE_LINE_REASON)
            } else if !self.has_format_settings() {
                Some(NO_FORMAT_REASON)
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ReportError::NotFormattable {
                    id: self.core.spec().id().to_string(),
                    reason: reason.to_string(),
                });
            }
        }
        self.format_enabled = enable;
        Ok(self)
    }

    pub fn formatter(&self) -> &TextFormatter {
        &self.formatter
    }

    /// The text to display for `value`: formatted when formatting is enabled.
    pub fn display_value(&self, value: &str) -> String {
        if self.format_enabled {
            self.formatter.format(value)
        } else {
            value.to_string()
        }
    }
}

/// An image whose source is set per page.
#[derive(Debug, Clone)]
pub struct ImageBlockItem {
    pub(super) core: ItemCore,
    source: String,
}

impl ImageBlockItem {
    pub(super) fn new(spec: &ItemSpec) -> Self {
        Self {
            core: ItemCore::new(spec, StyleKind::Basic),
            source: String::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn set_source(&mut self, source: impl Into<String>) -> &mut Self {
        self.source = source.into();
        self
    }

    pub fn value(&self) -> &str {
        self.source()
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_source(value)
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// Horizontal placement inside the box, `left` when unset.
    pub fn position_x(&self) -> &str {
        match self.core.schema().style_str("position-x") {
            "" => "left",
            other => other,
        }
    }

    /// Vertical placement inside the box, `top` when unset.
    pub fn position_y(&self) -> &str {
        match self.core.schema().style_str("position-y") {
            "" => "top",
            "center" => "middle",
            other => other,
        }
    }
}
