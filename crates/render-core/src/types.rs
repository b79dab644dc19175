use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stencil_types::{Bounds, Orientation, PageSize};

/// Paper type used when nothing else is known about a page.
pub const DEFAULT_PAPER_TYPE: &str = "A4";

/// The physical page a sink should open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFormat {
    pub paper_type: String,
    pub orientation: Orientation,
    /// Only set for the `"user"` paper type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<PageSize>,
}

impl Default for PageFormat {
    fn default() -> Self {
        Self {
            paper_type: DEFAULT_PAPER_TYPE.to_string(),
            orientation: Orientation::Portrait,
            size: None,
        }
    }
}

/// What kind of item a draw request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawKind {
    Rect,
    Ellipse,
    Line,
    Text,
    Image,
    TextBlock,
    ImageBlock,
    PageNumber,
}

impl DrawKind {
    pub fn is_shape(&self) -> bool {
        matches!(self, DrawKind::Rect | DrawKind::Ellipse | DrawKind::Line)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DrawKind::Text | DrawKind::TextBlock | DrawKind::PageNumber)
    }
}

/// Layout hints for a text block that the sink applies when setting the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextHints {
    pub multiple: bool,
    pub vertical_align: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAlign {
    pub position_x: String,
    pub position_y: String,
}

impl Default for ImageAlign {
    fn default() -> Self {
        Self {
            position_x: "left".to_string(),
            position_y: "top".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DrawContent {
    /// Pure geometry.
    Shape,
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hints: Option<TextHints>,
    },
    Image {
        /// A path or URI for image blocks, base64 data for static images.
        source: String,
        #[serde(default)]
        align: ImageAlign,
    },
}

/// One resolved item, ready to be painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub kind: DrawKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub bounds: Bounds,
    /// Raw style attributes, as exported by the item's style.
    pub styles: Map<String, Value>,
    pub content: DrawContent,
}

impl DrawRequest {
    pub fn style(&self, attribute: &str) -> Option<&Value> {
        self.styles.get(attribute)
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            DrawContent::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
