use super::ItemCore;
use stencil_layout::{BasicKind, ItemSpec};
use stencil_style::StyleKind;

/// A static shape, text or image.
#[derive(Debug, Clone)]
pub struct BasicItem {
    pub(super) core: ItemCore,
    kind: BasicKind,
}

impl BasicItem {
    pub(super) fn new(spec: &ItemSpec, kind: BasicKind) -> Self {
        let style_kind = match kind {
            BasicKind::Image => StyleKind::Basic,
            BasicKind::Text => StyleKind::Text,
            BasicKind::Rect | BasicKind::Ellipse | BasicKind::Line | BasicKind::Other => {
                StyleKind::Graphic
            }
        };
        Self {
            core: ItemCore::new(spec, style_kind),
            kind,
        }
    }

    pub fn kind(&self) -> BasicKind {
        self.kind
    }

    pub fn is_image(&self) -> bool {
        self.kind == BasicKind::Image
    }

    pub fn is_text(&self) -> bool {
        self.kind == BasicKind::Text
    }

    pub fn is_rect(&self) -> bool {
        self.kind == BasicKind::Rect
    }

    pub fn is_ellipse(&self) -> bool {
        self.kind == BasicKind::Ellipse
    }

    pub fn is_line(&self) -> bool {
        self.kind == BasicKind::Line
    }

    /// False for item types the renderer has no drawing for.
    pub fn is_drawable(&self) -> bool {
        self.kind.is_drawable()
    }

    /// The lines of a static text, joined with newlines.
    pub fn text_content(&self) -> String {
        self.core
            .schema()
            .attribute("texts")
            .and_then(|texts| texts.as_array())
            .map(|lines| {
                lines
                    .iter()
                    .filter_map(|line| line.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }

    /// The embedded base64 payload of a static image.
    pub fn image_data(&self) -> &str {
        self.core
            .schema()
            .attribute("data")
            .and_then(|data| data.get("base64"))
            .and_then(|data| data.as_str())
            .unwrap_or("")
    }
}
