use crate::types::{DrawContent, DrawKind, DrawRequest};
use serde_json::Value;

/// Color value meaning "do not paint".
pub const NO_PAINT: &str = "none";

/// True for an explicit no-paint color. Missing and empty colors are not
/// no-paint; they fall back to the backend's default.
pub fn is_no_paint(color: &Value) -> bool {
    color.as_str().is_some_and(|c| c.trim().eq_ignore_ascii_case(NO_PAINT))
}

fn paints(color: Option<&Value>) -> bool {
    match color {
        Some(Value::String(s)) => !s.is_empty() && !s.trim().eq_ignore_ascii_case(NO_PAINT),
        _ => false,
    }
}

/// Whether drawing `request` would leave any mark on the page.
///
/// Shapes need a visible fill or a visible border of non-zero width. Text is
/// skipped only when its color is explicitly no-paint.
pub fn has_visible_paint(request: &DrawRequest) -> bool {
    if request.kind.is_shape() {
        let stroked = paints(request.style("border-color"))
            && request
                .style("border-width")
                .and_then(Value::as_f64)
                .is_none_or(|w| w > 0.0);
        let filled = request.kind != DrawKind::Line && paints(request.style("fill-color"));
        return stroked || filled;
    }
    match &request.content {
        DrawContent::Text { .. } => !request.style("color").is_some_and(is_no_paint),
        _ => true,
    }
}
