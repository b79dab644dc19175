use serde_json::{Value, json};

/// A layout document with the given version and items on portrait A4.
pub fn layout(version: &str, items: Value) -> Value {
    json!({
        "version": version,
        "title": "Invoice",
        "report": { "paper-type": "A4", "orientation": "portrait" },
        "items": items
    })
}

pub fn user_paper_layout(width: f64, height: f64) -> Value {
    json!({
        "version": "0.9.1",
        "title": "Label",
        "report": {
            "paper-type": "user",
            "orientation": "landscape",
            "width": width,
            "height": height
        },
        "items": []
    })
}

pub fn rect(id: &str) -> Value {
    json!({
        "id": id, "type": "rect", "display": true,
        "x": 10.0, "y": 10.0, "width": 100.0, "height": 50.0,
        "style": { "border-width": 1, "border-color": "#000000", "border-style": "solid", "fill-color": "#ffffff" }
    })
}

pub fn static_text(lines: &[&str]) -> Value {
    json!({
        "id": "", "type": "text", "display": true,
        "x": 10.0, "y": 70.0, "width": 100.0, "height": 20.0,
        "texts": lines,
        "style": { "font-size": 12, "color": "#333333", "font-style": [], "text-align": "left", "vertical-align": "middle" }
    })
}

pub fn text_block(id: &str) -> Value {
    text_block_with(id, json!({}))
}

/// A text block with extra attributes merged over the defaults.
pub fn text_block_with(id: &str, extra: Value) -> Value {
    let mut item = json!({
        "id": id, "type": "text-block", "display": true,
        "x": 10.0, "y": 100.0, "width": 200.0, "height": 20.0,
        "value": "", "reference-id": "", "multiple-line": false,
        "format": { "type": "", "base": "" },
        "style": {
            "font-size": 10, "color": "#000000", "font-style": [],
            "text-align": "left", "vertical-align": "top",
            "overflow": "truncate", "line-height": ""
        }
    });
    if let (Value::Object(base), Value::Object(extra)) = (&mut item, extra) {
        base.extend(extra);
    }
    item
}

pub fn image_block(id: &str) -> Value {
    json!({
        "id": id, "type": "image-block", "display": true,
        "x": 0.0, "y": 0.0, "width": 40.0, "height": 40.0,
        "style": { "position-x": "center", "position-y": "center" }
    })
}

pub fn page_number(id: &str, format: &str) -> Value {
    json!({
        "id": id, "type": "page-number", "display": true,
        "x": 500.0, "y": 800.0, "width": 60.0, "height": 12.0,
        "format": format, "target": "",
        "style": { "font-size": 8, "color": "#000000", "font-style": [], "text-align": "right", "vertical-align": "top" }
    })
}

/// A list item. Compiled and addressable, but never drawn.
pub fn list(id: &str) -> Value {
    json!({
        "id": id, "type": "list", "display": true,
        "x": 10.0, "y": 200.0, "width": 300.0, "height": 200.0,
        "content-height": 180.0, "auto-page-break": true,
        "header": { "enabled": true, "height": 20.0, "items": [] },
        "detail": { "height": 20.0, "items": [] },
        "style": { "border-width": 1, "border-color": "#000000" }
    })
}
