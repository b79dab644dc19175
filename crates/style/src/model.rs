use crate::error::StyleError;
use crate::name::{RawAttribute, StyleKind, StyleName};
use crate::text::{FontStyleFlag, TextAlign, VerticalAlign};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The style of one item: a whitelist-scoped view over its raw attributes.
///
/// Values are stored under the raw attribute names of the layout document, so
/// [`ItemStyle::export`] can be fed straight back into [`ItemStyle::new`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemStyle {
    kind: StyleKind,
    styles: Map<String, Value>,
}

impl ItemStyle {
    pub fn new(kind: StyleKind, styles: Map<String, Value>) -> Self {
        Self { kind, styles }
    }

    pub fn basic(styles: Map<String, Value>) -> Self {
        Self::new(StyleKind::Basic, styles)
    }

    pub fn graphic(styles: Map<String, Value>) -> Self {
        Self::new(StyleKind::Graphic, styles)
    }

    pub fn text(styles: Map<String, Value>) -> Self {
        Self::new(StyleKind::Text, styles)
    }

    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    pub fn available_names(&self) -> &'static [StyleName] {
        self.kind.available_names()
    }

    pub fn has_style(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    pub fn set(&mut self, name: &str, value: Value) -> Result<(), StyleError> {
        let name = self.resolve(name)?;
        match name {
            StyleName::BorderColor | StyleName::FillColor | StyleName::Color => {
                expect_string(name, &value)?;
                self.write(name, value);
            }
            StyleName::BorderWidth | StyleName::FontSize => {
                expect_number(name, &value)?;
                self.write(name, value);
            }
            StyleName::Border => {
                let (width, color) = match value.as_array().map(Vec::as_slice) {
                    Some([width @ Value::Number(_), color @ Value::String(_)]) => {
                        (width.clone(), color.clone())
                    }
                    _ => {
                        return Err(StyleError::InvalidValueType {
                            name: name.to_string(),
                            expected: "an array of [width, color]",
                        });
                    }
                };
                self.write_raw(RawAttribute::BorderWidth, width);
                self.write_raw(RawAttribute::BorderColor, color);
            }
            StyleName::Bold | StyleName::Italic | StyleName::Underline | StyleName::Linethrough => {
                let Some(enabled) = value.as_bool() else {
                    return Err(StyleError::InvalidValueType {
                        name: name.to_string(),
                        expected: "a boolean",
                    });
                };
                self.set_font_style(font_flag(name), enabled);
            }
            StyleName::Align => {
                let align = expect_enumerated(name, &value, &TextAlign::ALLOWED)?;
                self.write(name, Value::String(align));
            }
            StyleName::Valign => {
                let valign = expect_enumerated(name, &value, &VerticalAlign::ALLOWED)?;
                self.write(name, Value::String(valign));
            }
        }
        Ok(())
    }

    /// Reads a style by its logical name. Unset plain attributes read as `null`.
    pub fn get(&self, name: &str) -> Result<Value, StyleError> {
        let name = self.resolve(name)?;
        let value = match name {
            StyleName::Border => Value::Array(vec![
                self.read_raw(RawAttribute::BorderWidth),
                self.read_raw(RawAttribute::BorderColor),
            ]),
            StyleName::Bold | StyleName::Italic | StyleName::Underline | StyleName::Linethrough => {
                Value::Bool(self.has_font_style(font_flag(name)))
            }
            StyleName::Align => {
                self.read_alignment(RawAttribute::TextAlign, TextAlign::default().as_str())
            }
            StyleName::Valign => {
                self.read_alignment(RawAttribute::VerticalAlign, VerticalAlign::default().as_str())
            }
            _ => self.read_raw(name.raw_attributes()[0]),
        };
        Ok(value)
    }

    /// Applies each style in order. A failure leaves the earlier sets applied.
    pub fn set_styles<'a, I>(&mut self, styles: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        for (name, value) in styles {
            self.set(name, value)?;
        }
        Ok(())
    }

    /// The raw attribute map, keyed by layout-document attribute names.
    pub fn export(&self) -> Map<String, Value> {
        self.styles.clone()
    }

    /// Reads a raw attribute directly, bypassing the whitelist.
    pub fn read_style(&self, attribute: &str) -> Option<&Value> {
        self.styles.get(attribute)
    }

    pub fn text_align(&self) -> TextAlign {
        self.read_str(RawAttribute::TextAlign)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.read_str(RawAttribute::VerticalAlign)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn has_font_style(&self, flag: FontStyleFlag) -> bool {
        self.font_styles().iter().any(|s| s == flag.as_str())
    }

    fn set_font_style(&mut self, flag: FontStyleFlag, enabled: bool) {
        let mut flags = self.font_styles();
        let present = flags.iter().any(|s| s == flag.as_str());
        if enabled && !present {
            flags.push(flag.as_str().to_string());
        } else if !enabled && present {
            flags.retain(|s| s != flag.as_str());
        }
        let list = flags.into_iter().map(Value::String).collect();
        self.write_raw(RawAttribute::FontStyle, Value::Array(list));
    }

    fn font_styles(&self) -> Vec<String> {
        match self.styles.get(RawAttribute::FontStyle.as_str()) {
            Some(Value::Array(list)) => list
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn resolve(&self, name: &str) -> Result<StyleName, StyleError> {
        let unavailable = || StyleError::UnavailableStyleName {
            name: name.to_string(),
        };
        let parsed = name.parse::<StyleName>().map_err(|_| unavailable())?;
        if self.kind.allows(parsed) {
            Ok(parsed)
        } else {
            Err(unavailable())
        }
    }

    fn write(&mut self, name: StyleName, value: Value) {
        self.write_raw(name.raw_attributes()[0], value);
    }

    fn write_raw(&mut self, attribute: RawAttribute, value: Value) {
        self.styles.insert(attribute.as_str().to_string(), value);
    }

    fn read_raw(&self, attribute: RawAttribute) -> Value {
        self.styles
            .get(attribute.as_str())
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// The raw alignment as written in the layout, `default` when unset or empty.
    fn read_alignment(&self, attribute: RawAttribute, default: &str) -> Value {
        Value::String(self.read_str(attribute).unwrap_or(default).to_string())
    }

    fn read_str(&self, attribute: RawAttribute) -> Option<&str> {
        self.styles
            .get(attribute.as_str())
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

fn font_flag(name: StyleName) -> FontStyleFlag {
    match name {
        StyleName::Italic => FontStyleFlag::Italic,
        StyleName::Underline => FontStyleFlag::Underline,
        StyleName::Linethrough => FontStyleFlag::Linethrough,
        _ => FontStyleFlag::Bold,
    }
}

fn expect_string(name: StyleName, value: &Value) -> Result<(), StyleError> {
    if value.is_string() {
        Ok(())
    } else {
        Err(StyleError::InvalidValueType {
            name: name.to_string(),
            expected: "a string",
        })
    }
}

fn expect_number(name: StyleName, value: &Value) -> Result<(), StyleError> {
    if value.is_number() {
        Ok(())
    } else {
        Err(StyleError::InvalidValueType {
            name: name.to_string(),
            expected: "a number",
        })
    }
}

fn expect_enumerated(
    name: StyleName,
    value: &Value,
    allowed: &[&str],
) -> Result<String, StyleError> {
    let Some(s) = value.as_str() else {
        return Err(StyleError::InvalidValueType {
            name: name.to_string(),
            expected: "a string",
        });
    };
    if allowed.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(StyleError::UnavailableStyleValue {
            name: name.to_string(),
            value: s.to_string(),
            allowed: allowed.iter().map(|a| a.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn styles(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_graphic_border_is_compound() {
        let mut style = ItemStyle::graphic(Map::new());
        style.set("border", json!([2, "#ff0000"])).unwrap();

        assert_eq!(style.get("border_width").unwrap(), json!(2));
        assert_eq!(style.get("border_color").unwrap(), json!("#ff0000"));
        assert_eq!(
            style.export(),
            styles(json!({ "border-width": 2, "border-color": "#ff0000" }))
        );
    }

    #[test]
    fn test_text_style_rejects_graphic_names() {
        let mut style = ItemStyle::text(Map::new());
        let err = style.set("fill_color", json!("red")).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnavailableStyleName {
                name: "fill_color".into()
            }
        );
        assert!(style.get("border").is_err());
    }

    #[test]
    fn test_basic_style_has_no_accessors() {
        let style = ItemStyle::basic(styles(json!({ "fill-color": "none" })));
        assert!(style.get("fill_color").is_err());
        assert_eq!(style.read_style("fill-color"), Some(&json!("none")));
    }

    #[test]
    fn test_align_rejects_values_outside_the_set() {
        let mut style = ItemStyle::text(Map::new());
        let err = style.set("align", json!("justify")).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnavailableStyleValue {
                name: "align".into(),
                value: "justify".into(),
                allowed: vec!["left".into(), "center".into(), "right".into()],
            }
        );
        assert_eq!(
            err.to_string(),
            "Unavailable value 'justify' for style 'align', allowed: left, center, right"
        );
    }

    #[test]
    fn test_valign_rejects_values_outside_the_set() {
        let mut style = ItemStyle::text(Map::new());
        let err = style.set("valign", json!("center")).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnavailableStyleValue {
                name: "valign".into(),
                value: "center".into(),
                allowed: vec!["top".into(), "middle".into(), "bottom".into()],
            }
        );
        assert_eq!(style.get("valign").unwrap(), json!("top"));
    }

    #[test]
    fn test_alignment_reads_back_as_written() {
        let style = ItemStyle::text(styles(json!({
            "text-align": "justify",
            "vertical-align": "center"
        })));
        assert_eq!(style.get("align").unwrap(), json!("justify"));
        assert_eq!(style.get("valign").unwrap(), json!("center"));
        assert_eq!(style.text_align(), TextAlign::default());
    }

    #[test]
    fn test_alignment_defaults_when_unset_or_empty() {
        let style = ItemStyle::text(styles(json!({ "text-align": "" })));
        assert_eq!(style.get("align").unwrap(), json!("left"));
        assert_eq!(style.get("valign").unwrap(), json!("top"));
    }

    #[test]
    fn test_font_style_flags_toggle_idempotently() {
        let mut style = ItemStyle::text(styles(json!({ "font-style": ["italic"] })));
        style.set("bold", json!(true)).unwrap();
        style.set("bold", json!(true)).unwrap();
        assert_eq!(style.read_style("font-style"), Some(&json!(["italic", "bold"])));

        style.set("italic", json!(false)).unwrap();
        style.set("italic", json!(false)).unwrap();
        assert_eq!(style.read_style("font-style"), Some(&json!(["bold"])));
        assert_eq!(style.get("italic").unwrap(), json!(false));
    }

    #[test]
    fn test_wrong_value_shape_is_rejected() {
        let mut style = ItemStyle::text(Map::new());
        assert!(matches!(
            style.set("bold", json!("yes")),
            Err(StyleError::InvalidValueType { .. })
        ));
        assert!(matches!(
            style.set("font_size", json!("12")),
            Err(StyleError::InvalidValueType { .. })
        ));
    }

    #[test]
    fn test_set_styles_is_not_transactional() {
        let mut style = ItemStyle::text(Map::new());
        let result = style.set_styles([
            ("color", json!("#0000ff")),
            ("align", json!("middle")),
            ("font_size", json!(9)),
        ]);
        assert!(result.is_err());
        assert_eq!(style.get("color").unwrap(), json!("#0000ff"));
        assert_eq!(style.get("font_size").unwrap(), Value::Null);
    }

    fn graphic_pair() -> impl Strategy<Value = (&'static str, Value)> {
        prop_oneof![
            "#[0-9a-f]{6}".prop_map(|c| ("border_color", json!(c))),
            "#[0-9a-f]{6}".prop_map(|c| ("fill_color", json!(c))),
            (0u32..20).prop_map(|w| ("border_width", json!(w))),
            ((0u32..20), "#[0-9a-f]{6}").prop_map(|(w, c)| ("border", json!([w, c]))),
        ]
    }

    fn text_pair() -> impl Strategy<Value = (&'static str, Value)> {
        prop_oneof![
            any::<bool>().prop_map(|b| ("bold", json!(b))),
            any::<bool>().prop_map(|b| ("italic", json!(b))),
            any::<bool>().prop_map(|b| ("underline", json!(b))),
            any::<bool>().prop_map(|b| ("linethrough", json!(b))),
            prop::sample::select(TextAlign::ALLOWED.to_vec()).prop_map(|a| ("align", json!(a))),
            prop::sample::select(VerticalAlign::ALLOWED.to_vec())
                .prop_map(|v| ("valign", json!(v))),
            "#[0-9a-f]{6}".prop_map(|c| ("color", json!(c))),
            (6u32..72).prop_map(|s| ("font_size", json!(s))),
        ]
    }

    proptest! {
        #[test]
        fn prop_graphic_set_then_get_round_trips((name, value) in graphic_pair()) {
            let mut style = ItemStyle::graphic(Map::new());
            style.set(name, value.clone()).unwrap();
            prop_assert_eq!(style.get(name).unwrap(), value);
        }

        #[test]
        fn prop_text_set_then_get_round_trips((name, value) in text_pair()) {
            let mut style = ItemStyle::text(Map::new());
            style.set(name, value.clone()).unwrap();
            prop_assert_eq!(style.get(name).unwrap(), value);
        }

        #[test]
        fn prop_export_is_idempotent(changes in prop::collection::vec(text_pair(), 0..8)) {
            let mut style = ItemStyle::text(Map::new());
            style.set_styles(changes.iter().map(|(n, v)| (*n, v.clone()))).unwrap();
            let exported = style.export();
            let rebuilt = ItemStyle::new(style.kind(), exported.clone());
            prop_assert_eq!(rebuilt.export(), exported);
        }

        #[test]
        fn prop_graphic_export_is_idempotent(changes in prop::collection::vec(graphic_pair(), 0..8)) {
            let mut style = ItemStyle::graphic(Map::new());
            style.set_styles(changes.iter().map(|(n, v)| (*n, v.clone()))).unwrap();
            let exported = style.export();
            let rebuilt = ItemStyle::graphic(exported.clone());
            prop_assert_eq!(rebuilt.export(), exported);
            for name in ["border", "border_color", "border_width", "fill_color"] {
                prop_assert_eq!(rebuilt.get(name).unwrap(), style.get(name).unwrap());
            }
        }

        #[test]
        fn prop_unknown_names_are_unavailable(name in "[a-z]{3,12}") {
            prop_assume!(name.parse::<StyleName>().is_err());
            let mut style = ItemStyle::graphic(Map::new());
            let is_unavailable = matches!(
                style.set(&name, json!(1)),
                Err(StyleError::UnavailableStyleName { .. })
            );
            prop_assert!(is_unavailable);
        }
    }
}
