use super::ItemCore;
use stencil_layout::{ItemSpec, PageNumberSpec};
use stencil_style::StyleKind;

const REPORT_TARGET: &str = "report";

/// The numbers a page-number item substitutes into its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageNumbering {
    /// Number of the owning page, `None` when the page is not counted.
    pub page: Option<u32>,
    /// The report's last page number.
    pub total: u32,
}

/// Prints the page number and total using a template such as `"{page} / {total}"`.
#[derive(Debug, Clone)]
pub struct PageNumberItem {
    pub(super) core: ItemCore,
    default_format: String,
    number_format: String,
    target: String,
}

impl PageNumberItem {
    pub(super) fn new(spec: &ItemSpec, detail: &PageNumberSpec) -> Self {
        Self {
            core: ItemCore::new(spec, StyleKind::Text),
            default_format: detail.format.clone(),
            number_format: detail.format.clone(),
            target: detail.target.clone(),
        }
    }

    pub fn number_format(&self) -> &str {
        &self.number_format
    }

    pub fn set_number_format(&mut self, format: impl Into<String>) -> &mut Self {
        self.number_format = format.into();
        self
    }

    /// Restores the template declared by the layout.
    pub fn reset_number_format(&mut self) -> &mut Self {
        self.number_format = self.default_format.clone();
        self
    }

    /// Numbered in the report scope: target unset or `"report"`.
    pub fn is_for_report(&self) -> bool {
        self.target.is_empty() || self.target == REPORT_TARGET
    }

    pub fn formatted_page_number(&self, numbering: PageNumbering) -> String {
        if !self.is_for_report() || self.number_format.is_empty() {
            return String::new();
        }
        let page = numbering.page.map(|n| n.to_string()).unwrap_or_default();
        self.number_format
            .replace("{page}", &page)
            .replace("{total}", &numbering.total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_number(format: &str, target: &str) -> PageNumberItem {
        let spec = ItemSpec::from_schema(
            serde_json::from_value(json!({
                "id": "pn", "type": "page-number",
                "x": 0, "y": 0, "width": 40, "height": 10,
                "format": format, "target": target
            }))
            .unwrap(),
        )
        .unwrap();
        let stencil_layout::ItemKind::PageNumber(detail) = spec.kind() else {
            panic!("expected a page number");
        };
        PageNumberItem::new(&spec, detail)
    }

    const FIRST_OF_THREE: PageNumbering = PageNumbering {
        page: Some(1),
        total: 3,
    };

    #[test]
    fn test_substitutes_page_and_total() {
        let item = page_number("{page} / {total}", "");
        assert_eq!(item.formatted_page_number(FIRST_OF_THREE), "1 / 3");
    }

    #[test]
    fn test_list_target_is_not_numbered() {
        let item = page_number("{page}", "list");
        assert!(!item.is_for_report());
        assert_eq!(item.formatted_page_number(FIRST_OF_THREE), "");
        assert!(page_number("{page}", "report").is_for_report());
    }

    #[test]
    fn test_empty_format_prints_nothing() {
        let item = page_number("", "");
        assert_eq!(item.formatted_page_number(FIRST_OF_THREE), "");
    }

    #[test]
    fn test_format_can_be_changed_and_reset() {
        let mut item = page_number("{page}", "");
        item.set_number_format("Page {page} of {total}");
        assert_eq!(item.formatted_page_number(FIRST_OF_THREE), "Page 1 of 3");

        item.reset_number_format();
        assert_eq!(item.number_format(), "{page}");
    }
}
