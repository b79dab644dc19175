mod common;

use common::fixtures::{image_block, layout, page_number, rect, text_block, text_block_with};
use common::{TestResult, init_logger, layout_bytes, report_with_files, report_with_layout};
use serde_json::json;
use std::sync::Arc;
use stencil::{Item, ReportBuilder, ReportError};

#[test]
fn test_page_number_counts_the_whole_report() -> TestResult {
    init_logger();
    let mut report = report_with_layout(&layout("0.9.1", json!([page_number("pn", "{page} / {total}")])))?;
    for _ in 0..3 {
        report.add_page(None, true)?;
    }

    assert_eq!(report.last_page_number(), 3);
    let first = report.page(0)?;
    assert_eq!(report.formatted_page_number(first, "pn")?, "1 / 3");
    Ok(())
}

#[test]
fn test_start_page_number_offsets_the_total() -> TestResult {
    let mut report = ReportBuilder::new()
        .with_default_layout_data(layout_bytes(&layout("0.9.1", json!([page_number("pn", "{page}/{total}")]))))
        .start_page_number(10)
        .build()?;
    report.add_page(None, true)?;
    report.add_page(None, false)?;
    report.add_page(None, true)?;

    assert_eq!(report.page_count(), 2);
    assert_eq!(report.last_page_number(), 11);
    let uncounted = report.page(1)?;
    assert_eq!(uncounted.number(), None);
    assert_eq!(report.formatted_page_number(uncounted, "pn")?, "/11");
    Ok(())
}

#[test]
fn test_reference_follows_the_current_value() -> TestResult {
    let document = layout(
        "0.9.1",
        json!([text_block("name"), text_block_with("copy", json!({ "reference-id": "name" }))]),
    );
    let mut report = report_with_layout(&document)?;
    let page = report.add_page(None, true)?;

    page.item("copy")?;
    page.set_item_value("name", "Alice")?;
    assert_eq!(page.real_value("copy")?, "Alice");

    page.set_item_value("name", "Bob")?;
    assert_eq!(page.real_value("copy")?, "Bob");

    let err = page.set_item_value("copy", "Carol").unwrap_err();
    assert!(matches!(err, ReportError::ReadonlyItem { ref id, .. } if id == "copy"));
    Ok(())
}

#[test]
fn test_items_are_cached_per_page() -> TestResult {
    let mut report = report_with_layout(&layout("0.9.1", json!([text_block("name")])))?;
    report.add_page(None, true)?;
    report.add_page(None, true)?;

    let first = report.page_mut(0)?;
    let a: *const Item = first.item("name")?;
    let b: *const Item = first.item("name")?;
    assert!(std::ptr::eq(a, b));

    let other: *const Item = report.page_mut(1)?.item("name")?;
    assert!(!std::ptr::eq(a, other));
    Ok(())
}

#[test]
fn test_values_stay_on_their_page() -> TestResult {
    let mut report = report_with_layout(&layout("0.9.1", json!([text_block("name")])))?;
    report.add_page(None, true)?.set_item_value("name", "first")?;
    report.add_page(None, true)?.set_item_value("name", "second")?;

    assert_eq!(report.page(0)?.item_value("name")?, "first");
    assert_eq!(report.page(1)?.item_value("name")?, "second");
    Ok(())
}

#[test]
fn test_value_errors() -> TestResult {
    let document = layout(
        "0.9.1",
        json!([
            rect("frame"),
            text_block_with("notes", json!({ "multiple-line": true })),
            image_block("logo")
        ]),
    );
    let mut report = report_with_layout(&document)?;
    let page = report.add_page(None, true)?;

    assert!(matches!(
        page.set_item_value("frame", "x"),
        Err(ReportError::UneditableItem(id)) if id == "frame"
    ));
    assert!(page.set_item_value("missing", "x").unwrap_err().is_item_not_found());

    let notes = page.item("notes")?.as_text_block_mut().ok_or("text block")?;
    let err = notes.set_format_enabled(true).unwrap_err();
    assert!(matches!(err, ReportError::NotFormattable { ref reason, .. } if reason == "It is multiple-line Text Block."));

    page.set_item_values([("logo", "/img/logo.png"), ("notes", "a\nb")])?;
    assert_eq!(page.item_value("logo")?, "/img/logo.png");
    Ok(())
}

#[test]
fn test_formatted_value_is_handed_to_the_renderer() -> TestResult {
    let document = layout(
        "0.9.1",
        json!([text_block_with("amount", json!({
            "format": {
                "type": "number",
                "base": "$ {value}",
                "number": { "delimiter": ",", "precision": 2 }
            }
        }))]),
    );
    let mut report = report_with_layout(&document)?;
    let page = report.add_page(None, true)?;
    page.set_item_value("amount", "1234.5")?;

    assert_eq!(page.item_value("amount")?, "1234.5");
    assert_eq!(page.real_value("amount")?, "$ 1,234.50");
    Ok(())
}

#[test]
fn test_layouts_are_loaded_once_by_name() -> TestResult {
    let invoice = layout("0.9.1", json!([rect("frame")]));
    let letter = layout("0.9.1", json!([text_block("name")]));
    let mut report = report_with_files(&[("invoice.tlf", &invoice), ("letter.tlf", &letter)]);

    let a = report.load_layout("invoice")?;
    let b = report.load_layout("invoice.tlf")?;
    let c = report.load_layout("letter")?;
    assert!(Arc::ptr_eq(&a, &b));
    assert!(!Arc::ptr_eq(&a, &c));

    report.add_page(Some("letter"), true)?;
    report.add_page(Some("invoice"), true)?;
    assert!(Arc::ptr_eq(report.page(1)?.layout(), &a));
    Ok(())
}

#[test]
fn test_layouts_are_read_from_a_directory() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("invoice.tlf"),
        layout_bytes(&layout("0.9.1", json!([text_block("name")]))),
    )?;

    let mut report = ReportBuilder::new()
        .with_layout_dir(dir.path())
        .with_default_layout("invoice")
        .build()?;
    assert!(report.add_page(None, true)?.has_item("name"));

    let err = report.add_page(Some("receipt"), true).unwrap_err();
    assert!(matches!(err, ReportError::LayoutFileNotFound(ref name) if name == "receipt.tlf"));
    Ok(())
}

#[test]
fn test_incompatible_layout_file_is_rejected() {
    let old = layout("0.8.1", json!([]));
    let mut report = report_with_files(&[("old.tlf", &old)]);
    let err = report.load_layout("old").unwrap_err();
    assert!(matches!(err, ReportError::Layout(stencil::LayoutError::IncompatibleLayout { .. })));
}

#[test]
fn test_blank_pages_take_a_number() -> TestResult {
    let mut report = report_with_layout(&layout("0.9.1", json!([])))?;
    report.add_page(None, true)?;
    let blank = report.add_blank_page(true);
    report.add_blank_page(false);

    assert_eq!(blank.number(), Some(2));
    assert!(report.pages()[1].is_blank());
    assert!(!report.pages()[2].is_countable());
    assert!(matches!(report.page(1), Err(ReportError::BlankPage(1))));
    Ok(())
}
