pub mod fixtures;

use serde_json::Value;
use std::sync::Arc;
use stencil::{DisplayList, DisplayListSink, InMemoryResourceProvider, Report, ReportBuilder, ReportError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Encodes a layout document the way a layout file stores it.
pub fn layout_bytes(document: &Value) -> Vec<u8> {
    serde_json::to_vec(document).expect("layout fixture encodes")
}

/// A report whose default layout is `document`.
pub fn report_with_layout(document: &Value) -> Result<Report, ReportError> {
    ReportBuilder::new()
        .with_default_layout_data(layout_bytes(document))
        .build()
}

/// A report that loads the given named documents from memory.
pub fn report_with_files(files: &[(&str, &Value)]) -> Report {
    let provider = files
        .iter()
        .fold(InMemoryResourceProvider::new(), |provider, (name, document)| {
            provider.with(*name, layout_bytes(document))
        });
    Report::new(Arc::new(provider))
}

/// Generates `report` into a display list.
pub fn render(report: &Report) -> Result<DisplayList, ReportError> {
    let mut sink = DisplayListSink::new();
    report.generate(&mut sink)?;
    Ok(sink.into_display_list())
}
