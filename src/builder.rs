use crate::error::ReportError;
use crate::report::Report;
use std::path::PathBuf;
use std::sync::Arc;
use stencil_resource::FilesystemResourceProvider;
use stencil_traits::{InMemoryResourceProvider, ResourceProvider};

enum DefaultLayout {
    Named(String),
    Data(Vec<u8>),
}

/// A builder for creating a [`Report`].
///
/// ```no_run
/// use stencil::ReportBuilder;
///
/// let mut report = ReportBuilder::new()
///     .with_layout_dir("layouts")
///     .with_default_layout("invoice")
///     .build()?;
/// report.add_page(None, true)?.set_item_value("customer", "ACME")?;
/// # Ok::<(), stencil::ReportError>(())
/// ```
#[derive(Default)]
pub struct ReportBuilder {
    provider: Option<Arc<dyn ResourceProvider>>,
    layout_dir: Option<PathBuf>,
    default_layout: Option<DefaultLayout>,
    start_page_number: Option<u32>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the default layout by name through the configured provider.
    pub fn with_default_layout(mut self, name: impl Into<String>) -> Self {
        self.default_layout = Some(DefaultLayout::Named(name.into()));
        self
    }

    /// Uses an in-memory layout document as the default layout.
    pub fn with_default_layout_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.default_layout = Some(DefaultLayout::Data(data.into()));
        self
    }

    /// Loads layouts through `provider`. Takes precedence over [`with_layout_dir`](Self::with_layout_dir).
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Loads layouts from files under `path`.
    pub fn with_layout_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.layout_dir = Some(path.into());
        self
    }

    pub fn start_page_number(mut self, number: u32) -> Self {
        self.start_page_number = Some(number);
        self
    }

    pub fn build(self) -> Result<Report, ReportError> {
        let provider: Arc<dyn ResourceProvider> = match (self.provider, self.layout_dir) {
            (Some(provider), _) => provider,
            (None, Some(dir)) => Arc::new(FilesystemResourceProvider::new(dir)),
            (None, None) => Arc::new(InMemoryResourceProvider::new()),
        };

        let mut report = Report::new(provider);
        if let Some(number) = self.start_page_number {
            report.start_page_number_from(number);
        }

        let layout = match self.default_layout {
            Some(DefaultLayout::Named(name)) => Some(report.load_layout(&name)?),
            Some(DefaultLayout::Data(data)) => Some(report.load_layout_data(&data)?),
            None => None,
        };
        if let Some(layout) = layout {
            report.set_default_layout(layout);
        }

        Ok(report)
    }
}
