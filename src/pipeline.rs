//! The export pipeline: record → `Document` → artifact → delivery.

use crate::config::ExportConfig;
use crate::error::PipelineError;
use chrono::NaiveDateTime;
use loandoc_distribute::{
    download_filename, print_document, share_document, share_text, DownloadTarget, LinkOpener, PrintHost,
    PrintOutcome, ShareOutcome, SharePayload, ShareTarget,
};
use loandoc_format::Formatter;
use loandoc_model::{Document, DocumentBuilder};
use loandoc_render_core::{DocumentRenderer, OutputFormat, RenderedArtifact};
use loandoc_render_html::HtmlRenderer;
use loandoc_render_lopdf::LopdfRenderer;
use loandoc_types::LoanRecord;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A rendered export and the names it ships under.
#[derive(Debug, Clone)]
pub struct Export {
    pub document: Document,
    pub artifact: RenderedArtifact,
    pub filename: String,
}

/// A builder for creating an `ExportPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: ExportConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads configuration from `path` (plus environment overrides).
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = ExportConfig::load(Some(path.as_ref()))?;
        Ok(self)
    }

    pub fn with_print_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.print.delay_ms = delay_ms;
        self
    }

    pub fn with_deep_link_base(mut self, base: impl Into<String>) -> Self {
        self.config.share.deep_link_base = base.into();
        self
    }

    pub fn build(self) -> Result<ExportPipeline, PipelineError> {
        let config = Arc::new(self.config);
        let builder = DocumentBuilder::default()
            .with_formatter(Formatter::new(config.locale.clone()))
            .with_branding(config.brand.clone())
            .with_signature(config.signature.clone());
        let html = HtmlRenderer::new(config.theme.clone())?;
        let pdf = LopdfRenderer::new(config.page.geometry(), config.theme.clone())
            .with_producer(concat!("loandoc ", env!("CARGO_PKG_VERSION")));
        log::info!(
            "Export pipeline ready (schema {}, page {:?})",
            builder.schema().version,
            config.page.size
        );
        Ok(ExportPipeline {
            config,
            builder,
            html,
            pdf,
        })
    }
}

/// Builds documents from records and hands the rendered bytes to adapters.
///
/// Holds no per-export state: every call builds a fresh `Document` from the
/// record it is given, and the configuration is shared immutably.
pub struct ExportPipeline {
    config: Arc<ExportConfig>,
    builder: DocumentBuilder,
    html: HtmlRenderer,
    pdf: LopdfRenderer,
}

impl ExportPipeline {
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn build_document(&self, record: &LoanRecord, generated_at: NaiveDateTime) -> Document {
        self.builder.build(record, generated_at)
    }

    pub fn renderer(&self, format: OutputFormat) -> &dyn DocumentRenderer {
        match format {
            OutputFormat::Pdf => &self.pdf,
            OutputFormat::Html => &self.html,
        }
    }

    pub fn render(&self, document: &Document, format: OutputFormat) -> Result<RenderedArtifact, PipelineError> {
        Ok(self.renderer(format).render(document)?)
    }

    pub fn export(
        &self,
        record: &LoanRecord,
        generated_at: NaiveDateTime,
        format: OutputFormat,
    ) -> Result<Export, PipelineError> {
        let document = self.build_document(record, generated_at);
        let artifact = self.render(&document, format)?;
        let filename = download_filename(&document.summary, format.extension());
        log::debug!(
            "Exported {} as {} ({} bytes)",
            document.header.record_label,
            format.mime_type(),
            artifact.len()
        );
        Ok(Export {
            document,
            artifact,
            filename,
        })
    }

    /// Renders the PDF and saves it through `target`.
    pub fn download_pdf(
        &self,
        record: &LoanRecord,
        generated_at: NaiveDateTime,
        target: &dyn DownloadTarget,
    ) -> Result<PathBuf, PipelineError> {
        let export = self.export(record, generated_at, OutputFormat::Pdf)?;
        Ok(target.save(&export.filename, &export.artifact)?)
    }

    /// Renders the HTML and opens it for printing on `host`.
    pub fn print_html<H: PrintHost>(
        &self,
        record: &LoanRecord,
        generated_at: NaiveDateTime,
        host: &H,
    ) -> Result<PrintOutcome, PipelineError> {
        let document = self.build_document(record, generated_at);
        let html = self.html.render_string(&document)?;
        Ok(print_document(host, &html, self.config.print.delay()))
    }

    /// Shares the PDF, falling back to the configured deep link.
    pub async fn share_pdf(
        &self,
        record: &LoanRecord,
        generated_at: NaiveDateTime,
        target: &dyn ShareTarget,
        opener: &dyn LinkOpener,
    ) -> Result<ShareOutcome, PipelineError> {
        let export = self.export(record, generated_at, OutputFormat::Pdf)?;
        let text = share_text(&export.document, &self.config.share.title);
        let payload = SharePayload {
            title: &self.config.share.title,
            text: &text,
            filename: &export.filename,
            artifact: &export.artifact,
        };
        Ok(share_document(target, opener, &self.config.share, payload).await)
    }

    /// The fallback deep link for `record`, without rendering any binary.
    pub fn share_link(&self, record: &LoanRecord, generated_at: NaiveDateTime) -> String {
        let document = self.build_document(record, generated_at);
        let text = share_text(&document, &self.config.share.title);
        loandoc_distribute::deep_link(&self.config.share.deep_link_base, &text)
    }
}
