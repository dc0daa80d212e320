pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use loandoc::types::LoanRecord;
use loandoc::{Export, ExportPipeline, OutputFormat, PipelineBuilder, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// A pipeline with default configuration.
pub fn default_pipeline() -> Result<ExportPipeline, PipelineError> {
    PipelineBuilder::new().build()
}

/// Export a record with the default pipeline at the fixture timestamp
pub fn export_record(record: &LoanRecord, format: OutputFormat) -> Result<Export, PipelineError> {
    default_pipeline()?.export(record, fixtures::at(), format)
}

/// Render a record to PDF and load it back
pub fn generate_pdf(record: &LoanRecord) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let export = export_record(record, OutputFormat::Pdf)?;
    GeneratedPdf::from_bytes(export.artifact.into_bytes())
}

/// Render a record to HTML as a string
#[allow(dead_code)]
pub fn generate_html(record: &LoanRecord) -> Result<String, Box<dyn std::error::Error>> {
    let export = export_record(record, OutputFormat::Html)?;
    Ok(String::from_utf8(export.artifact.into_bytes())?)
}
