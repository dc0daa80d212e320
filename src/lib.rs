//! # loandoc
//!
//! Renders loan records into a printable HTML page and a paginated PDF, and
//! hands the results to download, print and share adapters.
//!
//! ```no_run
//! use loandoc::{OutputFormat, PipelineBuilder};
//! use loandoc::types::LoanRecord;
//!
//! let pipeline = PipelineBuilder::new().build()?;
//! let record = LoanRecord::from_value(serde_json::json!({"id": "CL-1", "applicant_name": "Arjun Mehta"}));
//! let export = pipeline.export(&record, chrono::Local::now().naive_local(), OutputFormat::Pdf)?;
//! std::fs::write(&export.filename, &export.artifact.bytes)?;
//! # Ok::<(), loandoc::PipelineError>(())
//! ```

pub mod config;
mod error;
mod pipeline;

pub use config::{ExportConfig, PageConfig};
pub use error::PipelineError;
pub use pipeline::{Export, ExportPipeline, PipelineBuilder};

pub use loandoc_render_core::{DocumentRenderer, OutputFormat, RenderError, RenderedArtifact, Theme};

// Member crates, re-exported for callers that need the lower layers.
pub use loandoc_distribute as distribute;
pub use loandoc_format as format;
pub use loandoc_model as model;
pub use loandoc_records as records;
pub use loandoc_render_html as render_html;
pub use loandoc_render_lopdf as render_lopdf;
pub use loandoc_types as types;
