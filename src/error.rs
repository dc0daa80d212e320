use loandoc_records::CsvError;
use loandoc_render_core::RenderError;
use thiserror::Error;

/// Errors surfaced by the export pipeline and the CLI.
///
/// Record data never produces one of these: malformed values format to the
/// placeholder and environment failures are reported as outcomes.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("{0}")]
    Other(String),
}
