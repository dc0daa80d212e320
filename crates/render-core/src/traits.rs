use crate::error::RenderError;
use crate::types::{OutputFormat, RenderedArtifact};
use loandoc_model::Document;

/// A backend that encodes a built `Document` into one output format.
///
/// Implementations must be deterministic: the same `Document` always yields
/// the same bytes.
pub trait DocumentRenderer: Send + Sync {
    fn format(&self) -> OutputFormat;

    fn render(&self, document: &Document) -> Result<RenderedArtifact, RenderError>;
}
