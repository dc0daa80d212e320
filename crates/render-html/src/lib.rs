//! Printable HTML renderer.
//!
//! Produces one self-contained HTML string (inline styles, no external
//! resources) from a `Document`. Pagination is left to the browser's print
//! engine; this renderer is a single pass over the section model.

use handlebars::Handlebars;
use loandoc_model::{Document, DocumentHeader, SignatureBlock};
use loandoc_render_core::utils::icon_glyph;
use loandoc_render_core::{DocumentRenderer, OutputFormat, RenderError, RenderedArtifact, Theme};
use serde::Serialize;

const TEMPLATE_NAME: &str = "loan_document";
const TEMPLATE_SOURCE: &str = include_str!("../templates/document.html.hbs");

#[derive(Serialize)]
struct CellView<'a> {
    label: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct SectionView<'a> {
    title: &'a str,
    glyph: &'static str,
    rows: Vec<Vec<CellView<'a>>>,
}

#[derive(Serialize)]
struct DocumentView<'a> {
    header: &'a DocumentHeader,
    sections: Vec<SectionView<'a>>,
    signature: &'a SignatureBlock,
    theme: &'a Theme,
}

impl<'a> DocumentView<'a> {
    fn new(document: &'a Document, theme: &'a Theme) -> Self {
        let sections = document
            .sections
            .iter()
            .map(|section| SectionView {
                title: &section.title,
                glyph: icon_glyph(&section.icon),
                rows: section
                    .rows
                    .iter()
                    .map(|row| {
                        row.padded()
                            .map(|cell| match cell {
                                Some(f) => CellView {
                                    label: &f.label,
                                    value: &f.value,
                                },
                                None => CellView { label: "", value: "" },
                            })
                            .collect()
                    })
                    .collect(),
            })
            .collect();

        Self {
            header: &document.header,
            sections,
            signature: &document.signature,
            theme,
        }
    }
}

/// Renders documents through an embedded, strict-mode handlebars template.
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
    theme: Theme,
}

impl HtmlRenderer {
    pub fn new(theme: Theme) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self { registry, theme })
    }

    pub fn render_string(&self, document: &Document) -> Result<String, RenderError> {
        let view = DocumentView::new(document, &self.theme);
        let html = self.registry.render(TEMPLATE_NAME, &view)?;
        log::debug!(
            "Rendered HTML for {} ({} sections, {} bytes)",
            document.header.record_label,
            document.sections.len(),
            html.len()
        );
        Ok(html)
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, document: &Document) -> Result<RenderedArtifact, RenderError> {
        let html = self.render_string(document)?;
        Ok(RenderedArtifact::new(OutputFormat::Html, html.into_bytes()))
    }
}
