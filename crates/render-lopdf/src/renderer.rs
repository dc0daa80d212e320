use crate::helpers::{render_elements_to_content, to_win_ansi};
use crate::layout::{plan_document, DocumentLayout, FontRole, PageGeometry};
use crate::writer::StreamingPdfWriter;
use loandoc_model::Document;
use loandoc_render_core::{DocumentRenderer, OutputFormat, RenderError, RenderedArtifact, Theme};
use lopdf::{dictionary, Dictionary, Object, ObjectId, StringFormat};
use std::io::{Cursor, Seek, Write};

const PDF_VERSION: &str = "1.7";
const DEFAULT_PRODUCER: &str = "loandoc";

/// A paginating PDF renderer built on `lopdf` and the standard Helvetica faces.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    geometry: PageGeometry,
    theme: Theme,
    producer: String,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new(PageGeometry::default(), Theme::default())
    }
}

impl LopdfRenderer {
    pub fn new(geometry: PageGeometry, theme: Theme) -> Self {
        Self {
            geometry,
            theme,
            producer: DEFAULT_PRODUCER.to_string(),
        }
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Plans pages without encoding them.
    pub fn layout(&self, document: &Document) -> DocumentLayout {
        plan_document(document, self.geometry, &self.theme)
    }

    /// Renders `document` into `writer`, returning the sink and the page count.
    pub fn render_to<W: Write + Seek>(&self, document: &Document, writer: W) -> Result<(W, usize), RenderError> {
        let layout = self.layout(document);
        let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION, font_dictionary(), self.info(document))?;

        let (width, height) = (layout.geometry.width, layout.geometry.height);
        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(layout.page_count());
        for page in &layout.pages {
            let content = render_elements_to_content(&page.elements, height)?;
            let content_id = pdf.write_content_stream(content)?;
            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pdf.pages_id,
                "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), width.into(), height.into()],
                "Contents" => content_id,
                "Resources" => pdf.resources_id,
            };
            page_ids.push(pdf.buffer_object(page_dict.into()));
        }

        let pages = page_ids.len();
        pdf.set_page_ids(page_ids);
        let writer = pdf.finish()?;
        log::debug!("Wrote {} PDF page(s) for {}", pages, document.header.record_label);
        Ok((writer, pages))
    }

    fn info(&self, document: &Document) -> Dictionary {
        let title = format!("{} {}", document.header.title, document.header.record_label);
        let created = document.header.generated_at.format("D:%Y%m%d%H%M%S").to_string();
        dictionary! {
            "Title" => Object::String(to_win_ansi(&title), StringFormat::Literal),
            "Producer" => Object::String(to_win_ansi(&self.producer), StringFormat::Literal),
            "CreationDate" => Object::string_literal(created),
        }
    }
}

fn font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for role in [FontRole::Regular, FontRole::Bold] {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => role.base_font(),
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(role.resource_name(), Object::Dictionary(font));
    }
    fonts
}

impl DocumentRenderer for LopdfRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn render(&self, document: &Document) -> Result<RenderedArtifact, RenderError> {
        let (cursor, pages) = self.render_to(document, Cursor::new(Vec::new()))?;
        Ok(RenderedArtifact::new(OutputFormat::Pdf, cursor.into_inner()).with_page_count(pages))
    }
}
