//! Page planning.
//!
//! Positions the header, section bands, cell grid, signature block and page
//! footers on fixed-size pages. Coordinates are in points with the origin at
//! the top-left corner of the page and y growing downwards; the drawing step
//! flips them into PDF space.
//!
//! Page breaks happen between sections. A section that would cross the bottom
//! margin moves whole to the next page; a section taller than a full page is
//! split between rows and its band is repeated with a "(contd.)" suffix.

use crate::metrics::{text_width, wrap_text};
use loandoc_model::{Document, DocumentHeader, Section, SignatureBlock};
use loandoc_render_core::utils::get_styled_font_name;
use loandoc_render_core::Theme;
use loandoc_types::{Color, Margins, PageSize, Rect};
use std::ops::Range;

/// Brand name, tagline and rule at the top of the first page.
pub const BRAND_HEIGHT: f32 = 40.0;
pub const TITLE_BAR_HEIGHT: f32 = 24.0;
pub const HEADER_GAP: f32 = 12.0;
/// Section header band.
pub const BAND_HEIGHT: f32 = 20.0;
/// One row of four label/value cells.
pub const ROW_HEIGHT: f32 = 32.0;
pub const SECTION_GAP: f32 = 10.0;
pub const SIGNATURE_HEIGHT: f32 = 64.0;
/// Generation timestamp and disclaimer under the signatures.
pub const CLOSING_HEIGHT: f32 = 28.0;

const CELL_PADDING: f32 = 5.0;
const LABEL_SIZE: f32 = 7.0;
const VALUE_SIZE: f32 = 9.0;
const VALUE_LEADING: f32 = 10.5;
const MAX_VALUE_LINES: usize = 2;
const FOOTER_SIZE: f32 = 7.0;
const CONTINUED_SUFFIX: &str = " (contd.)";
const EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Regular,
    Bold,
}

impl FontRole {
    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontRole::Regular => "F1",
            FontRole::Bold => "F2",
        }
    }

    pub fn base_font(self) -> String {
        get_styled_font_name("Helvetica", self == FontRole::Bold)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Solid rectangle covering the element's rect.
    Fill(Color),
    /// Horizontal line along the top edge of the element's rect.
    Rule { color: Color, width: f32 },
    /// A single line of text whose top edge is the rect's `y`.
    Text {
        content: String,
        font: FontRole,
        size: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub rect: Rect,
    pub kind: ElementKind,
}

/// Page size and margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(PageSize::A4, Margins::default())
    }
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        let (width, height) = size.dimensions_pt();
        Self {
            width,
            height,
            margins,
        }
    }

    pub fn content_top(&self) -> f32 {
        self.margins.top
    }

    pub fn content_bottom(&self) -> f32 {
        self.height - self.margins.bottom
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    /// Vertical space between the margins of a page without the header.
    pub fn usable_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }
}

/// Where one section (or one part of a split section) landed.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlacement {
    pub title: String,
    /// Zero-based page index.
    pub page: usize,
    pub band: Rect,
    /// Indices into the section's rows placed under this band.
    pub rows: Range<usize>,
    pub continued: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannedPage {
    pub elements: Vec<PositionedElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<PlannedPage>,
    pub placements: Vec<SectionPlacement>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Lays out `document` on pages of `geometry`.
pub fn plan_document(document: &Document, geometry: PageGeometry, theme: &Theme) -> DocumentLayout {
    let mut planner = Planner::new(geometry, theme);
    planner.header(&document.header);
    for section in &document.sections {
        planner.section(section);
    }
    planner.closing(&document.signature, &document.header);
    let layout = planner.finish();
    log::debug!(
        "Planned {} sections on {} page(s)",
        document.sections.len(),
        layout.page_count()
    );
    layout
}

struct Planner<'a> {
    geometry: PageGeometry,
    theme: &'a Theme,
    pages: Vec<PlannedPage>,
    placements: Vec<SectionPlacement>,
    cursor: f32,
    /// Where body content starts on the current page.
    page_top: f32,
}

impl<'a> Planner<'a> {
    fn new(geometry: PageGeometry, theme: &'a Theme) -> Self {
        Self {
            geometry,
            theme,
            pages: vec![PlannedPage::default()],
            placements: Vec::new(),
            cursor: geometry.content_top(),
            page_top: geometry.content_top(),
        }
    }

    fn left(&self) -> f32 {
        self.geometry.margins.left
    }

    fn right(&self) -> f32 {
        self.geometry.width - self.geometry.margins.right
    }

    fn at_page_top(&self) -> bool {
        self.cursor <= self.page_top + EPSILON
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor + height <= self.geometry.content_bottom() + EPSILON
    }

    fn new_page(&mut self) {
        self.pages.push(PlannedPage::default());
        self.cursor = self.geometry.content_top();
        self.page_top = self.cursor;
    }

    fn push(&mut self, rect: Rect, kind: ElementKind) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(PositionedElement { rect, kind });
        }
    }

    fn text(&mut self, x: f32, y: f32, content: impl Into<String>, font: FontRole, size: f32, color: Color) {
        let content = content.into();
        let width = text_width(&content, size, font);
        self.push(
            Rect::new(x, y, width, size),
            ElementKind::Text {
                content,
                font,
                size,
                color,
            },
        );
    }

    fn text_right(&mut self, right: f32, y: f32, content: &str, font: FontRole, size: f32, color: Color) {
        let x = right - text_width(content, size, font);
        self.text(x, y, content, font, size, color);
    }

    fn rule(&mut self, x: f32, y: f32, length: f32, color: Color, width: f32) {
        self.push(Rect::new(x, y, length, 0.0), ElementKind::Rule { color, width });
    }

    fn header(&mut self, header: &DocumentHeader) {
        let theme = self.theme;
        let (left, right, top) = (self.left(), self.right(), self.cursor);
        let width = self.geometry.content_width();

        self.text(left, top, &header.brand, FontRole::Bold, 16.0, theme.accent);
        self.text(left, top + 20.0, &header.tagline, FontRole::Regular, 8.0, theme.muted);
        let generated = format!("Generated on {}", header.generated_label);
        self.text_right(right, top + 4.0, &generated, FontRole::Regular, 7.5, theme.muted);
        self.rule(left, top + BRAND_HEIGHT - 6.0, width, theme.rule, 0.75);

        let bar = Rect::new(left, top + BRAND_HEIGHT, width, TITLE_BAR_HEIGHT);
        self.push(bar, ElementKind::Fill(theme.accent));
        let title = format!("{} \u{b7} {}", header.title, header.record_label);
        self.text(bar.x + 8.0, bar.y + 7.0, title, FontRole::Bold, 11.0, theme.on_accent);
        self.text_right(bar.right() - 8.0, bar.y + 8.0, &header.status, FontRole::Bold, 9.0, theme.on_accent);

        self.cursor = top + BRAND_HEIGHT + TITLE_BAR_HEIGHT + HEADER_GAP;
        self.page_top = self.cursor;
    }

    fn section(&mut self, section: &Section) {
        let row_count = section.rows.len();
        if row_count == 0 {
            log::debug!("Section '{}' has no rows; skipped in PDF", section.title);
            return;
        }
        let needed = BAND_HEIGHT + row_count as f32 * ROW_HEIGHT;

        if !self.fits(needed) {
            if needed <= self.geometry.usable_height() + EPSILON {
                self.new_page();
            } else {
                self.split_section(section);
                return;
            }
        }
        self.place(section, 0..row_count, false);
        self.cursor += SECTION_GAP;
    }

    fn split_section(&mut self, section: &Section) {
        log::debug!(
            "Section '{}' ({} rows) exceeds one page; splitting by row",
            section.title,
            section.rows.len()
        );
        if !self.at_page_top() {
            self.new_page();
        }
        let total = section.rows.len();
        let mut next = 0;
        let mut continued = false;
        while next < total {
            let available = self.geometry.content_bottom() - self.cursor - BAND_HEIGHT;
            // At least one row per page so degenerate geometry still terminates.
            let fit = ((available / ROW_HEIGHT).floor().max(1.0) as usize).min(total - next);
            self.place(section, next..next + fit, continued);
            next += fit;
            if next < total {
                self.new_page();
                continued = true;
            }
        }
        self.cursor += SECTION_GAP;
    }

    fn place(&mut self, section: &Section, rows: Range<usize>, continued: bool) {
        let theme = self.theme;
        let width = self.geometry.content_width();
        let band = Rect::new(self.left(), self.cursor, width, BAND_HEIGHT);
        let title = if continued {
            format!("{}{}", section.title, CONTINUED_SUFFIX)
        } else {
            section.title.clone()
        };

        self.push(band, ElementKind::Fill(theme.band_fill));
        self.text(band.x + 8.0, band.y + 5.0, title.clone(), FontRole::Bold, 10.0, theme.band_text);
        self.cursor += BAND_HEIGHT;

        for row in &section.rows[rows.clone()] {
            let row_rect = Rect::new(self.left(), self.cursor, width, ROW_HEIGHT);
            for (cell, column) in row.padded().zip(row_rect.columns(4)) {
                let Some(field) = cell else { continue };
                let inner = column.width - 2.0 * CELL_PADDING;
                let x = column.x + CELL_PADDING;
                let label = wrap_text(&field.label, inner, LABEL_SIZE, FontRole::Regular, 1);
                if let Some(line) = label.into_iter().next() {
                    self.text(x, column.y + 4.0, line, FontRole::Regular, LABEL_SIZE, theme.label);
                }
                let value_top = column.y + 4.0 + LABEL_SIZE + 3.0;
                let lines = wrap_text(&field.value, inner, VALUE_SIZE, FontRole::Bold, MAX_VALUE_LINES);
                for (i, line) in lines.into_iter().enumerate() {
                    let y = value_top + i as f32 * VALUE_LEADING;
                    self.text(x, y, line, FontRole::Bold, VALUE_SIZE, theme.value);
                }
            }
            self.rule(row_rect.x, row_rect.bottom(), width, theme.rule, 0.5);
            self.cursor += ROW_HEIGHT;
        }

        self.placements.push(SectionPlacement {
            title,
            page: self.pages.len() - 1,
            band,
            rows,
            continued,
        });
    }

    fn closing(&mut self, signature: &SignatureBlock, header: &DocumentHeader) {
        if !self.fits(SIGNATURE_HEIGHT + CLOSING_HEIGHT) {
            self.new_page();
        }
        let theme = self.theme;
        let top = self.cursor;
        let block = Rect::new(self.left(), top, self.geometry.content_width(), SIGNATURE_HEIGHT);
        for (label, column) in signature.labels.iter().zip(block.columns(3)) {
            let line_y = top + 40.0;
            self.rule(column.x + 10.0, line_y, column.width - 20.0, theme.value, 0.75);
            let w = text_width(label, 8.0, FontRole::Regular);
            self.text(column.x + (column.width - w) / 2.0, line_y + 5.0, label.as_str(), FontRole::Regular, 8.0, theme.label);
        }

        let y = top + SIGNATURE_HEIGHT;
        let generated = format!("Generated on {}", header.generated_label);
        self.text(self.left(), y, generated, FontRole::Regular, 7.5, theme.muted);
        self.text(self.left(), y + 11.0, signature.disclaimer.as_str(), FontRole::Regular, 7.5, theme.muted);
        self.cursor = y + CLOSING_HEIGHT;
    }

    fn finish(mut self) -> DocumentLayout {
        let total = self.pages.len();
        let right = self.right();
        let y = self.geometry.content_bottom() + 14.0;
        let color = self.theme.muted;
        for (index, page) in self.pages.iter_mut().enumerate() {
            let label = format!("Page {} of {}", index + 1, total);
            let width = text_width(&label, FOOTER_SIZE, FontRole::Regular);
            page.elements.push(PositionedElement {
                rect: Rect::new(right - width, y, width, FOOTER_SIZE),
                kind: ElementKind::Text {
                    content: label,
                    font: FontRole::Regular,
                    size: FOOTER_SIZE,
                    color,
                },
            });
        }
        DocumentLayout {
            geometry: self.geometry,
            pages: self.pages,
            placements: self.placements,
        }
    }
}
