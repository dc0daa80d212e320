//! Content-stream drawing for planned pages.

use crate::layout::{ElementKind, FontRole, PositionedElement};
use loandoc_render_core::utils::flip_y;
use loandoc_render_core::RenderError;
use loandoc_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Draws `elements` into a content stream for a page `page_height` points tall.
pub fn render_elements_to_content(
    elements: &[PositionedElement],
    page_height: f32,
) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(page_height);
    for el in elements {
        page_ctx.draw_element(el);
    }
    Ok(page_ctx.finish())
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontRole, f32)>,
    fill_color: Option<Color>,
    stroke: Option<(Color, f32)>,
}

struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.kind {
            ElementKind::Fill(color) => self.draw_fill(&el.rect, *color),
            ElementKind::Rule { color, width } => self.draw_rule(&el.rect, *color, *width),
            ElementKind::Text {
                content,
                font,
                size,
                color,
            } => self.draw_text(content, &el.rect, *font, *size, *color),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.stroke != Some((color, width)) {
            let [r, g, b] = color.to_unit_rgb();
            self.op("w", vec![width.into()]);
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke = Some((color, width));
        }
    }

    fn set_font(&mut self, font: FontRole, size: f32) {
        if self.state.font != Some((font, size)) {
            self.op(
                "Tf",
                vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((font, size));
        }
    }

    fn draw_fill(&mut self, rect: &Rect, color: Color) {
        self.set_fill_color(color);
        let y = flip_y(rect.bottom(), self.page_height);
        self.op(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        self.op("f", vec![]);
    }

    fn draw_rule(&mut self, rect: &Rect, color: Color, width: f32) {
        self.set_stroke(color, width);
        let y = flip_y(rect.y, self.page_height);
        self.op("m", vec![rect.x.into(), y.into()]);
        self.op("l", vec![rect.right().into(), y.into()]);
        self.op("S", vec![]);
    }

    fn draw_text(&mut self, text: &str, rect: &Rect, font: FontRole, size: f32, color: Color) {
        if text.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(font, size);
        self.set_fill_color(color);
        let baseline_y = rect.y + size * 0.8;
        let pdf_y = flip_y(baseline_y, self.page_height);
        self.op("Td", vec![rect.x.into(), pdf_y.into()]);
        self.op("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)]);
        self.op("ET", vec![]);
    }
}

/// Encodes text for the standard fonts' WinAnsiEncoding.
///
/// The rupee sign has no WinAnsi code point and is written as "Rs."; other
/// unmappable characters become '?'.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '₹' => out.extend_from_slice(b"Rs."),
            '\t' | '\n' | '\r' => out.push(b' '),
            ' '..='~' => out.push(c as u8),
            '\u{a0}'..='\u{ff}' => out.push(c as u32 as u8),
            _ => out.push(cp1252_special(c).unwrap_or(b'?')),
        }
    }
    out
}

fn cp1252_special(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}
