//! Paginating PDF renderer using lopdf.
//!
//! Rendering happens in two steps: [`layout::plan_document`] positions every
//! band, cell and text run on fixed-size pages, then [`LopdfRenderer`] draws
//! those pages into content streams and writes them through
//! [`StreamingPdfWriter`].

mod helpers;
pub mod layout;
pub mod metrics;
mod renderer;
mod writer;

pub use helpers::{render_elements_to_content, to_win_ansi};
pub use layout::{
    plan_document, DocumentLayout, ElementKind, FontRole, PageGeometry, PlannedPage, PositionedElement,
    SectionPlacement,
};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
