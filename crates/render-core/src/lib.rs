//! Core rendering abstractions for loan document export.
//!
//! This crate provides the fundamental traits and types used by rendering backends:
//! - `DocumentRenderer` trait implemented by the HTML and PDF renderers
//! - `RenderedArtifact`/`OutputFormat` describing what a renderer produced
//! - `Theme` colours shared by both encodings
//! - Error types for rendering operations
//! - Shared helpers for font naming, section icons and coordinate conversion

mod error;
mod theme;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use theme::Theme;
pub use traits::DocumentRenderer;
pub use types::{OutputFormat, RenderedArtifact};
