//! # loandoc-model
//!
//! The encoding-independent content of one exported loan document.
//!
//! - **schema**: the static section/field declaration table
//! - **document**: the built `Document` (header, sections, signature block)
//! - **builder**: turns a `LoanRecord` into a `Document`
//!
//! Both the HTML and the PDF renderer consume the same `Document`, so the two
//! formats can never disagree about which fields are shown.

pub mod builder;
pub mod document;
pub mod schema;

pub use builder::{build_from_value, Branding, DocumentBuilder};
pub use document::{
    Document, DocumentHeader, FormattedField, RecordSummary, Row, Section, SignatureBlock,
    CELLS_PER_ROW,
};
pub use schema::{FieldSpec, LoanSchema, SectionSpec, LOAN_SCHEMA_V1};
