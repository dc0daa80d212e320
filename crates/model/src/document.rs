use chrono::NaiveDateTime;
use loandoc_types::RecordId;
use serde::{Deserialize, Serialize};

/// Columns in every section row, in both output formats.
pub const CELLS_PER_ROW: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedField {
    pub label: String,
    pub value: String,
}

impl FormattedField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Up to [`CELLS_PER_ROW`] fields; missing trailing cells render blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Row {
    pub cells: Vec<FormattedField>,
}

impl Row {
    pub fn new(cells: Vec<FormattedField>) -> Self {
        let mut cells = cells;
        if cells.len() > CELLS_PER_ROW {
            log::warn!(
                "Row with {} cells truncated to {}",
                cells.len(),
                CELLS_PER_ROW
            );
            cells.truncate(CELLS_PER_ROW);
        }
        Self { cells }
    }

    /// The row's cells padded with `None` up to the grid width.
    pub fn padded(&self) -> impl Iterator<Item = Option<&FormattedField>> {
        (0..CELLS_PER_ROW).map(move |i| self.cells.get(i))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub icon: String,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHeader {
    pub brand: String,
    pub tagline: String,
    pub title: String,
    /// The record identifier as displayed (placeholder when absent).
    pub record_label: String,
    /// Upper-cased status tag (placeholder when absent).
    pub status: String,
    pub generated_at: NaiveDateTime,
    /// `generated_at` rendered with the configured timestamp format.
    pub generated_label: String,
}

/// Three signature lines and the disclaimer printed beneath them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureBlock {
    pub labels: [String; 3],
    pub disclaimer: String,
}

impl Default for SignatureBlock {
    fn default() -> Self {
        Self {
            labels: [
                "Applicant Signature".to_string(),
                "Branch Manager".to_string(),
                "Authorised Signatory".to_string(),
            ],
            disclaimer: "This is a system generated document and does not require a physical signature."
                .to_string(),
        }
    }
}

/// Short facts used for filenames and share messages.
///
/// `record_id` and `applicant` keep the raw values (or `None`) so filenames
/// never embed the placeholder glyph; the other members are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub record_id: Option<RecordId>,
    pub applicant: Option<String>,
    pub applicant_label: String,
    pub vehicle: String,
    pub amount: String,
    pub status: String,
    pub emi: String,
    pub tenure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub header: DocumentHeader,
    pub sections: Vec<Section>,
    pub signature: SignatureBlock,
    pub summary: RecordSummary,
}
