use crate::document::{
    Document, DocumentHeader, FormattedField, RecordSummary, Row, Section, SignatureBlock,
};
use crate::schema::{LoanSchema, SectionSpec, LOAN_SCHEMA_V1};
use chrono::NaiveDateTime;
use loandoc_format::{FieldKind, Formatter};
use loandoc_types::{LoanRecord, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const RECORD_ID_KEYS: &[&str] = &["id", "loan_number"];
const APPLICANT_KEYS: &[&str] = &["applicant_name"];
const MAKE_KEYS: &[&str] = &["maker_name", "car_make"];
const MODEL_KEYS: &[&str] = &["model_variant_name", "car_model"];
const VEHICLE_NUMBER_KEYS: &[&str] = &["vehicle_number"];
const AMOUNT_KEYS: &[&str] = &["loan_amount"];
const STATUS_KEYS: &[&str] = &["status"];
const EMI_KEYS: &[&str] = &["emi_amount", "emi"];
const TENURE_KEYS: &[&str] = &["tenure"];

/// Fixed header text shown above every export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub name: String,
    pub tagline: String,
    pub title: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "CarLoan Portal".to_string(),
            tagline: "Car Loan Origination & Management".to_string(),
            title: "Loan Details".to_string(),
        }
    }
}

/// Builds `Document`s from loan records against one schema.
///
/// Building never fails: absent keys and malformed values format to the
/// placeholder. The record is only read.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    schema: &'static LoanSchema,
    formatter: Formatter,
    branding: Branding,
    signature: SignatureBlock,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(&LOAN_SCHEMA_V1)
    }
}

impl DocumentBuilder {
    pub fn new(schema: &'static LoanSchema) -> Self {
        Self {
            schema,
            formatter: Formatter::default(),
            branding: Branding::default(),
            signature: SignatureBlock::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    pub fn with_signature(mut self, signature: SignatureBlock) -> Self {
        self.signature = signature;
        self
    }

    pub fn schema(&self) -> &'static LoanSchema {
        self.schema
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn build(&self, record: &LoanRecord, generated_at: NaiveDateTime) -> Document {
        log::debug!(
            "Building document from {} record fields against schema {}",
            record.len(),
            self.schema.version
        );
        let sections = self
            .schema
            .sections
            .iter()
            .map(|spec| self.build_section(spec, record))
            .collect();

        Document {
            header: self.build_header(record, generated_at),
            sections,
            signature: self.signature.clone(),
            summary: self.build_summary(record),
        }
    }

    fn build_section(&self, spec: &SectionSpec, record: &LoanRecord) -> Section {
        let rows = spec
            .rows
            .iter()
            .map(|fields| {
                Row::new(
                    fields
                        .iter()
                        .map(|f| {
                            let value = self.formatter.format(f.kind, record.first_present(f.keys));
                            FormattedField::new(f.label, value)
                        })
                        .collect(),
                )
            })
            .collect();
        Section::new(spec.title, spec.icon, rows)
    }

    fn build_header(&self, record: &LoanRecord, generated_at: NaiveDateTime) -> DocumentHeader {
        let status = self.field(FieldKind::Text, record, STATUS_KEYS);
        let status = if status == self.formatter.placeholder() {
            status
        } else {
            status.to_uppercase()
        };
        DocumentHeader {
            brand: self.branding.name.clone(),
            tagline: self.branding.tagline.clone(),
            title: self.branding.title.clone(),
            record_label: self.field(FieldKind::Text, record, RECORD_ID_KEYS),
            status,
            generated_at,
            generated_label: self.formatter.timestamp(&generated_at),
        }
    }

    fn build_summary(&self, record: &LoanRecord) -> RecordSummary {
        let raw = |keys: &[&str]| {
            record
                .first_present(keys)
                .map(|v| self.formatter.text(Some(v)))
                .filter(|s| s != self.formatter.placeholder())
        };

        let vehicle = {
            let name: Vec<String> = [MAKE_KEYS, MODEL_KEYS].into_iter().filter_map(raw).collect();
            if name.is_empty() {
                self.field(FieldKind::Text, record, VEHICLE_NUMBER_KEYS)
            } else {
                name.join(" ")
            }
        };

        let tenure = match raw(TENURE_KEYS) {
            Some(t) => format!("{} months", t),
            None => self.formatter.placeholder().to_string(),
        };

        RecordSummary {
            record_id: raw(RECORD_ID_KEYS).map(RecordId::from),
            applicant: raw(APPLICANT_KEYS),
            applicant_label: self.field(FieldKind::Text, record, APPLICANT_KEYS),
            vehicle,
            amount: self.field(FieldKind::Currency, record, AMOUNT_KEYS),
            status: self.field(FieldKind::Text, record, STATUS_KEYS),
            emi: self.field(FieldKind::Currency, record, EMI_KEYS),
            tenure,
        }
    }

    fn field(&self, kind: FieldKind, record: &LoanRecord, keys: &[&str]) -> String {
        self.formatter.format(kind, record.first_present(keys))
    }
}

/// Convenience for callers holding a bare JSON value.
pub fn build_from_value(value: Value, generated_at: NaiveDateTime) -> Document {
    DocumentBuilder::default().build(&LoanRecord::from_value(value), generated_at)
}
