//! Static section declarations.
//!
//! Every field lists its candidate record keys in priority order: the
//! structured key first, then legacy flat keys. The first truthy candidate
//! wins.

use loandoc_format::FieldKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub keys: &'static [&'static str],
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(label: &'static str, keys: &'static [&'static str]) -> Self {
        Self { label, keys, kind: FieldKind::Text }
    }

    pub const fn date(label: &'static str, keys: &'static [&'static str]) -> Self {
        Self { label, keys, kind: FieldKind::Date }
    }

    pub const fn currency(label: &'static str, keys: &'static [&'static str]) -> Self {
        Self { label, keys, kind: FieldKind::Currency }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub title: &'static str,
    /// Icon tag; renderers map it to a glyph or drop it.
    pub icon: &'static str,
    pub rows: &'static [&'static [FieldSpec]],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanSchema {
    pub version: &'static str,
    pub sections: &'static [SectionSpec],
}

impl LoanSchema {
    /// Every field spec, in document order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .flat_map(|row| row.iter())
    }
}

use FieldSpec as F;

pub static LOAN_SCHEMA_V1: LoanSchema = LoanSchema {
    version: "v1",
    sections: &[
        SectionSpec {
            title: "Customer Details",
            icon: "user",
            rows: &[
                &[
                    F::text("Customer ID", &["customer_id"]),
                    F::text("Loan Number", &["loan_number"]),
                    F::text("Applicant Name", &["applicant_name"]),
                    F::text("Mobile", &["mobile"]),
                ],
                &[
                    F::text("Co-Applicant", &["co_applicant_name"]),
                    F::text("Co-Applicant Mobile", &["co_applicant_mobile"]),
                    F::text("Guarantor", &["guarantor_name"]),
                    F::text("Guarantor Mobile", &["guarantor_mobile"]),
                ],
                &[
                    F::text("Address", &["current_address", "address"]),
                    F::text("Village", &["current_village"]),
                    F::text("District", &["current_district"]),
                ],
            ],
        },
        SectionSpec {
            title: "Vehicle Details",
            icon: "car",
            rows: &[
                &[
                    F::text("Vehicle Number", &["vehicle_number"]),
                    F::text("Make", &["maker_name", "car_make"]),
                    F::text("Model / Variant", &["model_variant_name", "car_model"]),
                    F::text("Mfg Year", &["mfg_year"]),
                ],
                &[
                    F::text("Vertical", &["vertical"]),
                    F::text("Scheme", &["scheme"]),
                    F::currency("Valuation", &["valuation"]),
                    F::currency("On-Road Price", &["on_road_price"]),
                ],
            ],
        },
        SectionSpec {
            title: "Loan Details",
            icon: "wallet",
            rows: &[
                &[
                    F::currency("Loan Amount", &["loan_amount"]),
                    F::text("Grid", &["grid"]),
                    F::text("LTV (%)", &["ltv"]),
                    F::text("IRR (%)", &["irr", "interest_rate"]),
                ],
                &[
                    F::text("Tenure (Months)", &["tenure"]),
                    F::text("EMI Mode", &["emi_mode"]),
                    F::currency("EMI Amount", &["emi_amount", "emi"]),
                    F::currency("Total EMI", &["total_emi"]),
                ],
                &[
                    F::currency("Total Interest", &["total_interest"]),
                    F::date("First EMI Due", &["first_installment_due_date"]),
                    F::currency("Down Payment", &["down_payment"]),
                    F::currency("Advance EMI", &["advance_emi"]),
                ],
            ],
        },
        SectionSpec {
            title: "Bank & Branch",
            icon: "bank",
            rows: &[
                &[
                    F::text("Bank", &["banks.name", "bank_name"]),
                    F::text("Financier Executive", &["financier_executive_name"]),
                    F::text("Disburse Branch", &["disburse_branch_name"]),
                    F::text("Branch Manager", &["branch_manager_name"]),
                ],
                &[F::text("Broker", &["brokers.name", "broker_name"])],
            ],
        },
        SectionSpec {
            title: "Insurance",
            icon: "shield",
            rows: &[&[
                F::text("Insurance Company", &["insurance_company_name"]),
                F::currency("IDV", &["idv"]),
                F::currency("Premium", &["premium_amount"]),
                F::text("Insurance Type", &["insurance_type"]),
            ]],
        },
        SectionSpec {
            title: "Deductions & Disbursement",
            icon: "receipt",
            rows: &[
                &[
                    F::currency("File Charge", &["file_charge"]),
                    F::currency("Loan Suraksha", &["loan_suraksha"]),
                    F::currency("Stamping", &["stamping"]),
                    F::currency("Processing Fee", &["processing_fee"]),
                ],
                &[
                    F::currency("Total Deduction", &["total_deduction"]),
                    F::currency("Net Disbursement", &["net_disbursement_amount"]),
                    F::date("Payment Received", &["payment_received_date"]),
                    F::date("Financier Disbursed", &["financier_disburse_date"]),
                ],
            ],
        },
        SectionSpec {
            title: "Timeline",
            icon: "calendar",
            rows: &[
                &[
                    F::date("Login Date", &["login_date"]),
                    F::date("Approval Date", &["approval_date"]),
                    F::text("TAT (Days)", &["tat"]),
                    F::date("Agreement Date", &["agreement_date"]),
                ],
                &[
                    F::text("File Stage", &["file_stage"]),
                    F::date("Created", &["created_at"]),
                    F::date("Updated", &["updated_at"]),
                ],
            ],
        },
        SectionSpec {
            title: "RC & RTO",
            icon: "file",
            rows: &[
                &[
                    F::text("RC Owner", &["rc_owner_name"]),
                    F::date("RC Mfg Date", &["rc_mfg_date"]),
                    F::text("HPN at Login", &["hpn_at_login"]),
                    F::text("New Financier", &["new_financier"]),
                ],
                &[
                    F::text("RTO Agent", &["rto_agent_name"]),
                    F::text("Agent Mobile", &["agent_mobile_no"]),
                    F::text("DTO Location", &["dto_location"]),
                    F::text("Challan", &["challan"]),
                ],
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CELLS_PER_ROW;

    #[test]
    fn every_row_fits_the_four_column_grid() {
        for section in LOAN_SCHEMA_V1.sections {
            assert!(!section.rows.is_empty(), "{} has no rows", section.title);
            for row in section.rows {
                assert!(!row.is_empty() && row.len() <= CELLS_PER_ROW, "{}", section.title);
            }
        }
    }

    #[test]
    fn every_field_declares_at_least_one_key() {
        assert!(LOAN_SCHEMA_V1.fields().all(|f| !f.keys.is_empty()));
    }
}
