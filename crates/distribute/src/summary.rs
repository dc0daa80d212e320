use loandoc_model::Document;

/// Plain-text share message: record id, applicant, vehicle, amount, status,
/// EMI and tenure, one per line, using the document's formatted values.
pub fn share_text(document: &Document, title: &str) -> String {
    let s = &document.summary;
    [
        format!("{} - {}", title, document.header.record_label),
        format!("Applicant: {}", s.applicant_label),
        format!("Vehicle: {}", s.vehicle),
        format!("Loan Amount: {}", s.amount),
        format!("Status: {}", s.status),
        format!("EMI: {}", s.emi),
        format!("Tenure: {}", s.tenure),
    ]
    .join("\n")
}
