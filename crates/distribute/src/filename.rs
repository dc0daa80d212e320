use loandoc_model::RecordSummary;

const MISSING_ID: &str = "draft";
const MISSING_APPLICANT: &str = "applicant";

/// `Loan-<id>-<applicant>.<extension>`, with whitespace runs in the applicant
/// name collapsed to `_`.
///
/// Characters that cannot appear in a file name on common filesystems are
/// replaced with `-`. A missing identifier or applicant falls back to a fixed
/// word so the name never contains the placeholder glyph.
pub fn download_filename(summary: &RecordSummary, extension: &str) -> String {
    let id = summary
        .record_id
        .as_ref()
        .map(|id| sanitize(id.as_str()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| MISSING_ID.to_string());
    let applicant = summary
        .applicant
        .as_deref()
        .map(sanitize)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| MISSING_APPLICANT.to_string());
    format!("Loan-{}-{}.{}", id, applicant, extension)
}

fn sanitize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use loandoc_types::RecordId;

    fn summary(id: Option<&str>, applicant: Option<&str>) -> RecordSummary {
        RecordSummary {
            record_id: id.map(RecordId::from),
            applicant: applicant.map(str::to_string),
            applicant_label: applicant.unwrap_or("—").to_string(),
            vehicle: "—".into(),
            amount: "—".into(),
            status: "—".into(),
            emi: "—".into(),
            tenure: "—".into(),
        }
    }

    #[test]
    fn joins_id_and_applicant() {
        let name = download_filename(&summary(Some("CL-2025-001"), Some("Arjun Mehta")), "pdf");
        assert_eq!(name, "Loan-CL-2025-001-Arjun_Mehta.pdf");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_underscore() {
        let name = download_filename(&summary(Some("7"), Some("  Meera \t  K  Iyer ")), "pdf");
        assert_eq!(name, "Loan-7-Meera_K_Iyer.pdf");
    }

    #[test]
    fn path_separators_are_replaced() {
        let name = download_filename(&summary(Some("CL/2025/9"), Some("A/B")), "html");
        assert_eq!(name, "Loan-CL-2025-9-A-B.html");
    }

    #[test]
    fn missing_parts_use_fallback_words() {
        assert_eq!(download_filename(&summary(None, None), "pdf"), "Loan-draft-applicant.pdf");
        assert_eq!(download_filename(&summary(Some("  "), Some("")), "pdf"), "Loan-draft-applicant.pdf");
    }
}
