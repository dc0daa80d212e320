mod common;

use common::fixtures::*;
use common::pdf_assertions::info_entry;
use common::{TestResult, export_record, generate_html, generate_pdf};
use loandoc::OutputFormat;
use serde_json::json;

#[test]
fn test_pdf_export_of_disbursed_record() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let export = export_record(&disbursed_record(), OutputFormat::Pdf)?;
    assert_eq!(export.filename, "Loan-CL-2025-001-Arjun_Mehta.pdf");
    assert_eq!(export.artifact.mime_type(), "application/pdf");
    assert!(!export.artifact.is_empty());
    assert!(export.artifact.bytes.starts_with(b"%PDF-"));
    Ok(())
}

#[test]
fn test_pdf_contains_header_and_values() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&disbursed_record())?;
    assert_pdf_min_pages!(pdf, 1);
    assert_pdf_contains_text!(pdf, "CarLoan Portal");
    assert_pdf_contains_text!(pdf, "CL-2025-001");
    assert_pdf_contains_text!(pdf, "DISBURSED");
    assert_pdf_contains_text!(pdf, "Arjun Mehta");
    assert_pdf_contains_text!(pdf, "Rs.11,00,000");
    assert_pdf_contains_text!(pdf, "Customer Details");
    assert_pdf_contains_text!(pdf, "RC & RTO");
    Ok(())
}

#[test]
fn test_pdf_uses_standard_helvetica_faces() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&disbursed_record())?;
    assert_pdf_has_font!(pdf, "Helvetica");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    assert_pdf_page_size!(pdf, 1, 595.28, 841.89);
    Ok(())
}

#[test]
fn test_pdf_metadata_comes_from_the_document() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&disbursed_record())?;
    assert_eq!(
        info_entry(&pdf.doc, b"Title").as_deref(),
        Some("Loan Details CL-2025-001")
    );
    assert_eq!(
        info_entry(&pdf.doc, b"CreationDate").as_deref(),
        Some("D:20250520164500")
    );
    let producer = info_entry(&pdf.doc, b"Producer").unwrap_or_default();
    assert!(producer.starts_with("loandoc "), "unexpected producer {producer}");
    Ok(())
}

#[test]
fn test_null_amount_renders_placeholder_in_html() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = generate_html(&null_amount_record())?;
    assert!(html.contains(r#"<td class="label">Loan Amount</td><td class="value">—</td>"#));
    assert!(!html.contains("NaN"));
    assert!(!html.contains("₹0"));
    Ok(())
}

#[test]
fn test_null_amount_never_leaks_into_pdf() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&null_amount_record())?;
    assert_pdf_contains_text!(pdf, "Meera Iyer");
    assert_pdf_not_contains_text!(pdf, "NaN");
    assert_pdf_not_contains_text!(pdf, "Rs.0");
    assert_pdf_not_contains_text!(pdf, "undefined");
    Ok(())
}

#[test]
fn test_html_export_is_standalone_and_complete() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let export = export_record(&full_record(), OutputFormat::Html)?;
    assert_eq!(export.filename, "Loan-CL-2025-014-Kavya_Raghunathan.html");
    assert!(export.artifact.mime_type().starts_with("text/html"));

    let html = String::from_utf8(export.artifact.bytes)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Loan Details - CL-2025-014</title>"));
    assert_eq!(
        html.matches("<table class=\"section\">").count(),
        export.document.sections.len()
    );
    assert!(html.contains("Bank &amp; Branch"));
    assert!(html.contains("HDFC Bank"));
    assert!(html.contains("Maruti Suzuki"));
    assert!(html.contains("₹6,50,000"));
    assert!(html.contains("Generated on 20/05/2025, 04:45 PM"));
    Ok(())
}

#[test]
fn test_both_formats_share_one_document() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = export_record(&full_record(), OutputFormat::Html)?;
    let pdf = export_record(&full_record(), OutputFormat::Pdf)?;
    assert_eq!(html.document, pdf.document);

    let pdf = common::GeneratedPdf::from_bytes(pdf.artifact.into_bytes())?;
    for section in &html.document.sections {
        assert_pdf_contains_text!(pdf, section.title.as_str());
    }
    Ok(())
}

#[test]
fn test_non_object_record_still_exports() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let record = record(json!([1, 2, 3]));
    let export = export_record(&record, OutputFormat::Pdf)?;
    assert_eq!(export.filename, "Loan-draft-applicant.pdf");
    let pdf = common::GeneratedPdf::from_bytes(export.artifact.into_bytes())?;
    assert_pdf_min_pages!(pdf, 1);
    Ok(())
}
