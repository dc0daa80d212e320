use chrono::{NaiveDate, NaiveDateTime};
use loandoc::types::LoanRecord;
use serde_json::{Value, json};

/// The fixed export timestamp used across tests
pub fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 20)
        .and_then(|d| d.and_hms_opt(16, 45, 0))
        .expect("valid fixture timestamp")
}

pub fn record(value: Value) -> LoanRecord {
    LoanRecord::from_value(value)
}

/// The minimal disbursed record used by the download and share flows
pub fn disbursed_record() -> LoanRecord {
    record(json!({
        "id": "CL-2025-001",
        "applicant_name": "Arjun Mehta",
        "loan_amount": 1100000,
        "status": "disbursed",
        "tenure": 60
    }))
}

/// A record with the loan amount explicitly null
pub fn null_amount_record() -> LoanRecord {
    record(json!({
        "id": "CL-2025-002",
        "applicant_name": "Meera Iyer",
        "loan_amount": null,
        "status": "pending"
    }))
}

/// A record populating every section, with legacy flat keys mixed in
#[allow(dead_code)]
pub fn full_record() -> LoanRecord {
    record(json!({
        "id": "CL-2025-014",
        "customer_id": "CUST-8812",
        "loan_number": "LN/2025/0014",
        "applicant_name": "Kavya Raghunathan",
        "mobile": "9876543210",
        "co_applicant_name": "Suresh Raghunathan",
        "guarantor_name": "Lakshmi Narayan",
        "address": "12, 3rd Cross, Indiranagar",
        "current_district": "Bengaluru Urban",
        "vehicle_number": "KA-01-AB-1234",
        "car_make": "Maruti Suzuki",
        "car_model": "Baleno Zeta",
        "mfg_year": 2024,
        "valuation": "780000",
        "on_road_price": 845000,
        "loan_amount": 650000,
        "interest_rate": 9.5,
        "tenure": 48,
        "emi": 16329,
        "first_installment_due_date": "2025-06-05",
        "banks": { "name": "HDFC Bank" },
        "broker_name": "Sai Motors",
        "insurance_company_name": "ICICI Lombard",
        "idv": 760000,
        "premium_amount": 23450,
        "status": "approved"
    }))
}
