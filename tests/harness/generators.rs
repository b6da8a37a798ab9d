// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Test document generators.

use chrono::NaiveDate;
use registry_submitter::model::{Description, Document, Product};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).expect("valid test date")
}

/// Generate a product line item.
pub fn product(i: usize) -> Product {
    Product {
        certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
        certificate_document_date: date(1),
        certificate_document_number: format!("RU-C-{:04}", i),
        owner_inn: "7701000001".to_string(),
        producer_inn: "7701000002".to_string(),
        production_date: date(2),
        tnved_code: "6403990000".to_string(),
        uit_code: format!("0104600439931256{:04}", i),
        uitu_code: format!("04600439{:04}", i),
    }
}

/// Generate a document with `products` line items.
pub fn document(id: usize, products: usize) -> Document {
    Document {
        description: Description {
            participant_inn: "7701000000".to_string(),
        },
        doc_id: format!("doc-{}", id),
        doc_status: "DRAFT".to_string(),
        doc_type: "LP_INTRODUCE_GOODS".to_string(),
        import_request: id % 2 == 0,
        owner_inn: "7701000001".to_string(),
        participant_inn: "7701000000".to_string(),
        producer_inn: "7701000002".to_string(),
        production_date: date(2),
        production_type: "OWN_PRODUCTION".to_string(),
        products: (0..products).map(product).collect(),
        reg_date: date(3),
        reg_number: format!("REG-{}", id),
    }
}
