// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry document model and submission outcomes.
//!
//! Field names follow the registry's JSON wire format, which mixes
//! snake_case and camelCase keys.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document submitted to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    #[serde(rename = "importRequest")]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub production_type: String,
    #[serde(default)]
    pub products: Vec<Product>,
    pub reg_date: NaiveDate,
    pub reg_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

/// One line item of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: NaiveDate,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: NaiveDate,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

/// A document paired with the signature it is submitted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub document: Document,
    pub signature: String,
}

impl SubmissionRequest {
    pub fn new(document: Document, signature: impl Into<String>) -> Self {
        Self {
            document,
            signature: signature.into(),
        }
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The registry accepted the request
    Accepted {
        /// Raw response body
        response_body: String,
    },
    /// No permit was available; nothing was sent
    Throttled,
    /// The request was sent but the transport failed
    TransportFailed {
        /// Human-readable fault description
        detail: String,
    },
}

impl SubmissionResult {
    /// Short label used in logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "accepted",
            Self::Throttled => "throttled",
            Self::TransportFailed { .. } => "transport_failed",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let raw = json!({
            "description": { "participantInn": "7700000000" },
            "doc_id": "doc-1",
            "doc_status": "DRAFT",
            "doc_type": "LP_INTRODUCE_GOODS",
            "importRequest": true,
            "owner_inn": "7700000001",
            "participant_inn": "7700000000",
            "producer_inn": "7700000002",
            "production_date": "2024-01-15",
            "production_type": "OWN_PRODUCTION",
            "products": [{
                "certificate_document": "CONFORMITY_CERTIFICATE",
                "certificate_document_date": "2024-01-10",
                "certificate_document_number": "RU-123",
                "owner_inn": "7700000001",
                "producer_inn": "7700000002",
                "production_date": "2024-01-15",
                "tnved_code": "6401100000",
                "uit_code": "010460043993125621",
                "uitu_code": "046004399312"
            }],
            "reg_date": "2024-01-20",
            "reg_number": "R-42"
        });

        let document: Document = serde_json::from_value(raw.clone()).unwrap();
        assert!(document.import_request);
        assert_eq!(document.description.participant_inn, "7700000000");
        assert_eq!(document.products.len(), 1);
        assert_eq!(
            document.production_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );

        assert_eq!(serde_json::to_value(&document).unwrap(), raw);
    }

    #[test]
    fn test_non_iso_dates_rejected() {
        let mut raw = serde_json::to_value(SubmissionRequest::new(
            serde_json::from_value::<Document>(json!({
                "description": { "participantInn": "1" },
                "doc_id": "d", "doc_status": "s", "doc_type": "t",
                "importRequest": false,
                "owner_inn": "o", "participant_inn": "p", "producer_inn": "r",
                "production_date": "2024-01-15",
                "production_type": "pt",
                "reg_date": "2024-01-20",
                "reg_number": "n"
            }))
            .unwrap(),
            "sig",
        ))
        .unwrap();
        assert!(serde_json::from_value::<SubmissionRequest>(raw.clone()).is_ok());

        for bad in ["15.01.2024", "2024-13-01", "2024-01-15T00:00:00Z", ""] {
            raw["document"]["production_date"] = json!(bad);
            assert!(
                serde_json::from_value::<SubmissionRequest>(raw.clone()).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(SubmissionResult::Throttled.outcome(), "throttled");
        assert!(SubmissionResult::Accepted {
            response_body: String::new()
        }
        .is_accepted());
        assert_eq!(
            SubmissionResult::TransportFailed {
                detail: "timeout".into()
            }
            .outcome(),
            "transport_failed"
        );
    }
}
