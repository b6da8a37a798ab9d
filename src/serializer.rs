// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document encoding for the registry wire format.

use crate::model::Document;

/// Encodes a document into its request payload.
///
/// Implementations must be deterministic and free of side effects.
pub trait DocumentSerializer: Send + Sync {
    fn serialize(&self, document: &Document) -> Result<String, serde_json::Error>;
}

/// Compact JSON encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl DocumentSerializer for JsonSerializer {
    fn serialize(&self, document: &Document) -> Result<String, serde_json::Error> {
        serde_json::to_string(document)
    }
}
