// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// One recorded transaction. Serialized field names are camelCase so
/// persisted payloads stay compatible with the historical wire format
/// (`id`, `label`, `amount`, `type`, `dateCreated`, `category`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub label: String,
    pub amount: f64,
    pub r#type: String,
    /// DD/MM/YYYY, stamped by the store at insertion. Never caller-supplied.
    pub date_created: String,
    pub category: String,
}

/// Caller-supplied fields for a new entry. The store fills in `id` and
/// `dateCreated`.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub label: String,
    pub amount: f64,
    pub r#type: String,
    pub category: String,
}
