// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::HistoryEntry;
use crate::storage::KeyValueStore;
use crate::store::HistoryStore;
use crate::utils::parse_amount;
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;

/// Bulk-replace the history from a file. The whole list is swapped out;
/// existing entries are gone afterwards.
pub fn handle<S: KeyValueStore>(store: &mut HistoryStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();

    let entries = match fmt.as_str() {
        "json" => read_json(path)?,
        "csv" => read_csv(path)?,
        _ => return Err(anyhow!("Unknown format: {} (use json|csv)", fmt)),
    };

    let count = entries.len();
    store.set_all(entries)?;
    println!("Replaced history with {} entries from {}", count, path);
    Ok(())
}

fn read_json(path: &str) -> Result<Vec<HistoryEntry>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open JSON {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse history entries from {}", path))
}

// Columns match the export layout: id,label,amount,type,dateCreated,category
fn read_csv(path: &str) -> Result<Vec<HistoryEntry>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut entries = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let id = rec.get(0).context("id missing")?.trim().to_string();
        let label = rec.get(1).context("label missing")?.trim().to_string();
        let amount_raw = rec.get(2).context("amount missing")?.trim();
        let r#type = rec.get(3).context("type missing")?.trim().to_string();
        let date_created = rec.get(4).context("dateCreated missing")?.trim().to_string();
        let category = rec.get(5).unwrap_or("").trim().to_string();

        let amount = parse_amount(amount_raw)
            .with_context(|| format!("Invalid amount '{}' for {}", amount_raw, label))?;

        entries.push(HistoryEntry {
            id,
            label,
            amount,
            r#type,
            date_created,
            category,
        });
    }
    Ok(entries)
}
