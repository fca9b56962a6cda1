// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{HistoryEntry, NewEntry};
use crate::storage::KeyValueStore;
use crate::store::HistoryStore;
use crate::utils::{fmt_amount, maybe_print_json, parse_amount, pretty_table};
use anyhow::Result;

pub fn add<S: KeyValueStore>(store: &mut HistoryStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let label = sub.get_one::<String>("label").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let r#type = sub.get_one::<String>("type").unwrap();
    let category = sub.get_one::<String>("category").unwrap();

    let entry = store.add(NewEntry {
        label: label.to_string(),
        amount,
        r#type: r#type.to_string(),
        category: category.to_string(),
    })?;
    println!(
        "Recorded '{}' {} on {} (id: {})",
        entry.label,
        fmt_amount(entry.amount),
        entry.date_created,
        entry.id
    );
    Ok(())
}

pub fn list<S: KeyValueStore>(store: &HistoryStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = filtered(store, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.date_created.clone(),
                    e.label.clone(),
                    fmt_amount(e.amount),
                    e.r#type.clone(),
                    e.category.clone(),
                    e.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Label", "Amount", "Type", "Category", "Id"], rows)
        );
    }
    Ok(())
}

pub fn rm<S: KeyValueStore>(store: &mut HistoryStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let before = store.entries().len();
    store.remove(id)?;
    if store.entries().len() < before {
        println!("Removed entry {}", id);
    } else {
        println!("No entry with id {}", id);
    }
    Ok(())
}

/// Current entries with the list filters and limit applied. Filtering is a
/// view concern; the store itself is untouched.
pub fn filtered<S: KeyValueStore>(
    store: &HistoryStore<S>,
    sub: &clap::ArgMatches,
) -> Vec<HistoryEntry> {
    let category = sub.get_one::<String>("category");
    let r#type = sub.get_one::<String>("type");
    let limit = sub.get_one::<usize>("limit").copied();

    let mut data: Vec<HistoryEntry> = store
        .entries()
        .iter()
        .filter(|e| category.is_none_or(|c| &e.category == c))
        .filter(|e| r#type.is_none_or(|t| &e.r#type == t))
        .cloned()
        .collect();
    if let Some(limit) = limit {
        data.truncate(limit);
    }
    data
}
