// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::HistoryEntry;
use crate::storage::KeyValueStore;
use crate::store::HistoryStore;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn handle<S: KeyValueStore>(store: &HistoryStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Positive amounts count as income, negative as expense (reported as a
/// positive magnitude).
pub fn summarize(entries: &[HistoryEntry]) -> Summary {
    let mut income = 0.0;
    let mut expense = 0.0;
    for e in entries {
        if e.amount >= 0.0 {
            income += e.amount;
        } else {
            expense += -e.amount;
        }
    }
    Summary {
        income,
        expense,
        net: income - expense,
    }
}

/// Net amount per category, category-sorted.
pub fn totals_by_category(entries: &[HistoryEntry]) -> Vec<(String, f64)> {
    let mut map: BTreeMap<String, f64> = BTreeMap::new();
    for e in entries {
        *map.entry(e.category.clone()).or_insert(0.0) += e.amount;
    }
    map.into_iter().collect()
}

fn summary<S: KeyValueStore>(store: &HistoryStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = summarize(store.entries());
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![vec![
            fmt_amount(s.income),
            fmt_amount(s.expense),
            fmt_amount(s.net),
        ]];
        println!("{}", pretty_table(&["Income", "Expense", "Net"], rows));
    }
    Ok(())
}

fn by_category<S: KeyValueStore>(store: &HistoryStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = totals_by_category(store.entries());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|(cat, total)| vec![cat.clone(), fmt_amount(*total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Net"], rows));
    }
    Ok(())
}
