// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use spendlog::models::NewEntry;
use spendlog::storage::MemoryStore;
use spendlog::store::HistoryStore;
use spendlog::{cli, commands::entries};

fn seeded_store() -> HistoryStore<MemoryStore> {
    let mut store = HistoryStore::open(MemoryStore::new()).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for (label, amount, kind, category) in [
        ("Groceries", -40.0, "expense", "food"),
        ("Salary", 2000.0, "income", "work"),
        ("Coffee", -3.5, "expense", "food"),
    ] {
        store
            .add_on(
                NewEntry {
                    label: label.to_string(),
                    amount,
                    r#type: kind.to_string(),
                    category: category.to_string(),
                },
                date,
            )
            .unwrap();
    }
    store
}

#[test]
fn list_limit_respected() {
    let store = seeded_store();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendlog", "list", "--limit", "2"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = entries::filtered(&store, list_m);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Coffee");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_filters_by_category_and_type() {
    let store = seeded_store();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendlog", "list", "--category", "food"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = entries::filtered(&store, list_m);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|e| e.category == "food"));
    } else {
        panic!("no list subcommand");
    }

    let matches = cli::build_cli().get_matches_from(["spendlog", "list", "--type", "income"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = entries::filtered(&store, list_m);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Salary");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn add_then_rm_through_the_cli_handlers() {
    let mut store = HistoryStore::open(MemoryStore::new()).unwrap();
    let matches = cli::build_cli().get_matches_from([
        "spendlog", "add", "--label", "Cinema", "--amount", "-12", "--type", "expense",
        "--category", "fun",
    ]);
    if let Some(("add", add_m)) = matches.subcommand() {
        entries::add(&mut store, add_m).unwrap();
    } else {
        panic!("no add subcommand");
    }
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].amount, -12.0);

    let id = store.entries()[0].id.clone();
    let matches = cli::build_cli().get_matches_from(["spendlog", "rm", &id]);
    if let Some(("rm", rm_m)) = matches.subcommand() {
        entries::rm(&mut store, rm_m).unwrap();
    } else {
        panic!("no rm subcommand");
    }
    assert!(store.entries().is_empty());
}

#[test]
fn add_rejects_a_non_numeric_amount() {
    let mut store = HistoryStore::open(MemoryStore::new()).unwrap();
    let matches = cli::build_cli().get_matches_from([
        "spendlog", "add", "--label", "Bad", "--amount", "lots", "--type", "expense",
        "--category", "misc",
    ]);
    if let Some(("add", add_m)) = matches.subcommand() {
        assert!(entries::add(&mut store, add_m).is_err());
    } else {
        panic!("no add subcommand");
    }
    assert!(store.entries().is_empty());
}
