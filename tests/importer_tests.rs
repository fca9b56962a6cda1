// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlog::models::NewEntry;
use spendlog::storage::MemoryStore;
use spendlog::store::HistoryStore;
use spendlog::{cli, commands::importer};
use tempfile::tempdir;

fn run_import(store: &mut HistoryStore<MemoryStore>, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["spendlog", "import"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(store, import_m)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn json_import_replaces_the_whole_history() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(
        &path,
        r#"[
            {"id":"a","label":"Rent","amount":-800.0,"type":"expense","dateCreated":"01/01/2025","category":"home"},
            {"id":"b","label":"Salary","amount":2000.0,"type":"income","dateCreated":"01/01/2025","category":"work"}
        ]"#,
    )
    .unwrap();

    let mut store = HistoryStore::open(MemoryStore::new()).unwrap();
    store
        .add(NewEntry {
            label: "Old".to_string(),
            amount: 1.0,
            r#type: "expense".to_string(),
            category: "misc".to_string(),
        })
        .unwrap();

    let path_str = path.to_string_lossy().to_string();
    run_import(&mut store, &[&path_str]).unwrap();

    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.entries()[0].id, "a");
    assert_eq!(store.entries()[1].label, "Salary");
    assert!(store.entries().iter().all(|e| e.label != "Old"));
}

#[test]
fn csv_import_round_trips_exported_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.csv");
    std::fs::write(
        &path,
        "id,label,amount,type,dateCreated,category\n\
         x1,Coffee,-3.5,expense,05/08/2026,food\n",
    )
    .unwrap();

    let mut store = HistoryStore::open(MemoryStore::new()).unwrap();
    let path_str = path.to_string_lossy().to_string();
    run_import(&mut store, &[&path_str, "--format", "csv"]).unwrap();

    assert_eq!(store.entries().len(), 1);
    let e = &store.entries()[0];
    assert_eq!(e.id, "x1");
    assert_eq!(e.amount, -3.5);
    assert_eq!(e.date_created, "05/08/2026");
}

#[test]
fn import_rejects_unknown_format_and_leaves_store_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.xml");
    std::fs::write(&path, "<history/>").unwrap();

    let mut store = HistoryStore::open(MemoryStore::new()).unwrap();
    store
        .add(NewEntry {
            label: "Keep me".to_string(),
            amount: 5.0,
            r#type: "income".to_string(),
            category: "misc".to_string(),
        })
        .unwrap();

    let path_str = path.to_string_lossy().to_string();
    assert!(run_import(&mut store, &[&path_str, "--format", "xml"]).is_err());
    assert_eq!(store.entries().len(), 1);
}
