// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendlog::{cli, commands, storage, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = store::HistoryStore::open(storage::FileStore::open_default()?)?;

    match matches.subcommand() {
        Some(("add", sub)) => commands::entries::add(&mut store, sub)?,
        Some(("list", sub)) => commands::entries::list(&store, sub)?,
        Some(("rm", sub)) => commands::entries::rm(&mut store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("path", _)) => {
            println!(
                "History stored at {}",
                storage::data_path(store::HISTORY_KEY)?.display()
            );
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
