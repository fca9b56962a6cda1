// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::storage::KeyValueStore;
use crate::store::HistoryStore;
use anyhow::{Result, anyhow};

pub fn handle<S: KeyValueStore>(store: &HistoryStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "label", "amount", "type", "dateCreated", "category"])?;
            for e in store.entries() {
                wtr.write_record([
                    e.id.as_str(),
                    e.label.as_str(),
                    &e.amount.to_string(),
                    e.r#type.as_str(),
                    e.date_created.as_str(),
                    e.category.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(store.entries())?)?;
        }
        _ => {
            return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
        }
    }
    println!("Exported history to {}", out);
    Ok(())
}
