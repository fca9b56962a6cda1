// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print results as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print results as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(crate_version!())
        .about("Income/expense history on a local JSON key-value store")
        .subcommand(
            Command::new("add")
                .about("Record a new history entry")
                .arg(
                    Arg::new("label")
                        .long("label")
                        .short('l')
                        .required(true)
                        .help("Free-text description"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .short('a')
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("Signed amount, e.g. -12.34"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .required(true)
                        .help("Entry tag, e.g. income or expense"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .required(true)
                        .help("Classification label"),
                ),
        )
        .subcommand(
            json_flags(Command::new("list").about("List history entries, newest first"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Show at most N entries"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("Only entries in this category"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .help("Only entries with this type tag"),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete the entry with the given id")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Replace the entire history from a file")
                .arg(Arg::new("path").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("Input format: json or csv"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the history to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("Output format: csv or json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregates over the history")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expense and net totals"),
                ))
                .subcommand(json_flags(
                    Command::new("by-category").about("Net totals per category"),
                )),
        )
        .subcommand(Command::new("path").about("Print where the history is stored"))
}
