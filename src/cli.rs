// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn draft_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("kind")
            .long("kind")
            .default_value("expense")
            .help("Transaction kind: income or expense"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Non-negative amount; direction comes from --kind"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .required(true)
            .help("Category label from the vocabulary for the kind"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .help("Date as YYYY-MM-DD (defaults to today)"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .help("Free-text note"),
    )
}

pub fn build_cli() -> Command {
    Command::new("findash")
        .version(clap::crate_version!())
        .about("Personal finance dashboard: transactions, stats, and charts from in-memory demo data")
        .arg(
            Arg::new("role")
                .long("role")
                .global(true)
                .default_value("user")
                .help("Acting role: admin, user, or read-only"),
        )
        .subcommand(
            Command::new("tx")
                .about("Add, edit, delete, and list transactions")
                .subcommand(draft_args(Command::new("add").about("Record a new transaction")))
                .subcommand(draft_args(
                    Command::new("edit")
                        .about("Replace every field of an existing transaction")
                        .arg(Arg::new("id").required(true).help("Transaction id")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction (removing an absent id is a no-op)")
                        .arg(Arg::new("id").required(true).help("Transaction id")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions with search and filters")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match against description or category"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .help("Only income or only expense entries"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Only entries with this exact category"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize))
                                .help("At most this many rows"),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Summary stats, expense breakdown, and trend")
                .arg(
                    Arg::new("monthly-change")
                        .long("monthly-change")
                        .default_value("12.5")
                        .help("Month-over-month balance change in percent (external figure)"),
                ),
        ))
        .subcommand(
            Command::new("category").about("Category vocabularies").subcommand(
                Command::new("list")
                    .about("List the categories offered per kind")
                    .arg(
                        Arg::new("kind")
                            .long("kind")
                            .help("Restrict to income or expense categories"),
                    ),
            ),
        )
        .subcommand(
            Command::new("export").about("Export snapshots").subcommand(
                Command::new("transactions")
                    .about("Write the transaction list to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("Output format: csv or json"),
                    )
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .required(true)
                            .help("Output path"),
                    ),
            ),
        )
}
