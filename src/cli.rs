// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn filter_args() -> Vec<Arg> {
    vec![
        Arg::new("category")
            .long("category")
            .help("Only this category"),
        Arg::new("min")
            .long("min")
            .help("Minimum amount (inclusive); non-numeric values are ignored"),
        Arg::new("max")
            .long("max")
            .help("Maximum amount (inclusive); non-numeric values are ignored"),
        Arg::new("from")
            .long("from")
            .help("Start date YYYY-MM-DD (inclusive)"),
        Arg::new("to").long("to").help("End date YYYY-MM-DD (inclusive)"),
        Arg::new("search")
            .long("search")
            .short('s')
            .help("Case-insensitive match on name or category"),
    ]
}

fn sort_args() -> Vec<Arg> {
    vec![
        Arg::new("sort")
            .long("sort")
            .value_parser(["name", "date", "category", "amount"])
            .help("Sort column; omit to keep newest-first order"),
        Arg::new("desc")
            .long("desc")
            .action(ArgAction::SetTrue)
            .requires("sort")
            .help("Sort descending"),
    ]
}

fn output_args() -> Vec<Arg> {
    vec![
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
        Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue),
    ]
}

fn expense_fields(required: bool) -> Vec<Arg> {
    vec![
        Arg::new("name").long("name").required(required),
        Arg::new("amount")
            .long("amount")
            .required(required)
            .allow_hyphen_values(true),
        Arg::new("date")
            .long("date")
            .help("YYYY-MM-DD; defaults to today when adding"),
        Arg::new("category")
            .long("category")
            .help("One of the fixed categories; defaults to Other when adding"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("expensely")
        .about("Track personal expenses against a per-user table store")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(
            Command::new("expense")
                .visible_alias("ex")
                .about("Record and browse expenses")
                .subcommand(
                    Command::new("list")
                        .about("Show expenses")
                        .args(filter_args())
                        .args(sort_args())
                        .args(output_args()),
                )
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .args(expense_fields(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change an expense")
                        .arg(Arg::new("id").required(true))
                        .args(expense_fields(false)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Totals for the filtered expenses")
                .subcommand(
                    Command::new("summary")
                        .about("Grand total, count and top categories")
                        .args(filter_args())
                        .args(output_args()),
                )
                .subcommand(
                    Command::new("totals")
                        .about("Per-category totals and shares")
                        .args(filter_args())
                        .args(output_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export expenses")
                .subcommand(
                    Command::new("csv")
                        .about("Write the filtered list as CSV")
                        .args(filter_args())
                        .args(sort_args())
                        .arg(Arg::new("out").long("out").default_value("."))
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .default_value(crate::export::DEFAULT_FILE_STEM),
                        ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category registry")
                .subcommand(Command::new("list").about("List categories and colours")),
        )
}
