// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::RecordingNotifier;
use expensely::categories::ExpenseCategory;
use expensely::cli;
use expensely::commands::{expenses, exporter};
use expensely::dashboard::Dashboard;
use expensely::models::ExpenseFormData;
use expensely::session::Session;
use expensely::store::SqliteStore;
use expensely::sync::SyncAdapter;
use expensely::view::{SortKey, SortState};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let (_, group) = matches.subcommand().expect("group");
    let (_, sub) = group.subcommand().expect("command");
    sub.clone()
}

#[test]
fn list_flags_build_filter_and_sort() {
    let sub = sub_matches(&[
        "expensely", "expense", "list", "--category", "food", "--min", "5", "--max", "oops",
        "--from", "2024-01-01", "--search", "  lunch ", "--sort", "amount", "--desc",
    ]);
    let f = expenses::filter_from(&sub).unwrap();
    assert_eq!(f.category, Some(ExpenseCategory::Food));
    assert_eq!(f.min_amount, Some(Decimal::from(5)));
    assert_eq!(f.max_amount, None);
    assert_eq!(f.start_date, chrono::NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(f.end_date, None);
    assert_eq!(f.search_term.as_deref(), Some("lunch"));
    assert_eq!(
        expenses::sort_from(&sub).unwrap(),
        SortState::descending(SortKey::Amount)
    );
}

#[test]
fn unknown_category_flag_is_an_error() {
    let sub = sub_matches(&["expensely", "expense", "list", "--category", "Groceries"]);
    assert!(expenses::filter_from(&sub).is_err());
}

#[test]
fn no_sort_flag_keeps_fetch_order() {
    let sub = sub_matches(&["expensely", "expense", "list"]);
    assert_eq!(expenses::sort_from(&sub).unwrap(), SortState::Unsorted);
}

#[test]
fn add_and_edit_commands_update_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    let notes = RecordingNotifier::new();
    let mut dash = Dashboard::new(SyncAdapter::new(&store, &notes));
    let alice = Session::signed_in("alice");

    let m = cli::build_cli().get_matches_from([
        "expensely", "expense", "add", "--name", "Lunch", "--amount", "12.40", "--date",
        "2024-06-01", "--category", "food",
    ]);
    let (_, group) = m.subcommand().unwrap();
    expenses::handle(&mut dash, &alice, group).unwrap();
    let id = dash.expenses()[0].id.clone();

    let m = cli::build_cli().get_matches_from(["expensely", "expense", "edit", id.as_str(), "--amount", "13"]);
    let (_, group) = m.subcommand().unwrap();
    expenses::handle(&mut dash, &alice, group).unwrap();

    dash.load(&alice).unwrap();
    let e = &dash.expenses()[0];
    assert_eq!(e.name, "Lunch");
    assert_eq!(e.amount, Decimal::from(13));
    assert_eq!(e.category, ExpenseCategory::Food);
}

#[test]
fn add_rejects_non_positive_amount() {
    let store = SqliteStore::open_in_memory().unwrap();
    let notes = RecordingNotifier::new();
    let mut dash = Dashboard::new(SyncAdapter::new(&store, &notes));
    let m = cli::build_cli().get_matches_from([
        "expensely", "expense", "add", "--name", "Refund", "--amount", "-5",
    ]);
    let (_, group) = m.subcommand().unwrap();
    assert!(expenses::handle(&mut dash, &Session::signed_in("alice"), group).is_err());
    assert!(dash.expenses().is_empty());
}

#[test]
fn export_command_writes_file() {
    let store = SqliteStore::open_in_memory().unwrap();
    let notes = RecordingNotifier::new();
    let mut dash = Dashboard::new(SyncAdapter::new(&store, &notes));
    let alice = Session::signed_in("alice");
    dash.submit(
        &alice,
        ExpenseFormData {
            name: "Bob's \"Lunch\"".into(),
            amount: "8".parse().unwrap(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            category: ExpenseCategory::Food,
        },
        None,
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().to_string_lossy().to_string();
    let m = cli::build_cli().get_matches_from([
        "expensely", "export", "csv", "--out", out.as_str(), "--name", "feb",
    ]);
    let (_, group) = m.subcommand().unwrap();
    exporter::handle(&mut dash, group).unwrap();

    let text = std::fs::read_to_string(dir.path().join("feb.csv")).unwrap();
    assert_eq!(
        text,
        "Name,Category,Amount,Date\n\"Bob's \"\"Lunch\"\"\",\"Food\",8.00,2024-02-02"
    );
}
