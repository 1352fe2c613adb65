// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::ExpenseCategory;
use crate::dashboard::Dashboard;
use crate::export::display_row;
use crate::models::{ExpenseFormInput, RawAmount};
use crate::notify::Notifier;
use crate::session::Session;
use crate::store::TableStore;
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use crate::view::{parse_amount_bound, parse_date_bound, FilterState, SortKey, SortState};
use anyhow::{anyhow, bail, Result};
use chrono::Local;
use log::warn;

pub fn handle<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    session: &Session,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(dash, sub)?,
        Some(("add", sub)) => add(dash, session, sub)?,
        Some(("edit", sub)) => edit(dash, session, sub)?,
        Some(("rm", sub)) => remove(dash, session, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds the filter from `--category/--min/--max/--from/--to/--search`.
/// Unparseable bounds are dropped, not treated as zero.
pub fn filter_from(sub: &clap::ArgMatches) -> Result<FilterState> {
    let mut f = FilterState::new();
    if let Some(cat) = sub.get_one::<String>("category") {
        f = f.with_category(cat.parse::<ExpenseCategory>()?);
    }
    let amount = |key: &str| {
        sub.get_one::<String>(key).and_then(|raw| {
            let v = parse_amount_bound(raw);
            if v.is_none() {
                warn!("Ignoring non-numeric --{} '{}'", key, raw);
            }
            v
        })
    };
    f = f.with_amount_range(amount("min"), amount("max"));
    let date = |key: &str| {
        sub.get_one::<String>(key).and_then(|raw| {
            let v = parse_date_bound(raw);
            if v.is_none() {
                warn!("Ignoring invalid --{} '{}'", key, raw);
            }
            v
        })
    };
    f = f.with_date_range(date("from"), date("to"));
    if let Some(term) = sub.get_one::<String>("search") {
        f = f.with_search(term);
    }
    Ok(f)
}

pub fn sort_from(sub: &clap::ArgMatches) -> Result<SortState> {
    let Some(key) = sub.get_one::<String>("sort") else {
        return Ok(SortState::Unsorted);
    };
    let key = key.parse::<SortKey>().map_err(|e| anyhow!(e))?;
    Ok(if sub.get_flag("desc") {
        SortState::descending(key)
    } else {
        SortState::ascending(key)
    })
}

fn list<S: TableStore, N: Notifier>(dash: &mut Dashboard<S, N>, sub: &clap::ArgMatches) -> Result<()> {
    dash.set_filter(filter_from(sub)?);
    dash.set_sort(sort_from(sub)?);
    let data = dash.view();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("{}", empty_list_message(dash.filter()));
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|e| {
            let (amount, date) = display_row(e);
            vec![e.id.clone(), e.name.clone(), date, e.category.to_string(), amount]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Date", "Category", "Amount"], rows)
    );
    Ok(())
}

fn empty_list_message(filter: &FilterState) -> &'static str {
    if filter.is_empty() {
        "No expenses yet. Add your first expense!"
    } else {
        "No expenses match the current filters."
    }
}

fn add<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let today = Local::now().date_naive();
    let mut input = ExpenseFormInput::blank(today);
    fill_form(&mut input, sub)?;
    let data = input.validate()?;
    match dash.submit(session, data, None) {
        Some(id) => {
            println!("Recorded expense {}", id);
            Ok(())
        }
        None => bail!("Expense was not saved"),
    }
}

fn edit<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let existing = dash
        .find(id)
        .ok_or_else(|| anyhow!("Expense '{}' not found", id))?;
    let mut input = ExpenseFormInput::from_expense(existing);
    fill_form(&mut input, sub)?;
    let data = input.validate()?;
    if dash.submit(session, data, Some(id)).is_none() {
        bail!("Expense '{}' was not updated", id);
    }
    Ok(())
}

fn remove<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if !dash.remove(session, id) {
        bail!("Expense '{}' was not deleted", id);
    }
    Ok(())
}

fn fill_form(input: &mut ExpenseFormInput, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(name) = sub.get_one::<String>("name") {
        input.name = name.clone();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        input.amount = RawAmount::from(amount.as_str());
    }
    if let Some(date) = sub.get_one::<String>("date") {
        input.date = parse_date(date)?;
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        input.category = cat.clone();
    }
    Ok(())
}
