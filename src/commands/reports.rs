// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::expenses::filter_from;
use crate::dashboard::Dashboard;
use crate::export::{rounded, two_places};
use crate::models::CategoryTotal;
use crate::notify::Notifier;
use crate::store::TableStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(dash, sub)?,
        Some(("totals", sub)) => totals(dash, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    dash.set_filter(filter_from(sub)?);
    let s = dash.summary();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    if s.count == 0 {
        println!("No expenses recorded yet.");
        return Ok(());
    }
    println!("Total Expenses: ${}", two_places(s.total));
    println!("Number of Expenses: {}", s.count);
    println!(
        "{}",
        pretty_table(&["Top Category", "Spent"], top_rows(&s.top_categories))
    );
    Ok(())
}

fn totals<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    dash.set_filter(filter_from(sub)?);
    let data = dash.totals();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No data to visualize yet.");
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(&["Category", "Total", "Share", "Colour"], total_rows(&data))
    );
    Ok(())
}

fn top_rows(top: &[CategoryTotal]) -> Vec<Vec<String>> {
    top.iter()
        .map(|t| vec![t.category.to_string(), format!("${}", two_places(t.total))])
        .collect()
}

fn total_rows(data: &[CategoryTotal]) -> Vec<Vec<String>> {
    data.iter()
        .map(|t| {
            vec![
                t.category.to_string(),
                two_places(t.total),
                format!("{}%", rounded(t.percentage, 1)),
                t.category.fill_color().to_string(),
            ]
        })
        .collect()
}
