// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::ExpenseCategory;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let data: Vec<Vec<String>> = ExpenseCategory::all()
                .iter()
                .map(|c| {
                    vec![
                        c.name().to_string(),
                        c.fill_color().to_string(),
                        c.display_color().to_string(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Category", "Chart", "Pill"], data));
        }
        _ => {}
    }
    Ok(())
}
