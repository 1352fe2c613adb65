// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::expenses::{filter_from, sort_from};
use crate::dashboard::Dashboard;
use crate::export::DirectoryDownload;
use crate::notify::Notifier;
use crate::store::TableStore;
use anyhow::Result;

pub fn handle<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(dash, sub),
        _ => Ok(()),
    }
}

fn export_csv<S: TableStore, N: Notifier>(
    dash: &mut Dashboard<S, N>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let stem = sub.get_one::<String>("name").unwrap();
    dash.set_filter(filter_from(sub)?);
    dash.set_sort(sort_from(sub)?);
    let sink = DirectoryDownload::new(out.trim());
    let filename = dash.export(stem, &sink)?;
    println!(
        "Exported {} expenses to {}",
        dash.view().len(),
        sink.path_for(&filename).display()
    );
    Ok(())
}
