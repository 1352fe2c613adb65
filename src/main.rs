// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use expensely::config::Config;
use expensely::dashboard::Dashboard;
use expensely::notify::ConsoleNotifier;
use expensely::sync::SyncAdapter;
use expensely::{cli, commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    if let Some(("category", sub)) = matches.subcommand() {
        return commands::categories::handle(sub);
    }

    let cfg = Config::load()?;
    let session = cfg.session();
    let store = cfg.open_store()?;
    let mut dash = Dashboard::new(SyncAdapter::new(store, ConsoleNotifier));

    match matches.subcommand() {
        Some((cmd, sub)) => {
            dash.load(&session)?;
            match cmd {
                "expense" => commands::expenses::handle(&mut dash, &session, sub)?,
                "report" => commands::reports::handle(&mut dash, sub)?,
                "export" => commands::exporter::handle(&mut dash, sub)?,
                _ => {}
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
