// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use anyhow::{bail, Context, Result};
use log::info;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_STEM: &str = "expense_data";
const HEADER: [&str; 4] = ["Name", "Category", "Amount", "Date"];

/// Delimited-text export: `Name,Category,Amount,Date`. Text columns are
/// always quoted, amounts carry two decimals, dates are `YYYY-MM-DD`.
/// Rows are newline-separated without a trailing newline.
pub fn serialize(expenses: &[Expense]) -> Vec<u8> {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(HEADER.join(","));
    for e in expenses {
        lines.push(
            [
                quoted(&e.name),
                quoted(e.category.name()),
                two_places(e.amount),
                e.date.format("%Y-%m-%d").to_string(),
            ]
            .join(","),
        );
    }
    lines.join("\n").into_bytes()
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// `dp` decimal places, half away from zero. `{:.N}` on its own truncates.
pub fn rounded(value: Decimal, dp: u32) -> String {
    format!(
        "{:.*}",
        dp as usize,
        value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn two_places(amount: Decimal) -> String {
    rounded(amount, 2)
}

/// Amount and date as shown in the expense table: `$12.50`, `Jan 05, 2024`.
pub fn display_row(e: &Expense) -> (String, String) {
    (
        format!("${}", two_places(e.amount)),
        e.date.format("%b %d, %Y").to_string(),
    )
}

/// Hands a finished payload to whatever saves it for the user.
pub trait FileDownload {
    fn deliver(&self, bytes: &[u8], filename: &str) -> Result<()>;
}

/// Saves downloads into a fixed directory.
pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectoryDownload { dir: dir.into() }
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl FileDownload for DirectoryDownload {
    fn deliver(&self, bytes: &[u8], filename: &str) -> Result<()> {
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || Path::new(filename)
                .components()
                .any(|c| !matches!(c, std::path::Component::Normal(_)))
        {
            bail!("Refusing to write download named '{}'", filename);
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Create download dir {}", self.dir.display()))?;
        let path = self.path_for(filename);
        fs::write(&path, bytes).with_context(|| format!("Write {}", path.display()))?;
        info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Serialises `expenses` and delivers them as `<file_stem>.csv`. Returns the
/// file name used.
pub fn export_to(expenses: &[Expense], file_stem: &str, sink: &dyn FileDownload) -> Result<String> {
    let stem = file_stem.trim();
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem };
    let filename = format!("{}.csv", stem);
    sink.deliver(&serialize(expenses), &filename)?;
    Ok(filename)
}
