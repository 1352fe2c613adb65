// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::ExpenseCategory;
use crate::models::{CategoryTotal, Expense, Summary};
use rust_decimal::Decimal;

const TOP_CATEGORIES: usize = 3;

/// Per-category totals in order of first appearance. Empty when there is
/// nothing to divide by.
pub fn aggregate(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut sums: Vec<(ExpenseCategory, Decimal)> = Vec::new();
    for e in expenses {
        match sums.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, total)) => *total = total.saturating_add(e.amount),
            None => sums.push((e.category, e.amount)),
        }
    }

    let grand = saturating_sum(sums.iter().map(|(_, t)| *t));
    if grand.is_zero() {
        return Vec::new();
    }

    sums.into_iter()
        .map(|(category, total)| CategoryTotal {
            category,
            total,
            percentage: total
                .checked_div(grand)
                .map(|share| share * Decimal::ONE_HUNDRED)
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Headline figures for the dashboard: grand total, count and the three
/// biggest categories.
pub fn summarize(expenses: &[Expense]) -> Summary {
    let mut top = aggregate(expenses);
    top.sort_by(|a, b| b.total.cmp(&a.total));
    top.truncate(TOP_CATEGORIES);
    Summary {
        total: saturating_sum(expenses.iter().map(|e| e.amount)),
        count: expenses.len(),
        top_categories: top,
    }
}

// Plain `Sum` panics past `Decimal::MAX`; totals clamp there instead.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
