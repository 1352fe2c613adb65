// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtered and sorted projection of the expense list.

use crate::categories::ExpenseCategory;
use crate::models::{parse_amount, Expense};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Active constraints on the displayed list. Unset fields do not constrain;
/// set fields are combined with AND. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<ExpenseCategory>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search_term: Option<String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_amount_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Blank terms are dropped.
    #[must_use]
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search_term = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn matches(&self, e: &Expense) -> bool {
        if self.category.is_some_and(|c| c != e.category) {
            return false;
        }
        if self.min_amount.is_some_and(|min| e.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| e.amount > max) {
            return false;
        }
        if self.start_date.is_some_and(|start| e.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| e.date > end) {
            return false;
        }
        match self.search_term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                e.name.to_lowercase().contains(&term)
                    || e.category.name().to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

/// Amount bound typed by the user. Anything that is not a number means
/// "no bound", never zero.
pub fn parse_amount_bound(s: &str) -> Option<Decimal> {
    parse_amount(s)
}

pub fn parse_date_bound(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Date,
    Category,
    Amount,
}

impl SortKey {
    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Category => a.category.name().cmp(b.category.name()),
            SortKey::Amount => a.amount.cmp(&b.amount),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "date" => Ok(SortKey::Date),
            "category" => Ok(SortKey::Category),
            "amount" => Ok(SortKey::Amount),
            other => Err(format!("Unknown sort key '{}'", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Date => "date",
            SortKey::Category => "category",
            SortKey::Amount => "amount",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortState {
    /// Keep fetch order (newest date first).
    #[default]
    Unsorted,
    By {
        key: SortKey,
        direction: SortDirection,
    },
}

impl SortState {
    pub fn ascending(key: SortKey) -> Self {
        SortState::By {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        SortState::By {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Column-header click: ascending, then descending, then off. A
    /// different column starts again at ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        match self {
            SortState::By {
                key: current,
                direction: SortDirection::Ascending,
            } if current == key => SortState::descending(key),
            SortState::By {
                key: current,
                direction: SortDirection::Descending,
            } if current == key => SortState::Unsorted,
            _ => SortState::ascending(key),
        }
    }
}

/// Applies `filter` then `sort` to `expenses`. Sorting is stable, so equal
/// keys keep their input order in both directions.
pub fn derive_view(expenses: &[Expense], filter: &FilterState, sort: &SortState) -> Vec<Expense> {
    let mut out: Vec<Expense> = expenses
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect();
    if let SortState::By { key, direction } = *sort {
        out.sort_by(|a, b| {
            let ord = key.compare(a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_three_states() {
        let s = SortState::Unsorted.toggle(SortKey::Amount);
        assert_eq!(s, SortState::ascending(SortKey::Amount));
        let s = s.toggle(SortKey::Amount);
        assert_eq!(s, SortState::descending(SortKey::Amount));
        let s = s.toggle(SortKey::Amount);
        assert_eq!(s, SortState::Unsorted);
    }

    #[test]
    fn toggle_other_column_restarts_ascending() {
        let s = SortState::descending(SortKey::Name).toggle(SortKey::Date);
        assert_eq!(s, SortState::ascending(SortKey::Date));
    }

    #[test]
    fn bad_bounds_are_absent() {
        assert_eq!(parse_amount_bound("abc"), None);
        assert_eq!(parse_amount_bound(""), None);
        assert_eq!(parse_amount_bound("0"), Some(Decimal::ZERO));
        assert_eq!(parse_date_bound("2024-13-01"), None);
    }

    #[test]
    fn sort_key_parses() {
        assert_eq!("Amount".parse::<SortKey>(), Ok(SortKey::Amount));
        assert!("price".parse::<SortKey>().is_err());
    }
}
