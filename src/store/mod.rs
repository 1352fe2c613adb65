// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod rest;
pub mod sqlite;

use crate::categories::ExpenseCategory;
use crate::models::{max_amount, Expense, ExpenseFormData, RawAmount};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

pub use rest::RestStore;
pub use sqlite::SqliteStore;

/// Row-oriented access to the `expenses` table. Every call is scoped by the
/// owning user; mutations additionally match on the row id.
pub trait TableStore {
    /// All rows owned by `user_id`, newest date first.
    fn select_for_user(&self, user_id: &str) -> Result<Vec<WireExpense>>;

    /// Inserts a row and returns it as stored, including the assigned id.
    fn insert(&self, row: &NewRow) -> Result<WireExpense>;

    /// Returns the number of rows changed.
    fn update(&self, user_id: &str, id: &str, fields: &RowFields) -> Result<usize>;

    /// Returns the number of rows removed.
    fn delete(&self, user_id: &str, id: &str) -> Result<usize>;
}

impl<T: TableStore + ?Sized> TableStore for &T {
    fn select_for_user(&self, user_id: &str) -> Result<Vec<WireExpense>> {
        (**self).select_for_user(user_id)
    }
    fn insert(&self, row: &NewRow) -> Result<WireExpense> {
        (**self).insert(row)
    }
    fn update(&self, user_id: &str, id: &str, fields: &RowFields) -> Result<usize> {
        (**self).update(user_id, id, fields)
    }
    fn delete(&self, user_id: &str, id: &str) -> Result<usize> {
        (**self).delete(user_id, id)
    }
}

impl<T: TableStore + ?Sized> TableStore for Box<T> {
    fn select_for_user(&self, user_id: &str) -> Result<Vec<WireExpense>> {
        (**self).select_for_user(user_id)
    }
    fn insert(&self, row: &NewRow) -> Result<WireExpense> {
        (**self).insert(row)
    }
    fn update(&self, user_id: &str, id: &str, fields: &RowFields) -> Result<usize> {
        (**self).update(user_id, id, fields)
    }
    fn delete(&self, user_id: &str, id: &str) -> Result<usize> {
        (**self).delete(user_id, id)
    }
}

/// An expense row as the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireExpense {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub amount: RawAmount,
    pub date: String,
    pub category: String,
}

impl WireExpense {
    /// Normalises the loosely typed wire row into an [`Expense`].
    pub fn into_expense(self) -> Result<Expense> {
        let amount = self
            .amount
            .to_decimal()
            .with_context(|| format!("Invalid amount {:?} on expense {}", self.amount, self.id))?;
        if amount.abs() > max_amount() {
            return Err(anyhow!("Amount {} on expense {} is out of range", amount, self.id));
        }
        let date = parse_wire_date(&self.date)
            .with_context(|| format!("Invalid date '{}' on expense {}", self.date, self.id))?;
        let category = self
            .category
            .parse::<ExpenseCategory>()
            .with_context(|| format!("Expense {} has an unsupported category", self.id))?;
        Ok(Expense {
            id: self.id,
            name: self.name,
            amount,
            date,
            category,
        })
    }
}

fn id_from_text_or_number<'de, D>(d: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Text(String),
        Number(i64),
    }
    Ok(match WireId::deserialize(d)? {
        WireId::Text(s) => s,
        WireId::Number(n) => n.to_string(),
    })
}

/// Accepts a bare calendar date or a timestamp. Timestamps keep the calendar
/// date they carry; no timezone shift is applied.
pub fn parse_wire_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(anyhow!("Unrecognised date '{}'", s))
}

/// Payload for a new row; `user_id` is set from the session, never the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRow {
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

impl NewRow {
    pub fn new(user_id: &str, data: &ExpenseFormData) -> Self {
        NewRow {
            user_id: user_id.to_string(),
            name: data.name.clone(),
            amount: data.amount,
            date: data.date,
            category: data.category,
        }
    }
}

/// The four mutable columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFields {
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

impl From<&Expense> for RowFields {
    fn from(e: &Expense) -> Self {
        RowFields {
            name: e.name.clone(),
            amount: e.amount,
            date: e.date,
            category: e.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_rows_decode_text_and_numeric_amounts() {
        let rows: Vec<WireExpense> = serde_json::from_str(
            r#"[
                {"id":"a1","user_id":"u","name":"Lunch","amount":"12.50","date":"2024-01-02","category":"Food"},
                {"id":7,"name":"Bus","amount":3.2,"date":"2024-01-01T00:00:00.000Z","category":"Transport"}
            ]"#,
        )
        .unwrap();
        let expenses: Vec<Expense> = rows
            .into_iter()
            .map(|r| r.into_expense().unwrap())
            .collect();
        assert_eq!(expenses[0].amount, "12.50".parse::<Decimal>().unwrap());
        assert_eq!(expenses[1].id, "7");
        assert_eq!(expenses[1].amount, "3.2".parse::<Decimal>().unwrap());
        assert_eq!(expenses[1].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn wire_row_with_unknown_category_is_rejected() {
        let row = WireExpense {
            id: "x".into(),
            user_id: None,
            name: "Mystery".into(),
            amount: RawAmount::from("1"),
            date: "2024-05-05".into(),
            category: "Groceries".into(),
        };
        assert!(row.into_expense().is_err());
    }

    #[test]
    fn wire_row_with_oversized_amount_is_rejected() {
        let row: WireExpense = serde_json::from_str(
            r#"{"id":"big","name":"Yacht","amount":5e28,"date":"2024-05-05","category":"Other"}"#,
        )
        .unwrap();
        assert!(row.into_expense().is_err());
    }

    #[test]
    fn timestamps_keep_their_calendar_date() {
        let d = parse_wire_date("2024-02-29T23:30:00+05:00").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        let d = parse_wire_date("2024-03-01 08:00:00").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(parse_wire_date("yesterday").is_err());
    }

    #[test]
    fn new_row_serialises_plain_wire_values() {
        let data = ExpenseFormData {
            name: "Rent".into(),
            amount: "950.00".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            category: ExpenseCategory::Housing,
        };
        let v = serde_json::to_value(NewRow::new("u-1", &data)).unwrap();
        assert_eq!(v["user_id"], "u-1");
        assert_eq!(v["amount"], "950.00");
        assert_eq!(v["date"], "2024-04-01");
        assert_eq!(v["category"], "Housing");
    }
}
