// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::ExpenseCategory;
use crate::error::SyncError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

impl Expense {
    pub fn from_form(id: impl Into<String>, data: ExpenseFormData) -> Self {
        Expense {
            id: id.into(),
            name: data.name,
            amount: data.amount,
            date: data.date,
            category: data.category,
        }
    }

    /// Overwrites the four mutable fields, keeping the id.
    pub fn apply(&mut self, data: ExpenseFormData) {
        self.name = data.name;
        self.amount = data.amount;
        self.date = data.date;
        self.category = data.category;
    }
}

/// Validated form payload, ready for the sync adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFormData {
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

impl ExpenseFormData {
    pub fn from_expense(e: &Expense) -> Self {
        ExpenseFormData {
            name: e.name.clone(),
            amount: e.amount,
            date: e.date,
            category: e.category,
        }
    }
}

/// An amount that may arrive either as text or as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            RawAmount::Number(n) => parse_amount(&n.to_string()),
            RawAmount::Text(s) => parse_amount(s),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

impl From<Decimal> for RawAmount {
    fn from(d: Decimal) -> Self {
        RawAmount::Text(d.to_string())
    }
}

/// Largest amount a single expense may carry. Keeps running totals well
/// inside `Decimal` range.
pub fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000i64)
}

/// Lenient decimal parse: plain or scientific notation, surrounding
/// whitespace ignored. Empty input yields `None`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// Unvalidated user input as captured by the add/edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseFormInput {
    pub name: String,
    pub amount: RawAmount,
    pub date: NaiveDate,
    pub category: String,
}

impl ExpenseFormInput {
    /// Blank form for a new expense dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        ExpenseFormInput {
            name: String::new(),
            amount: RawAmount::Text("0".into()),
            date: today,
            category: ExpenseCategory::Other.name().to_string(),
        }
    }

    pub fn from_expense(e: &Expense) -> Self {
        ExpenseFormInput {
            name: e.name.clone(),
            amount: RawAmount::from(e.amount),
            date: e.date,
            category: e.category.name().to_string(),
        }
    }

    pub fn validate(&self) -> Result<ExpenseFormData, SyncError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SyncError::ValidationFailure("Name is required".into()));
        }
        let amount = self
            .amount
            .to_decimal()
            .ok_or_else(|| SyncError::ValidationFailure("Amount must be a number".into()))?;
        if amount <= Decimal::ZERO {
            return Err(SyncError::ValidationFailure("Amount must be positive".into()));
        }
        if amount > max_amount() {
            return Err(SyncError::ValidationFailure("Amount is too large".into()));
        }
        let category = self
            .category
            .parse::<ExpenseCategory>()
            .map_err(|_| SyncError::ValidationFailure("Category is required".into()))?;
        Ok(ExpenseFormData {
            name: name.to_string(),
            amount,
            date: self.date,
            category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: Decimal,
    pub count: usize,
    pub top_categories: Vec<CategoryTotal>,
}
