// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Owner of the in-memory expense list.
//!
//! The list only changes after the store has acknowledged the write, so the
//! view never shows an unconfirmed mutation.

use crate::aggregate::{aggregate, summarize};
use crate::error::SyncResult;
use crate::export::{export_to, FileDownload};
use crate::models::{CategoryTotal, Expense, ExpenseFormData, Summary};
use crate::notify::Notifier;
use crate::session::SessionProvider;
use crate::store::TableStore;
use crate::sync::SyncAdapter;
use crate::view::{derive_view, FilterState, SortKey, SortState};
use anyhow::Result;
use log::warn;

pub struct Dashboard<S, N> {
    adapter: SyncAdapter<S, N>,
    expenses: Vec<Expense>,
    filter: FilterState,
    sort: SortState,
}

impl<S: TableStore, N: Notifier> Dashboard<S, N> {
    pub fn new(adapter: SyncAdapter<S, N>) -> Self {
        Dashboard {
            adapter,
            expenses: Vec::new(),
            filter: FilterState::default(),
            sort: SortState::default(),
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn find(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Replaces the list with the user's stored expenses. On failure the list
    /// is left empty rather than stale.
    pub fn load<P: SessionProvider + ?Sized>(&mut self, session: &P) -> SyncResult<usize> {
        match self.adapter.hydrate(session) {
            Ok(expenses) => {
                self.expenses = expenses;
                Ok(self.expenses.len())
            }
            Err(e) => {
                self.expenses.clear();
                Err(e)
            }
        }
    }

    /// Creates a new expense, or updates `editing` when given. Returns the id
    /// of the stored expense on success.
    pub fn submit<P: SessionProvider + ?Sized>(
        &mut self,
        session: &P,
        data: ExpenseFormData,
        editing: Option<&str>,
    ) -> Option<String> {
        match editing {
            Some(id) => {
                let Some(pos) = self.expenses.iter().position(|e| e.id == id) else {
                    warn!("Edit requested for unknown expense {}", id);
                    self.adapter.notifier().error("Expense not found");
                    return None;
                };
                let mut updated = self.expenses[pos].clone();
                updated.apply(data);
                if !self.adapter.update(session, &updated) {
                    return None;
                }
                self.expenses[pos] = updated;
                self.adapter
                    .notifier()
                    .success("Expense updated successfully");
                Some(id.to_string())
            }
            None => {
                let id = self.adapter.create(session, &data)?;
                self.expenses.push(Expense::from_form(id.clone(), data));
                self.adapter.notifier().success("Expense added successfully");
                Some(id)
            }
        }
    }

    pub fn remove<P: SessionProvider + ?Sized>(&mut self, session: &P, id: &str) -> bool {
        if !self.adapter.delete(session, id) {
            return false;
        }
        self.expenses.retain(|e| e.id != id);
        self.adapter
            .notifier()
            .success("Expense deleted successfully");
        true
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn toggle_sort(&mut self, key: SortKey) -> SortState {
        self.sort = self.sort.toggle(key);
        self.sort
    }

    /// The list as displayed: filtered, then sorted.
    pub fn view(&self) -> Vec<Expense> {
        derive_view(&self.expenses, &self.filter, &self.sort)
    }

    pub fn totals(&self) -> Vec<CategoryTotal> {
        aggregate(&self.view())
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.view())
    }

    /// Exports the displayed list.
    pub fn export(&self, file_stem: &str, sink: &dyn FileDownload) -> Result<String> {
        export_to(&self.view(), file_stem, sink)
    }
}
