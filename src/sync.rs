// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pass-through between the in-memory expense list and the table store.
//!
//! Every store error stops here: it is logged, reported through the
//! [`Notifier`], and turned into a sentinel (`None`, `false`, or a
//! [`SyncError`]). The adapter holds no expense state of its own.

use crate::error::{SyncError, SyncResult};
use crate::models::{Expense, ExpenseFormData};
use crate::notify::Notifier;
use crate::session::SessionProvider;
use crate::store::{NewRow, RowFields, TableStore};
use anyhow::{anyhow, Result};
use log::{error, info};

pub struct SyncAdapter<S, N> {
    store: S,
    notifier: N,
}

impl<S: TableStore, N: Notifier> SyncAdapter<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        SyncAdapter { store, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Loads every expense owned by the session user, newest first.
    pub fn hydrate<P: SessionProvider + ?Sized>(&self, session: &P) -> SyncResult<Vec<Expense>> {
        if session.is_loading() {
            return Err(SyncError::SessionLoading);
        }
        let user_id = session.user_id().ok_or(SyncError::AuthRequired)?;

        let fetched = self.store.select_for_user(user_id).and_then(|rows| {
            rows.into_iter()
                .map(|r| r.into_expense())
                .collect::<Result<Vec<_>>>()
        });
        match fetched {
            Ok(expenses) => {
                info!("Hydrated {} expenses", expenses.len());
                Ok(expenses)
            }
            Err(e) => {
                error!("Error fetching expenses: {:#}", e);
                self.notifier.error("Failed to load expenses");
                Err(SyncError::RemoteReadFailure(format!("{:#}", e)))
            }
        }
    }

    /// Inserts a new expense and returns the id the store assigned.
    pub fn create<P: SessionProvider + ?Sized>(
        &self,
        session: &P,
        data: &ExpenseFormData,
    ) -> Option<String> {
        let Some(user_id) = session.user_id() else {
            self.notifier.error("You must be logged in to add expenses");
            return None;
        };
        match self.store.insert(&NewRow::new(user_id, data)) {
            Ok(row) => Some(row.id),
            Err(e) => {
                error!("Error adding expense: {:#}", e);
                self.notifier.error("Failed to add expense");
                None
            }
        }
    }

    pub fn update<P: SessionProvider + ?Sized>(&self, session: &P, expense: &Expense) -> bool {
        let Some(user_id) = session.user_id() else {
            return false;
        };
        let outcome = self
            .store
            .update(user_id, &expense.id, &RowFields::from(expense))
            .and_then(|n| expect_row(n, &expense.id));
        match outcome {
            Ok(()) => true,
            Err(e) => {
                error!("Error updating expense: {:#}", e);
                self.notifier.error("Failed to update expense");
                false
            }
        }
    }

    pub fn delete<P: SessionProvider + ?Sized>(&self, session: &P, id: &str) -> bool {
        let Some(user_id) = session.user_id() else {
            return false;
        };
        let outcome = self
            .store
            .delete(user_id, id)
            .and_then(|n| expect_row(n, id));
        match outcome {
            Ok(()) => true,
            Err(e) => {
                error!("Error deleting expense: {:#}", e);
                self.notifier.error("Failed to delete expense");
                false
            }
        }
    }
}

// A scoped write that touched nothing means the id is unknown or owned by
// someone else.
fn expect_row(affected: usize, id: &str) -> Result<()> {
    if affected == 0 {
        Err(anyhow!("No expense {} owned by the current user", id))
    } else {
        Ok(())
    }
}
