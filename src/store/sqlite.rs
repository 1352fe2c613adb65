// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{NewRow, RowFields, TableStore, WireExpense};
use crate::models::RawAmount;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};
use std::fs;
use std::path::Path;

/// Embedded table store with the same per-user scoping as the hosted one.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create data dir")?;
        }
        let conn =
            Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(SqliteStore { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(SqliteStore { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS expenses(
        id TEXT PRIMARY KEY NOT NULL DEFAULT (lower(hex(randomblob(16)))),
        user_id TEXT NOT NULL,
        name TEXT NOT NULL CHECK(length(trim(name)) > 0),
        amount TEXT NOT NULL,
        date TEXT NOT NULL,
        category TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_user_date ON expenses(user_id, date);
    "#,
    )?;
    Ok(())
}

fn wire_row(r: &Row<'_>) -> rusqlite::Result<WireExpense> {
    Ok(WireExpense {
        id: r.get(0)?,
        user_id: r.get(1)?,
        name: r.get(2)?,
        amount: RawAmount::Text(r.get(3)?),
        date: r.get(4)?,
        category: r.get(5)?,
    })
}

impl TableStore for SqliteStore {
    fn select_for_user(&self, user_id: &str) -> Result<Vec<WireExpense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, amount, date, category FROM expenses
             WHERE user_id=?1 ORDER BY date DESC, rowid",
        )?;
        let rows = stmt.query_map(params![user_id], wire_row)?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    fn insert(&self, row: &NewRow) -> Result<WireExpense> {
        let stored = self
            .conn
            .query_row(
                "INSERT INTO expenses(user_id, name, amount, date, category)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, user_id, name, amount, date, category",
                params![
                    row.user_id,
                    row.name,
                    row.amount.to_string(),
                    row.date.to_string(),
                    row.category.name()
                ],
                wire_row,
            )
            .with_context(|| format!("Insert expense '{}'", row.name))?;
        Ok(stored)
    }

    fn update(&self, user_id: &str, id: &str, fields: &RowFields) -> Result<usize> {
        let n = self
            .conn
            .execute(
                "UPDATE expenses SET name=?1, amount=?2, date=?3, category=?4
                 WHERE id=?5 AND user_id=?6",
                params![
                    fields.name,
                    fields.amount.to_string(),
                    fields.date.to_string(),
                    fields.category.name(),
                    id,
                    user_id
                ],
            )
            .with_context(|| format!("Update expense {}", id))?;
        Ok(n)
    }

    fn delete(&self, user_id: &str, id: &str) -> Result<usize> {
        let n = self
            .conn
            .execute(
                "DELETE FROM expenses WHERE id=?1 AND user_id=?2",
                params![id, user_id],
            )
            .with_context(|| format!("Delete expense {}", id))?;
        Ok(n)
    }
}
