// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! PostgREST-style HTTP table store, as exposed by hosted Postgres backends.

use super::{NewRow, RowFields, TableStore, WireExpense};
use crate::utils::http_client;
use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;

const TABLE: &str = "expenses";

pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: &str, access_token: &str) -> Result<Self> {
        Ok(RestStore {
            client: http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: access_token.to_string(),
        })
    }

    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    fn request(&self, method: Method, query: &[(&str, String)]) -> RequestBuilder {
        debug!("{} {} {:?}", method, self.table_url(), query);
        self.client
            .request(method, self.table_url())
            .query(query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.access_token)
    }
}

fn read_rows(resp: Response) -> Result<Vec<WireExpense>> {
    let body = resp
        .error_for_status()?
        .text()
        .context("Request to expense store failed")?;
    decode_rows(&body)
}

/// Decodes a `return=representation` body. Scoped writes that matched
/// nothing come back as `[]`.
pub fn decode_rows(body: &str) -> Result<Vec<WireExpense>> {
    serde_json::from_str(body).context("Unexpected response body from expense store")
}

fn owned_row(user_id: &str, id: &str) -> Vec<(&'static str, String)> {
    vec![("id", format!("eq.{}", id)), ("user_id", format!("eq.{}", user_id))]
}

impl TableStore for RestStore {
    fn select_for_user(&self, user_id: &str) -> Result<Vec<WireExpense>> {
        let query = [
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", user_id)),
            ("order", "date.desc".to_string()),
        ];
        let resp = self
            .request(Method::GET, &query)
            .send()
            .context("Request to expense store failed")?;
        read_rows(resp)
    }

    fn insert(&self, row: &NewRow) -> Result<WireExpense> {
        let resp = self
            .request(Method::POST, &[("select", "*".to_string())])
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .context("Request to expense store failed")?;
        let rows = read_rows(resp)?;
        rows.into_iter()
            .next()
            .context("Expense store returned no row for insert")
    }

    fn update(&self, user_id: &str, id: &str, fields: &RowFields) -> Result<usize> {
        let resp = self
            .request(Method::PATCH, &owned_row(user_id, id))
            .header("Prefer", "return=representation")
            .json(fields)
            .send()
            .context("Request to expense store failed")?;
        let rows = read_rows(resp)?;
        Ok(rows.len())
    }

    fn delete(&self, user_id: &str, id: &str) -> Result<usize> {
        let resp = self
            .request(Method::DELETE, &owned_row(user_id, id))
            .header("Prefer", "return=representation")
            .send()
            .context("Request to expense store failed")?;
        let rows = read_rows(resp)?;
        Ok(rows.len())
    }
}
