// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::store::{RestStore, SqliteStore, TableStore};
use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Expensely", "expensely"));

const ENV_PREFIX: &str = "EXPENSELY_";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Rest,
    #[default]
    Sqlite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: Backend,
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub database: Option<PathBuf>,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")
}

pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.json"))
}

pub fn default_db_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join("expensely.sqlite"))
}

impl Config {
    /// Config file (if present) overlaid with `EXPENSELY_*` variables.
    pub fn load() -> Result<Config> {
        let path = config_path()?;
        let mut cfg = if path.exists() {
            Config::from_file(&path)?
        } else {
            debug!("No config at {}, using defaults", path.display());
            Config::default()
        };
        cfg.apply_env(std::env::vars())?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Parse config {}", path.display()))
    }

    /// Applies recognised `EXPENSELY_*` pairs; others are ignored.
    pub fn apply_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.trim().to_string();
            match name {
                "BACKEND" => {
                    self.backend = match value.to_lowercase().as_str() {
                        "rest" => Backend::Rest,
                        "sqlite" => Backend::Sqlite,
                        other => bail!("Unknown backend '{}' (use rest|sqlite)", other),
                    }
                }
                "URL" => self.url = Some(value),
                "API_KEY" => self.api_key = Some(value),
                "ACCESS_TOKEN" => self.access_token = Some(value),
                "USER_ID" => self.user_id = Some(value),
                "DB" => self.database = Some(PathBuf::from(value)),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn session(&self) -> Session {
        match &self.user_id {
            Some(id) => Session::signed_in(id.as_str()),
            None => Session::anonymous(),
        }
    }

    pub fn open_store(&self) -> Result<Box<dyn TableStore>> {
        match self.backend {
            Backend::Rest => {
                let url = self.url.as_deref().context("EXPENSELY_URL is not set")?;
                let key = self
                    .api_key
                    .as_deref()
                    .context("EXPENSELY_API_KEY is not set")?;
                let token = self.access_token.as_deref().unwrap_or(key);
                Ok(Box::new(RestStore::new(url, key, token)?))
            }
            Backend::Sqlite => {
                let path = match &self.database {
                    Some(p) => p.clone(),
                    None => default_db_path()?,
                };
                Ok(Box::new(SqliteStore::open(&path)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg: Config = serde_json::from_str(
            r#"{"backend":"sqlite","user_id":"from-file","url":"https://a.example"}"#,
        )
        .unwrap();
        cfg.apply_env(vars(&[
            ("EXPENSELY_BACKEND", "REST"),
            ("EXPENSELY_USER_ID", " u-42 "),
            ("HOME", "/root"),
        ]))
        .unwrap();
        assert_eq!(cfg.backend, Backend::Rest);
        assert_eq!(cfg.user_id.as_deref(), Some("u-42"));
        assert_eq!(cfg.url.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let mut cfg = Config::default();
        assert!(cfg.apply_env(vars(&[("EXPENSELY_BACKEND", "mongo")])).is_err());
    }

    #[test]
    fn rest_backend_requires_url() {
        let cfg = Config {
            backend: Backend::Rest,
            ..Config::default()
        };
        assert!(cfg.open_store().is_err());
    }

    #[test]
    fn session_follows_user_id() {
        let cfg = Config::default();
        assert_eq!(cfg.session(), Session::anonymous());
        let cfg = Config {
            user_id: Some("u-1".into()),
            ..Config::default()
        };
        assert_eq!(cfg.session(), Session::signed_in("u-1"));
    }
}
