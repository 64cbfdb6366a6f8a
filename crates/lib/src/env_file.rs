//! # Env File Loader
//!
//! Reads `KEY=VALUE` files of the kind kept next to Expo/Supabase projects.
//! The format is intentionally narrow: no `export` prefix, no escapes and no
//! variable interpolation. Values are taken literally apart from one optional
//! layer of matching quotes.

use crate::errors::SeedError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Key/value pairs loaded from an env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    entries: HashMap<String, String>,
}

impl EnvMap {
    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value of the first key in `keys` that holds a non-empty value.
    pub fn first_present(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Parses env-file content.
///
/// Blank lines and lines starting with `#` are skipped, as are lines with no `=`.
/// Key and value are split on the first `=` and trimmed. A value wrapped in
/// matching single or double quotes loses exactly one layer of them.
pub fn parse_env(content: &str) -> EnvMap {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

/// Reads and parses the env file at `path`.
pub fn read_env_file(path: impl AsRef<Path>) -> Result<EnvMap, SeedError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SeedError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_env(&content);
    debug!("Loaded {} entries from '{}'", map.len(), path.display());
    Ok(map)
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(b'"'), Some(b'"')) | (Some(b'\''), Some(b'\'')) if value.len() >= 2 => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}
