//! # Seeder Configuration
//!
//! Resolves the two values every command needs, the project URL and the
//! service key, from an [`EnvMap`] plus optional command-line overrides.

use crate::constants::{SECRET_KEY, SERVICE_ROLE_KEY, URL_KEY};
use crate::env_file::EnvMap;
use crate::errors::SeedError;
use std::fmt;
use std::path::Path;

/// Values given explicitly on the command line. They win over the env file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub key: Option<String>,
}

/// Resolved connection settings for the PostgREST endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// Project URL without a trailing slash, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// Service key sent as both `apikey` and bearer token.
    pub service_key: String,
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("base_url", &self.base_url)
            .field("service_key", &"<redacted>")
            .finish()
    }
}

impl SeedConfig {
    /// Resolves the configuration.
    ///
    /// The key is looked up under `SECRET_API_KEY` first and then
    /// `SUPABASE_SERVICE_ROLE_KEY`; empty values count as absent. Trailing `/`
    /// is trimmed from the URL, and a URL that is empty after trimming is absent
    /// too. `source` only names the env file in the error message.
    pub fn from_env_map(
        env: &EnvMap,
        overrides: &ConfigOverrides,
        source: &Path,
    ) -> Result<Self, SeedError> {
        let base_url = non_empty(overrides.url.as_deref().map(trim_url))
            .or_else(|| non_empty(env.first_present(&[URL_KEY]).map(trim_url)));
        let service_key = non_empty(overrides.key.as_deref())
            .or_else(|| env.first_present(&[SECRET_KEY, SERVICE_ROLE_KEY]));

        match (base_url, service_key) {
            (Some(url), Some(key)) => Ok(Self {
                base_url: url.to_string(),
                service_key: key.to_string(),
            }),
            _ => Err(SeedError::MissingConfig(format!(
                "Missing {URL_KEY} or {SECRET_KEY}/{SERVICE_ROLE_KEY} in {}",
                source.display()
            ))),
        }
    }

    /// Full URL of the `questions` table endpoint.
    pub fn questions_url(&self) -> String {
        format!("{}{}", self.base_url, crate::constants::QUESTIONS_PATH)
    }
}

fn trim_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
