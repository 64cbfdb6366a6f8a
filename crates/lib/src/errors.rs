use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading configuration or talking to PostgREST.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Could not read {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    MissingConfig(String),
    #[error("Invalid header value for '{0}'")]
    InvalidHeader(String),
    #[error("Failed to build Reqwest client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{} {reason}", .status.as_u16())]
    Api {
        status: StatusCode,
        reason: String,
        body: String,
    },
    #[error("Could not read records file {}: {source}", .path.display())]
    RecordsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeedError {
    /// Builds an [`SeedError::Api`] from a status and the raw response body.
    pub fn api(status: StatusCode, body: String) -> Self {
        SeedError::Api {
            status,
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        }
    }

    /// The response body of an API error, if this error carries one.
    pub fn body(&self) -> Option<&str> {
        match self {
            SeedError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}
