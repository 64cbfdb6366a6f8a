//! # PostgREST Client
//!
//! A thin wrapper over `reqwest` that speaks to the Supabase REST layer at
//! `{base_url}/rest/v1/questions`. Every request carries the service key both as
//! the `apikey` header and as a bearer token.

use crate::config::SeedConfig;
use crate::constants::{PREFER_COUNT_EXACT, PREFER_MERGE_DUPLICATES, QUESTION_SUMMARY_COLUMNS};
use crate::errors::SeedError;
use crate::types::{QuestionListing, QuestionSummary, SeedQuestion};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE, CONTENT_TYPE};
use reqwest::{Client, Response};
use tracing::{debug, info};

const PREFER: &str = "Prefer";
const APIKEY: &str = "apikey";

/// Builds the header table sent with every request.
pub fn construct_headers(service_key: &str) -> Result<HeaderMap, SeedError> {
    let mut key =
        HeaderValue::from_str(service_key).map_err(|_| SeedError::InvalidHeader(APIKEY.into()))?;
    key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {service_key}"))
        .map_err(|_| SeedError::InvalidHeader(AUTHORIZATION.to_string()))?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(APIKEY, key);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Client for the `questions` table.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    questions_url: String,
}

impl RestClient {
    /// Creates a client for the project described by `config`.
    ///
    /// Uses the `reqwest` default timeouts; there is no retry layer.
    pub fn new(config: &SeedConfig) -> Result<Self, SeedError> {
        let client = Client::builder()
            .default_headers(construct_headers(&config.service_key)?)
            .build()
            .map_err(SeedError::ClientBuild)?;
        Ok(Self {
            client,
            questions_url: config.questions_url(),
        })
    }

    pub fn questions_url(&self) -> &str {
        &self.questions_url
    }

    /// Upserts one question, keyed on its `id`.
    ///
    /// Any status below 400 counts as success. Error statuses are returned as
    /// [`SeedError::Api`] with the response body attached.
    pub async fn upsert_question(&self, question: &SeedQuestion) -> Result<(), SeedError> {
        debug!("POST {} for question {}", self.questions_url, question.id);
        let response = self
            .client
            .post(&self.questions_url)
            .header(PREFER, PREFER_MERGE_DUPLICATES)
            .json(question)
            .send()
            .await?;
        error_for_status(response).await?;
        info!("Upserted question {}", question.id);
        Ok(())
    }

    /// Fetches the first `limit` questions along with the table's total row count.
    pub async fn list_questions(&self, limit: usize) -> Result<QuestionListing, SeedError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.questions_url)
            .header(PREFER, PREFER_COUNT_EXACT)
            .query(&[("select", QUESTION_SUMMARY_COLUMNS), ("limit", limit.as_str())])
            .send()
            .await?;
        let response = error_for_status(response).await?;

        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total);
        let rows: Vec<QuestionSummary> = response.json().await?;
        debug!("Listed {} questions (total: {:?})", rows.len(), total);

        Ok(QuestionListing { total, rows })
    }
}

async fn error_for_status(response: Response) -> Result<Response, SeedError> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let body = response.text().await.unwrap_or_default();
        return Err(SeedError::api(status, body));
    }
    Ok(response)
}

/// Extracts the total from a PostgREST `Content-Range` header.
///
/// `0-4/123` and `*/123` yield `Some(123)`; an unknown total (`0-4/*`) yields `None`.
pub fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse().ok()
}
