//! # Shared Constants
//!
//! Names of the env-file keys and PostgREST paths used across the `qseed`
//! workspace, kept in one place to avoid magic strings.

/// The env file read when no `--env-file` is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Key holding the Supabase project URL.
pub const URL_KEY: &str = "EXPO_PUBLIC_SUPABASE_URL";

/// Preferred key for the service secret.
pub const SECRET_KEY: &str = "SECRET_API_KEY";

/// Alternate key for the service secret, consulted when [`SECRET_KEY`] is absent.
pub const SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Path of the `questions` table under the PostgREST root.
pub const QUESTIONS_PATH: &str = "/rest/v1/questions";

/// Columns fetched by the `check` listing.
pub const QUESTION_SUMMARY_COLUMNS: &str = "id,question_text,category,difficulty,company";

/// `Prefer` directive that turns a POST into an upsert on the primary key.
pub const PREFER_MERGE_DUPLICATES: &str = "resolution=merge-duplicates";

/// `Prefer` directive asking PostgREST to report the exact row count.
pub const PREFER_COUNT_EXACT: &str = "count=exact";
