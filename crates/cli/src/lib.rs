//! # `qseed-cli` Library Crate
//!
//! Argument parsing and command handlers for the `qseed` binary. The binary
//! itself only sets up logging and calls [`run`].

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use qseed::constants::DEFAULT_ENV_FILE;
use qseed::{
    load_questions, read_env_file, seed_questions, upsert_all, ConfigOverrides, EnvMap,
    QuestionSummary, RestClient, SeedConfig, UpsertOutcome,
};
use std::path::{Path, PathBuf};
use tracing::info;

const TEXT_PREVIEW_CHARS: usize = 80;

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(name = "qseed", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the env file holding the Supabase URL and service key.
    #[arg(long, global = true, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,
    /// Supabase project URL. Overrides EXPO_PUBLIC_SUPABASE_URL from the env file.
    #[arg(long, global = true)]
    pub url: Option<String>,
    /// Service key. Overrides SECRET_API_KEY / SUPABASE_SERVICE_ROLE_KEY from the env file.
    #[arg(long, global = true)]
    pub key: Option<String>,
    /// Defaults to `seed` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upsert the seed questions into the `questions` table
    Seed(SeedArgs),
    /// Show the row count and a sample of the `questions` table
    Check(CheckArgs),
    /// Print the built-in seed questions as JSON
    Dump,
}

#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// Read records from a JSON array file instead of the built-in list.
    #[arg(long)]
    pub records: Option<PathBuf>,
    /// Exit with a non-zero status if any record failed to upsert.
    #[arg(long)]
    pub fail_on_error: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Number of sample rows to show.
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

// --- Public Entrypoint ---

/// The main entry point for the `qseed-cli` library.
pub async fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        url: cli.url,
        key: cli.key,
    };
    match cli.command.unwrap_or(Commands::Seed(SeedArgs::default())) {
        Commands::Seed(args) => handle_seed(&cli.env_file, &overrides, args).await,
        Commands::Check(args) => handle_check(&cli.env_file, &overrides, args).await,
        Commands::Dump => handle_dump(),
    }
}

// --- Command Handlers ---

async fn handle_seed(env_file: &Path, overrides: &ConfigOverrides, args: SeedArgs) -> Result<()> {
    let config = resolve_config(env_file, overrides)?;
    let questions = match &args.records {
        Some(path) => load_questions(path)
            .with_context(|| format!("Failed to load records from '{}'", path.display()))?,
        None => seed_questions(),
    };
    info!("Seeding {} questions", questions.len());

    println!("Using Supabase URL: {}", config.base_url);
    println!("Seeding data via REST API...");

    let client = RestClient::new(&config)?;
    let report = upsert_all(&client, &questions, print_outcome).await;

    println!(
        "Done: {} upserted, {} failed.",
        report.succeeded,
        report.failed.len()
    );

    if args.fail_on_error && !report.is_success() {
        bail!(
            "{} of {} records failed to upsert",
            report.failed.len(),
            report.attempted
        );
    }
    Ok(())
}

async fn handle_check(env_file: &Path, overrides: &ConfigOverrides, args: CheckArgs) -> Result<()> {
    let config = resolve_config(env_file, overrides)?;
    println!("Using Supabase URL: {}", config.base_url);
    println!("Checking questions table...");

    let client = RestClient::new(&config)?;
    let listing = client
        .list_questions(args.limit)
        .await
        .context("Failed to list questions")?;

    match listing.total {
        Some(total) => println!("Total questions in database: {total}"),
        None => println!("Total questions in database: unknown"),
    }
    println!();
    println!("--- Sample Questions ---");
    for (i, row) in listing.rows.iter().enumerate() {
        println!("{}", format_summary(i + 1, row));
    }
    Ok(())
}

fn handle_dump() -> Result<()> {
    let json = serde_json::to_string_pretty(&seed_questions())
        .context("Failed to serialize seed questions")?;
    println!("{json}");
    Ok(())
}

// --- Helpers ---

/// Loads the env file and resolves the required settings.
///
/// An unreadable env file is not fatal: a warning is printed and resolution
/// continues with an empty map, so a missing value is what gets reported.
fn resolve_config(env_file: &Path, overrides: &ConfigOverrides) -> Result<SeedConfig> {
    let env = read_env_file(env_file).unwrap_or_else(|e| {
        println!("Warning: {e}");
        EnvMap::default()
    });
    Ok(SeedConfig::from_env_map(&env, overrides, env_file)?)
}

fn print_outcome(outcome: &UpsertOutcome<'_>) {
    let id = outcome.question.id;
    match &outcome.result {
        Ok(()) => println!("Upserted question {id}"),
        Err(e) => {
            println!("Error upserting question {id}: {e}");
            if let Some(body) = e.body() {
                println!("{body}");
            }
        }
    }
}

/// Formats one sample row as a numbered two-line entry.
pub fn format_summary(position: usize, row: &QuestionSummary) -> String {
    let text = match row.question_text.as_deref() {
        Some(text) if !text.is_empty() => preview(text, TEXT_PREVIEW_CHARS),
        _ => "EMPTY".to_string(),
    };
    format!(
        "{position}. [{}] [{}] {}\n   Text: {text}",
        row.category.as_deref().unwrap_or("-"),
        row.difficulty_label(),
        row.company.as_deref().unwrap_or("No company"),
    )
}

fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short", 80), "short");
        assert_eq!(preview("héllo wörld", 5), "héllo...");
        assert_eq!(preview("exact", 5), "exact");
    }

    #[test]
    fn summary_falls_back_for_missing_fields() {
        let row = QuestionSummary {
            id: "x".into(),
            question_text: None,
            category: Some("strategy".into()),
            difficulty: None,
            company: None,
        };

        assert_eq!(
            format_summary(3, &row),
            "3. [strategy] [-] No company\n   Text: EMPTY"
        );
    }

    #[test]
    fn cli_defaults_to_seed_with_dot_env() {
        let cli = Cli::parse_from(["qseed"]);

        assert!(cli.command.is_none());
        assert_eq!(cli.env_file, PathBuf::from(".env"));
    }
}
