//! # `qseed`: Interview Question Seeder
//!
//! Core library behind the `qseed` CLI. It loads Supabase credentials from a
//! `.env`-style file and upserts interview-question records into the
//! `questions` table through PostgREST.

pub mod client;
pub mod config;
pub mod constants;
pub mod env_file;
pub mod errors;
pub mod questions;
pub mod seeder;
pub mod types;

pub use client::RestClient;
pub use config::{ConfigOverrides, SeedConfig};
pub use env_file::{parse_env, read_env_file, EnvMap};
pub use errors::SeedError;
pub use questions::{load_questions, seed_questions};
pub use seeder::{upsert_all, BatchReport, FailedUpsert, UpsertOutcome};
pub use types::{
    Category, Difficulty, InterviewType, McqOption, McqSubQuestion, McqVersion, PatternType,
    QuestionListing, QuestionSummary, Rubric, SeedQuestion,
};
