//! # Question Records
//!
//! The wire shape of a row in the `questions` table. Field names and tag values
//! match the table's columns exactly, so these types are serialized as-is for
//! the PostgREST request body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ProductSense,
    Execution,
    Strategy,
    Behavioral,
    Technical,
    Estimation,
    Pricing,
    AbTesting,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    /// Numeric 1-5 level used by older rows.
    #[serde(untagged)]
    Level(u8),
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => f.write_str("beginner"),
            Difficulty::Intermediate => f.write_str("intermediate"),
            Difficulty::Advanced => f.write_str("advanced"),
            Difficulty::Level(level) => write!(f, "{level}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Phone,
    Video,
    InPerson,
    PhoneScreen,
    Onsite,
    VideoInterview,
}

/// The question archetype used to group practice drills.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    DesignXForY,
    ImproveX,
    MetricsForX,
    InvestigateDrop,
    Strategy,
    BehavioralStar,
}

/// A scoring guide: named dimensions each listing the criteria an answer should meet.
///
/// Dimensions are kept sorted by name so the serialized body is deterministic.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Rubric(BTreeMap<String, Vec<String>>);

impl Rubric {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a dimension.
    pub fn dimension<I, S>(mut self, name: &str, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(name.to_string(), criteria.into_iter().map(Into::into).collect());
        self
    }

    pub fn criteria(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct McqOption {
    pub text: String,
    pub correct: bool,
    pub explanation: String,
}

impl McqOption {
    pub fn new(text: &str, correct: bool, explanation: &str) -> Self {
        Self {
            text: text.to_string(),
            correct,
            explanation: explanation.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct McqSubQuestion {
    pub prompt: String,
    pub options: Vec<McqOption>,
    pub difficulty: Difficulty,
}

/// The multiple-choice drill attached to an open-ended question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct McqVersion {
    pub enabled: bool,
    pub sub_questions: Vec<McqSubQuestion>,
}

/// One interview question destined for one row of the `questions` table.
///
/// `id` is the upsert key: re-sending a record with the same id updates the row
/// in place when the request carries `Prefer: resolution=merge-duplicates`.
///
/// Absent optional columns are left out of the body so an upsert never blanks
/// a stored value. Columns not modelled here are kept in `extra` and sent back
/// unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeedQuestion {
    pub id: Uuid,
    pub question_text: String,
    pub category: Category,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_type: Option<InterviewType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expert_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Rubric>,
    /// Share of candidates answering well, as a percentage. Kept as a JSON
    /// number so `65` stays an integer and `72.5` keeps its fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_rate: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<PatternType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcq_version: Option<McqVersion>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A row returned by the `check` listing.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionSummary {
    pub id: String,
    pub question_text: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub company: Option<String>,
}

impl QuestionSummary {
    /// Difficulty rendered for display, `-` when the row has none.
    pub fn difficulty_label(&self) -> String {
        self.difficulty
            .map_or_else(|| "-".to_string(), |difficulty| difficulty.to_string())
    }
}

/// A page of [`QuestionSummary`] rows plus the table's total row count, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub total: Option<u64>,
    pub rows: Vec<QuestionSummary>,
}
