//! # Question Record Serialization Tests

use anyhow::Result;
use qseed::{
    load_questions, seed_questions, Category, Difficulty, PatternType, Rubric, SeedQuestion,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_builtin_records_round_trip() -> Result<()> {
    let questions = seed_questions();

    let encoded = serde_json::to_string(&questions)?;
    let decoded: Vec<SeedQuestion> = serde_json::from_str(&encoded)?;

    assert_eq!(decoded, questions);
    Ok(())
}

#[test]
fn test_builtin_records_have_unique_ids_in_fixed_order() {
    let questions = seed_questions();
    let ids: Vec<String> = questions.iter().map(|q| q.id.to_string()).collect();

    assert_eq!(ids.len(), 5);
    assert_eq!(ids[0], "c9225726-1736-4076-963d-4724641cb980");
    assert_eq!(ids[4], "1c33c200-8430-466d-961f-1335cb992383");
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
}

#[test]
fn test_every_builtin_mcq_has_exactly_one_correct_option() {
    for question in seed_questions() {
        let mcq = question.mcq_version.expect("built-in records carry an MCQ drill");
        assert!(mcq.enabled);
        for sub in &mcq.sub_questions {
            let correct = sub.options.iter().filter(|o| o.correct).count();
            assert_eq!(correct, 1, "'{}' in {}", sub.prompt, question.id);
        }
    }
}

#[test]
fn test_wire_format_matches_table_columns() -> Result<()> {
    let questions = seed_questions();

    let value = serde_json::to_value(&questions[0])?;

    assert_eq!(value["id"], "c9225726-1736-4076-963d-4724641cb980");
    assert_eq!(value["category"], "ab_testing");
    assert_eq!(value["difficulty"], "intermediate");
    assert_eq!(value["interview_type"], "in_person");
    assert_eq!(value["pattern_type"], "metrics_for_x");
    assert_eq!(value["acceptance_rate"], 65);
    assert_eq!(value["rubric"]["clarification"][1], "Identified target users");
    assert_eq!(value["mcq_version"]["sub_questions"][0]["options"][0]["correct"], true);
    assert_eq!(
        value["mcq_version"]["sub_questions"][1]["difficulty"],
        "intermediate"
    );
    Ok(())
}

#[test]
fn test_absent_optional_fields_are_omitted() -> Result<()> {
    let questions = seed_questions();
    let slack = &questions[1];
    assert_eq!(slack.acceptance_rate, None);

    let value = serde_json::to_value(slack)?;

    let object = value.as_object().expect("record serializes to an object");
    assert!(!object.contains_key("acceptance_rate"));
    assert!(object.contains_key("mcq_version"));
    Ok(())
}

#[test]
fn test_minimal_record_deserializes_with_defaults() -> Result<()> {
    let raw = json!({
        "id": "00000000-0000-4000-8000-000000000001",
        "question_text": "Design a fridge for the blind.",
        "category": "product_sense",
        "difficulty": "advanced"
    });

    let question: SeedQuestion = serde_json::from_value(raw)?;

    assert_eq!(question.category, Category::ProductSense);
    assert!(question.rubric.is_none());
    assert!(question.extra.is_empty());
    assert!(question.mcq_version.is_none());
    assert!(question.pattern_type.is_none());
    Ok(())
}

#[test]
fn test_unknown_category_is_rejected() {
    let raw = json!({
        "id": "00000000-0000-4000-8000-000000000002",
        "question_text": "?",
        "category": "astrology",
        "difficulty": "beginner"
    });

    assert!(serde_json::from_value::<SeedQuestion>(raw).is_err());
}

#[test]
fn test_rubric_serializes_dimensions_in_sorted_order() -> Result<()> {
    let rubric = Rubric::new()
        .dimension("prioritization", ["b"])
        .dimension("clarification", ["a"]);

    let encoded = serde_json::to_string(&rubric)?;

    assert_eq!(encoded, r#"{"clarification":["a"],"prioritization":["b"]}"#);
    assert_eq!(rubric.dimensions().collect::<Vec<_>>(), ["clarification", "prioritization"]);
    Ok(())
}

#[test]
fn test_pattern_type_tags() -> Result<()> {
    assert_eq!(serde_json::to_value(PatternType::DesignXForY)?, json!("design_x_for_y"));
    assert_eq!(serde_json::to_value(PatternType::BehavioralStar)?, json!("behavioral_star"));
    Ok(())
}

#[test]
fn test_load_questions_reads_a_json_array() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("records.json");
    fs::write(&path, serde_json::to_string_pretty(&seed_questions())?)?;

    let loaded = load_questions(&path)?;

    assert_eq!(loaded, seed_questions());
    Ok(())
}

#[test]
fn test_load_questions_rejects_non_array() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("records.json");
    fs::write(&path, serde_json::to_string(&Value::Null)?)?;

    assert!(load_questions(&path).is_err());
    Ok(())
}

#[test]
fn test_fractional_acceptance_rate_is_kept() -> Result<()> {
    let raw = json!({
        "id": "00000000-0000-4000-8000-000000000003",
        "question_text": "Estimate the number of piano tuners in Chicago.",
        "category": "estimation",
        "difficulty": "beginner",
        "acceptance_rate": 72.5
    });

    let question: SeedQuestion = serde_json::from_value(raw)?;

    assert_eq!(
        question.acceptance_rate.as_ref().and_then(|rate| rate.as_f64()),
        Some(72.5)
    );
    assert_eq!(serde_json::to_value(&question)?["acceptance_rate"], json!(72.5));
    Ok(())
}

#[test]
fn test_whole_acceptance_rate_stays_an_integer() -> Result<()> {
    let questions = seed_questions();
    let body = serde_json::to_value(&questions[0])?;

    assert!(body["acceptance_rate"].is_u64(), "{body}");
    assert_eq!(body["acceptance_rate"].to_string(), "65");
    Ok(())
}

#[test]
fn test_numeric_difficulty_levels_are_accepted() -> Result<()> {
    let raw = json!({
        "id": "00000000-0000-4000-8000-000000000004",
        "question_text": "What is a North Star metric?",
        "category": "execution",
        "difficulty": 3,
        "mcq_version": {
            "enabled": true,
            "sub_questions": [{
                "prompt": "Pick one.",
                "options": [{ "text": "DAU", "correct": true, "explanation": "Core usage." }],
                "difficulty": 1
            }]
        }
    });

    let question: SeedQuestion = serde_json::from_value(raw.clone())?;

    assert_eq!(question.difficulty, Difficulty::Level(3));
    let mcq = question.mcq_version.as_ref().expect("mcq_version is present");
    assert_eq!(mcq.sub_questions[0].difficulty, Difficulty::Level(1));
    assert_eq!(Difficulty::Level(3).to_string(), "3");
    assert_eq!(serde_json::to_value(&question)?, raw);
    Ok(())
}

#[test]
fn test_unmodelled_columns_survive_and_missing_rubric_stays_absent() -> Result<()> {
    let raw = json!({
        "id": "00000000-0000-4000-8000-000000000005",
        "question_text": "q",
        "category": "strategy",
        "difficulty": "advanced",
        "xp_reward": 20,
        "type": "text",
        "lesson_id": "lesson-7",
        "framework_name": "SWOT"
    });

    let question: SeedQuestion = serde_json::from_value(raw.clone())?;
    let body = serde_json::to_value(&question)?;

    assert_eq!(question.extra.len(), 4);
    assert_eq!(body, raw);
    assert!(body.get("rubric").is_none());
    Ok(())
}

#[test]
fn test_records_file_rows_reach_the_body_unchanged() -> Result<()> {
    let rows = json!([{
        "id": "00000000-0000-4000-8000-000000000006",
        "question_text": "Should Spotify enter podcasts?",
        "category": "strategy",
        "difficulty": 4,
        "acceptance_rate": 41.25,
        "xp_reward": 15,
        "related_question_ids": ["00000000-0000-4000-8000-000000000005"]
    }]);
    let dir = tempdir()?;
    let path = dir.path().join("records.json");
    fs::write(&path, rows.to_string())?;

    let loaded = load_questions(&path)?;

    assert_eq!(serde_json::to_value(&loaded)?, rows);
    Ok(())
}
