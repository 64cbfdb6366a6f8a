//! # Built-in Seed Questions
//!
//! The starter set of product-management interview questions, each paired with
//! an expert answer, a rubric and a multiple-choice drill. Ids are fixed so that
//! re-running the seeder updates these rows instead of duplicating them.

use crate::errors::SeedError;
use crate::types::{
    Category, Difficulty, InterviewType, McqOption, McqSubQuestion, McqVersion, PatternType,
    Rubric, SeedQuestion,
};
use serde_json::{Map, Number};
use std::fs;
use std::path::Path;
use uuid::uuid;

/// Returns the built-in seed records in upload order.
pub fn seed_questions() -> Vec<SeedQuestion> {
    vec![
        SeedQuestion {
            id: uuid!("c9225726-1736-4076-963d-4724641cb980"),
            question_text: "How do you measure success of the Hot Home feature in Redfin?".into(),
            category: Category::AbTesting,
            difficulty: Difficulty::Intermediate,
            company: Some("Redfin".into()),
            interview_type: Some(InterviewType::InPerson),
            expert_answer: Some(
                "Start by clarifying the goal of Hot Home feature. Then identify key user actions \
                 (views, saves, contacts). Choose metrics like engagement rate, conversion to \
                 contact, and time on listing. Set specific targets based on baseline data."
                    .into(),
            ),
            rubric: Some(
                Rubric::new()
                    .dimension(
                        "metrics",
                        [
                            "Defined engagement metrics",
                            "Included conversion metrics",
                            "Mentioned leading vs lagging indicators",
                        ],
                    )
                    .dimension(
                        "clarification",
                        ["Asked about Hot Home feature purpose", "Identified target users"],
                    )
                    .dimension(
                        "prioritization",
                        ["Prioritized metrics by importance", "Explained trade-offs"],
                    )
            ),
            acceptance_rate: Some(Number::from(65u32)),
            pattern_type: Some(PatternType::MetricsForX),
            mcq_version: Some(mcq(vec![
                sub_question(
                    "What type of metric is \"number of Hot Home views\"?",
                    Difficulty::Beginner,
                    vec![
                        McqOption::new(
                            "Leading indicator",
                            true,
                            "Views happen before conversions, making it a leading indicator of user interest.",
                        ),
                        McqOption::new(
                            "Lagging indicator",
                            false,
                            "Lagging indicators measure outcomes after the fact.",
                        ),
                        McqOption::new(
                            "Vanity metric",
                            false,
                            "While views alone could be vanity, in context they predict conversion.",
                        ),
                        McqOption::new(
                            "Counter metric",
                            false,
                            "Counter metrics track negative impacts.",
                        ),
                    ],
                ),
                sub_question(
                    "Which metric best measures Hot Home feature success?",
                    Difficulty::Intermediate,
                    vec![
                        McqOption::new(
                            "Total page views",
                            false,
                            "Too broad - doesn't show if Hot Home specifically drives value.",
                        ),
                        McqOption::new(
                            "Conversion rate from Hot Home view to agent contact",
                            true,
                            "Directly measures if the feature drives the desired action.",
                        ),
                        McqOption::new(
                            "Number of Hot Home badges shown",
                            false,
                            "This is an output metric, not a success metric.",
                        ),
                        McqOption::new(
                            "Average time on site",
                            false,
                            "Too general - doesn't isolate Hot Home impact.",
                        ),
                    ],
                ),
            ])),
            extra: Map::new(),
        },
        SeedQuestion {
            id: uuid!("ae288863-7183-4914-946b-4e1b563be81f"),
            question_text: "How do you improve Slack?".into(),
            category: Category::ProductSense,
            difficulty: Difficulty::Intermediate,
            company: Some("Dropbox".into()),
            interview_type: Some(InterviewType::Phone),
            expert_answer: Some(
                "First, clarify the goal - are we improving for specific users or overall? \
                 Identify target users (e.g., remote teams). Report their needs through user \
                 research. Prioritize the most impactful pain points. Brainstorm solutions, \
                 evaluate trade-offs, and recommend the top solution with clear success metrics."
                    .into(),
            ),
            rubric: Some(
                Rubric::new()
                    .dimension("metrics", ["Defined success metrics"])
                    .dimension(
                        "solutions",
                        ["Generated multiple ideas", "Evaluated trade-offs"],
                    )
                    .dimension(
                        "user_needs",
                        ["Identified specific user segments", "Listed concrete pain points"],
                    )
                    .dimension(
                        "clarification",
                        ["Asked clarifying questions", "Defined scope"],
                    )
            ),
            acceptance_rate: None,
            pattern_type: Some(PatternType::ImproveX),
            mcq_version: Some(mcq(vec![
                sub_question(
                    "What should you do FIRST when asked to improve Slack?",
                    Difficulty::Beginner,
                    vec![
                        McqOption::new(
                            "Brainstorm features",
                            false,
                            "Jumping to solutions without understanding the problem is premature.",
                        ),
                        McqOption::new(
                            "Ask clarifying questions",
                            true,
                            "Always clarify the problem space, target users, and goals first.",
                        ),
                        McqOption::new(
                            "Define success metrics",
                            false,
                            "Metrics come after understanding the problem.",
                        ),
                        McqOption::new(
                            "Analyze competitors",
                            false,
                            "While useful, clarification comes first.",
                        ),
                    ],
                ),
                sub_question(
                    "Which user segment should you focus on for Slack improvements?",
                    Difficulty::Intermediate,
                    vec![
                        McqOption::new(
                            "All users equally",
                            false,
                            "Too broad - different segments have different needs.",
                        ),
                        McqOption::new(
                            "The segment with the biggest pain point",
                            true,
                            "Prioritize based on impact and user needs.",
                        ),
                        McqOption::new(
                            "Enterprise users only",
                            false,
                            "May not align with business goals without clarification.",
                        ),
                        McqOption::new(
                            "New users",
                            false,
                            "Depends on the goal - retention vs acquisition.",
                        ),
                    ],
                ),
            ])),
            extra: Map::new(),
        },
        SeedQuestion {
            id: uuid!("242b58f8-a15d-4444-9642-1262dca7768e"),
            question_text: "How did you turn an adversary into a confidant?".into(),
            category: Category::Behavioral,
            difficulty: Difficulty::Intermediate,
            company: Some("Facebook".into()),
            interview_type: Some(InterviewType::InPerson),
            expert_answer: Some(
                "Describe a specific situation where you had conflict. Explain your task/goal. \
                 Detail the actions you took to build trust (active listening, finding common \
                 ground, delivering on promises). Share the positive result and what you learned."
                    .into(),
            ),
            rubric: Some(
                Rubric::new()
                    .dimension("metrics", ["Quantified the result", "Reflected on learnings"])
                    .dimension(
                        "solutions",
                        ["Described concrete actions", "Showed initiative"],
                    )
                    .dimension(
                        "user_needs",
                        ["Showed empathy", "Understood other person's perspective"],
                    )
                    .dimension(
                        "clarification",
                        ["Provided specific situation", "Explained context clearly"],
                    )
            ),
            acceptance_rate: None,
            pattern_type: Some(PatternType::BehavioralStar),
            mcq_version: Some(mcq(vec![sub_question(
                "In the STAR framework, what does the \"A\" stand for?",
                Difficulty::Beginner,
                vec![
                    McqOption::new(
                        "Analysis",
                        false,
                        "STAR is Situation, Task, Action, Result.",
                    ),
                    McqOption::new(
                        "Action",
                        true,
                        "Action describes what YOU specifically did.",
                    ),
                    McqOption::new(
                        "Achievement",
                        false,
                        "Achievement is part of Result.",
                    ),
                    McqOption::new(
                        "Approach",
                        false,
                        "While similar, the framework uses \"Action\".",
                    ),
                ],
            )])),
            extra: Map::new(),
        },
        SeedQuestion {
            id: uuid!("b2277028-090c-4394-9844-428612502621"),
            question_text: "What goals and success metrics would you set for buy & sell groups?"
                .into(),
            category: Category::Execution,
            difficulty: Difficulty::Intermediate,
            company: Some("Facebook".into()),
            interview_type: Some(InterviewType::Phone),
            expert_answer: Some(
                "Business goal: Increase marketplace activity. User goal: Easy buying/selling. \
                 Metrics: Active listings, transaction completion rate, repeat sellers, time to \
                 sale. Set SMART targets based on current baseline."
                    .into(),
            ),
            rubric: Some(
                Rubric::new()
                    .dimension(
                        "metrics",
                        [
                            "Listed relevant metrics",
                            "Included leading and lagging indicators",
                        ],
                    )
                    .dimension("clarification", ["Defined business and user goals"])
                    .dimension(
                        "prioritization",
                        ["Prioritized metrics", "Set realistic targets"],
                    )
            ),
            acceptance_rate: None,
            pattern_type: Some(PatternType::MetricsForX),
            mcq_version: Some(mcq(vec![sub_question(
                "Which is the most important metric for buy & sell groups?",
                Difficulty::Intermediate,
                vec![
                    McqOption::new(
                        "Number of group members",
                        false,
                        "Vanity metric - doesn't show actual value creation.",
                    ),
                    McqOption::new(
                        "Transaction completion rate",
                        true,
                        "Directly measures if the feature achieves its purpose.",
                    ),
                    McqOption::new(
                        "Number of posts",
                        false,
                        "Activity metric but doesn't show successful transactions.",
                    ),
                    McqOption::new(
                        "Page views",
                        false,
                        "Too broad and doesn't measure success.",
                    ),
                ],
            )])),
            extra: Map::new(),
        },
        SeedQuestion {
            id: uuid!("1c33c200-8430-466d-961f-1335cb992383"),
            question_text: "You are the PM of Facebook Lite, what goals would you set?".into(),
            category: Category::Execution,
            difficulty: Difficulty::Intermediate,
            company: Some("Facebook".into()),
            interview_type: Some(InterviewType::Phone),
            expert_answer: Some(
                "Facebook Lite targets emerging markets with limited connectivity. Goals: 1) \
                 Increase DAU in target markets, 2) Reduce data usage per session, 3) Improve app \
                 performance on low-end devices. Metrics: DAU growth rate, data consumption, app \
                 load time, crash rate."
                    .into(),
            ),
            rubric: Some(
                Rubric::new()
                    .dimension(
                        "metrics",
                        [
                            "Set specific, measurable goals",
                            "Aligned with user needs",
                        ],
                    )
                    .dimension(
                        "clarification",
                        ["Understood Facebook Lite's purpose", "Identified target users"],
                    )
                    .dimension("prioritization", ["Prioritized goals by impact"])
            ),
            acceptance_rate: None,
            pattern_type: Some(PatternType::MetricsForX),
            mcq_version: Some(mcq(vec![sub_question(
                "What is the primary target market for Facebook Lite?",
                Difficulty::Beginner,
                vec![
                    McqOption::new(
                        "US power users",
                        false,
                        "Lite is designed for emerging markets.",
                    ),
                    McqOption::new(
                        "Emerging markets with limited connectivity",
                        true,
                        "Lite optimizes for low bandwidth and low-end devices.",
                    ),
                    McqOption::new(
                        "Enterprise customers",
                        false,
                        "Facebook Lite is a consumer product.",
                    ),
                    McqOption::new(
                        "Developers",
                        false,
                        "Lite targets end users, not developers.",
                    ),
                ],
            )])),
            extra: Map::new(),
        },
    ]
}

/// Loads seed records from a JSON file holding an array of questions.
pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<SeedQuestion>, SeedError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SeedError::RecordsFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn mcq(sub_questions: Vec<McqSubQuestion>) -> McqVersion {
    McqVersion {
        enabled: true,
        sub_questions,
    }
}

fn sub_question(prompt: &str, difficulty: Difficulty, options: Vec<McqOption>) -> McqSubQuestion {
    McqSubQuestion {
        prompt: prompt.to_string(),
        options,
        difficulty,
    }
}
