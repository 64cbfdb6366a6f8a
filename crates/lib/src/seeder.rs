//! # Batch Upsert
//!
//! Sends seed records one at a time, in order, reporting each result as it
//! arrives. A failed record is recorded and the loop moves on.

use crate::client::RestClient;
use crate::errors::SeedError;
use crate::types::SeedQuestion;
use tracing::warn;
use uuid::Uuid;

/// The result of upserting a single record.
#[derive(Debug)]
pub struct UpsertOutcome<'a> {
    pub question: &'a SeedQuestion,
    pub result: Result<(), SeedError>,
}

/// A record that the server rejected or that never reached it.
#[derive(Debug)]
pub struct FailedUpsert {
    pub id: Uuid,
    pub error: SeedError,
}

/// Totals for one run over the record list.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: Vec<FailedUpsert>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Upserts every question in `questions`, strictly sequentially.
///
/// `on_outcome` is called once per record right after its request completes.
pub async fn upsert_all<F>(
    client: &RestClient,
    questions: &[SeedQuestion],
    mut on_outcome: F,
) -> BatchReport
where
    F: FnMut(&UpsertOutcome<'_>),
{
    let mut report = BatchReport::default();

    for question in questions {
        let result = client.upsert_question(question).await;
        report.attempted += 1;

        let outcome = UpsertOutcome { question, result };
        on_outcome(&outcome);

        match outcome.result {
            Ok(()) => report.succeeded += 1,
            Err(error) => {
                warn!("Upsert failed for question {}: {}", question.id, error);
                report.failed.push(FailedUpsert {
                    id: question.id,
                    error,
                });
            }
        }
    }

    report
}
