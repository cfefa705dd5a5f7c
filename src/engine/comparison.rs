// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Running several updaters on the same input and checking that they agree.
//!
//! Sequential and partitioned updates must be bit-identical. A disagreement is
//! always a defect in partitioning or in the exchange protocol, so it is
//! reported as [`ExecutionError::ResultMismatch`] rather than as a result.

use serde::Serialize;
use std::time::Duration;

use crate::automaton::Tape;
use crate::errors::ExecutionError;
use crate::observability::messages::engine::{
    ResultsAgree, ResultsDiverge, UpdateCompleted, UpdateFailed, UpdateStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::TapeUpdater;
use crate::utils::timed;

/// Outcome of one updater's run.
#[derive(Debug, Clone, Serialize)]
pub struct UpdaterRun {
    pub name: &'static str,
    pub tape: Tape,
    #[serde(serialize_with = "serialize_millis", rename = "elapsed_ms")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_micros() as f64 / 1000.0)
}

/// Run every updater on its own copy of `tape`, in order, timing each.
///
/// Each result after the first is checked against the first; the first
/// disagreement stops the comparison.
pub async fn run_all(
    updaters: &[Box<dyn TapeUpdater>],
    tape: &Tape,
    iterations: usize,
) -> Result<Vec<UpdaterRun>, ExecutionError> {
    let mut runs: Vec<UpdaterRun> = Vec::with_capacity(updaters.len());

    for updater in updaters {
        let name = updater.name();
        let started = UpdateStarted {
            updater: name,
            tape_len: tape.len(),
            iterations,
        };
        started.log();

        let (result, elapsed) = timed(updater.update(tape.clone(), iterations)).await;
        let evolved = match result {
            Ok(evolved) => evolved,
            Err(e) => {
                UpdateFailed {
                    updater: name,
                    error: &e,
                }
                .log();
                return Err(e);
            }
        };

        UpdateCompleted {
            updater: name,
            tape_len: evolved.len(),
            iterations,
            duration: elapsed,
        }
        .log();

        if let Some(reference) = runs.first() {
            ensure_agreement(reference.name, &reference.tape, name, &evolved)?;
        }

        runs.push(UpdaterRun {
            name,
            tape: evolved,
            elapsed,
        });
    }

    Ok(runs)
}

/// Fail with `ResultMismatch` unless both tapes are identical.
pub fn ensure_agreement(
    reference_name: &str,
    reference: &Tape,
    candidate_name: &str,
    candidate: &Tape,
) -> Result<(), ExecutionError> {
    match reference.first_divergence(candidate) {
        None => {
            tracing::info!(
                "{}",
                ResultsAgree {
                    reference: reference_name,
                    candidate: candidate_name,
                    tape_len: reference.len(),
                }
            );
            Ok(())
        }
        Some(index) => {
            ResultsDiverge {
                reference: reference_name,
                candidate: candidate_name,
                index,
            }
            .log();
            Err(ExecutionError::ResultMismatch {
                reference: reference_name.to_string(),
                candidate: candidate_name.to_string(),
                index,
            })
        }
    }
}
