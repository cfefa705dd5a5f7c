// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for updater runs.
//!
//! This module contains message types for logging events related to:
//! * Updater lifecycle (start, completion, failure)
//! * Partition planning for the parallel updater
//! * Agreement checks between updaters

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An updater started evolving a tape.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use rule110::observability::messages::engine::UpdateStarted;
///
/// let msg = UpdateStarted {
///     updater: "partitioned",
///     tape_len: 1002,
///     iterations: 10_000,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct UpdateStarted<'a> {
    pub updater: &'a str,
    pub tape_len: usize,
    pub iterations: usize,
}

impl Display for UpdateStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting {} update: {} cells, {} iterations",
            self.updater, self.tape_len, self.iterations
        )
    }
}

impl StructuredLog for UpdateStarted<'_> {
    fn log(&self) {
        tracing::info!(
            updater = self.updater,
            tape_len = self.tape_len,
            iterations = self.iterations,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "update",
            span_name = name,
            updater = self.updater,
            tape_len = self.tape_len,
            iterations = self.iterations,
        )
    }
}

/// An updater finished.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use rule110::observability::messages::engine::UpdateCompleted;
/// use std::time::Duration;
///
/// let msg = UpdateCompleted {
///     updater: "sequential",
///     tape_len: 1002,
///     iterations: 10_000,
///     duration: Duration::from_millis(250),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct UpdateCompleted<'a> {
    pub updater: &'a str,
    pub tape_len: usize,
    pub iterations: usize,
    pub duration: std::time::Duration,
}

impl Display for UpdateCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} update completed: {} cells, {} iterations in {:?}",
            self.updater, self.tape_len, self.iterations, self.duration
        )
    }
}

impl StructuredLog for UpdateCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            updater = self.updater,
            tape_len = self.tape_len,
            iterations = self.iterations,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "update_completed",
            span_name = name,
            updater = self.updater,
            duration = ?self.duration,
        )
    }
}

/// An updater failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UpdateFailed<'a> {
    pub updater: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for UpdateFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} update failed: {}", self.updater, self.error)
    }
}

impl StructuredLog for UpdateFailed<'_> {
    fn log(&self) {
        tracing::error!(
            updater = self.updater,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "update_failed",
            span_name = name,
            updater = self.updater,
            error = %self.error,
        )
    }
}

/// The tape was split into sections for the parallel updater.
///
/// # Log Level
/// `debug!` - Planning detail
///
/// # Example
/// ```
/// use rule110::observability::messages::engine::PartitionPlanned;
///
/// let msg = PartitionPlanned {
///     sections: 4,
///     tape_len: 1002,
///     smallest: 250,
///     largest: 251,
/// };
///
/// assert_eq!(msg.to_string(), "Split 1002 cells into 4 sections of 250..=251 cells");
/// ```
pub struct PartitionPlanned {
    pub sections: usize,
    pub tape_len: usize,
    pub smallest: usize,
    pub largest: usize,
}

impl Display for PartitionPlanned {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Split {} cells into {} sections of {}..={} cells",
            self.tape_len, self.sections, self.smallest, self.largest
        )
    }
}

impl StructuredLog for PartitionPlanned {
    fn log(&self) {
        tracing::debug!(
            sections = self.sections,
            tape_len = self.tape_len,
            smallest = self.smallest,
            largest = self.largest,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "partition",
            span_name = name,
            sections = self.sections,
            tape_len = self.tape_len,
        )
    }
}

/// Two updaters produced the same tape.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ResultsAgree<'a> {
    pub reference: &'a str,
    pub candidate: &'a str,
    pub tape_len: usize,
}

impl Display for ResultsAgree<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} and {} agree on all {} cells",
            self.reference, self.candidate, self.tape_len
        )
    }
}

/// Two updaters produced different tapes.
///
/// # Log Level
/// `error!` - A defect in partitioning or the exchange protocol
///
/// # Example
/// ```
/// use rule110::observability::messages::engine::ResultsDiverge;
///
/// let msg = ResultsDiverge {
///     reference: "sequential",
///     candidate: "partitioned",
///     index: 250,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ResultsDiverge<'a> {
    pub reference: &'a str,
    pub candidate: &'a str,
    pub index: usize,
}

impl Display for ResultsDiverge<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} diverges from {} at cell {}",
            self.candidate, self.reference, self.index
        )
    }
}

impl StructuredLog for ResultsDiverge<'_> {
    fn log(&self) {
        tracing::error!(
            reference = self.reference,
            candidate = self.candidate,
            index = self.index,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "results_diverge",
            span_name = name,
            reference = self.reference,
            candidate = self.candidate,
            index = self.index,
        )
    }
}
