// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for section workers.
//!
//! This module contains message types for logging events related to:
//! * Worker startup and the section it owns
//! * Worker completion
//! * Boundary exchange failures and cancellation

use crate::engine::Side;
use crate::errors::LinkFault;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A worker took ownership of its section.
///
/// # Log Level
/// `debug!` - Per-worker detail
///
/// # Example
/// ```
/// use rule110::observability::messages::worker::WorkerStarted;
///
/// let msg = WorkerStarted {
///     rank: 1,
///     start: 251,
///     end: 502,
///     iterations: 100,
/// };
///
/// assert_eq!(msg.to_string(), "Worker 1 owns cells 251..502 for 100 iterations");
/// ```
pub struct WorkerStarted {
    pub rank: usize,
    pub start: usize,
    pub end: usize,
    pub iterations: usize,
}

impl Display for WorkerStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker {} owns cells {}..{} for {} iterations",
            self.rank, self.start, self.end, self.iterations
        )
    }
}

impl StructuredLog for WorkerStarted {
    fn log(&self) {
        tracing::debug!(
            rank = self.rank,
            start = self.start,
            end = self.end,
            iterations = self.iterations,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "section_worker",
            span_name = name,
            rank = self.rank,
            start = self.start,
            end = self.end,
        )
    }
}

/// A worker completed every iteration.
///
/// # Log Level
/// `debug!` - Per-worker detail
pub struct WorkerFinished {
    pub rank: usize,
    pub iterations: usize,
}

impl Display for WorkerFinished {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker {} finished after {} iterations",
            self.rank, self.iterations
        )
    }
}

/// A worker could not exchange a boundary value.
///
/// # Log Level
/// `error!` - Fatal to the whole run
///
/// # Example
/// ```
/// use rule110::engine::Side;
/// use rule110::errors::LinkFault;
/// use rule110::observability::messages::worker::ExchangeFailed;
///
/// let msg = ExchangeFailed {
///     rank: 3,
///     side: Side::Right,
///     iteration: 12,
///     fault: LinkFault::Closed,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ExchangeFailed {
    pub rank: usize,
    pub side: Side,
    pub iteration: usize,
    pub fault: LinkFault,
}

impl Display for ExchangeFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker {} failed to exchange with its {} neighbor in iteration {}: {}",
            self.rank, self.side, self.iteration, self.fault
        )
    }
}

impl StructuredLog for ExchangeFailed {
    fn log(&self) {
        tracing::error!(
            rank = self.rank,
            side = %self.side,
            iteration = self.iteration,
            fault = %self.fault,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "exchange_failed",
            span_name = name,
            rank = self.rank,
            side = %self.side,
            iteration = self.iteration,
        )
    }
}

/// A worker stopped because the run was cancelled.
///
/// # Log Level
/// `debug!` - Expected consequence of another failure
pub struct WorkerCancelled {
    pub rank: usize,
    pub iteration: usize,
}

impl Display for WorkerCancelled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker {} cancelled in iteration {}",
            self.rank, self.iteration
        )
    }
}
