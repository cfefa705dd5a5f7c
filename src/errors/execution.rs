// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while evolving a tape.
//!
//! The sequential sweep cannot fail. Everything here comes from the partitioned
//! path (planning, neighbor exchange, worker supervision) or from comparing the
//! output of two updaters.

use crate::engine::Side;
use crate::errors::PartitionError;
use std::time::Duration;
use thiserror::Error;

/// Why a neighbor exchange could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFault {
    /// The other end of the link was dropped, usually because that worker failed.
    Closed,
    /// No value arrived within the configured exchange timeout.
    TimedOut(Duration),
}

impl std::fmt::Display for LinkFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkFault::Closed => write!(f, "link closed"),
            LinkFault::TimedOut(after) => write!(f, "no value within {:?}", after),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    /// The requested section count does not fit the tape.
    #[error("Invalid partition: {0}")]
    InvalidPartition(#[from] PartitionError),

    /// A worker could not exchange a boundary value with a neighbor.
    #[error("Worker {rank} lost its {side} neighbor during iteration {iteration}: {fault}")]
    ProtocolViolation {
        rank: usize,
        side: Side,
        iteration: usize,
        fault: LinkFault,
    },

    /// Two updaters produced different tapes for the same input.
    #[error("'{candidate}' disagrees with '{reference}' starting at cell {index}")]
    ResultMismatch {
        reference: String,
        candidate: String,
        index: usize,
    },

    /// The worker stopped because another worker failed first.
    #[error("Worker {rank} cancelled after a failure elsewhere in the ring")]
    Cancelled { rank: usize },

    /// A worker task panicked or could not be joined.
    #[error("Worker task failed: {message}")]
    WorkerFailed { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl ExecutionError {
    /// True for errors that are a consequence of another worker's failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ExecutionError::Cancelled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_violation_message() {
        let error = ExecutionError::ProtocolViolation {
            rank: 2,
            side: Side::Left,
            iteration: 7,
            fault: LinkFault::Closed,
        };
        assert_eq!(
            error.to_string(),
            "Worker 2 lost its left neighbor during iteration 7: link closed"
        );
    }

    #[test]
    fn test_partition_error_converts() {
        let error: ExecutionError = PartitionError::NoSections.into();
        assert!(matches!(
            error,
            ExecutionError::InvalidPartition(PartitionError::NoSections)
        ));
        assert!(!error.is_cancellation());
    }
}
