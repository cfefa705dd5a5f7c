// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Section worker: advances one contiguous slice of the tape.
//!
//! ## Exchange protocol
//!
//! Before the first iteration a worker sends its current leftmost cell left and
//! its rightmost cell right, so each neighbor already has the value it needs for
//! iteration one. Then, every iteration:
//!
//! 1. receive the left neighbor's rightmost cell, compute the new leftmost cell,
//!    send it left;
//! 2. compute the interior with a rolling window, exactly like the sequential
//!    sweep;
//! 3. receive the right neighbor's leftmost cell, compute the new rightmost cell,
//!    send it right.
//!
//! A worker can only finish iteration `t` once both neighbors have finished
//! the matching boundary of iteration `t - 1`, and it never reads a value from
//! iteration `t + 1`, so boundary cells always agree with a sequential run.
//!
//! A section of one cell is both leftmost and rightmost, so it receives from
//! both sides before computing and then sends to both.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::automaton::rule_110;
use crate::engine::link::{NeighborLinks, Side};
use crate::errors::{ExecutionError, LinkFault};
use crate::observability::messages::worker::{ExchangeFailed, WorkerCancelled, WorkerFinished};
use crate::observability::messages::StructuredLog;

/// A worker's terminal result.
///
/// The links travel back to the coordinator with the cells, so no neighbor
/// sees a closed link while it is still sending its final boundary values.
#[derive(Debug)]
pub struct FinishedSection {
    pub rank: usize,
    pub cells: Vec<bool>,
    pub(crate) links: NeighborLinks,
}

/// Channel ends plus the rules for waiting on them.
struct Exchange {
    rank: usize,
    links: NeighborLinks,
    timeout: Option<Duration>,
    cancellation_token: CancellationToken,
}

impl Exchange {
    async fn receive(&mut self, side: Side, iteration: usize) -> Result<bool, ExecutionError> {
        let receiver = match side {
            Side::Left => &mut self.links.from_left,
            Side::Right => &mut self.links.from_right,
        };

        let received = tokio::select! {
            _ = self.cancellation_token.cancelled() => {
                tracing::debug!("{}", WorkerCancelled { rank: self.rank, iteration });
                return Err(ExecutionError::Cancelled { rank: self.rank });
            }
            received = receive_within(receiver, self.timeout) => received,
        };

        match received {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(self.violation(side, iteration, LinkFault::Closed)),
            Err(after) => Err(self.violation(side, iteration, LinkFault::TimedOut(after))),
        }
    }

    async fn send(&self, side: Side, iteration: usize, value: bool) -> Result<(), ExecutionError> {
        let sender = match side {
            Side::Left => &self.links.to_left,
            Side::Right => &self.links.to_right,
        };

        sender
            .send(value)
            .await
            .map_err(|_| self.violation(side, iteration, LinkFault::Closed))
    }

    fn violation(&self, side: Side, iteration: usize, fault: LinkFault) -> ExecutionError {
        ExchangeFailed {
            rank: self.rank,
            side,
            iteration,
            fault,
        }
        .log();
        ExecutionError::ProtocolViolation {
            rank: self.rank,
            side,
            iteration,
            fault,
        }
    }
}

async fn receive_within(
    receiver: &mut mpsc::Receiver<bool>,
    timeout: Option<Duration>,
) -> Result<Option<bool>, Duration> {
    match timeout {
        Some(after) => tokio::time::timeout(after, receiver.recv())
            .await
            .map_err(|_| after),
        None => Ok(receiver.recv().await),
    }
}

/// Owns one section for the duration of a run.
pub struct SectionWorker {
    cells: Vec<bool>,
    iterations: usize,
    exchange: Exchange,
}

impl SectionWorker {
    /// Create a worker for a non-empty section.
    ///
    /// - `timeout`: how long to wait for each neighbor value, `None` waits forever
    /// - `cancellation_token`: cancelled by the coordinator when any worker fails
    pub fn new(
        rank: usize,
        cells: Vec<bool>,
        links: NeighborLinks,
        iterations: usize,
        timeout: Option<Duration>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            cells,
            iterations,
            exchange: Exchange {
                rank,
                links,
                timeout,
                cancellation_token,
            },
        }
    }

    pub fn rank(&self) -> usize {
        self.exchange.rank
    }

    /// Run every iteration, then hand back the section.
    pub async fn run(mut self) -> Result<FinishedSection, ExecutionError> {
        let len = self.cells.len();
        if len == 0 {
            return Err(ExecutionError::InternalError {
                message: format!("Worker {} was given an empty section", self.rank()),
            });
        }
        let last = len - 1;

        // Prime the neighbors' first iteration.
        self.exchange.send(Side::Left, 0, self.cells[0]).await?;
        self.exchange.send(Side::Right, 0, self.cells[last]).await?;

        for iteration in 1..=self.iterations {
            if len == 1 {
                let left = self.exchange.receive(Side::Left, iteration).await?;
                let right = self.exchange.receive(Side::Right, iteration).await?;
                self.cells[0] = rule_110(left, self.cells[0], right);
                self.exchange.send(Side::Left, iteration, self.cells[0]).await?;
                self.exchange.send(Side::Right, iteration, self.cells[0]).await?;
                continue;
            }

            let left = self.exchange.receive(Side::Left, iteration).await?;
            let (mut a, mut b, mut c) = (left, self.cells[0], self.cells[1]);
            self.cells[0] = rule_110(a, b, c);
            self.exchange.send(Side::Left, iteration, self.cells[0]).await?;

            for i in 1..last {
                (a, b, c) = (b, c, self.cells[i + 1]);
                self.cells[i] = rule_110(a, b, c);
            }

            let right = self.exchange.receive(Side::Right, iteration).await?;
            (a, b, c) = (b, c, right);
            self.cells[last] = rule_110(a, b, c);
            self.exchange.send(Side::Right, iteration, self.cells[last]).await?;
        }

        tracing::debug!(
            "{}",
            WorkerFinished {
                rank: self.rank(),
                iterations: self.iterations,
            }
        );

        Ok(FinishedSection {
            rank: self.exchange.rank,
            cells: self.cells,
            links: self.exchange.links,
        })
    }
}
