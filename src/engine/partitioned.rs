// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Partitioned parallel updater.
//!
//! The coordinator splits the tape into contiguous sections, wires one
//! [`SectionWorker`] per section into a ring of neighbor links, runs them all
//! concurrently and stitches their final sections back together.
//!
//! # Execution Flow
//!
//! 1. **Planning**: [`PartitionPlan`] validates the section count. An invalid
//!    count is reported before any worker exists.
//! 2. **Wiring**: [`build_ring`] creates two one-directional links per
//!    adjacent pair, including the wraparound pair (last, first).
//! 3. **Execution**: each worker copies its section out of the tape and runs
//!    on its own task; workers share nothing but their links.
//! 4. **Collation**: results are collected in completion order and written back
//!    at the offset the plan gives for their rank.
//!
//! # Failure Handling
//!
//! The first worker that fails cancels the shared token, which unblocks every
//! worker still waiting on a neighbor. Genuine failures are reported in
//! preference to the cancellations they cause.
//!
//! # Example
//! ```rust
//! use rule110::automaton::Tape;
//! use rule110::engine::partitioned::PartitionedUpdater;
//! use rule110::engine::sequential::SequentialUpdater;
//! use rule110::traits::TapeUpdater;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tape = Tape::with_padding(100, &[true, false]);
//!
//! let parallel = PartitionedUpdater::new(4).update(tape.clone(), 50).await?;
//! let sequential = SequentialUpdater::new().update(tape, 50).await?;
//!
//! assert_eq!(parallel, sequential);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::automaton::Tape;
use crate::engine::link::{build_ring, NeighborLinks};
use crate::engine::partition::PartitionPlan;
use crate::engine::worker::{FinishedSection, SectionWorker};
use crate::errors::ExecutionError;
use crate::observability::messages::engine::PartitionPlanned;
use crate::observability::messages::worker::WorkerStarted;
use crate::observability::messages::StructuredLog;
use crate::traits::TapeUpdater;

/// Evolves a tape with one concurrent worker per section.
#[derive(Debug, Clone)]
pub struct PartitionedUpdater {
    sections: usize,
    exchange_timeout: Option<Duration>,
}

impl PartitionedUpdater {
    /// Create an updater that splits tapes into `sections` sections.
    ///
    /// The count is checked against each tape when it is updated.
    pub fn new(sections: usize) -> Self {
        Self {
            sections,
            exchange_timeout: None,
        }
    }

    /// Create an updater with one section per available CPU core.
    pub fn with_available_parallelism() -> Self {
        let sections = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self::new(sections)
    }

    /// Bound how long a worker waits for each neighbor value.
    pub fn with_exchange_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.exchange_timeout = timeout;
        self
    }

    pub fn sections(&self) -> usize {
        self.sections
    }

    pub fn exchange_timeout(&self) -> Option<Duration> {
        self.exchange_timeout
    }

    /// Evolve `tape` by `iterations` steps across the configured sections.
    pub async fn evolve(&self, tape: Tape, iterations: usize) -> Result<Tape, ExecutionError> {
        let plan = PartitionPlan::new(tape.len(), self.sections)?;
        PartitionPlanned {
            sections: plan.section_count(),
            tape_len: plan.tape_len(),
            smallest: plan.smallest_section(),
            largest: plan.largest_section(),
        }
        .log();

        let cancellation_token = CancellationToken::new();
        let mut workers = JoinSet::new();
        for (bounds, links) in plan.iter().zip(build_ring(plan.section_count())) {
            let started = WorkerStarted {
                rank: bounds.rank,
                start: bounds.start,
                end: bounds.end,
                iterations,
            };
            started.log();

            let worker = SectionWorker::new(
                bounds.rank,
                tape.0[bounds.range()].to_vec(),
                links,
                iterations,
                self.exchange_timeout,
                cancellation_token.clone(),
            );
            workers.spawn(worker.run().instrument(started.span("section_worker")));
        }

        let finished = Self::collect(&mut workers, plan.section_count(), &cancellation_token).await?;
        Self::reassemble(tape, &plan, finished)
    }

    /// Wait for every worker, indexing results by rank.
    ///
    /// Links are kept alive until all workers are done so that a worker's last
    /// sends never fail because its neighbor already returned.
    async fn collect(
        workers: &mut JoinSet<Result<FinishedSection, ExecutionError>>,
        sections: usize,
        cancellation_token: &CancellationToken,
    ) -> Result<Vec<Vec<bool>>, ExecutionError> {
        let mut by_rank: Vec<Option<Vec<bool>>> = vec![None; sections];
        let mut retained_links: Vec<NeighborLinks> = Vec::with_capacity(sections);
        let mut worker_error = None;
        let mut cancellations = Vec::new();

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Ok(finished)) => {
                    let slot = by_rank.get_mut(finished.rank).ok_or_else(|| {
                        ExecutionError::InternalError {
                            message: format!("Worker reported unknown rank {}", finished.rank),
                        }
                    })?;
                    *slot = Some(finished.cells);
                    retained_links.push(finished.links);
                }
                Ok(Err(e)) => {
                    cancellation_token.cancel();
                    if e.is_cancellation() {
                        cancellations.push(e);
                    } else if worker_error.is_none() {
                        worker_error = Some(e);
                    }
                }
                Err(join_error) => {
                    cancellation_token.cancel();
                    if worker_error.is_none() {
                        worker_error = Some(ExecutionError::WorkerFailed {
                            message: join_error.to_string(),
                        });
                    }
                }
            }
        }
        drop(retained_links);

        if let Some(error) = worker_error.or_else(|| cancellations.into_iter().next()) {
            return Err(error);
        }

        by_rank
            .into_iter()
            .enumerate()
            .map(|(rank, cells)| {
                cells.ok_or_else(|| ExecutionError::InternalError {
                    message: format!("No result from worker {}", rank),
                })
            })
            .collect()
    }

    /// Write each rank's section back at its planned offset.
    fn reassemble(
        tape: Tape,
        plan: &PartitionPlan,
        sections: Vec<Vec<bool>>,
    ) -> Result<Tape, ExecutionError> {
        let mut cells = tape.0;
        for (bounds, section) in plan.iter().zip(sections) {
            if section.len() != bounds.len() {
                return Err(ExecutionError::InternalError {
                    message: format!(
                        "Worker {} returned {} cells for a section of {}",
                        bounds.rank,
                        section.len(),
                        bounds.len()
                    ),
                });
            }
            cells[bounds.range()].copy_from_slice(&section);
        }
        Ok(Tape(cells))
    }
}

#[async_trait]
impl TapeUpdater for PartitionedUpdater {
    async fn update(&self, tape: Tape, iterations: usize) -> Result<Tape, ExecutionError> {
        self.evolve(tape, iterations).await
    }

    fn name(&self) -> &'static str {
        "partitioned"
    }
}
