// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-threaded, in-place Rule 110 sweep.
//!
//! Each iteration walks the tape once with a rolling `(a, b, c)` window. The
//! window always holds previous-iteration values, so the tape can be updated in
//! place without a second buffer: cell `i` is overwritten only after the window
//! has already captured it as the left neighbor of cell `i + 1`. The original
//! value of cell 0 is held aside because the last cell needs it as its right
//! neighbor.

use async_trait::async_trait;

use crate::automaton::{rule_110, Tape};
use crate::errors::ExecutionError;
use crate::traits::TapeUpdater;

/// Advance `cells` by `iterations` steps, treating it as cyclic.
///
/// # Example
/// ```
/// use rule110::engine::sequential::evolve_in_place;
///
/// let mut cells = [false, false, false, false, false, true, false];
/// evolve_in_place(&mut cells, 1);
/// assert_eq!(cells, [false, false, false, false, true, true, false]);
/// ```
pub fn evolve_in_place(cells: &mut [bool], iterations: usize) {
    let len = cells.len();
    if len == 0 {
        return;
    }

    for _ in 0..iterations {
        if len == 1 {
            // The only cell is its own left and right neighbor.
            cells[0] = rule_110(cells[0], cells[0], cells[0]);
            continue;
        }

        let leftmost = cells[0];
        let (mut a, mut b, mut c) = (cells[len - 1], leftmost, cells[1]);
        cells[0] = rule_110(a, b, c);

        for i in 1..len - 1 {
            (a, b, c) = (b, c, cells[i + 1]);
            cells[i] = rule_110(a, b, c);
        }

        (a, b, c) = (b, c, leftmost);
        cells[len - 1] = rule_110(a, b, c);
    }
}

/// Reference updater: one sweep over the whole tape per iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialUpdater;

impl SequentialUpdater {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TapeUpdater for SequentialUpdater {
    async fn update(&self, tape: Tape, iterations: usize) -> Result<Tape, ExecutionError> {
        // CPU-bound for the whole run, keep it off the async workers.
        let mut cells = tape.0;
        tokio::task::spawn_blocking(move || {
            evolve_in_place(&mut cells, iterations);
            Tape(cells)
        })
        .await
        .map_err(|join_error| ExecutionError::WorkerFailed {
            message: format!("Sequential sweep panicked: {}", join_error),
        })
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
