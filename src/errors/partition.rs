// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for splitting a tape into worker sections.

use thiserror::Error;

/// A section count that cannot partition the tape.
///
/// Raised before any worker is started, so a rejected run has no side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// At least one section is required.
    #[error("Cannot partition a tape into zero sections")]
    NoSections,

    /// Every section must own at least one cell.
    #[error("Cannot split a tape of {tape_len} cells into {sections} sections")]
    TooManySections { sections: usize, tape_len: usize },
}
