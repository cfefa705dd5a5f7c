// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Splitting a tape into contiguous worker sections.
//!
//! A tape of `n` cells split `s` ways gives every section `n / s` cells, and the
//! first `n % s` sections one more, so sizes differ by at most one. Section
//! `rank` starts at `rank * (n / s) + min(rank, n % s)`; the same arithmetic
//! places each worker's result back into the tape, whatever order the workers
//! finish in.

use std::ops::Range;

use crate::errors::PartitionError;

/// The cells `[start, end)` owned by the worker with this rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub rank: usize,
    pub start: usize,
    pub end: usize,
}

impl SectionBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// An exact, ordered partition of a tape into sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    tape_len: usize,
    sections: Vec<SectionBounds>,
}

impl PartitionPlan {
    /// Plan `sections` sections over a tape of `tape_len` cells.
    ///
    /// Fails when `sections` is zero or exceeds `tape_len`, since some worker
    /// would then own no cells.
    ///
    /// # Example
    /// ```
    /// use rule110::engine::partition::PartitionPlan;
    ///
    /// let plan = PartitionPlan::new(10, 4).unwrap();
    /// let sizes: Vec<usize> = plan.iter().map(|bounds| bounds.len()).collect();
    /// assert_eq!(sizes, vec![3, 3, 2, 2]);
    /// ```
    pub fn new(tape_len: usize, sections: usize) -> Result<Self, PartitionError> {
        if sections == 0 {
            return Err(PartitionError::NoSections);
        }
        if sections > tape_len {
            return Err(PartitionError::TooManySections { sections, tape_len });
        }

        let base = tape_len / sections;
        let extra = tape_len % sections;
        let sections = (0..sections)
            .map(|rank| {
                let start = rank * base + rank.min(extra);
                let len = base + usize::from(rank < extra);
                SectionBounds {
                    rank,
                    start,
                    end: start + len,
                }
            })
            .collect();

        Ok(Self { tape_len, sections })
    }

    pub fn tape_len(&self) -> usize {
        self.tape_len
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Bounds of the section owned by `rank`, if that rank exists.
    pub fn bounds(&self, rank: usize) -> Option<&SectionBounds> {
        self.sections.get(rank)
    }

    /// Sections in rank order, which is also tape order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionBounds> {
        self.sections.iter()
    }

    pub fn smallest_section(&self) -> usize {
        self.sections.iter().map(SectionBounds::len).min().unwrap_or(0)
    }

    pub fn largest_section(&self) -> usize {
        self.sections.iter().map(SectionBounds::len).max().unwrap_or(0)
    }
}
