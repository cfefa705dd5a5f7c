// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

/// Glyph used for a live cell when rendering a tape
pub const DEFAULT_ALIVE_GLYPH: char = '.';
/// Glyph used for a dead cell when rendering a tape
pub const DEFAULT_DEAD_GLYPH: char = ' ';

/// Newtype wrapper for the cyclic tape of cells.
///
/// Index `len - 1` is adjacent to index `0`. Updaters take the tape by value
/// and hand it back evolved, so exactly one updater owns it at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tape(pub Vec<bool>);

impl Tape {
    /// Build a tape of `padding` dead cells followed by `pattern`.
    ///
    /// # Example
    /// ```
    /// use rule110::automaton::Tape;
    ///
    /// let tape = Tape::with_padding(3, &[true, false]);
    /// assert_eq!(tape.0, vec![false, false, false, true, false]);
    /// ```
    pub fn with_padding(padding: usize, pattern: &[bool]) -> Self {
        let mut cells = vec![false; padding];
        cells.extend_from_slice(pattern);
        Self(cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.0
    }

    /// Render the tape as a single bordered row, one glyph per cell.
    ///
    /// # Example
    /// ```
    /// use rule110::automaton::Tape;
    ///
    /// let tape = Tape(vec![true, false, true]);
    /// assert_eq!(tape.render('#', '_'), "|#_#|");
    /// ```
    pub fn render(&self, alive: char, dead: char) -> String {
        let mut row = String::with_capacity(self.len() + 2);
        row.push('|');
        row.extend(self.0.iter().map(|&cell| if cell { alive } else { dead }));
        row.push('|');
        row
    }

    /// Index of the first cell at which `self` and `other` disagree.
    ///
    /// Tapes of different lengths diverge at the shorter length.
    pub fn first_divergence(&self, other: &Tape) -> Option<usize> {
        self.0
            .iter()
            .zip(other.0.iter())
            .position(|(left, right)| left != right)
            .or_else(|| (self.len() != other.len()).then(|| self.len().min(other.len())))
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_ALIVE_GLYPH, DEFAULT_DEAD_GLYPH))
    }
}

impl From<Vec<bool>> for Tape {
    fn from(cells: Vec<bool>) -> Self {
        Self(cells)
    }
}

impl From<Tape> for Vec<bool> {
    fn from(tape: Tape) -> Self {
        tape.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_default_glyphs() {
        let tape = Tape(vec![false, true, true, false]);
        assert_eq!(tape.to_string(), "| .. |");
    }

    #[test]
    fn test_render_empty_tape() {
        assert_eq!(Tape::default().render('x', 'o'), "||");
    }

    #[test]
    fn test_with_padding_matches_benchmark_layout() {
        let tape = Tape::with_padding(1000, &[true, false]);
        assert_eq!(tape.len(), 1002);
        assert!(tape.0[..1000].iter().all(|cell| !cell));
        assert!(tape.0[1000]);
        assert!(!tape.0[1001]);
    }

    #[test]
    fn test_first_divergence() {
        let a = Tape(vec![true, false, true]);
        let b = Tape(vec![true, true, true]);
        assert_eq!(a.first_divergence(&a.clone()), None);
        assert_eq!(a.first_divergence(&b), Some(1));
    }

    #[test]
    fn test_first_divergence_on_length_difference() {
        let a = Tape(vec![true, false]);
        let b = Tape(vec![true, false, false]);
        assert_eq!(a.first_divergence(&b), Some(2));
        assert_eq!(b.first_divergence(&a), Some(2));
    }

    #[test]
    fn test_vec_conversions() {
        let tape: Tape = vec![true, false].into();
        let cells: Vec<bool> = tape.into();
        assert_eq!(cells, vec![true, false]);
    }
}
