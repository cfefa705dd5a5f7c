// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Compute the next value of a cell under Rule 110.
///
/// `a`, `b` and `c` are the previous values of the left neighbor, the cell
/// itself and the right neighbor:
///
/// ```text
/// n - 1     ........abc.....
/// n         .........X......
/// ```
///
/// The expression is the reduced Karnaugh map of the ruleset:
///
/// ```text
///          AB
///       00 01 11 10
///     ---------------
/// C 0 |     X  X    |
///   1 |  X  X     X |
///     ---------------
/// ```
///
/// Both updaters call this and nothing else, so their results are directly
/// comparable.
///
/// # Example
/// ```
/// use rule110::automaton::rule_110;
///
/// assert!(rule_110(false, false, true));
/// assert!(!rule_110(true, true, true));
/// ```
#[inline]
pub fn rule_110(a: bool, b: bool, c: bool) -> bool {
    (!c && b) || (c && !(a && b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_wolfram_truth_table() {
        // Neighborhoods 111 down to 000; 110 in binary is 01101110.
        let expected = [false, true, true, false, true, true, true, false];
        for (i, want) in expected.iter().enumerate() {
            let pattern = 7 - i;
            let a = pattern & 0b100 != 0;
            let b = pattern & 0b010 != 0;
            let c = pattern & 0b001 != 0;
            assert_eq!(
                rule_110(a, b, c),
                *want,
                "neighborhood {:03b} should map to {}",
                pattern,
                want
            );
        }
    }

    #[test]
    fn test_dead_neighborhood_stays_dead() {
        assert!(!rule_110(false, false, false));
    }
}
