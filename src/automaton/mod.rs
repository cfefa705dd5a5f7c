// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The automaton itself: the Rule 110 ruleset and the cyclic tape it evolves.

mod rule;
mod tape;

pub use rule::rule_110;
pub use tape::{Tape, DEFAULT_ALIVE_GLYPH, DEFAULT_DEAD_GLYPH};
