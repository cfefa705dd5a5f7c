// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod automaton;     // rule + tape
pub mod config;        // config + runtime builder
pub mod engine;        // sequential and partitioned updaters
pub mod errors;        // error handling
pub mod observability;
pub mod traits;        // updater abstraction
pub mod utils;
