// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::automaton::Tape;
use crate::config::Config;
use crate::engine::factory::UpdaterFactory;
use crate::traits::TapeUpdater;

/// Everything needed to execute a configured run.
pub struct Runtime {
    pub tape: Tape,
    pub iterations: usize,
    /// In run order; the first one is the reference for agreement checks.
    pub updaters: Vec<Box<dyn TapeUpdater>>,
}

/// Run builder - turns a configuration into a tape and its updaters.
///
/// # Examples
///
/// ```
/// use rule110::config::{Config, RuntimeBuilder};
///
/// let runtime = RuntimeBuilder::from_config(&Config::default());
///
/// assert_eq!(runtime.tape.len(), 1002);
/// assert_eq!(runtime.iterations, 10_000);
/// let names: Vec<&str> = runtime.updaters.iter().map(|u| u.name()).collect();
/// assert_eq!(names, vec!["sequential", "partitioned"]);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the initial tape and the updaters for `cfg.strategy`.
    ///
    /// The configuration is expected to be validated already; an invalid
    /// section count still surfaces as an error when the partitioned updater runs.
    pub fn from_config(cfg: &Config) -> Runtime {
        Runtime {
            tape: cfg.tape.build(),
            iterations: cfg.iterations,
            updaters: UpdaterFactory::from_config(cfg),
        }
    }
}
