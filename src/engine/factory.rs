// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Config, Strategy};
use crate::engine::partitioned::PartitionedUpdater;
use crate::engine::sequential::SequentialUpdater;
use crate::traits::TapeUpdater;

/// Factory for creating tape updaters from configuration
pub struct UpdaterFactory;

impl UpdaterFactory {
    /// Create the updaters for the configured strategy, reference first.
    pub fn from_config(cfg: &Config) -> Vec<Box<dyn TapeUpdater>> {
        let sequential = || -> Box<dyn TapeUpdater> { Box::new(SequentialUpdater::new()) };
        let partitioned = || -> Box<dyn TapeUpdater> {
            Box::new(
                PartitionedUpdater::new(cfg.effective_sections())
                    .with_exchange_timeout(cfg.exchange.timeout()),
            )
        };

        match cfg.strategy {
            Strategy::Sequential => vec![sequential()],
            Strategy::Partitioned => vec![partitioned()],
            Strategy::Compare => vec![sequential(), partitioned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cfg: &Config) -> Vec<&'static str> {
        UpdaterFactory::from_config(cfg)
            .iter()
            .map(|updater| updater.name())
            .collect()
    }

    #[test]
    fn test_strategy_selects_updaters() {
        let mut cfg = Config::default();
        assert_eq!(names(&cfg), vec!["sequential", "partitioned"]);

        cfg.strategy = Strategy::Sequential;
        assert_eq!(names(&cfg), vec!["sequential"]);

        cfg.strategy = Strategy::Partitioned;
        assert_eq!(names(&cfg), vec!["partitioned"]);
    }
}
