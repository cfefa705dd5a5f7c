// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::automaton::{Tape, DEFAULT_ALIVE_GLYPH, DEFAULT_DEAD_GLYPH};
use crate::config::consts::{DEFAULT_ITERATIONS, DEFAULT_PADDING, DEFAULT_PATTERN, DEFAULT_SECTIONS};
use crate::errors::ConfigError;
use crate::observability::messages::validation::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for a benchmark run.
///
/// # Fields
/// * `strategy` - Which updaters to run (optional, defaults to `compare`)
/// * `iterations` - Number of Rule 110 steps
/// * `sections` - Section count for the partitioned updater (optional, defaults to CPU count)
/// * `tape` - How to build the initial tape
/// * `exchange` - Neighbor exchange options (optional)
/// * `render` - How to print the final tape (optional)
///
/// # Example
/// ```yaml
/// strategy: compare
/// iterations: 10000
/// sections: 4
/// tape:
///   padding: 1000
///   pattern: [true, false]
/// exchange:
///   timeout_ms: 10000
/// render:
///   alive: "."
///   dead: " "
///   show_tape: false
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub strategy: Strategy,
    pub iterations: usize,
    #[serde(default)]
    pub sections: Option<usize>,
    pub tape: TapeConfig,
    #[serde(default)]
    pub exchange: ExchangeOptions,
    #[serde(default)]
    pub render: RenderOptions,
}

impl Default for Config {
    /// The Rule 110 example from MathWorld: 1000 dead cells then `[true, false]`,
    /// evolved 10000 times on four sections.
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            iterations: DEFAULT_ITERATIONS,
            sections: Some(DEFAULT_SECTIONS),
            tape: TapeConfig {
                padding: DEFAULT_PADDING,
                pattern: DEFAULT_PATTERN.to_vec(),
            },
            exchange: ExchangeOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Section count, falling back to the number of available CPU cores.
    pub fn effective_sections(&self) -> usize {
        self.sections.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(DEFAULT_SECTIONS)
        })
    }
}

/// Which updaters a run uses.
///
/// # Variants
/// * `Sequential` - Single in-place sweep only
/// * `Partitioned` - One concurrent worker per section only
/// * `Compare` - Both, checking that they agree
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Sequential,
    Partitioned,
    #[default]
    Compare,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Partitioned => "partitioned",
            Strategy::Compare => "compare",
        }
    }
}

/// Initial tape: `padding` dead cells followed by `pattern`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TapeConfig {
    #[serde(default)]
    pub padding: usize,
    #[serde(default)]
    pub pattern: Vec<bool>,
}

impl TapeConfig {
    /// Total cell count, or `None` if `padding + pattern` does not fit in a `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        self.padding.checked_add(self.pattern.len())
    }

    /// Build the tape. Run [`validate_config`](crate::config::validate_config)
    /// first: an oversized `padding` is only rejected there.
    pub fn build(&self) -> Tape {
        Tape::with_padding(self.padding, &self.pattern)
    }
}

/// Neighbor exchange options for the partitioned updater.
///
/// # Fields
/// * `timeout_ms` - Longest wait for a single neighbor value; omitted means wait forever
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ExchangeOptions {
    pub timeout_ms: Option<u64>,
}

impl ExchangeOptions {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// How the final tape is printed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RenderOptions {
    #[serde(default = "default_alive")]
    pub alive: char,
    #[serde(default = "default_dead")]
    pub dead: char,
    #[serde(default)]
    pub show_tape: bool,
}

fn default_alive() -> char {
    DEFAULT_ALIVE_GLYPH
}

fn default_dead() -> char {
    DEFAULT_DEAD_GLYPH
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            alive: DEFAULT_ALIVE_GLYPH,
            dead: DEFAULT_DEAD_GLYPH,
            show_tape: false,
        }
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse a config from YAML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Every validation problem is reported, not just the first.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path.as_ref())?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;

    ConfigLoaded {
        path: &path.as_ref().display().to_string(),
        strategy: cfg.strategy.as_str(),
        iterations: cfg.iterations,
        tape_len: cfg.tape.checked_len().unwrap_or_default(),
        sections: cfg.effective_sections(),
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let cfg = parse_config(
            "iterations: 5\ntape:\n  pattern: [true, false, true]\n",
        )
        .unwrap();
        assert_eq!(cfg.strategy, Strategy::Compare);
        assert_eq!(cfg.iterations, 5);
        assert_eq!(cfg.sections, None);
        assert_eq!(cfg.tape.padding, 0);
        assert_eq!(cfg.exchange.timeout(), None);
        assert_eq!(cfg.render, RenderOptions::default());
        assert!(cfg.effective_sections() >= 1);
    }

    #[test]
    fn test_full_config() {
        let yaml = r##"
strategy: partitioned
iterations: 250
sections: 3
tape:
  padding: 20
  pattern: [true]
exchange:
  timeout_ms: 500
render:
  alive: "#"
  dead: "_"
  show_tape: true
"##;
        let cfg = parse_config(yaml).unwrap();
        assert_eq!(cfg.strategy, Strategy::Partitioned);
        assert_eq!(cfg.effective_sections(), 3);
        assert_eq!(cfg.tape.checked_len(), Some(21));
        assert_eq!(cfg.tape.build().len(), 21);
        assert_eq!(cfg.exchange.timeout(), Some(Duration::from_millis(500)));
        assert_eq!(cfg.render.alive, '#');
        assert_eq!(cfg.render.dead, '_');
        assert!(cfg.render.show_tape);
    }

    #[test]
    fn test_checked_len_detects_overflow() {
        let tape = TapeConfig {
            padding: usize::MAX,
            pattern: vec![true, false],
        };
        assert_eq!(tape.checked_len(), None);

        let tape = TapeConfig {
            padding: usize::MAX - 2,
            pattern: vec![true, false],
        };
        assert_eq!(tape.checked_len(), Some(usize::MAX));
    }

    #[test]
    fn test_unknown_strategy_is_parse_error() {
        let result = parse_config("strategy: hybrid\niterations: 1\ntape:\n  padding: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_negative_sections_is_parse_error() {
        let result = parse_config("iterations: 1\nsections: -2\ntape:\n  padding: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_default_matches_benchmark() {
        let cfg = Config::default();
        assert_eq!(cfg.iterations, 10_000);
        assert_eq!(cfg.effective_sections(), 4);
        let tape = cfg.tape.build();
        assert_eq!(tape.len(), 1002);
        assert!(tape.0[1000]);
    }
}
