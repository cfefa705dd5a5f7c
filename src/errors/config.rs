// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Problems found while validating a run configuration.
///
/// Validation collects every problem rather than stopping at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Neither padding nor pattern contributes a cell.
    #[error("The initial tape is empty: set tape.padding or tape.pattern")]
    EmptyTape,

    /// `padding + pattern` is larger than any tape this tool will allocate.
    #[error("The initial tape exceeds {max} cells: reduce tape.padding")]
    TapeTooLong { max: usize },

    /// `sections: 0` was requested.
    #[error("sections must be at least 1")]
    NoSections,

    /// More sections than cells; some worker would own nothing.
    #[error("sections ({sections}) exceeds the tape length ({tape_len})")]
    TooManySections { sections: usize, tape_len: usize },

    /// `exchange.timeout_ms: 0` would fail every exchange immediately.
    #[error("exchange.timeout_ms must be greater than zero")]
    ZeroExchangeTimeout,

    /// Both glyphs are the same, so a rendered tape would be unreadable.
    #[error("render.alive and render.dead must differ (both are {glyph:?})")]
    IndistinctGlyphs { glyph: char },
}

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
