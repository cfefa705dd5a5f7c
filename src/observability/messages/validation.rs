// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and validation.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration rule was violated.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use rule110::errors::ValidationError;
/// use rule110::observability::messages::validation::ConfigRuleViolated;
///
/// let error = ValidationError::NoSections;
/// let msg = ConfigRuleViolated { error: &error };
///
/// assert_eq!(msg.to_string(), "Invalid configuration: sections must be at least 1");
/// ```
pub struct ConfigRuleViolated<'a> {
    pub error: &'a ValidationError,
}

impl Display for ConfigRuleViolated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid configuration: {}", self.error)
    }
}

impl StructuredLog for ConfigRuleViolated<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("config_rule_violated", span_name = name, error = %self.error)
    }
}

/// A configuration file was loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub strategy: &'a str,
    pub iterations: usize,
    pub tape_len: usize,
    pub sections: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {}: {} strategy, {} cells, {} iterations, {} sections",
            self.path, self.strategy, self.tape_len, self.iterations, self.sections
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            strategy = self.strategy,
            iterations = self.iterations,
            tape_len = self.tape_len,
            sections = self.sections,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            strategy = self.strategy,
        )
    }
}
