// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `engine` - updater lifecycle, partition planning and result comparison
//! * `worker` - section worker lifecycle and boundary exchange failures
//! * `validation` - configuration loading and validation

use tracing::Span;

pub mod engine;
pub mod validation;
pub mod worker;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level with its fields attached.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
