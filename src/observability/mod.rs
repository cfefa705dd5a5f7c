// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic and operational log line in the crate is a message type in
//! [`messages`]. Each one implements `Display`, and the ones that carry useful
//! fields also implement [`messages::StructuredLog`] so they can be emitted with
//! those fields attached or turned into a span.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - updater runs, partition planning and result comparison
//! * `messages::worker` - section worker lifecycle and neighbor exchange
//! * `messages::validation` - configuration loading and validation
//!
//! # Usage
//!
//! ```rust
//! use rule110::observability::messages::StructuredLog;
//! use rule110::observability::messages::engine::UpdateStarted;
//!
//! let msg = UpdateStarted {
//!     updater: "sequential",
//!     tape_len: 1002,
//!     iterations: 10_000,
//! };
//!
//! msg.log();
//! ```
//!
//! The subscriber is installed by the binary only; the library never
//! configures global logging state.

pub mod messages;
