//! Structured logging facility for Veritas
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use veritas_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Events
//!
//! Assertions log `start` / `end` / `end_error` at info/error level. The
//! engines log at debug level when a comparison member faults
//! (`event = "fallthrough"`) and when formatting falls back to a placeholder
//! (`event = "placeholder"`); individual rule decisions are traced.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
