//! Core types shared across Veritas facilities
//!
//! This crate provides the constants used by the equality engine, the
//! value formatter and the logging facility:
//!
//! - **Limits**: the process-wide truncation policy for rendered values
//! - **Schema constants**: canonical field keys and event names

pub mod limits;
pub mod schema;

pub use limits::{TruncationPolicy, TRUNCATION_POLICY};
