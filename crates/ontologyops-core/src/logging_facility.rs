//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`, writing to stderr
//! - Operation macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use ontologyops_core::logging_facility::{init, Profile};
//!
//! // Once, at process start
//! init(Profile::Development);
//! ```
//!
//! Engine operations are bracketed by the macros:
//!
//! - `log_op_start!(op, ...)` on entry
//! - `log_op_end!(op, duration_ms = ...)` on success
//! - `log_op_error!(op, err, duration_ms = ...)` on failure, with `err_code`

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
