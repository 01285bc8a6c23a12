//! # Failure Recovery
//!
//! Runnable examples demonstrating how a raised failure signal is
//! intercepted, inspected, and either converted into a plain return value
//! or propagated to the caller.
//!
//! ## Patterns Covered
//!
//! 1. **Recover the Message** - A failing attempt yields its signal's
//!    message as the result; a succeeding attempt yields no value
//! 2. **Re-raise on a Missing Message** - The handler refuses signals
//!    without a message and propagates them unchanged
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Converting an Intercepted Failure into a Value
//! cargo run --bin p1_recover_message
//!
//! # Pattern 2: Propagating Signals the Handler Refuses
//! cargo run --bin p2_reraise_unlabeled
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the signal and selector error types
//! - `anyhow` - Flexible error handling at the demo caller boundary
//! - `serde_json` - Structured view of handler outcomes

pub mod recovery;
pub mod signal;

pub use recovery::{attempt, recover, run_demo, Mode, UnknownMode};
pub use signal::FailureSignal;
