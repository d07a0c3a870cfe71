//! Logging setup for the `roicalc` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary so embedding applications keep control of their own.
//!
//! ```ignore
//! use roicalc::observability::init_logging;
//!
//! fn main() {
//!     init_logging(cli.verbosity);
//! }
//! ```

pub mod logging;

pub use logging::{init_logging, level_for_verbosity};
