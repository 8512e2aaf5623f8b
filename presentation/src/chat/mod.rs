//! Interactive chat module
//!
//! Provides a readline-based interactive interface for SCAMPER sessions.

mod repl;

pub use repl::ChatRepl;
