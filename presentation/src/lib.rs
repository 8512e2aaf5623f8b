//! Presentation layer for scamper
//!
//! This crate contains CLI definitions, input validation, output formatters,
//! progress reporters, the interactive chat interface and the web API.

pub mod chat;
pub mod cli;
pub mod input;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use input::{InputError, cli_input, web_input};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use web::{ServeError, WebServer};
