//! Gemini adapter for the text-generation port

pub mod client;
pub mod error;
pub mod types;

pub use client::{GeminiSettings, GeminiTextGenerator};
pub use error::GeminiError;
