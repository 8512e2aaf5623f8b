//! Prompt domain
//!
//! Templates for the technique prompts and the executive summary.

mod template;

pub use template::{PromptTemplate, SUMMARY_IDEA_LIMIT};
