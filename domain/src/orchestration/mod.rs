//! Fan-out orchestration domain
//!
//! Result types produced when all seven technique handlers run for one
//! problem, plus the descriptive status and health-check records.

pub mod mode;
pub mod status;
pub mod value_objects;
