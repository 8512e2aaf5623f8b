//! Use cases (application services)

pub mod run_scamper;
pub mod technique_handler;
