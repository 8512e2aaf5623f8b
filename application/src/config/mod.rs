//! Application-level configuration.
//!
//! - [`ScamperConfig`] - orchestration parameters (idea cap, fan-out mode, sampling)

pub mod scamper_config;

pub use scamper_config::ScamperConfig;
