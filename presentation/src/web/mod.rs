//! Web API (axum)

mod server;

pub use server::{ServeError, WebServer};
