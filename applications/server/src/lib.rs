//! User Registry Server Library
//!
//! HTTP API over the user registry: header-based verification, listing and
//! registration of users, plus a static info endpoint and a viewer page.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use state::AppState;
