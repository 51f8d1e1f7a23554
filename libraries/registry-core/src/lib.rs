//! User Registry Core
//!
//! Domain types and error handling shared by the storage layer and the
//! HTTP server.
//!
//! # Example
//!
//! ```rust
//! use registry_core::types::Username;
//!
//! let username = Username::parse("alice").unwrap();
//! assert_eq!(username.as_str(), "alice");
//!
//! assert!(Username::parse("   ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error types
pub mod error;
/// Domain types
pub mod types;

pub use error::{RegistryError, Result};
pub use types::{InsertOutcome, User, Username};
