//! API Error Module
//!
//! This module defines the error type shared by all HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All handler errors implement `IntoResponse`, allowing them to be
//! returned directly from handlers with `?`. The wire contract uses fixed
//! plain-text messages; database failures are logged server-side and
//! surfaced as a generic 500.

/// Error type definition
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
