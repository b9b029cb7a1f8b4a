//! Authentication Module
//!
//! This module handles user registration, credential checking, and
//! server-side sessions, plus the HTTP handlers for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - User model and database operations
//! ├── service.rs  - Registration and credential checking
//! ├── sessions.rs - Cookie-keyed session store
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: candidate user persisted with a derived username
//! 2. **Login**: credentials verified, session's current user set, cookie
//!    returned
//! 3. **Current user / task endpoints**: session cookie resolved to the
//!    current user through the explicit [`sessions::SessionStore`]
//! 4. **Logout**: session invalidated
//!
//! # Security
//!
//! Passwords are stored and compared as plaintext to preserve the
//! behavioral contract of the existing frontend. This is a known gap
//! recorded in DESIGN.md, not an oversight.

/// User data model and database operations
pub mod users;

/// Registration and credential checking
pub mod service;

/// Cookie-keyed session store
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, UserResponse};
pub use handlers::{current_user, login, logout, signup};
pub use sessions::{SessionStore, SessionUser};
