//! Taskboard Backend
//!
//! A minimal personal task-tracking web backend: users sign up, log in
//! via a server-side session, and perform CRUD and reorder operations on
//! tasks they own. The whole system is a thin HTTP-to-relational-storage
//! mapping layer; the one piece of cross-request state is the session
//! store's current-user slot.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs    - Crate exports
//! ├── main.rs   - Server entry point
//! ├── server/   - Configuration, state, application assembly
//! ├── routes/   - Route configuration
//! ├── auth/     - Users, registration, sessions, auth handlers
//! ├── tasks/    - Task store and task handlers
//! └── error/    - Handler error type and response conversion
//! ```
//!
//! # Control Flow
//!
//! HTTP request → handler reads the session (where the endpoint is
//! session-scoped) → delegates to the auth service or task store →
//! returns a response payload or status code. Handlers depend only
//! downward through that chain.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>` and propagate store failures
//! with `?`. The conversion layer maps each error onto the fixed wire
//! contract; database detail is logged, never sent to clients.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Task store and handlers
pub mod tasks;

/// Handler error types
pub mod error;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use error::ApiError;
pub use server::create_app;
