//! HTTP handlers for the authentication endpoints.
//!
//! ```text
//! handlers/
//! ├── mod.rs    - Handler exports
//! ├── types.rs  - Request/response types
//! ├── signup.rs - User registration handler
//! ├── login.rs  - User authentication handler
//! ├── me.rs     - Current user handler
//! └── logout.rs - Logout handler
//! ```

/// Request/response types
pub mod types;

/// User registration handler
pub mod signup;

/// User authentication handler
pub mod login;

/// Current user handler
pub mod me;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use me::current_user;
pub use signup::signup;
