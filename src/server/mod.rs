//! Server setup and configuration.
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Database configuration and pool setup
//! ├── state.rs  - Application state and FromRef impls
//! └── init.rs   - Application assembly
//! ```

/// Database configuration and pool setup
pub mod config;

/// Application assembly
pub mod init;

/// Application state
pub mod state;

// Re-export commonly used items
pub use init::create_app;
pub use state::AppState;
