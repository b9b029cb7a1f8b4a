//! Route configuration.
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports
//! ├── router.rs      - Router assembly (routes, CORS, fallback)
//! ├── auth_routes.rs - Auth endpoint routes
//! └── task_routes.rs - Task endpoint routes
//! ```

/// Router assembly
pub mod router;

/// Auth endpoint routes
pub mod auth_routes;

/// Task endpoint routes
pub mod task_routes;

pub use router::create_router;
