//! Task Module
//!
//! Task persistence and the HTTP handlers for task CRUD and reorder.
//!
//! ```text
//! tasks/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Task model and database operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Task model and database operations
pub mod db;

/// HTTP handlers for task endpoints
pub mod handlers;

pub use db::Task;
pub use handlers::{create_task, delete_task, list_tasks, reorder_tasks, update_task};
