//! Core domain logic for todoboard.
//! This crate is the single source of truth for task/project invariants.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::project::{Project, ProjectId, DEFAULT_PROJECT_NAME};
pub use model::todo::{Priority, Todo, TodoId};
pub use model::validation::{parse_due_date, ValidationError, ValidationResult};
pub use service::task_store::{StoreError, StoreResult, TaskStore, TodoPatch};
pub use service::view_resolver::{
    is_due_today, is_overdue, is_upcoming, nav_counts, resolve_view, NavCounts, ResolvedView,
    TodoItemView, UnknownView, View, UPCOMING_WINDOW_DAYS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
