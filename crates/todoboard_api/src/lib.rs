//! Presentation-facing API for todoboard.
//!
//! # Responsibility
//! - Expose use-case level calls that take raw form input and return plain
//!   data envelopes.
//! - Keep error semantics simple: failures become `ActionResponse { ok: false }`.
//!
//! # Invariants
//! - Exported functions must not panic.
//! - No ambient global state; callers own their `AppSession`.

pub mod envelope;
pub mod session;

pub use envelope::{
    ActionResponse, ProjectForm, ProjectOption, ProjectSummary, RenderModel, TodoForm,
};
pub use session::AppSession;
pub use todoboard_core::{View, DEFAULT_PROJECT_NAME};

/// Core crate version, for about boxes and diagnostics.
pub fn core_version() -> String {
    todoboard_core::core_version().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to call repeatedly with the same level and directory.
pub fn init_logging(level: &str, log_dir: &str) -> String {
    match todoboard_core::init_logging(level, log_dir) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}
