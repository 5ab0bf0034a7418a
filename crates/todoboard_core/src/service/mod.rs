//! Core use-case services.
//!
//! # Responsibility
//! - Enforce store invariants for every project/todo mutation.
//! - Resolve views into plain display data for the presentation layer.

pub mod task_store;
pub mod view_resolver;
