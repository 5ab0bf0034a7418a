//! Task/project domain model.
//!
//! # Responsibility
//! - Define the plain records owned by the task store.
//! - Validate raw input before records are constructed.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - A todo belongs to exactly one project at a time.

pub mod project;
pub mod todo;
pub mod validation;
