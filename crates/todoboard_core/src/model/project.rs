//! Project domain model.
//!
//! # Responsibility
//! - Own an ordered list of todos exclusively.
//! - Provide append/remove/lookup primitives used by the store.
//!
//! # Invariants
//! - Insertion order is display order.
//! - `todos` is only reachable read-only from outside this module.

use crate::model::todo::{Todo, TodoId};
use crate::model::validation::{ensure_project_name, ValidationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Name of the project every store starts with.
pub const DEFAULT_PROJECT_NAME: &str = "Inbox";

/// Named, ordered grouping of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    name: String,
    todos: Vec<Todo>,
}

impl Project {
    /// Creates an empty project with a fresh id.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();
        ensure_project_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            todos: Vec::new(),
        })
    }

    /// Creates the default `Inbox` project.
    pub fn inbox() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_PROJECT_NAME.to_string(),
            todos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        ensure_project_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Todos in display order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Appends a todo at the end.
    ///
    /// No duplicate-id check happens here; the store guarantees uniqueness.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Detaches the todo with `id`, if present.
    ///
    /// Absence is not an error; `None` is returned and nothing changes.
    pub fn remove_todo(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(index))
    }

    pub fn get_todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn get_todo_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }
}
