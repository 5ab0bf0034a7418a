//! Task store: the single mutation surface for projects and todos.
//!
//! # Responsibility
//! - Own every project and track the currently selected one.
//! - Route todo create/edit/move/delete/toggle through project primitives.
//! - Aggregate todos across projects for views and counts.
//!
//! # Invariants
//! - `projects` is never empty.
//! - `current_project_id` always references a member of `projects`.
//! - A todo lives in exactly one project; moves are detach-then-attach.
//! - Failed operations leave the store unchanged.

use crate::model::project::{Project, ProjectId};
use crate::model::todo::{Priority, Todo, TodoId};
use crate::model::validation::{ensure_title, ValidationError};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from task store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input rejected before any mutation.
    Validation(ValidationError),
    /// No project with this id.
    ProjectNotFound(ProjectId),
    /// No todo with this id in any project.
    TodoNotFound(TodoId),
    /// A todo with this id is already held by some project.
    DuplicateTodo(TodoId),
    /// Deleting this project would leave the store empty.
    LastProject(ProjectId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
            Self::DuplicateTodo(id) => write!(f, "todo already exists: {id}"),
            Self::LastProject(id) => {
                write!(f, "cannot delete project {id}: at least one project must remain")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Full replacement values for editing a todo.
///
/// Completion state is not part of an edit; use [`TaskStore::toggle_todo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    /// Destination project. A different id moves the todo.
    pub project_id: ProjectId,
}

/// Owner of all projects and the current-project selection.
#[derive(Debug, Clone)]
pub struct TaskStore {
    projects: Vec<Project>,
    current_project_id: ProjectId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates a store holding only the default `Inbox` project, selected.
    pub fn new() -> Self {
        Self::from_default_project(Project::inbox())
    }

    /// Creates a store whose initial project has a custom name.
    pub fn with_default_project(name: impl Into<String>) -> StoreResult<Self> {
        Ok(Self::from_default_project(Project::new(name)?))
    }

    fn from_default_project(project: Project) -> Self {
        info!(
            "event=store_init module=store status=ok project_id={}",
            project.id
        );
        Self {
            current_project_id: project.id,
            projects: vec![project],
        }
    }

    /// Creates and appends a project. The current selection is unchanged.
    pub fn add_project(&mut self, name: impl Into<String>) -> StoreResult<&Project> {
        let project = Project::new(name)?;
        info!(
            "event=project_create module=store status=ok project_id={}",
            project.id
        );
        self.projects.push(project);
        Ok(&self.projects[self.projects.len() - 1])
    }

    /// Renames one project.
    pub fn rename_project(&mut self, id: ProjectId, name: impl Into<String>) -> StoreResult<()> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        project.set_name(name)?;
        info!("event=project_rename module=store status=ok project_id={id}");
        Ok(())
    }

    /// Deletes one project together with all of its todos.
    ///
    /// # Contract
    /// - Unknown ids fail with `ProjectNotFound`.
    /// - The sole remaining project is never deleted (`LastProject`).
    /// - Deleting the current project selects the first remaining one.
    pub fn delete_project(&mut self, id: ProjectId) -> StoreResult<Project> {
        let index = self
            .projects
            .iter()
            .position(|project| project.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        if self.projects.len() <= 1 {
            warn!("event=project_delete module=store status=rejected reason=last_project project_id={id}");
            return Err(StoreError::LastProject(id));
        }

        let removed = self.projects.remove(index);
        if self.current_project_id == id {
            if let Some(first) = self.projects.first() {
                self.current_project_id = first.id;
            }
        }
        info!(
            "event=project_delete module=store status=ok project_id={id} cascaded_todos={}",
            removed.len()
        );
        Ok(removed)
    }

    /// Returns the currently selected project.
    pub fn current_project(&self) -> &Project {
        // `projects` is never empty and `current_project_id` always names a
        // member, so neither lookup can miss.
        self.project_by_id(self.current_project_id)
            .unwrap_or(&self.projects[0])
    }

    pub fn current_project_id(&self) -> ProjectId {
        self.current_project_id
    }

    /// Selects a project; unknown ids are rejected.
    pub fn set_current_project(&mut self, id: ProjectId) -> StoreResult<()> {
        if self.project_by_id(id).is_none() {
            return Err(StoreError::ProjectNotFound(id));
        }
        self.current_project_id = id;
        debug!("event=project_select module=store status=ok project_id={id}");
        Ok(())
    }

    /// Projects in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_by_id(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Every todo, in project order then insertion order.
    pub fn all_todos(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.projects.iter().flat_map(|project| project.todos().iter())
    }

    pub fn todo_count(&self) -> usize {
        self.projects.iter().map(Project::len).sum()
    }

    pub fn find_todo(&self, id: TodoId) -> Option<&Todo> {
        self.projects.iter().find_map(|project| project.get_todo(id))
    }

    /// Appends a todo to the project named by `todo.project_id`.
    ///
    /// `Todo` fields are public, so the title is re-checked here.
    pub fn add_todo(&mut self, todo: Todo) -> StoreResult<TodoId> {
        ensure_title(&todo.title)?;
        if self.find_todo(todo.id).is_some() {
            return Err(StoreError::DuplicateTodo(todo.id));
        }
        let project_id = todo.project_id;
        let project = self
            .project_mut(project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        let id = todo.id;
        project.add_todo(todo);
        info!("event=todo_create module=store status=ok todo_id={id} project_id={project_id}");
        Ok(id)
    }

    /// Flips completion and returns the new state.
    pub fn toggle_todo(&mut self, id: TodoId) -> StoreResult<bool> {
        let todo = self
            .projects
            .iter_mut()
            .find_map(|project| project.get_todo_mut(id))
            .ok_or(StoreError::TodoNotFound(id))?;
        todo.toggle_complete();
        debug!(
            "event=todo_toggle module=store status=ok todo_id={id} is_complete={}",
            todo.is_complete
        );
        Ok(todo.is_complete)
    }

    /// Removes a todo from whichever project holds it.
    ///
    /// Stale ids are expected (double-click delete) and yield `None`.
    pub fn remove_todo(&mut self, id: TodoId) -> Option<Todo> {
        let removed = self
            .projects
            .iter_mut()
            .find_map(|project| project.remove_todo(id))?;
        info!(
            "event=todo_delete module=store status=ok todo_id={id} project_id={}",
            removed.project_id
        );
        Some(removed)
    }

    /// Replaces a todo's editable fields, moving it when the project changes.
    ///
    /// # Contract
    /// - Title and destination are validated before anything is touched.
    /// - Same project: edited in place, position kept.
    /// - Different project: removed from the source and appended to the
    ///   destination; the total todo count is unchanged.
    pub fn update_todo(&mut self, id: TodoId, patch: TodoPatch) -> StoreResult<&Todo> {
        ensure_title(&patch.title)?;
        let destination = self
            .project_index(patch.project_id)
            .ok_or(StoreError::ProjectNotFound(patch.project_id))?;
        let source = self
            .projects
            .iter()
            .position(|project| project.get_todo(id).is_some())
            .ok_or(StoreError::TodoNotFound(id))?;

        if source == destination {
            let todo = self.projects[source]
                .get_todo_mut(id)
                .ok_or(StoreError::TodoNotFound(id))?;
            apply_patch(todo, patch);
            debug!("event=todo_update module=store status=ok todo_id={id}");
        } else {
            let mut todo = self.projects[source]
                .remove_todo(id)
                .ok_or(StoreError::TodoNotFound(id))?;
            let from = todo.project_id;
            apply_patch(&mut todo, patch);
            let to = todo.project_id;
            self.projects[destination].add_todo(todo);
            info!("event=todo_move module=store status=ok todo_id={id} from={from} to={to}");
        }

        self.projects[destination]
            .get_todo(id)
            .ok_or(StoreError::TodoNotFound(id))
    }

    fn project_index(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| project.id == id)
    }

    fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id == id)
    }
}

fn apply_patch(todo: &mut Todo, patch: TodoPatch) {
    todo.title = patch.title;
    todo.description = patch.description;
    todo.due_date = patch.due_date;
    todo.priority = patch.priority;
    todo.project_id = patch.project_id;
}
