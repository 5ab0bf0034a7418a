//! Use-case session consumed by the presentation layer.
//!
//! # Responsibility
//! - Accept raw form strings and dispatch them to store mutators.
//! - Track which view is active and resolve it for rendering.
//!
//! # Invariants
//! - Every call returns plain data; none of them panic.
//! - A failed or declined action leaves the store unchanged.
//! - The caller re-renders after every action; nothing is pushed.

use crate::envelope::{
    ActionResponse, ProjectForm, ProjectOption, ProjectSummary, RenderModel, TodoForm,
};
use chrono::NaiveDateTime;
use log::{info, warn};
use todoboard_core::model::validation::DUE_DATE_FORMAT;
use todoboard_core::{
    parse_due_date, resolve_view, Priority, ProjectId, StoreError, TaskStore, Todo, TodoId,
    TodoPatch, ValidationError, View,
};
use uuid::Uuid;

/// Application state owned by one UI instance.
#[derive(Debug, Clone, Default)]
pub struct AppSession {
    store: TaskStore,
    active_view: View,
}

impl AppSession {
    /// Starts on the Today view with only the `Inbox` project.
    pub fn new() -> Self {
        Self::with_store(TaskStore::new())
    }

    pub fn with_store(store: TaskStore) -> Self {
        Self {
            store,
            active_view: View::Today,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Switches to a nav view (Today/Upcoming) or back to the current project.
    pub fn select_view(&mut self, view: View) {
        self.active_view = view;
    }

    /// Selects a project and shows it.
    pub fn open_project(&mut self, project_id: &str) -> ActionResponse {
        let Some(id) = parse_id(project_id) else {
            return unknown_project(project_id);
        };
        match self.store.set_current_project(id) {
            Ok(()) => {
                self.active_view = View::Project;
                ActionResponse::success("Project opened.", id)
            }
            Err(err) => failure("open_project", &err),
        }
    }

    /// Dropdown entries for the todo form, current project pre-selected.
    pub fn project_options(&self) -> Vec<ProjectOption> {
        let current = self.store.current_project_id();
        self.store
            .projects()
            .iter()
            .map(|project| ProjectOption {
                id: project.id.to_string(),
                name: project.name().to_string(),
                selected: project.id == current,
            })
            .collect()
    }

    /// Prefill for renaming an existing project.
    pub fn edit_project_form(&self, project_id: &str) -> Option<ProjectForm> {
        let project = self.store.project_by_id(parse_id(project_id)?)?;
        Some(ProjectForm {
            editing_id: Some(project.id.to_string()),
            name: project.name().to_string(),
        })
    }

    /// Creates or renames a project depending on `form.editing_id`.
    pub fn submit_project(&mut self, form: ProjectForm) -> ActionResponse {
        let name = form.name.trim();
        match form.editing_id.as_deref() {
            None => match self.store.add_project(name) {
                Ok(project) => ActionResponse::success("Project created.", project.id),
                Err(err) => failure("project_create", &err),
            },
            Some(raw_id) => {
                let Some(id) = parse_id(raw_id) else {
                    return unknown_project(raw_id);
                };
                match self.store.rename_project(id, name) {
                    Ok(()) => ActionResponse::success("Project renamed.", id),
                    Err(err) => failure("project_rename", &err),
                }
            }
        }
    }

    /// Deletes a project and its todos.
    ///
    /// `confirm` is consulted only when the project still holds todos; a
    /// `false` answer cancels with no changes.
    pub fn delete_project(
        &mut self,
        project_id: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> ActionResponse {
        let Some(id) = parse_id(project_id) else {
            return unknown_project(project_id);
        };
        let Some(project) = self.store.project_by_id(id) else {
            return unknown_project(project_id);
        };
        if !project.is_empty()
            && !confirm(&format!("Delete \"{}\" and all its todos?", project.name()))
        {
            info!("event=project_delete module=api status=cancelled project_id={id}");
            return ActionResponse::failure("Deletion cancelled.");
        }

        match self.store.delete_project(id) {
            Ok(_) => ActionResponse::success("Project deleted.", id),
            Err(err) => failure("project_delete", &err),
        }
    }

    /// Blank todo form targeting the current project.
    pub fn new_todo_form(&self) -> TodoForm {
        TodoForm {
            priority: Priority::default().to_string(),
            project_id: self.store.current_project_id().to_string(),
            ..TodoForm::default()
        }
    }

    /// Prefill for editing an existing todo.
    pub fn edit_todo_form(&self, todo_id: &str) -> Option<TodoForm> {
        let todo = self.store.find_todo(parse_id(todo_id)?)?;
        Some(TodoForm {
            editing_id: Some(todo.id.to_string()),
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date.format(DUE_DATE_FORMAT).to_string(),
            priority: todo.priority.to_string(),
            project_id: todo.project_id.to_string(),
        })
    }

    /// Creates or edits a todo depending on `form.editing_id`.
    ///
    /// Editing with a different `project_id` moves the todo to the end of
    /// that project.
    pub fn submit_todo(&mut self, form: TodoForm) -> ActionResponse {
        let Some(project_id) = parse_id(&form.project_id) else {
            return unknown_project(&form.project_id);
        };
        match form.editing_id.as_deref() {
            None => self.create_todo(&form, project_id),
            Some(raw_id) => match parse_id(raw_id) {
                Some(todo_id) => self.edit_todo(&form, todo_id, project_id),
                None => unknown_todo(raw_id),
            },
        }
    }

    fn create_todo(&mut self, form: &TodoForm, project_id: ProjectId) -> ActionResponse {
        let todo = match Todo::from_form(
            &form.title,
            &form.description,
            &form.due_date,
            &form.priority,
            project_id,
        ) {
            Ok(todo) => todo,
            Err(err) => return failure("todo_create", &err.into()),
        };
        match self.store.add_todo(todo) {
            Ok(id) => ActionResponse::success("Task created.", id),
            Err(err) => failure("todo_create", &err),
        }
    }

    fn edit_todo(&mut self, form: &TodoForm, todo_id: TodoId, project_id: ProjectId) -> ActionResponse {
        let patch = match build_patch(form, project_id) {
            Ok(patch) => patch,
            Err(err) => return failure("todo_update", &err.into()),
        };
        match self.store.update_todo(todo_id, patch) {
            Ok(todo) => ActionResponse::success("Task updated.", todo.id),
            Err(err) => failure("todo_update", &err),
        }
    }

    /// Flips completion of one todo.
    pub fn toggle_todo(&mut self, todo_id: &str) -> ActionResponse {
        let Some(id) = parse_id(todo_id) else {
            return unknown_todo(todo_id);
        };
        match self.store.toggle_todo(id) {
            Ok(true) => ActionResponse::success("Task completed.", id),
            Ok(false) => ActionResponse::success("Task reopened.", id),
            Err(err) => failure("todo_toggle", &err),
        }
    }

    /// Deletes one todo after `confirm` agrees.
    pub fn delete_todo(&mut self, todo_id: &str, confirm: impl FnOnce(&str) -> bool) -> ActionResponse {
        let Some(id) = parse_id(todo_id) else {
            return unknown_todo(todo_id);
        };
        if self.store.find_todo(id).is_none() {
            return unknown_todo(todo_id);
        }
        if !confirm("Are you sure you want to delete this todo?") {
            info!("event=todo_delete module=api status=cancelled todo_id={id}");
            return ActionResponse::failure("Deletion cancelled.");
        }
        match self.store.remove_todo(id) {
            Some(todo) => ActionResponse::success("Task deleted.", todo.id),
            None => unknown_todo(todo_id),
        }
    }

    /// Resolves the active view plus the sidebar at instant `now`.
    pub fn render(&self, now: NaiveDateTime) -> RenderModel {
        let current = self.store.current_project_id();
        let showing_project = self.active_view == View::Project;
        RenderModel {
            view: resolve_view(&self.store, self.active_view, now),
            projects: self
                .store
                .projects()
                .iter()
                .map(|project| ProjectSummary {
                    id: project.id.to_string(),
                    name: project.name().to_string(),
                    todo_count: project.len(),
                    is_active: showing_project && project.id == current,
                })
                .collect(),
        }
    }
}

fn build_patch(form: &TodoForm, project_id: ProjectId) -> Result<TodoPatch, ValidationError> {
    Ok(TodoPatch {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        due_date: parse_due_date(&form.due_date)?,
        priority: form.priority.parse::<Priority>()?,
        project_id,
    })
}

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

fn unknown_project(raw: &str) -> ActionResponse {
    warn!("event=lookup module=api status=error reason=unknown_project");
    ActionResponse::failure(format!("project not found: {}", raw.trim()))
}

fn unknown_todo(raw: &str) -> ActionResponse {
    warn!("event=lookup module=api status=error reason=unknown_todo");
    ActionResponse::failure(format!("todo not found: {}", raw.trim()))
}

fn failure(event: &str, err: &StoreError) -> ActionResponse {
    warn!(
        "event={event} module=api status=error reason={}",
        error_kind(err)
    );
    ActionResponse::failure(err.to_string())
}

fn error_kind(err: &StoreError) -> &'static str {
    match err {
        StoreError::Validation(_) => "validation",
        StoreError::ProjectNotFound(_) => "project_not_found",
        StoreError::TodoNotFound(_) => "todo_not_found",
        StoreError::DuplicateTodo(_) => "duplicate_todo",
        StoreError::LastProject(_) => "last_project",
    }
}
