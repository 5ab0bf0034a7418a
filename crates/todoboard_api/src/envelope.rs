//! Plain-data shapes exchanged with the presentation layer.
//!
//! Ids cross this boundary as strings. Forms carry raw, unvalidated input.

use serde::{Deserialize, Serialize};
use todoboard_core::ResolvedView;

/// Result of one user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Whether the action changed state.
    pub ok: bool,
    /// Id of the created/affected entity on success.
    pub id: Option<String>,
    /// Human-readable message for the UI.
    pub message: String,
}

impl ActionResponse {
    pub(crate) fn success(message: impl Into<String>, id: impl ToString) -> Self {
        Self {
            ok: true,
            id: Some(id.to_string()),
            message: message.into(),
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Raw todo form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoForm {
    /// `None` creates a new todo; `Some(id)` edits that todo.
    pub editing_id: Option<String>,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub due_date: String,
    /// `low|medium|high`.
    pub priority: String,
    pub project_id: String,
}

/// Raw project form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectForm {
    /// `None` creates a new project; `Some(id)` renames that project.
    pub editing_id: Option<String>,
    pub name: String,
}

/// One entry of the project dropdown in the todo form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub todo_count: usize,
    /// Current project while the project view is shown.
    pub is_active: bool,
}

/// Everything needed to redraw the screen after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    pub view: ResolvedView,
    pub projects: Vec<ProjectSummary>,
}
