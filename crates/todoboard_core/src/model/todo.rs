//! Todo domain model.
//!
//! # Responsibility
//! - Define the single-task record shown in every view.
//! - Validate raw collaborator input before a record exists.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `title` is never blank and `due_date` is always a real calendar date.
//! - `is_complete` starts as `false`.

use crate::model::project::ProjectId;
use crate::model::validation::{ensure_title, parse_due_date, ValidationError, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a todo.
pub type TodoId = Uuid;

/// Fixed priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Lowercase label used by forms and badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::UnknownPriority(raw.trim().to_string())),
        }
    }
}

/// A single actionable task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// May be empty.
    pub description: String,
    /// Calendar date only; serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    pub priority: Priority,
    /// Owning project. Kept in sync by the store on moves.
    pub project_id: ProjectId,
    pub is_complete: bool,
}

impl Todo {
    /// Creates an incomplete todo with a fresh id.
    ///
    /// Field values are stored as given; only blank titles are rejected.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: Priority,
        project_id: ProjectId,
    ) -> ValidationResult<Self> {
        let title = title.into();
        ensure_title(&title)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description: description.into(),
            due_date,
            priority,
            project_id,
            is_complete: false,
        })
    }

    /// Creates a todo from raw form strings.
    ///
    /// # Contract
    /// - Title and description are trimmed.
    /// - Due date must be `YYYY-MM-DD`; priority must be `low|medium|high`.
    pub fn from_form(
        title: &str,
        description: &str,
        due_date: &str,
        priority: &str,
        project_id: ProjectId,
    ) -> ValidationResult<Self> {
        let due_date = parse_due_date(due_date)?;
        let priority = priority.parse::<Priority>()?;
        Self::new(title.trim(), description.trim(), due_date, priority, project_id)
    }

    /// Flips completion state. Two calls restore the original value.
    pub fn toggle_complete(&mut self) {
        self.is_complete = !self.is_complete;
    }
}
