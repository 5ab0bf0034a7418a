//! View selection and per-item display flags.
//!
//! # Responsibility
//! - Decide which todos a view shows and in what order.
//! - Derive titles, subtitles, nav counts and overdue/today flags.
//!
//! # Invariants
//! - Pure: reads a store snapshot and an injected `now`, never the clock.
//! - Results follow `TaskStore::all_todos` order (project order for
//!   the project view).
//! - An empty result is a normal outcome, not an error.

use crate::model::project::ProjectId;
use crate::model::todo::{Priority, Todo, TodoId};
use crate::service::task_store::TaskStore;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Length of the upcoming window.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

const TODAY_SUBTITLE_FORMAT: &str = "%A, %B %-d";
const DUE_LABEL_FORMAT: &str = "%b %-d";

/// Named selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Today,
    Upcoming,
    /// The store's current project.
    Project,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Project => "project",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized view names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl Display for UnknownView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown view `{}`; expected today|upcoming|project", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "project" => Ok(Self::Project),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// Sidebar counts, independent of the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavCounts {
    pub today: usize,
    pub upcoming: usize,
}

/// Display projection of one todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItemView {
    pub id: TodoId,
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    /// Short label such as `Mar 15`.
    pub due_label: String,
    pub priority: Priority,
    pub is_complete: bool,
    pub is_overdue: bool,
    pub is_today: bool,
}

/// Everything the presentation layer needs to draw one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedView {
    pub view: View,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<TodoItemView>,
    pub counts: NavCounts,
}

impl ResolvedView {
    /// `true` when the presentation layer should show its placeholder.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Resolves `view` against the store at instant `now`.
pub fn resolve_view(store: &TaskStore, view: View, now: NaiveDateTime) -> ResolvedView {
    let (title, subtitle, todos): (String, String, Vec<&Todo>) = match view {
        View::Today => (
            "Today".to_string(),
            now.format(TODAY_SUBTITLE_FORMAT).to_string(),
            store
                .all_todos()
                .filter(|todo| is_due_today(todo.due_date, now))
                .collect(),
        ),
        View::Upcoming => (
            "Upcoming".to_string(),
            "Next 7 Days".to_string(),
            store
                .all_todos()
                .filter(|todo| is_upcoming(todo.due_date, now))
                .collect(),
        ),
        View::Project => {
            let project = store.current_project();
            (
                project.name().to_string(),
                format!("{} tasks", project.len()),
                project.todos().iter().collect(),
            )
        }
    };

    ResolvedView {
        view,
        title,
        subtitle,
        items: todos
            .into_iter()
            .map(|todo| to_item_view(todo, now))
            .collect(),
        counts: nav_counts(store, now),
    }
}

/// Today/Upcoming counts over every todo in the store.
pub fn nav_counts(store: &TaskStore, now: NaiveDateTime) -> NavCounts {
    store
        .all_todos()
        .fold(NavCounts::default(), |mut counts, todo| {
            if is_due_today(todo.due_date, now) {
                counts.today += 1;
            }
            if is_upcoming(todo.due_date, now) {
                counts.upcoming += 1;
            }
            counts
        })
}

/// Calendar-day equality with `now`.
pub fn is_due_today(due_date: NaiveDate, now: NaiveDateTime) -> bool {
    due_date == now.date()
}

/// `due > now && due <= now + 7 days`, with `due` taken at midnight.
///
/// Midnight of `due` is after `now` exactly when `due` is a later calendar
/// day, and at or before `now + 7 days` exactly when it is not later than
/// that instant's date, so the comparison reduces to dates.
pub fn is_upcoming(due_date: NaiveDate, now: NaiveDateTime) -> bool {
    let Some(horizon) = now.checked_add_signed(Duration::days(UPCOMING_WINDOW_DAYS)) else {
        return false;
    };
    // Why: comparing dates rather than instants keeps the window stable for
    // the whole day; a due date is never upcoming and due today at once.
    due_date > now.date() && due_date <= horizon.date()
}

/// Strictly before today and still open.
pub fn is_overdue(todo: &Todo, now: NaiveDateTime) -> bool {
    !todo.is_complete && todo.due_date < now.date()
}

fn to_item_view(todo: &Todo, now: NaiveDateTime) -> TodoItemView {
    TodoItemView {
        id: todo.id,
        project_id: todo.project_id,
        title: todo.title.clone(),
        description: todo.description.clone(),
        due_date: todo.due_date,
        due_label: todo.due_date.format(DUE_LABEL_FORMAT).to_string(),
        priority: todo.priority,
        is_complete: todo.is_complete,
        is_overdue: is_overdue(todo, now),
        is_today: is_due_today(todo.due_date, now),
    }
}
