//! Input validation for raw collaborator values.
//!
//! # Responsibility
//! - Reject empty required fields before any entity is constructed.
//! - Parse form date strings into calendar dates.
//!
//! # Invariants
//! - A failed validation never produces a partially built entity.
//! - Accepted due dates are always real calendar dates.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire format of due dates, as produced by HTML date inputs.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

static DUE_DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid due date regex"));

/// Result type for model-level validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation failure for todo/project input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Todo title is blank after trim.
    EmptyTitle,
    /// Project name is blank after trim.
    EmptyProjectName,
    /// Due date is not a `YYYY-MM-DD` calendar date.
    InvalidDueDate(String),
    /// Priority is not one of the known levels.
    UnknownPriority(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title must not be blank"),
            Self::EmptyProjectName => write!(f, "project name must not be blank"),
            Self::InvalidDueDate(raw) => {
                write!(f, "invalid due date `{raw}`; expected YYYY-MM-DD")
            }
            Self::UnknownPriority(raw) => {
                write!(f, "unknown priority `{raw}`; expected low|medium|high")
            }
        }
    }
}

impl Error for ValidationError {}

/// Parses a raw due date string.
///
/// Surrounding whitespace is ignored. Both the shape and the calendar value
/// are checked, so `2024-02-30` is rejected.
pub fn parse_due_date(raw: &str) -> ValidationResult<NaiveDate> {
    let trimmed = raw.trim();
    if !DUE_DATE_SHAPE_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidDueDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDueDate(trimmed.to_string()))
}

pub(crate) fn ensure_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

pub(crate) fn ensure_project_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyProjectName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_project_name, ensure_title, parse_due_date, ValidationError};
    use chrono::NaiveDate;

    #[test]
    fn parse_due_date_accepts_iso_dates() {
        assert_eq!(
            parse_due_date(" 2024-03-15 ").expect("iso date should parse"),
            NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
        );
    }

    #[test]
    fn parse_due_date_rejects_impossible_calendar_days() {
        let err = parse_due_date("2024-02-30").expect_err("Feb 30 must be rejected");
        assert_eq!(err, ValidationError::InvalidDueDate("2024-02-30".to_string()));
    }

    #[test]
    fn parse_due_date_rejects_free_text_and_unpadded_values() {
        assert!(parse_due_date("tomorrow").is_err());
        assert!(parse_due_date("2024-3-5").is_err());
        assert!(parse_due_date("").is_err());
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(ensure_title("   "), Err(ValidationError::EmptyTitle));
        assert_eq!(ensure_project_name(""), Err(ValidationError::EmptyProjectName));
        assert!(ensure_title("ship it").is_ok());
    }
}
