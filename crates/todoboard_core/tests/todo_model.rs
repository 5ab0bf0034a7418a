use chrono::NaiveDate;
use todoboard_core::{parse_due_date, Priority, Project, Todo, ValidationError};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn todo_new_sets_defaults() {
    let project_id = Uuid::new_v4();
    let todo = Todo::new(
        "Write report",
        "",
        date(2024, 3, 15),
        Priority::High,
        project_id,
    )
    .unwrap();

    assert!(!todo.id.is_nil());
    assert_eq!(todo.title, "Write report");
    assert_eq!(todo.description, "");
    assert_eq!(todo.due_date, date(2024, 3, 15));
    assert_eq!(todo.priority, Priority::High);
    assert_eq!(todo.project_id, project_id);
    assert!(!todo.is_complete);
}

#[test]
fn todo_ids_are_unique_under_rapid_creation() {
    let project_id = Uuid::new_v4();
    let mut ids = std::collections::HashSet::new();
    for _ in 0..1_000 {
        let todo = Todo::new("t", "", date(2024, 1, 1), Priority::Low, project_id).unwrap();
        assert!(ids.insert(todo.id));
    }
}

#[test]
fn todo_new_rejects_blank_title() {
    let err = Todo::new("  ", "desc", date(2024, 3, 15), Priority::Low, Uuid::new_v4())
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyTitle);
}

#[test]
fn from_form_trims_and_parses_raw_values() {
    let project_id = Uuid::new_v4();
    let todo = Todo::from_form("  Buy milk ", " 2 litres ", "2024-03-16", "HIGH", project_id)
        .unwrap();

    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "2 litres");
    assert_eq!(todo.due_date, date(2024, 3, 16));
    assert_eq!(todo.priority, Priority::High);
}

#[test]
fn from_form_rejects_malformed_date_and_priority() {
    let project_id = Uuid::new_v4();

    let err = Todo::from_form("a", "", "next friday", "low", project_id).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidDueDate(_)));

    let err = Todo::from_form("a", "", "2024-03-16", "urgent", project_id).unwrap_err();
    assert_eq!(err, ValidationError::UnknownPriority("urgent".to_string()));
}

#[test]
fn toggle_complete_twice_restores_state() {
    let mut todo = Todo::new("t", "", date(2024, 3, 15), Priority::Medium, Uuid::new_v4())
        .unwrap();

    todo.toggle_complete();
    assert!(todo.is_complete);
    todo.toggle_complete();
    assert!(!todo.is_complete);
}

#[test]
fn project_keeps_insertion_order_and_ignores_missing_ids() {
    let mut project = Project::new("Work").unwrap();
    let first = Todo::new("first", "", date(2024, 3, 15), Priority::Low, project.id).unwrap();
    let second = Todo::new("second", "", date(2024, 3, 14), Priority::Low, project.id).unwrap();
    let (first_id, second_id) = (first.id, second.id);

    project.add_todo(first);
    project.add_todo(second);
    assert_eq!(project.len(), 2);
    assert_eq!(project.todos()[0].id, first_id);
    assert_eq!(project.todos()[1].id, second_id);

    assert!(project.remove_todo(Uuid::new_v4()).is_none());
    assert_eq!(project.len(), 2);

    let removed = project.remove_todo(first_id).unwrap();
    assert_eq!(removed.id, first_id);
    assert!(project.get_todo(first_id).is_none());
    assert_eq!(project.get_todo(second_id).unwrap().title, "second");
}

#[test]
fn project_new_rejects_blank_name() {
    assert_eq!(
        Project::new("   ").unwrap_err(),
        ValidationError::EmptyProjectName
    );
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let project_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let todo = Todo::new("Ship", "v1", date(2024, 3, 5), Priority::Medium, project_id).unwrap();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["due_date"], "2024-03-05");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["project_id"], project_id.to_string());
    assert_eq!(json["is_complete"], false);

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn parse_due_date_matches_form_format() {
    assert_eq!(parse_due_date("2024-03-15").unwrap(), date(2024, 3, 15));
    assert!(parse_due_date("15/03/2024").is_err());
}
