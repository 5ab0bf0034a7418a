use chrono::NaiveDate;
use todoboard_core::{Priority, ProjectId, StoreError, TaskStore, Todo, TodoId, TodoPatch};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn add(store: &mut TaskStore, project_id: ProjectId, title: &str) -> TodoId {
    let todo = Todo::new(title, "", date(2024, 3, 15), Priority::Medium, project_id).unwrap();
    store.add_todo(todo).unwrap()
}

fn summed_len(store: &TaskStore) -> usize {
    store.projects().iter().map(|project| project.len()).sum()
}

#[test]
fn create_then_lookup_returns_same_fields() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    let todo = Todo::new("Pay rent", "before noon", date(2024, 4, 1), Priority::High, inbox)
        .unwrap();
    let id = store.add_todo(todo).unwrap();

    let found = store.find_todo(id).unwrap();
    assert_eq!(found.title, "Pay rent");
    assert_eq!(found.description, "before noon");
    assert_eq!(found.due_date, date(2024, 4, 1));
    assert_eq!(found.priority, Priority::High);
    assert_eq!(found.project_id, inbox);
    assert!(!found.is_complete);
    assert_eq!(store.project_by_id(inbox).unwrap().get_todo(id), Some(found));
}

#[test]
fn add_todo_rejects_unknown_project_and_duplicates() {
    let mut store = TaskStore::new();
    let missing = Uuid::new_v4();
    let orphan = Todo::new("x", "", date(2024, 3, 15), Priority::Low, missing).unwrap();
    assert_eq!(
        store.add_todo(orphan).unwrap_err(),
        StoreError::ProjectNotFound(missing)
    );

    let inbox = store.current_project_id();
    let todo = Todo::new("y", "", date(2024, 3, 15), Priority::Low, inbox).unwrap();
    let copy = todo.clone();
    store.add_todo(todo).unwrap();
    assert_eq!(
        store.add_todo(copy.clone()).unwrap_err(),
        StoreError::DuplicateTodo(copy.id)
    );
    assert_eq!(store.todo_count(), 1);
}

#[test]
fn add_todo_rejects_title_blanked_after_construction() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    add(&mut store, inbox, "Existing");

    let mut todo = Todo::new("Valid", "", date(2024, 3, 15), Priority::Low, inbox).unwrap();
    todo.title = "   ".to_string();
    let id = todo.id;

    let err = store.add_todo(todo).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.find_todo(id).is_none());
    assert_eq!(store.todo_count(), 1);
    assert_eq!(summed_len(&store), 1);
}

#[test]
fn deleting_sole_project_is_rejected_without_changes() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    add(&mut store, inbox, "keep me");

    let err = store.delete_project(inbox).unwrap_err();
    assert_eq!(err, StoreError::LastProject(inbox));
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.current_project_id(), inbox);
    assert_eq!(store.todo_count(), 1);
}

#[test]
fn deleting_unknown_project_reports_not_found() {
    let mut store = TaskStore::new();
    store.add_project("Work").unwrap();
    let missing = Uuid::new_v4();

    assert_eq!(
        store.delete_project(missing).unwrap_err(),
        StoreError::ProjectNotFound(missing)
    );
    assert_eq!(store.projects().len(), 2);
}

#[test]
fn deleting_current_project_reassigns_and_cascades() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    let work = store.add_project("Work").unwrap().id;
    let errands = store.add_project("Errands").unwrap().id;
    add(&mut store, inbox, "inbox item");
    let doomed_a = add(&mut store, work, "work a");
    let doomed_b = add(&mut store, work, "work b");
    store.set_current_project(work).unwrap();

    let removed = store.delete_project(work).unwrap();
    assert_eq!(removed.len(), 2);

    assert_eq!(store.current_project_id(), inbox);
    assert!(store.project_by_id(work).is_none());
    assert!(store.project_by_id(errands).is_some());
    assert!(store.all_todos().all(|todo| todo.id != doomed_a && todo.id != doomed_b));
    assert_eq!(store.todo_count(), 1);
}

#[test]
fn deleting_non_current_project_keeps_selection() {
    let mut store = TaskStore::new();
    let work = store.add_project("Work").unwrap().id;
    let errands = store.add_project("Errands").unwrap().id;
    store.set_current_project(errands).unwrap();

    store.delete_project(work).unwrap();
    assert_eq!(store.current_project_id(), errands);
}

#[test]
fn set_current_project_rejects_unknown_id() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    let missing = Uuid::new_v4();

    assert_eq!(
        store.set_current_project(missing).unwrap_err(),
        StoreError::ProjectNotFound(missing)
    );
    assert_eq!(store.current_project_id(), inbox);
}

#[test]
fn rename_project_validates_name() {
    let mut store = TaskStore::new();
    let work = store.add_project("Work").unwrap().id;

    store.rename_project(work, "Day job").unwrap();
    assert_eq!(store.project_by_id(work).unwrap().name(), "Day job");

    let err = store.rename_project(work, " ").unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.project_by_id(work).unwrap().name(), "Day job");
}

#[test]
fn all_todos_follows_project_then_insertion_order() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    let work = store.add_project("Work").unwrap().id;
    let w1 = add(&mut store, work, "w1");
    let i1 = add(&mut store, inbox, "i1");
    let w2 = add(&mut store, work, "w2");

    let order: Vec<TodoId> = store.all_todos().map(|todo| todo.id).collect();
    assert_eq!(order, vec![i1, w1, w2]);
    assert_eq!(store.todo_count(), summed_len(&store));
}

#[test]
fn toggle_and_remove_route_through_owning_project() {
    let mut store = TaskStore::new();
    let work = store.add_project("Work").unwrap().id;
    let id = add(&mut store, work, "toggle me");

    assert!(store.toggle_todo(id).unwrap());
    assert!(store.find_todo(id).unwrap().is_complete);
    assert!(!store.toggle_todo(id).unwrap());

    let removed = store.remove_todo(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(store.remove_todo(id).is_none());
    assert_eq!(store.toggle_todo(id).unwrap_err(), StoreError::TodoNotFound(id));
}

#[test]
fn update_todo_in_place_keeps_position() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    let first = add(&mut store, inbox, "first");
    let second = add(&mut store, inbox, "second");

    let patch = TodoPatch {
        title: "first, edited".to_string(),
        description: "notes".to_string(),
        due_date: date(2024, 5, 1),
        priority: Priority::Low,
        project_id: inbox,
    };
    let edited = store.update_todo(first, patch).unwrap();
    assert_eq!(edited.title, "first, edited");
    assert_eq!(edited.priority, Priority::Low);

    let ids: Vec<TodoId> = store.current_project().todos().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn update_todo_moves_between_projects() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    let work = store.add_project("Work").unwrap().id;
    let existing = add(&mut store, work, "already here");
    let moving = add(&mut store, inbox, "moving");
    let total = store.todo_count();

    let patch = TodoPatch {
        title: "moving".to_string(),
        description: String::new(),
        due_date: date(2024, 3, 15),
        priority: Priority::Medium,
        project_id: work,
    };
    let moved = store.update_todo(moving, patch).unwrap();
    assert_eq!(moved.project_id, work);

    assert!(store.project_by_id(inbox).unwrap().get_todo(moving).is_none());
    let work_ids: Vec<TodoId> = store
        .project_by_id(work)
        .unwrap()
        .todos()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(work_ids, vec![existing, moving]);
    assert_eq!(store.todo_count(), total);
}

#[test]
fn failed_move_leaves_todo_in_place() {
    let mut store = TaskStore::new();
    let inbox = store.current_project_id();
    let id = add(&mut store, inbox, "stay");
    let missing = Uuid::new_v4();

    let patch = TodoPatch {
        title: "stay".to_string(),
        description: String::new(),
        due_date: date(2024, 3, 15),
        priority: Priority::Medium,
        project_id: missing,
    };
    assert_eq!(
        store.update_todo(id, patch.clone()).unwrap_err(),
        StoreError::ProjectNotFound(missing)
    );
    assert_eq!(store.find_todo(id).unwrap().project_id, inbox);

    let blank = TodoPatch {
        title: " ".to_string(),
        project_id: inbox,
        ..patch
    };
    assert!(matches!(
        store.update_todo(id, blank).unwrap_err(),
        StoreError::Validation(_)
    ));
    assert_eq!(store.find_todo(id).unwrap().title, "stay");
}
