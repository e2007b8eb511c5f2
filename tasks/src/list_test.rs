use super::*;
use crate::test_support::task;

fn abc() -> TaskList {
    TaskList::new(vec![task("a", "A"), task("b", "B"), task("c", "C")])
}

#[test]
fn created_task_is_prepended() {
    let mut list = TaskList::new(vec![task("a", "A"), task("b", "B")]);
    list.apply(TaskChange::Created(task("c", "C")));
    assert_eq!(list.ids(), vec!["c", "a", "b"]);
}

#[test]
fn updated_task_keeps_its_position_and_only_it_changes() {
    let mut list = abc();
    let mut b = task("b", "B");
    b.completed = true;
    list.apply(TaskChange::Updated(b.clone()));
    assert_eq!(list.ids(), vec!["a", "b", "c"]);
    assert_eq!(list.as_slice(), &[task("a", "A"), b, task("c", "C")]);
}

#[test]
fn update_uses_server_copy_wholesale() {
    let mut list = abc();
    let mut server = task("b", "Renamed");
    server.description = Some("from server".to_owned());
    list.apply(TaskChange::Updated(server.clone()));
    assert_eq!(list.get("b"), Some(&server));
}

#[test]
fn update_for_missing_task_is_ignored() {
    let mut list = abc();
    list.apply(TaskChange::Updated(task("zzz", "Ghost")));
    assert_eq!(list, abc());
}

#[test]
fn deleted_task_is_removed() {
    let mut list = abc();
    list.apply(TaskChange::Deleted("b".to_owned()));
    assert_eq!(list.ids(), vec!["a", "c"]);
}

#[test]
fn delete_then_late_update_does_not_resurrect() {
    let mut list = abc();
    list.apply(TaskChange::Deleted("b".to_owned()));
    list.apply(TaskChange::Updated(task("b", "B")));
    assert_eq!(list.ids(), vec!["a", "c"]);
}

#[test]
fn replaced_swaps_the_whole_sequence() {
    let mut list = abc();
    list.apply(TaskChange::Replaced(vec![task("x", "X")]));
    assert_eq!(list.ids(), vec!["x"]);
    list.apply(TaskChange::Replaced(Vec::new()));
    assert!(list.is_empty());
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(TaskList::default().count_label(), "Showing 0 tasks");
    assert_eq!(TaskList::new(vec![task("a", "A")]).count_label(), "Showing 1 task");
    assert_eq!(abc().count_label(), "Showing 3 tasks");
}

#[test]
fn update_keeps_length_and_marks_only_that_task() {
    let mut list = abc();
    let mut a = task("a", "A");
    a.completed = true;
    list.apply(TaskChange::Updated(a));
    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().filter(|t| t.completed).count(), 1);
}
