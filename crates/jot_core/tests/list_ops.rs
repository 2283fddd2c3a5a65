use jot_core::{ListError, Task, TaskList};

fn list_of(names: &[&str]) -> TaskList {
    names.iter().map(|name| Task::todo(*name)).collect()
}

#[test]
fn add_appends_and_returns_new_size() {
    let mut list = TaskList::new();
    assert_eq!(list.add(Task::todo("a")), 1);
    assert_eq!(list.add(Task::todo("b")), 2);
    assert_eq!(list.get(1).unwrap().name(), "b");
}

#[test]
fn positional_ops_reject_out_of_range_positions() {
    let mut list = list_of(&["a"]);

    for pos in [-1, 1, 5] {
        assert_eq!(
            list.remove_at(pos).unwrap_err(),
            ListError::IndexOutOfRange { index: pos, len: 1 }
        );
        assert_eq!(
            list.toggle_done_at(pos).unwrap_err(),
            ListError::IndexOutOfRange { index: pos, len: 1 }
        );
        assert_eq!(
            list.get(pos).unwrap_err(),
            ListError::IndexOutOfRange { index: pos, len: 1 }
        );
    }
    assert_eq!(list.len(), 1);
}

#[test]
fn remove_decrements_size_and_returns_the_task() {
    let mut list = list_of(&["a", "b", "c"]);

    let removed = list.remove_at(1).unwrap();
    assert_eq!(removed.name(), "b");
    assert_eq!(list.len(), 2);
}

#[test]
fn remove_shifts_later_positions() {
    let mut list = list_of(&["A", "B", "C"]);

    assert_eq!(list.remove_at(1).unwrap().name(), "B");
    // The old position 1 now names what used to be at position 2.
    assert_eq!(list.remove_at(1).unwrap().name(), "C");
    assert_eq!(list.get(0).unwrap().name(), "A");
}

#[test]
fn toggle_never_changes_size() {
    let mut list = list_of(&["a", "b"]);

    assert!(list.toggle_done_at(0).unwrap().is_complete());
    assert_eq!(list.len(), 2);
    assert!(!list.toggle_done_at(0).unwrap().is_complete());
    assert_eq!(list.len(), 2);
}

#[test]
fn iter_is_in_insertion_order_and_restartable() {
    let list = list_of(&["a", "b", "c"]);

    let first: Vec<_> = list.iter().map(Task::name).collect();
    let second: Vec<_> = list.iter().map(Task::name).collect();
    assert_eq!(first, ["a", "b", "c"]);
    assert_eq!(first, second);
}
