use jot_core::{handle, respond, CommandError, Outcome, ParseError, Storage, TaskList, FAREWELL};
use tempfile::TempDir;

struct Session {
    _dir: TempDir,
    storage: Storage,
    list: TaskList,
}

impl Session {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("tasks.txt"));
        Self {
            _dir: dir,
            storage,
            list: TaskList::new(),
        }
    }

    fn run(&mut self, line: &str) -> Outcome {
        respond(line, &mut self.list, &self.storage).unwrap()
    }
}

#[test]
fn add_and_list_shows_one_unchecked_entry() {
    let mut session = Session::new();

    let added = session.run("todo read book");
    assert!(added.message().contains("Got it. I've added this task:"));
    assert!(added.message().contains("Now you have 1 task in your list."));

    let listed = session.run("list");
    assert_eq!(
        listed.message(),
        "Here are the tasks in your list:\n1. [ ] read book"
    );
}

#[test]
fn deadline_lifecycle_survives_done_and_reload() {
    let mut session = Session::new();

    session.run("deadline return book /by 10/03/2020 1800");
    let done = session.run("done 1");
    assert!(done.message().contains("[X] return book"));

    let listed = session.run("list");
    assert!(listed.message().contains("[X] return book"));

    // Reload from disk: same entry, same completion, same date.
    let reloaded = session.storage.load().unwrap();
    assert_eq!(reloaded, session.list);
    let task = reloaded.get(0).unwrap();
    assert_eq!(task.type_tag(), 'D');
    assert!(task.is_complete());
    assert_eq!(
        task.when().map(|when| jot_core::format_stored_date(&when)),
        Some("10/03/2020 1800".to_string())
    );
}

#[test]
fn done_on_a_done_task_toggles_it_back() {
    let mut session = Session::new();

    session.run("todo read book");
    session.run("done 1");
    session.run("done 1");

    assert!(!session.list.get(0).unwrap().is_complete());
}

#[test]
fn delete_shifts_later_positions() {
    let mut session = Session::new();

    session.run("todo A");
    session.run("todo B");
    session.run("todo C");

    let first = session.run("delete 2");
    assert!(first.message().contains("[ ] B"));
    assert!(first.message().contains("Now you have 2 tasks in your list."));

    let second = session.run("delete 2");
    assert!(second.message().contains("[ ] C"));
    assert_eq!(session.list.get(0).unwrap().name(), "A");
}

#[test]
fn unknown_command_fails_and_leaves_the_list_unchanged() {
    let mut session = Session::new();
    session.run("todo read book");

    let err = handle("foo", &mut session.list, &session.storage).unwrap_err();
    assert!(matches!(err, CommandError::UnknownCommand(ref word) if word == "foo"));
    assert_eq!(session.list.len(), 1);

    // respond() turns the same failure into a message for the front end.
    let outcome = session.run("foo");
    assert_eq!(outcome.message(), "I don't know what `foo` means.");
}

#[test]
fn argument_failures_are_reported_without_mutating() {
    let mut session = Session::new();

    let err = handle("todo", &mut session.list, &session.storage).unwrap_err();
    assert!(matches!(err, CommandError::Parse(ParseError::MissingName)));

    let err = handle("deadline return book", &mut session.list, &session.storage).unwrap_err();
    assert!(matches!(err, CommandError::Parse(ParseError::MissingDate)));

    let err = handle(
        "deadline return book /by 32/01/2024 0900",
        &mut session.list,
        &session.storage,
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::Parse(ParseError::InvalidDate(_))));

    assert!(session.list.is_empty());
    // Nothing was persisted either: no mutation, no save.
    assert!(!session.storage.path().exists());
}

#[test]
fn done_and_delete_out_of_range_are_reported() {
    let mut session = Session::new();
    session.run("todo read book");

    let err = handle("done 2", &mut session.list, &session.storage).unwrap_err();
    assert!(matches!(err, CommandError::List(_)));

    let err = handle("delete 0", &mut session.list, &session.storage).unwrap_err();
    assert!(matches!(err, CommandError::List(_)));

    assert_eq!(session.list.len(), 1);
    assert!(!session.list.get(0).unwrap().is_complete());
}

#[test]
fn every_mutation_is_persisted_before_the_response() {
    let mut session = Session::new();

    session.run("todo read book");
    assert_eq!(session.storage.load().unwrap(), session.list);

    session.run("done 1");
    assert_eq!(session.storage.load().unwrap(), session.list);

    session.run("delete 1");
    assert_eq!(session.storage.load().unwrap(), session.list);
    assert!(session.list.is_empty());
}

#[test]
fn bye_signals_session_exit() {
    let mut session = Session::new();

    let outcome = session.run("bye");
    assert_eq!(outcome, Outcome::Exit(FAREWELL.to_string()));
}

#[test]
fn event_command_uses_the_at_keyword_grammar() {
    let mut session = Session::new();

    let outcome = session.run("event book fair /at 31/12/2021 2359");
    assert!(outcome.message().contains("Got it. I've added this task:"));

    let task = session.list.get(0).unwrap();
    assert_eq!(task.type_tag(), 'E');
    // Name is preserved verbatim, including the space before the slash.
    assert_eq!(task.name(), "book fair ");
}
