//! Command dispatch.
//!
//! # Responsibility
//! - Map a command word to its handler.
//! - Persist the list after every mutation, before the response is built.
//! - Convert recoverable failures to response strings at the dispatch
//!   boundary.
//!
//! # Invariants
//! - Mutating handlers save before returning; a failed parse never touches
//!   the list or the file.
//! - Storage I/O failures propagate to the caller instead of becoming a
//!   chat response.

use crate::model::list::{ListError, TaskList};
use crate::model::task::Task;
use crate::parser::date::parse_date_payload;
use crate::parser::{ParseError, Parser};
use crate::storage::{Storage, StorageError, StorageResult};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const GREETING: &str = "Hello, I'm Jot\nWhat can I do for you?";
pub const FAREWELL: &str = "Bye. Hope to see you again soon!";

pub type CommandResult<T> = Result<T, CommandError>;

/// Anything that can go wrong while handling one input line.
#[derive(Debug)]
pub enum CommandError {
    UnknownCommand(String),
    Parse(ParseError),
    List(ListError),
    Storage(StorageError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(word) => {
                write!(f, "I don't know what `{word}` means.")
            }
            Self::Parse(err) => write!(f, "{err}"),
            Self::List(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownCommand(_) => None,
            Self::Parse(err) => Some(err),
            Self::List(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<ListError> for CommandError {
    fn from(value: ListError) -> Self {
        Self::List(value)
    }
}

impl From<StorageError> for CommandError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// What the session should do after one handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the response and keep accepting commands.
    Continue(String),
    /// Print the farewell and stop; no further commands are processed.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }
}

/// Dispatches one input line against the session's list and storage.
pub fn handle(line: &str, list: &mut TaskList, storage: &Storage) -> CommandResult<Outcome> {
    let parser = Parser::new(line)?;
    debug!(
        "event=dispatch module=command word={} tasks={}",
        parser.command_word(),
        list.len()
    );
    let response = match parser.command_word() {
        "list" => list_tasks(list),
        "todo" => add_todo(&parser, list, storage)?,
        "deadline" => add_deadline(&parser, list, storage)?,
        "event" => add_event(&parser, list, storage)?,
        "done" => mark_done(&parser, list, storage)?,
        "delete" => delete_task(&parser, list, storage)?,
        "bye" => return Ok(Outcome::Exit(FAREWELL.to_string())),
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Outcome::Continue(response))
}

/// Like [`handle`], but converts recoverable failures into response
/// strings. Only storage errors still propagate.
pub fn respond(line: &str, list: &mut TaskList, storage: &Storage) -> StorageResult<Outcome> {
    match handle(line, list, storage) {
        Ok(outcome) => Ok(outcome),
        Err(CommandError::Storage(err)) => Err(err),
        Err(err) => Ok(Outcome::Continue(err.to_string())),
    }
}

fn list_tasks(list: &TaskList) -> String {
    let mut out = String::from("Here are the tasks in your list:");
    for (position, task) in list.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", position + 1, task));
    }
    out
}

fn add_todo(parser: &Parser, list: &mut TaskList, storage: &Storage) -> CommandResult<String> {
    let payload = parser.task_payload()?;
    add_task(Task::todo(payload.name), list, storage)
}

fn add_deadline(parser: &Parser, list: &mut TaskList, storage: &Storage) -> CommandResult<String> {
    let payload = parser.task_payload()?;
    let when = parse_date_payload(payload.date)?;
    add_task(Task::deadline(payload.name, when), list, storage)
}

fn add_event(parser: &Parser, list: &mut TaskList, storage: &Storage) -> CommandResult<String> {
    let payload = parser.task_payload()?;
    let when = parse_date_payload(payload.date)?;
    add_task(Task::event(payload.name, when), list, storage)
}

fn add_task(task: Task, list: &mut TaskList, storage: &Storage) -> CommandResult<String> {
    let rendered = task.to_string();
    let size = list.add(task);
    storage.save(list)?;
    Ok(format!(
        "Got it. I've added this task:\n{rendered}\nNow you have {size} {} in your list.",
        task_word(size)
    ))
}

fn mark_done(parser: &Parser, list: &mut TaskList, storage: &Storage) -> CommandResult<String> {
    let position = parser.index()?;
    let rendered = list.toggle_done_at(position)?.to_string();
    storage.save(list)?;
    Ok(format!("Nice! I've marked this task as done:\n{rendered}"))
}

fn delete_task(parser: &Parser, list: &mut TaskList, storage: &Storage) -> CommandResult<String> {
    let position = parser.index()?;
    let removed = list.remove_at(position)?;
    storage.save(list)?;
    Ok(format!(
        "Noted. I've removed this task:\n{removed}\nNow you have {} {} in your list.",
        list.len(),
        task_word(list.len())
    ))
}

fn task_word(size: usize) -> &'static str {
    if size == 1 {
        "task"
    } else {
        "tasks"
    }
}
