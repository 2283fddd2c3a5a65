//! Core domain logic for Jot, a line-oriented personal task tracker.
//! This crate owns command parsing, the task model, dispatch, and the
//! flat-file storage codec; the front end only feeds it input lines and
//! prints the response strings it returns.

pub mod command;
pub mod logging;
pub mod model;
pub mod parser;
pub mod storage;

pub use command::{handle, respond, CommandError, CommandResult, Outcome, FAREWELL, GREETING};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListError, ListResult, TaskList};
pub use model::task::{Task, TaskKind};
pub use parser::date::{format_stored_date, parse_date_payload, parse_stored_date};
pub use parser::{ParseError, ParseResult, Parser, TaskPayload};
pub use storage::{Storage, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
