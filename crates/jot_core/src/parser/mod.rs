//! Staged command-input parsing.
//!
//! # Responsibility
//! - Split a raw input line into a command word and argument remainder.
//! - Split task-creation payloads into name and date substrings.
//! - Parse 1-based user numbers into 0-based list positions.
//!
//! # Invariants
//! - Each stage fails with a specific, user-actionable error rather than a
//!   generic parse failure.
//! - The task name is preserved verbatim from the payload split, including
//!   surrounding whitespace.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod date;

pub type ParseResult<T> = Result<T, ParseError>;

/// Input validation failure. All variants are recoverable; the session
/// reports them and keeps accepting commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input line had no tokens.
    EmptyCommand,
    /// A task-creation command arrived without any payload.
    MissingName,
    /// A deadline/event payload had no `/`-separated date substring.
    MissingDate,
    /// The date substring did not parse or named an impossible date-time.
    InvalidDate(String),
    /// done/delete arrived without a number.
    MissingNumber,
    /// done/delete argument was not an integer.
    InvalidNumber(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "Please enter a command."),
            Self::MissingName => write!(f, "The task needs a name."),
            Self::MissingDate => write!(f, "The date cannot be empty."),
            Self::InvalidDate(reason) => write!(f, "Invalid date: {reason}"),
            Self::MissingNumber => write!(f, "No task number provided."),
            Self::InvalidNumber(token) => write!(f, "`{token}` is not a number."),
        }
    }
}

impl Error for ParseError {}

/// Name/date split of a task-creation payload.
///
/// `date` is everything after the first `/`, with the leading keyword
/// (`by`, `at`) still attached; the date stage discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPayload<'a> {
    pub name: &'a str,
    pub date: Option<&'a str>,
}

/// One parsed input line: command word plus optional argument remainder.
///
/// Transient by design; lives only while one line is being handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    command_word: String,
    arguments: Option<String>,
}

impl Parser {
    /// Splits `raw` into the first whitespace-delimited token and the
    /// remainder after it.
    ///
    /// # Errors
    /// - `ParseError::EmptyCommand` when the line has no tokens. An empty
    ///   remainder is not an error; it means "no arguments".
    pub fn new(raw: &str) -> ParseResult<Self> {
        let line = raw.trim_start();
        if line.is_empty() {
            return Err(ParseError::EmptyCommand);
        }
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) if !rest.is_empty() => (word, Some(rest.to_string())),
            Some((word, _)) => (word, None),
            None => (line, None),
        };
        Ok(Self {
            command_word: word.to_string(),
            arguments: rest,
        })
    }

    pub fn command_word(&self) -> &str {
        &self.command_word
    }

    pub fn arguments(&self) -> Option<&str> {
        self.arguments.as_deref()
    }

    /// Splits the arguments on the first `/` into task name and date
    /// substring. The name is kept verbatim, untrimmed.
    ///
    /// # Errors
    /// - `ParseError::MissingName` when there are no arguments at all.
    pub fn task_payload(&self) -> ParseResult<TaskPayload<'_>> {
        let args = self.arguments.as_deref().ok_or(ParseError::MissingName)?;
        match args.split_once('/') {
            Some((name, date)) => Ok(TaskPayload {
                name,
                date: Some(date),
            }),
            None => Ok(TaskPayload {
                name: args,
                date: None,
            }),
        }
    }

    /// Parses the argument as a 1-based task number and returns the
    /// 0-based position. The result can be negative (input `0`); the list
    /// bounds check rejects it there.
    ///
    /// # Errors
    /// - `ParseError::MissingNumber` when there are no arguments.
    /// - `ParseError::InvalidNumber` when the argument is not an integer.
    pub fn index(&self) -> ParseResult<i64> {
        let args = self.arguments.as_deref().ok_or(ParseError::MissingNumber)?;
        let number: i64 = args
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidNumber(args.trim().to_string()))?;
        Ok(number - 1)
    }
}
