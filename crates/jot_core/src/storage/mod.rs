//! Flat-file persistence for the task list.
//!
//! # Responsibility
//! - Serialize the task list to a pipe-delimited, line-oriented text file.
//! - Reconstruct the task list from that file at startup.
//!
//! # Invariants
//! - One task per line, `TYPE|COMPLETE|NAME|DATE`, each line
//!   newline-terminated. `DATE` is `dd/MM/yyyy HHmm` or empty for todos.
//! - Every save rewrites the whole file; single process, single writer.
//! - Load splits each line into exactly 4 fields, preserving trailing
//!   empties, and rejects anything else as corrupt.
//! - A name containing `|` corrupts the field count on reload. Documented
//!   constraint on input; the codec does not police it.

use crate::model::list::TaskList;
use crate::model::task::Task;
use crate::parser::date::{format_stored_date, parse_stored_date};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence failure. `Io` is surfaced to the session caller; the other
/// variants mean the file is corrupt or was written by something else.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// A stored line carried a type tag outside {T, D, E}.
    UnknownTaskType { tag: String, line: usize },
    /// A stored line had the wrong field count or an unreadable field.
    InvalidRecord { line: usize, reason: String },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "task file error: {err}"),
            Self::UnknownTaskType { tag, line } => {
                write!(f, "line {line}: unknown task type `{tag}`")
            }
            Self::InvalidRecord { line, reason } => {
                write!(f, "line {line}: invalid task record: {reason}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::UnknownTaskType { .. } | Self::InvalidRecord { .. } => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Codec over one task file. The path is supplied externally.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the whole file from the current list state, creating the
    /// parent directory if absent.
    ///
    /// Not crash-safe: there is no temp-file-then-rename step, so a crash
    /// mid-write can truncate the file.
    pub fn save(&self, list: &TaskList) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut contents = String::new();
        for task in list.iter() {
            contents.push_str(&format_task(task));
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        info!(
            "event=store_save module=storage status=ok tasks={} path={}",
            list.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reconstructs the task list from the file. A missing or empty file
    /// is a valid zero-task store.
    pub fn load(&self) -> StorageResult<TaskList> {
        if !self.path.exists() {
            info!(
                "event=store_load module=storage status=ok tasks=0 path={} note=no_file",
                self.path.display()
            );
            return Ok(TaskList::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let mut list = TaskList::new();
        for (number, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match read_task(line, number + 1) {
                Ok(task) => {
                    list.add(task);
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=storage status=error line={} path={}",
                        number + 1,
                        self.path.display()
                    );
                    return Err(err);
                }
            }
        }
        info!(
            "event=store_load module=storage status=ok tasks={} path={}",
            list.len(),
            self.path.display()
        );
        Ok(list)
    }
}

/// Renders one task as a stored line (without the trailing newline).
fn format_task(task: &Task) -> String {
    let date = match task.when() {
        Some(when) => format_stored_date(&when),
        None => String::new(),
    };
    format!(
        "{}|{}|{}|{}",
        task.type_tag(),
        if task.is_complete() { '1' } else { '0' },
        task.name(),
        date
    )
}

/// Reconstructs one task from a stored line.
fn read_task(line: &str, number: usize) -> StorageResult<Task> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 4 {
        return Err(StorageError::InvalidRecord {
            line: number,
            reason: format!("expected 4 fields, found {}", fields.len()),
        });
    }

    let mut task = match fields[0] {
        "T" => Task::todo(fields[2]),
        "D" => Task::deadline(fields[2], read_date(fields[3], number)?),
        "E" => Task::event(fields[2], read_date(fields[3], number)?),
        other => {
            return Err(StorageError::UnknownTaskType {
                tag: other.to_string(),
                line: number,
            })
        }
    };

    match fields[1] {
        "0" => {}
        "1" => task.toggle_done(),
        other => {
            return Err(StorageError::InvalidRecord {
                line: number,
                reason: format!("completion flag must be 0 or 1, found `{other}`"),
            })
        }
    }

    Ok(task)
}

fn read_date(field: &str, number: usize) -> StorageResult<chrono::NaiveDateTime> {
    parse_stored_date(field).map_err(|err| StorageError::InvalidRecord {
        line: number,
        reason: err.to_string(),
    })
}
