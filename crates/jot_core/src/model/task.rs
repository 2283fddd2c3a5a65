//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by the parser, dispatch and codec layers.
//! - Provide completion lifecycle helpers.
//!
//! # Invariants
//! - `name` is immutable after construction.
//! - Only deadlines and events carry a date; todos never do.
//! - Completion is a toggle: two flips restore the original state.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Discriminates the three task kinds and carries kind-specific data.
///
/// Deadlines and events hold a wall-clock date-time with no timezone; the
/// command grammar has no way to express one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain task with no schedule.
    Todo,
    /// Task due by a point in time.
    Deadline { when: NaiveDateTime },
    /// Task happening at a point in time.
    Event { when: NaiveDateTime },
}

/// A single tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    name: String,
    is_complete: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates an unscheduled todo. New tasks start incomplete.
    pub fn todo(name: impl Into<String>) -> Self {
        Self::with_kind(name, TaskKind::Todo)
    }

    /// Creates a deadline due at `when`.
    pub fn deadline(name: impl Into<String>, when: NaiveDateTime) -> Self {
        Self::with_kind(name, TaskKind::Deadline { when })
    }

    /// Creates an event happening at `when`.
    pub fn event(name: impl Into<String>, when: NaiveDateTime) -> Self {
        Self::with_kind(name, TaskKind::Event { when })
    }

    fn with_kind(name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            is_complete: false,
            kind,
        }
    }

    /// Task name exactly as it was captured from input.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Flips completion state.
    ///
    /// This is deliberately a toggle, not a one-way set: marking an
    /// already-complete task flips it back to incomplete.
    pub fn toggle_done(&mut self) {
        self.is_complete = !self.is_complete;
    }

    /// One-character kind discriminant used by display and the stored format.
    pub fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Scheduled date-time, when this kind carries one.
    pub fn when(&self) -> Option<NaiveDateTime> {
        match self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { when } | TaskKind::Event { when } => Some(when),
        }
    }
}

impl Display for Task {
    /// Renders `[X] name` when complete, `[ ] name` otherwise.
    ///
    /// The date is not part of this rendering; it only appears in the
    /// stored format.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}",
            if self.is_complete { 'X' } else { ' ' },
            self.name
        )
    }
}
