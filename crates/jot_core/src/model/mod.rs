//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task record and its three kinds.
//! - Keep the ordered task list and its positional contract.
//!
//! # Invariants
//! - A task's kind determines whether it carries a date.
//! - List position is the only identifier; it shifts on removal.

pub mod list;
pub mod task;
