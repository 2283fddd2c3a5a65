//! Line-oriented front end for Jot.
//!
//! # Responsibility
//! - Own the session: load the task list at startup, feed each input line
//!   into dispatch, print the response, stop on `bye`.
//! - Decide the file paths the core treats as externally supplied.

use jot_core::{respond, Outcome, Storage, GREETING};
use std::io::{self, BufRead};

const DEFAULT_TASK_FILE: &str = "data/jot.txt";

fn main() {
    if let Err(err) = run() {
        eprintln!("jot: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TASK_FILE.to_string());

    if let Ok(log_dir) = std::env::var("JOT_LOG_DIR") {
        if let Err(err) = jot_core::init_logging(jot_core::default_log_level(), &log_dir) {
            eprintln!("jot: logging disabled: {err}");
        }
    }

    let storage = Storage::new(&path);
    let mut list = storage.load()?;

    println!("{GREETING}");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        // Whitespace-only lines are pre-filtered here; the parser would
        // report them as empty commands otherwise.
        if line.trim().is_empty() {
            continue;
        }
        match respond(&line, &mut list, &storage)? {
            Outcome::Continue(message) => println!("{message}"),
            Outcome::Exit(message) => {
                println!("{message}");
                break;
            }
        }
    }

    Ok(())
}
