use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::store::TodoStore;
use crate::view::{self, Filter};

#[derive(Parser)]
#[command(name = "tudu")]
#[command(about = "A small terminal to-do list")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses separate dev config/data file)
    #[arg(long)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive TUI (default if no subcommand)
    Tui,
    /// Quickly add a new task
    Add {
        /// Task text
        text: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// Print the task list
    List {
        /// Which tasks to show: all, active or done
        #[arg(long, default_value = "all")]
        filter: String,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to parse date: {0}")]
    DateParseError(String),
    #[error("Unknown filter '{0}' (expected all, active or done)")]
    UnknownFilter(String),
}

/// Handle the add command
pub fn handle_add(text: String, due: Option<String>, store: &mut TodoStore) -> Result<(), CliError> {
    // Validate the due date before touching the list
    let due_date = if let Some(due_str) = due {
        crate::utils::parse_date(&due_str).map_err(|e| {
            CliError::DateParseError(format!("Invalid date format '{}': {}", due_str, e))
        })?;
        Some(due_str)
    } else {
        None
    };

    // Blank text is a silent no-op, same as in the TUI
    if let Some(id) = store.add(&text, due_date) {
        store.flush();
        println!("Task created (ID: {})", id);
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list(filter: &str, store: &TodoStore) -> Result<(), CliError> {
    let filter = parse_filter(filter)?;

    for todo in view::visible(store.todos(), filter) {
        let marker = if todo.done { "✓" } else { "○" };
        let due = todo
            .due_date
            .as_ref()
            .map(|d| format!(" [due {}]", d))
            .unwrap_or_default();
        println!("{} #{} {}{}", marker, todo.id, todo.text, due);
    }
    println!("{} remaining", view::remaining(store.todos()));

    Ok(())
}

fn parse_filter(s: &str) -> Result<Filter, CliError> {
    match s {
        "all" => Ok(Filter::All),
        "active" => Ok(Filter::Active),
        "done" => Ok(Filter::Done),
        other => Err(CliError::UnknownFilter(other.to_string())),
    }
}
