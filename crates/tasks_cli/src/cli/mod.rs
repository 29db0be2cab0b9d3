use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tasks", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: tasks add Buy milk
    Add {
        text: Vec<String>,
    },
    /// List incomplete tasks
    ///
    /// Example: tasks list
    List,
    /// List completed tasks
    ///
    /// Example: tasks completed
    Completed,
    /// Mark the task at a position as done
    ///
    /// Example: tasks done 1
    Done {
        id: i64,
    },
    /// Delete the task at a position
    ///
    /// Example: tasks delete 1
    Delete {
        id: i64,
    },
    /// Edit the task at a position in your editor
    ///
    /// Example: tasks edit 1
    Edit {
        id: i64,
    },
    /// Append text to a task's description
    ///
    /// Example: tasks append 1 before noon
    Append {
        id: i64,
        text: Vec<String>,
    },
    /// Prepend text to a task's description
    ///
    /// Example: tasks prepend 1 urgent
    Prepend {
        id: i64,
        text: Vec<String>,
    },
    /// Print every task as indented JSON
    ///
    /// Example: tasks export
    Export,
    /// Push every task to the sync endpoint
    ///
    /// Example: tasks sync
    Sync,
}

/// Rewrite the alternate `tasks <ID> <VERB> ...` form into the verb-first
/// form the parser understands. Non-numeric first arguments pass through
/// untouched; a bare numeric argument has no verb to dispatch.
pub fn rewrite_leading_id(args: Vec<String>) -> Result<Vec<String>, String> {
    if args.len() < 2 || args[1].parse::<i64>().is_err() {
        return Ok(args);
    }

    if args.len() < 3 {
        return Err("usage: tasks <ID> <COMMAND>".to_string());
    }

    let mut rewritten = Vec::with_capacity(args.len());
    let mut args = args.into_iter();
    rewritten.push(args.next().expect("argv[0]"));
    let id = args.next().expect("leading id");
    rewritten.push(args.next().expect("verb"));
    rewritten.push(id);
    rewritten.extend(args);

    Ok(rewritten)
}
