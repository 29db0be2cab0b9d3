use clap::{CommandFactory, Parser};
use tasks_cli::cli::{Cli, Command, rewrite_leading_id};
use tasks_core::error::AppError;
use tasks_core::model::Task;
use tasks_core::task_api::TaskRepository;
use tasks_core::{config, editor, sync};

fn print_listing(tasks: &[Task]) {
    for (index, task) in tasks.iter().enumerate() {
        println!("{} {}", index + 1, task.description);
    }
}

fn join_text(text: &[String], what: &str) -> Result<String, AppError> {
    let joined = text.join(" ");
    if joined.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{what} is required")));
    }
    Ok(joined)
}

/// done/delete address tasks by listing position; a stale or out-of-range
/// position is a plain user error, not a fault.
fn resolve_position(repo: &TaskRepository, id: i64) -> Result<Task, AppError> {
    repo.find_by_position(id).map_err(|err| match err {
        AppError::IndexOutOfBounds(_) => AppError::invalid_input("Invalid ID"),
        other => other,
    })
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn print_usage() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_command(cli: Cli, repo: &mut TaskRepository) -> Result<(), AppError> {
    match cli.command {
        Command::Add { text } => {
            let description = join_text(&text, "task text")?;
            repo.add(&description)?;
            println!("Added task: {description}");
            print_listing(&repo.list_incomplete()?);
        }
        Command::List => {
            print_listing(&repo.list_incomplete()?);
        }
        Command::Completed => {
            print_listing(&repo.list_completed()?);
        }
        Command::Done { id } => {
            let task = resolve_position(repo, id)?;
            repo.mark_done(&task.id)?;
            println!("Marked as done: {}", task.description);
        }
        Command::Delete { id } => {
            let task = resolve_position(repo, id)?;
            repo.delete(&task.id)?;
            println!("Deleted: {}", task.description);
        }
        Command::Edit { id } => {
            let task = repo.find_by_position(id)?;
            let template = editor::render_template(&task, id);
            println!("{template}");

            let content = editor::run(
                &config::editor_command(),
                &config::scratch_path(),
                &template,
            )?;
            match editor::parse_description(&content, &task.description)? {
                Some(description) => {
                    repo.update_description(&task.id, &description)?;
                    println!("Updated task: {description}");
                }
                None => println!("Nothing to update"),
            }
        }
        Command::Append { id, text } => {
            let text = join_text(&text, "append text")?;
            let task = repo.find_by_position(id)?;
            let description = format!("{} {}", task.description, text);
            repo.update_description(&task.id, &description)?;
            println!("Appending to task {id} '{description}'");
        }
        Command::Prepend { id, text } => {
            let text = join_text(&text, "prepend text")?;
            let task = repo.find_by_position(id)?;
            let description = format!("{} {}", text, task.description);
            repo.update_description(&task.id, &description)?;
            println!("Prepending to task {id} '{description}'");
        }
        Command::Export => {
            let tasks = repo.list_all()?;
            let rendered = serde_json::to_string_pretty(&tasks)
                .map_err(|err| AppError::invalid_data(err.to_string()))?;
            println!("{rendered}");
        }
        Command::Sync => {
            let tasks = repo.list_all()?;
            let envelope = sync::TaskEnvelope::from_tasks(&tasks)?;
            let body = sync::encode(&envelope)?;
            let response = sync::push(&config::sync_url(), &body)?;
            println!("Response body: {response}");
        }
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let argv = match rewrite_leading_id(args) {
        Ok(argv) => argv,
        Err(message) => {
            eprintln!("ERROR: {}", AppError::invalid_input(message));
            std::process::exit(1);
        }
    };

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => {
            if err.use_stderr() {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                std::process::exit(1);
            }
            // --help / --version render through clap's own printer
            err.print().ok();
            return;
        }
    };

    let mut repo = match TaskRepository::open(&config::db_path()) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli, &mut repo) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
