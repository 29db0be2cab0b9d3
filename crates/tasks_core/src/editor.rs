use crate::error::AppError;
use crate::model::Task;
use std::path::Path;
use std::process::{Command, Stdio};

const DESCRIPTION_FIELD: &str = "Description";

/// Text block staged in the scratch file. Lines starting with `#` are
/// ignored on the way back in.
pub fn render_template(task: &Task, position: i64) -> String {
    format!(
        "\n# UUID:\t{}\n# ID:\t{}\n  {}: {}\n",
        task.id, position, DESCRIPTION_FIELD, task.description
    )
}

/// Stage the template in the scratch file, hand the file to the editor, and
/// return the file's content after the editor exits. The scratch file is
/// overwritten on the way in and left behind afterward.
pub fn run(editor: &str, scratch: &Path, template: &str) -> Result<String, AppError> {
    std::fs::write(scratch, template).map_err(|err| AppError::io(err.to_string()))?;
    spawn_editor(editor, scratch)?;
    std::fs::read_to_string(scratch).map_err(|err| AppError::io(err.to_string()))
}

/// Block on the editor with the user's own terminal streams. A launch
/// failure or non-zero exit is fatal.
fn spawn_editor(editor: &str, scratch: &Path) -> Result<(), AppError> {
    let status = Command::new(editor)
        .arg(scratch)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| AppError::editor(format!("failed to launch {editor}: {err}")))?;

    if !status.success() {
        return Err(AppError::editor(format!("{editor} exited with {status}")));
    }

    Ok(())
}

/// Parse the edited scratch content. Blank lines and `#` comments are
/// skipped; every other line must be `Field: value` and the only legal field
/// is `Description`. Returns the new description, or None when it matches
/// `current`.
pub fn parse_description(content: &str, current: &str) -> Result<Option<String>, AppError> {
    let mut updated = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (field, value) = trimmed.split_once(':').ok_or_else(|| {
            AppError::invalid_data(format!("invalid field line: {trimmed}"))
        })?;
        if field != DESCRIPTION_FIELD {
            return Err(AppError::invalid_data(format!("unknown field: {field}")));
        }

        let value = value.trim();
        if value != current {
            updated = Some(value.to_string());
        }
    }

    Ok(updated)
}
