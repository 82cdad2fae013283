//! Plan file persistence.
//!
//! Reads and writes run on the blocking thread pool so callers on an async
//! runtime are never blocked by file IO. Without a path, plans live at
//! `$XDG_DATA_HOME/planline/plan.json` (`~/.local/share/planline/plan.json`).

use std::path::{Path, PathBuf};

use jiff::{civil::Date, Timestamp};
use log::debug;
use tokio::task;

use crate::{
    document::{self, PlanPatch},
    error::{IoResultExt, PlanlineError, Result},
    models::Plan,
};

/// Returns the default plan file path, creating its directory.
pub fn default_plan_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("planline")
        .place_data_file("plan.json")
        .map_err(|e| PlanlineError::XdgDirectory(e.to_string()))
}

/// Whether a plan file exists at `path`.
pub async fn exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref().to_path_buf();
    task::spawn_blocking(move || path.try_exists().with_path(&path))
        .await
        .map_err(join_error)?
}

/// Reads `path` into a patch without applying it.
///
/// # Errors
///
/// Returns `PlanlineError::FileSystem` if the file cannot be read and
/// `PlanlineError::InvalidFormat` if it is not a JSON object.
pub async fn load_patch(path: impl AsRef<Path>) -> Result<PlanPatch> {
    let path = path.as_ref().to_path_buf();
    task::spawn_blocking(move || {
        let text = std::fs::read_to_string(&path).with_path(&path)?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        document::deserialize(&text)
    })
    .await
    .map_err(join_error)?
}

/// Writes `plan` to `path`, stamped with the current time.
///
/// Parent directories are created as needed. Returns the save timestamp.
pub async fn save(path: impl AsRef<Path>, plan: &Plan) -> Result<Timestamp> {
    let saved_at = Timestamp::now();
    let text = document::serialize(plan, saved_at)?;
    let path = path.as_ref().to_path_buf();

    task::spawn_blocking(move || {
        create_parent_dir(&path)?;
        std::fs::write(&path, text).with_path(&path)?;
        debug!("Saved plan to {}", path.display());
        Ok::<_, PlanlineError>(saved_at)
    })
    .await
    .map_err(join_error)?
}

/// Writes rendered output (SVG text) to `path`, creating parent directories.
pub async fn write_output(path: impl AsRef<Path>, contents: String) -> Result<()> {
    let path = path.as_ref().to_path_buf();
    task::spawn_blocking(move || {
        create_parent_dir(&path)?;
        std::fs::write(&path, contents).with_path(&path)
    })
    .await
    .map_err(join_error)?
}

/// Suggested download name for a plan: the name with every character
/// outside `[A-Za-z0-9]` replaced by `_`, then the date and extension,
/// e.g. `Q3_roadmap_2024-07-01.json`.
pub fn export_file_name(plan_name: &str, day: Date, extension: &str) -> String {
    let safe: String = plan_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let stem = if safe.is_empty() { "plan" } else { &safe };
    format!("{stem}_{day}.{extension}")
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).with_path(parent)
        }
        _ => Ok(()),
    }
}

fn join_error(e: task::JoinError) -> PlanlineError {
    PlanlineError::Configuration {
        message: format!("Task join error: {e}"),
    }
}
