//! Where the booking file lives.
//!
//! The file sits at `persistence/data/booking.json` under the project root,
//! which is the nearest ancestor directory named `booking`. An explicit path
//! from `BOOKING_DATA_FILE` wins over the lookup.

use std::path::{Path, PathBuf};

/// Environment variable holding an explicit data file path.
pub const DATA_FILE_ENV: &str = "BOOKING_DATA_FILE";

/// Directory name that marks the project root.
pub const PROJECT_DIR_NAME: &str = "booking";

/// Data file location relative to the project root.
pub const DATA_FILE_RELATIVE: &str = "persistence/data/booking.json";

/// Nearest ancestor of `start` (inclusive) whose final component is `name`.
pub fn find_project_root(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.file_name().is_some_and(|n| n == name))
        .map(Path::to_path_buf)
}

/// Resolve the data file for a process running in `cwd`.
///
/// Falls back to `<cwd>/data/booking.json` when no project root is found.
pub fn resolve_data_file(explicit: Option<PathBuf>, cwd: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    match find_project_root(cwd, PROJECT_DIR_NAME) {
        Some(root) => root.join(DATA_FILE_RELATIVE),
        None => cwd.join("data").join("booking.json"),
    }
}

/// `resolve_data_file` fed from the process environment.
pub fn data_file_from_env() -> std::io::Result<PathBuf> {
    let explicit = std::env::var_os(DATA_FILE_ENV).map(PathBuf::from);
    let cwd = std::env::current_dir()?;
    Ok(resolve_data_file(explicit, &cwd))
}
