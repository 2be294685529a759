use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::report::errors::ReportError;
use crate::report::render::render_file_contents;
use crate::solver::SearchResult;

pub const FILE_EXTENSION: &str = ".txt";

/// Trims the name and checks it ends in `.txt` with a non-empty stem.
///
/// # Errors
///
/// Returns `ReportError::InvalidFileName` otherwise.
pub fn validate_file_name(raw: &str) -> Result<PathBuf, ReportError> {
    let name = raw.trim();
    match name.strip_suffix(FILE_EXTENSION) {
        Some(stem) if !stem.is_empty() && !stem.ends_with(['/', '\\']) => Ok(PathBuf::from(name)),
        _ => {
            warn!("Rejecting file name '{}'", name);
            Err(ReportError::InvalidFileName(name.to_string()))
        }
    }
}

/// Writes the solution count and every solution to `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Returns `ReportError::Io` if the file cannot be written. The result is
/// left untouched so the caller can retry.
pub fn save_solutions(path: &Path, result: &SearchResult) -> Result<(), ReportError> {
    fs::write(path, render_file_contents(result)).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Saved {} solution(s) to {}",
        result.solution_count(),
        path.display()
    );
    Ok(())
}
