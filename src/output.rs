//! Output file naming for rendered figures.

use crate::config::OutputConfig;
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extension of every rendered image.
pub const IMAGE_FORMAT: &str = "png";

/// Names a figure from a chrono template, stamped with the current local time.
///
/// `density_%Y%m%d` becomes e.g. `density_20240131.png`.
pub fn figure_filename(template: &str) -> String {
    format!("{}.{IMAGE_FORMAT}", Local::now().format(template))
}

/// Ensure the output directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> io::Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Resolves where a figure is written.
///
/// An explicit path wins (its parent directory is created if missing).
/// Otherwise the file is named from the configured template inside the
/// configured directory.
pub fn resolve_output_path(explicit: Option<&Path>, config: &OutputConfig) -> io::Result<PathBuf> {
    if let Some(path) = explicit {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory_exists(parent)?;
        }
        return Ok(path.to_path_buf());
    }

    let directory = ensure_directory_exists(&expand_tilde(&config.directory))?;
    Ok(directory.join(figure_filename(&config.filename_template)))
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
