//! Shared utility functions for tree walking

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TwigError};

/// Resolve a target path to an absolute, readable directory.
///
/// Fails before anything is printed when the path is missing, is not a
/// directory, or cannot be listed.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let invalid = |reason: String| TwigError::InvalidTarget {
        path: path.to_path_buf(),
        reason,
    };

    let resolved = std::fs::canonicalize(path).map_err(|e| invalid(describe_io_error(&e)))?;
    if !resolved.is_dir() {
        return Err(invalid("Not a directory".to_string()));
    }
    std::fs::read_dir(&resolved).map_err(|e| invalid(describe_io_error(&e)))?;
    Ok(resolved)
}

fn describe_io_error(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "No such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => err.to_string(),
    }
}

/// Format a size in bytes using binary units (B, K, M, G).
///
/// Values of 1024 bytes and above carry one decimal place.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Suffix after the last `.` in a name, or the whole name when it has none.
///
/// Case is preserved.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Names starting with `.` are hidden.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
