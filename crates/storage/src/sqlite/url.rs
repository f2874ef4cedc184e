use std::io;
use std::path::{Path, PathBuf};

/// Database used by the binaries when neither a flag nor `TRACKER_DB_URL` names one.
pub const DEFAULT_DB_URL: &str = "sqlite://dev.sqlite3";

const MEMORY_URL: &str = "sqlite::memory:";

/// Rewrites a `SQLite` URL or bare path into an absolute `sqlite://` URL.
///
/// `sqlite:dev.sqlite3`, `dev.sqlite3` and `sqlite://dev.sqlite3` all name the
/// same file, resolved against the current directory.
#[must_use]
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == MEMORY_URL {
        return trimmed.to_string();
    }

    let rest = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let path = Path::new(path);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    match query {
        Some(query) => format!("sqlite://{}?{query}", absolute.display()),
        None => format!("sqlite://{}", absolute.display()),
    }
}

/// Creates the parent directory of a file-backed database URL.
///
/// The database file itself is created on connect.
///
/// # Errors
///
/// Returns the I/O error from creating the directory.
pub fn prepare_sqlite_dir(db_url: &str) -> io::Result<()> {
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
