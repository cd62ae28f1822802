//! Path resolution for the soporte database.
//!
//! XDG-compliant: `$XDG_DATA_HOME/soporte/`, falling back to
//! `$HOME/.local/share/soporte/`.

use std::env;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

const APP_DIR: &str = "soporte";
const DB_FILE: &str = "soporte.db";

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Cannot locate a data directory: neither XDG_DATA_HOME nor HOME is set")]
    #[diagnostic(
        code(soporte::paths::no_data_dir),
        help("Pass --db <path> or set SOPORTE_DB")
    )]
    NoDataDir,
}

/// Get the XDG data directory for soporte.
pub fn get_data_dir() -> Result<PathBuf, PathError> {
    let data_home = env::var_os("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var_os("HOME")
                .filter(|v| !v.is_empty())
                .map(|home| PathBuf::from(home).join(".local/share"))
        })
        .ok_or(PathError::NoDataDir)?;

    Ok(data_home.join(APP_DIR))
}

/// Default database file path (data_dir/soporte.db).
pub fn get_db_path() -> Result<PathBuf, PathError> {
    Ok(get_data_dir()?.join(DB_FILE))
}

/// Resolve the database path: an explicit path wins, otherwise the XDG default.
///
/// The CLI fills `explicit` from `--db` or `SOPORTE_DB`.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> Result<PathBuf, PathError> {
    match explicit {
        Some(path) => Ok(path),
        None => get_db_path(),
    }
}
