//! File and directory helpers.
//!
//! Operations that target a missing file are no-ops rather than errors,
//! so callers can run them unconditionally during startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::FsError;
use crate::time::format_date;
use crate::validate::ensure;

/// Extension of `path`, taken from the last `.` anywhere in the path.
///
/// With `dotless` the leading dot is dropped. Returns `None` when the path
/// contains no dot.
pub fn extension(path: impl AsRef<Path>, dotless: bool) -> Option<String> {
    let path = path.as_ref().to_string_lossy();
    let start = path.rfind('.')?;
    let ext = if dotless { &path[start + 1..] } else { &path[start..] };
    Some(ext.to_string())
}

pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Create every missing parent directory of `target`.
pub fn create_parent(target: impl AsRef<Path>) -> Result<(), FsError> {
    let target = target.as_ref();
    let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| FsError::CreateParent {
        path: target.to_path_buf(),
        source,
    })?;
    debug!(dir = %parent.display(), "created parent directories");
    Ok(())
}

/// Rename `target` in place to `name`. Missing targets are ignored.
pub fn rename_index(target: impl AsRef<Path>, name: &str) -> Result<(), FsError> {
    let target = target.as_ref();
    ensure(!name.is_empty(), "The new file name cannot be empty")?;
    if !target.exists() {
        return Ok(());
    }
    if target.file_name().is_some_and(|current| current == name) {
        return Ok(());
    }
    move_path(target, &target.with_file_name(name))
}

/// Rename the directory containing `target` to `name`.
pub fn rename_parent(target: impl AsRef<Path>, name: &str) -> Result<(), FsError> {
    let target = target.as_ref();
    let parent = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| FsError::NoParent(target.to_path_buf()))?;
    rename_index(parent, name)
}

/// Move `target` to `location`, creating parents as needed. Missing
/// targets are ignored.
pub fn relocate_index(target: impl AsRef<Path>, location: impl AsRef<Path>) -> Result<(), FsError> {
    let (target, location) = (target.as_ref(), location.as_ref());
    if !target.exists() || target == location {
        return Ok(());
    }
    create_parent(location)?;
    move_path(target, location)
}

fn move_path(from: &Path, to: &Path) -> Result<(), FsError> {
    fs::rename(from, to).map_err(|source| FsError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    debug!(from = %from.display(), to = %to.display(), "moved");
    Ok(())
}

fn format_system_time(time: SystemTime) -> String {
    format_date(&DateTime::<Local>::from(time))
}

/// Creation date of `target`, formatted with the default date pattern.
pub fn created_date(target: impl AsRef<Path>) -> Result<String, FsError> {
    Ok(format_system_time(fs::metadata(target)?.created()?))
}

pub fn last_modified(target: impl AsRef<Path>) -> Result<String, FsError> {
    Ok(format_system_time(fs::metadata(target)?.modified()?))
}

pub fn last_accessed(target: impl AsRef<Path>) -> Result<String, FsError> {
    Ok(format_system_time(fs::metadata(target)?.accessed()?))
}

/// Write a bundled resource to disk.
///
/// When `location` is a directory the resource lands at `location/name`.
/// An existing file is left alone unless `replace` is set. Returns the
/// destination and whether it was written.
pub fn save_resource(
    location: impl AsRef<Path>,
    name: &str,
    contents: &[u8],
    replace: bool,
) -> Result<(PathBuf, bool), FsError> {
    ensure(
        !name.is_empty(),
        "Please specify a resource name, please make sure it exists.",
    )?;

    let location = location.as_ref();
    let destination = if location.is_dir() {
        location.join(name)
    } else {
        location.to_path_buf()
    };

    if destination.exists() && !replace {
        return Ok((destination, false));
    }

    create_parent(&destination)?;
    fs::write(&destination, contents)?;
    debug!(path = %destination.display(), bytes = contents.len(), "saved resource");
    Ok((destination, true))
}
