//! Capability-scoped file reads and atomic fixture writes.
//!
//! Writes go to a hidden temporary file beside the target, which is synced
//! and then renamed over it, so an interrupted run never leaves a truncated
//! fixture behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::EtlError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Parent directory and file name of `path`.
fn split(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    let file_name = path.file_name()?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Some((parent, file_name))
}

/// Read `path` to a string.
///
/// # Errors
///
/// Returns [`EtlError::Read`] when the file or its directory cannot be
/// opened or read.
pub(crate) fn read_to_string(path: &Utf8Path) -> Result<String, EtlError> {
    let read_error = |err: io::Error| EtlError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let (parent, file_name) = split(path).ok_or_else(|| EtlError::Read {
        path: path.to_path_buf(),
        message: "path must name a file".to_owned(),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(file_name).map_err(read_error)
}

/// Replace `path` with `contents` atomically.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`EtlError::OutputPath`] when `path` does not name a file and
/// [`EtlError::Write`] when any filesystem step fails.
pub(crate) fn write_atomic(path: &Utf8Path, contents: &str) -> Result<(), EtlError> {
    let (parent, file_name) = split(path).ok_or_else(|| EtlError::OutputPath {
        path: path.to_path_buf(),
    })?;
    let write_error = |err: io::Error| EtlError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(write_error)?;

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id());

    if let Err(err) = write_temp(&dir, &tmp_name, contents) {
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(err));
    }
    if let Err(err) = dir.rename(&tmp_name, &dir, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(err));
    }
    // Directory sync is best effort; not every platform supports it.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
