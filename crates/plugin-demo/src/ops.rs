//! Native operations behind the dispatch table
//!
//! Each function queries live process state directly. Nothing is cached, so
//! every call reflects the environment, filesystem and working directory at
//! the moment it runs.

use std::{
    env,
    ffi::OsStr,
    fs::{File, OpenOptions},
    io::{self, Read},
    path::Path,
};

use crate::{
    TEST_MESSAGE,
    error::Result,
    value::{EnvironmentMap, FileContent, TimestampRecord},
};

/// Snapshot of every process environment variable
///
/// Entries are split on their first `=` by the platform listing; names or
/// values that are not valid UTF-8 are decoded lossily. A name listed twice
/// keeps its last value.
pub fn get_all_envs() -> EnvironmentMap {
    let mut envs = EnvironmentMap::new();
    for (name, value) in env::vars_os() {
        envs.insert(
            name.to_string_lossy().into_owned(),
            value.to_string_lossy().into_owned(),
        );
    }
    tracing::trace!(count = envs.len(), "collected environment");
    envs
}

/// Value of a single environment variable, empty when unset
pub fn get_env(name: &str) -> String {
    // Names the platform cannot represent are simply unbound.
    if name.is_empty() || name.contains(['=', '\0']) {
        return String::new();
    }

    env::var_os(OsStr::new(name))
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Contents of a regular file, `None` for anything that cannot be read as one
pub fn get_file(path: impl AsRef<Path>) -> Option<FileContent> {
    let path = path.as_ref();

    match read_regular_file(path) {
        Ok(Some(bytes)) => Some(FileContent::new(bytes)),
        Ok(None) => {
            tracing::debug!("Not a regular file: {}", path.display());
            None
        }
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}

/// Open once, then check and read through the same handle
fn read_regular_file(path: &Path) -> io::Result<Option<Vec<u8>>> {
    let mut file = open_for_read(path)?;
    let meta = file.metadata()?;
    if !meta.is_file() {
        return Ok(None);
    }

    let mut bytes = Vec::with_capacity(usize::try_from(meta.len()).unwrap_or(0));
    file.read_to_end(&mut bytes)?;
    Ok(Some(bytes))
}

// A FIFO would block the open itself until a writer shows up.
#[cfg(unix)]
fn open_for_read(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_read(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Current time with the fixed diagnostic label
pub fn test_record() -> TimestampRecord {
    TimestampRecord::now(TEST_MESSAGE)
}

/// Current time with an empty label
pub fn now() -> TimestampRecord {
    TimestampRecord::unlabeled()
}

/// Absolute path of the current working directory
pub fn pwd() -> Result<String> {
    let dir = env::current_dir()?;
    Ok(dir.to_string_lossy().into_owned())
}
