use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Creates the directory at `path` together with any missing parents.
///
/// Returns [`Error::AlreadyExists`] when something is already at `path`.
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(Error::AlreadyExists { path: path.to_path_buf() });
    }
    log::debug!("Creating directory {}", path.display());
    std::fs::create_dir_all(path).map_err(Error::IoError)
}

/// Creates an empty file at `path`.
///
/// Missing parent directories are created first. The file itself is opened
/// with `create_new`, so an existing file is never truncated and is reported
/// as [`Error::AlreadyExists`].
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    log::debug!("Creating file {}", path.display());
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(Error::AlreadyExists { path: path.to_path_buf() })
        }
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Returns `true` if the file at `path` holds no content.
pub fn is_empty<P: AsRef<Path>>(path: P) -> Result<bool> {
    Ok(std::fs::metadata(path.as_ref())?.len() == 0)
}

/// Replaces the contents of an empty file.
///
/// A file that already has content is left untouched and
/// [`Error::NotEmpty`] is returned.
pub fn write_contents<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if !is_empty(path)? {
        return Err(Error::NotEmpty { path: path.to_path_buf() });
    }
    log::debug!("Writing {} bytes to {}", contents.len(), path.display());
    std::fs::write(path, contents).map_err(Error::IoError)
}
