//! Materializes the project skeleton on disk.
//!
//! Both entry points are safe to re-run: anything already present is
//! reported through the logger and skipped, and a file that already has
//! content is never rewritten.

use crate::{
    constants::{
        INIT_FILENAME, PYPROJECT_FILENAME, SETUP_PY_CONTENTS, SETUP_PY_FILENAME,
        SOURCE_DIR, TESTS_DIR,
    },
    error::{Error, Result},
    ioutils::{create_directory, create_file, write_contents},
    logger::Logger,
    metadata::{build_project_metadata, Author},
};
use std::path::{Path, PathBuf};

/// The fixed set of paths a project consists of, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub directories: Vec<PathBuf>,
    pub top_level_files: Vec<PathBuf>,
    pub init_files: Vec<PathBuf>,
}

impl ProjectLayout {
    pub fn new(project_name: &str, distributable: bool) -> Self {
        let package_dir = Path::new(SOURCE_DIR).join(project_name);
        let tests_dir = PathBuf::from(TESTS_DIR);

        let mut top_level_files = vec![PathBuf::from(PYPROJECT_FILENAME)];
        if distributable {
            top_level_files.push(PathBuf::from(SETUP_PY_FILENAME));
        }

        Self {
            init_files: vec![tests_dir.join(INIT_FILENAME), package_dir.join(INIT_FILENAME)],
            directories: vec![package_dir, tests_dir],
            top_level_files,
        }
    }

    /// All paths in creation order: directories, top-level files, init files.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.directories.iter().chain(&self.top_level_files).chain(&self.init_files)
    }
}

/// Turns an "already there" condition into a warning; every other error
/// is returned unchanged.
fn warn_on_skip(result: Result<()>, logger: &dyn Logger, what: &str, relative: &Path) -> Result<()> {
    match result {
        Err(Error::AlreadyExists { .. }) => {
            logger.warning(&format!("The {what} {} already exists.", relative.display()));
            Ok(())
        }
        Err(Error::NotEmpty { .. }) => {
            logger.warning(&format!(
                "The file {} is not empty. Do not write to file.",
                relative.display()
            ));
            Ok(())
        }
        other => other,
    }
}

/// Creates the directories and empty files of a project below `root`.
///
/// Existing entries are skipped with a warning, so calling this on a
/// partially created project completes it. Only unexpected I/O failures are
/// returned as errors.
pub fn layout_project(
    root: &Path,
    project_name: &str,
    distributable: bool,
    logger: &dyn Logger,
) -> Result<bool> {
    let layout = ProjectLayout::new(project_name, distributable);

    logger.info("Creating folders");
    for folder in &layout.directories {
        warn_on_skip(create_directory(root.join(folder)), logger, "folder", folder)?;
    }

    logger.info("Creating files");
    for file in &layout.top_level_files {
        warn_on_skip(create_file(root.join(file)), logger, "file", file)?;
    }

    logger.info("Creating init-files");
    for init_file in &layout.init_files {
        warn_on_skip(create_file(root.join(init_file)), logger, "file", init_file)?;
    }

    Ok(true)
}

/// Writes `contents` into `relative` below `root` unless the file already
/// holds something. A missing file is created first.
fn populate_file(
    root: &Path,
    relative: &Path,
    contents: &str,
    logger: &dyn Logger,
) -> Result<()> {
    let target = root.join(relative);
    if !target.exists() {
        create_file(&target)?;
    }
    logger.info(&format!("Writing to {}", relative.display()));
    warn_on_skip(write_contents(&target, contents), logger, "file", relative)
}

/// Fills `pyproject.toml` (and `setup.py` for distributable projects).
///
/// Files that already have content are left alone and reported as warnings.
pub fn write_project_config(
    root: &Path,
    project_name: &str,
    author: Option<&Author>,
    description: Option<&str>,
    distributable: bool,
    logger: &dyn Logger,
) -> Result<bool> {
    logger.info("Writing contents to files");

    let metadata = build_project_metadata(project_name, description, author);
    let pyproject = metadata.to_toml()?;
    log::trace!("Rendered {PYPROJECT_FILENAME}:\n{pyproject}");
    populate_file(root, Path::new(PYPROJECT_FILENAME), &pyproject, logger)?;

    if distributable {
        populate_file(root, Path::new(SETUP_PY_FILENAME), SETUP_PY_CONTENTS, logger)?;
    }

    Ok(true)
}
