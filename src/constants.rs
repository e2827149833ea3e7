//! Constants used throughout pystrap

/// Name of the generated build configuration file
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Name of the legacy setuptools entry point, written for distributable packages
pub const SETUP_PY_FILENAME: &str = "setup.py";

/// Package marker file created in every manifest directory
pub const INIT_FILENAME: &str = "__init__.py";

/// Directory holding the package sources
pub const SOURCE_DIR: &str = "src";

/// Directory holding the test suite
pub const TESTS_DIR: &str = "tests";

/// Literal contents of `setup.py`
pub const SETUP_PY_CONTENTS: &str =
    "from setuptools import setup\n\nif __name__ == '__main__':\n    setup()";

/// Project metadata defaults
pub mod defaults {
    pub const DESCRIPTION: &str = "This project has been created with pystrap.";
    pub const VERSION: &str = "0.0.1";
    pub const REQUIRES_PYTHON: &str = ">=3.10";
    pub const PROJECT_NAME: &str = "example-project";
    pub const AUTHOR_NAME: &str = "John Doe";
    pub const AUTHOR_EMAIL: &str = "john.doe@example.com";
}

/// Build system table contents
pub mod build_system {
    pub const REQUIRES: &[&str] = &["setuptools>=42", "wheel"];
    pub const BUILD_BACKEND: &str = "setuptools.build_meta";
}

/// Suffix of the log file written by the file logger
pub const LOG_FILE_SUFFIX: &str = "_logfile.txt";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const INFO: u8 = 0;
    pub const DEBUG: u8 = 1;
    pub const TRACE: u8 = 2;
}
