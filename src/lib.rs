/// Handles argument parsing and the top-level workflow.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Log sinks passed to the writer.
pub mod logger;

/// Assembly of the `pyproject.toml` record.
pub mod metadata;

/// User input and interaction handling.
pub mod prompt;

/// Answer validators
pub mod validation;

/// Creation of the project skeleton and its configuration files.
pub mod writer;
