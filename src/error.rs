use crate::constants::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A file or directory from the manifest is already on disk.
    #[error("The path '{}' already exists.", path.display())]
    AlreadyExists { path: PathBuf },

    /// The target file has content and must not be overwritten.
    #[error("The file '{}' is not empty. Refusing to overwrite it.", path.display())]
    NotEmpty { path: PathBuf },

    #[error("Failed to serialize configuration. Original error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Failed to read user input. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with pystrap's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(err, Error::IoError(_)));
        assert_eq!(err.to_string(), "IO error: disk full.");
    }

    #[test]
    fn messages_name_the_path() {
        let err = Error::NotEmpty { path: PathBuf::from("pyproject.toml") };
        assert_eq!(
            err.to_string(),
            "The file 'pyproject.toml' is not empty. Refusing to overwrite it."
        );
        let err = Error::AlreadyExists { path: PathBuf::from("src/demo") };
        assert_eq!(err.to_string(), "The path 'src/demo' already exists.");
    }
}
