use crate::error::{Error, Result};

/// Loose format check for an email address: there must be an `@`, and the
/// part after the first `@` must contain a `.`.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((_, domain)) => domain.split('@').next().is_some_and(|d| d.contains('.')),
        None => false,
    }
}

/// Same check as [`is_valid_email`], reported as an error.
pub fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(Error::ValidationError(format!("'{email}' is not a valid email address")))
    }
}

/// Rejects project names that cannot be used as a directory name.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("project name must not be empty".to_string()));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::ValidationError(format!(
            "project name '{name}' must be a single path component"
        )));
    }
    Ok(())
}
