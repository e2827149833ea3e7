//! In-memory representation of `pyproject.toml`.
//!
//! Everything here is pure: records are assembled from the user inputs with
//! defaults resolved in one place, then handed to the writer for
//! serialization.

use crate::constants::{build_system, defaults};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Name and email of a project author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }

    /// Builds an author, substituting the placeholder identity for missing
    /// or blank parts.
    pub fn with_placeholders(name: Option<String>, email: Option<String>) -> Self {
        Self {
            name: non_blank(name).unwrap_or_else(|| defaults::AUTHOR_NAME.to_string()),
            email: non_blank(email).unwrap_or_else(|| defaults::AUTHOR_EMAIL.to_string()),
        }
    }

    /// Builds an author from optional command line parts.
    ///
    /// Returns `None` when neither part was given; a single missing part is
    /// left empty.
    pub fn from_parts(name: Option<String>, email: Option<String>) -> Option<Self> {
        let name = non_blank(name);
        let email = non_blank(email);
        if name.is_none() && email.is_none() {
            return None;
        }
        Some(Self { name: name.unwrap_or_default(), email: email.unwrap_or_default() })
    }
}

/// Everything the writer needs, gathered either from the command line or
/// from the interactive prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInputs {
    pub project_name: String,
    pub author: Option<Author>,
    pub description: Option<String>,
    pub distributable: bool,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub description: String,
    pub version: String,
    pub authors: Vec<Author>,
    pub maintainers: Vec<Author>,
    #[serde(rename = "requires-python")]
    pub requires_python: String,
}

/// The `[build-system]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSystemSection {
    pub requires: Vec<String>,
    #[serde(rename = "build-backend")]
    pub build_backend: String,
}

/// Complete config record written to `pyproject.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub project: ProjectSection,
    #[serde(rename = "build-system")]
    pub build_system: BuildSystemSection,
}

impl ProjectMetadata {
    /// Serializes the record as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Assembles the metadata for a new project.
///
/// A missing or blank description becomes [`defaults::DESCRIPTION`]. A
/// missing author yields a single author entry with empty name and email.
pub fn build_project_metadata(
    project_name: &str,
    description: Option<&str>,
    author: Option<&Author>,
) -> ProjectMetadata {
    let description = description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(defaults::DESCRIPTION)
        .to_string();
    let author = author.cloned().unwrap_or_default();

    ProjectMetadata {
        project: ProjectSection {
            name: project_name.to_string(),
            description,
            version: defaults::VERSION.to_string(),
            authors: vec![author.clone()],
            maintainers: vec![author],
            requires_python: defaults::REQUIRES_PYTHON.to_string(),
        },
        build_system: build_build_system_section(),
    }
}

/// The fixed setuptools build-system table.
pub fn build_build_system_section() -> BuildSystemSection {
    BuildSystemSection {
        requires: build_system::REQUIRES.iter().map(|r| r.to_string()).collect(),
        build_backend: build_system::BUILD_BACKEND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_author_or_description() {
        let metadata = build_project_metadata("foo", None, None);
        let project = &metadata.project;

        assert_eq!(project.name, "foo");
        assert_eq!(project.version, "0.0.1");
        assert_eq!(project.description, defaults::DESCRIPTION);
        assert_eq!(project.authors, vec![Author::new("", "")]);
        assert_eq!(project.maintainers, project.authors);
        assert_eq!(project.requires_python, ">=3.10");
    }

    #[test]
    fn author_is_used_for_authors_and_maintainers() {
        let author = Author::new("Max Mustermann", "max@example.com");
        let metadata = build_project_metadata("foo", None, Some(&author));

        assert_eq!(metadata.project.authors, vec![author.clone()]);
        assert_eq!(metadata.project.maintainers, vec![author]);
    }

    #[test]
    fn blank_description_falls_back_to_placeholder() {
        let metadata = build_project_metadata("foo", Some("  "), None);
        assert_eq!(metadata.project.description, defaults::DESCRIPTION);

        let metadata = build_project_metadata("foo", Some("A small tool"), None);
        assert_eq!(metadata.project.description, "A small tool");
    }

    #[test]
    fn build_system_is_setuptools() {
        let section = build_build_system_section();
        assert_eq!(section.requires, vec!["setuptools>=42", "wheel"]);
        assert_eq!(section.build_backend, "setuptools.build_meta");
        assert_eq!(build_project_metadata("foo", None, None).build_system, section);
    }

    #[test]
    fn placeholder_author() {
        assert_eq!(
            Author::with_placeholders(None, Some(String::new())),
            Author::new("John Doe", "john.doe@example.com")
        );
        assert_eq!(
            Author::with_placeholders(Some("Jane".into()), None),
            Author::new("Jane", "john.doe@example.com")
        );
    }

    #[test]
    fn author_from_parts() {
        assert_eq!(Author::from_parts(None, None), None);
        assert_eq!(
            Author::from_parts(None, Some("jane@example.com".into())),
            Some(Author::new("", "jane@example.com"))
        );
    }

    #[test]
    fn toml_has_project_and_build_system_tables() {
        let author = Author::new("Max Mustermann", "max@example.com");
        let text = build_project_metadata("demo", None, Some(&author)).to_toml().unwrap();

        let doc: toml::Table = toml::from_str(&text).unwrap();
        let project = doc["project"].as_table().unwrap();
        assert_eq!(project["name"].as_str(), Some("demo"));
        assert_eq!(project["requires-python"].as_str(), Some(">=3.10"));
        let authors = project["authors"].as_array().unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0]["email"].as_str(), Some("max@example.com"));

        let build = doc["build-system"].as_table().unwrap();
        assert_eq!(build["build-backend"].as_str(), Some("setuptools.build_meta"));
        assert_eq!(build["requires"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn toml_round_trips_into_the_record() {
        let metadata = build_project_metadata("demo", Some("Demo project"), None);
        let parsed: ProjectMetadata = toml::from_str(&metadata.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, metadata);
    }
}
