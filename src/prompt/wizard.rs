use super::interface::{ConfirmationConfig, PromptProvider, TextPromptConfig};
use crate::{
    constants::defaults,
    error::Result,
    metadata::{Author, ProjectInputs},
    validation::{is_valid_email, validate_project_name},
};

pub const PROJECT_NAME_PROMPT: &str = "Please give the name of the project";
pub const AUTHOR_NAME_PROMPT: &str = "Please give the name of the author";
pub const AUTHOR_EMAIL_PROMPT: &str = "Please give the email address of the author";
pub const DESCRIPTION_PROMPT: &str = "Please give a short description of the project";
pub const DISTRIBUTABLE_PROMPT: &str = "Do you intend to upload the project to PyPI?";

/// Asks for everything needed to bootstrap a project.
pub struct ProjectWizard<P: PromptProvider> {
    provider: P,
}

impl<P: PromptProvider> ProjectWizard<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Runs every question in order. Blank answers fall back to the
    /// placeholder values, and an email that fails the format check is
    /// replaced by the placeholder address.
    pub fn run(&self) -> Result<ProjectInputs> {
        let project_name = self.ask_project_name()?;
        let author_name = self.ask_optional(AUTHOR_NAME_PROMPT)?;
        let author_email = self.ask_author_email()?;
        let description = self.ask_optional(DESCRIPTION_PROMPT)?;
        let distributable = self.provider.prompt_confirmation(&ConfirmationConfig {
            prompt: DISTRIBUTABLE_PROMPT.to_string(),
            default: false,
        })?;

        Ok(ProjectInputs {
            project_name,
            author: Some(Author::with_placeholders(author_name, author_email)),
            description,
            distributable,
        })
    }

    fn ask_project_name(&self) -> Result<String> {
        let answer = self.provider.prompt_text(&TextPromptConfig {
            prompt: PROJECT_NAME_PROMPT.to_string(),
            default: Some(defaults::PROJECT_NAME.to_string()),
            allow_empty: true,
        })?;
        let name = match answer.trim() {
            "" => defaults::PROJECT_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        validate_project_name(&name)?;
        Ok(name)
    }

    fn ask_author_email(&self) -> Result<Option<String>> {
        let email = self.ask_optional(AUTHOR_EMAIL_PROMPT)?;
        Ok(email.filter(|e| {
            let valid = is_valid_email(e);
            if !valid {
                log::warn!("Ignoring invalid email address '{e}'");
            }
            valid
        }))
    }

    fn ask_optional(&self, prompt: &str) -> Result<Option<String>> {
        let answer = self.provider.prompt_text(&TextPromptConfig {
            prompt: prompt.to_string(),
            default: None,
            allow_empty: true,
        })?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::automatic_impl::AutomaticPrompter;

    #[test]
    fn collects_answers() {
        let provider = AutomaticPrompter::new()
            .with_text_response(PROJECT_NAME_PROMPT, "demo")
            .with_text_response(AUTHOR_NAME_PROMPT, "Max Mustermann")
            .with_text_response(AUTHOR_EMAIL_PROMPT, "max@example.com")
            .with_text_response(DESCRIPTION_PROMPT, "A demo package")
            .with_confirmation_response(DISTRIBUTABLE_PROMPT, true);

        let inputs = ProjectWizard::new(provider).run().unwrap();

        assert_eq!(
            inputs,
            ProjectInputs {
                project_name: "demo".to_string(),
                author: Some(Author::new("Max Mustermann", "max@example.com")),
                description: Some("A demo package".to_string()),
                distributable: true,
            }
        );
    }

    #[test]
    fn blank_answers_use_placeholders() {
        let inputs = ProjectWizard::new(AutomaticPrompter::new()).run().unwrap();

        assert_eq!(inputs.project_name, "example-project");
        assert_eq!(inputs.author, Some(Author::new("John Doe", "john.doe@example.com")));
        assert_eq!(inputs.description, None);
        assert!(!inputs.distributable);
    }

    #[test]
    fn invalid_email_is_replaced() {
        let provider = AutomaticPrompter::new()
            .with_text_response(AUTHOR_NAME_PROMPT, "Jane")
            .with_text_response(AUTHOR_EMAIL_PROMPT, "jane-at-example");

        let inputs = ProjectWizard::new(provider).run().unwrap();

        assert_eq!(inputs.author, Some(Author::new("Jane", "john.doe@example.com")));
    }

    #[test]
    fn rejects_path_like_project_name() {
        let provider = AutomaticPrompter::new().with_text_response(PROJECT_NAME_PROMPT, "../x");
        assert!(ProjectWizard::new(provider).run().is_err());
    }
}
