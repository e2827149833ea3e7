//! Interactive collection of project inputs
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Scripted answers for tests and automation
//! - `wizard`: The question flow producing [`ProjectInputs`]

use crate::{error::Result, metadata::ProjectInputs, prompt::dialoguer::DialoguerPrompter};

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;
pub mod wizard;

pub use interface::*;
pub use wizard::ProjectWizard;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Asks the user for all project inputs on the terminal.
pub fn ask_project_inputs() -> Result<ProjectInputs> {
    ProjectWizard::new(get_prompt_provider()).run()
}
