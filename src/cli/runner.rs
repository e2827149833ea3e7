use crate::{
    cli::{args::get_log_level, Args},
    error::Result,
    logger::{logger_factory, Logger, LoggerKind},
    metadata::{Author, ProjectInputs},
    prompt::ask_project_inputs,
    writer::{layout_project, write_project_config},
};
use std::path::Path;

/// Main CLI runner that gathers the inputs and lays out the project
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete bootstrap workflow
    pub fn run(self) -> Result<()> {
        let inputs = self.collect_inputs()?;
        let output_root = self.args.output_dir.as_path();

        if !output_root.exists() {
            log::debug!("Creating output directory {}", output_root.display());
            std::fs::create_dir_all(output_root)?;
        }

        let logger = logger_factory(
            self.logger_kind(),
            get_log_level(self.args.verbose, self.args.quiet),
            output_root,
        )?;

        bootstrap(output_root, &inputs, logger.as_ref())?;
        Ok(())
    }

    /// Collects inputs from the prompts or from the command line
    fn collect_inputs(&self) -> Result<ProjectInputs> {
        if self.args.interactive {
            return ask_project_inputs();
        }
        Ok(self.inputs_from_args())
    }

    fn inputs_from_args(&self) -> ProjectInputs {
        ProjectInputs {
            project_name: self.args.project_name.clone().unwrap_or_default(),
            author: Author::from_parts(
                self.args.author_name.clone(),
                self.args.author_email.clone(),
            ),
            description: self.args.description.clone(),
            distributable: self.args.distributable,
        }
    }

    /// Interactive runs log to a file so messages don't interleave with prompts
    fn logger_kind(&self) -> LoggerKind {
        if self.args.interactive || self.args.log_file {
            LoggerKind::File
        } else {
            LoggerKind::Console
        }
    }
}

/// Lays out the project skeleton under `root` and writes its configuration.
pub fn bootstrap(root: &Path, inputs: &ProjectInputs, logger: &dyn Logger) -> Result<bool> {
    layout_project(root, &inputs.project_name, inputs.distributable, logger)?;
    write_project_config(
        root,
        &inputs.project_name,
        inputs.author.as_ref(),
        inputs.description.as_deref(),
        inputs.distributable,
        logger,
    )?;
    logger.info("Finished execution");
    Ok(true)
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
