use crate::constants::{exit_codes, verbosity};
use crate::validation::{validate_email, validate_project_name};
use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for pystrap.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode").required(true).args(["project_name", "interactive"])
))]
pub struct Args {
    /// Name of the project to bootstrap.
    #[arg(long, alias = "project_name", value_name = "NAME", value_parser = parse_project_name)]
    pub project_name: Option<String>,

    /// Ask for the project details interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Name of the author.
    #[arg(long, value_name = "NAME")]
    pub author_name: Option<String>,

    /// Email address of the author.
    #[arg(long, value_name = "EMAIL", value_parser = parse_email)]
    pub author_email: Option<String>,

    /// Short description written to pyproject.toml.
    #[arg(long)]
    pub description: Option<String>,

    /// Also create a setup.py so the package can be distributed.
    #[arg(long)]
    pub distributable: bool,

    /// Directory in which the project is created.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write log output to a timestamped file instead of the console.
    #[arg(long = "log-file")]
    pub log_file: bool,

    /// Disable logging output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase logging verbosity (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Arguments for a non-interactive run with everything else defaulted.
    pub fn for_project(project_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            interactive: false,
            author_name: None,
            author_email: None,
            description: None,
            distributable: false,
            output_dir: output_dir.into(),
            log_file: false,
            quiet: false,
            verbose: verbosity::INFO,
        }
    }
}

fn parse_project_name(value: &str) -> Result<String, String> {
    validate_project_name(value).map_err(|e| e.to_string())?;
    Ok(value.to_string())
}

fn parse_email(value: &str) -> Result<String, String> {
    validate_email(value).map_err(|e| e.to_string())?;
    Ok(value.to_string())
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts and `--quiet` to the appropriate log level.
pub fn get_log_level(verbose_count: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose_count {
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
