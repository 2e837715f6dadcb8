//! Command-line interface implementation for readygo.
//! Provides argument parsing and help text formatting using clap.

use crate::config::ConfigOverrides;
use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_API};
use clap::{error::ErrorKind, ArgAction, Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for readygo.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "readygo: scaffold production-ready Go projects with clean architecture",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Go project
    New(NewArgs),
}

/// Arguments of the `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Go module name
    #[arg(short, long)]
    pub module: Option<String>,

    /// Project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Directory the project is created in
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Include Redis in docker-compose
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub with_redis: bool,

    /// Include Kafka in docker-compose
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub with_kafka: bool,

    /// Sample API entity name (e.g., User, Product)
    #[arg(long, default_value = DEFAULT_SAMPLE_API)]
    pub sample_api: String,

    /// Skip git initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Interactive mode with prompts
    #[arg(short, long)]
    pub interactive: bool,

    /// Read answers (JSON or YAML) from a file
    #[arg(long, value_name = "FILE", conflicts_with = "stdin")]
    pub answers: Option<PathBuf>,

    /// Read answers (JSON or YAML) from stdin
    #[arg(long)]
    pub stdin: bool,
}

impl NewArgs {
    /// Values given on the command line, as configuration overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            module_name: self.module.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            output_dir: Some(self.output.clone()),
            with_redis: Some(self.with_redis),
            with_kafka: Some(self.with_kafka),
            sample_api_name: Some(self.sample_api.clone()),
            skip_git: Some(self.skip_git),
            ..Default::default()
        }
    }
}

/// Parses command line arguments and returns the Cli structure.
///
/// # Exits
/// * With status code 1 after printing help if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Cli::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
