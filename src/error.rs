//! Error handling for readygo.
//! Defines the error taxonomy and result type used throughout the generation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for readygo operations.
///
/// Every fatal condition of a generation run maps to exactly one variant, and the
/// message names the step that failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project configuration failed validation.
    #[error("Invalid configuration: {0}.")]
    ValidationError(String),

    /// The target project directory is already present on disk.
    #[error("Output directory '{output_dir}' already exists.")]
    OutputDirectoryExists { output_dir: String },

    /// The manifest could not be built from the configuration.
    #[error("Manifest error: {0}.")]
    ManifestError(String),

    /// A directory from the manifest could not be created.
    #[error("Failed to create directory '{}': {source}.", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration could not be turned into a template context.
    #[error("Template context error: {0}.")]
    ContextError(String),

    /// The template is neither bundled nor present in any disk search path.
    #[error("Template '{id}' not found in embedded templates or on disk.")]
    TemplateNotFound { id: String },

    /// The template could not be parsed or evaluated.
    #[error("Failed to render template '{template}' to '{}': {reason}.", .destination.display())]
    Render { template: String, destination: PathBuf, reason: String },

    /// The rendered output could not be written.
    #[error("Failed to write '{}': {source}.", .destination.display())]
    WriteFile {
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An external tool exited unsuccessfully or could not be started.
    #[error("{step} failed ({command}): {output}")]
    ToolInvocation { step: String, command: String, output: String },

    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Represents failures while interacting with the user.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents failures while loading pre-supplied answers.
    #[error("Answers error: {0}.")]
    AnswersError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
