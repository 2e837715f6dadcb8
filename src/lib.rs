//! readygo scaffolds Go backend services.
//! It derives a manifest of directories and files from a project configuration,
//! renders every file from a bundled template and bootstraps the Go module and git
//! repository of the new project.

/// Pre-supplied answers from files or stdin (JSON or YAML)
pub mod answers;

/// Command-line interface module for the readygo application
pub mod cli;

/// Project configuration: defaults, derivation and validation
pub mod config;

pub mod constants;

/// Templates bundled into the binary
pub mod embedded;

/// Error types and handling for the readygo application
pub mod error;

/// Generation orchestration
/// Sequences directory creation, rendering, `go mod init`, git init and `go mod tidy`
pub mod generator;

/// Template resolution (embedded store first, then disk)
pub mod loader;

pub mod logger;

/// Directory and file manifest of a generated project
pub mod manifest;

/// User input and interaction handling
pub mod prompt;

/// Placeholder template parsing and rendering
pub mod template;

/// External tools run inside the generated project
pub mod toolchain;

pub use error::{Error, Result};
pub use generator::{generate, GenerationReport, Generator};
