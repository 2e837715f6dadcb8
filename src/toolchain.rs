//! External tools invoked after the project files are written.
//!
//! Go tooling runs as child processes through a [`CommandRunner`]; the repository is
//! initialized in-process with `git2`. Both sit behind traits so the generator can be
//! driven without a Go toolchain.

use crate::constants::GO_BIN;
use crate::error::Result;
use log::debug;
use std::io;
use std::path::Path;
use std::process::Command;

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<P: Into<String>>(program: P, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }

    /// `go mod init <module>`
    pub fn module_init(module_name: &str) -> Self {
        Self::new(GO_BIN, &["mod", "init", module_name])
    }

    /// `go mod tidy`
    pub fn module_tidy() -> Self {
        Self::new(GO_BIN, &["mod", "tidy"])
    }
}

impl std::fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub combined: String,
}

/// Runs external commands to completion.
pub trait CommandRunner {
    /// Runs `command` with `cwd` as working directory and waits for it to exit.
    ///
    /// # Errors
    /// Returns the I/O error if the program could not be started.
    fn run(&self, command: &ToolCommand, cwd: &Path) -> io::Result<CommandOutput>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &ToolCommand, cwd: &Path) -> io::Result<CommandOutput> {
        debug!("Running '{}' in '{}'.", command, cwd.display());
        let output = Command::new(&command.program).args(&command.args).current_dir(cwd).output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput { success: output.status.success(), code: output.status.code(), combined })
    }
}

/// Initializes version control in a freshly generated project.
pub trait RepositoryInitializer {
    fn init(&self, path: &Path) -> Result<()>;
}

/// Creates an empty git repository with libgit2.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitInitializer;

impl RepositoryInitializer for GitInitializer {
    fn init(&self, path: &Path) -> Result<()> {
        debug!("Initializing git repository in '{}'.", path.display());
        git2::Repository::init(path)?;
        Ok(())
    }
}
