#![allow(dead_code)]

use readygo::config::ProjectConfig;
use readygo::error::{Error, Result};
use readygo::toolchain::{CommandOutput, CommandRunner, RepositoryInitializer, ToolCommand};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

/// Command runner that records invocations instead of spawning processes.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: RefCell<Vec<(ToolCommand, PathBuf)>>,
    failing: Vec<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every command whose rendering starts with `prefix` exit with status 1.
    pub fn failing(mut self, prefix: &str) -> Self {
        self.failing.push(prefix.to_string());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(command, _)| command.to_string()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &ToolCommand, cwd: &Path) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push((command.clone(), cwd.to_path_buf()));
        let rendered = command.to_string();
        if self.failing.iter().any(|prefix| rendered.starts_with(prefix)) {
            return Ok(CommandOutput {
                success: false,
                code: Some(1),
                combined: format!("{rendered}: simulated failure"),
            });
        }
        Ok(CommandOutput { success: true, code: Some(0), combined: String::new() })
    }
}

/// Repository initializer that records the paths it was asked to initialize.
#[derive(Default)]
pub struct FakeRepository {
    pub initialized: RefCell<Vec<PathBuf>>,
    pub fail: bool,
}

impl RepositoryInitializer for FakeRepository {
    fn init(&self, path: &Path) -> Result<()> {
        self.initialized.borrow_mut().push(path.to_path_buf());
        if self.fail {
            return Err(Error::Git2Error(git2::Error::from_str("simulated git failure")));
        }
        Ok(())
    }
}

pub fn config_in(output_dir: &Path, name: &str) -> ProjectConfig {
    let mut config = ProjectConfig::new(name);
    config.output_dir = output_dir.to_path_buf();
    config.process();
    config
}
