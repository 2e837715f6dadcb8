//! Generation orchestration for readygo.
//!
//! A run moves through [`Stage`]s strictly in order:
//! precondition check, directories, files, module bootstrap, optional git init and
//! dependency tidy. Everything up to and including the module bootstrap is fatal on
//! failure; git init and tidy failures are recorded as warnings and the run still
//! succeeds. Nothing is rolled back: a failed run leaves its partial output on disk.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::loader::TemplateResolver;
use crate::manifest::{Manifest, ManifestEntry};
use crate::template::{PlaceholderRenderer, TemplateRenderer};
use crate::toolchain::{
    CommandRunner, GitInitializer, RepositoryInitializer, SystemCommandRunner, ToolCommand,
};
use log::{debug, info};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Progress of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Init,
    DirsCreated,
    FilesRendered,
    ModuleInitialized,
    GitInitialized,
    DependenciesResolved,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::DirsCreated => "directory creation",
            Stage::FilesRendered => "file rendering",
            Stage::ModuleInitialized => "module initialization",
            Stage::GitInitialized => "git initialization",
            Stage::DependenciesResolved => "dependency resolution",
            Stage::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// A non-fatal step failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub stage: Stage,
    pub message: String,
    /// What the operator can do about it, if anything.
    pub remedy: Option<String>,
}

impl std::fmt::Display for StepWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.message)?;
        if let Some(remedy) = &self.remedy {
            write!(f, " ({remedy})")?;
        }
        Ok(())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_root: PathBuf,
    pub files: Vec<PathBuf>,
    /// Stages completed, in order.
    pub stages: Vec<Stage>,
    pub warnings: Vec<StepWarning>,
}

impl GenerationReport {
    fn new(project_root: PathBuf) -> Self {
        Self { project_root, files: Vec::new(), stages: vec![Stage::Init], warnings: Vec::new() }
    }

    fn advance(&mut self, stage: Stage) {
        info!("Stage reached: {stage}.");
        self.stages.push(stage);
    }

    fn warn(&mut self, stage: Stage, message: String, remedy: Option<String>) {
        debug!("Recording warning for {stage}.");
        self.warnings.push(StepWarning { stage, message, remedy });
    }

    pub fn stage(&self) -> Stage {
        self.stages.last().copied().unwrap_or(Stage::Init)
    }

    /// Operator-facing summary: warnings first, then next steps.
    ///
    /// This is the only place warnings are surfaced to the operator.
    pub fn summary(&self, config: &ProjectConfig) -> String {
        let mut out = String::new();
        for warning in &self.warnings {
            let _ = writeln!(out, "⚠️  Warning: {warning}");
        }

        let root = self.project_root.display();
        let _ = writeln!(out, "\n✅ Project successfully created at {root}\n");
        let _ = writeln!(out, "Next steps:");
        let _ = writeln!(out, "  cd {root}");
        let _ = writeln!(out, "  make up              # Start all services");
        let _ = writeln!(out, "  make migrate-up      # Run migrations");
        let _ = writeln!(out, "  make run             # Start the application");
        let _ = writeln!(
            out,
            "\n🌐 Access your application at http://localhost:{}",
            config.app_port
        );
        let _ = writeln!(
            out,
            "📚 API documentation: http://localhost:{}/api/v1/{}",
            config.app_port,
            config.sample_table_name()
        );
        out
    }
}

/// Drives one generation run against injected collaborators.
pub struct Generator<'a> {
    resolver: &'a TemplateResolver,
    renderer: &'a dyn TemplateRenderer,
    runner: &'a dyn CommandRunner,
    repository: &'a dyn RepositoryInitializer,
}

impl<'a> Generator<'a> {
    pub fn new(
        resolver: &'a TemplateResolver,
        renderer: &'a dyn TemplateRenderer,
        runner: &'a dyn CommandRunner,
        repository: &'a dyn RepositoryInitializer,
    ) -> Self {
        Self { resolver, renderer, runner, repository }
    }

    /// Generates the project described by `config`.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the configuration is invalid
    /// * `Error::OutputDirectoryExists` if the project directory is already present;
    ///   nothing is written in that case
    /// * `Error::ManifestError`, `Error::DirectoryCreation`, `Error::TemplateNotFound`,
    ///   `Error::Render`, `Error::WriteFile` for failures while writing the project
    /// * `Error::ToolInvocation` if `go mod init` fails
    pub fn generate(&self, config: &ProjectConfig) -> Result<GenerationReport> {
        config.validate()?;

        let project_root = config.project_root();
        if project_root.exists() {
            return Err(Error::OutputDirectoryExists {
                output_dir: project_root.display().to_string(),
            });
        }

        let manifest = Manifest::build(config)?;
        let mut report = GenerationReport::new(project_root.clone());

        info!("Creating directory structure in '{}'.", project_root.display());
        self.create_directories(&manifest)?;
        report.advance(Stage::DirsCreated);

        info!("Generating project files.");
        let context = config.template_context()?;
        for entry in &manifest.files {
            self.render_entry(entry, &context)?;
            report.files.push(entry.destination.clone());
        }
        report.advance(Stage::FilesRendered);

        info!("Initializing go module '{}'.", config.module_name);
        self.run_tool(
            Stage::ModuleInitialized,
            &ToolCommand::module_init(&config.module_name),
            &project_root,
        )?;
        report.advance(Stage::ModuleInitialized);

        if config.skip_git {
            debug!("Skipping git initialization.");
        } else {
            info!("Initializing git repository.");
            match self.repository.init(&project_root) {
                Ok(()) => report.advance(Stage::GitInitialized),
                Err(e) => report.warn(Stage::GitInitialized, e.to_string(), None),
            }
        }

        info!("Downloading dependencies.");
        let tidy = ToolCommand::module_tidy();
        match self.run_tool(Stage::DependenciesResolved, &tidy, &project_root) {
            Ok(()) => report.advance(Stage::DependenciesResolved),
            Err(e) => report.warn(
                Stage::DependenciesResolved,
                e.to_string(),
                Some(format!("run '{tidy}' manually in the project directory")),
            ),
        }

        report.advance(Stage::Done);
        Ok(report)
    }

    fn create_directories(&self, manifest: &Manifest) -> Result<()> {
        for dir in &manifest.directories {
            debug!("Creating directory '{}'.", dir.display());
            fs::create_dir_all(dir)
                .map_err(|source| Error::DirectoryCreation { path: dir.clone(), source })?;
        }
        Ok(())
    }

    fn render_entry(&self, entry: &ManifestEntry, context: &serde_json::Value) -> Result<()> {
        let source = self.resolver.resolve(entry.template)?;
        let content = self.renderer.render(&source, context).map_err(|e| Error::Render {
            template: entry.template.to_string(),
            destination: entry.destination.clone(),
            reason: e.to_string(),
        })?;

        debug!("Writing file '{}'.", entry.destination.display());
        fs::write(&entry.destination, content).map_err(|source| Error::WriteFile {
            destination: entry.destination.clone(),
            source,
        })
    }

    fn run_tool(&self, stage: Stage, command: &ToolCommand, cwd: &Path) -> Result<()> {
        let invocation_error = |output: String| Error::ToolInvocation {
            step: stage.to_string(),
            command: command.to_string(),
            output,
        };

        let output = self.runner.run(command, cwd).map_err(|e| invocation_error(e.to_string()))?;
        if output.success {
            return Ok(());
        }

        let status = match output.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        Err(invocation_error(format!("{status}\n{}", output.combined.trim_end())))
    }
}

/// Generates `config` with the bundled templates, the system toolchain and git.
pub fn generate(config: &ProjectConfig) -> Result<GenerationReport> {
    let resolver = TemplateResolver::default();
    let renderer = PlaceholderRenderer::new();
    Generator::new(&resolver, &renderer, &SystemCommandRunner, &GitInitializer).generate(config)
}
