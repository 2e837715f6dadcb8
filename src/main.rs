//! readygo's main application entry point.
//! Turns command-line arguments into a project configuration and hands it to the
//! generator.

use readygo::{
    answers::{load_answers, AnswerSource},
    cli::{get_args, Commands, NewArgs},
    config::ProjectConfig,
    error::{default_error_handler, Result},
    generator::generate,
    logger::init_logger,
    prompt::{prompt_for_config, DialoguerPrompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let result = match args.command {
        Commands::New(new_args) => run_new(new_args),
    };
    if let Err(err) = result {
        default_error_handler(err);
    }
}

/// Builds the configuration for `new`.
///
/// # Flow
/// 1. Defaults derived from the project name
/// 2. Command-line flags, or interactive answers with `--interactive`
/// 3. Answers from `--answers <FILE>` or `--stdin`
/// 4. Derivation and validation
fn build_config(args: NewArgs) -> Result<ProjectConfig> {
    let mut config = ProjectConfig::new(args.project_name.as_str());
    config.apply(args.overrides());

    if args.interactive {
        println!("\n📋 Let's configure your project!\n");
        let overrides = prompt_for_config(&DialoguerPrompter::new(), &config)?;
        config.apply(overrides);
        println!();
    }

    if let Some(overrides) = load_answers(&AnswerSource::from_args(args.stdin, args.answers))? {
        config.apply(overrides);
    }

    config.process();
    config.validate()?;
    Ok(config)
}

fn run_new(args: NewArgs) -> Result<()> {
    let config = build_config(args)?;

    println!("\n🚀 Creating project: {}", config.project_name);
    println!("📦 Module: {}", config.module_name);
    println!("🎯 Sample API: {}\n", config.sample_api_name);

    let report = generate(&config)?;
    print!("{}", report.summary(&config));
    Ok(())
}
