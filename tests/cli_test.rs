use clap::Parser;
use readygo::cli::{Cli, Commands, NewArgs};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("readygo")];
    res.extend(args.iter().map(OsString::from));
    res
}

fn parse_new(args: &[&str]) -> NewArgs {
    let mut full = vec!["new"];
    full.extend_from_slice(args);
    match Cli::try_parse_from(make_args(&full)).unwrap().command {
        Commands::New(new_args) => new_args,
    }
}

#[test]
fn test_defaults() {
    let parsed = parse_new(&["shop"]);

    assert_eq!(parsed.project_name, "shop");
    assert_eq!(parsed.output, PathBuf::from("."));
    assert!(parsed.with_redis);
    assert!(parsed.with_kafka);
    assert_eq!(parsed.sample_api, "User");
    assert!(parsed.module.is_none());
    assert!(!parsed.skip_git);
    assert!(!parsed.interactive);
    assert!(!parsed.stdin);
}

#[test]
fn test_all_flags() {
    let parsed = parse_new(&[
        "shop",
        "--module",
        "gitlab.com/acme/shop",
        "--description",
        "Shop backend",
        "--author",
        "Acme",
        "--output",
        "/tmp/out",
        "--with-redis",
        "false",
        "--with-kafka",
        "false",
        "--sample-api",
        "product",
        "--skip-git",
    ]);

    let overrides = parsed.overrides();
    assert_eq!(overrides.module_name.as_deref(), Some("gitlab.com/acme/shop"));
    assert_eq!(overrides.description.as_deref(), Some("Shop backend"));
    assert_eq!(overrides.author.as_deref(), Some("Acme"));
    assert_eq!(overrides.output_dir, Some(PathBuf::from("/tmp/out")));
    assert_eq!(overrides.with_redis, Some(false));
    assert_eq!(overrides.with_kafka, Some(false));
    assert_eq!(overrides.sample_api_name.as_deref(), Some("product"));
    assert_eq!(overrides.skip_git, Some(true));
}

#[test]
fn test_short_flags() {
    let parsed = parse_new(&["-m", "example.com/x", "-d", "desc", "-o", "out", "-i", "x"]);
    assert_eq!(parsed.module.as_deref(), Some("example.com/x"));
    assert_eq!(parsed.description.as_deref(), Some("desc"));
    assert_eq!(parsed.output, PathBuf::from("out"));
    assert!(parsed.interactive);
}

#[test]
fn test_global_verbose() {
    let cli = Cli::try_parse_from(make_args(&["new", "shop", "-v"])).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_missing_project_name() {
    assert!(Cli::try_parse_from(make_args(&["new"])).is_err());
}

#[test]
fn test_answers_conflicts_with_stdin() {
    let args = make_args(&["new", "shop", "--stdin", "--answers", "a.yml"]);
    assert!(Cli::try_parse_from(args).is_err());
}
