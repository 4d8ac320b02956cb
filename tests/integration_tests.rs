//! Integration tests for clikit
//!
//! These tests exercise the helpers the way a consuming binary does: parse
//! the command line, resolve settings from the environment, and read the
//! file the settings point at.

use clap::Parser;
use clikit::error::Error;
use clikit::flags::{self, Positional};
use clikit::{env, file_handling};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
#[command(name = "mytool", term_width = 0)]
struct ToolArgs {
    /// Path to the settings file.
    #[arg(long, short = 's')]
    settings_path: Option<String>,

    /// Print what would happen without doing it.
    #[arg(long, action)]
    dry_run: bool,

    #[arg(trailing_var_arg = true)]
    targets: Vec<String>,
}

impl Positional for ToolArgs {
    fn positional(&self) -> &[String] {
        &self.targets
    }
}

/// Parse flags, fall back to an environment-driven path, then read the file.
#[test]
fn test_flag_env_file_workflow() {
    let mut settings_file = NamedTempFile::new().unwrap();
    write!(settings_file, "retries = 3").unwrap();
    let settings_path = settings_file.path().to_str().unwrap().to_string();

    let (args, targets) = flags::parse_from::<ToolArgs, _, _>([
        "mytool",
        "--settings-path",
        settings_path.as_str(),
        "--dry-run",
        "staging",
        "production",
    ])
    .unwrap();

    assert!(args.dry_run);
    assert_eq!(targets, vec!["staging", "production"]);

    // The flag wins over any environment fallback.
    let resolved = match &args.settings_path {
        Some(path) => path.clone(),
        None => env::var_or("MYTOOL_SETTINGS", "/etc/mytool/settings.toml"),
    };
    assert_eq!(resolved, settings_path);

    let contents = file_handling::read(&resolved).unwrap();
    assert_eq!(contents, "retries = 3");
}

/// With no flag given, the path comes from the environment and may contain
/// a variable reference of its own.
#[test]
fn test_env_fallback_with_expansion_workflow() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("settings.toml"), "retries = 5").unwrap();

    temp_env::with_vars(
        [
            ("MYTOOL_HOME", Some(dir.path().to_str().unwrap())),
            ("MYTOOL_SETTINGS", Some("$MYTOOL_HOME/settings.toml")),
        ],
        || {
            let (args, _) = flags::parse_from::<ToolArgs, _, _>(["mytool"]).unwrap();
            assert!(args.settings_path.is_none());

            let resolved = env::var("MYTOOL_SETTINGS").unwrap();
            let contents = file_handling::read(&resolved).unwrap();
            assert_eq!(contents, "retries = 5");
        },
    );
}

/// A required variable that is missing surfaces as an error named after the
/// variable, which the caller can route to its fatal path.
#[test]
fn test_missing_required_variable_workflow() {
    temp_env::with_var_unset("MYTOOL_API_TOKEN", || {
        let result = env::var("MYTOOL_API_TOKEN");

        let error = result.unwrap_err();
        assert!(matches!(error, Error::MissingVariable(_)));
        assert_eq!(error.to_string(), "MYTOOL_API_TOKEN");
    });
}

/// An unknown flag is returned as an error; usage text is available for the
/// same struct through the public renderer.
#[test]
fn test_unknown_flag_workflow() {
    let result = flags::parse_from::<ToolArgs, _, _>(["mytool", "--no-such-flag"]);

    match result {
        Err(Error::FlagParse(e)) => {
            assert_eq!(e.kind(), clap::error::ErrorKind::UnknownArgument);
        }
        other => panic!("Expected an unknown-flag error, got {other:?}"),
    }

    let usage = flags::usage::<ToolArgs>();
    assert!(!usage.is_empty());
    assert!(usage.contains("--settings-path"));
}

/// Arguments after `--` reach the caller untouched even when they look like
/// flags.
#[test]
fn test_double_dash_pass_through_workflow() {
    let (args, targets) =
        flags::parse_from::<ToolArgs, _, _>(["mytool", "--", "--dry-run", "prod"]).unwrap();

    assert!(!args.dry_run);
    assert_eq!(targets, vec!["--dry-run", "prod"]);
}
