//! # timeline CLI Entry Point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use timeline_cli::console::Reporter;
use timeline_cli::export::{run_build, BuildArgs};
use timeline_cli::telemetry::init_tracing;
use timeline_cli::validate::{run_validate, ValidateArgs};

/// Timeline event checker.
///
/// Validates the timeline's event file before it is published. With no
/// subcommand, validates `data/events.yaml`.
#[derive(Parser, Debug)]
#[command(name = "timeline", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON-formatted log lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an event file (the default).
    Validate(ValidateArgs),

    /// Export the event file as date-sorted JSON.
    Build(BuildArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("timeline v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());

    let result = match cli.command {
        None => run_validate(&ValidateArgs::default(), &mut reporter),
        Some(Commands::Validate(args)) => run_validate(&args, &mut reporter),
        Some(Commands::Build(args)) => run_build(&args, &mut reporter),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["timeline"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.log_json);
    }

    #[test]
    fn cli_parse_validate_default_path() {
        let cli = Cli::try_parse_from(["timeline", "validate"]).unwrap();
        match cli.command {
            Some(Commands::Validate(args)) => assert_eq!(args, ValidateArgs::default()),
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn cli_parse_validate_with_path() {
        let cli = Cli::try_parse_from(["timeline", "validate", "other/events.yaml"]).unwrap();
        if let Some(Commands::Validate(args)) = cli.command {
            assert_eq!(args.path, PathBuf::from("other/events.yaml"));
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_build_defaults() {
        let cli = Cli::try_parse_from(["timeline", "build"]).unwrap();
        if let Some(Commands::Build(args)) = cli.command {
            assert_eq!(args.input, PathBuf::from("data/events.yaml"));
            assert_eq!(args.out, PathBuf::from("src/data/events.json"));
        } else {
            panic!("expected build");
        }
    }

    #[test]
    fn cli_parse_build_with_options() {
        let cli = Cli::try_parse_from([
            "timeline",
            "build",
            "--input",
            "in.yaml",
            "--out",
            "public/events.json",
        ])
        .unwrap();
        if let Some(Commands::Build(args)) = cli.command {
            assert_eq!(args.input, PathBuf::from("in.yaml"));
            assert_eq!(args.out, PathBuf::from("public/events.json"));
        } else {
            panic!("expected build");
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli1 = Cli::try_parse_from(["timeline", "-v"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli3 = Cli::try_parse_from(["timeline", "validate", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_log_json() {
        let cli = Cli::try_parse_from(["timeline", "--log-json", "build"]).unwrap();
        assert!(cli.log_json);
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["timeline", "nonexistent"]).is_err());
    }

    #[test]
    fn cli_debug_impl() {
        let cli = Cli::try_parse_from(["timeline", "build"]).unwrap();
        assert!(format!("{cli:?}").contains("Build"));
    }
}
