use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use release_stability::cli::{self, NextReleaseArgs};
use release_stability::config;
use release_stability::ui;

#[derive(Parser)]
#[command(
    name = "release-stability",
    version,
    about = "Classify changes by stability and plan the next release"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Show debug logs")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a stability level and print its canonical forms
    Parse {
        /// Stability name, case-insensitive
        value: String,
    },

    /// List the known stability levels
    Levels,

    /// Compute the next release from labeled changes
    Next {
        #[arg(long, help = "Tag of the latest release")]
        current: String,

        #[arg(
            long = "change",
            value_name = "TITLE=LABELS",
            help = "A pending change with comma-separated labels (repeatable)"
        )]
        changes: Vec<String>,

        #[arg(long, help = "Plan even if some changes have no stability label")]
        allow_unknown: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Parse { value } => {
            cli::run_parse(&value)?;
        }
        Command::Levels => ui::display_levels(),
        Command::Next {
            current,
            changes,
            allow_unknown,
        } => {
            let config = config::load_config(args.config.as_deref())?;
            cli::run_next_release(
                NextReleaseArgs {
                    current_tag: current,
                    changes,
                    allow_unknown,
                },
                config,
            )?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
