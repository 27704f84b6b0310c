//! Command-line interface implementation
//!
//! With no arguments the CLI generates the demo frame and the metadata
//! document under the default output directory.

mod generate;
mod plan;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use crate::config::{resolve_config, CliOverrides};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Merry the Siamese Cat - placeholder sprite and metadata generator
#[derive(Parser, Debug)]
#[command(name = "generate-merry")]
#[command(about = "Generate Merry's placeholder idle sprite and animation metadata")]
#[command(version)]
pub struct Cli {
    /// Write assets under this directory instead of assets/characters/our_siamese_cat
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the planned animation set and exit without writing files
    #[arg(long)]
    pub plan: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = CliOverrides {
        output_dir: cli.output_dir,
    };
    let config = match resolve_config(&overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if cli.plan {
        plan::run_plan(&config)
    } else {
        generate::run_generate(config)
    }
}
