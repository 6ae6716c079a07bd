// SPDX-License-Identifier: MIT OR Apache-2.0

//! Linear Domination CLI
//!
//! Plays each input file in turn, printing the board after every play and
//! writing the final board and score to an output file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use lindom_cli::render::banner;
use lindom_cli::{game_title, load_config, output_path_for, run_game, BoardPrinter};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "lindom",
    about = "Linear Domination: the player with the most cells wins",
    version
)]
struct Args {
    /// Game input files, played in order
    #[clap(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (only with a single input; derived from the input name otherwise)
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// JSON file with comparison settings
    #[clap(long)]
    config: Option<PathBuf>,

    /// Only print the final score of each game
    #[clap(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Main entry point
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    if args.output.is_some() && args.inputs.len() > 1 {
        bail!("--output can only be used with a single input file");
    }

    let config = load_config(args.config.as_deref())?;
    tracing::debug!(?config, "Using configuration");

    for (n, input) in args.inputs.iter().enumerate() {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| output_path_for(input));
        let title = game_title(input);

        if !args.quiet {
            let mut stdout = io::stdout().lock();
            if n > 0 {
                write!(stdout, "\n\n\n")?;
            }
            write!(stdout, "{}", banner(&title))?;
        }

        let mut printer = BoardPrinter::new(io::stdout(), args.quiet).with_title(title);
        run_game(input, &output, config, &mut printer)?;
        printer.finish().context("Failed to print game")?;
    }

    Ok(())
}
