#![warn(clippy::pedantic)]

mod config;
mod display;
mod session;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cube_core::{CubeState, parse_sequence, start, success, working};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;

use crate::{
    config::LayoutConfig,
    display::{Style, render_cubies, render_net},
    session::{Outcome, Session},
};

/// Applies moves to a 3x3x3 cube and shows the result
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The initial sticker layout, in TOML format. Defaults to the solved cube.
    #[arg(long, short = 'c', value_name = "LAYOUT")]
    layout: Option<PathBuf>,

    /// Cubie spacing used for mesh translations
    #[arg(long, default_value_t = 10.0)]
    spacing: f32,

    /// Print color letters instead of colored blocks
    #[arg(long)]
    plain: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence and print the net
    Apply {
        /// The move sequence to apply, e.g. "R U' F2 x"
        sequence: String,
    },
    /// Print the cubies with their positions and colors
    Cubies {
        /// A move sequence to apply first
        sequence: Option<String>,
    },
    /// Read moves or key presses from stdin, printing the net after each line
    Interactive,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let initial = match &cli.layout {
        Some(path) => {
            info!(start!("Loading layout from {}"), path.display());
            LayoutConfig::load(path)?
                .into_cube_state()
                .wrap_err_with(|| format!("Invalid layout in {}", path.display()))?
        }
        None => CubeState::solved(),
    };

    let style = if cli.plain {
        Style::Letters
    } else {
        Style::Blocks
    };

    match cli.command {
        Commands::Apply { sequence } => {
            let moves = parse_sequence(&sequence)?;
            info!(working!("Applying {} moves"), moves.len());
            let cube = initial.applied(moves);
            print!("{}", render_net(&cube.stickers(), style));
        }
        Commands::Cubies { sequence } => {
            let moves = parse_sequence(sequence.as_deref().unwrap_or_default())?;
            let cube = initial.applied(moves);
            print!("{}", render_cubies(&cube.stickers(), cli.spacing));
        }
        Commands::Interactive => run_interactive(initial, style)?,
    }

    Ok(())
}

fn run_interactive(initial: CubeState, style: Style) -> color_eyre::Result<()> {
    info!(start!("Starting an interactive session"));
    eprintln!("Enter moves (R U2 R' x), keys (ruR, shift for inverse), `reset` or `quit`");

    let mut session = Session::new(initial);
    print!("{}", render_net(&session.cube().stickers(), style));

    let mut line = String::new();
    loop {
        eprint!("> ");
        io::stderr().flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue) => {
                print!("{}", render_net(&session.cube().stickers(), style));
                if session.cube().is_solved() {
                    eprintln!("{}", "Solved".green());
                }
            }
            Err(e) => eprintln!("{}", e.red()),
        }
    }

    info!(success!("Session ended"));
    Ok(())
}
