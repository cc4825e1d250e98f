//! Triangle Peg Game
//!
//! Console front end for peg-core: pick a starting hole, then jump pegs until
//! no jump is left.

mod config;
mod game;
mod prompt;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::config::GameConfig;
use crate::prompt::Prompter;

/// Triangular peg solitaire
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Height of the game board
    #[arg(short = 't', long, default_value_t = GameConfig::DEFAULT_HEIGHT)]
    height: usize,

    /// Peg to remove first, instead of asking
    #[arg(short, long)]
    start: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = GameConfig {
        height: args.height,
        start: args.start,
    };
    config.validate()?;
    info!("board height {}", config.height);

    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());
    writeln!(prompt.out(), "{}", game::game_info())?;

    match game::game_loop(&config, &mut prompt) {
        Err(err) if is_end_of_input(&err) => {
            info!("input closed, exiting");
            Ok(())
        }
        other => other,
    }
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
