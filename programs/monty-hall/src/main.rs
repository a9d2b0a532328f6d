//! Monty Hall CLI
//!
//! Terminal front end for [`monty_engine`]:
//!
//! - `auto`: simulate many games with both strategies and print the win rates
//! - `play`: play one game at a time, step by step, with a running history
//! - `about`: explain the puzzle
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

mod player;

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use monty_engine::{expand_seed, simulate, Session, SimulationConfig};

/// Largest batch accepted from the command line
const MAX_TRIALS: u64 = 100_000;

const ABOUT: &str = "\
The Monty Hall problem is a probability puzzle based on a game show.

  1. You choose one of three doors. One hides a car, the other two hide goats.
  2. The host, who knows where the car is, opens one of the other doors to show a goat.
  3. You may stick with your door or switch to the last closed door.

Your first pick wins 1 time in 3, so the two other doors together hold the
car 2 times in 3. The host's reveal concentrates that 2/3 on the single door
left closed: switching wins about 66.7% of the time, sticking about 33.3%.

Picture 100 doors: you pick one, the host opens 98 goats. The last closed
door now hides the car 99 times out of 100.

Run `monty-hall auto` to check the numbers, or `monty-hall play` to try it.";

#[derive(Parser, Debug)]
#[command(name = "monty-hall", version, about = "Monty Hall problem simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate many games with both strategies
    Auto {
        /// Games per strategy
        #[arg(
            long,
            env = "MONTY_TRIALS",
            default_value_t = 1000,
            value_parser = clap::value_parser!(u64).range(1..=MAX_TRIALS)
        )]
        trials: u64,

        /// Seed for a reproducible run (random when omitted)
        #[arg(long, env = "MONTY_SEED")]
        seed: Option<u64>,
    },
    /// Play interactively, one decision at a time
    Play {
        /// Seed for a reproducible session (random when omitted)
        #[arg(long, env = "MONTY_SEED")]
        seed: Option<u64>,
    },
    /// Explain the Monty Hall problem
    About,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn resolve_seed(seed: Option<u64>) -> Result<u64> {
    if let Some(seed) = seed {
        return Ok(seed);
    }
    let mut bytes = [0u8; 8];
    getrandom::fill(&mut bytes).map_err(|e| anyhow!("failed to read OS entropy: {e}"))?;
    Ok(u64::from_le_bytes(bytes))
}

fn run_auto<W: Write>(trials: u64, seed: u64, out: &mut W) -> Result<()> {
    let config = SimulationConfig::standard(expand_seed(seed)).with_trials(trials);
    let report = simulate(&config).context("simulation failed")?;
    info!(trials, seed, "simulation finished");

    writeln!(out, "Simulated {} games per strategy (seed {})", report.trials, seed)?;
    writeln!(out, "Win rate (switching):     {:.2}%", report.switch_win_rate)?;
    writeln!(out, "Win rate (not switching): {:.2}%", report.stay_win_rate)?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Auto { trials, seed } => {
            let seed = resolve_seed(seed)?;
            run_auto(trials, seed, &mut out)
        }
        Command::Play { seed } => {
            let seed = resolve_seed(seed)?;
            writeln!(out, "Session seed: {seed}")?;
            let mut session = Session::new(&expand_seed(seed));
            let stdin = io::stdin();
            player::run(&mut session, &mut stdin.lock(), &mut out)
        }
        Command::About => {
            writeln!(out, "{ABOUT}")?;
            Ok(())
        }
    }
}
