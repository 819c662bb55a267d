//! Block Breaker entry point
//!
//! Runs a level headless at the fixed tick rate and logs how it ended.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result};
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
use block_breaker::GameConfig;
#[cfg(not(target_arch = "wasm32"))]
use block_breaker::consts::FRAMES_PER_SECOND;
#[cfg(not(target_arch = "wasm32"))]
use block_breaker::sim::{GameState, TickInput, tick};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Breakout simulation", long_about = None)]
struct Args {
    /// JSON game config; missing or invalid files fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the launch spread
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Let the paddle follow the lowest ball
    #[arg(long)]
    autopilot: bool,
    /// Override the config's tick limit
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }

    if args.dump_config {
        let json = config.to_json().context("serializing config")?;
        println!("{json}");
        return Ok(());
    }

    log::info!("Block Breaker (headless) starting with seed {}", args.seed);
    let mut state = GameState::new(config, args.seed);
    let input = TickInput {
        autopilot: args.autopilot,
        ..TickInput::default()
    };

    let outcome = loop {
        if let Some(outcome) = tick(&mut state, &input) {
            break outcome;
        }
    };

    let seconds = state.time_ticks as f64 / f64::from(FRAMES_PER_SECOND);
    log::info!(
        "{:?} after {} ticks ({:.1}s of play), score {}, {} blocks left",
        outcome,
        state.time_ticks,
        seconds,
        state.score.value(),
        state.block_count()
    );
    println!("{:?} score={} ticks={}", outcome, state.score.value(), state.time_ticks);

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; the library is used directly
}
