//! tcg-sim - run headless card game simulations between random agents.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tcg_sim::agents::{Agent, SimpleAi};
use tcg_sim::core::{GameRng, SimulationError};
use tcg_sim::games::{GameEngine, Ruleset};
use tcg_sim::rules::GameResult;
use tcg_sim::sim::{GameObserver, GameSimulator, SimulationOutcome, TracingObserver};

/// Run card game simulations between random agents
#[derive(Parser, Debug)]
#[command(name = "tcg-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ruleset: RuleSetOne, SV or SVWB
    #[arg(short, long, default_value = "RuleSetOne")]
    ruleset: Ruleset,

    /// Stop a game with no winner after this many turns
    #[arg(short, long, default_value_t = tcg_sim::sim::DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Run seed; each game gets its own seed forked from it
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Log a board summary after every action
    #[arg(long)]
    pretty: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

const PLAYER_NAMES: [&str; 2] = ["Alice", "Bob"];

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn play_game(args: &Args, seed: u64) -> Result<(SimulationOutcome, String), SimulationError> {
    let agents: Vec<Box<dyn Agent>> = PLAYER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Box::new(SimpleAi::new(*name, seed.wrapping_add(i as u64))) as Box<dyn Agent>
        })
        .collect();

    let observer = if args.pretty {
        TracingObserver::pretty()
    } else {
        TracingObserver::simple()
    };

    let sim = GameSimulator::new(GameEngine::new(args.ruleset), agents, seed)?
        .with_decks(args.ruleset.build_decks(PLAYER_NAMES.len())?)?
        .with_max_turns(args.max_turns)
        .with_observer(observer);
    run(sim)
}

fn run<O: GameObserver>(
    mut sim: GameSimulator<GameEngine, O>,
) -> Result<(SimulationOutcome, String), SimulationError> {
    let outcome = sim.run()?;
    let summary = outcome.describe(sim.state());
    Ok((outcome, summary))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut rng = GameRng::new(args.seed);
    let mut wins = [0u32; PLAYER_NAMES.len()];
    let (mut draws, mut timeouts, mut aborted) = (0u32, 0u32, 0u32);

    for game in 1..=args.games {
        let seed = rng.fork().seed();
        match play_game(&args, seed) {
            Ok((outcome, summary)) => {
                println!("Game {game} (seed {seed}): {summary}");
                match outcome {
                    SimulationOutcome::Finished(GameResult::Winner(p)) => wins[p.index()] += 1,
                    SimulationOutcome::Finished(GameResult::Draw) => draws += 1,
                    SimulationOutcome::TurnLimit => timeouts += 1,
                    SimulationOutcome::Aborted => aborted += 1,
                }
            }
            Err(err) => {
                eprintln!("Game {game} (seed {seed}) failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("--- {} games of {} ---", args.games, args.ruleset);
    for (name, count) in PLAYER_NAMES.iter().zip(wins) {
        println!("{name}: {count} wins");
    }
    println!("Draws: {draws}, turn limit: {timeouts}, aborted: {aborted}");
    ExitCode::SUCCESS
}
