//! Headless games: the player's side is driven by a second targeting AI.

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::bail;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use salvo::{init_logging, FireResult, GameEngine, GameState, Round, TargetingAi};
#[cfg(feature = "std")]
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Play computer-vs-computer games and print a JSON summary", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Seed of the first game; game i uses seed + i")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: u64,
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
#[cfg(feature = "std")]
struct GameSummary {
    seed: u64,
    winner: GameState,
    rounds: usize,
    player_shots: usize,
    computer_shots: usize,
    final_round: Option<Round>,
}

#[derive(Serialize)]
#[cfg(feature = "std")]
struct Report {
    games: Vec<GameSummary>,
    player_wins: usize,
    computer_wins: usize,
}

#[cfg(feature = "std")]
fn run_game(seed: u64) -> anyhow::Result<GameSummary> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(&mut rng)?;
    let mut shooter = TargetingAi::new();
    let mut final_round = None;

    while !engine.state().is_over() {
        let target = shooter.next_move(&mut rng)?;
        match engine.fire_player_shot(target, &mut rng)? {
            FireResult::Resolved(round) => {
                shooter.record(target, round.player.outcome)?;
                final_round = Some(round);
            }
            FireResult::Rejected(reason) => bail!("simulated shot at {} rejected: {}", target, reason),
        }
    }

    log::info!("seed {}: {:?} after {} rounds", seed, engine.state(), engine.rounds());
    Ok(GameSummary {
        seed,
        winner: engine.state(),
        rounds: engine.rounds(),
        player_shots: engine.computer_board().shot_count(),
        computer_shots: engine.player_board().shot_count(),
        final_round,
    })
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(log::LevelFilter::Info);

    let base = match cli.seed {
        Some(s) => s,
        None => rand::random(),
    };

    let games = (0..cli.games)
        .map(|i| run_game(base.wrapping_add(i)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let player_wins = games.iter().filter(|g| g.winner == GameState::PlayerWon).count();
    let computer_wins = games.iter().filter(|g| g.winner == GameState::ComputerWon).count();
    let report = Report {
        games,
        player_wins,
        computer_wins,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
