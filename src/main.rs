#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    init_logging,
    ui::{self, Command, TerminalGuard},
    FireResult, GameEngine, GameState, Intent, IntentResult, COMPUTER_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use crossterm::event::{self, Event, KeyEventKind};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::{io, thread, time::Duration};

#[derive(Parser)]
#[command(author, version, about = "Battleship against the computer, in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = COMPUTER_DELAY_MS, help = "Pause before the computer fires, in milliseconds")]
    delay_ms: u64,
    #[arg(long, help = "Skip the explosion animation at the end of the game")]
    no_animation: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(log::LevelFilter::Off);

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let engine = GameEngine::new(&mut rng)?;

    let state = {
        let _guard = TerminalGuard::enter()?;
        play(engine, &mut rng, &cli)?
    };

    match state {
        GameState::PlayerWon => println!("You sank the enemy fleet."),
        GameState::ComputerWon => println!("The computer sank your fleet."),
        GameState::InProgress => println!("Game abandoned."),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(mut engine: GameEngine, rng: &mut SmallRng, cli: &Cli) -> anyhow::Result<GameState> {
    let mut out = io::stdout();
    let delay = Duration::from_millis(cli.delay_ms);

    loop {
        ui::draw(&mut out, &engine, None)?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = ui::command_for_key(key) else {
            continue;
        };

        match command {
            Command::Explode => {
                if !cli.no_animation {
                    ui::animate_explosion(&mut out, "test")?;
                }
                continue;
            }
            Command::Play(Intent::FireAtCursor) => {
                let target = engine.cursor();
                let result = engine.fire_player_shot_paced(target, rng, |e| {
                    if let Err(err) = ui::draw(&mut out, e, None) {
                        log::warn!("redraw failed: {}", err);
                    }
                    thread::sleep(delay);
                })?;
                if let FireResult::Rejected(reason) = result {
                    log::debug!("shot ignored: {}", reason);
                }
            }
            Command::Play(intent) => {
                if engine.apply_intent(intent, rng)? == IntentResult::Quit {
                    return Ok(engine.state());
                }
            }
        }

        if let Some(loser) = engine.state().loser() {
            if !cli.no_animation {
                ui::animate_explosion(&mut out, ui::side_label(loser))?;
            }
            ui::draw(&mut out, &engine, ui::banner(engine.state()))?;
            wait_for_key()?;
            return Ok(engine.state());
        }
    }
}

#[cfg(feature = "std")]
fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}
