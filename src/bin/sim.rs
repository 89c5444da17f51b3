use std::collections::VecDeque;

use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    enqueue_neighbors, init_logging, pick_shot, random_fleet, Coord, Game, MemoryStore, Outcome,
    SessionStore, ShotEvent,
};
use serde_json::json;

/// Self-play driver: a scripted player using the same hunt/target policy
/// as the computer, run through the session store.
#[derive(Parser)]
#[command(about = "Simulate full games against the computer opponent")]
struct Args {
    /// Fix the RNG seed for reproducible games.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let store = MemoryStore::new();

    let mut results = Vec::new();
    for n in 0..args.games {
        let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(n));

        let game = Game::new(&mut rng)?;
        let id = game.id().clone();
        store.save(&game)?;

        let placements = random_fleet(&mut rng)?;
        store.update(&id, |g| g.submit_fleet(&placements))?;

        let mut pending: VecDeque<Coord> = VecDeque::new();
        let mut shots = 0usize;
        let outcome = loop {
            let current = store.load(&id)?;
            let (row, col) = pick_shot(&mut rng, current.player_shots(), &mut pending);
            let report = store.update(&id, |g| g.fire_shot(&mut rng, row, col))?;
            shots += 1;
            if report.player_event == ShotEvent::Hit {
                enqueue_neighbors(&mut pending, row, col);
            }
            log::info!("game {id}: {}", report.status_message());
            if let Some(outcome) = report.outcome {
                break outcome;
            }
        };

        results.push(json!({
            "gameId": id.to_string(),
            "winner": match outcome {
                Outcome::PlayerWins => "player",
                Outcome::CpuWins => "computer",
            },
            "shots": shots,
        }));
    }

    println!("{}", serde_json::to_string(&json!({ "games": results }))?);
    Ok(())
}
