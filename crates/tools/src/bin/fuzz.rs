use anyhow::Result;
use clap::Parser;
use muncher_core::{AdvanceStopReason, Direction, Game, GamePhase, Variant, tuning};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2000)]
    ticks: u32,
    /// Fuzz the Fluid variant instead of Arcade
    #[arg(long)]
    fluid: bool,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let variant = if args.fluid { Variant::Fluid } else { Variant::Arcade };

    println!("Starting fuzz harness on seed {} for max {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(args.seed, variant);
    game.start();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_ticks = 0;
    while total_ticks < args.ticks {
        // Mostly steering; occasionally churn the phase machine.
        match rng.next_u64() % 12 {
            0 => {
                game.pause();
            }
            1 => {
                game.resume();
            }
            2 => {
                game.restart();
            }
            _ => {
                let direction = choose(
                    &mut rng,
                    &[Direction::Up, Direction::Down, Direction::Left, Direction::Right],
                );
                game.set_player_direction(direction);
            }
        }

        let result = game.advance(10);
        total_ticks += result.simulated_ticks;
        match result.stop_reason {
            AdvanceStopReason::GameOver => {
                println!("Game over at tick {} with score {}.", total_ticks, game.state().score);
                game.restart();
            }
            AdvanceStopReason::Idle(GamePhase::Paused) => {
                game.resume();
            }
            _ => {}
        }

        // Assert invariants
        let state = game.state();
        assert!(state.maze.is_passable(state.player.pos), "invariant failed: player inside wall");
        for agent in state.agents.values() {
            assert!(state.maze.is_passable(agent.pos), "invariant failed: agent inside wall");
        }
        assert!(state.lives <= tuning::STARTING_LIVES, "invariant failed: lives grew");
        assert!(
            state.power_ticks <= tuning::POWER_DURATION_TICKS,
            "invariant failed: power overran"
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
