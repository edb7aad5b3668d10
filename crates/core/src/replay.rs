use crate::game::Game;
use crate::journal::{InputJournal, InputPayload};
use crate::types::{AdvanceStopReason, GamePhase, Variant};

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The journal was recorded against a different maze layout.
    ContentHashMismatch { expected: u64, found: u64 },
    /// Input tick stamps must be non-decreasing.
    InputOutOfOrder { seq: u64 },
    /// An input is stamped at a tick the game cannot reach (for example
    /// while paused with no resume in between).
    TickUnreachable { seq: u64, tick: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_phase: GamePhase,
    pub final_tick: u64,
    pub final_score: u32,
    pub final_snapshot_hash: u64,
}

/// Re-run a recorded journal: apply each command at its recorded tick
/// boundary, then let the run play out for at most `drain_budget` further
/// ticks. Deterministic by construction.
pub fn replay_to_end(
    variant: Variant,
    journal: &InputJournal,
    drain_budget: u32,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed, variant);

    let content_hash = game.state().maze.content_hash();
    if journal.content_hash != 0 && journal.content_hash != content_hash {
        return Err(ReplayError::ContentHashMismatch {
            expected: journal.content_hash,
            found: content_hash,
        });
    }

    let mut last_tick = 0;
    for record in &journal.inputs {
        if record.tick < last_tick {
            return Err(ReplayError::InputOutOfOrder { seq: record.seq });
        }
        while game.current_tick() < record.tick {
            let remaining = (record.tick - game.current_tick()) as u32;
            let result = game.advance(remaining);
            if result.simulated_ticks == 0 {
                return Err(ReplayError::TickUnreachable { seq: record.seq, tick: record.tick });
            }
        }
        apply_payload(&mut game, record.payload);
        last_tick = record.tick;
    }

    let mut spent = 0;
    while spent < drain_budget {
        let result = game.advance(drain_budget - spent);
        spent += result.simulated_ticks;
        match result.stop_reason {
            AdvanceStopReason::Idle(_) | AdvanceStopReason::GameOver => break,
            AdvanceStopReason::BudgetExhausted => {}
        }
    }

    Ok(ReplayResult {
        final_phase: game.phase(),
        final_tick: game.current_tick(),
        final_score: game.state().score,
        final_snapshot_hash: game.snapshot_hash(),
    })
}

fn apply_payload(game: &mut Game, payload: InputPayload) {
    // Rejected commands were never journaled, so these should all apply;
    // a stale journal degenerates to the same no-ops it held when live.
    match payload {
        InputPayload::Start => game.start(),
        InputPayload::Pause => game.pause(),
        InputPayload::Resume => game.resume(),
        InputPayload::Restart => game.restart(),
        InputPayload::SetDirection(direction) => game.set_player_direction(direction),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn journal_for(variant: Variant, seed: u64) -> InputJournal {
        let content_hash = Game::new(seed, variant).state().maze.content_hash();
        InputJournal::new(seed, content_hash)
    }

    #[test]
    fn live_run_and_replay_agree_on_the_snapshot_hash() {
        let mut journal = journal_for(Variant::Arcade, 2024);
        let mut game = Game::new(2024, Variant::Arcade);

        game.start();
        journal.append(game.current_tick(), InputPayload::Start);
        game.advance(5);
        game.set_player_direction(Direction::Down);
        journal.append(game.current_tick(), InputPayload::SetDirection(Direction::Down));
        game.advance(40);
        game.set_player_direction(Direction::Right);
        journal.append(game.current_tick(), InputPayload::SetDirection(Direction::Right));
        game.advance(55);

        // Drain exactly as many ticks as the live run played after its
        // last input so the two end on the same boundary.
        let result = replay_to_end(Variant::Arcade, &journal, 55).expect("replay should run");
        assert_eq!(result.final_tick, game.current_tick());
        assert_eq!(result.final_score, game.state().score);
        assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
    }

    #[test]
    fn pause_and_resume_replay_at_the_same_boundary() {
        let mut journal = journal_for(Variant::Fluid, 7);
        let mut game = Game::new(7, Variant::Fluid);

        game.start();
        journal.append(game.current_tick(), InputPayload::Start);
        game.advance(10);
        game.pause();
        journal.append(game.current_tick(), InputPayload::Pause);
        game.resume();
        journal.append(game.current_tick(), InputPayload::Resume);
        game.advance(20);

        let result = replay_to_end(Variant::Fluid, &journal, 20).expect("replay should run");
        assert_eq!(result.final_tick, game.current_tick());
        assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
    }

    #[test]
    fn mismatched_content_hash_is_rejected() {
        let journal = journal_for(Variant::Fluid, 7);
        let err = replay_to_end(Variant::Arcade, &journal, 10).expect_err("should reject");
        assert!(matches!(err, ReplayError::ContentHashMismatch { .. }));
    }

    #[test]
    fn out_of_order_inputs_are_rejected() {
        let mut journal = journal_for(Variant::Arcade, 7);
        journal.append(0, InputPayload::Start);
        journal.append(9, InputPayload::SetDirection(Direction::Down));
        journal.append(3, InputPayload::SetDirection(Direction::Up));
        let err = replay_to_end(Variant::Arcade, &journal, 10).expect_err("should reject");
        assert_eq!(err, ReplayError::InputOutOfOrder { seq: 2 });
    }

    #[test]
    fn inputs_stamped_past_an_idle_game_are_rejected() {
        let mut journal = journal_for(Variant::Arcade, 7);
        // No Start command, so the game can never reach tick 4.
        journal.append(4, InputPayload::SetDirection(Direction::Down));
        let err = replay_to_end(Variant::Arcade, &journal, 10).expect_err("should reject");
        assert_eq!(err, ReplayError::TickUnreachable { seq: 0, tick: 4 });
    }
}
