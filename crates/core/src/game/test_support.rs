//! Shared fixtures for the `game` submodule test suites.
//! Small boards and pre-started games so individual tests stay focused on
//! one behavior instead of setup.

use super::*;
use crate::maze::MazeLayout;

/// A plus-shaped junction open in all four directions around (3, 3).
pub(crate) static CROSSROADS: MazeLayout = MazeLayout {
    name: "crossroads",
    plan: &[
        "#######",
        "###.###",
        "###.###",
        "#.....#",
        "###.###",
        "###.###",
        "#######",
    ],
    tunnel_rows: &[],
    player_spawn: Pos { y: 3, x: 1 },
    player_facing: Direction::Right,
    agent_spawns: [
        (Persona::Chaser, Pos { y: 1, x: 3 }, Direction::Down),
        (Persona::Ambusher, Pos { y: 5, x: 3 }, Direction::Up),
        (Persona::Flanker, Pos { y: 3, x: 5 }, Direction::Left),
        (Persona::Skittish, Pos { y: 3, x: 3 }, Direction::Up),
    ],
    retreat_corner: Pos { y: 5, x: 3 },
};

/// One horizontal corridor along row 1, dead-ended at both sides.
pub(crate) static CORRIDOR: MazeLayout = MazeLayout {
    name: "corridor",
    plan: &[
        "#######",
        "#.....#",
        "#######",
    ],
    tunnel_rows: &[],
    player_spawn: Pos { y: 1, x: 1 },
    player_facing: Direction::Right,
    agent_spawns: [
        (Persona::Chaser, Pos { y: 1, x: 5 }, Direction::Left),
        (Persona::Ambusher, Pos { y: 1, x: 4 }, Direction::Left),
        (Persona::Flanker, Pos { y: 1, x: 3 }, Direction::Left),
        (Persona::Skittish, Pos { y: 1, x: 2 }, Direction::Left),
    ],
    retreat_corner: Pos { y: 1, x: 5 },
};

/// Arcade-style rules on the corridor board.
pub(crate) static CORRIDOR_RULES: Ruleset = Ruleset {
    layout: &CORRIDOR,
    tick_interval_ms: 200,
    crossing_capture: false,
    interpolate: false,
};

/// Fluid-style rules on the corridor board.
pub(crate) static CORRIDOR_CROSSING_RULES: Ruleset = Ruleset {
    layout: &CORRIDOR,
    tick_interval_ms: 120,
    crossing_capture: true,
    interpolate: true,
};

/// A fresh Arcade game that has already received the start command.
pub(crate) fn started_game(seed: u64) -> Game {
    let mut game = Game::new(seed, Variant::Arcade);
    game.start();
    game
}

/// A game over a purpose-built board and ruleset, still in Ready.
pub(crate) fn custom_game(seed: u64, rules: &'static Ruleset) -> Game {
    Game::with_ruleset(seed, rules)
}

/// Look up one agent by persona.
pub(crate) fn agent_id(game: &Game, persona: Persona) -> AgentId {
    game.state()
        .agents
        .iter()
        .find(|(_, agent)| agent.persona == persona)
        .map(|(id, _)| id)
        .expect("persona should be spawned")
}
