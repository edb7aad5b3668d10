//! Movement resolution against the maze, shared by the player and every
//! agent.

use super::*;
use crate::maze::Maze;

/// Resolve one step from `pos` toward `direction`.
///
/// Returns the destination cell, or `pos` unchanged when the move is
/// blocked. On a tunnel row a horizontal step past the edge wraps to the
/// far side instead of being rejected. Pure: no game state is touched.
pub fn try_move(maze: &Maze, pos: Pos, direction: Direction) -> Pos {
    let candidate = pos.step(direction);
    if maze.in_bounds(candidate) {
        return if maze.is_passable(candidate) { candidate } else { pos };
    }
    if maze.is_tunnel_row(pos.y) && matches!(direction, Direction::Left | Direction::Right) {
        let wrapped = Pos { y: candidate.y, x: candidate.x.rem_euclid(maze.width() as i32) };
        if maze.is_passable(wrapped) {
            return wrapped;
        }
    }
    pos
}

impl Game {
    /// Apply the queued turn if it is legal right now; otherwise keep it
    /// queued for a later tick.
    pub(super) fn steer_player(&mut self) {
        if let Some(queued) = self.state.player.queued
            && try_move(&self.state.maze, self.state.player.pos, queued) != self.state.player.pos
        {
            self.state.player.facing = queued;
            self.state.player.queued = None;
        }
    }

    /// Move the player along its facing. Returns whether it actually moved.
    pub(super) fn move_player(&mut self) -> bool {
        let from = self.state.player.pos;
        let to = try_move(&self.state.maze, from, self.state.player.facing);
        self.state.player.pos = to;
        to != from
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::game::test_support::started_game;
    use crate::maze::{CLASSIC, Maze, TUNNEL};

    #[test]
    fn open_step_advances_one_cell() {
        let maze = Maze::from_layout(&CLASSIC);
        let from = Pos { y: 1, x: 1 };
        assert_eq!(try_move(&maze, from, Direction::Right), Pos { y: 1, x: 2 });
        assert_eq!(try_move(&maze, from, Direction::Down), Pos { y: 2, x: 1 });
    }

    #[test]
    fn blocked_step_returns_position_unchanged() {
        let maze = Maze::from_layout(&CLASSIC);
        let from = Pos { y: 1, x: 1 };
        assert_eq!(try_move(&maze, from, Direction::Up), from);
        assert_eq!(try_move(&maze, from, Direction::Left), from);
    }

    #[test]
    fn tunnel_row_wraps_both_ways() {
        let maze = Maze::from_layout(&TUNNEL);
        let left_edge = Pos { y: 9, x: 0 };
        let right_edge = Pos { y: 9, x: 19 };
        assert_eq!(try_move(&maze, left_edge, Direction::Left), right_edge);
        assert_eq!(try_move(&maze, right_edge, Direction::Right), left_edge);
    }

    #[test]
    fn non_tunnel_row_does_not_wrap() {
        let maze = Maze::from_layout(&TUNNEL);
        let from = Pos { y: 3, x: 1 };
        assert_eq!(try_move(&maze, from, Direction::Left), from);
    }

    #[test]
    fn queued_turn_waits_until_it_becomes_legal() {
        let mut game = started_game(3);
        // At spawn (1,1) only Right and Down are open; queue Down, then it
        // should apply immediately while an Up request keeps waiting.
        game.set_player_direction(Direction::Up);
        game.advance(1);
        assert_eq!(game.state().player.facing, Direction::Right);
        assert_eq!(game.state().player.queued, Some(Direction::Up));
    }

    proptest! {
        #[test]
        fn try_move_yields_current_or_passable_adjacent_cell(
            y in 0_i32..20,
            x in 0_i32..20,
            direction_index in 0_usize..4,
        ) {
            let maze = Maze::from_layout(&TUNNEL);
            let from = Pos { y, x };
            let direction = DIRECTION_ORDER[direction_index];
            let to = try_move(&maze, from, direction);

            if to != from {
                prop_assert!(maze.is_passable(to), "destination {to:?} must be passable");
                let adjacent = manhattan(from, to) == 1;
                let wrapped = from.y == to.y
                    && maze.is_tunnel_row(from.y)
                    && from.x.abs_diff(to.x) as usize == maze.width() - 1;
                prop_assert!(
                    adjacent || wrapped,
                    "{from:?} -> {to:?} is neither adjacent nor a wrap"
                );
            }
        }
    }
}
