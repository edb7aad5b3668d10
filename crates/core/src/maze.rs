//! Maze topology and consumable state.
//!
//! Layouts are static string-art plans; a `Maze` owns the mutable cell
//! vector for one level and restores the plan wholesale on reset. All cell
//! mutation goes through [`Maze::consume`].

use sha2::{Digest, Sha256};

use crate::types::{Cell, Direction, Persona, Pos};

/// Immutable description of one board: the plan plus spawn data.
///
/// Plan characters: `#` wall, `.` pellet, `*` power pellet, space empty.
pub struct MazeLayout {
    pub name: &'static str,
    pub plan: &'static [&'static str],
    /// Rows where a horizontal step past the edge wraps to the far side.
    pub tunnel_rows: &'static [i32],
    pub player_spawn: Pos,
    pub player_facing: Direction,
    pub agent_spawns: [(Persona, Pos, Direction); 4],
    /// Target the Skittish persona retreats to when the player gets close.
    pub retreat_corner: Pos,
}

pub static CLASSIC: MazeLayout = MazeLayout {
    name: "classic",
    plan: &[
        "####################",
        "#*.......##.......*#",
        "#.##.###.##.###.##.#",
        "#..................#",
        "#.##.#.######.#.##.#",
        "#....#...##...#....#",
        "####.###.##.###.####",
        "####.#........#.####",
        "####.#.##  ##.#.####",
        "#......#    #......#",
        "####.#.######.#.####",
        "####.#........#.####",
        "####.#.######.#.####",
        "#........##........#",
        "#.##.###.##.###.##.#",
        "#..#............#..#",
        "##.#.#.######.#.#.##",
        "#....#...##...#....#",
        "#*######.##.######*#",
        "####################",
    ],
    tunnel_rows: &[],
    player_spawn: Pos { y: 1, x: 1 },
    player_facing: Direction::Right,
    agent_spawns: [
        (Persona::Chaser, Pos { y: 8, x: 9 }, Direction::Up),
        (Persona::Ambusher, Pos { y: 8, x: 10 }, Direction::Up),
        (Persona::Flanker, Pos { y: 9, x: 9 }, Direction::Down),
        (Persona::Skittish, Pos { y: 9, x: 10 }, Direction::Down),
    ],
    retreat_corner: Pos { y: 18, x: 1 },
};

/// The Fluid variant's board: the classic plan with the middle row opened
/// into a wrap-around tunnel.
pub static TUNNEL: MazeLayout = MazeLayout {
    name: "tunnel",
    plan: &[
        "####################",
        "#*.......##.......*#",
        "#.##.###.##.###.##.#",
        "#..................#",
        "#.##.#.######.#.##.#",
        "#....#...##...#....#",
        "####.###.##.###.####",
        "####.#........#.####",
        "####.#.##  ##.#.####",
        " ......#    #...... ",
        "####.#.######.#.####",
        "####.#........#.####",
        "####.#.######.#.####",
        "#........##........#",
        "#.##.###.##.###.##.#",
        "#..#............#..#",
        "##.#.#.######.#.#.##",
        "#....#...##...#....#",
        "#*######.##.######*#",
        "####################",
    ],
    tunnel_rows: &[9],
    player_spawn: Pos { y: 1, x: 1 },
    player_facing: Direction::Right,
    agent_spawns: [
        (Persona::Chaser, Pos { y: 8, x: 9 }, Direction::Up),
        (Persona::Ambusher, Pos { y: 8, x: 10 }, Direction::Up),
        (Persona::Flanker, Pos { y: 9, x: 9 }, Direction::Down),
        (Persona::Skittish, Pos { y: 9, x: 10 }, Direction::Down),
    ],
    retreat_corner: Pos { y: 18, x: 1 },
};

#[derive(Clone)]
pub struct Maze {
    layout: &'static MazeLayout,
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Maze {
    pub fn from_layout(layout: &'static MazeLayout) -> Self {
        let height = layout.plan.len();
        let width = layout.plan.first().map_or(0, |row| row.len());
        assert!(width > 0 && height > 0, "maze plan must be non-empty");

        let mut cells = Vec::with_capacity(width * height);
        for row in layout.plan {
            assert_eq!(row.len(), width, "maze plan rows must share one width");
            for ch in row.bytes() {
                cells.push(match ch {
                    b'#' => Cell::Wall,
                    b'.' => Cell::Pellet,
                    b'*' => Cell::PowerPellet,
                    b' ' => Cell::Empty,
                    other => panic!("unknown maze plan character {:?}", other as char),
                });
            }
        }

        let maze = Self { layout, width, height, cells };
        assert!(maze.is_passable(layout.player_spawn), "player spawn must be open");
        for (_, spawn, _) in layout.agent_spawns {
            assert!(maze.is_passable(spawn), "agent spawn must be open");
        }
        maze
    }

    pub fn layout(&self) -> &'static MazeLayout {
        self.layout
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Out-of-bounds positions read as Wall so callers need no bounds checks.
    pub fn cell_at(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_passable(&self, pos: Pos) -> bool {
        self.cell_at(pos) != Cell::Wall
    }

    pub fn is_tunnel_row(&self, y: i32) -> bool {
        self.layout.tunnel_rows.contains(&y)
    }

    /// Clear a consumable cell and return what it held. Anything else,
    /// including a second consume of the same cell, is a no-op.
    pub fn consume(&mut self, pos: Pos) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        let prior = self.cells[idx];
        if !prior.is_consumable() {
            return None;
        }
        self.cells[idx] = Cell::Empty;
        Some(prior)
    }

    pub fn remaining_pellets(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_consumable()).count()
    }

    /// Restore every consumable from the plan, leaving walls untouched.
    pub fn reset_consumables(&mut self) {
        *self = Self::from_layout(self.layout);
    }

    /// Stable hash of the layout (not the consumed state), recorded in
    /// journal headers so a replay can reject a mismatched board.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update((self.width as u32).to_le_bytes());
        hasher.update((self.height as u32).to_le_bytes());
        for row in self.layout.plan {
            hasher.update(row.as_bytes());
        }
        for &row in self.layout.tunnel_rows {
            hasher.update(row.to_le_bytes());
        }
        let digest = hasher.finalize();
        u64::from_le_bytes(digest[..8].try_into().expect("digest is at least 8 bytes"))
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
