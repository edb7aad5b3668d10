//! Rendering for the board and UI panels.

use macroquad::prelude::*;
use muncher_app::app_loop::AppState;
use muncher_app::{format_seed, phase_label};
use muncher_core::{AgentMode, Cell, Game, Persona, Pos, RenderPos};

use crate::game_layout::{FrameLayout, PanelRect};

const WALL_COLOR: Color = Color { r: 0.10, g: 0.12, b: 0.55, a: 1.0 };
const FLOOR_COLOR: Color = Color { r: 0.02, g: 0.02, b: 0.05, a: 1.0 };
const PELLET_COLOR: Color = Color { r: 1.0, g: 0.85, b: 0.6, a: 1.0 };
const PLAYER_COLOR: Color = Color { r: 1.0, g: 0.9, b: 0.1, a: 1.0 };
const FLEE_COLOR: Color = Color { r: 0.25, g: 0.25, b: 1.0, a: 1.0 };
const FLEE_FLICKER_COLOR: Color = Color { r: 0.9, g: 0.9, b: 1.0, a: 1.0 };
const BANNER_COLOR: Color = Color { r: 1.0, g: 0.95, b: 0.3, a: 1.0 };

/// Flee shading starts flickering when this few power ticks remain.
const FLICKER_TICKS: u32 = 8;

fn persona_color(persona: Persona) -> Color {
    match persona {
        Persona::Chaser => Color { r: 1.0, g: 0.1, b: 0.1, a: 1.0 },
        Persona::Ambusher => Color { r: 1.0, g: 0.7, b: 1.0, a: 1.0 },
        Persona::Flanker => Color { r: 0.1, g: 1.0, b: 1.0, a: 1.0 },
        Persona::Skittish => Color { r: 1.0, g: 0.7, b: 0.4, a: 1.0 },
    }
}

pub fn draw_frame(game: &Game, app: &AppState, layout: &FrameLayout) {
    draw_status_panel(game, app, layout.status);
    draw_board(game, app, layout.board);
    draw_info_panel(game, app, layout.info);
}

fn draw_status_panel(game: &Game, app: &AppState, panel: PanelRect) {
    let state = game.state();
    let line = format!(
        "SCORE {:06}   HIGH {:06}   LIVES {}   LEVEL {}",
        state.score, app.high_score, state.lives, state.level
    );
    draw_text(&line, panel.x, panel.y + 24.0, 26.0, WHITE);
    let seed_line = format!("seed {}", format_seed(game.seed()));
    draw_text(&seed_line, panel.x, panel.y + 44.0, 16.0, GRAY);
}

fn draw_board(game: &Game, app: &AppState, panel: PanelRect) {
    let state = game.state();
    let columns = state.maze.width() as f32;
    let rows = state.maze.height() as f32;
    let cell = (panel.width / columns).min(panel.height / rows);
    let origin_x = panel.x + (panel.width - cell * columns) / 2.0;
    let origin_y = panel.y + (panel.height - cell * rows) / 2.0;

    for y in 0..state.maze.height() as i32 {
        for x in 0..state.maze.width() as i32 {
            let px = origin_x + x as f32 * cell;
            let py = origin_y + y as f32 * cell;
            match state.maze.cell_at(Pos { y, x }) {
                Cell::Wall => draw_rectangle(px, py, cell, cell, WALL_COLOR),
                Cell::Empty => draw_rectangle(px, py, cell, cell, FLOOR_COLOR),
                Cell::Pellet => {
                    draw_rectangle(px, py, cell, cell, FLOOR_COLOR);
                    draw_circle(px + cell / 2.0, py + cell / 2.0, cell * 0.08, PELLET_COLOR);
                }
                Cell::PowerPellet => {
                    draw_rectangle(px, py, cell, cell, FLOOR_COLOR);
                    draw_circle(px + cell / 2.0, py + cell / 2.0, cell * 0.22, PELLET_COLOR);
                }
            }
        }
    }

    let interpolate = game.variant().ruleset().interpolate;
    let alpha = app.alpha();
    let to_screen = |pos: RenderPos| {
        (origin_x + (pos.x + 0.5) * cell, origin_y + (pos.y + 0.5) * cell)
    };

    for (id, agent) in state.agents.iter() {
        let render_pos = if interpolate {
            app.trail().agent_pos(state, id, alpha)
        } else {
            RenderPos::snap(agent.pos)
        };
        let (ax, ay) = to_screen(render_pos);
        let color = if agent.mode == AgentMode::Flee {
            if state.power_ticks <= FLICKER_TICKS && state.power_ticks % 2 == 1 {
                FLEE_FLICKER_COLOR
            } else {
                FLEE_COLOR
            }
        } else {
            persona_color(agent.persona)
        };
        draw_circle(ax, ay, cell * 0.40, color);
    }

    let player_pos = if interpolate {
        app.trail().player_pos(state, alpha)
    } else {
        RenderPos::snap(state.player.pos)
    };
    let (px, py) = to_screen(player_pos);
    draw_circle(px, py, cell * 0.42, PLAYER_COLOR);
}

fn draw_info_panel(game: &Game, app: &AppState, panel: PanelRect) {
    if let Some(banner) = &app.banner {
        draw_text(banner.text, panel.x, panel.y + 26.0, 32.0, BANNER_COLOR);
        return;
    }
    let label = phase_label(game.phase());
    if !label.is_empty() {
        draw_text(label, panel.x, panel.y + 26.0, 26.0, WHITE);
    }
}
