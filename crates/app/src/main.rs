use directories::ProjectDirs;
use macroquad::prelude::*;
use muncher_app::app_loop::AppState;
use muncher_app::{APP_NAME, high_score_file, seed};
use muncher_core::Game;
use muncher_core::journal_file::JournalWriter;
use taffy::TaffyTree;

mod frame_input;
mod game_layout;
mod ui_render;
mod window_config;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn journal_path() -> Option<std::path::PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("last_run.jsonl"))
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match seed::resolve_seed_from_args(&args, seed::generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };
    let variant = seed::resolve_variant_from_args(&args);

    let mut game = Game::new(seed_choice.value(), variant);

    let high_score_path = high_score_file::HighScoreFile::get_default_path();
    let stored_high_score =
        high_score_path.as_deref().map_or(0, high_score_file::load_or_zero);
    let mut app = AppState::new(&game, stored_high_score);

    let mut journal_writer = journal_path().and_then(|path| {
        JournalWriter::create(
            &path,
            game.seed(),
            env!("CARGO_PKG_VERSION"),
            game.state().maze.content_hash(),
        )
        .inspect_err(|error| eprintln!("journal disabled: {error}"))
        .ok()
    });

    let mut taffy = TaffyTree::new();
    let nodes = game_layout::setup_layout(&mut taffy);

    loop {
        let commands = frame_input::capture_frame_input();
        app.frame(&mut game, &commands, get_frame_time());

        let mut journal_failed = false;
        if let Some(writer) = &mut journal_writer {
            for input in &app.accepted_inputs {
                if let Err(error) = writer.append(input.tick, &input.payload) {
                    eprintln!("journal write failed, disabling: {error}");
                    journal_failed = true;
                    break;
                }
            }
        }
        if journal_failed {
            journal_writer = None;
        }

        if let Some(high_score) = app.take_dirty_high_score()
            && let Some(path) = high_score_path.as_deref()
            && let Err(error) =
                high_score_file::HighScoreFile::new(high_score).write_atomic(path)
        {
            eprintln!("high score write failed: {error}");
        }

        let layout =
            game_layout::compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height());
        clear_background(BLACK);
        ui_render::draw_frame(&game, &app, &layout);

        next_frame().await
    }
}
