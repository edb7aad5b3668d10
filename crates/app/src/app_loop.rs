//! Per-frame glue between captured input and the simulation core.
//! Key mapping lives in the binary's `frame_input`; this module is
//! macroquad-free so the frame flow can be tested headlessly.

use muncher_core::{
    Banner, Direction, FrameClock, Game, GamePhase, InputPayload, LogEvent, MotionTrail,
};

/// A frontend command, already decoded from whatever keys produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppCommand {
    Steer(Direction),
    /// Space: start from Ready, pause while Playing, resume while Paused,
    /// restart after a game over.
    StartPauseResume,
    Restart,
}

/// An input the simulation accepted this frame, ready for journaling.
pub struct AcceptedInput {
    pub tick: u64,
    pub payload: InputPayload,
}

pub struct ActiveBanner {
    pub text: &'static str,
    pub remaining_secs: f32,
}

pub struct AppState {
    clock: FrameClock,
    trail: MotionTrail,
    seen_log: usize,
    pub banner: Option<ActiveBanner>,
    pub high_score: u32,
    high_score_dirty: bool,
    /// Inputs accepted during the current frame, drained by the caller to
    /// persist to the journal file.
    pub accepted_inputs: Vec<AcceptedInput>,
}

impl AppState {
    pub fn new(game: &Game, high_score: u32) -> Self {
        Self {
            clock: FrameClock::new(game.variant().ruleset().tick_interval_ms),
            trail: MotionTrail::capture(game.state()),
            seen_log: game.log().len(),
            banner: None,
            high_score,
            high_score_dirty: false,
            accepted_inputs: Vec::new(),
        }
    }

    /// Process one rendered frame: apply commands, run due ticks, and
    /// digest the new log events.
    pub fn frame(&mut self, game: &mut Game, commands: &[AppCommand], dt: f32) {
        self.accepted_inputs.clear();

        for &command in commands {
            self.apply_command(game, command);
        }

        for _ in 0..self.clock.due_ticks(dt) {
            if game.phase() != GamePhase::Playing {
                break;
            }
            self.trail = MotionTrail::capture(game.state());
            game.advance(1);
        }

        self.digest_log(game);

        if let Some(banner) = &mut self.banner {
            banner.remaining_secs -= dt;
            if banner.remaining_secs <= 0.0 {
                self.banner = None;
            }
        }
    }

    /// Interpolation fraction for this frame's rendering.
    pub fn alpha(&self) -> f32 {
        self.clock.alpha()
    }

    pub fn trail(&self) -> &MotionTrail {
        &self.trail
    }

    /// High score to persist, if it changed since the last call.
    pub fn take_dirty_high_score(&mut self) -> Option<u32> {
        if self.high_score_dirty {
            self.high_score_dirty = false;
            Some(self.high_score)
        } else {
            None
        }
    }

    fn apply_command(&mut self, game: &mut Game, command: AppCommand) {
        let (accepted, payload) = match command {
            AppCommand::Steer(direction) => {
                (game.set_player_direction(direction), InputPayload::SetDirection(direction))
            }
            AppCommand::StartPauseResume => match game.phase() {
                GamePhase::Ready => (game.start(), InputPayload::Start),
                GamePhase::Playing => (game.pause(), InputPayload::Pause),
                GamePhase::Paused => (game.resume(), InputPayload::Resume),
                GamePhase::GameOver => (game.restart(), InputPayload::Restart),
            },
            AppCommand::Restart => match game.phase() {
                GamePhase::Ready => (game.start(), InputPayload::Start),
                _ => (game.restart(), InputPayload::Restart),
            },
        };
        if accepted {
            self.accepted_inputs.push(AcceptedInput { tick: game.current_tick(), payload });
        }
    }

    fn digest_log(&mut self, game: &Game) {
        for event in &game.log()[self.seen_log..] {
            match *event {
                LogEvent::ScoreChanged { score } => {
                    if score > self.high_score {
                        self.high_score = score;
                        self.high_score_dirty = true;
                    }
                }
                LogEvent::BannerShown { banner, duration_ms } => {
                    self.show_banner(banner, duration_ms);
                }
                _ => {}
            }
        }
        self.seen_log = game.log().len();
    }

    fn show_banner(&mut self, banner: Banner, duration_ms: u32) {
        self.banner = Some(ActiveBanner {
            text: banner_text(banner),
            remaining_secs: duration_ms as f32 / 1000.0,
        });
    }
}

pub fn banner_text(banner: Banner) -> &'static str {
    match banner {
        Banner::LifeLost => "Life Lost!",
        Banner::LevelComplete => "Level Complete!",
        Banner::GameOver => "GAME OVER!",
    }
}
