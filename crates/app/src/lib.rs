pub mod app_loop;
pub mod high_score_file;
pub mod seed;

pub const APP_NAME: &str = "Muncher";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Status-bar label for a game phase.
pub fn phase_label(phase: muncher_core::GamePhase) -> &'static str {
    match phase {
        muncher_core::GamePhase::Ready => "PRESS SPACE TO START",
        muncher_core::GamePhase::Playing => "",
        muncher_core::GamePhase::Paused => "PAUSED",
        muncher_core::GamePhase::GameOver => "GAME OVER - R TO RESTART",
    }
}
