use anyhow::{Context, Result};
use clap::Parser;
use muncher_core::journal_file::load_journal_from_file;
use muncher_core::{ReplayResult, Variant, replay_to_end};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSONL journal file to replay
    #[arg(short, long)]
    journal: String,
    /// Replay against the Fluid variant instead of Arcade
    #[arg(long)]
    fluid: bool,
    /// Ticks to keep simulating after the last recorded input
    #[arg(long, default_value_t = 10_000)]
    drain: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let variant = if args.fluid { Variant::Fluid } else { Variant::Arcade };

    let loaded = load_journal_from_file(args.journal.as_ref())
        .map_err(|e| anyhow::anyhow!("failed to load journal '{}': {e}", args.journal))?;
    println!(
        "Loaded journal: seed {} with {} inputs (hash chain verified).",
        loaded.journal.seed,
        loaded.journal.inputs.len()
    );

    let result: ReplayResult = replay_to_end(variant, &loaded.journal, args.drain)
        .map_err(|e| anyhow::anyhow!("replay failed during execution: {e:?}"))
        .context("journal did not replay cleanly")?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("Final Phase: {:?}", result.final_phase);
    println!("Final Score: {}", result.final_score);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
