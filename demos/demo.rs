//! Walk a five-pick draft lottery one reveal at a time.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=draft_lottery=debug` to see every draw and phase change.
//!
//! This example drives a [`Sequencer`] by hand the way a UI would:
//!
//! 1. `start()` leaves `Idle`.
//! 2. `draw_next()` picks a winner and holds it in `Revealing`.
//! 3. The "UI" shows the card, then calls `finish_reveal()`.
//! 4. Repeat until `Complete`.
//!
//! A second pass runs the same seed through `run_lottery()` to show the order
//! is reproducible.

use draft_lottery::{
    run_lottery, Entity, EntityPool, LotteryConfig, Phase, Sequencer,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

const SEED: u64 = 2024;

fn teams() -> Vec<Entity> {
    // Odds per pick in tenths of a percent; worse records get heavier weights.
    vec![
        Entity::new("wolves",  vec![140.0, 134.0, 127.0, 120.0, 479.0]).with_meta("record", "17-65"),
        Entity::new("bears",   vec![140.0, 134.0, 127.0, 120.0, 479.0]).with_meta("record", "19-63"),
        Entity::new("hawks",   vec![140.0, 134.0, 127.0, 120.0, 479.0]).with_meta("record", "21-61"),
        Entity::new("otters",  vec![125.0, 122.0, 119.0, 115.0, 519.0]).with_meta("record", "24-58"),
        Entity::new("falcons", vec![105.0, 105.0, 106.0, 105.0, 579.0]).with_meta("record", "27-55"),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("draft_lottery=info")),
        )
        .init();

    let pool = EntityPool::new(teams()).expect("demo teams are valid");
    let mut seq = Sequencer::new(pool);
    seq.subscribe(|snap| {
        if snap.phase == Phase::Complete {
            println!("  -- lottery complete after {} picks --", snap.results.len());
        }
    });

    let mut rng = StdRng::seed_from_u64(SEED);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Draft lottery  seed={SEED}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    seq.start();
    while !seq.is_complete() {
        match seq.draw_next(&mut rng) {
            Ok(Some(result)) => {
                let record = result
                    .winner
                    .metadata
                    .get("record")
                    .and_then(|v| v.as_str())
                    .unwrap_or("-");
                println!("  Pick {}: {:<8} ({record})", result.pick_index + 1, result.winner.id);
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("  draw failed: {e}");
                return;
            }
        }
        seq.finish_reveal();
    }

    println!();
    println!("  Replaying with run_lottery():");
    match run_lottery(LotteryConfig::new(teams()).with_seed(SEED)) {
        Ok(results) => {
            let order: Vec<&str> = results.iter().map(|r| r.winner_id()).collect();
            println!("  {}", order.join(" → "));
        }
        Err(e) => eprintln!("  replay failed: {e}"),
    }
}
