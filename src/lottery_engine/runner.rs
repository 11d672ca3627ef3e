use rand::{rngs::StdRng, SeedableRng};

use crate::lottery_engine::{
    config::LotteryConfig,
    error::Result,
    models::DrawResult,
    pool::EntityPool,
    sequencer::Sequencer,
};

/// Validate the entities, seed the RNG, and run every pick.
///
/// Same `rng_seed`, same entities, same results, every time.
pub fn run_lottery(config: LotteryConfig) -> Result<Vec<DrawResult>> {
    let mut rng: StdRng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let pool = EntityPool::new(config.entities)?;
    tracing::info!(
        entities = pool.size(),
        picks = pool.total_picks(),
        seed = ?config.rng_seed,
        "running lottery"
    );

    let mut sequencer = Sequencer::with_policy(pool, config.degenerate_policy);
    let results = sequencer.run_to_completion(&mut rng)?.to_vec();
    Ok(results)
}
