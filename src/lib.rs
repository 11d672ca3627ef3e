//! # draft_lottery
//!
//! Weighted draft lottery: draw a fixed number of picks from a pool of
//! entities, where each entity carries one weight per pick and every winner
//! leaves the pool (weighted sampling without replacement).
//!
//! ## How it works
//!
//! 1. Build an [`EntityPool`] from a list of [`Entity`] values. Construction
//!    checks that every weight vector has the same length, ids are unique, and
//!    weights are non-negative.
//! 2. Call [`draw`] with the pool, a pick index, and any [`RandomSource`]
//!    (every `rand::Rng` is one). It returns the winner and a new pool
//!    without them; the input pool is untouched.
//! 3. Or let a [`Sequencer`] drive it: `start()`, then alternate
//!    `draw_next()` and `finish_reveal()` while a UI shows each result, until
//!    the phase is [`Phase::Complete`].
//!
//! ## Key features
//!
//! - **Deterministic**: inject a seeded RNG (or `rng_seed: Some(u64)` in
//!   [`LotteryConfig`]) to reproduce the exact same draft order.
//! - **No hidden fallbacks**: all-zero weights at a pick are an error unless
//!   the caller opts into [`DegeneratePolicy::Uniform`].
//! - **Observable**: the sequencer publishes a [`SequencerSnapshot`] after
//!   every transition.
//!
//! ## Quick start
//!
//! ```rust
//! use draft_lottery::{draw, Entity, EntityPool, LotteryConfig, run_lottery};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let entities = vec![
//!     Entity::new("wolves", vec![140.0, 134.0]),
//!     Entity::new("bears",  vec![140.0, 134.0]),
//!     Entity::new("hawks",  vec![ 90.0,  92.0]),
//! ];
//!
//! // One draw by hand:
//! let pool = EntityPool::new(entities.clone()).unwrap();
//! let first = draw(&pool, 0, &mut StdRng::seed_from_u64(7)).unwrap();
//! println!("Pick 1: {}", first.winner.id);
//! assert_eq!(first.pool_after.size(), 2);
//!
//! // Every pick in one call:
//! let results = run_lottery(LotteryConfig::new(entities).with_seed(7)).unwrap();
//! for r in &results {
//!     println!("{r}");
//! }
//! ```

pub mod lottery_engine;

// Convenience re-exports so callers can use `draft_lottery::draw`
// directly without reaching into `lottery_engine::`.
pub use lottery_engine::{
    draw, draw_uniform, run_lottery, DegeneratePolicy, Draw, DrawResult, Entity, EntityPool,
    LotteryConfig, LotteryError, Phase, RandomSource, ScriptedSource, Sequencer,
    SequencerSnapshot, ValidationError,
};
