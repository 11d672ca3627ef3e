//! One weighted draw at a given pick index.
//!
//! Selection is cumulative-weight inversion: draw `r` uniformly from
//! `[0, total)`, then walk the pool in enumeration order subtracting each
//! weight until `r` falls inside one. The engine holds no state; the caller
//! owns the pool, the pick index, and the random source.

use crate::lottery_engine::{
    error::{LotteryError, Result},
    models::Draw,
    pool::EntityPool,
    random::RandomSource,
};

/// Index of the winning slot for a uniform `r` in `[0, sum(weights))`.
///
/// Comparison is strict, so a zero weight never wins. If rounding lets `r`
/// run past every slot, the last slot with positive weight wins instead.
/// Returns `None` only when no weight is positive.
pub fn select_index(weights: &[f64], r: f64) -> Option<usize> {
    let mut remaining = r;
    for (i, &w) in weights.iter().enumerate() {
        if remaining < w {
            return Some(i);
        }
        remaining -= w;
    }
    let fallback = weights.iter().rposition(|&w| w > 0.0);
    if let Some(i) = fallback {
        tracing::warn!(r, index = i, "cumulative walk overran total; using last eligible entity");
    }
    fallback
}

fn check_preconditions(pool: &EntityPool, pick_index: usize) -> Result<()> {
    if pool.is_empty() {
        return Err(LotteryError::EmptyPool);
    }
    if pick_index >= pool.total_picks() {
        return Err(LotteryError::InvalidPickIndex {
            pick_index,
            total_picks: pool.total_picks(),
        });
    }
    Ok(())
}

/// Build the `Draw` for the entity at `index` in `pool`.
fn extract(pool: &EntityPool, index: usize) -> Result<Draw> {
    let winner = pool
        .entity_at(index)
        .cloned()
        .ok_or_else(|| LotteryError::NotFound(format!("#{index}")))?;
    let pool_after = pool.remove(&winner.id)?;
    Ok(Draw { winner, pool_after })
}

/// The weight column for `pick_index` divided by its largest entry.
///
/// Ratios are unchanged, every entry is at most 1, and the sum is at most the
/// pool size, so huge finite weights cannot overflow the total. `None` when
/// no weight is positive.
fn normalized_weights(pool: &EntityPool, pick_index: usize) -> Option<Vec<f64>> {
    let weights = pool.weights_at(pick_index);
    let max = weights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return None;
    }
    Some(weights.into_iter().map(|w| w / max).collect())
}

/// Weighted draw for `pick_index`.
///
/// Fails with `EmptyPool`, `InvalidPickIndex`, or `DegenerateWeights` when
/// every weight at this pick is zero. Consumes exactly one value from `rng`
/// on success.
pub fn draw<S>(pool: &EntityPool, pick_index: usize, rng: &mut S) -> Result<Draw>
where
    S: RandomSource + ?Sized,
{
    check_preconditions(pool, pick_index)?;

    let weights = normalized_weights(pool, pick_index)
        .ok_or(LotteryError::DegenerateWeights { pick_index })?;
    let total: f64 = weights.iter().sum();

    let r = rng.next_below(total);
    let index = select_index(&weights, r)
        .ok_or(LotteryError::DegenerateWeights { pick_index })?;
    let result = extract(pool, index)?;

    tracing::debug!(
        pick_index,
        winner = %result.winner.id,
        r,
        total,
        remaining = result.pool_after.size(),
        "weighted draw"
    );
    Ok(result)
}

/// Equal-chance draw for `pick_index`, ignoring weights.
///
/// The engine never falls back to this on its own; callers that choose a
/// uniform policy for degenerate picks call it explicitly.
pub fn draw_uniform<S>(pool: &EntityPool, pick_index: usize, rng: &mut S) -> Result<Draw>
where
    S: RandomSource + ?Sized,
{
    check_preconditions(pool, pick_index)?;

    let n = pool.size();
    let index = (rng.next_below(n as f64) as usize).min(n - 1);
    let result = extract(pool, index)?;

    tracing::debug!(pick_index, winner = %result.winner.id, "uniform draw");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lottery_engine::{models::Entity, random::ScriptedSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_horse() -> EntityPool {
        EntityPool::new(vec![
            Entity::new("A", vec![999.0, 0.0]),
            Entity::new("B", vec![1.0, 0.0]),
        ])
        .unwrap()
    }

    #[test]
    fn select_index_walks_cumulative_weights() {
        let w = [2.0, 0.0, 3.0];
        assert_eq!(select_index(&w, 0.0), Some(0));
        assert_eq!(select_index(&w, 1.999), Some(0));
        assert_eq!(select_index(&w, 2.0), Some(2));
        assert_eq!(select_index(&w, 4.999), Some(2));
    }

    #[test]
    fn select_index_falls_back_to_last_positive_weight() {
        assert_eq!(select_index(&[1.0, 2.0, 0.0], 3.0), Some(1));
        assert_eq!(select_index(&[1.0, 2.0, 0.0], 1e9), Some(1));
        assert_eq!(select_index(&[0.0, 0.0], 0.0), None);
    }

    #[test]
    fn heavy_entity_wins_low_draw() {
        let pool = two_horse();
        let d = draw(&pool, 0, &mut ScriptedSource::constant(0.0)).unwrap();
        assert_eq!(d.winner.id, "A");
        assert_eq!(d.pool_after.ids(), vec!["B"]);
    }

    #[test]
    fn light_entity_wins_draw_just_below_total() {
        let pool = two_horse();
        let d = draw(&pool, 0, &mut ScriptedSource::constant(0.9999)).unwrap();
        assert_eq!(d.winner.id, "B");
        assert_eq!(d.pool_after.ids(), vec!["A"]);
    }

    #[test]
    fn all_zero_weights_are_degenerate() {
        let pool = two_horse();
        let mut src = ScriptedSource::constant(0.5);
        match draw(&pool, 1, &mut src) {
            Err(LotteryError::DegenerateWeights { pick_index }) => assert_eq!(pick_index, 1),
            other => panic!("expected DegenerateWeights, got {other:?}"),
        }
        assert_eq!(src.consumed(), 0, "degenerate draw must not consume randomness");
    }

    #[test]
    fn huge_finite_weights_keep_their_odds() {
        let pool = EntityPool::new(vec![
            Entity::new("big1", vec![1e308]),
            Entity::new("big2", vec![1e308]),
            Entity::new("tiny", vec![1.0]),
        ])
        .unwrap();

        let low = draw(&pool, 0, &mut ScriptedSource::constant(0.25)).unwrap();
        let high = draw(&pool, 0, &mut ScriptedSource::constant(0.75)).unwrap();
        assert_eq!(low.winner.id, "big1");
        assert_eq!(high.winner.id, "big2");

        let mut rng = StdRng::seed_from_u64(17);
        let tiny_wins = (0..3_000)
            .filter(|_| draw(&pool, 0, &mut rng).unwrap().winner.id == "tiny")
            .count();
        assert_eq!(tiny_wins, 0);
    }

    #[test]
    fn pick_index_at_weight_length_is_invalid() {
        let pool = two_horse();
        match draw(&pool, 2, &mut ScriptedSource::constant(0.0)) {
            Err(LotteryError::InvalidPickIndex { pick_index, total_picks }) => {
                assert_eq!((pick_index, total_picks), (2, 2));
            }
            other => panic!("expected InvalidPickIndex, got {other:?}"),
        }
    }

    #[test]
    fn empty_pool_is_rejected_before_pick_index() {
        let empty = two_horse().remove("A").unwrap().remove("B").unwrap();
        assert!(matches!(
            draw(&empty, 99, &mut ScriptedSource::constant(0.0)),
            Err(LotteryError::EmptyPool)
        ));
        assert!(matches!(
            draw_uniform(&empty, 0, &mut ScriptedSource::constant(0.0)),
            Err(LotteryError::EmptyPool)
        ));
    }

    #[test]
    fn draw_does_not_mutate_input_pool() {
        let pool = two_horse();
        let _ = draw(&pool, 0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(pool.size(), 2);
    }

    #[test]
    fn same_seed_same_winner() {
        let pool = EntityPool::new(
            (0..8).map(|i| Entity::new(format!("T{i}"), vec![(i + 1) as f64])).collect(),
        )
        .unwrap();
        let winner = |seed| draw(&pool, 0, &mut StdRng::seed_from_u64(seed)).unwrap().winner.id;
        for seed in [1u64, 42, 999] {
            assert_eq!(winner(seed), winner(seed));
        }
    }

    #[test]
    fn uniform_draw_ignores_weights() {
        let pool = two_horse();
        let low = draw_uniform(&pool, 1, &mut ScriptedSource::constant(0.0)).unwrap();
        let high = draw_uniform(&pool, 1, &mut ScriptedSource::constant(0.9)).unwrap();
        assert_eq!(low.winner.id, "A");
        assert_eq!(high.winner.id, "B");
    }

    #[test]
    fn seeded_frequencies_follow_weights() {
        // 3:1 odds at pick 0; over many seeded draws A should win roughly 75%.
        let pool = EntityPool::new(vec![
            Entity::new("A", vec![3.0]),
            Entity::new("B", vec![1.0]),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 4_000;
        let a_wins = (0..trials)
            .filter(|_| draw(&pool, 0, &mut rng).unwrap().winner.id == "A")
            .count();
        let share = a_wins as f64 / trials as f64;
        assert!((0.70..0.80).contains(&share), "A won {share:.3} of draws");
    }
}
