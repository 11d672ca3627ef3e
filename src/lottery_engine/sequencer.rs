//! Driver-side state machine that turns single draws into a full lottery.
//!
//! ```text
//! Idle --start--> Running --draw_next--> Drawing --> Revealing
//!                    ^                                  |
//!                    +-----------finish_reveal----------+--> Complete
//! ```
//!
//! The sequencer decides *when* a draw may happen; the engine decides *who*
//! wins. Exactly one result is pending reveal at a time, and `reset` returns
//! to `Idle` from anywhere.

use crate::lottery_engine::{
    engine,
    error::{LotteryError, Result},
    models::{DegeneratePolicy, DrawResult, Phase, SequencerSnapshot},
    pool::EntityPool,
    random::RandomSource,
};

type Observer = Box<dyn FnMut(&SequencerSnapshot)>;

pub struct Sequencer {
    initial_pool: EntityPool,
    pool: EntityPool,
    phase: Phase,
    pick_index: usize,
    results: Vec<DrawResult>,
    current_draw: Option<DrawResult>,
    policy: DegeneratePolicy,
    observers: Vec<Observer>,
}

impl Sequencer {
    pub fn new(pool: EntityPool) -> Self {
        Self::with_policy(pool, DegeneratePolicy::default())
    }

    pub fn with_policy(pool: EntityPool, policy: DegeneratePolicy) -> Self {
        Sequencer {
            initial_pool: pool.clone(),
            pool,
            phase: Phase::Idle,
            pick_index: 0,
            results: Vec::new(),
            current_draw: None,
            policy,
            observers: Vec::new(),
        }
    }

    /// Register a callback that receives a snapshot after every transition.
    ///
    /// Each snapshot is a deep copy of the results, and every result holds its
    /// own `pool_after`, so a notification costs O(picks × pool size). Fine
    /// for draft-sized pools; large pools should poll `current_draw()` instead.
    pub fn subscribe(&mut self, observer: impl FnMut(&SequencerSnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pick_index(&self) -> usize {
        self.pick_index
    }

    pub fn results(&self) -> &[DrawResult] {
        &self.results
    }

    pub fn current_draw(&self) -> Option<&DrawResult> {
        self.current_draw.as_ref()
    }

    /// The pool the next draw will be made from.
    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Owned copy of the observable state. Same cost as an observer
    /// notification.
    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            phase: self.phase,
            pick_index: self.pick_index,
            results: self.results.clone(),
            current_draw: self.current_draw.clone(),
        }
    }

    /// Leave `Idle`. Returns `false` (and does nothing) in any other phase.
    ///
    /// A pool with no picks or no entities left has nothing to draw and goes
    /// straight to `Complete`.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = %self.phase, "start ignored");
            return false;
        }
        if self.pool.total_picks() == 0 || self.pool.is_empty() {
            self.transition(Phase::Complete);
        } else {
            self.transition(Phase::Running);
        }
        true
    }

    /// Draw the current pick and hold it for reveal.
    ///
    /// Only acts in `Running`; any other phase returns `Ok(None)` so a second
    /// request while a result is pending is ignored. An engine error puts the
    /// sequencer back in `Running` unchanged.
    pub fn draw_next<S>(&mut self, rng: &mut S) -> Result<Option<&DrawResult>>
    where
        S: RandomSource + ?Sized,
    {
        if self.phase != Phase::Running {
            tracing::debug!(phase = %self.phase, "draw request ignored");
            return Ok(None);
        }
        self.transition(Phase::Drawing);

        let outcome = match engine::draw(&self.pool, self.pick_index, rng) {
            Err(LotteryError::DegenerateWeights { pick_index })
                if self.policy == DegeneratePolicy::Uniform =>
            {
                tracing::warn!(pick_index, "all weights zero; drawing uniformly by policy");
                engine::draw_uniform(&self.pool, pick_index, rng)
            }
            other => other,
        };

        match outcome {
            Ok(draw) => {
                self.current_draw = Some(DrawResult::new(self.pick_index, draw));
                self.transition(Phase::Revealing);
                Ok(self.current_draw.as_ref())
            }
            Err(e) => {
                self.transition(Phase::Running);
                Err(e)
            }
        }
    }

    /// Commit the pending result and move to the next pick.
    /// Returns `false` if nothing was being revealed.
    pub fn finish_reveal(&mut self) -> bool {
        if self.phase != Phase::Revealing {
            return false;
        }
        let Some(result) = self.current_draw.take() else {
            return false;
        };

        self.pool = result.pool_after.clone();
        self.results.push(result);
        self.pick_index += 1;

        if self.pick_index >= self.pool.total_picks() || self.pool.is_empty() {
            self.transition(Phase::Complete);
        } else {
            self.transition(Phase::Running);
        }
        true
    }

    /// Back to `Idle` with the initial pool, discarding everything drawn.
    pub fn reset(&mut self) {
        self.pool = self.initial_pool.clone();
        self.pick_index = 0;
        self.results.clear();
        self.current_draw = None;
        self.transition(Phase::Idle);
    }

    /// Drive start/draw/reveal until `Complete` and return the results list.
    pub fn run_to_completion<S>(&mut self, rng: &mut S) -> Result<&[DrawResult]>
    where
        S: RandomSource + ?Sized,
    {
        self.start();
        while !self.is_complete() {
            match self.phase {
                Phase::Running => {
                    self.draw_next(rng)?;
                }
                Phase::Revealing => {
                    self.finish_reveal();
                }
                // draw_next never returns in Drawing, and start has left Idle.
                Phase::Idle | Phase::Drawing | Phase::Complete => break,
            }
        }
        Ok(&self.results)
    }

    fn transition(&mut self, next: Phase) {
        tracing::debug!(from = %self.phase, to = %next, pick_index = self.pick_index, "phase");
        self.phase = next;
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }
}
