use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::lottery_engine::pool::EntityPool;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// One participant in the lottery.
///
/// `weights[k]` is the relative chance of winning pick `k`. `metadata` is
/// carried through untouched for whoever renders the results (team name,
/// logo path, record, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub weights: Vec<f64>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Entity {
    /// Entity with no display metadata.
    pub fn new(id: impl Into<String>, weights: impl Into<Vec<f64>>) -> Self {
        Entity {
            id: id.into(),
            weights: weights.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Builder-style metadata setter.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Weight for `pick_index`, or `None` past the end of the vector.
    pub fn weight_at(&self, pick_index: usize) -> Option<f64> {
        self.weights.get(pick_index).copied()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

// ---------------------------------------------------------------------------
// Draw output
// ---------------------------------------------------------------------------

/// Raw output of one engine draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Draw {
    pub winner: Entity,
    pub pool_after: EntityPool,
}

/// A draw tagged with the pick it was made for. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawResult {
    pub pick_index: usize,
    pub winner: Entity,
    pub pool_after: EntityPool,
}

impl DrawResult {
    pub fn new(pick_index: usize, draw: Draw) -> Self {
        DrawResult {
            pick_index,
            winner: draw.winner,
            pool_after: draw.pool_after,
        }
    }

    pub fn winner_id(&self) -> &str {
        &self.winner.id
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pick {}: {}", self.pick_index + 1, self.winner.id)
    }
}

// ---------------------------------------------------------------------------
// Sequencer state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
    Drawing,
    Revealing,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle      => write!(f, "Idle"),
            Phase::Running   => write!(f, "Running"),
            Phase::Drawing   => write!(f, "Drawing"),
            Phase::Revealing => write!(f, "Revealing"),
            Phase::Complete  => write!(f, "Complete"),
        }
    }
}

/// What the caller does when every weight at the current pick is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Surface `LotteryError::DegenerateWeights` to the caller.
    #[default]
    Fail,
    /// Fall back to an equal-chance draw over the remaining entities.
    Uniform,
}

/// Observable state handed to the presentation layer after each transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencerSnapshot {
    pub phase: Phase,
    pub pick_index: usize,
    pub results: Vec<DrawResult>,
    /// The result currently being revealed, if any. At most one at a time.
    pub current_draw: Option<DrawResult>,
}
