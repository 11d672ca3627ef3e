use thiserror::Error;

/// Reasons an entity list cannot become a pool.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Entity list is empty")]
    EmptyPool,

    #[error("Entity {id} has {found} weights, expected {expected}")]
    WeightLengthMismatch { id: String, expected: usize, found: usize },

    #[error("Duplicate entity id: {0}")]
    DuplicateId(String),

    #[error("Entity {id} has negative weight {weight} at pick {pick_index}")]
    NegativeWeight { id: String, pick_index: usize, weight: f64 },

    #[error("Entity {id} has a non-finite weight at pick {pick_index}")]
    NonFiniteWeight { id: String, pick_index: usize },
}

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot draw from an empty pool")]
    EmptyPool,

    #[error("Pick index {pick_index} out of range (pool has {total_picks} picks)")]
    InvalidPickIndex { pick_index: usize, total_picks: usize },

    #[error("All weights are zero at pick {pick_index}")]
    DegenerateWeights { pick_index: usize },

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LotteryError>;
