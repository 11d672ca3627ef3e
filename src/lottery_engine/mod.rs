//! Core lottery engine — pool validation, weighted draws, and pick sequencing.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: entities, draw results, phases, snapshots |
//! | `error`     | `ValidationError` and `LotteryError` |
//! | `pool`      | Immutable entity pool with construction-time validation |
//! | `random`    | `RandomSource` seam plus a scripted source for tests |
//! | `engine`    | One weighted draw via cumulative-weight inversion |
//! | `sequencer` | `Idle → Running → (Drawing ⇄ Revealing)* → Complete` driver |
//! | `config`    | Serde-backed `LotteryConfig` |
//! | `runner`    | Single entry point `run_lottery()` |

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod pool;
pub mod random;
pub mod runner;
pub mod sequencer;

pub use config::LotteryConfig;
pub use engine::{draw, draw_uniform, select_index};
pub use error::{LotteryError, Result, ValidationError};
pub use models::{DegeneratePolicy, Draw, DrawResult, Entity, Phase, SequencerSnapshot};
pub use pool::EntityPool;
pub use random::{RandomSource, ScriptedSource};
pub use runner::run_lottery;
pub use sequencer::Sequencer;
