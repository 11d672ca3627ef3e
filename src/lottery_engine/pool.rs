use std::collections::HashSet;
use serde::Serialize;

use crate::lottery_engine::{
    error::{LotteryError, Result, ValidationError},
    models::Entity,
};

/// The entities still eligible to win, in a fixed enumeration order.
///
/// A pool is a snapshot: `remove` hands back a new pool and leaves `self`
/// alone, so earlier snapshots stay valid for replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityPool {
    entities: Vec<Entity>,
    total_picks: usize,
}

impl EntityPool {
    /// Validate `entities` and build the initial pool.
    ///
    /// Every entity must have the same number of weights as the first one,
    /// ids must be unique, and weights must be finite and non-negative.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let total_picks = match entities.first() {
            Some(first) => first.weights.len(),
            None => return Err(ValidationError::EmptyPool.into()),
        };

        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(ValidationError::DuplicateId(entity.id.clone()).into());
            }
            if entity.weights.len() != total_picks {
                return Err(ValidationError::WeightLengthMismatch {
                    id: entity.id.clone(),
                    expected: total_picks,
                    found: entity.weights.len(),
                }
                .into());
            }
            for (pick_index, &weight) in entity.weights.iter().enumerate() {
                if !weight.is_finite() {
                    return Err(ValidationError::NonFiniteWeight {
                        id: entity.id.clone(),
                        pick_index,
                    }
                    .into());
                }
                if weight < 0.0 {
                    return Err(ValidationError::NegativeWeight {
                        id: entity.id.clone(),
                        pick_index,
                        weight,
                    }
                    .into());
                }
            }
        }

        Ok(EntityPool { entities, total_picks })
    }

    /// New snapshot without `id`; order of the rest is preserved.
    pub fn remove(&self, id: &str) -> Result<Self> {
        if !self.contains(id) {
            return Err(LotteryError::NotFound(id.to_string()));
        }
        Ok(EntityPool {
            entities: self.entities.iter().filter(|e| e.id != id).cloned().collect(),
            total_picks: self.total_picks,
        })
    }

    /// Entities remaining.
    pub fn size(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Length of every weight vector, fixed at construction.
    pub fn total_picks(&self) -> usize {
        self.total_picks
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.id.as_str()).collect()
    }

    /// The weight column for one pick, in enumeration order.
    /// Empty if `pick_index` is out of range.
    pub fn weights_at(&self, pick_index: usize) -> Vec<f64> {
        if pick_index >= self.total_picks {
            return Vec::new();
        }
        self.entities.iter().map(|e| e.weights[pick_index]).collect()
    }

    pub(crate) fn entity_at(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }
}
