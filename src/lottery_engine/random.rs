//! Injectable randomness for the draw engine.
//!
//! The engine never reaches for a global generator. Any `rand::Rng` works as a
//! source, and [`ScriptedSource`] replays fixed values so a test can say
//! exactly where in `[0, total)` a draw lands.

use rand::Rng;

/// Supplies uniform values for a draw.
pub trait RandomSource {
    /// A value in `[0, upper)`. Callers guarantee `upper` is finite and > 0.
    fn next_below(&mut self, upper: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_below(&mut self, upper: f64) -> f64 {
        self.gen_range(0.0..upper)
    }
}

/// Replays a fixed, cycling list of unit fractions scaled by `upper`.
///
/// A fraction of `0.0` lands at the bottom of the range, `0.999` just below
/// the top. Fractions outside `[0, 1)` are clamped into it.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    fractions: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Source replaying `fractions` in order, wrapping around at the end.
    ///
    /// # Panics
    ///
    /// Panics if `fractions` is empty.
    pub fn new(fractions: impl Into<Vec<f64>>) -> Self {
        let fractions = fractions.into();
        assert!(!fractions.is_empty(), "ScriptedSource needs at least one value");
        ScriptedSource { fractions, cursor: 0 }
    }

    /// Always returns the same fraction.
    pub fn constant(fraction: f64) -> Self {
        Self::new(vec![fraction])
    }

    /// Values consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, upper: f64) -> f64 {
        let fraction = self.fractions[self.cursor % self.fractions.len()];
        self.cursor += 1;
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0 - f64::EPSILON)
        };
        fraction * upper
    }
}
