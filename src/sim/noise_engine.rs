//! Seeded 1D coherent noise stream
//!
//! `NoiseEngine1D` walks a cursor along one axis of a 2D noise field, so
//! consecutive draws vary smoothly. The field itself sits behind the
//! `NoiseSource` trait: the game uses OpenSimplex, tests inject stubs.
//!
//! Draws are order-dependent. Each `next` advances the cursor by exactly one
//! regardless of `offset`; the offset only shifts the sampled coordinate.

use std::fmt;

use noise::{NoiseFn, OpenSimplex};

use super::vector::map_range;
use crate::error::SimError;

/// A deterministic 2D coherent-noise field returning values in [-1, 1]
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// OpenSimplex field from the `noise` crate
pub struct OpenSimplexSource {
    noise: OpenSimplex,
}

impl OpenSimplexSource {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
        }
    }
}

impl NoiseSource for OpenSimplexSource {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.noise.get([x, y])
    }
}

/// Fixed x coordinate of the sampled line
const SAMPLE_X: f64 = 1.0;
/// Cursor value before the first draw
const CURSOR_START: i64 = 1;

pub struct NoiseEngine1D {
    seed: u32,
    smoothness: f64,
    cursor: i64,
    source: Box<dyn NoiseSource>,
}

impl fmt::Debug for NoiseEngine1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseEngine1D")
            .field("seed", &self.seed)
            .field("smoothness", &self.smoothness)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl NoiseEngine1D {
    /// OpenSimplex-backed engine
    pub fn new(seed: u32, smoothness: f64) -> Result<Self, SimError> {
        Self::with_source(seed, smoothness, Box::new(OpenSimplexSource::new(seed)))
    }

    /// Engine over an arbitrary noise field.
    ///
    /// Probes the source once (without moving the cursor) and refuses to
    /// build on a backend that returns non-finite values.
    pub fn with_source(
        seed: u32,
        smoothness: f64,
        source: Box<dyn NoiseSource>,
    ) -> Result<Self, SimError> {
        if !(smoothness.is_finite() && smoothness > 0.0) {
            return Err(SimError::NoiseBackend(format!(
                "smoothness must be positive, got {smoothness}"
            )));
        }
        let probe = source.sample(SAMPLE_X, CURSOR_START as f64 / smoothness);
        if !probe.is_finite() {
            return Err(SimError::NoiseBackend(format!(
                "source returned {probe} for seed {seed}"
            )));
        }
        Ok(Self {
            seed,
            smoothness,
            cursor: CURSOR_START,
            source,
        })
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Next value in [-1, 1], sampled `offset` steps ahead of the cursor
    pub fn next(&mut self, offset: f64) -> f64 {
        self.cursor += 1;
        let y = (self.cursor as f64 + offset) / self.smoothness;
        self.source.sample(SAMPLE_X, y).clamp(-1.0, 1.0)
    }

    /// Next value remapped from [-1, 1] into [min, max]
    pub fn next_mapped(&mut self, min: f64, max: f64, offset: f64) -> f64 {
        let n = self.next(offset);
        map_range((-1.0, 1.0), (min, max), n)
    }
}
