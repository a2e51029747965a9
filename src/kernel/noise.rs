//! Deterministic cue corruption.
//!
//! Pattern completion is only interesting from a damaged cue. `Corruptor`
//! erases cells, flips signs, or jitters values using a seeded ChaCha8 RNG,
//! so the same seed always damages a grid the same way.

use crate::kernel::grid::ActivationGrid;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded source of grid corruption.
#[derive(Clone, Debug)]
pub struct Corruptor {
    rng: ChaCha8Rng,
}

impl Corruptor {
    /// Create a corruptor with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Zero every channel of `count` distinct randomly chosen cells.
    ///
    /// Returns the erased cell indices in ascending order. `count` is capped
    /// at the number of cells.
    pub fn erase_cells(&mut self, grid: &mut ActivationGrid, count: usize) -> Vec<usize> {
        let count = count.min(grid.cells());
        let mut erased = sample(&mut self.rng, grid.cells(), count).into_vec();
        erased.sort_unstable();

        for &cell in &erased {
            grid.cell_mut(cell).fill(0.0);
        }
        erased
    }

    /// Negate each value independently with the given probability.
    pub fn flip_signs(&mut self, grid: &mut ActivationGrid, probability: f64) -> usize {
        let probability = probability.clamp(0.0, 1.0);
        let mut flipped = 0;
        for v in grid.data_mut() {
            if self.rng.gen_bool(probability) {
                *v = -*v;
                flipped += 1;
            }
        }
        flipped
    }

    /// Add uniform noise in `[-amplitude, amplitude]` to every value.
    pub fn jitter(&mut self, grid: &mut ActivationGrid, amplitude: f64) {
        if amplitude <= 0.0 {
            return;
        }
        for v in grid.data_mut() {
            *v += self.rng.gen_range(-amplitude..=amplitude);
        }
    }
}
