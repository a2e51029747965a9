//! Associative memory engine: Hebbian encode and one-step recall.
//!
//! # Encode
//!
//! For every cell pair `p → (a, b)` and channel pair `q → (i, j)`:
//!
//! ```text
//! W[p][q] += x[a][i] · x[b][j]
//! ```
//!
//! Patterns superimpose additively. Nothing is normalised or decayed, so
//! encoding the same pattern twice doubles its pull and dissimilar patterns
//! interfere; how many patterns to store is the caller's call.
//!
//! # Recall
//!
//! One synchronous relaxation step followed by `tanh`:
//!
//! ```text
//! y = x
//! y[a][i] += rate · W[p][q] · x[b][j]
//! y[b][j] += rate · W[p][q] · x[a][i]
//! return tanh(y)
//! ```
//!
//! Both updates read the original input, never the partially updated
//! output, so the result does not depend on iteration order. The engine has
//! no stopping rule; see [`relax`](crate::memory::relax) for one.
//!
//! Both passes cost `O(C(cells, 2) · C(channels, 2))`, quartic in grid side
//! length, which keeps practical grids to a few hundred cells.

use crate::error::{HopfieldError, Result};
use crate::kernel::ActivationGrid;
use crate::memory::weights::WeightStore;
use tracing::debug;

/// Hebbian associative memory over a fixed grid shape.
///
/// `encode` takes `&mut self` and `recall` takes `&self`: many recalls may
/// share an engine, but never while a pattern is being encoded.
#[derive(Clone, Debug)]
pub struct AssociativeMemory {
    weights: WeightStore,
    patterns: usize,
}

impl AssociativeMemory {
    /// Create an engine with an all-zero weight store.
    ///
    /// Fewer than two cells or two channels is allowed and yields an engine
    /// whose recall is plain re-activation.
    pub fn new(cells: usize, channels: usize) -> Result<Self> {
        let weights = WeightStore::new(cells, channels)?;
        debug!(
            cells,
            channels,
            weights = weights.len(),
            "allocated associative memory"
        );
        Ok(Self {
            weights,
            patterns: 0,
        })
    }

    /// Number of cells per pattern.
    pub fn cells(&self) -> usize {
        self.weights.cells()
    }

    /// Number of channels per cell.
    pub fn channels(&self) -> usize {
        self.weights.channels()
    }

    /// Read-only view of the weight store.
    pub fn weights(&self) -> &WeightStore {
        &self.weights
    }

    /// Number of patterns encoded so far.
    pub fn patterns(&self) -> usize {
        self.patterns
    }

    fn check_shape(&self, grid: &ActivationGrid) -> Result<()> {
        grid.expect_shape(self.cells(), self.channels())
    }

    /// Fold a pattern into the weight store.
    pub fn encode(&mut self, grid: &ActivationGrid) -> Result<()> {
        self.check_shape(grid)?;

        let cell_pairs = *self.weights.cell_pairs();
        let channel_pairs = *self.weights.channel_pairs();

        for (p, (a, b)) in cell_pairs.iter() {
            let xa = grid.cell(a);
            let xb = grid.cell(b);
            let row = self.weights.row_mut(p);
            for (q, (i, j)) in channel_pairs.iter() {
                row[q] += xa[i] * xb[j];
            }
        }

        self.patterns += 1;
        debug!(patterns = self.patterns, "encoded pattern");
        Ok(())
    }

    /// One step of pattern completion.
    ///
    /// `rate` scales how hard stored correlations pull on the state. Zero
    /// reduces recall to `tanh(input)`.
    pub fn recall(&self, input: &ActivationGrid, rate: f64) -> Result<ActivationGrid> {
        let mut output = self.field(input, rate)?;
        output.activate();
        Ok(output)
    }

    /// Pre-activation state of a recall step: `input` plus the scaled
    /// associative pull, before `tanh`.
    pub fn field(&self, input: &ActivationGrid, rate: f64) -> Result<ActivationGrid> {
        self.check_shape(input)?;
        if !rate.is_finite() {
            return Err(HopfieldError::InvalidRate(rate));
        }

        let mut output = input.clone();
        if rate == 0.0 {
            return Ok(output);
        }

        for (p, (a, b)) in self.weights.cell_pairs().iter() {
            let row = self.weights.row(p);
            let xa = input.cell(a);
            let xb = input.cell(b);
            for (q, (i, j)) in self.weights.channel_pairs().iter() {
                let w = row[q] * rate;
                if w == 0.0 {
                    continue;
                }
                output[(a, i)] += w * xb[j];
                output[(b, j)] += w * xa[i];
            }
        }

        Ok(output)
    }

    /// Hopfield energy of a state: `-Σ W[p][q] · x[a][i] · x[b][j]`.
    ///
    /// Lower energy means the state agrees more with what was encoded.
    pub fn energy(&self, grid: &ActivationGrid) -> Result<f64> {
        self.check_shape(grid)?;

        let mut energy = 0.0;
        for (p, (a, b)) in self.weights.cell_pairs().iter() {
            let row = self.weights.row(p);
            let xa = grid.cell(a);
            let xb = grid.cell(b);
            for (q, (i, j)) in self.weights.channel_pairs().iter() {
                energy -= row[q] * xa[i] * xb[j];
            }
        }
        Ok(energy)
    }
}
