//! Packed symmetric weight store.
//!
//! Weights are kept in a `C(cells, 2) × C(channels, 2)` table: one row per
//! unordered cell pair, one column per unordered channel pair, both in the
//! canonical `(hi, lo)` order of [`PairIndex`]. Entry `[p][q]` with
//! `p → (cell_hi, cell_lo)` and `q → (chan_hi, chan_lo)` couples channel
//! `chan_hi` of `cell_hi` with channel `chan_lo` of `cell_lo`.
//!
//! The layout has no diagonal and no mirror image. A coupling is addressable
//! only when the cells differ, the channels differ, and the higher cell goes
//! with the higher channel; everything else is absent by construction, and
//! the lookups below return `None` for it instead of inventing a zero slot.

use crate::error::{HopfieldError, Result};
use crate::kernel::pairs::{checked_pair_count, PairIndex};

/// Symmetric, self-pair-free interaction table.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightStore {
    cell_pairs: PairIndex,
    channel_pairs: PairIndex,
    data: Vec<f64>,
}

impl WeightStore {
    /// Allocate a zero-filled store for `cells` cells and `channels` channels.
    ///
    /// Fails if the table would not fit in memory addressing.
    pub fn new(cells: usize, channels: usize) -> Result<Self> {
        let rows = checked_pair_count(cells).ok_or_else(|| {
            HopfieldError::InvalidDimension(format!("{} cells: pair count overflows", cells))
        })?;
        let cols = checked_pair_count(channels).ok_or_else(|| {
            HopfieldError::InvalidDimension(format!(
                "{} channels: pair count overflows",
                channels
            ))
        })?;
        let len = rows.checked_mul(cols).ok_or_else(|| {
            HopfieldError::InvalidDimension(format!(
                "weight table of {} x {} entries overflows",
                rows, cols
            ))
        })?;
        cells.checked_mul(channels).ok_or_else(|| {
            HopfieldError::InvalidDimension(format!(
                "{} cells x {} channels overflows",
                cells, channels
            ))
        })?;

        Ok(Self {
            cell_pairs: PairIndex::new(cells),
            channel_pairs: PairIndex::new(channels),
            data: vec![0.0; len],
        })
    }

    /// Number of cells the store covers.
    pub fn cells(&self) -> usize {
        self.cell_pairs.size()
    }

    /// Number of channels the store covers.
    pub fn channels(&self) -> usize {
        self.channel_pairs.size()
    }

    /// Pair index over cells (rows).
    pub fn cell_pairs(&self) -> &PairIndex {
        &self.cell_pairs
    }

    /// Pair index over channels (columns).
    pub fn channel_pairs(&self) -> &PairIndex {
        &self.channel_pairs
    }

    /// Total number of stored weights.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the store holds no weights (fewer than two cells or channels).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when every weight is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&w| w == 0.0)
    }

    /// Weights of one cell pair, one per channel pair.
    ///
    /// # Panics
    /// If `p` is not a valid cell-pair index.
    pub fn row(&self, p: usize) -> &[f64] {
        let width = self.channel_pairs.len();
        &self.data[p * width..(p + 1) * width]
    }

    pub(crate) fn row_mut(&mut self, p: usize) -> &mut [f64] {
        let width = self.channel_pairs.len();
        &mut self.data[p * width..(p + 1) * width]
    }

    /// Weight at packed `(cell_pair, channel_pair)` coordinates.
    pub fn at(&self, p: usize, q: usize) -> f64 {
        self.row(p)[q]
    }

    /// Packed slot coupling `(cell_a, channel_a)` with `(cell_b, channel_b)`.
    fn slot(
        &self,
        cell_a: usize,
        channel_a: usize,
        cell_b: usize,
        channel_b: usize,
    ) -> Option<usize> {
        if cell_a >= self.cells() || cell_b >= self.cells() {
            return None;
        }
        if channel_a >= self.channels() || channel_b >= self.channels() {
            return None;
        }

        // Orient so that the first endpoint is the higher cell.
        let ((ch, kh), (cl, kl)) = if cell_a > cell_b {
            ((cell_a, channel_a), (cell_b, channel_b))
        } else {
            ((cell_b, channel_b), (cell_a, channel_a))
        };
        if ch == cl || kh <= kl {
            return None;
        }

        let p = self.cell_pairs.pack(ch, cl);
        let q = self.channel_pairs.pack(kh, kl);
        Some(p * self.channel_pairs.len() + q)
    }

    /// Coupling between `(cell_a, channel_a)` and `(cell_b, channel_b)`.
    ///
    /// Order of the two endpoints does not matter. Returns `None` for
    /// couplings the layout does not store.
    pub fn get(
        &self,
        cell_a: usize,
        channel_a: usize,
        cell_b: usize,
        channel_b: usize,
    ) -> Option<f64> {
        self.slot(cell_a, channel_a, cell_b, channel_b).map(|i| self.data[i])
    }

    /// Add `delta` to a coupling, returning the new weight.
    ///
    /// Returns `None` and leaves the store untouched for couplings the
    /// layout does not store.
    pub fn accumulate(
        &mut self,
        cell_a: usize,
        channel_a: usize,
        cell_b: usize,
        channel_b: usize,
        delta: f64,
    ) -> Option<f64> {
        let i = self.slot(cell_a, channel_a, cell_b, channel_b)?;
        self.data[i] += delta;
        Some(self.data[i])
    }

    /// Largest absolute weight, or 0.0 for an empty store.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |m, w| m.max(w.abs()))
    }
}
