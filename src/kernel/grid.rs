//! Activation grid: one real-valued activation vector per cell.
//!
//! Stored as a single contiguous buffer, cell-major, so `cell(i)` is a
//! `channels`-long slice. Values are unconstrained on input; after a recall
//! step every value lies in `(-1, 1)`.

use crate::error::{HopfieldError, Result};
use std::ops::{Index, IndexMut};

/// Activation vectors for every cell of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivationGrid {
    cells: usize,
    channels: usize,
    data: Vec<f64>,
}

impl ActivationGrid {
    /// Create an all-zero grid.
    pub fn zeros(cells: usize, channels: usize) -> Self {
        Self {
            cells,
            channels,
            data: vec![0.0; cells * channels],
        }
    }

    /// Create a grid with every value set to `value`.
    pub fn filled(cells: usize, channels: usize, value: f64) -> Self {
        Self {
            cells,
            channels,
            data: vec![value; cells * channels],
        }
    }

    /// Create a grid from a flat cell-major buffer.
    pub fn from_flat(cells: usize, channels: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != cells * channels {
            return Err(HopfieldError::InvalidDimension(format!(
                "flat buffer of {} values cannot hold {} cells x {} channels",
                data.len(),
                cells,
                channels
            )));
        }
        Ok(Self {
            cells,
            channels,
            data,
        })
    }

    /// Create a grid from one row per cell.
    ///
    /// Every row must have the same length; ragged input is rejected rather
    /// than padded.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let channels = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * channels);

        for row in rows {
            let row = row.as_ref();
            if row.len() != channels {
                return Err(HopfieldError::ChannelCountMismatch {
                    expected: channels,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            cells: rows.len(),
            channels,
            data,
        })
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Number of channels per cell.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Activation vector of one cell.
    pub fn cell(&self, index: usize) -> &[f64] {
        let start = index * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Mutable activation vector of one cell.
    pub fn cell_mut(&mut self, index: usize) -> &mut [f64] {
        let start = index * self.channels;
        &mut self.data[start..start + self.channels]
    }

    /// Value of `channel` in `cell`.
    pub fn get(&self, cell: usize, channel: usize) -> f64 {
        self.data[cell * self.channels + channel]
    }

    /// Iterate activation vectors in cell order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics; a zero-channel grid has no values anyway.
        self.data.chunks_exact(self.channels.max(1)).take(self.cells)
    }

    /// Raw cell-major values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw cell-major values.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Copy out as one `Vec` per cell.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.cells).map(|i| self.cell(i).to_vec()).collect()
    }

    /// Apply `tanh` to every value in place.
    pub fn activate(&mut self) {
        for v in &mut self.data {
            *v = v.tanh();
        }
    }

    /// Return a copy with `tanh` applied to every value.
    pub fn activated(&self) -> Self {
        let mut out = self.clone();
        out.activate();
        out
    }

    /// Check that this grid has exactly the given shape.
    pub fn expect_shape(&self, cells: usize, channels: usize) -> Result<()> {
        if self.cells != cells {
            return Err(HopfieldError::CellCountMismatch {
                expected: cells,
                got: self.cells,
            });
        }
        if self.channels != channels {
            return Err(HopfieldError::ChannelCountMismatch {
                expected: channels,
                got: self.channels,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for ActivationGrid {
    type Output = f64;

    fn index(&self, (cell, channel): (usize, usize)) -> &Self::Output {
        &self.data[cell * self.channels + channel]
    }
}

impl IndexMut<(usize, usize)> for ActivationGrid {
    fn index_mut(&mut self, (cell, channel): (usize, usize)) -> &mut Self::Output {
        &mut self.data[cell * self.channels + channel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let g = ActivationGrid::from_rows(&[[1.0, -1.0, -1.0], [-1.0, 1.0, -1.0]]).unwrap();
        assert_eq!(g.cells(), 2);
        assert_eq!(g.channels(), 3);
        assert_eq!(g.cell(1), &[-1.0, 1.0, -1.0]);
        assert_eq!(g[(0, 0)], 1.0);
        assert_eq!(g.get(1, 1), 1.0);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![1.0, 0.0], vec![1.0]];
        let err = ActivationGrid::from_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            HopfieldError::ChannelCountMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_from_flat_length_checked() {
        assert!(ActivationGrid::from_flat(2, 3, vec![0.0; 6]).is_ok());
        assert!(ActivationGrid::from_flat(2, 3, vec![0.0; 5]).is_err());
    }

    #[test]
    fn test_activate_bounds_values() {
        let mut g = ActivationGrid::from_rows(&[[50.0, -50.0, 0.0]]).unwrap();
        g.activate();
        assert!(g.data().iter().all(|v| (-1.0..=1.0).contains(v)));
        assert_eq!(g[(0, 2)], 0.0);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]];
        let g = ActivationGrid::from_rows(&rows).unwrap();
        assert_eq!(g.rows().count(), 3);
        assert_eq!(g.to_rows(), rows);
    }

    #[test]
    fn test_expect_shape() {
        let g = ActivationGrid::zeros(4, 5);
        assert!(g.expect_shape(4, 5).is_ok());
        assert!(matches!(
            g.expect_shape(3, 5),
            Err(HopfieldError::CellCountMismatch { expected: 3, got: 4 })
        ));
        assert!(matches!(
            g.expect_shape(4, 2),
            Err(HopfieldError::ChannelCountMismatch { expected: 2, got: 5 })
        ));
    }
}
