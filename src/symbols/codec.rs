//! Symbol grid codec: symbols to activation vectors and back.
//!
//! Encoding is bipolar one-hot: `+1` on the declared channel and `-1` on
//! every other. Decoding takes the per-cell argmax but only trusts it when
//! the winning activation clears a threshold; otherwise the cell reads as
//! blank. That keeps weak, half-recalled cells from rendering as confident
//! strokes.

use crate::error::{HopfieldError, Result};
use crate::kernel::ActivationGrid;
use crate::symbols::channel::{Channel, ChannelSet};

/// Default activation a cell's winning channel must exceed to be kept.
pub const DEFAULT_BLANK_THRESHOLD: f64 = 0.5;

/// Converts between symbol sequences and activation grids.
#[derive(Clone, Debug)]
pub struct SymbolCodec {
    channels: ChannelSet,
    threshold: f64,
}

impl SymbolCodec {
    /// Create a codec over `channels` with the default threshold.
    pub fn new(channels: ChannelSet) -> Self {
        Self {
            channels,
            threshold: DEFAULT_BLANK_THRESHOLD,
        }
    }

    /// Create a codec with a custom blank threshold.
    ///
    /// Fails with `InvalidConfig` unless `threshold` is finite.
    pub fn with_threshold(channels: ChannelSet, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(HopfieldError::InvalidConfig(format!(
                "blank threshold must be finite, got {}",
                threshold
            )));
        }
        Ok(Self {
            channels,
            threshold,
        })
    }

    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Encode one symbol per cell as bipolar one-hot activation vectors.
    ///
    /// Only the declared channel is read; a symbol outside the channel set
    /// is rejected.
    pub fn to_activations(&self, symbols: &[Channel]) -> Result<ActivationGrid> {
        let width = self.channels.len();
        let mut grid = ActivationGrid::filled(symbols.len(), width, -1.0);

        for (cell, &symbol) in symbols.iter().enumerate() {
            let channel = self.channels.check(symbol)?;
            grid[(cell, channel.index())] = 1.0;
        }

        Ok(grid)
    }

    /// Decode each cell to its strongest channel, or blank if that channel's
    /// activation is not above the threshold.
    pub fn to_symbols(&self, grid: &ActivationGrid) -> Result<Vec<Channel>> {
        if grid.channels() != self.channels.len() {
            return Err(HopfieldError::ChannelCountMismatch {
                expected: self.channels.len(),
                got: grid.channels(),
            });
        }

        Ok(grid.rows().map(|row| self.decode_cell(row)).collect())
    }

    fn decode_cell(&self, row: &[f64]) -> Channel {
        let mut winner = 0;
        let mut max = f64::NEG_INFINITY;
        for (i, &v) in row.iter().enumerate() {
            if v > max {
                winner = i;
                max = v;
            }
        }

        if max <= self.threshold {
            self.channels.blank()
        } else {
            Channel::new(winner)
        }
    }

    /// Render symbols as rows of glyphs, `side` cells per row.
    pub fn render(&self, symbols: &[Channel], side: usize) -> String {
        symbols
            .chunks(side.max(1))
            .map(|row| row.iter().map(|&c| self.channels.glyph(c)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
