//! Convenience wrapper that owns a [`SymbolCodec`], an
//! [`AssociativeMemory`] sized for the grid, and a [`RecallPolicy`], and
//! delegates to the symbol and memory layers.
//!
//! For full control, import from [`symbols`](crate::symbols) and
//! [`memory`](crate::memory) directly.

use crate::error::Result;
use crate::highlevel::canvas::Canvas;
use crate::highlevel::config::MemoryConfig;
use crate::kernel::ActivationGrid;
use crate::memory::{relax, AssociativeMemory, RecallPolicy};
use crate::symbols::{Channel, ChannelSet, SymbolCodec};
use tracing::debug;

/// Result of completing a symbol grid.
#[derive(Clone, Debug)]
pub struct Completion {
    /// Decoded symbols of the final state.
    pub symbols: Vec<Channel>,
    /// Final activation state.
    pub grid: ActivationGrid,
    /// Recall steps spent.
    pub steps: usize,
    /// Whether the state settled within the policy's budget.
    pub converged: bool,
}

/// Convenience wrapper over the symbol and memory layers.
///
/// | Use case | Recommendation |
/// |----------|---------------|
/// | Demos, drawing front ends | `Hopfield` |
/// | Custom dynamics, other vocabularies | [`AssociativeMemory`] + [`SymbolCodec`] directly |
///
/// # Example
///
/// ```rust
/// use hopfield::highlevel::Hopfield;
///
/// let mut hopfield = Hopfield::new(2).unwrap();
/// let cross = hopfield.channels().parse_glyphs("\\//\\").unwrap();
/// hopfield.memorize(&cross).unwrap();
///
/// let completion = hopfield.complete(&cross).unwrap();
/// assert_eq!(completion.symbols.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Hopfield {
    side: usize,
    codec: SymbolCodec,
    memory: AssociativeMemory,
    policy: RecallPolicy,
}

impl Hopfield {
    /// Create a `side × side` memory over the stroke channels with default
    /// settings.
    pub fn new(side: usize) -> Result<Self> {
        Self::from_config(MemoryConfig::with_side(side))
    }

    /// Create a memory from a validated configuration.
    pub fn from_config(config: MemoryConfig) -> Result<Self> {
        config.validate()?;
        let cells = config.cells()?;
        let memory = AssociativeMemory::new(cells, config.channels.len())?;
        let codec = SymbolCodec::with_threshold(config.channels, config.blank_threshold)?;

        Ok(Self {
            side: config.side,
            codec,
            memory,
            policy: config.policy,
        })
    }

    /// Grid side length.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn channels(&self) -> &ChannelSet {
        self.codec.channels()
    }

    pub fn codec(&self) -> &SymbolCodec {
        &self.codec
    }

    pub fn memory(&self) -> &AssociativeMemory {
        &self.memory
    }

    pub fn policy(&self) -> &RecallPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: RecallPolicy) -> Result<()> {
        policy.validate()?;
        self.policy = policy;
        Ok(())
    }

    /// A blank canvas matching this memory's grid and channels.
    pub fn canvas(&self, block_size: f64) -> Result<Canvas> {
        Canvas::new(self.side, block_size, self.channels().clone())
    }

    /// Encode a symbol grid into the memory.
    pub fn memorize(&mut self, symbols: &[Channel]) -> Result<()> {
        let grid = self.codec.to_activations(symbols)?;
        self.memory.encode(&grid)
    }

    /// One recall step at the policy's rate.
    pub fn recall_step(&self, grid: &ActivationGrid) -> Result<ActivationGrid> {
        self.memory.recall(grid, self.policy.rate)
    }

    /// Relax an activation grid under the policy.
    pub fn complete_grid(&self, grid: &ActivationGrid) -> Result<Completion> {
        let relaxed = relax(&self.memory, grid, &self.policy)?;
        let symbols = self.codec.to_symbols(&relaxed.grid)?;
        Ok(Completion {
            symbols,
            grid: relaxed.grid,
            steps: relaxed.steps,
            converged: relaxed.converged,
        })
    }

    /// Complete a symbol grid: encode, relax, decode.
    pub fn complete(&self, symbols: &[Channel]) -> Result<Completion> {
        let cue = self.codec.to_activations(symbols)?;
        let completion = self.complete_grid(&cue)?;
        debug!(
            steps = completion.steps,
            converged = completion.converged,
            "completed symbol grid"
        );
        Ok(completion)
    }

    /// Render symbols as text rows of this memory's side length.
    pub fn render(&self, symbols: &[Channel]) -> String {
        self.codec.render(symbols, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HopfieldError;
    use crate::kernel::Corruptor;

    fn parse(h: &Hopfield, text: &str) -> Vec<Channel> {
        h.channels().parse_glyphs(text).unwrap()
    }

    #[test]
    fn test_dimensions_follow_config() {
        let h = Hopfield::new(3).unwrap();
        assert_eq!(h.side(), 3);
        assert_eq!(h.memory().cells(), 9);
        assert_eq!(h.memory().channels(), 5);
        assert_eq!(h.memory().weights().len(), 36 * 10);
    }

    #[test]
    fn test_zero_side_rejected() {
        assert!(matches!(
            Hopfield::new(0),
            Err(HopfieldError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_memorize_wrong_size() {
        let mut h = Hopfield::new(3).unwrap();
        let symbols = parse(&h, "||||");
        assert!(matches!(
            h.memorize(&symbols),
            Err(HopfieldError::CellCountMismatch { expected: 9, got: 4 })
        ));
        assert_eq!(h.memory().patterns(), 0);
    }

    #[test]
    fn test_completes_stored_pattern() {
        let mut h = Hopfield::new(3).unwrap();
        h.set_policy(RecallPolicy::new(0.05, 32, 1e-9)).unwrap();

        let pattern = parse(&h, "\\|/- -/|\\");
        h.memorize(&pattern).unwrap();

        let completion = h.complete(&pattern).unwrap();
        assert_eq!(completion.symbols, pattern);
        assert!(completion.steps > 0);
    }

    #[test]
    fn test_completes_erased_cells() {
        let mut h = Hopfield::new(3).unwrap();
        h.set_policy(RecallPolicy::new(0.05, 32, 1e-9)).unwrap();

        let pattern = parse(&h, "\\|/- -/|\\");
        h.memorize(&pattern).unwrap();

        let mut cue = h.codec().to_activations(&pattern).unwrap();
        let erased = Corruptor::with_seed(9).erase_cells(&mut cue, 3);
        assert_eq!(erased.len(), 3);

        let completion = h.complete_grid(&cue).unwrap();
        assert_eq!(completion.symbols, pattern);
    }

    #[test]
    fn test_canvas_matches_memory() {
        let h = Hopfield::new(3).unwrap();
        let canvas = h.canvas(16.0).unwrap();
        assert_eq!(canvas.symbols().len(), 9);
        assert_eq!(canvas.channels(), h.channels());
    }

    #[test]
    fn test_render() {
        let h = Hopfield::new(2).unwrap();
        let symbols = parse(&h, "|-/\\");
        assert_eq!(h.render(&symbols), "|-\n/\\");
    }
}
