//! # Hopfield: associative memory for stroke grids
//!
//! A small Hopfield-style associative memory over grids of symbols. Each
//! cell of an N×N grid holds one of a handful of channels (blank plus four
//! stroke orientations by default); a grid can be memorized with a Hebbian
//! rule and later completed from a damaged cue by iterating a one-step
//! relaxation.
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield::Hopfield;
//!
//! let mut hopfield = Hopfield::new(3).unwrap();
//!
//! // Memorize a drawing
//! let drawing = hopfield.channels().parse_glyphs("\\|/- -/|\\").unwrap();
//! hopfield.memorize(&drawing).unwrap();
//!
//! // Complete it from a cue
//! let completion = hopfield.complete(&drawing).unwrap();
//! println!("{}", hopfield.render(&completion.symbols));
//! ```
//!
//! ## Core Concepts
//!
//! - **Activation grid**: one real value per (cell, channel); `+1`/`-1`
//!   one-hot for a definite symbol, intermediate values while recalling
//! - **Packed pairs**: every unordered pair of distinct cells (and of
//!   distinct channels) gets one dense index, so the weight table stores
//!   no diagonal and no mirror
//! - **Encode**: add the pattern's pairwise products into the weights
//! - **Recall**: one synchronous step `tanh(x + rate · W x)`
//! - **Relax**: repeat recall until the state settles
//!
//! ## Layers
//!
//! - [`kernel`]: pair indexing, activation grids, similarity, cue noise
//! - [`symbols`]: channel sets, the symbol codec, stroke classification
//! - [`memory`]: weight store, engine, relaxation policy
//! - [`highlevel`]: [`Hopfield`] client, configuration, drawing canvas

pub mod error;
pub mod highlevel;
pub mod kernel;
pub mod memory;
pub mod symbols;

// Re-exports for convenience
pub use error::{HopfieldError, Result};
pub use highlevel::{Canvas, Completion, Hopfield, MemoryConfig, Mode};
pub use kernel::{ActivationGrid, Corruptor, Metric, PairIndex, Similarity};
pub use memory::{relax, AssociativeMemory, RecallPolicy, Relaxed, WeightStore};
pub use symbols::{Channel, ChannelSet, ChannelSpec, SymbolCodec};
