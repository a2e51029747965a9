//! Kernel layer: the numeric foundation under the memory engine.
//!
//! - Packed unordered-pair indexing ([`PairIndex`])
//! - The per-cell activation container ([`ActivationGrid`])
//! - Grid similarity metrics ([`Similarity`])
//! - Seeded cue corruption ([`Corruptor`])
//!
//! This layer has no dependencies on [`symbols`](crate::symbols),
//! [`memory`](crate::memory) or [`highlevel`](crate::highlevel).
//!
//! # Example
//!
//! ```rust
//! use hopfield::kernel::{ActivationGrid, PairIndex, Similarity};
//!
//! let cells = PairIndex::new(4);
//! assert_eq!(cells.len(), 6);
//! assert_eq!(cells.unpack(cells.pack(1, 3)), (3, 1));
//!
//! let a = ActivationGrid::from_rows(&[[1.0, -1.0], [-1.0, 1.0]]).unwrap();
//! assert!(Similarity::cosine(&a, &a) > 0.999);
//! ```

pub mod grid;
pub mod noise;
pub mod pairs;
pub mod similarity;

pub use grid::ActivationGrid;
pub use noise::Corruptor;
pub use pairs::{checked_pair_count, pair_count, PairIndex, Pairs};
pub use similarity::{Metric, Similarity};
