//! Memory layer: the associative memory engine and how to drive it.
//!
//! This module provides:
//!
//! - [`WeightStore`]: the packed symmetric interaction table, addressable
//!   only through unordered-pair semantics.
//!
//! - [`AssociativeMemory`]: Hebbian `encode` and single-step `recall` over
//!   a fixed `cells × channels` grid shape.
//!
//! - [`relax`] with [`RecallPolicy`]: repeated recall until the state
//!   settles or a step budget runs out.
//!
//! # Usage
//!
//! ```rust
//! use hopfield::kernel::{ActivationGrid, Corruptor};
//! use hopfield::memory::{relax, AssociativeMemory, RecallPolicy};
//!
//! let mut pattern = ActivationGrid::filled(9, 5, -1.0);
//! for cell in 0..9 {
//!     pattern[(cell, cell % 5)] = 1.0;
//! }
//!
//! let mut memory = AssociativeMemory::new(9, 5).unwrap();
//! memory.encode(&pattern).unwrap();
//!
//! // Damage the cue, then let the dynamics fill it back in
//! let mut cue = pattern.clone();
//! Corruptor::with_seed(1).erase_cells(&mut cue, 3);
//! let relaxed = relax(&memory, &cue, &RecallPolicy::default()).unwrap();
//! assert!(relaxed.steps > 0);
//! ```

pub mod engine;
pub mod relax;
pub mod weights;

pub use engine::AssociativeMemory;
pub use relax::{relax, RecallPolicy, Relaxed};
pub use weights::WeightStore;
