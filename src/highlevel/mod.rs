//! High-level convenience API.
//!
//! This layer provides [`Hopfield`], an ergonomic wrapper that owns a
//! [`SymbolCodec`](crate::symbols::SymbolCodec), an
//! [`AssociativeMemory`](crate::memory::AssociativeMemory) and a
//! [`RecallPolicy`](crate::memory::RecallPolicy) built from one
//! [`MemoryConfig`], plus the headless drawing [`Canvas`] that produces the
//! symbol grids it memorizes.
//!
//! For library code, prefer importing from [`kernel`](crate::kernel),
//! [`symbols`](crate::symbols) and [`memory`](crate::memory) directly.

pub mod canvas;
pub mod client;
pub mod config;

pub use canvas::{Canvas, Mode};
pub use client::{Completion, Hopfield};
pub use config::MemoryConfig;
