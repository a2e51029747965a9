//! Symbol layer: what a cell can say, and how it is said numerically.
//!
//! - [`ChannelSet`]: the configurable vocabulary of channels, with glyphs,
//!   stroke orientations and a designated blank.
//! - [`SymbolCodec`]: one symbol per cell ⇄ [`ActivationGrid`].
//! - [`classify`]: pointer motion → best-aligned stroke channel.
//!
//! [`ActivationGrid`]: crate::kernel::ActivationGrid

pub mod channel;
pub mod codec;
pub mod stroke;

pub use channel::{Channel, ChannelSet, ChannelSpec};
pub use codec::{SymbolCodec, DEFAULT_BLANK_THRESHOLD};
pub use stroke::classify;
