//! Channels: the symbolic classes a cell can express.
//!
//! A [`ChannelSet`] is an explicit configuration value rather than a global
//! table, so engines and codecs built over different symbol vocabularies
//! can coexist. Each channel carries a display glyph and, for stroke
//! channels, a 2-D orientation used to classify pointer motion. Exactly one
//! channel is designated blank.

use crate::error::{HopfieldError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Index of a channel within a [`ChannelSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Channel(usize);

impl Channel {
    /// Wrap a raw channel index. Validity is checked by the set it is used with.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index of this channel.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Descriptor of one channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub name: String,
    pub glyph: char,
    /// Stroke direction this channel stands for. `None` for channels that
    /// are never produced by drawing, such as blank.
    #[serde(default)]
    pub orientation: Option<[f64; 2]>,
}

impl ChannelSpec {
    pub fn new(name: impl Into<String>, glyph: char, orientation: Option<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            glyph,
            orientation,
        }
    }
}

#[derive(Deserialize)]
struct RawChannelSet {
    channels: Vec<ChannelSpec>,
    #[serde(default)]
    blank: usize,
}

/// Ordered set of channels with a designated blank member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChannelSet")]
pub struct ChannelSet {
    channels: Vec<ChannelSpec>,
    blank: usize,
}

impl TryFrom<RawChannelSet> for ChannelSet {
    type Error = HopfieldError;

    fn try_from(raw: RawChannelSet) -> Result<Self> {
        Self::new(raw.channels, raw.blank)
    }
}

impl ChannelSet {
    /// Build a validated channel set.
    ///
    /// Fails when the set is empty, `blank` is out of range, or two channels
    /// share a glyph.
    pub fn new(channels: Vec<ChannelSpec>, blank: usize) -> Result<Self> {
        if channels.is_empty() {
            return Err(HopfieldError::InvalidConfig(
                "channel set must not be empty".into(),
            ));
        }
        if blank >= channels.len() {
            return Err(HopfieldError::InvalidConfig(format!(
                "blank channel {} out of range for {} channels",
                blank,
                channels.len()
            )));
        }

        let mut glyphs = HashSet::new();
        for spec in &channels {
            if !glyphs.insert(spec.glyph) {
                return Err(HopfieldError::InvalidConfig(format!(
                    "glyph {:?} used by more than one channel",
                    spec.glyph
                )));
            }
            if let Some([x, y]) = spec.orientation {
                if !x.is_finite() || !y.is_finite() {
                    return Err(HopfieldError::InvalidConfig(format!(
                        "channel {:?} has a non-finite orientation",
                        spec.name
                    )));
                }
            }
        }

        Ok(Self { channels, blank })
    }

    /// The five-channel stroke vocabulary: blank plus four orientations.
    ///
    /// Orientations are in screen coordinates (y grows downward), so the
    /// `\` diagonal runs along (+x, +y).
    pub fn strokes() -> Self {
        Self {
            channels: vec![
                ChannelSpec::new("blank", ' ', None),
                ChannelSpec::new("vertical", '|', Some([0.0, 1.0])),
                ChannelSpec::new("horizontal", '-', Some([1.0, 0.0])),
                ChannelSpec::new("left_diagonal", '\\', Some([0.707, 0.707])),
                ChannelSpec::new("right_diagonal", '/', Some([0.707, -0.707])),
            ],
            blank: 0,
        }
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Always false for a validated set; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// The designated blank channel.
    pub fn blank(&self) -> Channel {
        Channel(self.blank)
    }

    /// Channel at `index`, if the set has one.
    pub fn channel(&self, index: usize) -> Option<Channel> {
        (index < self.channels.len()).then_some(Channel(index))
    }

    /// Check that `channel` belongs to this set.
    pub fn check(&self, channel: Channel) -> Result<Channel> {
        self.channel(channel.0)
            .ok_or(HopfieldError::UnknownChannel {
                index: channel.0,
                channels: self.channels.len(),
            })
    }

    /// Descriptor of `channel`.
    pub fn spec(&self, channel: Channel) -> Option<&ChannelSpec> {
        self.channels.get(channel.0)
    }

    /// Glyph of `channel`, or `'?'` for a channel outside the set.
    pub fn glyph(&self, channel: Channel) -> char {
        self.spec(channel).map_or('?', |s| s.glyph)
    }

    /// Find the channel drawn with `glyph`.
    pub fn by_glyph(&self, glyph: char) -> Option<Channel> {
        self.channels
            .iter()
            .position(|s| s.glyph == glyph)
            .map(Channel)
    }

    /// Find the channel called `name`.
    pub fn by_name(&self, name: &str) -> Option<Channel> {
        self.channels
            .iter()
            .position(|s| s.name == name)
            .map(Channel)
    }

    /// Iterate `(channel, descriptor)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &ChannelSpec)> {
        self.channels
            .iter()
            .enumerate()
            .map(|(i, s)| (Channel(i), s))
    }

    /// Parse a string of glyphs into channels, one per char.
    pub fn parse_glyphs(&self, text: &str) -> Result<Vec<Channel>> {
        text.chars()
            .map(|c| {
                self.by_glyph(c).ok_or_else(|| {
                    HopfieldError::InvalidConfig(format!("no channel is drawn as {:?}", c))
                })
            })
            .collect()
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::strokes()
    }
}
