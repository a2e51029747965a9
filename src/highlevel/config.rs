//! Configuration for the high-level client.

use crate::error::{HopfieldError, Result};
use crate::memory::RecallPolicy;
use crate::symbols::{ChannelSet, DEFAULT_BLANK_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Everything needed to build a [`Hopfield`](crate::highlevel::Hopfield).
///
/// Missing JSON fields fall back to the defaults: an 8×8 grid over the
/// five stroke channels, blank threshold 0.5, and the default
/// [`RecallPolicy`].
///
/// ```rust
/// use hopfield::highlevel::MemoryConfig;
///
/// let config = MemoryConfig::from_json(r#"{"side": 4, "policy": {"rate": 0.2}}"#).unwrap();
/// assert_eq!(config.side, 4);
/// assert_eq!(config.channels.len(), 5);
/// assert_eq!(config.policy.rate, 0.2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Grid side length; the grid has `side²` cells.
    pub side: usize,
    pub channels: ChannelSet,
    /// Winning activations at or below this decode as blank.
    pub blank_threshold: f64,
    pub policy: RecallPolicy,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            side: 8,
            channels: ChannelSet::strokes(),
            blank_threshold: DEFAULT_BLANK_THRESHOLD,
            policy: RecallPolicy::default(),
        }
    }
}

impl MemoryConfig {
    /// Default configuration for a `side × side` grid.
    pub fn with_side(side: usize) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> Result<usize> {
        self.side.checked_mul(self.side).ok_or_else(|| {
            HopfieldError::InvalidDimension(format!("grid side {} overflows", self.side))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.side == 0 {
            return Err(HopfieldError::InvalidDimension(
                "grid side must be at least 1".into(),
            ));
        }
        self.cells()?;
        if !self.blank_threshold.is_finite() {
            return Err(HopfieldError::InvalidConfig(format!(
                "blank threshold must be finite, got {}",
                self.blank_threshold
            )));
        }
        self.policy.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MemoryConfig::default();
        assert_eq!(config.side, 8);
        assert_eq!(config.cells().unwrap(), 64);
        assert_eq!(config.blank_threshold, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_custom_channels() {
        let json = r##"{
            "side": 3,
            "channels": {
                "channels": [
                    {"name": "off", "glyph": "."},
                    {"name": "on", "glyph": "#"}
                ]
            },
            "blank_threshold": 0.25
        }"##;
        let config = MemoryConfig::from_json(json).unwrap();
        assert_eq!(config.side, 3);
        assert_eq!(config.channels.len(), 2);
        assert_eq!(config.blank_threshold, 0.25);
        assert_eq!(config.policy, RecallPolicy::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            MemoryConfig::from_json("{not json"),
            Err(HopfieldError::JsonParse(_))
        ));
    }

    #[test]
    fn test_zero_side_rejected() {
        assert!(matches!(
            MemoryConfig::from_json(r#"{"side": 0}"#),
            Err(HopfieldError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_bad_policy_rejected() {
        let json = r#"{"policy": {"tolerance": -0.5}}"#;
        assert!(MemoryConfig::from_json(json).is_err());
    }
}
