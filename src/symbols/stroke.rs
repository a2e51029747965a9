//! Stroke classification: pointer motion to channel.

use crate::symbols::channel::{Channel, ChannelSet};

/// Pick the oriented channel best aligned with the motion `(dx, dy)`.
///
/// Alignment is the absolute dot product with the channel's orientation,
/// so a stroke and its reverse classify the same. The first channel wins a
/// tie. Returns `None` when nothing aligns at all: zero motion, or a set
/// with no oriented channels.
pub fn classify(channels: &ChannelSet, dx: f64, dy: f64) -> Option<Channel> {
    let mut best = None;
    let mut best_score = 0.0;

    for (channel, spec) in channels.iter() {
        let Some([ox, oy]) = spec.orientation else {
            continue;
        };
        let score = (dx * ox + dy * oy).abs();
        if score > best_score {
            best = Some(channel);
            best_score = score;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(set: &ChannelSet, dx: f64, dy: f64) -> Option<char> {
        classify(set, dx, dy).map(|c| set.glyph(c))
    }

    #[test]
    fn test_axis_strokes() {
        let set = ChannelSet::strokes();
        assert_eq!(glyph(&set, 0.0, 5.0), Some('|'));
        assert_eq!(glyph(&set, 0.0, -5.0), Some('|'));
        assert_eq!(glyph(&set, 7.0, 0.0), Some('-'));
        assert_eq!(glyph(&set, -7.0, 1.0), Some('-'));
    }

    #[test]
    fn test_diagonal_strokes() {
        let set = ChannelSet::strokes();
        // Screen y grows downward: down-right is '\'.
        assert_eq!(glyph(&set, 3.0, 3.0), Some('\\'));
        assert_eq!(glyph(&set, -3.0, -3.0), Some('\\'));
        assert_eq!(glyph(&set, 3.0, -3.0), Some('/'));
    }

    #[test]
    fn test_zero_motion_unclassified() {
        let set = ChannelSet::strokes();
        assert_eq!(classify(&set, 0.0, 0.0), None);
    }

    #[test]
    fn test_blank_never_chosen() {
        let set = ChannelSet::strokes();
        for (dx, dy) in [(1.0, 0.2), (-0.3, 2.0), (4.0, 4.1), (-1.0, 0.9)] {
            assert_ne!(classify(&set, dx, dy), Some(set.blank()));
        }
    }
}
