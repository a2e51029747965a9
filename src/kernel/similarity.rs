//! Similarity and distance metrics between activation grids.
//!
//! Distances are raw (lower = closer); the similarity forms map them into
//! "higher = more similar" so every [`Metric`] can be compared the same way.

use crate::kernel::grid::ActivationGrid;

/// Available similarity metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Cosine similarity over the flattened grid
    Cosine,
    /// Dot product (raw inner product)
    Dot,
    /// Euclidean distance (converted to similarity)
    Euclidean,
    /// Manhattan distance (converted to similarity)
    Manhattan,
    /// Agreement similarity: sign agreements minus disagreements, per value
    Agreement,
    /// Chebyshev (L∞) distance converted to similarity
    Chebyshev,
}

/// Similarity computation for activation grids.
pub struct Similarity;

impl Similarity {
    /// Compute similarity using the specified metric.
    pub fn compute(a: &ActivationGrid, b: &ActivationGrid, metric: Metric) -> f64 {
        match metric {
            Metric::Cosine => Self::cosine(a, b),
            Metric::Dot => Self::dot(a, b),
            Metric::Euclidean => Self::euclidean(a, b),
            Metric::Manhattan => Self::manhattan(a, b),
            Metric::Agreement => Self::agreement(a, b),
            Metric::Chebyshev => Self::chebyshev(a, b),
        }
    }

    fn pairs<'a>(
        a: &'a ActivationGrid,
        b: &'a ActivationGrid,
        what: &str,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        assert!(
            a.cells() == b.cells() && a.channels() == b.channels(),
            "Shape mismatch in {}: {}x{} vs {}x{}",
            what,
            a.cells(),
            a.channels(),
            b.cells(),
            b.channels()
        );
        a.data().iter().copied().zip(b.data().iter().copied())
    }

    /// Cosine similarity: dot(a, b) / (||a|| * ||b||)
    ///
    /// Returns 0.0 when either grid is all zeros.
    pub fn cosine(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        for (x, y) in Self::pairs(a, b, "cosine") {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }

        let norm_product = (norm_a * norm_b).sqrt();
        if norm_product < 1e-10 {
            return 0.0;
        }
        dot / norm_product
    }

    /// Raw dot product.
    pub fn dot(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        Self::pairs(a, b, "dot product").map(|(x, y)| x * y).sum()
    }

    /// Euclidean distance (converted to similarity).
    ///
    /// Returns 1 / (1 + distance) so higher values mean more similar.
    pub fn euclidean(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        1.0 / (1.0 + Self::euclidean_distance(a, b))
    }

    /// Raw Euclidean distance.
    pub fn euclidean_distance(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        Self::pairs(a, b, "euclidean")
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }

    /// Manhattan distance (converted to similarity).
    pub fn manhattan(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        1.0 / (1.0 + Self::manhattan_distance(a, b))
    }

    /// Raw Manhattan distance.
    pub fn manhattan_distance(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        Self::pairs(a, b, "manhattan")
            .map(|(x, y)| (x - y).abs())
            .sum()
    }

    /// Agreement similarity: (sign agreements - sign disagreements) / values.
    ///
    /// Zeros count as neither. Returns a value in [-1, 1].
    pub fn agreement(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        let total = a.data().len();
        let mut score: i64 = 0;
        for (x, y) in Self::pairs(a, b, "agreement") {
            let product = x * y;
            if product > 0.0 {
                score += 1;
            } else if product < 0.0 {
                score -= 1;
            }
        }

        if total == 0 {
            return 0.0;
        }
        score as f64 / total as f64
    }

    /// Chebyshev (L∞) distance converted to similarity.
    ///
    /// Activations live in [-1, 1], so the largest meaningful distance is 2;
    /// returns 1 - (distance / 2), clamped to [0, 1].
    pub fn chebyshev(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        (1.0 - Self::chebyshev_distance(a, b) / 2.0).clamp(0.0, 1.0)
    }

    /// Raw Chebyshev (L∞) distance: maximum absolute difference.
    pub fn chebyshev_distance(a: &ActivationGrid, b: &ActivationGrid) -> f64 {
        Self::pairs(a, b, "chebyshev")
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[f64; 3]]) -> ActivationGrid {
        ActivationGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_cosine_identical() {
        let a = grid(&[[1.0, -1.0, -1.0], [-1.0, 1.0, -1.0]]);
        assert!((Similarity::cosine(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_opposite() {
        let a = grid(&[[1.0, -1.0, 0.5]]);
        let b = grid(&[[-1.0, 1.0, -0.5]]);
        assert!((Similarity::cosine(&a, &b) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_grid() {
        let a = grid(&[[0.0, 0.0, 0.0]]);
        let b = grid(&[[1.0, 0.0, 0.0]]);
        assert_eq!(Similarity::cosine(&a, &b), 0.0);
    }

    #[test]
    fn test_euclidean() {
        let a = grid(&[[0.0, 0.0, 0.0]]);
        let b = grid(&[[3.0, 4.0, 0.0]]);
        assert!((Similarity::euclidean_distance(&a, &b) - 5.0).abs() < 1e-12);
        assert!((Similarity::euclidean(&a, &b) - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_agreement_mixed() {
        let a = grid(&[[0.9, -0.2, 0.0]]);
        let b = grid(&[[0.1, 0.7, 0.3]]);
        // one agreement, one disagreement, one zero
        assert_eq!(Similarity::agreement(&a, &b), 0.0);
    }

    #[test]
    fn test_chebyshev() {
        let a = grid(&[[0.5, -0.5, 0.0]]);
        let b = grid(&[[0.5, 0.25, 0.1]]);
        assert!((Similarity::chebyshev_distance(&a, &b) - 0.75).abs() < 1e-12);
        assert!((Similarity::chebyshev(&a, &b) - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_compute_dispatches_manhattan() {
        let a = grid(&[[1.0, 0.0, -1.0]]);
        let b = grid(&[[0.0, 0.0, 1.0]]);
        assert_eq!(
            Similarity::compute(&a, &b, Metric::Manhattan),
            Similarity::manhattan(&a, &b)
        );
        assert!((Similarity::manhattan_distance(&a, &b) - 3.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "Shape mismatch")]
    fn test_shape_mismatch_panics() {
        let a = ActivationGrid::zeros(2, 3);
        let b = ActivationGrid::zeros(3, 3);
        Similarity::dot(&a, &b);
    }
}
