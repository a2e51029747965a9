//! Packed unordered-pair indexing.
//!
//! A [`PairIndex`] enumerates every unordered pair of distinct elements of
//! `{0..M-1}` exactly once, as a dense linear index `0 ≤ k < M·(M-1)/2`.
//! Pairs are always reported in canonical `(hi, lo)` order with `hi > lo`,
//! and index `k` is the triangular offset `hi·(hi-1)/2 + lo`:
//!
//! ```text
//! k:      0      1      2      3      4      5
//! pair: (1,0)  (2,0)  (2,1)  (3,0)  (3,1)  (3,2)
//! ```
//!
//! Self-pairs and mirrored pairs have no index, which is what lets the
//! weight store hold a symmetric, zero-diagonal interaction table in half
//! the space of a dense matrix.

/// Number of unordered pairs of distinct elements from a set of size `m`.
///
/// Panics on overflow; use [`checked_pair_count`] for untrusted sizes.
pub fn pair_count(m: usize) -> usize {
    checked_pair_count(m).expect("pair count overflows usize")
}

/// Like [`pair_count`], returning `None` if the count does not fit `usize`.
pub fn checked_pair_count(m: usize) -> Option<usize> {
    if m < 2 {
        return Some(0);
    }
    // One of m, m-1 is even, so halve that one first.
    if m % 2 == 0 {
        (m / 2).checked_mul(m - 1)
    } else {
        m.checked_mul((m - 1) / 2)
    }
}

/// Triangular number `n·(n-1)/2`, the index of pair `(n, 0)`.
fn triangle(n: usize) -> usize {
    if n % 2 == 0 {
        (n / 2) * n.saturating_sub(1)
    } else {
        n * ((n - 1) / 2)
    }
}

/// Bijection between linear indices and unordered pairs over `{0..size-1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairIndex {
    size: usize,
    count: usize,
}

impl PairIndex {
    /// Create a pair index over a universe of `size` elements.
    ///
    /// Panics if the pair count overflows `usize`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            count: pair_count(size),
        }
    }

    /// Size of the underlying universe.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct unordered pairs.
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when the universe has fewer than two elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Linear index of the unordered pair `{a, b}`.
    ///
    /// # Panics
    /// If `a == b` or either element is outside the universe.
    pub fn pack(&self, a: usize, b: usize) -> usize {
        assert!(
            a < self.size && b < self.size,
            "pair ({}, {}) out of range for universe of size {}",
            a,
            b,
            self.size
        );
        assert_ne!(a, b, "self-pair ({}, {}) has no packed index", a, b);

        let (hi, lo) = if a > b { (a, b) } else { (b, a) };
        triangle(hi) + lo
    }

    /// Canonical `(hi, lo)` pair stored at index `k`.
    ///
    /// # Panics
    /// If `k >= self.len()`.
    pub fn unpack(&self, k: usize) -> (usize, usize) {
        assert!(
            k < self.count,
            "pair index {} out of range (pair count {})",
            k,
            self.count
        );

        // Float estimate of the largest f with f(f-1)/2 <= k, then fix up
        // whatever rounding did to it.
        let estimate = ((1.0 + (1.0 + 8.0 * k as f64).sqrt()) / 2.0) as usize;
        let mut hi = estimate.clamp(1, self.size - 1);
        while triangle(hi) > k {
            hi -= 1;
        }
        while hi + 1 < self.size && triangle(hi + 1) <= k {
            hi += 1;
        }

        (hi, k - triangle(hi))
    }

    /// Iterate `(k, (hi, lo))` over every pair in index order.
    pub fn iter(&self) -> Pairs {
        Pairs {
            next: 0,
            count: self.count,
            hi: 1,
            lo: 0,
        }
    }
}

impl<'a> IntoIterator for &'a PairIndex {
    type Item = (usize, (usize, usize));
    type IntoIter = Pairs;

    fn into_iter(self) -> Pairs {
        self.iter()
    }
}

/// Iterator over the pairs of a [`PairIndex`] in canonical order.
///
/// Walks the triangle directly instead of calling [`PairIndex::unpack`] for
/// every index.
#[derive(Clone, Debug)]
pub struct Pairs {
    next: usize,
    count: usize,
    hi: usize,
    lo: usize,
}

impl Iterator for Pairs {
    type Item = (usize, (usize, usize));

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let item = (self.next, (self.hi, self.lo));
        self.next += 1;
        self.lo += 1;
        if self.lo == self.hi {
            self.hi += 1;
            self.lo = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pairs {}
