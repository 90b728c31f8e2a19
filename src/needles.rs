/// Number of sample needles drawn from each input sequence.
pub const POOL_CAPACITY: usize = 512;

/// Fixed-size pool of search targets sampled from the unsorted input.
///
/// Sampling at a regular stride over the source spreads the needles across
/// the value range without any random number generation near the timed
/// region. For sources shorter than the pool capacity the stride wraps
/// around, reusing source indices so the pool always holds exactly
/// [`POOL_CAPACITY`] entries.
#[derive(Clone)]
pub struct NeedlePool<T> {
    needles: Vec<T>,
    cursor: usize,
}

impl<T: Copy> NeedlePool<T> {
    /// Builds the pool from the source sequence before it is turned into a
    /// container. Deterministic: the same source yields the same pool.
    pub fn from_unsorted(source: &[T]) -> Self {
        assert!(!source.is_empty(), "needle pool needs a non-empty source");
        let stride = (source.len() / POOL_CAPACITY).max(1);
        let needles = (0..POOL_CAPACITY)
            .map(|i| source[(i * stride) % source.len()])
            .collect();
        Self { needles, cursor: 0 }
    }

    /// Next needle, round-robin over the pool.
    pub fn next_needle(&mut self) -> T {
        let needle = self.needles[self.cursor];
        self.cursor = (self.cursor + 1) % POOL_CAPACITY;
        needle
    }

    pub fn as_slice(&self) -> &[T] {
        &self.needles
    }
}
