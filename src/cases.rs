use crate::{containers::ContainerAdapter, generators, needles::NeedlePool, Error};
use rand::{rngs::SmallRng, SeedableRng};
use std::{any::type_name, marker::PhantomData};

/// A built container paired with the needle pool drawn from its source
/// values. Built once per case in the untimed phase and reused across all
/// measured iterations.
pub struct PreparedBatch<T, C>
where
    T: Ord,
    C: ContainerAdapter<T>,
{
    pub haystack: C::Container,
    pub needles: NeedlePool<T>,
}

/// One benchmark case of the matrix: a value type, a container shape and an
/// input quantity.
///
/// The generator is seeded from entropy at construction; all randomness is
/// spent in [`prepare`], none remains in the timed region.
///
/// [`prepare`]: LowerBound::prepare
pub struct LowerBound<T, C> {
    quantity: usize,
    rng: SmallRng,
    _marker: PhantomData<(T, C)>,
}

impl<T, C> LowerBound<T, C>
where
    T: Ord + Copy + TryFrom<usize>,
    C: ContainerAdapter<T>,
{
    pub fn new(quantity: usize) -> Self {
        Self::with_rng(quantity, SmallRng::from_entropy())
    }

    /// Deterministic variant for tests.
    pub fn with_seed(quantity: usize, seed: u64) -> Self {
        Self::with_rng(quantity, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(quantity: usize, rng: SmallRng) -> Self {
        Self {
            quantity,
            rng,
            _marker: PhantomData,
        }
    }

    /// Untimed preparation: generates the raw sequence, draws the needle pool
    /// from it, then hands the sequence to the adapter.
    pub fn prepare(&mut self) -> Result<PreparedBatch<T, C>, Error> {
        let values = generators::shuffled_values(&mut self.rng, self.quantity)?;
        let needles = NeedlePool::from_unsorted(&values);
        let haystack = C::build(values);
        Ok(PreparedBatch { haystack, needles })
    }

    /// Benchmark identifier, e.g. `BM_LowerBound<u32>_Vector_1024`.
    pub fn name(&self) -> String {
        format!(
            "BM_LowerBound<{}>_{}_{}",
            type_name::<T>(),
            C::NAME,
            self.quantity
        )
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }
}
