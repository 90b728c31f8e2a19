use crate::Error;
use num_traits::{bounds::UpperBounded, ToPrimitive};
use rand::{rngs::SmallRng, seq::SliceRandom};
use std::any::type_name;

/// Produces `quantity` distinct values in random order.
///
/// Values are the even numbers `0, 2, …, 2 * (quantity - 1)`, so every odd
/// needle falls between two elements and exercises the inexact lower-bound
/// path. Fails when the value type cannot represent the largest value.
pub fn shuffled_values<T>(rng: &mut SmallRng, quantity: usize) -> Result<Vec<T>, Error>
where
    T: Ord + Copy + TryFrom<usize>,
{
    let mut values = (0..quantity)
        .map(|v| 2 * v)
        .map(T::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Error::QuantityOutOfRange {
            quantity,
            value_type: type_name::<T>(),
        })?;
    values.shuffle(rng);
    Ok(values)
}

/// Whether every value generated for `quantity` fits the value type. The
/// driver uses this to skip matrix entries narrow types cannot hold.
pub fn quantity_fits<T>(quantity: usize) -> bool
where
    T: UpperBounded + ToPrimitive,
{
    let max_value = T::max_value().to_usize().unwrap_or(usize::MAX);
    2 * quantity.saturating_sub(1) <= max_value
}
