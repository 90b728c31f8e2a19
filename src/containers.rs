use std::collections::BTreeSet;
use std::ops::Bound;

/// Strategy turning an unordered sequence of values into a specific ordered
/// container shape.
///
/// Adapters are type-level, they carry no runtime state. [`build`] runs in the
/// untimed preparation phase; [`lower_bound`] is the measured operation.
///
/// [`build`]: ContainerAdapter::build
/// [`lower_bound`]: ContainerAdapter::lower_bound
pub trait ContainerAdapter<T: Ord> {
    type Container;

    /// Short name used in benchmark identifiers.
    const NAME: &'static str;

    /// Builds the ordered container from an unordered sequence.
    fn build(values: Vec<T>) -> Self::Container;

    /// First element not less than `needle`, or `None` when the needle is
    /// greater than every element.
    fn lower_bound<'a>(haystack: &'a Self::Container, needle: &T) -> Option<&'a T>;
}

/// Sorted contiguous vector, searched via `partition_point`.
pub struct VectorContainer;

impl<T: Ord> ContainerAdapter<T> for VectorContainer {
    type Container = Vec<T>;

    const NAME: &'static str = "Vector";

    fn build(mut values: Vec<T>) -> Vec<T> {
        values.sort_unstable();
        values
    }

    fn lower_bound<'a>(haystack: &'a Vec<T>, needle: &T) -> Option<&'a T> {
        let idx = haystack.partition_point(|v| v < needle);
        haystack.get(idx)
    }
}

/// Value-deduplicating ordered set, searched via an inclusive range scan.
pub struct SetContainer;

impl<T: Ord> ContainerAdapter<T> for SetContainer {
    type Container = BTreeSet<T>;

    const NAME: &'static str = "Set";

    fn build(values: Vec<T>) -> BTreeSet<T> {
        values.into_iter().collect()
    }

    fn lower_bound<'a>(haystack: &'a BTreeSet<T>, needle: &T) -> Option<&'a T> {
        haystack
            .range((Bound::Included(needle), Bound::Unbounded))
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_build_sorts_ascending() {
        let haystack = VectorContainer::build(vec![5u32, 3, 1, 4, 2]);
        assert_eq!(haystack, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn vector_lower_bound_boundaries() {
        let haystack = VectorContainer::build(vec![5u32, 3, 1, 4, 2]);

        assert_eq!(VectorContainer::lower_bound(&haystack, &3), Some(&3));
        assert_eq!(VectorContainer::lower_bound(&haystack, &0), Some(&1));
        assert_eq!(VectorContainer::lower_bound(&haystack, &6), None);
    }

    #[test]
    fn vector_lower_bound_of_gap_value() {
        let haystack = VectorContainer::build(vec![10u32, 2, 6, 8, 4]);

        // 5 is absent, the first element not less than it is 6
        assert_eq!(VectorContainer::lower_bound(&haystack, &5), Some(&6));
    }

    #[test]
    fn set_build_collapses_duplicates() {
        let haystack = SetContainer::build(vec![5u32, 3, 1, 4, 2, 3]);

        assert_eq!(haystack.len(), 5);
        assert_eq!(haystack.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_lower_bound_boundaries() {
        let haystack = SetContainer::build(vec![5u32, 3, 1, 4, 2]);

        assert_eq!(SetContainer::lower_bound(&haystack, &3), Some(&3));
        assert_eq!(SetContainer::lower_bound(&haystack, &0), Some(&1));
        assert_eq!(SetContainer::lower_bound(&haystack, &6), None);
    }
}
