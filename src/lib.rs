//! Benchmark harness for `lower_bound`-style search over ordered containers.
//!
//! The measured operation is a lower-bound lookup: the first element of an
//! ordered container that is not less than a query value (the needle). Two
//! container shapes are covered, a sorted contiguous vector and an ordered
//! set, across a matrix of value types and input sizes. Container
//! construction, value generation and needle selection all happen outside the
//! timed region; the timed closure performs nothing but the search itself.
//!
//! The crate only prepares inputs and exposes the search seams. Running,
//! timing and reporting are criterion's job (see `benches/lower_bound.rs`).

use thiserror::Error;

pub mod cases;
pub mod containers;
pub mod generators;
pub mod needles;

pub use cases::{LowerBound, PreparedBatch};
pub use containers::{ContainerAdapter, SetContainer, VectorContainer};
pub use needles::{NeedlePool, POOL_CAPACITY};

/// Input sizes covered by the benchmark matrix.
///
/// Narrow value types skip the sizes they cannot represent, see
/// [`generators::quantity_fits`].
pub const QUANTITIES: [usize; 14] = [
    8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536,
];

#[derive(Debug, Error)]
pub enum Error {
    #[error("values for quantity {quantity} exceed the range of {value_type}")]
    QuantityOutOfRange {
        quantity: usize,
        value_type: &'static str,
    },
}
