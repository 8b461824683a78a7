use thiserror::Error;

/// Returned when an index is not in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index out of bounds: the len is {len} but the index is {index}")]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// The length of the container that rejected it.
    pub len: usize,
}
