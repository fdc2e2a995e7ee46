use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A heap needs at least one usable slot.
    #[error("invalid heap capacity `{0}`, must be at least 1")]
    InvalidCapacity(usize),
    /// `push` on a full heap. The heap never grows.
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("unknown heap order `{0}`, expected `min` or `max`")]
    UnknownOrder(String),
}

pub type Result<T> = std::result::Result<T, HeapError>;
