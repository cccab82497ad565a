use thiserror::Error;

use super::position::Position;

/// Errors reported by [`NodeList`](super::list::NodeList) when a position or
/// the list state does not allow the requested operation.
///
/// A failed operation never modifies the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NodeListError {
    #[error("position {0:?} refers to a sentinel and holds no element")]
    Sentinel(Position),

    #[error("position {0:?} refers to an erased node")]
    Stale(Position),

    #[error("position {0:?} belongs to another list")]
    Foreign(Position),

    #[error("cannot step past the boundary at position {0:?}")]
    OutOfBounds(Position),

    #[error("list is empty")]
    Empty,
}

pub type Result<T> = core::result::Result<T, NodeListError>;
