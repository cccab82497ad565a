use core::sync::atomic::{AtomicU64, Ordering};

use super::{error::Result, list::NodeList};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one [`NodeList`] instance, used to reject positions that were
/// produced by another list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub(crate) fn fresh() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A position in a [`NodeList`], the list's bidirectional iterator.
///
/// A position is a small `Copy` handle naming one node of one list: an
/// element, or one of the two boundary sentinels (`end()` and the slot before
/// `begin()`). It does not borrow the list, so it can be kept across
/// mutations. Every access goes back through the list, which checks the
/// handle and reports a [`NodeListError`](super::error::NodeListError) when
/// the node was erased, is a sentinel, or belongs to another list.
///
/// Two positions are equal iff they name the same node of the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    list: ListId,
    index: usize,
    generation: u32,
}

impl Position {
    pub(crate) const fn new(list: ListId, index: usize, generation: u32) -> Self {
        Self {
            list,
            index,
            generation,
        }
    }

    pub(crate) fn list(&self) -> ListId {
        self.list
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }

    /// Steps forward to the next node and returns the moved position.
    ///
    /// On error the position is left where it was.
    pub fn move_next<T>(&mut self, list: &NodeList<T>) -> Result<&mut Self> {
        *self = list.next(*self)?;
        Ok(self)
    }

    /// Steps backward to the previous node and returns the moved position.
    ///
    /// On error the position is left where it was.
    pub fn move_prev<T>(&mut self, list: &NodeList<T>) -> Result<&mut Self> {
        *self = list.prev(*self)?;
        Ok(self)
    }

    /// Steps forward and returns the position as it was before the step.
    pub fn post_next<T>(&mut self, list: &NodeList<T>) -> Result<Position> {
        let prior = *self;
        self.move_next(list)?;
        Ok(prior)
    }

    /// Steps backward and returns the position as it was before the step.
    pub fn post_prev<T>(&mut self, list: &NodeList<T>) -> Result<Position> {
        let prior = *self;
        self.move_prev(list)?;
        Ok(prior)
    }
}
