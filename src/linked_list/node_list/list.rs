use core::fmt;
use core::ops::{Index, IndexMut};

use super::{
    arena::{Arena, Entry, HEAD, TAIL},
    error::{NodeListError, Result},
    iter::{Iter, IterMut, Positions},
    node::{DoubleLink, ListNode},
    position::{ListId, Position},
    traits::{Link, LinkWithPrev, NodeWithData},
};

/// What a checked position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Head,
    Tail,
    Element(usize),
}

/// A doubly linked list with sentinel boundaries and checked positions.
///
/// Nodes are kept in an arena owned by the list. The arena always holds a
/// head and a tail sentinel; the elements form a chain between them, so
/// inserting or erasing at any known [`Position`] is constant time and never
/// needs a special case for the ends of the list.
pub struct NodeList<T> {
    id: ListId,
    arena: Arena<T>,
    len: usize,
}

impl<T> NodeList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ListId::fresh(),
            arena: Arena::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Position of the first element, or [`end`](Self::end) if the list is
    /// empty.
    pub fn begin(&self) -> Position {
        self.position_at(self.arena.link(HEAD).next())
    }

    /// Position one past the last element. It can be stepped backward and
    /// inserted before, but never dereferenced or erased.
    pub fn end(&self) -> Position {
        self.position_at(TAIL)
    }

    /// Returns `true` if `pos` names a live element of this list.
    pub fn contains(&self, pos: Position) -> bool {
        pos.list() == self.id
            && self.arena.get(pos.index()).is_some_and(|slot| {
                slot.generation() == pos.generation() && matches!(slot.entry(), Entry::Occupied(_))
            })
    }

    /// Returns the element at `pos`.
    ///
    /// Fails with [`NodeListError::Sentinel`] for [`end`](Self::end) and the
    /// head sentinel, [`NodeListError::Stale`] once the element was erased and
    /// [`NodeListError::Foreign`] for a position of another list.
    pub fn get(&self, pos: Position) -> Result<&T> {
        let index = self.element(pos)?;
        match self.arena.node(index) {
            Some(node) => Ok(node.data()),
            None => unreachable!("checked position {pos:?} has no node"),
        }
    }

    /// Returns the element at `pos` mutably. Fails like [`get`](Self::get).
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T> {
        let index = self.element(pos)?;
        match self.arena.node_mut(index) {
            Some(node) => Ok(node.data_mut()),
            None => unreachable!("checked position {pos:?} has no node"),
        }
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin()).ok()
    }

    /// Returns the first element mutably, or `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.begin()).ok()
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn back(&self) -> Option<&T> {
        let last = self.arena.link(TAIL).prev();
        self.arena.node(last).map(|node| node.data())
    }

    /// Returns the last element mutably, or `None` if the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.arena.link(TAIL).prev();
        self.arena.node_mut(last).map(|node| node.data_mut())
    }

    /// Returns the position after `pos`.
    ///
    /// Stepping forward from [`end`](Self::end) is reported as
    /// [`NodeListError::OutOfBounds`].
    pub fn next(&self, pos: Position) -> Result<Position> {
        match self.resolve(pos)? {
            Target::Tail => reject(NodeListError::OutOfBounds(pos)),
            Target::Head => Ok(self.position_at(self.arena.link(HEAD).next())),
            Target::Element(index) => Ok(self.position_at(self.arena.link(index).next())),
        }
    }

    /// Returns the position before `pos`.
    ///
    /// Stepping backward from [`begin`](Self::begin) yields the head sentinel,
    /// which can only be stepped forward again. Stepping backward from the
    /// head sentinel is reported as [`NodeListError::OutOfBounds`].
    pub fn prev(&self, pos: Position) -> Result<Position> {
        match self.resolve(pos)? {
            Target::Head => reject(NodeListError::OutOfBounds(pos)),
            Target::Tail => Ok(self.position_at(self.arena.link(TAIL).prev())),
            Target::Element(index) => Ok(self.position_at(self.arena.link(index).prev())),
        }
    }

    /// Inserts `value` immediately before `pos` and returns its position.
    ///
    /// `pos` may be any live position of this list except the head sentinel;
    /// inserting before [`end`](Self::end) appends.
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position> {
        match self.resolve(pos)? {
            Target::Head => reject(NodeListError::Sentinel(pos)),
            Target::Tail => Ok(self.link_before(TAIL, value)),
            Target::Element(index) => Ok(self.link_before(index, value)),
        }
    }

    /// Inserts `value` before the first element.
    pub fn insert_front(&mut self, value: T) -> Position {
        let first = self.arena.link(HEAD).next();
        self.link_before(first, value)
    }

    /// Inserts `value` after the last element.
    pub fn insert_back(&mut self, value: T) -> Position {
        self.link_before(TAIL, value)
    }

    /// Removes the element at `pos` and returns it.
    ///
    /// Every other position stays valid; `pos` and its copies become stale.
    pub fn erase(&mut self, pos: Position) -> Result<T> {
        let index = self.element(pos)?;
        Ok(self.unlink(index))
    }

    /// Removes the first element and returns it.
    pub fn erase_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return reject(NodeListError::Empty);
        }
        let first = self.arena.link(HEAD).next();
        Ok(self.unlink(first))
    }

    /// Removes the last element and returns it.
    pub fn erase_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return reject(NodeListError::Empty);
        }
        let last = self.arena.link(TAIL).prev();
        Ok(self.unlink(last))
    }

    /// Removes every element, last to first.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            let last = self.arena.link(TAIL).prev();
            self.unlink(last);
        }
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a front-to-back iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns an iterator over the positions of all elements, in order.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions::new(self)
    }

    pub(crate) fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena<T> {
        &mut self.arena
    }

    pub(crate) fn position_at(&self, index: usize) -> Position {
        let generation = self.arena.get(index).map_or(0, |slot| slot.generation());
        Position::new(self.id, index, generation)
    }

    fn resolve(&self, pos: Position) -> Result<Target> {
        if pos.list() != self.id {
            return reject(NodeListError::Foreign(pos));
        }
        let Some(slot) = self.arena.get(pos.index()) else {
            return reject(NodeListError::Foreign(pos));
        };
        if slot.generation() != pos.generation() {
            return reject(NodeListError::Stale(pos));
        }
        match slot.entry() {
            Entry::Sentinel(_) if pos.index() == HEAD => Ok(Target::Head),
            Entry::Sentinel(_) => Ok(Target::Tail),
            Entry::Occupied(_) => Ok(Target::Element(pos.index())),
            Entry::Vacant { .. } => reject(NodeListError::Stale(pos)),
        }
    }

    fn element(&self, pos: Position) -> Result<usize> {
        match self.resolve(pos)? {
            Target::Element(index) => Ok(index),
            Target::Head | Target::Tail => reject(NodeListError::Sentinel(pos)),
        }
    }

    /// Splices a new node between `successor` and its predecessor.
    fn link_before(&mut self, successor: usize, value: T) -> Position {
        let predecessor = self.arena.link(successor).prev();
        let node = ListNode::new(DoubleLink::new(predecessor, successor), value);
        let (index, generation) = self.arena.allocate(node);
        self.arena.link_mut(predecessor).set_next(index);
        self.arena.link_mut(successor).set_prev(index);
        self.len += 1;
        Position::new(self.id, index, generation)
    }

    /// Splices the node at `index` out of the chain and frees its slot.
    fn unlink(&mut self, index: usize) -> T {
        let node = self.arena.release(index);
        let (predecessor, successor) = (node.prev(), node.next());
        self.arena.link_mut(predecessor).set_next(successor);
        self.arena.link_mut(successor).set_prev(predecessor);
        self.len -= 1;
        node.into_data()
    }
}

fn reject<R>(err: NodeListError) -> Result<R> {
    log::debug!("node list: {}", err);
    Err(err)
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for NodeList<T> {
    /// Erases the elements last to first; the sentinels go with the arena.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for NodeList<T> {
    /// Clones the elements into a new list. Positions of `self` are foreign
    /// to the clone.
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for NodeList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert_back(value);
        }
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for NodeList<T> {
    fn from(arr: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(arr);
        list
    }
}

impl<T> Index<Position> for NodeList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `pos` does not name a live element of this list.
    fn index(&self, pos: Position) -> &T {
        self.get(pos).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> IndexMut<Position> for NodeList<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        self.get_mut(pos).unwrap_or_else(|err| panic!("{err}"))
    }
}
