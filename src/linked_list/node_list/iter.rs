use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{
    arena::{HEAD, Slot, TAIL},
    list::NodeList,
    position::Position,
    traits::{Link, LinkWithPrev, NodeWithData},
};

/// Slot indices still to be visited from both ends of a list.
#[derive(Debug, Clone, Copy)]
struct Span {
    front: usize,
    back: usize,
    remaining: usize,
}

impl Span {
    fn new<T>(list: &NodeList<T>) -> Self {
        Self {
            front: list.arena().link(HEAD).next(),
            back: list.arena().link(TAIL).prev(),
            remaining: list.len(),
        }
    }
}

/// An iterator over the positions of a [`NodeList`].
pub struct Positions<'a, T> {
    list: &'a NodeList<T>,
    span: Span,
}

impl<'a, T> Positions<'a, T> {
    pub(crate) fn new(list: &'a NodeList<T>) -> Self {
        Self {
            list,
            span: Span::new(list),
        }
    }
}

impl<T> Iterator for Positions<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.span.remaining == 0 {
            return None;
        }
        let index = self.span.front;
        self.span.front = self.list.arena().link(index).next();
        self.span.remaining -= 1;
        Some(self.list.position_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }
}

impl<T> DoubleEndedIterator for Positions<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.span.remaining == 0 {
            return None;
        }
        let index = self.span.back;
        self.span.back = self.list.arena().link(index).prev();
        self.span.remaining -= 1;
        Some(self.list.position_at(index))
    }
}

impl<T> ExactSizeIterator for Positions<'_, T> {}
impl<T> FusedIterator for Positions<'_, T> {}

/// An iterator over shared references to the elements of a [`NodeList`].
pub struct Iter<'a, T> {
    list: &'a NodeList<T>,
    span: Span,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a NodeList<T>) -> Self {
        Self {
            list,
            span: Span::new(list),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.span.remaining == 0 {
            return None;
        }
        let node = self.list.arena().node(self.span.front)?;
        self.span.front = node.next();
        self.span.remaining -= 1;
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.span.remaining == 0 {
            return None;
        }
        let node = self.list.arena().node(self.span.back)?;
        self.span.back = node.prev();
        self.span.remaining -= 1;
        Some(node.data())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            span: self.span,
        }
    }
}

/// An iterator over mutable references to the elements of a [`NodeList`].
pub struct IterMut<'a, T> {
    slots: NonNull<Slot<T>>,
    span: Span,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut NodeList<T>) -> Self {
        let span = Span::new(list);
        Self {
            slots: NonNull::from(list.arena_mut().slots_mut()).cast(),
            span,
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `index` must be an in-bounds slot reached through the live chain and
    /// must not have been yielded before.
    unsafe fn take(&mut self, index: usize) -> Option<&'a mut T> {
        let slot = unsafe { &mut *self.slots.as_ptr().add(index) };
        let node = slot.node_mut()?;
        if self.span.front == index {
            self.span.front = node.next();
        }
        if self.span.back == index {
            self.span.back = node.prev();
        }
        self.span.remaining -= 1;
        Some(node.data_mut())
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.span.remaining == 0 {
            return None;
        }
        // each element is yielded once: `remaining` bounds both ends together
        unsafe { self.take(self.span.front) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.span.remaining == 0 {
            return None;
        }
        unsafe { self.take(self.span.back) }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`NodeList`].
pub struct IntoIter<T> {
    list: NodeList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.list.is_empty() {
            return None;
        }
        self.list.erase_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.list.is_empty() {
            return None;
        }
        self.list.erase_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for NodeList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut NodeList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
