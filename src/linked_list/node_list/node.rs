use super::traits::{Link, LinkWithPrev, NodeWithData};

/// A link in a doubly linked list, holding the slot indices of both
/// neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleLink {
    next: usize,
    prev: usize,
}

impl DoubleLink {
    /// Creates a link between `prev` and `next`.
    pub const fn new(prev: usize, next: usize) -> Self {
        Self { next, prev }
    }
}

impl Link for DoubleLink {
    #[inline]
    fn next(&self) -> usize {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: usize) {
        self.next = next;
    }
}

impl LinkWithPrev for DoubleLink {
    #[inline]
    fn prev(&self) -> usize {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: usize) {
        self.prev = prev;
    }
}

/// An element-holding node of a [`NodeList`](super::list::NodeList).
#[derive(Debug)]
pub struct ListNode<T> {
    link: DoubleLink,
    data: T,
}

impl<T> ListNode<T> {
    pub const fn new(link: DoubleLink, data: T) -> Self {
        Self { link, data }
    }

    pub fn link(&self) -> &DoubleLink {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut DoubleLink {
        &mut self.link
    }
}

impl<T> Link for ListNode<T> {
    fn next(&self) -> usize {
        self.link.next()
    }

    fn set_next(&mut self, next: usize) {
        self.link.set_next(next);
    }
}

impl<T> LinkWithPrev for ListNode<T> {
    fn prev(&self) -> usize {
        self.link.prev()
    }

    fn set_prev(&mut self, prev: usize) {
        self.link.set_prev(prev);
    }
}

impl<T> NodeWithData for ListNode<T> {
    type Data = T;

    fn data(&self) -> &Self::Data {
        &self.data
    }

    fn data_mut(&mut self) -> &mut Self::Data {
        &mut self.data
    }

    fn into_data(self) -> Self::Data {
        self.data
    }
}
