/// A trait for a link in an arena-backed linked list.
///
/// Links address their neighbours by slot index instead of by pointer, so a
/// link never owns or borrows the node it points at.
pub trait Link {
    /// Get the slot index of the next node
    fn next(&self) -> usize;

    /// Set the slot index of the next node
    fn set_next(&mut self, next: usize);
}

/// A trait for a link with a previous index.
pub trait LinkWithPrev: Link {
    /// Get the slot index of the previous node
    fn prev(&self) -> usize;

    /// Set the slot index of the previous node
    fn set_prev(&mut self, prev: usize);
}

/// A trait for a node that contains data.
pub trait NodeWithData: LinkWithPrev {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node and return its data
    fn into_data(self) -> Self::Data;
}
