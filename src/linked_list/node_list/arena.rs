use alloc::vec::Vec;

use super::node::{DoubleLink, ListNode};

/// Slot index of the head sentinel.
pub const HEAD: usize = 0;
/// Slot index of the tail sentinel.
pub const TAIL: usize = 1;

/// The content of an arena slot.
#[derive(Debug)]
pub enum Entry<T> {
    /// One of the two permanent boundary nodes. Never holds data.
    Sentinel(DoubleLink),
    /// A live element node.
    Occupied(ListNode<T>),
    /// A released slot, chained into the free list.
    Vacant { next_free: Option<usize> },
}

impl<T> Entry<T> {
    fn link(&self) -> Option<&DoubleLink> {
        match self {
            Entry::Sentinel(link) => Some(link),
            Entry::Occupied(node) => Some(node.link()),
            Entry::Vacant { .. } => None,
        }
    }

    fn link_mut(&mut self) -> Option<&mut DoubleLink> {
        match self {
            Entry::Sentinel(link) => Some(link),
            Entry::Occupied(node) => Some(node.link_mut()),
            Entry::Vacant { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

impl<T> Slot<T> {
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn entry(&self) -> &Entry<T> {
        &self.entry
    }

    pub fn node_mut(&mut self) -> Option<&mut ListNode<T>> {
        match &mut self.entry {
            Entry::Occupied(node) => Some(node),
            _ => None,
        }
    }
}

/// Slab storage for the nodes of one list.
///
/// Slots `HEAD` and `TAIL` are created with the arena and stay sentinels for
/// its whole life. Every other slot is either occupied by a node or vacant.
/// Releasing a slot bumps its generation, so handles taken before the release
/// no longer match it even after the slot is reused.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
}

impl<T> Arena<T> {
    /// Creates an arena holding only the two linked sentinels, with room for
    /// `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 2);
        // head.prev and tail.next are never followed
        slots.push(Slot {
            generation: 0,
            entry: Entry::Sentinel(DoubleLink::new(HEAD, TAIL)),
        });
        slots.push(Slot {
            generation: 0,
            entry: Entry::Sentinel(DoubleLink::new(HEAD, TAIL)),
        });
        Self { slots, free: None }
    }

    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    pub fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }

    /// Number of nodes the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity().saturating_sub(2)
    }

    /// Links of a sentinel or occupied slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant. Only indices reached through live links
    /// or through a validated position may be passed here.
    pub fn link(&self, index: usize) -> &DoubleLink {
        self.slots[index]
            .entry
            .link()
            .unwrap_or_else(|| unreachable!("vacant slot {index} is still linked"))
    }

    /// Mutable links of a sentinel or occupied slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant, see [`Arena::link`].
    pub fn link_mut(&mut self, index: usize) -> &mut DoubleLink {
        self.slots[index]
            .entry
            .link_mut()
            .unwrap_or_else(|| unreachable!("vacant slot {index} is still linked"))
    }

    pub fn node(&self, index: usize) -> Option<&ListNode<T>> {
        match &self.slots.get(index)?.entry {
            Entry::Occupied(node) => Some(node),
            _ => None,
        }
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut ListNode<T>> {
        match &mut self.slots.get_mut(index)?.entry {
            Entry::Occupied(node) => Some(node),
            _ => None,
        }
    }

    /// Stores `node` in a free slot, growing the arena if none is left.
    /// Returns the slot index and its current generation.
    pub fn allocate(&mut self, node: ListNode<T>) -> (usize, u32) {
        if let Some(index) = self.free {
            let slot = &mut self.slots[index];
            let Entry::Vacant { next_free } = slot.entry else {
                unreachable!("free list points at live slot {index}");
            };
            self.free = next_free;
            slot.entry = Entry::Occupied(node);
            log::trace!("node list: reuse slot {} at generation {}", index, slot.generation);
            (index, slot.generation)
        } else {
            let index = self.slots.len();
            if index == self.slots.capacity() {
                log::trace!("node list: arena full at {} slots, growing", index);
            }
            self.slots.push(Slot {
                generation: 0,
                entry: Entry::Occupied(node),
            });
            (index, 0)
        }
    }

    /// Takes the node out of an occupied slot and puts the slot on the free
    /// list. The slot's links are not touched by this call; the caller
    /// relinks the neighbours.
    pub fn release(&mut self, index: usize) -> ListNode<T> {
        let slot = &mut self.slots[index];
        let entry = core::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free,
            },
        );
        let Entry::Occupied(node) = entry else {
            unreachable!("released slot {index} held no node");
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free = Some(index);
        node
    }
}
