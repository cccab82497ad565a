//! # Node List
//!
//! A doubly linked list whose nodes live in an arena owned by the list.
//!
//! ## Core Components
//!
//! - [`list::NodeList`]: the container. Constant-time insert and erase at any
//!   [`position::Position`], plus front/back shorthands.
//! - [`position::Position`]: a copyable handle to one node, stepped in both
//!   directions through the list that produced it.
//! - [`node::ListNode`] and [`node::DoubleLink`]: an element and the slot
//!   indices of its neighbours.
//! - [`traits`]: the `Link`, `LinkWithPrev` and `NodeWithData` traits shared
//!   by nodes and links.
//! - [`error::NodeListError`]: every misuse of a position is reported here.
//!
//! ## Sentinels
//!
//! Two arena slots are reserved for a head and a tail sentinel. They never
//! hold an element. The first element follows the head and `end()` is the
//! tail, so an empty list is simply `head.next == tail`.
//!
//! ## Checked positions
//!
//! A position records the list it came from and the generation of its slot.
//! Erasing a node bumps the generation, so a stale position is reported as
//! [`error::NodeListError::Stale`] even after its slot has been reused.

pub mod traits;
pub mod node;
pub mod position;
pub mod list;
pub mod iter;
pub mod error;

mod arena;

#[cfg(test)]
mod tests;

pub use error::{NodeListError, Result};
pub use list::NodeList;
pub use position::Position;
