//! Linked list implementations.
//!
//! [`node_list::NodeList`] is a doubly linked list with sentinel boundaries.
//! Its positions are plain handles that stay valid across unrelated inserts
//! and erases, and every access through a position is checked.
//!
//! # Examples
//!
//! ```
//! use node_list::linked_list::node_list::{NodeList, NodeListError};
//!
//! let mut list = NodeList::new();
//! list.insert_back(1);
//! list.insert_back(2);
//! list.insert_back(3);
//! list.insert_front(0);
//! list.insert_front(-1);
//!
//! assert_eq!(list.len(), 5);
//!
//! let mut it = list.begin();
//! assert_eq!(list[it], -1);
//! it.move_next(&list).unwrap();
//! assert_eq!(list[it], 0);
//!
//! let mut values = vec![];
//! let mut it = list.begin();
//! while it != list.end() {
//!     values.push(*list.get(it).unwrap());
//!     it.move_next(&list).unwrap();
//! }
//! assert_eq!(values, vec![-1, 0, 1, 2, 3]);
//!
//! assert_eq!(list.get(list.end()), Err(NodeListError::Sentinel(list.end())));
//! ```
pub mod node_list;
