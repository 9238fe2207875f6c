//! Fixed-capacity D-ary min-heap with position-tracking items
//!
//! This crate provides a D-ary heap (every node has up to `d >= 2` children)
//! stored in a flat array, with `decrease_key` and arbitrary `delete` driven by
//! items that always know which slot they occupy.
//!
//! # Features
//!
//! - **[`DHeap`]**: insert, get-min, delete-min, delete, decrease-key and
//!   wholesale rebuild, each reporting its key comparison count
//! - **[`ItemHandle`]**: shared, identity-compared items whose position stays
//!   current across every heap mutation
//! - **[`heapsort`]**: heap-sort composed from the public heap operations
//! - **`serde`** (cargo feature): serialization for [`DHeapConfig`] and
//!   [`DHeapItem`] snapshots
//!
//! # Example
//!
//! ```rust
//! use dheap::{DHeap, ItemHandle};
//!
//! let mut heap = DHeap::new(4, 16).unwrap();
//! let handle1 = ItemHandle::new("item1", 5);
//! let handle2 = ItemHandle::new("item2", 3);
//! heap.insert(&handle1).unwrap();
//! heap.insert(&handle2).unwrap();
//! heap.decrease_key(&handle1, 4).unwrap();
//! assert_eq!(heap.get_min(), Some(&handle1));
//! assert_eq!(handle1.key(), 1);
//! ```
//!
//! # Logging
//!
//! Construction, rebuilds and rejected operations are reported through the
//! [`log`] facade at `debug` level, individual sifts at `trace` level. The
//! crate never installs a logger.

pub mod arity;
pub mod config;
pub mod dheap;
pub mod error;
pub mod heapsort;
pub mod item;

pub use arity::Arity;
pub use config::DHeapConfig;
pub use dheap::DHeap;
pub use error::HeapError;
pub use item::{DHeapItem, ItemHandle};
