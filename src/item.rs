//! Heap items and the shared handles that track them
//!
//! A [`DHeapItem`] carries a name, an integer key and the index of the slot it
//! currently occupies. Callers and the heap share the same item through an
//! [`ItemHandle`], so a handle obtained before an insert can later be passed
//! to [`DHeap::delete`](crate::DHeap::delete) or
//! [`DHeap::decrease_key`](crate::DHeap::decrease_key) no matter how often the
//! item has moved in between.
//!
//! # Identity
//!
//! Two handles are equal only if they point at the same item. Two distinct
//! items with equal names and keys are different handles.
//!
//! # Example
//!
//! ```rust
//! use dheap::ItemHandle;
//!
//! let item = ItemHandle::new("job", 42);
//! let alias = item.clone();
//! assert_eq!(item, alias);
//! assert_ne!(item, ItemHandle::new("job", 42));
//! assert_eq!(item.position(), None);
//! ```

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Sentinel reported by [`ItemHandle::position_or_sentinel`] for items that
/// are not stored in any heap.
pub const NO_POSITION: isize = -1;

/// A named item with an integer key
///
/// `position` is owned by the heap holding the item: it is `Some(i)` exactly
/// while the item sits in slot `i` and `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DHeapItem {
    name: String,
    key: i64,
    position: Option<usize>,
}

impl DHeapItem {
    /// Creates an item that is not yet in any heap.
    pub fn new(name: impl Into<String>, key: i64) -> Self {
        Self {
            name: name.into(),
            key,
            position: None,
        }
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's key.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// Slot currently occupied, if any.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for DHeapItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.key)
    }
}

/// Shared state behind an [`ItemHandle`]
///
/// The name is fixed at creation. Key and position are plain `Cell`s.
struct ItemCell {
    name: String,
    key: Cell<i64>,
    position: Cell<Option<usize>>,
}

/// Shared, identity-compared reference to a [`DHeapItem`]
pub struct ItemHandle(Rc<ItemCell>);

impl ItemHandle {
    /// Creates a fresh item and returns the only handle to it.
    pub fn new(name: impl Into<String>, key: i64) -> Self {
        ItemHandle(Rc::new(ItemCell {
            name: name.into(),
            key: Cell::new(key),
            position: Cell::new(None),
        }))
    }

    /// Wraps each value as an item named by its decimal form.
    ///
    /// ```rust
    /// use dheap::ItemHandle;
    ///
    /// let items = ItemHandle::from_values(&[7, -3]);
    /// assert_eq!(items[1].name(), "-3");
    /// assert_eq!(items[1].key(), -3);
    /// ```
    pub fn from_values(values: &[i64]) -> Vec<ItemHandle> {
        values
            .iter()
            .map(|&value| ItemHandle::new(value.to_string(), value))
            .collect()
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The item's key.
    #[inline]
    pub fn key(&self) -> i64 {
        self.0.key.get()
    }

    /// Overwrites the key.
    ///
    /// Meant for items that are not currently in a heap. Changing the key of
    /// a stored item this way bypasses re-heapification and leaves the heap
    /// ordering broken; use [`DHeap::decrease_key`](crate::DHeap::decrease_key)
    /// instead.
    pub fn set_key(&self, key: i64) {
        self.0.key.set(key);
    }

    /// Slot currently occupied, if any.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.0.position.get()
    }

    /// Slot currently occupied, or [`NO_POSITION`] when not in a heap.
    pub fn position_or_sentinel(&self) -> isize {
        self.position()
            .and_then(|pos| isize::try_from(pos).ok())
            .unwrap_or(NO_POSITION)
    }

    #[inline]
    pub(crate) fn set_position(&self, position: Option<usize>) {
        self.0.position.set(position);
    }

    /// Copy of the item's current state.
    pub fn snapshot(&self) -> DHeapItem {
        DHeapItem {
            name: self.0.name.clone(),
            key: self.key(),
            position: self.position(),
        }
    }

    /// Whether two handles refer to the same item.
    #[inline]
    pub fn ptr_eq(&self, other: &ItemHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<DHeapItem> for ItemHandle {
    /// Adopts an item, dropping any stale position it carried.
    fn from(item: DHeapItem) -> Self {
        ItemHandle::new(item.name, item.key)
    }
}

impl Clone for ItemHandle {
    fn clone(&self) -> Self {
        ItemHandle(Rc::clone(&self.0))
    }
}

impl PartialEq for ItemHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ItemHandle {}

impl Hash for ItemHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemHandle")
            .field("name", &self.name())
            .field("key", &self.key())
            .field("position", &self.position())
            .finish()
    }
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.key())
    }
}
