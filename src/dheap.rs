//! Fixed-capacity D-ary min-heap with position-tracking items
//!
//! Items live in a flat slot array laid out as a complete D-ary tree (see
//! [`arity`](crate::arity)). Every item knows the slot it occupies, which is
//! what makes [`DHeap::delete`] and [`DHeap::decrease_key`] possible on
//! arbitrary items without a search.
//!
//! Every mutating operation returns the number of key comparisons it made.
//! The counts are reported, never used for control flow.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity       |
//! |--------------------|------------------|
//! | `insert`           | O(log_d n)       |
//! | `get_min`          | O(1)             |
//! | `delete_min`       | O(d log_d n)     |
//! | `delete`           | O(d log_d n)     |
//! | `decrease_key`     | O(log_d n)       |
//! | `build_from_items` | O(n log_d n)     |
//! | `is_heap`          | O(n)             |
//!
//! # Example
//!
//! ```rust
//! use dheap::{DHeap, ItemHandle};
//!
//! let mut heap = DHeap::new(3, 8).unwrap();
//! let a = ItemHandle::new("a", 30);
//! let b = ItemHandle::new("b", 10);
//! heap.insert(&a).unwrap();
//! heap.insert(&b).unwrap();
//! assert_eq!(heap.get_min(), Some(&b));
//!
//! heap.decrease_key(&a, 25).unwrap();
//! assert_eq!(heap.get_min(), Some(&a));
//! assert_eq!(a.key(), 5);
//!
//! heap.delete_min().unwrap();
//! assert_eq!(a.position(), None);
//! assert_eq!(heap.len(), 1);
//! assert!(heap.is_heap());
//! ```

use std::collections::HashSet;
use std::slice;

use log::{debug, trace};

use crate::arity::{children, parent, Arity};
use crate::config::DHeapConfig;
use crate::error::HeapError;
use crate::item::ItemHandle;

/// A D-ary min-heap over [`ItemHandle`]s
///
/// `slots[i]` is the item at tree index `i`; its length is the heap size and
/// never exceeds `capacity`. Invariants between public calls:
///
/// - `slots[i].position() == Some(i)` for every occupied slot
/// - `slots[i].key() >= slots[parent(i)].key()` for every `i > 0`
#[derive(Debug)]
pub struct DHeap {
    arity: Arity,
    capacity: usize,
    slots: Vec<ItemHandle>,
}

impl DHeap {
    /// Creates an empty heap with branching factor `d` and room for
    /// `capacity` items.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidArity`] if `d < 2`, [`HeapError::InvalidCapacity`]
    /// if `capacity == 0`.
    pub fn new(d: usize, capacity: usize) -> Result<Self, HeapError> {
        Self::with_config(&DHeapConfig::new(d, capacity))
    }

    /// Creates an empty heap from a [`DHeapConfig`].
    pub fn with_config(config: &DHeapConfig) -> Result<Self, HeapError> {
        let (arity, capacity) = config.validate().map_err(|err| {
            debug!("rejected heap shape {:?}: {}", config, err);
            err
        })?;
        debug!("created {} heap with capacity {}", arity, capacity);
        Ok(Self {
            arity,
            capacity,
            slots: Vec::with_capacity(capacity),
        })
    }

    /// Number of items currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Maximum number of items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Branching factor.
    #[inline]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Occupied slots in storage (tree) order.
    pub fn iter(&self) -> slice::Iter<'_, ItemHandle> {
        self.slots.iter()
    }

    /// Returns true if `item` occupies a slot of this heap.
    pub fn contains(&self, item: &ItemHandle) -> bool {
        self.locate(item).is_ok()
    }

    /// Discards the current contents and rebuilds the heap from `items`.
    ///
    /// Capacity becomes `items.len()`. Items are inserted one by one in input
    /// order. Items discarded from the old contents are released (their
    /// position becomes `None`), and items that were already in this heap may
    /// appear in `items`.
    ///
    /// Returns the total number of comparisons made by the insertions.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidCapacity`] if `items` is empty
    /// - [`HeapError::ItemAlreadyInHeap`] if an item is held by another heap
    ///   or appears twice in `items`
    ///
    /// The heap is unchanged on error.
    pub fn build_from_items(&mut self, items: &[ItemHandle]) -> Result<usize, HeapError> {
        if items.is_empty() {
            debug!("rejected rebuild from an empty slice");
            return Err(HeapError::InvalidCapacity);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            let held_elsewhere = item.position().is_some() && !self.contains(item);
            if held_elsewhere || !seen.insert(item) {
                debug!("rejected rebuild: {} is already in a heap", item);
                return Err(HeapError::ItemAlreadyInHeap);
            }
        }

        self.clear();
        self.capacity = items.len();
        self.slots = Vec::with_capacity(self.capacity);

        let mut comparisons = 0;
        for item in items {
            comparisons += self.insert(item)?;
        }
        debug!(
            "rebuilt {} heap from {} items with {} comparisons",
            self.arity,
            items.len(),
            comparisons
        );
        Ok(comparisons)
    }

    /// Checks the slot/position bookkeeping and the heap ordering.
    ///
    /// Meant as a diagnostic and test oracle; it walks every slot.
    pub fn is_heap(&self) -> bool {
        self.slots.iter().enumerate().all(|(i, item)| {
            item.position() == Some(i)
                && (i == 0 || item.key() >= self.slots[parent(i, self.arity)].key())
        })
    }

    /// Inserts `item` and returns the number of comparisons made.
    ///
    /// The heap keeps a clone of the handle; the caller's handle keeps
    /// tracking the item's position.
    ///
    /// # Errors
    ///
    /// - [`HeapError::CapacityExceeded`] if the heap is full
    /// - [`HeapError::ItemAlreadyInHeap`] if the item is already stored in a
    ///   heap
    pub fn insert(&mut self, item: &ItemHandle) -> Result<usize, HeapError> {
        if self.is_full() {
            debug!("insert of {} into full heap (capacity {})", item, self.capacity);
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if item.position().is_some() {
            debug!("insert of {} which is already in a heap", item);
            return Err(HeapError::ItemAlreadyInHeap);
        }

        let index = self.slots.len();
        item.set_position(Some(index));
        self.slots.push(item.clone());
        Ok(self.heapify_up(index))
    }

    /// The item with the smallest key, or `None` if empty.
    #[inline]
    pub fn get_min(&self) -> Option<&ItemHandle> {
        self.slots.first()
    }

    /// Like [`get_min`](Self::get_min), but an empty heap is an error.
    pub fn try_get_min(&self) -> Result<&ItemHandle, HeapError> {
        self.get_min().ok_or(HeapError::Empty)
    }

    /// Removes the item with the smallest key.
    ///
    /// Same as `delete(get_min())`, comparison count included.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if there is nothing to remove.
    pub fn delete_min(&mut self) -> Result<usize, HeapError> {
        let min = self.try_get_min()?.clone();
        self.delete(&min)
    }

    /// Subtracts `delta` from the key of `item` and restores the ordering.
    ///
    /// Only the upward direction is repaired, so a negative `delta` (a key
    /// increase) can leave the heap out of order. Key arithmetic saturates.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidHandle`] if `item` is not in this heap.
    pub fn decrease_key(&mut self, item: &ItemHandle, delta: i64) -> Result<usize, HeapError> {
        let index = self.locate(item)?;
        item.set_key(item.key().saturating_sub(delta));
        Ok(self.heapify_up(index))
    }

    /// Removes `item` from the heap and returns the number of comparisons.
    ///
    /// The last item takes the vacated slot and is then sifted up and down,
    /// since it may belong on either side of its new position. The removed
    /// item's position becomes `None`.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidHandle`] if `item` is not in this heap.
    pub fn delete(&mut self, item: &ItemHandle) -> Result<usize, HeapError> {
        let index = self.locate(item)?;

        let removed = self.slots.swap_remove(index);
        removed.set_position(None);

        // Nothing moved when the removed item was the last slot.
        let Some(replacement) = self.slots.get(index).cloned() else {
            return Ok(0);
        };
        replacement.set_position(Some(index));

        let up = self.heapify_up(index);
        let moved_to = replacement.position().unwrap_or(index);
        let down = self.heapify_down(moved_to);
        Ok(up + down)
    }

    /// Releases every item, keeping the capacity.
    pub fn clear(&mut self) {
        for item in self.slots.drain(..) {
            item.set_position(None);
        }
    }

    /// Slot index of `item`, after checking it really sits there.
    fn locate(&self, item: &ItemHandle) -> Result<usize, HeapError> {
        match item.position() {
            Some(index) if self.slots.get(index).is_some_and(|slot| slot.ptr_eq(item)) => {
                Ok(index)
            }
            position => {
                debug!("{} at {:?} is not held by this heap", item, position);
                Err(HeapError::InvalidHandle)
            }
        }
    }

    #[inline]
    fn key_at(&self, index: usize) -> i64 {
        self.slots[index].key()
    }

    /// Move the item at `index` up while it is smaller than its parent.
    ///
    /// One comparison per level examined; the root costs nothing.
    fn heapify_up(&mut self, mut index: usize) -> usize {
        let start = index;
        let mut comparisons = 0;
        while index > 0 {
            let above = parent(index, self.arity);
            comparisons += 1;
            if self.key_at(index) >= self.key_at(above) {
                break;
            }
            self.switch_items(index, above);
            index = above;
        }
        trace!(
            "heapify_up {} -> {} ({} comparisons)",
            start,
            index,
            comparisons
        );
        comparisons
    }

    /// Move the item at `index` down while some child is smaller.
    ///
    /// Children are scanned left to right; the first is the initial candidate
    /// and each further child costs one comparison. Ties keep the leftmost
    /// child.
    fn heapify_down(&mut self, mut index: usize) -> usize {
        let start = index;
        let mut comparisons = 0;
        loop {
            let mut kids = children(index, self.arity, self.slots.len());
            let Some(first) = kids.next() else {
                break;
            };

            let mut min_child = first;
            let mut min_key = self.key_at(first);
            for child in kids {
                comparisons += 1;
                let key = self.key_at(child);
                if key < min_key {
                    min_child = child;
                    min_key = key;
                }
            }

            if min_key >= self.key_at(index) {
                break;
            }
            self.switch_items(index, min_child);
            index = min_child;
        }
        trace!(
            "heapify_down {} -> {} ({} comparisons)",
            start,
            index,
            comparisons
        );
        comparisons
    }

    /// Swap two slots together with the positions their items record.
    #[inline]
    fn switch_items(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.slots[a].set_position(Some(a));
        self.slots[b].set_position(Some(b));
    }
}

impl Drop for DHeap {
    fn drop(&mut self) {
        // Let surviving handles be inserted elsewhere.
        self.clear();
    }
}

impl<'a> IntoIterator for &'a DHeap {
    type Item = &'a ItemHandle;
    type IntoIter = slice::Iter<'a, ItemHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
