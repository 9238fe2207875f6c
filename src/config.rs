//! Construction parameters for [`DHeap`](crate::DHeap)
//!
//! ```rust
//! use dheap::{DHeap, DHeapConfig};
//!
//! let config = DHeapConfig::default().with_arity(4).with_capacity(128);
//! let heap = DHeap::with_config(&config).unwrap();
//! assert_eq!(heap.arity().get(), 4);
//! assert_eq!(heap.capacity(), 128);
//! ```

use crate::arity::Arity;
use crate::error::HeapError;

/// Default branching factor.
pub const DEFAULT_ARITY: usize = 2;

/// Default number of slots.
pub const DEFAULT_CAPACITY: usize = 16;

/// Unvalidated heap shape
///
/// Values are checked by [`DHeapConfig::validate`], which every heap
/// constructor goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DHeapConfig {
    /// Maximum number of children per node
    pub arity: usize,
    /// Number of slots, fixed for the life of the heap (until a rebuild)
    pub capacity: usize,
}

impl DHeapConfig {
    /// A shape with the given arity and capacity.
    pub fn new(arity: usize, capacity: usize) -> Self {
        Self { arity, capacity }
    }

    /// Replaces the arity.
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Replaces the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks the shape.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidArity`] if `arity < 2`, then
    /// [`HeapError::InvalidCapacity`] if `capacity == 0`.
    pub fn validate(&self) -> Result<(Arity, usize), HeapError> {
        let arity = Arity::new(self.arity)?;
        if self.capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        Ok((arity, self.capacity))
    }
}

impl Default for DHeapConfig {
    fn default() -> Self {
        Self {
            arity: DEFAULT_ARITY,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
