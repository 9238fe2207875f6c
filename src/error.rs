//! Error type for D-ary heap operations
//!
//! Every failure in this crate is a precondition violation detected before the
//! heap is touched, so an `Err` always means the heap is exactly as it was.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Insert was attempted on a heap whose slots are all occupied
    CapacityExceeded {
        /// The fixed capacity of the heap
        capacity: usize,
    },
    /// The item does not occupy a slot of this heap (never inserted,
    /// already removed, or belongs to another heap)
    InvalidHandle,
    /// The item already occupies a slot in some heap
    ItemAlreadyInHeap,
    /// The heap holds no items
    Empty,
    /// The branching factor is below 2
    InvalidArity {
        /// The rejected branching factor
        d: usize,
    },
    /// The capacity is zero
    InvalidCapacity,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityExceeded { capacity } => {
                write!(f, "heap is full (capacity {})", capacity)
            }
            HeapError::InvalidHandle => {
                write!(f, "item does not occupy a slot in this heap")
            }
            HeapError::ItemAlreadyInHeap => {
                write!(f, "item is already stored in a heap")
            }
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::InvalidArity { d } => {
                write!(f, "branching factor must be at least 2, got {}", d)
            }
            HeapError::InvalidCapacity => write!(f, "capacity must be greater than zero"),
        }
    }
}

impl std::error::Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            HeapError::CapacityExceeded { capacity: 4 }.to_string(),
            "heap is full (capacity 4)"
        );
        assert_eq!(
            HeapError::InvalidArity { d: 1 }.to_string(),
            "branching factor must be at least 2, got 1"
        );
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&HeapError::InvalidHandle);
    }
}
