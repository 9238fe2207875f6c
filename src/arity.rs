//! Branching factor and index arithmetic for array-backed D-ary trees.
//!
//! A complete D-ary tree is laid out level by level in a flat array. With
//! 0-based indices the root sits at 0, the children of node `i` occupy
//! `d*i + 1 ..= d*i + d`, and the parent of node `i > 0` is `(i - 1) / d`.
//!
//! # Why a newtype?
//!
//! Every function here is meaningless for `d < 2` (a unary "tree" is a list and
//! `d = 0` divides by zero). [`Arity`] can only be built through [`Arity::new`],
//! so once a heap holds one the arithmetic below never has to re-check it.

use std::fmt;
use std::ops::Range;

use crate::error::HeapError;

/// Validated branching factor of a D-ary tree (always `>= 2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Arity(usize);

impl Arity {
    /// Binary tree, `d = 2`.
    pub const BINARY: Arity = Arity(2);

    /// Validates `d`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidArity`] when `d < 2`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dheap::arity::Arity;
    ///
    /// assert_eq!(Arity::new(3).unwrap().get(), 3);
    /// assert!(Arity::new(1).is_err());
    /// ```
    pub fn new(d: usize) -> Result<Self, HeapError> {
        if d < 2 {
            return Err(HeapError::InvalidArity { d });
        }
        Ok(Arity(d))
    }

    /// The raw branching factor.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Arity {
    fn default() -> Self {
        Arity::BINARY
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-ary", self.0)
    }
}

impl TryFrom<usize> for Arity {
    type Error = HeapError;

    fn try_from(d: usize) -> Result<Self, Self::Error> {
        Arity::new(d)
    }
}

/// Index of the parent of node `i`.
///
/// The root is its own parent, so `parent(0, d) == 0`. Sift-up relies on this
/// to stop at the root without a special case in the index math.
///
/// # Example
///
/// ```rust
/// use dheap::arity::{parent, Arity};
///
/// let d = Arity::new(3).unwrap();
/// assert_eq!(parent(0, d), 0);
/// assert_eq!(parent(1, d), 0);
/// assert_eq!(parent(3, d), 0);
/// assert_eq!(parent(4, d), 1);
/// ```
#[inline]
pub fn parent(i: usize, d: Arity) -> usize {
    i.saturating_sub(1) / d.get()
}

/// Index of the `k`-th child (1-based) of node `i`.
///
/// `k` must be in `1..=d`; passing anything else is a logic error, caught by a
/// debug assertion. Use [`checked_child`] when `k` comes from outside.
///
/// # Example
///
/// ```rust
/// use dheap::arity::{child, Arity};
///
/// let d = Arity::new(4).unwrap();
/// assert_eq!(child(0, 1, d), 1);
/// assert_eq!(child(0, 4, d), 4);
/// assert_eq!(child(2, 1, d), 9);
/// ```
#[inline]
pub fn child(i: usize, k: usize, d: Arity) -> usize {
    debug_assert!(
        (1..=d.get()).contains(&k),
        "child ordinal {} out of range 1..={}",
        k,
        d.get()
    );
    d.get() * i + k
}

/// Like [`child`], but returns `None` for `k` outside `1..=d` or on overflow.
#[inline]
pub fn checked_child(i: usize, k: usize, d: Arity) -> Option<usize> {
    if !(1..=d.get()).contains(&k) {
        return None;
    }
    d.get().checked_mul(i)?.checked_add(k)
}

/// Occupied child indices of node `i` in a tree holding `size` nodes.
///
/// The range is empty for leaves.
#[inline]
pub fn children(i: usize, d: Arity, size: usize) -> Range<usize> {
    let first = d.get().saturating_mul(i).saturating_add(1);
    let end = first.saturating_add(d.get()).min(size);
    first.min(end)..end
}
