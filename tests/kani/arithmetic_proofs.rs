//! Proofs for the D-ary index arithmetic

#[cfg(kani)]
use dheap::arity::{checked_child, child, children, parent, Arity};

/// Proof: every non-root index is the k-th child of its parent for some k in 1..=d
#[cfg(kani)]
#[kani::proof]
fn verify_parent_child_round_trip() {
    let d: usize = kani::any();
    let i: usize = kani::any();
    kani::assume(d >= 2 && d <= 64);
    kani::assume(i >= 1 && i <= 1 << 20);

    let arity = Arity::new(d).unwrap();
    let p = parent(i, arity);
    let k = i - d * p;
    assert!(k >= 1 && k <= d);
    assert!(child(p, k, arity) == i);
}

/// Proof: a parent index is always strictly smaller than its child's
#[cfg(kani)]
#[kani::proof]
fn verify_parent_is_smaller() {
    let d: usize = kani::any();
    let i: usize = kani::any();
    kani::assume(d >= 2 && d <= 64);
    kani::assume(i >= 1);

    let arity = Arity::new(d).unwrap();
    assert!(parent(i, arity) < i);
}

/// Proof: checked_child never accepts an ordinal outside 1..=d
#[cfg(kani)]
#[kani::proof]
fn verify_checked_child_range() {
    let d: usize = kani::any();
    let i: usize = kani::any();
    let k: usize = kani::any();
    kani::assume(d >= 2 && d <= 64);
    kani::assume(i <= 1 << 20);

    let arity = Arity::new(d).unwrap();
    let result = checked_child(i, k, arity);
    assert!(result.is_some() == (k >= 1 && k <= d));
}

/// Proof: children() stays within the occupied prefix and has at most d entries
#[cfg(kani)]
#[kani::proof]
fn verify_children_bounds() {
    let d: usize = kani::any();
    let i: usize = kani::any();
    let size: usize = kani::any();
    kani::assume(d >= 2 && d <= 16);
    kani::assume(i <= 1 << 16 && size <= 1 << 16);

    let arity = Arity::new(d).unwrap();
    let range = children(i, arity, size);
    assert!(range.end <= size.max(range.start));
    assert!(range.len() <= d);
}
