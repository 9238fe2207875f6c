//! Proofs for heap operations on small symbolic inputs

#[cfg(kani)]
use dheap::{DHeap, ItemHandle};

/// Proof: after inserting three arbitrary keys the minimum is at the root
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_keeps_minimum_at_root() {
    let mut heap = DHeap::new(2, 3).unwrap();
    let a: i64 = kani::any();
    let b: i64 = kani::any();
    let c: i64 = kani::any();

    heap.insert(&ItemHandle::new("a", a)).unwrap();
    heap.insert(&ItemHandle::new("b", b)).unwrap();
    heap.insert(&ItemHandle::new("c", c)).unwrap();

    let min = heap.get_min().unwrap().key();
    assert!(min <= a && min <= b && min <= c);
    assert!(heap.is_heap());
}

/// Proof: deleting an arbitrary item keeps the heap valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_delete_any_keeps_heap() {
    let mut heap = DHeap::new(3, 4).unwrap();
    let items = [
        ItemHandle::new("a", kani::any()),
        ItemHandle::new("b", kani::any()),
        ItemHandle::new("c", kani::any()),
        ItemHandle::new("d", kani::any()),
    ];
    for item in &items {
        heap.insert(item).unwrap();
    }

    let victim: usize = kani::any();
    kani::assume(victim < items.len());
    heap.delete(&items[victim]).unwrap();

    assert!(heap.len() == 3);
    assert!(items[victim].position().is_none());
    assert!(heap.is_heap());
}

/// Proof: decrease_key by a non-negative delta keeps the heap valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_decrease_key_keeps_heap() {
    let mut heap = DHeap::new(2, 3).unwrap();
    let items = [
        ItemHandle::new("a", kani::any()),
        ItemHandle::new("b", kani::any()),
        ItemHandle::new("c", kani::any()),
    ];
    for item in &items {
        heap.insert(item).unwrap();
    }

    let target: usize = kani::any();
    let delta: i64 = kani::any();
    kani::assume(target < items.len());
    kani::assume(delta >= 0);
    heap.decrease_key(&items[target], delta).unwrap();

    assert!(heap.is_heap());
}
