//! Heap-sort on top of [`DHeap`]
//!
//! Builds a heap from the input and pops the minimum `n` times. Only the
//! public heap operations are used, so the comparison count reported here is
//! exactly what `build_from_items` and `delete_min` report.

use log::debug;

use crate::arity::Arity;
use crate::dheap::DHeap;
use crate::error::HeapError;
use crate::item::ItemHandle;

/// Sorts `values` ascending with a `d`-ary heap.
///
/// Returns the sorted values and the number of key comparisons made by the
/// build and all deletions.
///
/// # Errors
///
/// [`HeapError::InvalidArity`] if `d < 2`, even for empty input.
///
/// # Example
///
/// ```rust
/// use dheap::heapsort::dheap_sort;
///
/// let (sorted, comparisons) = dheap_sort(&[5, 3, 8, 1, 4], 2).unwrap();
/// assert_eq!(sorted, vec![1, 3, 4, 5, 8]);
/// assert!(comparisons > 0);
/// ```
pub fn dheap_sort(values: &[i64], d: usize) -> Result<(Vec<i64>, usize), HeapError> {
    let arity = Arity::new(d)?;
    if values.is_empty() {
        return Ok((Vec::new(), 0));
    }

    let items = ItemHandle::from_values(values);
    let mut heap = DHeap::new(arity.get(), values.len())?;
    let mut comparisons = heap.build_from_items(&items)?;

    let mut sorted = Vec::with_capacity(values.len());
    for _ in 0..values.len() {
        sorted.push(heap.try_get_min()?.key());
        comparisons += heap.delete_min()?;
    }

    debug!(
        "{} heap-sort of {} values took {} comparisons",
        arity,
        values.len(),
        comparisons
    );
    Ok((sorted, comparisons))
}

/// Sorts `values` ascending in place, returning the comparison count.
///
/// ```rust
/// use dheap::heapsort::sort_in_place;
///
/// let mut values = [3, -1, 2];
/// sort_in_place(&mut values, 3).unwrap();
/// assert_eq!(values, [-1, 2, 3]);
/// ```
pub fn sort_in_place(values: &mut [i64], d: usize) -> Result<usize, HeapError> {
    let (sorted, comparisons) = dheap_sort(values, d)?;
    values.copy_from_slice(&sorted);
    Ok(comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_small_input() {
        let (sorted, comparisons) = dheap_sort(&[5, 3, 8, 1, 4], 2).unwrap();
        assert_eq!(sorted, vec![1, 3, 4, 5, 8]);
        assert!(comparisons > 0);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(dheap_sort(&[], 2).unwrap(), (vec![], 0));
        assert_eq!(dheap_sort(&[7], 5).unwrap(), (vec![7], 0));
    }

    #[test]
    fn test_rejects_bad_arity() {
        assert_eq!(dheap_sort(&[], 1), Err(HeapError::InvalidArity { d: 1 }));
        assert_eq!(
            dheap_sort(&[1, 2], 0),
            Err(HeapError::InvalidArity { d: 0 })
        );
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let input = [0, -5, 3, -5, 3, i64::MAX, i64::MIN, 0];
        let mut expected = input.to_vec();
        expected.sort_unstable();
        for d in 2..=6 {
            let (sorted, _) = dheap_sort(&input, d).unwrap();
            assert_eq!(sorted, expected, "d = {}", d);
        }
    }

    #[test]
    fn test_sorted_input_counts() {
        // Ascending input never climbs: one comparison per non-root insert.
        let input: Vec<i64> = (0..10).collect();
        let items = ItemHandle::from_values(&input);
        let mut heap = DHeap::new(2, input.len()).unwrap();
        assert_eq!(heap.build_from_items(&items).unwrap(), 9);
    }

    #[test]
    fn test_comparisons_match_manual_composition() {
        let input = [9, 2, 7, 4, 4, 1, 8];
        let (_, reported) = dheap_sort(&input, 3).unwrap();

        let items = ItemHandle::from_values(&input);
        let mut heap = DHeap::new(3, input.len()).unwrap();
        let mut manual = heap.build_from_items(&items).unwrap();
        while !heap.is_empty() {
            manual += heap.delete_min().unwrap();
        }
        assert_eq!(reported, manual);
    }

    #[test]
    fn test_sort_in_place() {
        let mut values = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        sort_in_place(&mut values, 4).unwrap();
        assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }
}
