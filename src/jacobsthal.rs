//! Insertion order of the pending elements.
//!
//! Uses the Jacobsthal variant `J(0) = 1, J(1) = 3, J(k) = J(k-1) + 2 * J(k-2)`, which yields
//! 1, 3, 5, 11, 21, 43, ... The gap between two consecutive terms is the size of one batch of
//! pending elements. Each batch is inserted back to front, so every element in it is searched in
//! a chain prefix of at most `2^k - 1` elements.

/// Returns the Jacobsthal terms starting with `[1, 3]`, extended until the last one is `>= limit`.
pub fn jacobsthal_numbers(limit: usize) -> Vec<usize> {
    let mut terms: Vec<usize> = vec![1, 3];

    loop {
        let len = terms.len();
        let (prev, last) = (terms[len - 2], terms[len - 1]);
        if last >= limit {
            break terms;
        }
        terms.push(last + 2 * prev);
    }
}

/// Returns the order in which the `pending_count` pending elements are merged into the chain.
///
/// The result is a permutation of `0..pending_count`. For every batch `J(k)` down to
/// `J(k-1) + 1` the index `i - 2` is emitted if it is in range and not yet used, then every
/// remaining index follows in ascending order.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn insertion_order(pending_count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(pending_count);
    if pending_count == 0 {
        return order;
    }

    let terms = jacobsthal_numbers(pending_count);
    let mut used = vec![false; pending_count];

    for batch in terms.windows(2) {
        let (end, start) = (batch[0], batch[1]);

        for i in (end + 1..=start).rev() {
            // i >= 2 always holds as the smallest batch starts above J(0) = 1.
            let idx = i - 2;
            if idx < pending_count && !used[idx] {
                order.push(idx);
                used[idx] = true;
            }
        }
    }

    order.extend((0..pending_count).filter(|&idx| !used[idx]));

    debug_assert_eq!(order.len(), pending_count);

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(jacobsthal_numbers(0), [1, 3]);
        assert_eq!(jacobsthal_numbers(3), [1, 3]);
        assert_eq!(jacobsthal_numbers(4), [1, 3, 5]);
        assert_eq!(jacobsthal_numbers(6), [1, 3, 5, 11]);
        assert_eq!(jacobsthal_numbers(43), [1, 3, 5, 11, 21, 43]);
        assert_eq!(jacobsthal_numbers(44), [1, 3, 5, 11, 21, 43, 85]);
    }

    #[test]
    fn order_small() {
        assert_eq!(insertion_order(0), Vec::<usize>::new());
        assert_eq!(insertion_order(1), [0]);
        assert_eq!(insertion_order(2), [1, 0]);
        assert_eq!(insertion_order(3), [1, 0, 2]);
        assert_eq!(insertion_order(4), [1, 0, 3, 2]);
        assert_eq!(insertion_order(5), [1, 0, 3, 2, 4]);
        assert_eq!(insertion_order(7), [1, 0, 3, 2, 6, 5, 4]);
    }

    #[test]
    fn order_batches() {
        assert_eq!(insertion_order(10), [1, 0, 3, 2, 9, 8, 7, 6, 5, 4]);
        assert_eq!(insertion_order(12), [1, 0, 3, 2, 9, 8, 7, 6, 5, 4, 11, 10]);
        assert_eq!(
            insertion_order(20),
            [1, 0, 3, 2, 9, 8, 7, 6, 5, 4, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10]
        );
    }

    #[test]
    fn order_is_permutation() {
        for pending_count in 0..300 {
            let mut order = insertion_order(pending_count);
            order.sort_unstable();
            assert!(order.iter().copied().eq(0..pending_count));
        }
    }
}
