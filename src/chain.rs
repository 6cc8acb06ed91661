use crate::comparator::{Comparator, Slot};
use crate::pairs::Pair;

/// `[ordered[0].loser, ordered[0].winner, ordered[1].winner, ...]`
///
/// The loser of the smallest winner is not greater than any winner, so it seeds the minimum.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn build_initial_chain(ordered_pairs: &[Pair<Slot>], total_len: usize) -> Vec<Slot> {
    let mut chain = Vec::with_capacity(total_len);

    if let Some(first) = ordered_pairs.first() {
        chain.push(first.loser);
    }
    chain.extend(ordered_pairs.iter().map(|pair| pair.winner));

    chain
}

/// `bounds[i] = i + 1` is the chain position of the winner of pair `i`, the loser of that pair
/// only needs to be searched in front of it.
pub(crate) fn initial_bounds(num_pairs: usize) -> Vec<usize> {
    (1..=num_pairs).collect()
}

/// Leftmost position in `chain[..limit]` whose element is not less than `value`.
#[inline]
pub(crate) fn lower_bound<T, F>(
    chain: &[Slot],
    value: Slot,
    limit: usize,
    cmp: &mut Comparator<'_, T, F>,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(limit <= chain.len());

    let mut lo = 0;
    let mut hi = limit;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp.less(chain[mid], value) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Merges the pending losers and the straggler into the main chain.
pub(crate) struct ChainInserter<'p> {
    chain: Vec<Slot>,
    bounds: Vec<usize>,
    ordered_pairs: &'p [Pair<Slot>],
    straggler: Option<Slot>,
}

impl<'p> ChainInserter<'p> {
    pub fn new(chain: Vec<Slot>, ordered_pairs: &'p [Pair<Slot>], straggler: Option<Slot>) -> Self {
        debug_assert_eq!(chain.len(), ordered_pairs.len() + 1);

        Self {
            chain,
            bounds: initial_bounds(ordered_pairs.len()),
            ordered_pairs,
            straggler,
        }
    }

    /// Losers of every pair but the first, plus the straggler if present.
    pub fn pending_count(&self) -> usize {
        self.ordered_pairs.len().saturating_sub(1) + usize::from(self.straggler.is_some())
    }

    pub fn chain(&self) -> &[Slot] {
        &self.chain
    }

    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    pub fn into_chain(self) -> Vec<Slot> {
        self.chain
    }

    /// Inserts pending element `index` and returns its slot and the chain position it landed at.
    #[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
    pub fn insert<T, F>(&mut self, index: usize, cmp: &mut Comparator<'_, T, F>) -> (Slot, usize)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(index < self.pending_count());

        let (value, search_limit) = match self.straggler {
            // The straggler has no winner in the chain, it may land anywhere.
            Some(straggler) if index + 1 == self.ordered_pairs.len() => {
                (straggler, self.chain.len())
            }
            _ => {
                let pair_idx = index + 1;
                (self.ordered_pairs[pair_idx].loser, self.bounds[pair_idx])
            }
        };

        let position = lower_bound(&self.chain, value, search_limit, cmp);
        self.chain.insert(position, value);

        for bound in self.bounds.iter_mut() {
            if *bound >= position {
                *bound += 1;
            }
        }

        (value, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_less(a: &i32, b: &i32) -> bool {
        a < b
    }

    fn pairs_of(raw: &[(Slot, Slot)]) -> Vec<Pair<Slot>> {
        raw.iter()
            .map(|&(winner, loser)| Pair { winner, loser })
            .collect()
    }

    #[test]
    fn initial_chain() {
        let ordered = pairs_of(&[(3, 2), (0, 1)]);
        assert_eq!(build_initial_chain(&ordered, 5), [2, 3, 0]);
        assert_eq!(initial_bounds(2), [1, 2]);
        assert_eq!(initial_bounds(0), Vec::<usize>::new());
    }

    #[test]
    fn lower_bound_inserts_before_equal() {
        let data = [1, 3, 3, 5, 3];
        let chain = [0, 1, 2, 3];
        let mut cmp = Comparator::new(&data, is_less);

        assert_eq!(lower_bound(&chain, 4, chain.len(), &mut cmp), 1);
        assert_eq!(lower_bound(&chain, 4, 1, &mut cmp), 1);
        assert_eq!(lower_bound(&chain, 4, 0, &mut cmp), 0);
    }

    #[test]
    fn lower_bound_comparison_count() {
        let data = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let chain = [0, 1, 2, 3, 4, 5, 6];
        let mut cmp = Comparator::new(&data, is_less);

        // Searching 7 elements takes exactly 3 comparisons for every outcome.
        lower_bound(&chain, 8, chain.len(), &mut cmp);
        assert_eq!(cmp.count(), 3);
    }

    #[test]
    fn insert_straggler_and_bounds() {
        // Input [5, 3, 1, 4, 2] after pairing and reordering: (4, 1) then (5, 3), straggler 2.
        let data = [5, 3, 1, 4, 2];
        let ordered = pairs_of(&[(3, 2), (0, 1)]);
        let mut cmp = Comparator::new(&data, is_less);

        let mut inserter = ChainInserter::new(build_initial_chain(&ordered, 5), &ordered, Some(4));
        assert_eq!(inserter.pending_count(), 2);
        assert_eq!(inserter.bounds(), [1, 2]);

        // Pending index 1 is the straggler.
        let (slot, position) = inserter.insert(1, &mut cmp);
        assert_eq!((slot, position), (4, 1));
        assert_eq!(inserter.chain(), [2, 4, 3, 0]);
        assert_eq!(inserter.bounds(), [2, 3]);

        // Pending index 0 is the loser of the second pair, 3, searched in front of 5.
        let (slot, position) = inserter.insert(0, &mut cmp);
        assert_eq!((slot, position), (1, 2));
        assert_eq!(inserter.into_chain(), [2, 4, 1, 3, 0]);
    }

    #[test]
    fn bounds_shift_only_at_or_after_position() {
        // Ordered pairs by winner: (2, 1), (4, 3), (6, 5), (8, 7) as values.
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let ordered = pairs_of(&[(1, 0), (3, 2), (5, 4), (7, 6)]);
        let mut cmp = Comparator::new(&data, is_less);

        let mut inserter = ChainInserter::new(build_initial_chain(&ordered, 8), &ordered, None);
        assert_eq!(inserter.chain(), [0, 1, 3, 5, 7]);
        assert_eq!(inserter.bounds(), [1, 2, 3, 4]);

        // Value 5 lands right in front of its winner 6.
        let (_, position) = inserter.insert(1, &mut cmp);
        assert_eq!(position, 3);
        assert_eq!(inserter.bounds(), [1, 2, 4, 5]);

        let (_, position) = inserter.insert(0, &mut cmp);
        assert_eq!(position, 2);
        assert_eq!(inserter.bounds(), [1, 3, 5, 6]);

        let (_, position) = inserter.insert(2, &mut cmp);
        assert_eq!(position, 6);
        assert_eq!(inserter.into_chain(), [0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
