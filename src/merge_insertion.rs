//! Recursive driver of merge-insertion sort (Ford-Johnson).
//!
//! Every call works on a sequence of slots and goes through the same pipeline: pair adjacent
//! elements, sort the winners recursively, realign the pairs, seed the main chain and merge the
//! remaining losers plus the straggler in Jacobsthal order. The caller's buffer is only touched
//! once, after the last comparison, by applying the final slot order as a permutation.

use crate::chain::{build_initial_chain, ChainInserter};
use crate::comparator::{Comparator, Slot};
use crate::jacobsthal::insertion_order;
use crate::observe::{Event, Observer, Phase};
use crate::pairs::{build_pairs, extract_straggler, reorder_pairs};

struct MergeInsertion<'a, T, F, O> {
    cmp: Comparator<'a, T, F>,
    observer: O,
}

impl<'a, T, F, O> MergeInsertion<'a, T, F, O>
where
    T: PartialEq,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    #[inline]
    fn emit(&mut self, depth: usize, phase: Phase<'_>) {
        let event = Event::new(depth, self.cmp.count(), phase, self.cmp.data());
        self.observer.observe(&event);
    }

    fn sort_slots(&mut self, seq: &mut Vec<Slot>, depth: usize) {
        self.emit(depth, Phase::Enter(seq));

        let len = seq.len();
        if len < 2 {
            self.emit(depth, Phase::BaseCase(seq));
            return;
        }

        if len == 2 {
            // Equal elements are swapped too.
            if !self.cmp.less(seq[0], seq[1]) {
                seq.swap(0, 1);
            }
            self.emit(depth, Phase::BaseCase(seq));
            return;
        }

        let pairs = build_pairs(seq, &mut self.cmp);
        self.emit(depth, Phase::PairsBuilt(&pairs));

        let straggler = extract_straggler(seq);
        self.emit(depth, Phase::StragglerExtracted(straggler));

        let mut winners = pairs.iter().map(|pair| pair.winner).collect::<Vec<_>>();
        self.emit(depth, Phase::WinnersExtracted(&winners));

        self.emit(depth, Phase::BeforeRecursion(&winners));
        self.sort_slots(&mut winners, depth + 1);
        self.emit(depth, Phase::AfterRecursion(&winners));

        let ordered_pairs = reorder_pairs(self.cmp.data(), &pairs, &winners);
        self.emit(depth, Phase::PairsReordered(&ordered_pairs));

        let chain = build_initial_chain(&ordered_pairs, len);
        self.emit(depth, Phase::ChainSeeded(&chain));

        let mut inserter = ChainInserter::new(chain, &ordered_pairs, straggler);
        self.emit(depth, Phase::BoundsInitialized(inserter.bounds()));

        let order = insertion_order(inserter.pending_count());
        self.emit(depth, Phase::InsertionOrderGenerated(&order));

        for &index in &order {
            let (slot, position) = inserter.insert(index, &mut self.cmp);
            self.emit(
                depth,
                Phase::Inserted {
                    slot,
                    position,
                    chain: inserter.chain(),
                    bounds: inserter.bounds(),
                },
            );
        }

        let chain = inserter.into_chain();
        debug_assert_eq!(chain.len(), len);

        *seq = chain;
        self.emit(depth, Phase::ChainSubstituted(seq));
    }
}

/// Sorts `v` with `is_less`, reporting to `observer`. Returns the number of comparisons.
pub(crate) fn merge_insertion_sort<T, F, O>(v: &mut [T], is_less: F, observer: O) -> u64
where
    T: PartialEq,
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let mut sorter = MergeInsertion {
        cmp: Comparator::new(v, is_less),
        observer,
    };

    let mut order = (0..v.len()).collect::<Vec<Slot>>();
    sorter.sort_slots(&mut order, 0);

    let MergeInsertion { cmp, mut observer } = sorter;
    let comparisons = cmp.count();
    // Ends the shared borrow of `v` held by the comparator.
    drop(cmp);

    apply_permutation(v, order);
    observer.finish(v.len(), comparisons);

    comparisons
}

/// Moves `v[order[i]]` to position `i` for every `i`, following the cycles of `order`.
fn apply_permutation<T>(v: &mut [T], mut order: Vec<Slot>) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..order.len() {
        let mut pos = start;
        // Visited positions are marked by pointing them to themselves.
        while order[pos] != pos {
            let src = order[pos];
            order[pos] = pos;
            if src == start {
                break;
            }
            v.swap(pos, src);
            pos = src;
        }
    }
}
