use crate::comparator::{Comparator, Slot};

/// Outcome of comparing two adjacent elements. `winner` is never less than `loser`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pair<E> {
    pub winner: E,
    pub loser: E,
}

impl<E> Pair<E> {
    pub fn map<U>(self, mut f: impl FnMut(E) -> U) -> Pair<U> {
        Pair {
            winner: f(self.winner),
            loser: f(self.loser),
        }
    }
}

/// Groups `(0, 1), (2, 3), ...` into pairs. On equality the element at the lower index wins.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn build_pairs<T, F>(seq: &[Slot], cmp: &mut Comparator<'_, T, F>) -> Vec<Pair<Slot>>
where
    F: FnMut(&T, &T) -> bool,
{
    seq.chunks_exact(2)
        .map(|chunk| {
            let (a, b) = (chunk[0], chunk[1]);
            if cmp.less(a, b) {
                Pair {
                    winner: b,
                    loser: a,
                }
            } else {
                Pair {
                    winner: a,
                    loser: b,
                }
            }
        })
        .collect()
}

#[inline]
pub(crate) fn extract_straggler(seq: &[Slot]) -> Option<Slot> {
    if seq.len() % 2 == 1 {
        seq.last().copied()
    } else {
        None
    }
}

/// Realigns `pairs` to the order of `sorted_winners`.
///
/// For every sorted winner the first not yet consumed pair, in original pair order, whose winner
/// value is equal is taken. Duplicate winners are therefore handed out in original pair order,
/// independent of where the recursion placed them. Equality is checked with `PartialEq` and does
/// not count as a comparison.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn reorder_pairs<T: PartialEq>(
    data: &[T],
    pairs: &[Pair<Slot>],
    sorted_winners: &[Slot],
) -> Vec<Pair<Slot>> {
    debug_assert_eq!(pairs.len(), sorted_winners.len());

    let mut consumed = vec![false; pairs.len()];
    let mut ordered = Vec::with_capacity(pairs.len());

    for &winner in sorted_winners {
        let value = &data[winner];
        let matching = pairs
            .iter()
            .zip(consumed.iter())
            .position(|(pair, &used)| !used && data[pair.winner] == *value)
            // Only reachable with an `Eq` impl that isn't reflexive. Keep the output a
            // permutation of the pairs regardless.
            .or_else(|| consumed.iter().position(|&used| !used));

        if let Some(idx) = matching {
            consumed[idx] = true;
            ordered.push(pairs[idx]);
        }
    }

    debug_assert_eq!(ordered.len(), pairs.len());

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_less(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn pairs_left_to_right() {
        let data = [5, 3, 1, 4, 2];
        let seq = [0, 1, 2, 3, 4];
        let mut cmp = Comparator::new(&data, is_less);

        let pairs = build_pairs(&seq, &mut cmp);

        assert_eq!(
            pairs,
            [
                Pair {
                    winner: 0,
                    loser: 1
                },
                Pair {
                    winner: 3,
                    loser: 2
                }
            ]
        );
        assert_eq!(cmp.count(), 2);
        assert_eq!(extract_straggler(&seq), Some(4));
    }

    #[test]
    fn equal_elements_earlier_wins() {
        let data = [2, 2, 1];
        let seq = [0, 1, 2];
        let mut cmp = Comparator::new(&data, is_less);

        let pairs = build_pairs(&seq, &mut cmp);

        assert_eq!(
            pairs,
            [Pair {
                winner: 0,
                loser: 1
            }]
        );
    }

    #[test]
    fn no_straggler_for_even_len() {
        assert_eq!(extract_straggler(&[]), None);
        assert_eq!(extract_straggler(&[7, 8]), None);
        assert_eq!(extract_straggler(&[7, 8, 9]), Some(9));
    }

    #[test]
    fn reorder_follows_sorted_winners() {
        let data = [9, 8, 4, 3, 6, 5];
        let pairs = [
            Pair {
                winner: 0,
                loser: 1,
            },
            Pair {
                winner: 2,
                loser: 3,
            },
            Pair {
                winner: 4,
                loser: 5,
            },
        ];

        let ordered = reorder_pairs(&data, &pairs, &[2, 4, 0]);

        assert_eq!(ordered, [pairs[1], pairs[2], pairs[0]]);
    }

    #[test]
    fn reorder_duplicate_winners_first_unconsumed_match() {
        // Both pairs have winner value 3. The recursion put slot 2 first, yet the pairs come out
        // in original order because matching is by value.
        let data = [3, 1, 3, 2];
        let pairs = [
            Pair {
                winner: 0,
                loser: 1,
            },
            Pair {
                winner: 2,
                loser: 3,
            },
        ];

        let ordered = reorder_pairs(&data, &pairs, &[2, 0]);

        assert_eq!(ordered, pairs);
    }

    #[test]
    fn pair_map() {
        let data = ["a", "b"];
        let pair = Pair {
            winner: 1,
            loser: 0,
        };

        assert_eq!(
            pair.map(|slot| data[slot]),
            Pair {
                winner: "b",
                loser: "a"
            }
        );
    }
}
