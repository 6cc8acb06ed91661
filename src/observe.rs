//! Instrumentation hook.
//!
//! The sort emits an [`Event`] after every phase of every recursive call. Observers only get to
//! look, the algorithm never depends on them. Snapshots are expressed in [`Slot`]s, use
//! [`Event::value`], [`Event::values`] and [`Event::pair`] to resolve them to input values.

use std::fmt::{self, Debug};

use log::{debug, log_enabled, trace, Level};

use crate::comparator::Slot;
use crate::pairs::Pair;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase<'a> {
    /// A call started with the given working sequence.
    Enter(&'a [Slot]),
    /// Length 0, 1 or 2, the call ends here. Holds the sequence after the optional swap.
    BaseCase(&'a [Slot]),
    PairsBuilt(&'a [Pair<Slot>]),
    StragglerExtracted(Option<Slot>),
    WinnersExtracted(&'a [Slot]),
    BeforeRecursion(&'a [Slot]),
    AfterRecursion(&'a [Slot]),
    PairsReordered(&'a [Pair<Slot>]),
    ChainSeeded(&'a [Slot]),
    /// One entry per pair, `bounds[i] = i + 1`. Entry 0 is never consulted.
    BoundsInitialized(&'a [usize]),
    InsertionOrderGenerated(&'a [usize]),
    Inserted {
        slot: Slot,
        position: usize,
        chain: &'a [Slot],
        bounds: &'a [usize],
    },
    ChainSubstituted(&'a [Slot]),
}

impl Phase<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Enter(_) => "enter",
            Phase::BaseCase(_) => "base_case",
            Phase::PairsBuilt(_) => "pairs_built",
            Phase::StragglerExtracted(_) => "straggler_extracted",
            Phase::WinnersExtracted(_) => "winners_extracted",
            Phase::BeforeRecursion(_) => "before_recursion",
            Phase::AfterRecursion(_) => "after_recursion",
            Phase::PairsReordered(_) => "pairs_reordered",
            Phase::ChainSeeded(_) => "chain_seeded",
            Phase::BoundsInitialized(_) => "bounds_initialized",
            Phase::InsertionOrderGenerated(_) => "insertion_order_generated",
            Phase::Inserted { .. } => "inserted",
            Phase::ChainSubstituted(_) => "chain_substituted",
        }
    }
}

pub struct Event<'a, T> {
    /// Recursion depth, 0 for the top-level call.
    pub depth: usize,
    /// Comparisons performed so far by this sort invocation.
    pub comparisons: u64,
    pub phase: Phase<'a>,
    data: &'a [T],
}

impl<'a, T> Event<'a, T> {
    pub(crate) fn new(depth: usize, comparisons: u64, phase: Phase<'a>, data: &'a [T]) -> Self {
        Self {
            depth,
            comparisons,
            phase,
            data,
        }
    }

    pub fn value(&self, slot: Slot) -> &'a T {
        &self.data[slot]
    }

    pub fn values(&self, slots: &[Slot]) -> Vec<&'a T> {
        slots.iter().map(|&slot| &self.data[slot]).collect()
    }

    pub fn pair(&self, pair: Pair<Slot>) -> Pair<&'a T> {
        pair.map(|slot| &self.data[slot])
    }
}

impl<T: Debug> Debug for Event<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth={} comparisons={} {}",
            self.depth,
            self.comparisons,
            self.phase.name()
        )?;

        match self.phase {
            Phase::Enter(seq)
            | Phase::BaseCase(seq)
            | Phase::WinnersExtracted(seq)
            | Phase::BeforeRecursion(seq)
            | Phase::AfterRecursion(seq)
            | Phase::ChainSeeded(seq)
            | Phase::ChainSubstituted(seq) => write!(f, " {:?}", self.values(seq)),
            Phase::PairsBuilt(pairs) | Phase::PairsReordered(pairs) => {
                let pairs = pairs.iter().map(|&p| self.pair(p)).collect::<Vec<_>>();
                write!(f, " {pairs:?}")
            }
            Phase::StragglerExtracted(straggler) => {
                write!(f, " {:?}", straggler.map(|slot| self.value(slot)))
            }
            Phase::BoundsInitialized(bounds) => write!(f, " {bounds:?}"),
            Phase::InsertionOrderGenerated(order) => write!(f, " {order:?}"),
            Phase::Inserted {
                slot,
                position,
                chain,
                bounds,
            } => write!(
                f,
                " {:?} at {position} chain={:?} bounds={bounds:?}",
                self.value(slot),
                self.values(chain)
            ),
        }
    }
}

pub trait Observer<T> {
    fn observe(&mut self, event: &Event<'_, T>);

    /// Called once when the top-level call has rewritten the input.
    fn finish(&mut self, _len: usize, _comparisons: u64) {}
}

impl<T, O: Observer<T> + ?Sized> Observer<T> for &mut O {
    #[inline]
    fn observe(&mut self, event: &Event<'_, T>) {
        (**self).observe(event);
    }

    #[inline]
    fn finish(&mut self, len: usize, comparisons: u64) {
        (**self).finish(len, comparisons);
    }
}

/// Ignores all events.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl<T> Observer<T> for NoopObserver {
    #[inline(always)]
    fn observe(&mut self, _event: &Event<'_, T>) {}
}

/// Forwards every event to the `log` facade, phases at trace level and the summary at debug
/// level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

impl<T: Debug> Observer<T> for LogObserver {
    fn observe(&mut self, event: &Event<'_, T>) {
        // Resolving the snapshots allocates, skip it when nobody listens.
        if log_enabled!(Level::Trace) {
            trace!("{event:?}");
        }
    }

    fn finish(&mut self, len: usize, comparisons: u64) {
        debug!("merge insertion sort len={len} comparisons={comparisons}");
    }
}
