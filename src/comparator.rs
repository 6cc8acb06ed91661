//! Counted strict less-than.
//!
//! All ordering decisions of one sort invocation go through a single [`Comparator`], which owns
//! the comparison counter for that invocation. Elements are addressed by [`Slot`], their index in
//! the caller's input, so the recursion never moves or clones user values.

/// Index of an element in the input of the current sort invocation.
pub type Slot = usize;

pub struct Comparator<'a, T, F> {
    data: &'a [T],
    is_less: F,
    count: u64,
}

impl<'a, T, F> Comparator<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(data: &'a [T], is_less: F) -> Self {
        Self {
            data,
            is_less,
            count: 0,
        }
    }

    /// Returns `true` if the element in slot `a` precedes the element in slot `b`.
    #[inline]
    pub fn less(&mut self, a: Slot, b: Slot) -> bool {
        self.count += 1;
        (self.is_less)(&self.data[a], &self.data[b])
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_call() {
        let data = [3, 1, 2];
        let mut calls = 0;
        let mut cmp = Comparator::new(&data, |a: &i32, b: &i32| {
            calls += 1;
            a < b
        });

        assert!(!cmp.less(0, 1));
        assert!(cmp.less(1, 2));
        assert!(!cmp.less(2, 2));
        assert_eq!(cmp.count(), 3);

        drop(cmp);
        assert_eq!(calls, 3);
    }

    #[test]
    fn independent_counters() {
        let data = [1, 2];
        let mut a = Comparator::new(&data, |x: &i32, y: &i32| x < y);
        let mut b = Comparator::new(&data, |x: &i32, y: &i32| x < y);

        a.less(0, 1);
        a.less(1, 0);
        b.less(0, 1);

        assert_eq!(a.count(), 2);
        assert_eq!(b.count(), 1);
    }
}
