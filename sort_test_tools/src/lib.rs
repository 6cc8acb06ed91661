/// A comparison-counting sort under test.
///
/// Every sort returns the number of comparisons it performed, so the suite can check the
/// reported count against the calls it observes and against the Ford-Johnson worst case.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T]) -> u64
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F) -> u64
    where
        T: Eq,
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    /// Worst case number of comparisons allowed for `len` elements.
    fn comparison_bound(len: usize) -> u64;
}

pub mod patterns;
