//! Heap's algorithm.

/// Iterative Heap's algorithm over a slice of fixed length.
///
/// Each call to [`advance`](Self::advance) applies a single transposition to
/// the slice, so that starting from any arrangement the initial state plus
/// the `len! - 1` advanced states visit every permutation exactly once.
///
/// # Examples
///
/// ```
/// use u_turnroute::exact::HeapPermutations;
///
/// let mut items = [0, 1, 2];
/// let mut heap = HeapPermutations::new(items.len());
/// let mut seen = vec![items];
/// while heap.advance(&mut items) {
///     seen.push(items);
/// }
/// assert_eq!(seen.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct HeapPermutations {
    c: Vec<usize>,
    i: usize,
}

impl HeapPermutations {
    /// Prepares to permute a slice of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            c: vec![0; len],
            i: 1,
        }
    }

    /// Moves `items` to the next permutation. Returns `false` once every
    /// permutation has been produced.
    ///
    /// `items` must have the length given to [`new`](Self::new).
    pub fn advance<T>(&mut self, items: &mut [T]) -> bool {
        debug_assert_eq!(items.len(), self.c.len());
        let n = self.c.len();
        while self.i < n {
            let i = self.i;
            if self.c[i] < i {
                if i % 2 == 0 {
                    items.swap(0, i);
                } else {
                    items.swap(self.c[i], i);
                }
                self.c[i] += 1;
                self.i = 1;
                return true;
            }
            self.c[i] = 0;
            self.i += 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_perms(n: usize) -> Vec<Vec<usize>> {
        let mut items: Vec<usize> = (0..n).collect();
        let mut heap = HeapPermutations::new(n);
        let mut out = vec![items.clone()];
        while heap.advance(&mut items) {
            out.push(items.clone());
        }
        out
    }

    #[test]
    fn test_counts_are_factorial() {
        assert_eq!(all_perms(0).len(), 1);
        assert_eq!(all_perms(1).len(), 1);
        assert_eq!(all_perms(2).len(), 2);
        assert_eq!(all_perms(4).len(), 24);
        assert_eq!(all_perms(6).len(), 720);
    }

    #[test]
    fn test_each_permutation_once() {
        let perms = all_perms(5);
        let unique: HashSet<_> = perms.iter().cloned().collect();
        assert_eq!(unique.len(), 120);
        for p in &perms {
            let mut sorted = p.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut items = [1, 2];
        let mut heap = HeapPermutations::new(2);
        assert!(heap.advance(&mut items));
        assert_eq!(items, [2, 1]);
        assert!(!heap.advance(&mut items));
        assert!(!heap.advance(&mut items));
    }
}
