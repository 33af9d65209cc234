//! Index enumeration for subsets and visiting orders.
//!
//! Both generators yield indices in lexicographic order, so the first
//! element found among equals is always the same one.

/// Lexicographic `r`-combinations of `0..n`.
#[derive(Debug, Clone)]
pub(crate) struct Combinations {
    n: usize,
    indices: Vec<usize>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

impl Combinations {
    /// Enumerate every `r`-element subset of `0..n`.
    pub(crate) fn new(n: usize, r: usize) -> Self {
        let state = if r > n { State::Exhausted } else { State::Fresh };
        Self {
            n,
            indices: (0..r).collect(),
            state,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    #[expect(
        clippy::indexing_slicing,
        reason = "positions are bounded by the combination width"
    )]
    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Exhausted => return None,
            State::Fresh => {
                self.state = State::Running;
                return Some(self.indices.clone());
            }
            State::Running => {}
        }
        let r = self.indices.len();
        // Rightmost position that has not reached its final value.
        let Some(position) = (0..r)
            .rev()
            .find(|&i| self.indices[i] != i + self.n - r)
        else {
            self.state = State::Exhausted;
            return None;
        };
        self.indices[position] += 1;
        for i in position + 1..r {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Advance `order` to its next lexicographic permutation.
///
/// Returns `false`, leaving `order` untouched, once the last permutation has
/// been reached.
#[expect(
    clippy::indexing_slicing,
    reason = "pivot and successor are found within the slice bounds"
)]
pub(crate) fn next_permutation(order: &mut [usize]) -> bool {
    let Some(pivot) = (1..order.len())
        .rev()
        .find(|&i| order[i - 1] < order[i])
        .map(|i| i - 1)
    else {
        return false;
    };
    let Some(successor) = (pivot + 1..order.len())
        .rev()
        .find(|&j| order[j] > order[pivot])
    else {
        return false;
    };
    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn combinations_are_lexicographic() {
        let all: Vec<_> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[rstest]
    #[case(6, 1, 6)]
    #[case(6, 3, 20)]
    #[case(6, 6, 1)]
    #[case(3, 0, 1)]
    #[case(2, 3, 0)]
    fn combination_counts(#[case] n: usize, #[case] r: usize, #[case] expected: usize) {
        assert_eq!(Combinations::new(n, r).count(), expected);
    }

    #[rstest]
    fn permutations_are_lexicographic() {
        let mut order = vec![0, 1, 2];
        let mut seen = vec![order.clone()];
        while next_permutation(&mut order) {
            seen.push(order.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[rstest]
    fn last_permutation_is_left_untouched() {
        let mut order = vec![2, 1, 0];
        assert!(!next_permutation(&mut order));
        assert_eq!(order, vec![2, 1, 0]);
        let mut single = vec![0];
        assert!(!next_permutation(&mut single));
    }
}
