/// Which site pairs enter the double sum over the chain.
///
/// The published expression sums pairs `(i, j)` with `1 <= i < length - 1` and
/// `i < j < length`, leaving site 0 out of the outer loop. Whether that reflects the intended
/// pair counting is unresolved, so the convention is explicit and defaults to the published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairCounting {
    /// Outer index starts at 1: `(N-1)(N-2)/2` pairs, separations `1..=N-2`.
    #[default]
    Reference,
    /// Outer index starts at 0: `N(N-1)/2` pairs, separations `1..=N-1`, so `ω(0) = N`.
    AllPairs,
}

impl PairCounting {
    fn first_site(self) -> usize {
        match self {
            PairCounting::Reference => 1,
            PairCounting::AllPairs => 0,
        }
    }

    /// Distinct separations and how many summed pairs share each, in ascending `n`.
    ///
    /// The kernel depends on a pair only through `n = j - i`, so this is all the double sum needs.
    pub fn separation_weights(self, length: usize) -> Vec<(usize, usize)> {
        let first = self.first_site();
        if length < first + 2 {
            return Vec::new();
        }
        let max_separation = length - 1 - first;
        (1..=max_separation)
            .map(|n| (n, length - first - n))
            .collect()
    }

    /// Total number of pairs in the double sum.
    pub fn pair_count(self, length: usize) -> usize {
        self.separation_weights(length)
            .iter()
            .map(|&(_, count)| count)
            .sum()
    }
}
