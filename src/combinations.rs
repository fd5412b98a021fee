// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

//! Fixed-size index combinations.
//!
//! [`Combinations`] walks every `r`-element subset of `0..n` in
//! lexicographic order. Selections are positions into a caller-owned
//! snapshot, so the underlying collection is never touched while the walk
//! is in progress.

use smallvec::SmallVec;

type Indices = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Active,
    Exhausted,
}

/// Lazy, restartable generator of the `r`-subsets of `0..n`.
///
/// `r == 0` produces exactly one (empty) selection and `r > n` produces
/// none, matching the usual binomial conventions.
///
/// ```
/// use kclique::Combinations;
///
/// let mut combos = Combinations::new(4, 2);
/// assert_eq!(combos.advance(), Some(&[0, 1][..]));
/// assert_eq!(combos.advance(), Some(&[0, 2][..]));
/// assert_eq!(combos.by_ref().count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    r: usize,
    indices: Indices,
    state: State,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        let mut combinations = Combinations {
            n,
            r,
            indices: Indices::new(),
            state: State::Exhausted,
        };
        combinations.reset();
        combinations
    }

    /// Size of the pool the selections are drawn from.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.n
    }

    /// Size of every selection.
    #[inline]
    pub fn selection_size(&self) -> usize {
        self.r
    }

    /// Step to the next selection and borrow it.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Exhausted => None,
            State::Fresh => {
                self.state = State::Active;
                Some(&self.indices)
            }
            State::Active => {
                if self.step() {
                    Some(&self.indices)
                } else {
                    self.state = State::Exhausted;
                    None
                }
            }
        }
    }

    /// Rewind to the first selection. A walk with `r > n` stays empty.
    pub fn reset(&mut self) {
        // The buffer is only ever filled when r <= n.
        if self.r > self.n {
            self.state = State::Exhausted;
            return;
        }
        self.indices.clear();
        self.indices.extend(0..self.r);
        self.state = State::Fresh;
    }

    // Next lexicographic combination; false once the last one was seen.
    fn step(&mut self) -> bool {
        let r = self.indices.len();
        let mut pivot = r;
        while pivot > 0 && self.indices[pivot - 1] == self.n - r + (pivot - 1) {
            pivot -= 1;
        }
        if pivot == 0 {
            return false;
        }
        self.indices[pivot - 1] += 1;
        for j in pivot..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}

/// `C(n, r)`, or `None` when it does not fit in a `u64`.
pub fn binomial(n: usize, r: usize) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r) as u64;
    let n = n as u64;
    let mut acc: u64 = 1;
    for i in 0..r {
        // acc * (n - i) is always divisible by (i + 1) here.
        let numerator = (acc as u128) * ((n - i) as u128);
        let next = numerator / ((i + 1) as u128);
        acc = u64::try_from(next).ok()?;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::{binomial, Combinations};

    #[test]
    fn lexicographic_order() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
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

    #[test]
    fn empty_selection_is_produced_once() {
        let mut combos = Combinations::new(5, 0);
        assert_eq!(combos.advance(), Some(&[][..]));
        assert_eq!(combos.advance(), None);
        assert_eq!(combos.advance(), None);

        let mut from_nothing = Combinations::new(0, 0);
        assert_eq!(from_nothing.next(), Some(Vec::new()));
        assert_eq!(from_nothing.next(), None);
    }

    #[test]
    fn oversized_selection_yields_nothing() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert_eq!(Combinations::new(0, 1).count(), 0);
    }

    #[test]
    fn huge_selection_size_does_not_allocate() {
        let mut combos = Combinations::new(3, usize::MAX);
        assert_eq!(combos.selection_size(), usize::MAX);
        assert_eq!(combos.pool_size(), 3);
        assert_eq!(combos.advance(), None);
        combos.reset();
        assert_eq!(combos.count(), 0);
        assert_eq!(Combinations::new(3, usize::MAX / 2).count(), 0);
    }

    #[test]
    fn sizes_are_reported() {
        let mut combos = Combinations::new(6, 4);
        assert_eq!(combos.pool_size(), 6);
        assert_eq!(combos.selection_size(), 4);
        assert_eq!(combos.advance().map(<[usize]>::len), Some(4));
        assert_eq!(Combinations::new(2, 0).selection_size(), 0);
    }

    #[test]
    fn full_selection_yields_identity() {
        let all: Vec<Vec<usize>> = Combinations::new(3, 3).collect();
        assert_eq!(all, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn counts_match_binomial() {
        for n in 0..9 {
            for r in 0..=n + 1 {
                let expected = binomial(n, r).unwrap();
                assert_eq!(Combinations::new(n, r).count() as u64, expected, "C({n}, {r})");
            }
        }
    }

    #[test]
    fn reset_restarts_the_walk() {
        let mut combos = Combinations::new(5, 3);
        let first: Vec<Vec<usize>> = combos.by_ref().take(4).collect();
        combos.reset();
        let again: Vec<Vec<usize>> = combos.by_ref().take(4).collect();
        assert_eq!(first, again);

        // Exhausted walks can be restarted too.
        assert_eq!(combos.by_ref().count(), 10 - 4);
        combos.reset();
        assert_eq!(combos.count(), 10);
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(5, 0), Some(1));
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(15, 4), Some(1365));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(20, 10), Some(184_756));
        assert!(binomial(67, 33).is_some());
        assert_eq!(binomial(68, 34), None);
    }
}
