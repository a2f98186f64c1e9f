//! Sources of randomness for the builders.
//!
//! Builders only ever ask for "an integer in `[lo, hi]`", so the whole
//! random interface is the [`RandomSource`] trait. [`RngSource`] adapts any
//! [`rand`] generator; tests plug in scripted sources to pin every decision.

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::config::EllerConfig;

/// Draws uniformly distributed integers.
pub trait RandomSource {
    /// An integer drawn uniformly from `[lo, hi]` (both inclusive).
    ///
    /// Callers guarantee `lo <= hi`.
    fn next_int_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_int_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).next_int_in_range(lo, hi)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_int_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).next_int_in_range(lo, hi)
    }
}

/// A [`RandomSource`] backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed always yields the same maze.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Seeded when the configuration asks for deterministic mode,
    /// entropy-seeded otherwise.
    pub fn from_config(config: &EllerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi, "empty range [{lo}, {hi}]");
        self.rng.random_range(lo..=hi)
    }
}

/// Fair coin: `true` on one of two equally likely outcomes.
#[inline]
pub fn coin_flip(random: &mut impl RandomSource) -> bool {
    random.next_int_in_range(0, 1) == 0
}

/// Uniform index into a collection of `len > 0` elements.
#[inline]
pub fn pick_index(random: &mut impl RandomSource, len: usize) -> usize {
    debug_assert!(len > 0);
    random.next_int_in_range(0, len as i32 - 1) as usize
}

/// Fisher–Yates shuffle driven by `random`.
pub fn shuffle<T>(random: &mut impl RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random.next_int_in_range(0, i as i32) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Always answers the low bound: every coin flip says "remove".
    #[derive(Debug, Default)]
    pub struct AlwaysLow;

    impl RandomSource for AlwaysLow {
        fn next_int_in_range(&mut self, lo: i32, _hi: i32) -> i32 {
            lo
        }
    }

    /// Always answers the high bound: every coin flip says "keep".
    #[derive(Debug, Default)]
    pub struct AlwaysHigh;

    impl RandomSource for AlwaysHigh {
        fn next_int_in_range(&mut self, _lo: i32, hi: i32) -> i32 {
            hi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{AlwaysHigh, AlwaysLow};
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        let xs: Vec<_> = (0..32).map(|_| a.next_int_in_range(-5, 5)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.next_int_in_range(-5, 5)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut r = RngSource::seeded(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[r.next_int_in_range(0, 2) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert_eq!(r.next_int_in_range(4, 4), 4);
    }

    #[test]
    fn from_config_honours_seed() {
        let config = EllerConfig::default().deterministic();
        let mut a = RngSource::from_config(&config);
        let mut b = RngSource::from_config(&config);
        assert_eq!(a.next_int_in_range(0, 1000), b.next_int_in_range(0, 1000));
    }

    #[test]
    fn scripted_coins() {
        assert!(coin_flip(&mut AlwaysLow));
        assert!(!coin_flip(&mut AlwaysHigh));
        assert_eq!(pick_index(&mut AlwaysHigh, 5), 4);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut r = RngSource::seeded(3);
        let mut v: Vec<i32> = (0..20).collect();
        shuffle(&mut r, &mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());

        let mut w = vec![1, 2, 3];
        shuffle(&mut AlwaysHigh, &mut w);
        assert_eq!(w, vec![1, 2, 3]);
    }
}
