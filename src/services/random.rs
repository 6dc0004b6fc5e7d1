use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of uniform random choices for the password generator.
///
/// Production code uses the OS CSPRNG through [`RngSource::os`]. Tests pass a
/// seeded source or a mock to make composition assertions exact.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Uniform in-place permutation
    fn shuffle(&mut self, chars: &mut [char]);
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }

    fn shuffle(&mut self, chars: &mut [char]) {
        (**self).shuffle(chars)
    }
}

/// [`RandomSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<OsRng> {
    /// Operating system CSPRNG
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for tests and benchmarks
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn shuffle(&mut self, chars: &mut [char]) {
        // Fisher-Yates
        SliceRandom::shuffle(chars, &mut self.rng);
    }
}
