// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Uniform Source** - *Entropy Boundary for Variate Generation*
//!
//! Distributions never generate entropy themselves. Every call that needs randomness takes
//! an explicit `&mut dyn UniformSource`, so sequences are reproducible from a seed and no
//! hidden process-wide generator exists.
//!
//! [`RandSource`] adapts any `rand` generator. Sharing a source between threads is a caller
//! concern: give each thread its own source, or lock a shared one externally.

use rand::rngs::{StdRng, ThreadRng};
use rand::{RngCore, SeedableRng, rng};

/// Supplier of raw unsigned draws on the closed range `[0, max_value()]`.
pub trait UniformSource {
    /// One raw draw, uniform on `[0, max_value()]`.
    fn draw(&mut self) -> u64;

    /// Inclusive upper bound of [`UniformSource::draw`].
    fn max_value(&self) -> u64;

    /// A standard uniform strictly inside `(0, 1)`.
    ///
    /// Draws are mapped to bucket midpoints, so neither `ln(u)` nor `ln(1 - u)` can
    /// produce an infinity.
    #[inline]
    fn standard_uniform(&mut self) -> f64 {
        let span = self.max_value() as f64 + 1.0;
        let u = (self.draw() as f64 + 0.5) / span;
        u.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON / 2.0)
    }
}

/// Resolution of [`RandSource`] draws in bits.
const RAND_SOURCE_BITS: u32 = 52;

/// [`UniformSource`] backed by a `rand` generator.
///
/// Each draw keeps the top 52 bits of `next_u64`, so midpoint mapping in
/// [`UniformSource::standard_uniform`] is exact in `f64`.
#[derive(Debug, Clone)]
pub struct RandSource<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandSource<R> {
    /// Wraps an existing generator.
    #[inline]
    pub fn new(rng: R) -> Self {
        RandSource { rng }
    }

    /// Returns the wrapped generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandSource<StdRng> {
    /// Deterministic source: the same seed always yields the same sequence.
    #[inline]
    pub fn seed_from_u64(seed: u64) -> Self {
        RandSource::new(StdRng::seed_from_u64(seed))
    }
}

impl RandSource<ThreadRng> {
    /// Source over the thread-local `rand` generator.
    #[inline]
    pub fn thread_local() -> Self {
        RandSource::new(rng())
    }
}

impl<R: RngCore> UniformSource for RandSource<R> {
    #[inline]
    fn draw(&mut self) -> u64 {
        self.rng.next_u64() >> (64 - RAND_SOURCE_BITS)
    }

    #[inline]
    fn max_value(&self) -> u64 {
        (1u64 << RAND_SOURCE_BITS) - 1
    }
}
