// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Sampling Primitives
//!
//! Standard exponential and normal draws from a [`UniformSource`], plus the bounded
//! driver every rejection generator runs through.

use std::f64::consts::PI;

use log::warn;

use crate::config::MAX_REJECTION_ROUNDS;
use crate::traits::uniform_source::UniformSource;

/// Exp(1) by inversion.
#[inline]
pub fn standard_exponential(src: &mut dyn UniformSource) -> f64 {
    -src.standard_uniform().ln()
}

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn standard_normal(src: &mut dyn UniformSource) -> f64 {
    let u1 = src.standard_uniform();
    let u2 = src.standard_uniform();
    let r = (-2.0 * u1.ln()).sqrt();
    r * (2.0 * PI * u2).cos()
}

/// Runs `attempt` until it accepts, at most [`MAX_REJECTION_ROUNDS`] times.
///
/// Exhaustion returns NaN, never a plausible value.
#[inline]
pub fn accept_reject<F>(src: &mut dyn UniformSource, mut attempt: F) -> f64
where
    F: FnMut(&mut dyn UniformSource) -> Option<f64>,
{
    for _ in 0..MAX_REJECTION_ROUNDS {
        if let Some(x) = attempt(&mut *src) {
            return x;
        }
    }
    warn!(
        "rejection sampler rejected {} rounds in a row; uniform source looks degenerate",
        MAX_REJECTION_ROUNDS
    );
    f64::NAN
}
