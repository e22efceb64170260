// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Sample Validation and Summary Statistics*
//!
//! Helpers shared by the estimators. Validation runs over the whole sample before any
//! accumulation, so a rejected sample never leaves a half-updated distribution behind.
//! Samples are borrowed and never reordered in place.

use crate::errors::{DistributionError, Result};

/// Rejects an empty sample or one with fewer than `min_len` values.
#[inline]
pub fn check_sample_len(fname: &str, sample: &[f64], min_len: usize) -> Result<()> {
    if sample.len() < min_len.max(1) {
        return Err(DistributionError::TooFewElements(format!(
            "{} => needs at least {} values, got {}",
            fname,
            min_len.max(1),
            sample.len()
        )));
    }
    Ok(())
}

/// Rejects any value that is not finite.
pub fn check_finite_sample(fname: &str, sample: &[f64], min_len: usize) -> Result<()> {
    check_sample_len(fname, sample, min_len)?;
    if let Some(&bad) = sample.iter().find(|v| !v.is_finite()) {
        return Err(DistributionError::WrongSample(format!(
            "{} => sample values must be finite, found {}",
            fname, bad
        )));
    }
    Ok(())
}

/// Rejects any value that is not finite and strictly greater than `bound`.
pub fn check_sample_above(fname: &str, sample: &[f64], min_len: usize, bound: f64) -> Result<()> {
    check_sample_len(fname, sample, min_len)?;
    if let Some(&bad) = sample.iter().find(|&&v| !(v > bound && v.is_finite())) {
        return Err(DistributionError::WrongSample(format!(
            "{} => sample values must be finite and greater than {}, found {}",
            fname, bound, bad
        )));
    }
    Ok(())
}

/// Positive-support families: every value finite and `> 0`.
#[inline]
pub fn check_positive_sample(fname: &str, sample: &[f64], min_len: usize) -> Result<()> {
    check_sample_above(fname, sample, min_len, 0.0)
}

#[inline]
pub fn sample_sum(sample: &[f64]) -> f64 {
    sample.iter().sum()
}

#[inline]
pub fn sample_mean(sample: &[f64]) -> f64 {
    sample_sum(sample) / sample.len() as f64
}

/// Unbiased variance around a precomputed mean. Needs two or more values.
pub fn sample_variance(sample: &[f64], mean: f64) -> f64 {
    let ss: f64 = sample.iter().map(|&x| (x - mean) * (x - mean)).sum();
    ss / (sample.len() as f64 - 1.0)
}

/// Mean of `ln x`.
#[inline]
pub fn sample_mean_ln(sample: &[f64]) -> f64 {
    sample.iter().map(|x| x.ln()).sum::<f64>() / sample.len() as f64
}

/// Sorted copy of the sample, leaving the caller's order intact.
pub fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut v = sample.to_vec();
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

/// Order-statistic quantile of a sorted sample with linear interpolation between ranks.
pub fn sorted_quantile(sorted: &[f64], level: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = level.clamp(0.0, 1.0) * (n - 1) as f64;
    let i = h.floor() as usize;
    if i + 1 >= n {
        return sorted[n - 1];
    }
    sorted[i] + (h - i as f64) * (sorted[i + 1] - sorted[i])
}
