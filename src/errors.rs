// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Distribution Error Handling*
//!
//! Error types for parameter validation, estimation and iterative evaluation.
//!
//! ## Error Categories
//! - **Parameter Errors**: non-finite or out-of-domain distribution parameters
//! - **Sample Errors**: empty samples, or values outside the support required by an estimator
//! - **Level Errors**: probabilities outside `[0, 1]` passed to a quantile
//! - **Convergence Errors**: iterative solvers that exhaust their budget
//!
//! Every variant carries a message naming the operation that failed. Errors are
//! raised before any state is touched, so a failed setter or fit leaves the
//! distribution exactly as it was.

use core::fmt;
use std::error::Error;

/// Error type for all distribution operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A parameter is NaN, infinite, or outside its admissible range.
    InvalidParameter(String),

    /// A sample value lies outside the support the estimator requires.
    WrongSample(String),

    /// The sample is too small for the requested estimator.
    TooFewElements(String),

    /// An estimate or iterative solution is unusable, or did not converge.
    WrongReturn(String),

    /// A probability level lies outside `[0, 1]`.
    WrongLevel(String),

    /// The estimator is undefined for this sample or parameter state.
    NotApplicable(String),
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            DistributionError::WrongSample(msg) => write!(f, "Wrong sample: {}", msg),
            DistributionError::TooFewElements(msg) => write!(f, "Too few elements: {}", msg),
            DistributionError::WrongReturn(msg) => write!(f, "Wrong return: {}", msg),
            DistributionError::WrongLevel(msg) => write!(f, "Wrong level: {}", msg),
            DistributionError::NotApplicable(msg) => write!(f, "Not applicable: {}", msg),
        }
    }
}

impl Error for DistributionError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Formats a message for a parameter that failed validation.
///
/// # Arguments
/// * `fname` - Operation that rejected the parameter
/// * `name` - Parameter name
/// * `value` - Rejected value
pub fn log_invalid_parameter(fname: &str, name: &str, value: f64) -> String {
    format!("{} => {} must be finite and positive, got {}", fname, name, value)
}

/// Returns `InvalidParameter` unless `value` is finite and strictly positive.
#[inline]
pub(crate) fn check_positive(fname: &str, name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::InvalidParameter(log_invalid_parameter(
            fname, name, value,
        )))
    }
}

/// Returns `InvalidParameter` unless `value` is finite.
#[inline]
pub(crate) fn check_finite(fname: &str, name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::InvalidParameter(format!(
            "{} => {} must be finite, got {}",
            fname, name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_variant_and_context() {
        let e = DistributionError::WrongLevel("quantile => p = 1.5".into());
        assert_eq!(e.to_string(), "Wrong level: quantile => p = 1.5");
    }

    #[test]
    fn positivity_check() {
        assert!(check_positive("f", "shape", 2.0).is_ok());
        for v in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                check_positive("f", "shape", v),
                Err(DistributionError::InvalidParameter(_))
            ));
        }
        assert!(check_finite("f", "shift", -3.0).is_ok());
        assert!(check_finite("f", "shift", f64::NEG_INFINITY).is_err());
    }
}
