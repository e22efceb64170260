// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Continuous Distribution Interface** - *Single Capability Trait*
//!
//! Every family is a concrete struct owning its parameters and derived cache, and
//! implements [`ContinuousDistribution`]. The trait is object safe, so heterogeneous
//! families can be held as `Box<dyn ContinuousDistribution>`.
//!
//! Families provide the pointwise density, distribution and moment functions. Level
//! validation for quantiles, the median, kurtosis and the bulk `_to` evaluators are
//! provided here once.
//!
//! ## Bulk evaluation
//! The `_to` functions write into a caller-supplied buffer. When the buffer is shorter
//! than the input the call writes nothing and returns normally; a warning is logged.

use log::warn;
use num_complex::Complex64;

use crate::errors::{DistributionError, Result};
use crate::traits::uniform_source::UniformSource;

/// Rejects probability levels outside `[0, 1]`, including NaN.
#[inline]
pub fn check_level(fname: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(DistributionError::WrongLevel(format!(
            "{} => probability must lie in [0, 1], got {}",
            fname, p
        )))
    }
}

#[inline]
fn buffer_fits(fname: &str, input: usize, output: usize) -> bool {
    if output < input {
        warn!(
            "{}: output buffer holds {} values but {} were requested; nothing written",
            fname, output, input
        );
        return false;
    }
    true
}

/// A univariate distribution over the real line.
pub trait ContinuousDistribution {
    /// Infimum of the support.
    fn min_value(&self) -> f64;

    /// Supremum of the support.
    fn max_value(&self) -> f64;

    /// Density `f(x)`.
    fn pdf(&self, x: f64) -> f64;

    /// `ln f(x)`, `-inf` outside the support.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Distribution function `F(x) = P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Survival function `S(x) = P(X > x)`.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// `ln F(x)`.
    fn log_cdf(&self, x: f64) -> f64 {
        self.cdf(x).ln()
    }

    /// `ln S(x)`.
    fn log_sf(&self, x: f64) -> f64 {
        self.sf(x).ln()
    }

    /// Quantile for `p` strictly inside `(0, 1)`. Called only after level validation.
    fn quantile_interior(&self, p: f64) -> Result<f64>;

    /// Solves `S(x) = q` for `q` strictly inside `(0, 1)`.
    ///
    /// Families should override this when `1 - q` loses precision.
    fn quantile_1m_interior(&self, q: f64) -> Result<f64> {
        self.quantile_interior(1.0 - q)
    }

    /// Inverse of [`ContinuousDistribution::cdf`].
    ///
    /// `p = 0` and `p = 1` return the support bounds; levels outside `[0, 1]` are
    /// rejected with `WrongLevel`.
    fn quantile(&self, p: f64) -> Result<f64> {
        check_level("quantile", p)?;
        if p == 0.0 {
            return Ok(self.min_value());
        }
        if p == 1.0 {
            return Ok(self.max_value());
        }
        self.quantile_interior(p)
    }

    /// Inverse of [`ContinuousDistribution::sf`]: returns `x` with `S(x) = q`.
    fn quantile_1m(&self, q: f64) -> Result<f64> {
        check_level("quantile_1m", q)?;
        if q == 0.0 {
            return Ok(self.max_value());
        }
        if q == 1.0 {
            return Ok(self.min_value());
        }
        self.quantile_1m_interior(q)
    }

    /// One variate drawn with `src` as the only entropy.
    ///
    /// Rejection samplers give up after
    /// [`MAX_REJECTION_ROUNDS`](crate::config::MAX_REJECTION_ROUNDS) consecutive rejections,
    /// which only a degenerate source produces. The result is then NaN, logged at `warn`,
    /// never a biased finite value.
    fn variate(&self, src: &mut dyn UniformSource) -> f64;

    fn mean(&self) -> f64;

    fn variance(&self) -> f64;

    fn mode(&self) -> f64;

    fn median(&self) -> Result<f64> {
        self.quantile(0.5)
    }

    fn skewness(&self) -> f64;

    fn excess_kurtosis(&self) -> f64;

    fn kurtosis(&self) -> f64 {
        self.excess_kurtosis() + 3.0
    }

    /// Characteristic function `E[exp(itX)]`.
    fn cf(&self, t: f64) -> Complex64;

    /// Fills `out` with independent variates; see [`ContinuousDistribution::variate`] for
    /// when a slot holds NaN.
    fn sample_to(&self, src: &mut dyn UniformSource, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.variate(src);
        }
    }

    /// Writes `f(x[i])` into `out[i]`.
    fn pdf_to(&self, x: &[f64], out: &mut [f64]) {
        if !buffer_fits("pdf_to", x.len(), out.len()) {
            return;
        }
        for (o, &xi) in out.iter_mut().zip(x) {
            *o = self.pdf(xi);
        }
    }

    /// Writes `F(x[i])` into `out[i]`.
    fn cdf_to(&self, x: &[f64], out: &mut [f64]) {
        if !buffer_fits("cdf_to", x.len(), out.len()) {
            return;
        }
        for (o, &xi) in out.iter_mut().zip(x) {
            *o = self.cdf(xi);
        }
    }

    /// Writes `S(x[i])` into `out[i]`.
    fn sf_to(&self, x: &[f64], out: &mut [f64]) {
        if !buffer_fits("sf_to", x.len(), out.len()) {
            return;
        }
        for (o, &xi) in out.iter_mut().zip(x) {
            *o = self.sf(xi);
        }
    }

    /// Writes `cf(t[i])` into `out[i]`.
    fn cf_to(&self, t: &[f64], out: &mut [Complex64]) {
        if !buffer_fits("cf_to", t.len(), out.len()) {
            return;
        }
        for (o, &ti) in out.iter_mut().zip(t) {
            *o = self.cf(ti);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit exponential, enough to exercise the provided methods.
    struct UnitExp;

    impl ContinuousDistribution for UnitExp {
        fn min_value(&self) -> f64 {
            0.0
        }
        fn max_value(&self) -> f64 {
            f64::INFINITY
        }
        fn pdf(&self, x: f64) -> f64 {
            if x < 0.0 { 0.0 } else { (-x).exp() }
        }
        fn cdf(&self, x: f64) -> f64 {
            if x < 0.0 { 0.0 } else { -(-x).exp_m1() }
        }
        fn quantile_interior(&self, p: f64) -> Result<f64> {
            Ok(-(-p).ln_1p())
        }
        fn variate(&self, src: &mut dyn UniformSource) -> f64 {
            -src.standard_uniform().ln()
        }
        fn mean(&self) -> f64 {
            1.0
        }
        fn variance(&self) -> f64 {
            1.0
        }
        fn mode(&self) -> f64 {
            0.0
        }
        fn skewness(&self) -> f64 {
            2.0
        }
        fn excess_kurtosis(&self) -> f64 {
            6.0
        }
        fn cf(&self, t: f64) -> Complex64 {
            Complex64::new(1.0, 0.0) / Complex64::new(1.0, -t)
        }
    }

    #[test]
    fn level_validation() {
        let d = UnitExp;
        assert_eq!(d.quantile(0.0).unwrap(), 0.0);
        assert_eq!(d.quantile(1.0).unwrap(), f64::INFINITY);
        assert_eq!(d.quantile_1m(0.0).unwrap(), f64::INFINITY);
        assert_eq!(d.quantile_1m(1.0).unwrap(), 0.0);
        for p in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(d.quantile(p), Err(DistributionError::WrongLevel(_))));
            assert!(matches!(d.quantile_1m(p), Err(DistributionError::WrongLevel(_))));
        }
        let m = d.median().unwrap();
        assert!((m - std::f64::consts::LN_2).abs() < 1e-15);
        assert_eq!(d.kurtosis(), 9.0);
    }

    #[test]
    fn short_buffer_is_untouched() {
        let d = UnitExp;
        let x = [0.5, 1.0, 2.0];
        let mut out = [-7.0; 2];
        d.cdf_to(&x, &mut out);
        d.sf_to(&x, &mut out);
        d.pdf_to(&x, &mut out);
        assert_eq!(out, [-7.0, -7.0]);

        let mut cf_out = [Complex64::new(9.0, 9.0); 1];
        d.cf_to(&x, &mut cf_out);
        assert_eq!(cf_out[0], Complex64::new(9.0, 9.0));
    }

    #[test]
    fn longer_buffer_keeps_tail() {
        let d = UnitExp;
        let x = [0.0, 1.0];
        let mut out = [-1.0; 3];
        d.cdf_to(&x, &mut out);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - (1.0 - (-1.0f64).exp())).abs() < 1e-15);
        assert_eq!(out[2], -1.0);
    }
}
