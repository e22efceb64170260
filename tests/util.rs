#![allow(unused)]

use dist_kernels::traits::distribution::ContinuousDistribution;

pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert!(
                ai.is_infinite() && ai.is_sign_positive() == ei.is_sign_positive(),
                "idx {i}: expected {ei}, got {ai}"
            );
            continue;
        }
        let scale = 1.0_f64.max(ei.abs());
        let ok = (ai - ei).abs() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

/// Densities through the bulk evaluator.
pub fn pdf_vec<D: ContinuousDistribution>(d: &D, x: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; x.len()];
    d.pdf_to(x, &mut out);
    out
}

pub fn cdf_vec<D: ContinuousDistribution>(d: &D, x: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; x.len()];
    d.cdf_to(x, &mut out);
    out
}

pub fn sf_vec<D: ContinuousDistribution>(d: &D, x: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; x.len()];
    d.sf_to(x, &mut out);
    out
}

pub fn quantile_vec<D: ContinuousDistribution>(d: &D, q: &[f64]) -> Vec<f64> {
    q.iter()
        .map(|&p| d.quantile(p).expect("level in [0, 1]"))
        .collect()
}
