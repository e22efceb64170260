// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// Reference tests for the Laplace distribution.
//
// Inputs follow the SciPy reference suite. Expected values were evaluated in
// 50-digit arithmetic with mpmath and rounded to the nearest double.
// NaN/Inf equality is handled by util::assert_slice_close.

mod util;

#[cfg(feature = "probability_distributions")]
mod scipy_laplace_tests {
    use super::util::{assert_slice_close, cdf_vec, pdf_vec, quantile_vec};
    use dist_kernels::distributions::univariate::laplace::LaplaceRand;

    #[test]
    fn laplace_pdf_standard() {
        let d = LaplaceRand::new(0.0, 1.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.024893534183931972,
            0.18393972058572117,
            0.5,
            0.18393972058572117,
            0.024893534183931972,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_pdf_shifted() {
        let d = LaplaceRand::new(2.0, 1.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.0033689734995427335,
            0.024893534183931972,
            0.06766764161830635,
            0.18393972058572117,
            0.18393972058572117,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_pdf_scaled() {
        let d = LaplaceRand::new(0.0, 2.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.055782540037107455,
            0.15163266492815836,
            0.25,
            0.15163266492815836,
            0.055782540037107455,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_pdf_negative() {
        let d = LaplaceRand::new(-1.0, 0.5).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.01831563888873418,
            1.0,
            0.1353352832366127,
            0.01831563888873418,
            0.00033546262790251185,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_pdf_large() {
        let d = LaplaceRand::new(3.0, 3.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.022555880539435448,
            0.043932856352621126,
            0.061313240195240384,
            0.08556951983876533,
            0.16666666666666666,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_cdf_cdf_standard() {
        let d = LaplaceRand::new(0.0, 1.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.024893534183931972,
            0.18393972058572117,
            0.5,
            0.8160602794142788,
            0.9751064658160681,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_cdf_cdf_shifted() {
        let d = LaplaceRand::new(2.0, 1.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.0033689734995427335,
            0.024893534183931972,
            0.06766764161830635,
            0.18393972058572117,
            0.8160602794142788,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_cdf_cdf_scaled() {
        let d = LaplaceRand::new(0.0, 2.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.11156508007421491,
            0.3032653298563167,
            0.5,
            0.6967346701436833,
            0.888434919925785,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_cdf_cdf_negative() {
        let d = LaplaceRand::new(-1.0, 0.5).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.00915781944436709,
            0.5,
            0.9323323583816937,
            0.9908421805556329,
            0.9998322686860488,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_cdf_cdf_large() {
        let d = LaplaceRand::new(3.0, 3.0).unwrap();
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.06766764161830635,
            0.13179856905786339,
            0.18393972058572117,
            0.256708559516296,
            0.5,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn laplace_quantile_laplace_quantile_standard() {
        let d = LaplaceRand::new(0.0, 1.0).unwrap();
        let q = [0.01, 0.1, 0.5, 0.9, 0.99];
        let expect = [
            -3.912023005428146,
            -1.6094379124341003,
            0.0,
            1.6094379124341005,
            3.912023005428145,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn laplace_quantile_laplace_quantile_shifted() {
        let d = LaplaceRand::new(2.0, 1.0).unwrap();
        let q = [0.01, 0.1, 0.5, 0.9, 0.99];
        let expect = [
            -1.912023005428146,
            0.39056208756589966,
            2.0,
            3.6094379124341005,
            5.9120230054281455,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn laplace_quantile_laplace_quantile_scaled() {
        let d = LaplaceRand::new(0.0, 2.0).unwrap();
        let q = [0.01, 0.1, 0.5, 0.9, 0.99];
        let expect = [-7.824046010856292, -3.2188758248682006, 0.0, 3.218875824868201, 7.82404601085629];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn laplace_quantile_laplace_quantile_negative() {
        let d = LaplaceRand::new(-1.0, 0.5).unwrap();
        let q = [0.01, 0.1, 0.5, 0.9, 0.99];
        let expect = [
            -2.956011502714073,
            -1.8047189562170503,
            -1.0,
            -0.1952810437829497,
            0.9560115027140725,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn laplace_quantile_laplace_quantile_large() {
        let d = LaplaceRand::new(3.0, 3.0).unwrap();
        let q = [0.01, 0.1, 0.5, 0.9, 0.99];
        let expect = [
            -8.736069016284437,
            -1.828313737302301,
            3.0,
            7.8283137373023015,
            14.736069016284436,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }
}
