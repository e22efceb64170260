// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// Reference tests for the chi-squared distribution.
//
// Inputs follow the SciPy reference suite. Expected values were evaluated in
// 50-digit arithmetic with mpmath and rounded to the nearest double.
// NaN/Inf equality is handled by util::assert_slice_close.

mod util;

#[cfg(feature = "probability_distributions")]
mod scipy_chi2_tests {
    use super::util::{assert_slice_close, cdf_vec, pdf_vec, quantile_vec};
    use dist_kernels::distributions::univariate::gamma::related::ChiSquaredRand;

    #[test]
    fn chi2_pdf_df_1() {
        let d = ChiSquaredRand::new(1.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            1.200038948430136,
            0.4393912894677224,
            0.24197072451914334,
            0.10377687435514868,
            0.014644982561926487,
            0.0008500366602520342,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_df_2() {
        let d = ChiSquaredRand::new(2.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            0.475614712250357,
            0.38940039153570244,
            0.3032653298563167,
            0.18393972058572117,
            0.0410424993119494,
            0.0033689734995427335,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_df_3() {
        let d = ChiSquaredRand::new(3.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            0.1200038948430136,
            0.2196956447338612,
            0.24197072451914334,
            0.20755374871029736,
            0.07322491280963243,
            0.008500366602520341,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_df_5() {
        let d = ChiSquaredRand::new(5.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            0.0040001298281004535,
            0.03661594078897687,
            0.08065690817304778,
            0.1383691658068649,
            0.1220415213493874,
            0.02833455534173447,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_df_10() {
        let d = ChiSquaredRand::new(10.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            1.2385799798186382e-07,
            6.337896997651407e-05,
            0.0007897534631674915,
            0.007664155024405048,
            0.06680094289054264,
            0.08773368488392536,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_large_df() {
        let d = ChiSquaredRand::new(100.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            1.3889308509413505e-127,
            2.0200026568141475e-93,
            8.856214112161875e-79,
            3.0239224849774398e-64,
            2.129067136411169e-45,
            9.838365191393894e-32,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_near_zero() {
        let d = ChiSquaredRand::new(2.0).unwrap();
        let x = [0.0, 1e-10, 1e-05, 0.01, 0.1];
        let expect = [0.5, 0.499999999975, 0.49999750000625, 0.49750623959634116, 0.475614712250357];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_extreme_values() {
        let d = ChiSquaredRand::new(5.0).unwrap();
        let x = [0.01, 1.0, 10.0, 50.0, 100.0];
        let expect = [
            0.0001323175158256706,
            0.08065690817304778,
            0.02833455534173447,
            6.529527721257223e-10,
            2.56486620890214e-20,
        ];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_pdf_negative_values() {
        let d = ChiSquaredRand::new(3.0).unwrap();
        let x = [-10.0, -1.0, -0.1, 0.0, 1.0];
        let expect = [0.0, 0.0, 0.0, 0.0, 0.24197072451914334];
        assert_slice_close(&pdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_df_1() {
        let d = ChiSquaredRand::new(1.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            0.24817036595415073,
            0.5204998778130465,
            0.6826894921370859,
            0.8427007929497149,
            0.9746526813225317,
            0.9984345977419975,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_df_2() {
        let d = ChiSquaredRand::new(2.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            0.04877057549928599,
            0.22119921692859512,
            0.3934693402873666,
            0.6321205588285577,
            0.9179150013761012,
            0.9932620530009145,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_df_3() {
        let d = ChiSquaredRand::new(3.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            0.008162576268123523,
            0.08110858834532414,
            0.1987480430987992,
            0.4275932955291202,
            0.8282028557032669,
            0.9814338645369568,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_df_5() {
        let d = ChiSquaredRand::new(5.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            0.00016231661192261503,
            0.007876706767370407,
            0.03743422675270363,
            0.15085496391539036,
            0.5841198130044921,
            0.9247647538534878,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_df_10() {
        let d = ChiSquaredRand::new(10.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            2.4979513360065104e-09,
            6.611710561034247e-06,
            0.00017211562995584078,
            0.0036598468273437122,
            0.10882198108584876,
            0.5595067149347875,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_large_df() {
        let d = ChiSquaredRand::new(100.0).unwrap();
        let x = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];
        let expect = [
            2.780587716828697e-130,
            2.0299524618646413e-95,
            1.7887765104351365e-80,
            1.2337508979097351e-65,
            2.238698928228896e-46,
            2.1810592140784887e-32,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_near_zero() {
        let d = ChiSquaredRand::new(2.0).unwrap();
        let x = [0.0, 1e-10, 1e-05, 0.01, 0.1];
        let expect = [
            0.0,
            4.999999999875e-11,
            4.999987500020834e-06,
            0.004987520807317687,
            0.04877057549928599,
        ];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_cdf_negative() {
        let d = ChiSquaredRand::new(3.0).unwrap();
        let x = [-10.0, -1.0, -0.1, 0.0, 1.0];
        let expect = [0.0, 0.0, 0.0, 0.0, 0.1987480430987992];
        assert_slice_close(&cdf_vec(&d, &x), &expect, 1e-12);
    }

    #[test]
    fn chi2_quantile_df_1() {
        let d = ChiSquaredRand::new(1.0).unwrap();
        let q = [0.001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999];
        let expect = [
            1.57079714926249e-06,
            0.00015708785790970197,
            0.015790774093431225,
            0.10153104426762155,
            0.4549364231195728,
            1.323303696931466,
            2.705543454095415,
            6.634896601021214,
            10.827566170662731,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn chi2_quantile_df_2() {
        let d = ChiSquaredRand::new(2.0).unwrap();
        let q = [0.001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999];
        let expect = [
            0.002001000667167067,
            0.020100671707002884,
            0.21072103131565262,
            0.5753641449035618,
            1.3862943611198906,
            2.772588722239781,
            4.605170185988092,
            9.210340371976182,
            13.815510557964272,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn chi2_quantile_df_3() {
        let d = ChiSquaredRand::new(3.0).unwrap();
        let q = [0.001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999];
        let expect = [
            0.024297585815692732,
            0.11483180189911704,
            0.5843743741551832,
            1.212532903045669,
            2.365973884375338,
            4.108344935632317,
            6.2513886311703235,
            11.34486673014437,
            16.26623619623813,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn chi2_quantile_df_5() {
        let d = ChiSquaredRand::new(5.0).unwrap();
        let q = [0.001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999];
        let expect = [
            0.21021260262921918,
            0.5542980767282771,
            1.6103079869623231,
            2.674602809432163,
            4.351460191095527,
            6.62567976382925,
            9.23635689978112,
            15.086272469388987,
            20.515005652432876,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn chi2_quantile_df_10() {
        let d = ChiSquaredRand::new(10.0).unwrap();
        let q = [0.001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999];
        let expect = [
            1.4787434638356651,
            2.558212160187206,
            4.865182051925329,
            6.737200771954642,
            9.341817765591967,
            12.548861396889377,
            15.987179172105261,
            23.209251158954356,
            29.588298445074418,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn chi2_quantile_large_df() {
        let d = ChiSquaredRand::new(100.0).unwrap();
        let q = [0.001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.999];
        let expect = [
            61.91793920693662,
            70.0648949253998,
            82.35813581235715,
            90.13321974633932,
            99.33412923598846,
            109.1412410700806,
            118.4980038110621,
            135.80672317102676,
            149.44925277903872,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn chi2_quantile_extreme() {
        let d = ChiSquaredRand::new(3.0).unwrap();
        let q = [1e-10, 1e-05, 0.5, 0.99999, 0.9999999999];
        let expect = [
            5.20939762143448e-07,
            0.001122582580001848,
            2.365973884375338,
            25.90174974567149,
            49.542155758766434,
        ];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }

    #[test]
    fn chi2_quantile_boundaries() {
        let d = ChiSquaredRand::new(5.0).unwrap();
        let q = [0.0, 1e-300, 0.5, 1.0, 1.0];
        let expect = [0.0, 3.233407780583128e-120, 4.351460191095527, f64::INFINITY, f64::INFINITY];
        assert_slice_close(&quantile_vec(&d, &q), &expect, 1e-10);
    }
}
