//! Cross-module properties of the statistics toolkit
//!
//! The unit tests in each module pin individual formulas; these tests check
//! that the moment, frequency-table and paired-sample families agree with
//! each other on equivalent data.

use assert_approx_eq::assert_approx_eq;
use grouped_stats::{
    FrequencyMatrix, StatsError, asymmetry, central_moment, conditional_means, correlation_ratio,
    excess, expected_value, initial_moment, kendall, linear_func_by_dots, linear_func_by_matrix,
    parabolic_func_by_matrix, spearman, standard_deviation, variance,
};

/// Distinct values in order of first appearance
fn levels(values: &[f64]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    for &v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn tabulate(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>, FrequencyMatrix<f64>) {
    let x = levels(xs);
    let y = levels(ys);
    let m = FrequencyMatrix::from_pairs(&x, &y, xs, ys).unwrap();
    (x, y, m)
}

mod moments {
    use super::*;

    #[test]
    fn first_initial_moment_equals_expected_value() {
        let samples: [(&[f64], &[f64]); 3] = [
            (&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]),
            (&[-0.7, 3.3, 10.1, 2.2], &[5.0, 0.0, 2.0, 9.0]),
            (&[1e-3, 1e3], &[1e3, 1e-3]),
        ];
        for (x, n) in samples {
            assert_eq!(initial_moment(x, n, 1), expected_value(x, n));
        }
    }

    #[test]
    fn variance_matches_raw_moments() {
        let x: [f64; 4] = [2.0, 3.0, 5.0, 8.0];
        let n: [f64; 4] = [4.0, 1.0, 3.0, 2.0];
        let mean = expected_value(&x, &n).unwrap();
        let raw2 = initial_moment(&x, &n, 2).unwrap();
        assert_approx_eq!(variance(&x, &n).unwrap(), raw2 - mean * mean, 1e-12);
        assert_approx_eq!(
            standard_deviation(&x, &n).unwrap().powi(2),
            variance(&x, &n).unwrap(),
            1e-12
        );
    }

    #[test]
    fn frequencies_act_as_repetitions() {
        let x: [f64; 3] = [1.0, 4.0, 6.0];
        let n: [f64; 3] = [2.0, 1.0, 3.0];
        let expanded: [f64; 6] = [1.0, 1.0, 4.0, 6.0, 6.0, 6.0];
        let ones: [f64; 6] = [1.0; 6];
        for k in 1..=4 {
            assert_approx_eq!(
                central_moment(&x, &n, k).unwrap(),
                central_moment(&expanded, &ones, k).unwrap(),
                1e-9
            );
        }
        assert_approx_eq!(
            asymmetry(&x, &n).unwrap(),
            asymmetry(&expanded, &ones).unwrap(),
            1e-12
        );
        assert_approx_eq!(
            excess(&x, &n).unwrap(),
            excess(&expanded, &ones).unwrap(),
            1e-12
        );
    }

    #[test]
    fn constant_sample_has_no_shape() {
        let x = [-2.0; 4];
        let n = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(expected_value(&x, &n), Ok(-2.0));
        assert_eq!(variance(&x, &n), Ok(0.0));
        assert!(matches!(
            asymmetry(&x, &n),
            Err(StatsError::DivisionByZero(_))
        ));
        assert!(matches!(excess(&x, &n), Err(StatsError::DivisionByZero(_))));
    }
}

mod regression {
    use super::*;

    #[test]
    fn linear_fit_agrees_between_dots_and_table() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 5.0, 4.0];
        let (x, y, m) = tabulate(&xs, &ys);

        let dots = linear_func_by_dots(&xs, &ys).unwrap();
        let table = linear_func_by_matrix(&x, &y, &m).unwrap();

        assert_approx_eq!(dots.k, table.k, 1e-12);
        assert_approx_eq!(dots.b, table.b, 1e-12);
        assert_approx_eq!(table.k, 0.7, 1e-12);
        assert_approx_eq!(table.b, 2.0, 1e-12);
    }

    #[test]
    fn linear_fit_agrees_with_repeated_observations() {
        let xs = [0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 3.0];
        let ys = [1.0, 2.0, 2.0, 2.0, 3.0, 5.0, 5.0, 6.0];
        let (x, y, m) = tabulate(&xs, &ys);

        let dots = linear_func_by_dots(&xs, &ys).unwrap();
        let table = linear_func_by_matrix(&x, &y, &m).unwrap();

        assert_approx_eq!(dots.k, table.k, 1e-12);
        assert_approx_eq!(dots.b, table.b, 1e-12);
    }

    #[test]
    fn parabola_recovers_generating_polynomial() {
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x * x - 3.0 * x + 1.0).collect();
        let (x, y, m) = tabulate(&xs, &ys);

        let fit = parabolic_func_by_matrix(&x, &y, &m).unwrap();
        assert_approx_eq!(fit.a, 2.0, 1e-9);
        assert_approx_eq!(fit.b, -3.0, 1e-9);
        assert_approx_eq!(fit.c, 1.0, 1e-9);
        for &xi in &xs {
            assert_approx_eq!(fit.predict(xi), 2.0 * xi * xi - 3.0 * xi + 1.0, 1e-8);
        }
    }

    #[test]
    fn parabola_reduces_to_line_for_linear_means() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [1.0, 3.0, 5.0, 7.0, 9.0];
        let (x, y, m) = tabulate(&xs, &ys);

        let fit = parabolic_func_by_matrix(&x, &y, &m).unwrap();
        let line = linear_func_by_matrix(&x, &y, &m).unwrap();
        assert_approx_eq!(fit.a, 0.0, 1e-9);
        assert_approx_eq!(fit.b, line.k, 1e-9);
        assert_approx_eq!(fit.c, line.b, 1e-9);
    }

    #[test]
    fn parabola_singularity_does_not_depend_on_scale() {
        for scale in [1e-3, 1e3] {
            let xs: Vec<f64> = [1.0, 2.0, 2.0, 3.0].iter().map(|i| i * scale).collect();
            let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x * x - 3.0 * x + 1.0).collect();
            let (x, y, m) = tabulate(&xs, &ys);
            let fit = parabolic_func_by_matrix(&x, &y, &m).unwrap();
            assert_approx_eq!(fit.a, 2.0, 1e-5);
            assert_approx_eq!(fit.b, -3.0, 1e-5);
            assert_approx_eq!(fit.c, 1.0, 1e-5);

            let xs = [scale, scale, 4.0 * scale];
            let ys = [1.0, 2.0, 3.0];
            let (x, y, m) = tabulate(&xs, &ys);
            assert_eq!(
                parabolic_func_by_matrix(&x, &y, &m),
                Err(StatsError::SingularMatrix)
            );
        }
    }

    #[test]
    fn parabola_with_two_levels_is_singular() {
        let xs = [1.0, 1.0, 5.0, 5.0, 5.0];
        let ys = [0.0, 1.0, 2.0, 3.0, 4.0];
        let (x, y, m) = tabulate(&xs, &ys);
        assert_eq!(
            parabolic_func_by_matrix(&x, &y, &m),
            Err(StatsError::SingularMatrix)
        );
    }
}

mod correlation {
    use super::*;

    #[test]
    fn correlation_ratio_is_one_for_functional_dependence() {
        let xs = [1.0, 1.0, 2.0, 3.0, 3.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|&x| (x - 2.5) * (x - 2.5)).collect();
        let (x, y, m) = tabulate(&xs, &ys);
        assert_approx_eq!(correlation_ratio(&x, &y, &m).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn correlation_ratio_is_bounded() {
        let xs = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
        let ys = [1.0, 4.0, 2.0, 2.0, 3.0, 5.0, 1.0];
        let (x, y, m) = tabulate(&xs, &ys);
        let eta = correlation_ratio(&x, &y, &m).unwrap();
        assert!((0.0..=1.0 + 1e-12).contains(&eta));
    }

    #[test]
    fn correlation_ratio_matches_moment_decomposition() {
        let xs = [0.0, 0.0, 1.0, 1.0, 1.0, 2.0];
        let ys = [1.0, 3.0, 2.0, 2.0, 5.0, 4.0];
        let (x, y, m) = tabulate(&xs, &ys);

        let general = standard_deviation(&y, &m.row_sums()).unwrap();
        let between = standard_deviation(&conditional_means(&y, &m).unwrap(), &m.col_sums())
            .unwrap();

        assert_approx_eq!(
            correlation_ratio(&x, &y, &m).unwrap(),
            between / general,
            1e-12
        );
    }

    #[test]
    fn rank_correlations_at_the_extremes() {
        let ranks = [1.0, 2.0, 3.0, 4.0, 5.0];
        let reversed = [5.0, 4.0, 3.0, 2.0, 1.0];

        assert_eq!(spearman(&ranks, &ranks), Ok(1.0));
        assert_eq!(spearman(&ranks, &reversed), Ok(-1.0));
        assert_eq!(kendall(&ranks, &ranks), Ok(1.0));
        assert_eq!(kendall(&ranks, &reversed), Ok(-1.0));
    }

    #[test]
    fn kendall_ignores_input_order() {
        let x = [4.0, 1.0, 3.0, 2.0, 5.0];
        let y = [3.0, 2.0, 5.0, 1.0, 4.0];
        let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
        pairs.reverse();
        let (rx, ry): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

        assert_eq!(kendall(&x, &y), kendall(&rx, &ry));
    }

    #[test]
    fn rank_correlations_are_symmetric_without_ties() {
        let x: [f64; 6] = [3.0, 1.0, 4.0, 2.0, 5.0, 6.0];
        let y: [f64; 6] = [2.0, 1.0, 6.0, 3.0, 4.0, 5.0];
        assert_eq!(spearman(&x, &y), spearman(&y, &x));
        assert_approx_eq!(kendall(&x, &y).unwrap(), kendall(&y, &x).unwrap(), 1e-12);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let xs = [0.5, 1.5, 1.5, 2.5, 3.5, 3.5, 3.5];
    let ys = [1.0, 2.0, 4.0, 4.0, 3.0, 6.0, 6.0];
    let (x, y, m) = tabulate(&xs, &ys);
    let n = m.col_sums();

    assert_eq!(variance(&x, &n), variance(&x, &n));
    assert_eq!(excess(&x, &n), excess(&x, &n));
    assert_eq!(correlation_ratio(&x, &y, &m), correlation_ratio(&x, &y, &m));
    assert_eq!(
        parabolic_func_by_matrix(&x, &y, &m),
        parabolic_func_by_matrix(&x, &y, &m)
    );
    assert_eq!(linear_func_by_dots(&xs, &ys), linear_func_by_dots(&xs, &ys));
    assert_eq!(spearman(&xs, &ys), spearman(&xs, &ys));
    assert_eq!(kendall(&xs, &ys), kendall(&xs, &ys));
}
