//! Bivariate statistics over a frequency table.
//!
//! Every function takes the distinct X values `x` (one per column), the
//! distinct Y values `y` (one per row) and the [`FrequencyMatrix`] of counts
//! between them.

use nalgebra::{Matrix3, RealField, Vector3};
use num_traits::Float;

use alloc::vec::Vec;

use crate::{
    FrequencyMatrix, LinearFit, ParabolicFit, StatsError, StatsResult,
    helper::{checked_div, ensure_len, kbn_sum},
};

fn ensure_shape<T>(x: &[T], y: &[T], matrix: &FrequencyMatrix<T>) -> StatsResult<()>
where
    T: Float + Default,
{
    ensure_len(matrix.cols(), x.len())?;
    ensure_len(matrix.rows(), y.len())
}

fn conditional_means_with<T>(y: &[T], matrix: &FrequencyMatrix<T>, nx: &[T]) -> StatsResult<Vec<T>>
where
    T: Float + Default,
{
    nx.iter()
        .enumerate()
        .map(|(j, &nxj)| {
            let sum = kbn_sum(matrix.iter_rows().zip(y).map(|(r, &yi)| yi * r[j]));
            checked_div(sum, nxj, "column frequency")
        })
        .collect()
}

/// Number of distinct X values whose column holds observations
fn observed_levels<T: Float>(x: &[T], nx: &[T]) -> usize {
    let mut seen: Vec<T> = Vec::with_capacity(x.len());
    for (&xj, &nxj) in x.iter().zip(nx) {
        if nxj > T::zero() && !seen.contains(&xj) {
            seen.push(xj);
        }
    }
    seen.len()
}

/// Returns the conditional mean of Y within each X column
///
/// # Arguments
///
/// * `y` - Distinct Y values, one per row
/// * `matrix` - Frequency table
///
/// # Returns
///
/// * `StatsResult<Vec<T>>` - One mean per column, or `DivisionByZero` if a column holds no observations
///
/// # Examples
///
/// ```
/// use grouped_stats::{FrequencyMatrix, conditional_means};
///
/// let m = FrequencyMatrix::from_rows(&[[1.0, 0.0], [1.0, 2.0]]).unwrap();
/// assert_eq!(conditional_means(&[10.0, 20.0], &m).unwrap(), vec![15.0, 20.0]);
/// ```
pub fn conditional_means<T>(y: &[T], matrix: &FrequencyMatrix<T>) -> StatsResult<Vec<T>>
where
    T: Float + Default,
{
    ensure_len(matrix.rows(), y.len())?;
    conditional_means_with(y, matrix, &matrix.col_sums())
}

/// Returns the correlation ratio η of Y on X
///
/// The ratio of the between-groups standard deviation (spread of the
/// conditional column means around the overall mean of Y) to the general
/// standard deviation of Y. It is 1 when Y is fully determined by the X
/// group and 0 when every group has the same mean. `x` only fixes the
/// expected column count.
///
/// # Returns
///
/// * `StatsResult<T>` - The ratio, or `DivisionByZero` if the table is empty, a column is empty,
///   or Y does not vary
///
/// # Examples
///
/// ```
/// use grouped_stats::{FrequencyMatrix, correlation_ratio};
/// use assert_approx_eq::assert_approx_eq;
///
/// let m = FrequencyMatrix::from_rows(&[[2.0, 0.0], [1.0, 1.0], [0.0, 2.0]]).unwrap();
/// let eta = correlation_ratio(&[1.0, 2.0], &[1.0, 2.0, 3.0], &m).unwrap();
/// assert_approx_eq!(eta, (2.0f64 / 3.0).sqrt(), 1e-12);
/// ```
pub fn correlation_ratio<T>(x: &[T], y: &[T], matrix: &FrequencyMatrix<T>) -> StatsResult<T>
where
    T: Float + Default,
{
    ensure_shape(x, y, matrix)?;

    let total = matrix.total();
    let ny = matrix.row_sums();
    let y_avg = checked_div(
        kbn_sum(y.iter().zip(&ny).map(|(&yi, &nyi)| yi * nyi)),
        total,
        "total frequency",
    )?;

    let general = kbn_sum(y.iter().zip(&ny).map(|(&yi, &nyi)| {
        let d = yi - y_avg;
        nyi * d * d
    })) / total;

    let nx = matrix.col_sums();
    let yx = conditional_means_with(y, matrix, &nx)?;
    let groups = kbn_sum(nx.iter().zip(&yx).map(|(&nxj, &yxj)| {
        let d = yxj - y_avg;
        nxj * d * d
    })) / total;

    checked_div(
        groups.sqrt(),
        general.sqrt(),
        "general standard deviation",
    )
}

/// Fits `y = a*x^2 + b*x + c` to the conditional column means by least squares
///
/// The normal equations
///
/// ```text
/// | f4 f3 f2 |   | a |   | g2 |
/// | f3 f2 f1 | * | b | = | g1 |
/// | f2 f1 N  |   | c |   | g0 |
/// ```
///
/// with `f(e) = Σ nx[j]·x[j]^e` and `g(e) = Σ nx[j]·yx[j]·x[j]^e` are solved
/// with an LU decomposition with partial pivoting. The system is singular
/// exactly when fewer than three distinct X values carry observations; that
/// is checked on the data before solving, so the decision does not depend on
/// the scale of X.
///
/// # Returns
///
/// * `StatsResult<ParabolicFit<T>>` - The coefficients, `DivisionByZero` if a column is empty,
///   or `SingularMatrix` if the normal equations have no unique solution
///
/// # Examples
///
/// ```
/// use grouped_stats::{FrequencyMatrix, parabolic_func_by_matrix};
/// use assert_approx_eq::assert_approx_eq;
///
/// // one observation of y = 2x^2 - 3x + 1 at each x
/// let x: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let y: [f64; 4] = [1.0, 0.0, 3.0, 10.0];
/// let m = FrequencyMatrix::from_pairs(&x, &y, &x, &y).unwrap();
///
/// let fit = parabolic_func_by_matrix(&x, &y, &m).unwrap();
/// assert_approx_eq!(fit.a, 2.0, 1e-9);
/// assert_approx_eq!(fit.b, -3.0, 1e-9);
/// assert_approx_eq!(fit.c, 1.0, 1e-9);
/// ```
pub fn parabolic_func_by_matrix<T>(
    x: &[T],
    y: &[T],
    matrix: &FrequencyMatrix<T>,
) -> StatsResult<ParabolicFit<T>>
where
    T: Float + Default + RealField,
{
    ensure_shape(x, y, matrix)?;

    let total = matrix.total();
    let nx = matrix.col_sums();
    let yx = conditional_means_with(y, matrix, &nx)?;

    if observed_levels(x, &nx) < 3 {
        return Err(StatsError::SingularMatrix);
    }

    let f = |e: i32| kbn_sum(nx.iter().zip(x).map(|(&nxj, &xj)| nxj * Float::powi(xj, e)));
    let g = |e: i32| {
        kbn_sum(
            nx.iter()
                .zip(&yx)
                .zip(x)
                .map(|((&nxj, &yxj), &xj)| nxj * yxj * Float::powi(xj, e)),
        )
    };

    let (f1, f2, f3, f4) = (f(1), f(2), f(3), f(4));
    #[rustfmt::skip]
    let a = Matrix3::new(
        f4, f3, f2,
        f3, f2, f1,
        f2, f1, total,
    );
    let rhs = Vector3::new(g(2), g(1), g(0));

    let lu = a.lu();
    let solution = lu.solve(&rhs).ok_or(StatsError::SingularMatrix)?;
    Ok(ParabolicFit {
        a: solution[0],
        b: solution[1],
        c: solution[2],
    })
}

/// Fits `y = k*x + b` to the grouped observations by least squares
///
/// Uses the closed-form estimates
/// `k = (N·Σxy − Σx·Σy) / (N·Σx² − (Σx)²)` and
/// `b = (Σx²·Σy − Σx·Σxy) / (N·Σx² − (Σx)²)`, each sum weighted by the
/// frequencies of the table.
///
/// # Returns
///
/// * `StatsResult<LinearFit<T>>` - The line, or `DivisionByZero` if the weighted variance of X is zero
///
/// # Examples
///
/// ```
/// use grouped_stats::{FrequencyMatrix, linear_func_by_matrix};
/// use assert_approx_eq::assert_approx_eq;
///
/// let m = FrequencyMatrix::from_rows(&[[2.0, 1.0, 0.0], [0.0, 1.0, 2.0]]).unwrap();
/// let line = linear_func_by_matrix(&[1.0_f64, 2.0, 3.0], &[1.0, 2.0], &m).unwrap();
/// assert_approx_eq!(line.k, 0.5, 1e-12);
/// assert_approx_eq!(line.b, 0.5, 1e-12);
/// ```
pub fn linear_func_by_matrix<T>(
    x: &[T],
    y: &[T],
    matrix: &FrequencyMatrix<T>,
) -> StatsResult<LinearFit<T>>
where
    T: Float + Default,
{
    ensure_shape(x, y, matrix)?;

    let nx = matrix.col_sums();
    let ny = matrix.row_sums();

    let xs = kbn_sum(x.iter().zip(&nx).map(|(&xj, &nxj)| xj * nxj));
    let qs = kbn_sum(x.iter().zip(&nx).map(|(&xj, &nxj)| xj * xj * nxj));
    let ys = kbn_sum(y.iter().zip(&ny).map(|(&yi, &nyi)| yi * nyi));
    let xys = kbn_sum(
        matrix
            .iter_rows()
            .zip(y)
            .flat_map(|(r, &yi)| r.iter().zip(x).map(move |(&nij, &xj)| xj * yi * nij)),
    );
    let n = matrix.total();

    let den = n * qs - xs * xs;
    Ok(LinearFit {
        k: checked_div(n * xys - xs * ys, den, "weighted variance of x")?,
        b: checked_div(qs * ys - xs * xys, den, "weighted variance of x")?,
    })
}
