//! Statistics over raw paired observations.
//!
//! Each function takes two sequences of equal length where `(x[k], y[k])` is
//! one observation. Nothing is aggregated: every pair counts once.

use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

use crate::{
    LinearFit, StatsResult,
    helper::{checked_div, ensure_len, from_usize, kbn_sum},
};

/// Fits `y = k*x + b` through the observed points by ordinary least squares
///
/// # Arguments
///
/// * `x` - Observed X values
/// * `y` - Observed Y values, paired with `x` by position
///
/// # Returns
///
/// * `StatsResult<LinearFit<T>>` - The line, `DivisionByZero` if all `x` are equal or there are
///   no observations, or `LengthMismatch` if `x` and `y` differ in length
///
/// # Examples
///
/// ```
/// use grouped_stats::linear_func_by_dots;
/// use assert_approx_eq::assert_approx_eq;
///
/// let line = linear_func_by_dots(&[1.0_f64, 2.0, 3.0, 4.0], &[2.0, 4.0, 5.0, 4.0]).unwrap();
/// assert_approx_eq!(line.k, 0.7, 1e-12);
/// assert_approx_eq!(line.b, 2.0, 1e-12);
/// ```
pub fn linear_func_by_dots<T: Float + Default>(x: &[T], y: &[T]) -> StatsResult<LinearFit<T>> {
    ensure_len(x.len(), y.len())?;

    let xs = kbn_sum(x.iter().copied());
    let ys = kbn_sum(y.iter().copied());
    let qs = kbn_sum(x.iter().map(|&xi| xi * xi));
    let xys = kbn_sum(x.iter().zip(y).map(|(&xi, &yi)| xi * yi));
    let n = from_usize::<T>(x.len())?;

    let den = n * qs - xs * xs;
    Ok(LinearFit {
        k: checked_div(n * xys - xs * ys, den, "variance of x")?,
        b: checked_div(qs * ys - xs * xys, den, "variance of x")?,
    })
}

/// Returns Spearman's rank correlation `ρ = 1 − 6·Σ(xᵢ − yᵢ)² / (n³ − n)`
///
/// Both sequences must already be ranks; no ranking or tie correction is
/// performed here.
///
/// # Returns
///
/// * `StatsResult<T>` - The coefficient, or `DivisionByZero` when there are fewer than two observations
///
/// # Examples
///
/// ```
/// use grouped_stats::spearman;
///
/// assert_eq!(spearman(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap(), 1.0);
/// assert_eq!(spearman(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap(), -1.0);
/// ```
pub fn spearman<T: Float + Default>(x: &[T], y: &[T]) -> StatsResult<T> {
    ensure_len(x.len(), y.len())?;

    let n = from_usize::<T>(x.len())?;
    let d2 = kbn_sum(x.iter().zip(y).map(|(&xi, &yi)| {
        let d = xi - yi;
        d * d
    }));
    let _6 = from_usize::<T>(6)?;

    Ok(T::one() - checked_div(_6 * d2, n * n * n - n, "n^3 - n")?)
}

/// Returns Kendall's rank correlation in the form `τ = 4R / (n(n − 1)) − 1`
///
/// The observations are ordered by ascending `x`, ties on `x` by ascending
/// `y`. `R` then counts the index pairs `i <= j` of that order with
/// `y[i] < y[j]`. Tied `y` values never count, so unlike the textbook
/// coefficient ties pull τ towards −1.
///
/// # Returns
///
/// * `StatsResult<T>` - The coefficient, or `DivisionByZero` when there are fewer than two observations
///
/// # Examples
///
/// ```
/// use grouped_stats::kendall;
/// use assert_approx_eq::assert_approx_eq;
///
/// assert_eq!(kendall(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap(), 1.0);
/// assert_approx_eq!(kendall(&[1.0_f64, 2.0, 3.0, 4.0], &[1.0, 3.0, 2.0, 4.0]).unwrap(), 2.0 / 3.0, 1e-12);
/// ```
pub fn kendall<T>(x: &[T], y: &[T]) -> StatsResult<T>
where
    T: Float + Default + PrimitiveFloat,
{
    ensure_len(x.len(), y.len())?;

    let mut pairs: Vec<(T, T)> = x.iter().copied().zip(y.iter().copied()).collect();
    pairs.sort_by_key(|&(xi, yi)| (OrderedFloat(xi), OrderedFloat(yi)));

    let r: usize = pairs
        .iter()
        .enumerate()
        .map(|(i, &(_, yi))| pairs[i..].iter().filter(|&&(_, yj)| yi < yj).count())
        .sum();

    let n = from_usize::<T>(pairs.len())?;
    let _4 = from_usize::<T>(4)?;
    let tau = checked_div(_4 * from_usize(r)?, n * (n - T::one()), "n(n - 1)")?;
    Ok(tau - T::one())
}
