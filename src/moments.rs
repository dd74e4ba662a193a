//! Moments of a weighted univariate sample.
//!
//! A sample is described by its distinct values `x` and their frequencies
//! `n`, paired by position. Every statistic is an exact closed-form weighted
//! sum divided by the total weight; the sums are accumulated with
//! Kahan-Babuska-Neumaier compensation.

use num_traits::Float;

use crate::{
    StatsResult,
    helper::{checked_div, ensure_len, kbn_sum},
};

/// Returns the raw (initial) moment of order `k`: `Σ xᵢᵏ·nᵢ / Σ nᵢ`
///
/// # Arguments
///
/// * `x` - Distinct sample values
/// * `n` - Frequency of each value
/// * `k` - Order of the moment
///
/// # Returns
///
/// * `StatsResult<T>` - The moment, `DivisionByZero` if the total weight is zero,
///   or `LengthMismatch` if `x` and `n` differ in length
///
/// # Examples
///
/// ```
/// use grouped_stats::initial_moment;
/// use assert_approx_eq::assert_approx_eq;
///
/// let x: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let n: [f64; 5] = [1.0, 2.0, 3.0, 2.0, 1.0];
/// assert_approx_eq!(initial_moment(&x, &n, 2).unwrap(), 93.0 / 9.0, 1e-12);
/// ```
pub fn initial_moment<T: Float + Default>(x: &[T], n: &[T], k: i32) -> StatsResult<T> {
    ensure_len(x.len(), n.len())?;
    let total = kbn_sum(n.iter().copied());
    let sum = kbn_sum(x.iter().zip(n).map(|(&xi, &ni)| xi.powi(k) * ni));
    checked_div(sum, total, "total weight")
}

/// Returns the weighted mean, the initial moment of order 1
///
/// # Examples
///
/// ```
/// use grouped_stats::expected_value;
///
/// assert_eq!(expected_value(&[2.0, 4.0], &[3.0, 1.0]).unwrap(), 2.5);
/// ```
pub fn expected_value<T: Float + Default>(x: &[T], n: &[T]) -> StatsResult<T> {
    initial_moment(x, n, 1)
}

/// Returns the central moment of order `k`: `Σ (xᵢ − mean)ᵏ·nᵢ / Σ nᵢ`
///
/// # Arguments
///
/// * `x` - Distinct sample values
/// * `n` - Frequency of each value
/// * `k` - Order of the moment
///
/// # Returns
///
/// * `StatsResult<T>` - The moment, `DivisionByZero` if the total weight is zero,
///   or `LengthMismatch` if `x` and `n` differ in length
pub fn central_moment<T: Float + Default>(x: &[T], n: &[T], k: i32) -> StatsResult<T> {
    let mean = expected_value(x, n)?;
    let total = kbn_sum(n.iter().copied());
    let sum = kbn_sum(x.iter().zip(n).map(|(&xi, &ni)| (xi - mean).powi(k) * ni));
    checked_div(sum, total, "total weight")
}

/// Returns the weighted (population) variance, the central moment of order 2
///
/// # Examples
///
/// ```
/// use grouped_stats::variance;
/// use assert_approx_eq::assert_approx_eq;
///
/// let x: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let n: [f64; 5] = [1.0, 2.0, 3.0, 2.0, 1.0];
/// assert_approx_eq!(variance(&x, &n).unwrap(), 4.0 / 3.0, 1e-12);
/// ```
pub fn variance<T: Float + Default>(x: &[T], n: &[T]) -> StatsResult<T> {
    central_moment(x, n, 2)
}

/// Returns the weighted standard deviation, the square root of the variance
pub fn standard_deviation<T: Float + Default>(x: &[T], n: &[T]) -> StatsResult<T> {
    variance(x, n).map(T::sqrt)
}

/// Returns the standardized skewness `μ₃ / D^1.5`
///
/// # Returns
///
/// * `StatsResult<T>` - The skewness, or `DivisionByZero` when the variance is zero
///
/// # Examples
///
/// ```
/// use grouped_stats::asymmetry;
/// use assert_approx_eq::assert_approx_eq;
///
/// // Bernoulli sample with p = 0.25
/// assert_approx_eq!(asymmetry(&[0.0_f64, 1.0], &[3.0, 1.0]).unwrap(), 1.154700538, 1e-9);
/// assert!(asymmetry(&[5.0, 5.0], &[1.0, 2.0]).is_err());
/// ```
pub fn asymmetry<T: Float + Default>(x: &[T], n: &[T]) -> StatsResult<T> {
    let m3 = central_moment(x, n, 3)?;
    let var = variance(x, n)?;
    checked_div(m3, var * var.sqrt(), "variance")
}

/// Returns the excess kurtosis `μ₄ / D² − 3`
///
/// The normal distribution has an excess of zero.
///
/// # Returns
///
/// * `StatsResult<T>` - The excess kurtosis, or `DivisionByZero` when the variance is zero
pub fn excess<T: Float + Default>(x: &[T], n: &[T]) -> StatsResult<T> {
    let m4 = central_moment(x, n, 4)?;
    let var = variance(x, n)?;
    let _3 = T::one() + T::one() + T::one();
    Ok(checked_div(m4, var * var, "variance")? - _3)
}
