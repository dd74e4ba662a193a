use num_traits::Float;

use crate::{Kbn, StatsError, StatsResult};

/// Returns the compensated sum of the values
///
/// # Arguments
///
/// * `values` - The values to add up
///
/// # Returns
///
/// * `T` - The Kahan-Babuska-Neumaier sum
#[inline]
pub fn kbn_sum<T, I>(values: I) -> T
where
    T: Float + Default,
    I: IntoIterator<Item = T>,
{
    let mut acc = Kbn::<T>::default();
    for v in values {
        acc += v;
    }
    acc.total()
}

/// Divides `num` by `den`, refusing an exactly zero denominator
///
/// # Arguments
///
/// * `num` - The numerator
/// * `den` - The denominator
/// * `what` - Name of the denominator, carried by the error
///
/// # Returns
///
/// * `StatsResult<T>` - The quotient, or `DivisionByZero` naming `what`
#[inline]
pub fn checked_div<T: Float>(num: T, den: T, what: &'static str) -> StatsResult<T> {
    if den.is_zero() {
        Err(StatsError::DivisionByZero(what))
    } else {
        Ok(num / den)
    }
}

/// Converts a count into the float type
#[inline]
pub fn from_usize<T: Float>(n: usize) -> StatsResult<T> {
    T::from(n).ok_or(StatsError::NumericConversion)
}

/// Fails with `LengthMismatch` unless `found == expected`
#[inline]
pub fn ensure_len(expected: usize, found: usize) -> StatsResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(StatsError::LengthMismatch { expected, found })
    }
}
