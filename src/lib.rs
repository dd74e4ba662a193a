#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{StatsError, StatsResult};

mod frequency_matrix;
pub use frequency_matrix::FrequencyMatrix;

mod regression;
pub use regression::{LinearFit, ParabolicFit};

mod moments;
pub use moments::{
    asymmetry, central_moment, excess, expected_value, initial_moment, standard_deviation,
    variance,
};

mod grouped_statistics;
pub use grouped_statistics::{
    conditional_means, correlation_ratio, linear_func_by_matrix, parabolic_func_by_matrix,
};

mod paired_statistics;
pub use paired_statistics::{kendall, linear_func_by_dots, spearman};
