use thiserror::Error;

/// Result alias used by every fallible computation in this crate
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors raised by the statistics functions
///
/// Apart from the shape checks, every variant describes a numeric
/// degeneracy of the input data. Nothing is recovered locally: the
/// error is handed back to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A denominator evaluated to exactly zero. The payload names the quantity.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
    /// The normal equations of a least-squares fit have no unique solution
    #[error("singular matrix: normal equations have no unique solution")]
    SingularMatrix,
    /// Two sequences or a sequence and a matrix dimension disagree in length
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Length required by the other operand
        expected: usize,
        /// Length actually supplied
        found: usize,
    },
    /// A frequency matrix row differs in length from the first row
    #[error("ragged frequency matrix: row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },
    /// An observation does not match any of the declared distinct levels
    #[error("observation does not match any declared level")]
    UnknownLevel,
    /// A count could not be represented in the floating point type
    #[error("count is not representable in the target float type")]
    NumericConversion,
}
