use std::fmt;

/// The crate's result type.
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Errors produced by the regression calculator when inputs are unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegressionError {
    /// An input is invalid for semantic reasons (e.g. too few points).
    InvalidInput(&'static str),

    /// The two sequences do not have the same length.
    ShapeMismatch {
        /// Which sequence was checked (e.g. "y").
        what: &'static str,
        /// Observed length.
        got: usize,
        /// Expected length.
        expected: usize,
    },

    /// Every `x` value is identical, so the slope denominator is zero.
    ZeroVariance,
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            RegressionError::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "length mismatch for {what}: got {got}, expected {expected}"
            ),
            RegressionError::ZeroVariance => {
                write!(f, "x has zero variance, slope is undefined")
            }
        }
    }
}

impl std::error::Error for RegressionError {}
