#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a plot-bounds string.
///
/// Bounds strings have the form `xmin:xmax:ymin:ymax`, with each field a
/// decimal number and `min <= max` per axis.
pub enum LimitsError {
    /// The string does not split into exactly four `:`-separated fields.
    InvalidFieldCount {
        /// The number of fields found.
        found: usize,
    },
    /// A field did not parse as a number.
    InvalidNumber {
        /// The name of the offending field.
        field: &'static str,
    },
    /// A minimum bound is greater than the corresponding maximum.
    ReversedRange {
        /// The offending axis, `'x'` or `'y'`.
        axis: char,
    },
}

impl std::fmt::Display for LimitsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFieldCount { found } => {
                write!(f, "Expected 4 limit values separated by ':', found {found}.")
            },

            Self::InvalidNumber { field } => {
                write!(f, "Limit value '{field}' is not a valid number.")
            },

            Self::ReversedRange { axis } => {
                write!(f, "Limit {axis}min must not be greater than {axis}max.")
            },
        }
    }
}

impl std::error::Error for LimitsError {}
