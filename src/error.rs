//! Error types.

use thiserror::Error;

/// Errors raised by geometry, solver construction, and input parsing.
///
/// An instance without a feasible route is not an error: solvers report it
/// as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Two operands (or a point and its instance) have different dimensions.
    #[error("dimension mismatch at point {index}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Position of the offending point (0 for binary operations).
        index: usize,
        /// Dimension of the reference operand.
        expected: usize,
        /// Dimension actually found.
        found: usize,
    },

    /// A prefix-start solver was configured with an unusable prefix size.
    #[error("invalid prefix size {size} for {points} points (need 2 <= size <= points)")]
    InvalidPrefixSize {
        /// Requested prefix size.
        size: usize,
        /// Number of points in the instance.
        points: usize,
    },

    /// A requested point dimension is not usable.
    #[error("invalid dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    /// A coordinate range for random instances is too wide to sample.
    #[error("invalid extent {0}: coordinate range must be finite")]
    InvalidExtent(f64),

    /// The configured time limit ran out before the search completed.
    #[error("time limit exceeded after {elapsed_ms} ms")]
    TimeLimitExceeded {
        /// Wall time spent before giving up.
        elapsed_ms: u64,
    },

    /// A line of point input could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Human-readable reason.
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let e = RouteError::DimensionMismatch {
            index: 3,
            expected: 2,
            found: 4,
        };
        assert_eq!(
            e.to_string(),
            "dimension mismatch at point 3: expected 2, found 4"
        );
    }

    #[test]
    fn test_display_parse() {
        let e = RouteError::Parse {
            line: 7,
            message: "bad number".into(),
        };
        assert_eq!(e.to_string(), "line 7: bad number");
    }
}
