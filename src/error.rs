//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when validating input or configuration.
///
/// The search itself never fails: every numeric degeneracy is recovered
/// locally. Errors only come from inputs outside the supported domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The sequence has more positions than a mask can address.
    #[error("sequence length {len} exceeds the supported maximum of {max}")]
    SequenceTooLong {
        /// Actual length.
        len: usize,
        /// Supported maximum.
        max: usize,
    },

    /// A value lies outside the bounded value domain.
    #[error("value {value} at position {index} exceeds the supported maximum of {max}")]
    ValueOutOfRange {
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: u32,
        /// Supported maximum value.
        max: u32,
    },

    /// The brute-force oracle was asked to enumerate too many masks.
    #[error("brute force is limited to {max} elements, got {len}")]
    OracleTooLarge {
        /// Actual length.
        len: usize,
        /// Oracle limit.
        max: usize,
    },

    /// Invalid search configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::ValueOutOfRange {
            index: 3,
            value: 99,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "value 99 at position 3 exceeds the supported maximum of 50"
        );

        let err = Error::InvalidConfig("batch_size must be at least 1".into());
        assert_eq!(err.to_string(), "invalid config: batch_size must be at least 1");
    }
}
