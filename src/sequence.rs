//! Validated input sequences.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of positions. One bit of a [`Mask`](crate::mask::Mask) per position.
pub const MAX_LEN: usize = 64;

/// Largest supported value. The value-indexed evaluator sizes its table by value.
pub const MAX_VALUE: u32 = 50;

/// A bounded-length, bounded-value integer sequence.
///
/// Immutable once built; the search only ever reads it.
///
/// # Examples
///
/// ```
/// use u_subrev::Sequence;
///
/// let seq = Sequence::new(vec![3, 1, 4, 1, 5]).unwrap();
/// assert_eq!(seq.len(), 5);
/// assert!(Sequence::new(vec![51]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u32>", into = "Vec<u32>"))]
pub struct Sequence {
    values: Vec<u32>,
}

impl Sequence {
    /// Validates length and value range.
    pub fn new(values: Vec<u32>) -> Result<Self> {
        if values.len() > MAX_LEN {
            return Err(Error::SequenceTooLong {
                len: values.len(),
                max: MAX_LEN,
            });
        }
        if let Some(index) = values.iter().position(|&v| v > MAX_VALUE) {
            return Err(Error::ValueOutOfRange {
                index,
                value: values[index],
                max: MAX_VALUE,
            });
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }
}

impl AsRef<[u32]> for Sequence {
    fn as_ref(&self) -> &[u32] {
        &self.values
    }
}

impl From<Sequence> for Vec<u32> {
    fn from(sequence: Sequence) -> Self {
        sequence.values
    }
}

impl TryFrom<Vec<u32>> for Sequence {
    type Error = Error;

    fn try_from(values: Vec<u32>) -> Result<Self> {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        let seq = Sequence::new(Vec::new()).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.as_slice(), &[] as &[u32]);
    }

    #[test]
    fn test_rejects_long_sequence() {
        let err = Sequence::new(vec![1; MAX_LEN + 1]).unwrap_err();
        assert_eq!(
            err,
            Error::SequenceTooLong {
                len: MAX_LEN + 1,
                max: MAX_LEN
            }
        );
    }

    #[test]
    fn test_accepts_full_width() {
        assert!(Sequence::new(vec![MAX_VALUE; MAX_LEN]).is_ok());
    }

    #[test]
    fn test_rejects_large_value() {
        let err = Sequence::try_from(vec![1, 2, MAX_VALUE + 1, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::ValueOutOfRange {
                index: 2,
                value: MAX_VALUE + 1,
                max: MAX_VALUE
            }
        );
    }
}
