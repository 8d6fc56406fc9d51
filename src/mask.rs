//! Reversal masks and the subsequence-reversal transform.
//!
//! A [`Mask`] selects positions of a sequence. Applying it reverses the
//! relative order of the values at the selected positions: the value at
//! the first selected position moves to the last, and so on inward.
//! Unselected positions are untouched. The transform is an involution.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit set over sequence positions, one bit per index.
///
/// Bits at positions `>= n` are ignored by the transforms for a sequence
/// of length `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mask(u64);

impl Mask {
    /// Width of a mask in bits.
    pub const BITS: usize = 64;

    /// The identity mask (no positions selected).
    pub const fn empty() -> Self {
        Mask(0)
    }

    /// Selects every position of a sequence of length `n`.
    pub fn full(n: usize) -> Self {
        Mask(low_bits(n))
    }

    pub const fn from_bits(bits: u64) -> Self {
        Mask(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Sets each of the first `n` bits independently with probability 0.5.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut bits = 0u64;
        for i in 0..n.min(Self::BITS) {
            if rng.random_bool(0.5) {
                bits |= 1u64 << i;
            }
        }
        Mask(bits)
    }

    /// Draws a mask uniformly from the `2ⁿ` masks over `n` positions.
    pub fn uniform<R: Rng>(n: usize, rng: &mut R) -> Self {
        Mask(rng.random::<u64>() & low_bits(n))
    }

    /// Toggles position `i`.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        debug_assert!(i < Self::BITS);
        self.0 ^= 1u64 << i;
    }

    #[inline]
    pub fn contains(self, i: usize) -> bool {
        i < Self::BITS && self.0 & (1u64 << i) != 0
    }

    /// Number of selected positions.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected positions below `n`, ascending.
    pub fn indices(self, n: usize) -> impl Iterator<Item = usize> {
        (0..n.min(Self::BITS)).filter(move |&i| self.contains(i))
    }
}

fn low_bits(n: usize) -> u64 {
    if n >= Mask::BITS {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Returns a copy of `values` with the masked subsequence reversed.
///
/// # Examples
///
/// ```
/// use u_subrev::mask::{apply_mask, Mask};
///
/// // positions 0, 2, 3 hold 5, 3, 2 -> become 2, 3, 5
/// let out = apply_mask(&[5, 4, 3, 2, 1], Mask::from_bits(0b01101));
/// assert_eq!(out, vec![2, 4, 3, 5, 1]);
/// assert_eq!(apply_mask(&out, Mask::from_bits(0b01101)), vec![5, 4, 3, 2, 1]);
/// ```
pub fn apply_mask(values: &[u32], mask: Mask) -> Vec<u32> {
    let mut out = values.to_vec();
    reverse_in_place(&mut out, mask);
    out
}

/// Reverses the masked subsequence of `values` in place.
///
/// Calling it a second time with the same mask restores `values` exactly,
/// so it doubles as its own undo.
pub fn reverse_in_place(values: &mut [u32], mask: Mask) {
    let n = values.len().min(Mask::BITS);
    let mut bits = mask.bits() & low_bits(n);
    while bits.count_ones() >= 2 {
        let lo = bits.trailing_zeros() as usize;
        let hi = (Mask::BITS - 1) - bits.leading_zeros() as usize;
        values.swap(lo, hi);
        bits &= !(1u64 << lo);
        bits &= !(1u64 << hi);
    }
}
