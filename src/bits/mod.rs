//! # Bit reversal
//!
//! Bit `i` of the result is bit `BITS - 1 - i` of the input. The operation
//! is total and its own inverse.
//!
//! Implemented as a swap ladder: exchange adjacent bits, then bit pairs, then
//! nibbles, and finish with a byte swap.
//!
//! ```text
//! b7 b6 b5 b4 b3 b2 b1 b0
//! b6 b7 b4 b5 b2 b3 b0 b1    swap 1-bit groups (mask 0x55..)
//! b4 b5 b6 b7 b0 b1 b2 b3    swap 2-bit groups (mask 0x33..)
//! b0 b1 b2 b3 b4 b5 b6 b7    swap 4-bit groups (mask 0x0F..)
//!                            swap bytes (no-op for u8)
//! ```

mod permute;

pub use permute::{BitsError, bit_reverse_permute};

/// Reverse the bit order of a `u32`.
///
/// ```
/// use tola_prims::reverse_bits;
///
/// assert_eq!(reverse_bits(0x0000_0001), 0x8000_0000);
/// assert_eq!(reverse_bits(reverse_bits(0x00AA_AAFF)), 0x00AA_AAFF);
/// ```
#[inline]
pub const fn reverse_bits(n: u32) -> u32 {
    reverse_u32(n)
}

/// Bit reversal for unsigned integers of any width.
pub trait BitReverse: Copy {
    const BITS: u32;

    /// Reverse all `BITS` bits.
    fn reverse(self) -> Self;

    /// Reverse only the low `width` bits, clearing everything above them.
    ///
    /// `width == 0` yields 0; `width >= BITS` is the same as [`reverse`].
    ///
    /// ```
    /// use tola_prims::BitReverse;
    ///
    /// assert_eq!(0b0001u8.reverse_low(4), 0b1000);
    /// assert_eq!(0b1101_0110u8.reverse_low(3), 0b011);
    /// ```
    ///
    /// [`reverse`]: BitReverse::reverse
    fn reverse_low(self, width: u32) -> Self;
}

macro_rules! impl_bit_reverse {
    ($($t:ident),+ $(,)?) => {
        $(
            ::paste::paste! {
                const fn [<reverse_ $t>](n: $t) -> $t {
                    const M1: $t = <$t>::MAX / 3;
                    const M2: $t = <$t>::MAX / 5;
                    const M4: $t = <$t>::MAX / 17;
                    let n = ((n >> 1) & M1) | ((n & M1) << 1);
                    let n = ((n >> 2) & M2) | ((n & M2) << 2);
                    let n = ((n >> 4) & M4) | ((n & M4) << 4);
                    n.swap_bytes()
                }

                impl BitReverse for $t {
                    const BITS: u32 = <$t>::BITS;

                    #[inline]
                    fn reverse(self) -> Self {
                        [<reverse_ $t>](self)
                    }

                    #[inline]
                    fn reverse_low(self, width: u32) -> Self {
                        match width {
                            0 => 0,
                            w if w >= Self::BITS => self.reverse(),
                            w => self.reverse() >> (Self::BITS - w),
                        }
                    }
                }
            }
        )+
    };
}

impl_bit_reverse!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u32; 8] = [
        0,
        1,
        u32::MAX,
        0x00AA_AAFF,
        0x8000_0000,
        0xDEAD_BEEF,
        0x1234_5678,
        0x0F0F_00F0,
    ];

    #[test]
    fn test_matches_core() {
        for n in SAMPLES {
            assert_eq!(reverse_bits(n), n.reverse_bits(), "n = {n:#010x}");
        }
        assert_eq!(0xF0u8.reverse(), 0x0F);
        assert_eq!(0x0001u16.reverse(), 0x8000);
        assert_eq!(0xDEAD_BEEF_u64.reverse(), 0xDEAD_BEEF_u64.reverse_bits());
        assert_eq!(3u128.reverse(), 3u128.reverse_bits());
        assert_eq!(6usize.reverse(), 6usize.reverse_bits());
    }

    #[test]
    fn test_reverse_bits_is_const() {
        const TOP: u32 = reverse_bits(1);
        assert_eq!(TOP, 1 << 31);
    }

    #[test]
    fn test_reverse_low_edges() {
        assert_eq!(0xFFu8.reverse_low(0), 0);
        assert_eq!(0b10u32.reverse_low(32), 0b10u32.reverse());
        assert_eq!(0b10u32.reverse_low(99), 0b10u32.reverse());
        assert_eq!(0b110u16.reverse_low(3), 0b011);
    }
}
