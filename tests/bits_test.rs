//! Tests for bit reversal.

use tola_prims::{BitReverse, BitsError, bit_reverse_permute, reverse_bits};

fn bit(n: u32, i: u32) -> u32 {
    (n >> i) & 1
}

/// Deterministic spread of inputs (xorshift32).
fn samples() -> impl Iterator<Item = u32> {
    let mut state = 0x9E37_79B9u32;
    std::iter::from_fn(move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        Some(state)
    })
    .take(4096)
    .chain([0, 1, u32::MAX, 0x8000_0000, 0x00AA_AAFF])
}

// =============================================================================
// Involution
// =============================================================================

#[test]
fn test_double_reverse_returns_input() {
    let n = 0x00AA_AAFF;
    assert_eq!(reverse_bits(reverse_bits(n)), n);
}

#[test]
fn test_involution_over_samples() {
    for n in samples() {
        assert_eq!(reverse_bits(reverse_bits(n)), n, "n = {n:#010x}");
    }
}

#[test]
fn test_involution_all_u16() {
    for n in 0..=u16::MAX {
        assert_eq!(n.reverse().reverse(), n);
    }
}

// =============================================================================
// Bit Positions
// =============================================================================

#[test]
fn test_lowest_bit_moves_to_top() {
    assert_eq!(reverse_bits(0x0000_0001), 0x8000_0000);
    assert_eq!(reverse_bits(0x8000_0000), 0x0000_0001);
}

#[test]
fn test_every_position() {
    for i in 0..32 {
        assert_eq!(reverse_bits(1 << i), 1 << (31 - i), "bit {i}");
    }
}

#[test]
fn test_position_law_over_samples() {
    for n in samples() {
        let r = reverse_bits(n);
        for i in 0..32 {
            assert_eq!(bit(r, i), bit(n, 31 - i), "n = {n:#010x}, bit {i}");
        }
    }
}

#[test]
fn test_known_values() {
    assert_eq!(reverse_bits(0), 0);
    assert_eq!(reverse_bits(u32::MAX), u32::MAX);
    assert_eq!(reverse_bits(0x00AA_AAFF), 0xFF55_5500);
    assert_eq!(reverse_bits(0x0000_FFFF), 0xFFFF_0000);
}

#[test]
fn test_popcount_preserved() {
    for n in samples() {
        assert_eq!(reverse_bits(n).count_ones(), n.count_ones());
    }
}

// =============================================================================
// Other Widths
// =============================================================================

#[test]
fn test_widths() {
    assert_eq!(<u8 as BitReverse>::BITS, 8);
    assert_eq!(<u128 as BitReverse>::BITS, 128);
    assert_eq!(0b0000_0110u8.reverse(), 0b0110_0000);
    assert_eq!(1u64.reverse(), 1 << 63);
    assert_eq!(1u128.reverse(), 1 << 127);
    assert_eq!(0x00AA_AAFFu32.reverse(), reverse_bits(0x00AA_AAFF));
}

#[test]
fn test_reverse_low() {
    assert_eq!(0b011u32.reverse_low(3), 0b110);
    assert_eq!(0b1_0000_0001u32.reverse_low(4), 0b1000);
    for width in 1..=8u32 {
        for n in 0..(1u16 << width) {
            assert_eq!(n.reverse_low(width).reverse_low(width), n, "n = {n}, width {width}");
        }
    }
}

// =============================================================================
// Permutation
// =============================================================================

#[test]
fn test_permute_is_involution() {
    let original: Vec<u32> = (0..64).collect();
    let mut data = original.clone();
    bit_reverse_permute(&mut data).unwrap();
    assert_ne!(data, original);
    assert_eq!(data[1], 32);
    bit_reverse_permute(&mut data).unwrap();
    assert_eq!(data, original);
}

#[test]
fn test_permute_trivial_lengths() {
    let mut empty: [u8; 0] = [];
    assert_eq!(bit_reverse_permute(&mut empty), Ok(()));
    let mut one = ['x'];
    assert_eq!(bit_reverse_permute(&mut one), Ok(()));
    assert_eq!(one, ['x']);
}

#[test]
fn test_permute_rejects_non_power_of_two() {
    let mut data = [0u8; 6];
    assert_eq!(
        bit_reverse_permute(&mut data),
        Err(BitsError::NotPowerOfTwo { len: 6 })
    );
    assert_eq!(
        BitsError::NotPowerOfTwo { len: 6 }.to_string(),
        "length 6 is not a power of two"
    );
}
