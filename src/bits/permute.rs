use core::fmt;

use super::BitReverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    /// Bit-reversal order is only defined on power-of-two lengths.
    NotPowerOfTwo { len: usize },
}

impl fmt::Display for BitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitsError::NotPowerOfTwo { len } => {
                write!(f, "length {len} is not a power of two")
            }
        }
    }
}

impl core::error::Error for BitsError {}

/// Reorder `data` in place so that element `i` moves to index
/// `reverse_low(i, log2(len))`, the input ordering of an iterative radix-2 FFT.
///
/// Lengths 0 and 1 are left untouched.
///
/// ```
/// use tola_prims::bit_reverse_permute;
///
/// let mut data = [0, 1, 2, 3, 4, 5, 6, 7];
/// bit_reverse_permute(&mut data)?;
/// assert_eq!(data, [0, 4, 2, 6, 1, 5, 3, 7]);
/// # Ok::<(), tola_prims::BitsError>(())
/// ```
pub fn bit_reverse_permute<T>(data: &mut [T]) -> Result<(), BitsError> {
    let len = data.len();
    if len <= 1 {
        return Ok(());
    }
    if !len.is_power_of_two() {
        return Err(BitsError::NotPowerOfTwo { len });
    }
    let width = len.trailing_zeros();
    for i in 0..len {
        let j = i.reverse_low(width);
        // Each pair swaps once.
        if i < j {
            data.swap(i, j);
        }
    }
    Ok(())
}
