//! Runtime-checked construction, for element counts not known until runtime.

use super::error::SeqError;

/// Incrementally fills a `[CT; N]`.
///
/// ```
/// use tola_prims::{FixedSeqBuilder, SeqError};
///
/// let mut builder = FixedSeqBuilder::<String, 2>::new();
/// builder.push("a")?;
/// builder.push("b")?;
/// assert_eq!(builder.push("c"), Err(SeqError::Overflow { capacity: 2 }));
/// assert_eq!(builder.finish()?, ["a", "b"]);
/// # Ok::<(), SeqError>(())
/// ```
#[derive(Debug)]
pub struct FixedSeqBuilder<CT, const N: usize> {
    slots: [Option<CT>; N],
    len: usize,
}

impl<CT, const N: usize> FixedSeqBuilder<CT, N> {
    pub fn new() -> Self {
        Self { slots: core::array::from_fn(|_| None), len: 0 }
    }

    /// Append one element. Fails once `N` elements have been pushed.
    pub fn push(&mut self, value: impl Into<CT>) -> Result<(), SeqError> {
        let slot = self
            .slots
            .get_mut(self.len)
            .ok_or(SeqError::Overflow { capacity: N })?;
        *slot = Some(value.into());
        self.len += 1;
        Ok(())
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Elements still needed before `finish` succeeds.
    pub const fn remaining(&self) -> usize {
        N - self.len
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Take the completed sequence, in push order.
    pub fn finish(self) -> Result<[CT; N], SeqError> {
        if let Some(found) = self.slots.iter().position(Option::is_none) {
            return Err(SeqError::LengthMismatch { expected: N, found });
        }
        // Every slot was checked to be `Some` just above.
        Ok(self.slots.map(|slot| match slot {
            Some(value) => value,
            None => unreachable!(),
        }))
    }
}

impl<CT, const N: usize> Default for FixedSeqBuilder<CT, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect exactly `N` items into a `[CT; N]`.
///
/// Reads at most `N + 1` items, so an unbounded iterator fails with
/// [`SeqError::Overflow`] instead of running forever.
///
/// ```
/// use tola_prims::{SeqError, try_fixed_seq};
///
/// let seq: [u32; 3] = try_fixed_seq(1u8..4)?;
/// assert_eq!(seq, [1, 2, 3]);
///
/// assert_eq!(
///     try_fixed_seq::<u32, 3, _>(1u8..3),
///     Err(SeqError::LengthMismatch { expected: 3, found: 2 })
/// );
/// assert_eq!(
///     try_fixed_seq::<u32, 3, _>(0u8..),
///     Err(SeqError::Overflow { capacity: 3 })
/// );
/// # Ok::<(), SeqError>(())
/// ```
pub fn try_fixed_seq<CT, const N: usize, I>(items: I) -> Result<[CT; N], SeqError>
where
    I: IntoIterator,
    I::Item: Into<CT>,
{
    let mut items = items.into_iter();
    let mut builder = FixedSeqBuilder::<CT, N>::new();
    for item in items.by_ref().take(N) {
        builder.push(item)?;
    }
    if items.next().is_some() {
        return Err(SeqError::Overflow { capacity: N });
    }
    builder.finish()
}
