//! # Fixed-size sequences
//!
//! Build a `[CT; K]` from a list of arguments, with `K` taken from the number
//! of arguments at compile time.
//!
//! | Entry point | Input | Length check |
//! |-------------|-------|--------------|
//! | `fixed_seq![CT; a, b, c]` | any expressions `Into<CT>` | compile time |
//! | `build_fixed_seq::<CT, _>((a, b, c))` | tuple or array of `Into<CT>` | compile time |
//! | `FixedSeqBuilder` / `try_fixed_seq` | values known only at runtime | `SeqError` |
//!
//! Arguments are moved into the sequence; nothing is cloned.

mod builder;
mod error;

pub use builder::{FixedSeqBuilder, try_fixed_seq};
pub use error::SeqError;

/// A fixed-size sequence of `N` elements of type `CT`.
pub type FixedSeq<CT, const N: usize> = [CT; N];

/// Conversion of an argument pack into a `[CT; LEN]`.
///
/// Implemented for `()`, tuples of arity 1 to 16 whose elements are each
/// `Into<CT>` (the element types may differ), and `[U; N]` with `U: Into<CT>`.
///
/// A tuple with an element that does not convert is rejected:
///
/// ```compile_fail
/// use tola_prims::build_fixed_seq;
///
/// let _ = build_fixed_seq::<u8, _>((1u8, "two"));
/// ```
pub trait IntoFixedSeq<CT> {
    /// Number of elements produced.
    const LEN: usize;

    /// Always `[CT; Self::LEN]`.
    type Output;

    fn into_fixed_seq(self) -> Self::Output;
}

impl<CT> IntoFixedSeq<CT> for () {
    const LEN: usize = 0;
    type Output = [CT; 0];

    #[inline]
    fn into_fixed_seq(self) -> [CT; 0] {
        []
    }
}

impl<CT, U: Into<CT>, const N: usize> IntoFixedSeq<CT> for [U; N] {
    const LEN: usize = N;
    type Output = [CT; N];

    #[inline]
    fn into_fixed_seq(self) -> [CT; N] {
        self.map(Into::into)
    }
}

// (A0,) .. (A0, .., A15)
macros::tuple_seq_impls!(16);

/// Build a fixed-size sequence of `CT` from an argument pack.
///
/// ```
/// use tola_prims::build_fixed_seq;
///
/// let seq = build_fixed_seq::<u64, _>((1u8, 2u16, 3u32));
/// assert_eq!(seq, [1u64, 2, 3]);
///
/// let empty = build_fixed_seq::<u64, _>(());
/// assert_eq!(empty.len(), 0);
/// ```
#[inline]
pub fn build_fixed_seq<CT, A: IntoFixedSeq<CT>>(args: A) -> A::Output {
    args.into_fixed_seq()
}

/// Build a `[CT; K]` from `K` arguments, converting each with `Into<CT>`.
///
/// Arguments are evaluated and moved in order. With no arguments the result
/// is `[CT; 0]`.
///
/// ```
/// use tola_prims::fixed_seq;
///
/// let seq = fixed_seq![i32; 1, 2, 3];
/// assert_eq!(seq, [1, 2, 3]);
///
/// let names: [String; 2] = fixed_seq![String; "a", String::from("b")];
/// assert_eq!(names, ["a", "b"]);
///
/// let none = fixed_seq![i32];
/// assert!(none.is_empty());
/// ```
///
/// Arguments that do not convert are a compile error:
///
/// ```compile_fail
/// let _ = tola_prims::fixed_seq![u8; 1u8, 300u32];
/// ```
#[macro_export]
macro_rules! fixed_seq {
    ($ct:ty; $($arg:expr),+ $(,)?) => {
        [$( ::core::convert::Into::<$ct>::into($arg) ),+]
    };
    ($ct:ty $(;)?) => {{
        let seq: [$ct; 0] = [];
        seq
    }};
}
