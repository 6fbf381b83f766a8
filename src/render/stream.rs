//! The output operator: `render(sink, value)` and `Out << value`.

use core::ops::Shl;

use super::capability::Render;
use super::sink::TextSink;

/// Append `value`'s rendering to `sink` and hand the sink back.
///
/// ```
/// use tola_prims::{Render, TextSink, render};
///
/// struct X;
///
/// impl Render for X {
///     fn render(&self, sink: &mut dyn TextSink) {
///         sink.put_str("X");
///     }
/// }
///
/// let mut out = String::from("A");
/// render(render(&mut out, &X), "!");
/// assert_eq!(out, "AX!");
/// ```
#[inline]
pub fn render<'s, S, T>(sink: &'s mut S, value: &T) -> &'s mut S
where
    S: TextSink + ?Sized,
    T: Render + ?Sized,
{
    // `&mut S` is always sized, so it can stand in for `dyn TextSink`
    // even when `S` itself is not.
    let mut forward = &mut *sink;
    value.render(&mut forward);
    sink
}

/// Stream-style wrapper around a sink.
///
/// `<<` renders any [`Render`] value (by value or by reference) and yields
/// the stream again, so calls chain left to right.
///
/// ```
/// use tola_prims::Out;
///
/// let mut text = String::new();
/// let _ = Out::new(&mut text) << "n = " << 42 << ',' << true;
/// assert_eq!(text, "n = 42,true");
/// ```
pub struct Out<'a, S: ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: TextSink + ?Sized> Out<'a, S> {
    #[inline]
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Borrow the underlying sink.
    #[inline]
    pub fn sink(&mut self) -> &mut S {
        &mut *self.sink
    }

    #[inline]
    pub fn into_inner(self) -> &'a mut S {
        self.sink
    }
}

impl<S: TextSink + ?Sized, T: Render> Shl<T> for Out<'_, S> {
    type Output = Self;

    #[inline]
    fn shl(self, value: T) -> Self {
        render(&mut *self.sink, &value);
        self
    }
}

/// Render several values into one sink, in order.
///
/// Evaluates to the sink reference it was given.
///
/// ```
/// use tola_prims::render_all;
///
/// let mut out = String::new();
/// render_all!(&mut out; "id=", 7u8, ' ', [1, 2]);
/// assert_eq!(out, "id=7 [1, 2]");
/// ```
#[macro_export]
macro_rules! render_all {
    ($sink:expr; $($value:expr),* $(,)?) => {{
        let sink = $sink;
        $( $crate::render::render(&mut *sink, &$value); )*
        sink
    }};
}
