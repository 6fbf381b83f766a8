//! The `Render` capability and its built-in implementations.

use core::fmt;

use super::sink::{SinkWriter, TextSink};

/// A type that can write itself into a [`TextSink`].
///
/// This is the whole capability: one method, no return value. Types opt in by
/// implementing it (or with `#[derive(Render)]`); there is no base type to
/// inherit from. Anything without an impl is rejected at compile time:
///
/// ```compile_fail
/// use tola_prims::render;
///
/// struct Opaque;
///
/// let mut out = String::new();
/// render(&mut out, &Opaque);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not have the `Render` capability",
    label = "cannot be rendered into a text sink",
    note = "implement `Render` for `{Self}` or add `#[derive(Render)]`"
)]
pub trait Render {
    fn render(&self, sink: &mut dyn TextSink);
}

// =============================================================================
// Forwarding impls
// =============================================================================

impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        (**self).render(sink);
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        (**self).render(sink);
    }
}

#[cfg(feature = "alloc")]
impl<T: Render + ?Sized> Render for alloc::boxed::Box<T> {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        (**self).render(sink);
    }
}

/// `Some` renders its value, `None` renders nothing.
impl<T: Render> Render for Option<T> {
    fn render(&self, sink: &mut dyn TextSink) {
        if let Some(value) = self {
            value.render(sink);
        }
    }
}

// =============================================================================
// Text
// =============================================================================

impl Render for str {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        sink.put_str(self);
    }
}

#[cfg(feature = "alloc")]
impl Render for alloc::string::String {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        sink.put_str(self);
    }
}

impl Render for char {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        sink.put_char(*self);
    }
}

impl Render for bool {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        sink.put_str(if *self { "true" } else { "false" });
    }
}

// =============================================================================
// Sequences
// =============================================================================

/// Rendered as `[a, b, c]`.
impl<T: Render> Render for [T] {
    fn render(&self, sink: &mut dyn TextSink) {
        sink.put_char('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                sink.put_str(", ");
            }
            item.render(sink);
        }
        sink.put_char(']');
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        self.as_slice().render(sink);
    }
}

// =============================================================================
// Display bridge
// =============================================================================

/// Write a `Display` value into a sink.
#[doc(hidden)]
pub fn render_display<T: fmt::Display + ?Sized>(value: &T, sink: &mut dyn TextSink) {
    // SinkWriter never fails; an Err here can only come from a broken
    // Display impl, and a sink has nowhere to report it.
    let _ = fmt::write(&mut SinkWriter(sink), format_args!("{value}"));
}

/// Renders any `Display` value.
///
/// ```
/// use tola_prims::{Shown, render};
///
/// let mut out = String::new();
/// render(&mut out, &Shown(core::net::Ipv4Addr::LOCALHOST));
/// assert_eq!(out, "127.0.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> Render for Shown<T> {
    #[inline]
    fn render(&self, sink: &mut dyn TextSink) {
        render_display(&self.0, sink);
    }
}

/// Implement [`Render`] for types that already implement `Display`.
///
/// # Usage
/// ```
/// use core::fmt;
///
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// tola_prims::impl_render_via_display!(Celsius);
///
/// let mut out = String::new();
/// tola_prims::render(&mut out, &Celsius(21.5));
/// assert_eq!(out, "21.5°C");
/// ```
#[macro_export]
macro_rules! impl_render_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Render for $ty {
                #[inline]
                fn render(&self, sink: &mut dyn $crate::TextSink) {
                    $crate::render::__render_display(self, sink);
                }
            }
        )+
    };
}

impl_render_via_display!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);
