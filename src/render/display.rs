//! Bridge from `Render` back into `core::fmt`.

use core::fmt;

use super::capability::Render;
use super::sink::FmtSink;

/// `Display` adapter for a [`Render`] value.
///
/// Formatter errors are propagated; formatting flags (width, fill) are not
/// applied.
pub struct Rendered<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Clone for Rendered<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Rendered<'_, T> {}

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sink = FmtSink::new(f);
        self.0.render(&mut sink);
        sink.finish()
    }
}

impl<T: Render + ?Sized> fmt::Debug for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Convenience methods for every [`Render`] type.
pub trait RenderExt: Render {
    /// View this value through `Display`.
    ///
    /// ```
    /// use tola_prims::RenderExt;
    ///
    /// assert_eq!(format!("<{}>", [1, 2].rendered()), "<[1, 2]>");
    /// ```
    fn rendered(&self) -> Rendered<'_, Self> {
        Rendered(self)
    }

    /// Render into a fresh `String`.
    #[cfg(feature = "alloc")]
    fn render_to_string(&self) -> alloc::string::String {
        let mut out = alloc::string::String::new();
        self.render(&mut out);
        out
    }
}

impl<T: Render + ?Sized> RenderExt for T {}
