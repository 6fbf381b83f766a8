//! Text sinks: where rendered output goes.
//!
//! A sink is append-only. It never reports failure to the renderer; sinks
//! that can fail (`FmtSink`) or fill up (`StackSink`) record that state
//! for the owner to inspect afterwards.

use core::fmt;

/// Append-only textual output.
pub trait TextSink {
    /// Append a string slice.
    fn put_str(&mut self, s: &str);

    /// Append a single character.
    #[inline]
    fn put_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.put_str(c.encode_utf8(&mut buf));
    }
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    #[inline]
    fn put_str(&mut self, s: &str) {
        (**self).put_str(s);
    }

    #[inline]
    fn put_char(&mut self, c: char) {
        (**self).put_char(c);
    }
}

#[cfg(feature = "alloc")]
impl TextSink for alloc::string::String {
    #[inline]
    fn put_str(&mut self, s: &str) {
        self.push_str(s);
    }

    #[inline]
    fn put_char(&mut self, c: char) {
        self.push(c);
    }
}

// =============================================================================
// StackSink
// =============================================================================

/// Fixed-capacity sink backed by an inline `[u8; N]`.
///
/// Output past the capacity is dropped. The cut always falls on a character
/// boundary, so the contents stay valid UTF-8. Once a write has been cut,
/// every later write is dropped too and `is_truncated()` stays set until
/// `clear()`.
///
/// ```
/// use tola_prims::{StackSink, render};
///
/// let mut sink = StackSink::<8>::new();
/// render(&mut sink, "héllo, world");
/// assert_eq!(sink.as_str(), "héllo, ");
/// assert!(sink.is_truncated());
/// ```
#[derive(Clone)]
pub struct StackSink<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> StackSink<N> {
    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0, truncated: false }
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        let bytes = &self.buf[..self.len];
        match core::str::from_utf8(bytes) {
            Ok(s) => s,
            // Only whole characters are ever copied in.
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Whether any output has been dropped for lack of space.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }
}

impl<const N: usize> Default for StackSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TextSink for StackSink<N> {
    fn put_str(&mut self, s: &str) {
        // Nothing after a cut may land, or the text would skip a piece.
        if self.truncated {
            return;
        }
        let avail = N - self.len;
        let take = if s.len() <= avail {
            s.len()
        } else {
            self.truncated = true;
            let mut cut = avail;
            while !s.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        };
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
    }
}

impl<const N: usize> fmt::Debug for StackSink<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackSink")
            .field("text", &self.as_str())
            .field("capacity", &N)
            .field("truncated", &self.truncated)
            .finish()
    }
}

impl<const N: usize> fmt::Display for StackSink<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FmtSink
// =============================================================================

/// Sink over any [`fmt::Write`].
///
/// The first write error is latched and every later write is skipped.
/// Call [`FmtSink::finish`] to observe it.
pub struct FmtSink<W> {
    inner: W,
    result: fmt::Result,
}

impl<W: fmt::Write> FmtSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner, result: Ok(()) }
    }

    /// The latched write result.
    pub fn finish(self) -> fmt::Result {
        self.result
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> TextSink for FmtSink<W> {
    #[inline]
    fn put_str(&mut self, s: &str) {
        if self.result.is_ok() {
            self.result = self.inner.write_str(s);
        }
    }

    #[inline]
    fn put_char(&mut self, c: char) {
        if self.result.is_ok() {
            self.result = self.inner.write_char(c);
        }
    }
}

// =============================================================================
// SinkWriter
// =============================================================================

/// `fmt::Write` view of a sink, for feeding `Display` output into it.
pub(crate) struct SinkWriter<'a, S: ?Sized>(pub(crate) &'a mut S);

impl<S: TextSink + ?Sized> fmt::Write for SinkWriter<'_, S> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.put_str(s);
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        self.0.put_char(c);
        Ok(())
    }
}
