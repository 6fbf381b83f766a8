//! Capability probes for concrete types.
//!
//! Uses the "inherent const fallback" pattern: for each probed trait there
//! is a fallback trait with `const IS_X: bool = false` implemented for every
//! `Detect<T>`, and an inherent `const IS_X: bool = true` on `Detect<T>`
//! where `T` implements the trait. Inherent items win when their bounds hold.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. In a
//! generic `fn foo<T>()` the inherent impl never applies; use a
//! `T: Render` bound there instead.

use core::marker::PhantomData;

use super::capability::Render;
use super::sink::TextSink;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a trait.
macro_rules! impl_detect {
    ($Trait:ident, $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait + ?Sized> Detect<T> { pub const $CONST: bool = true; }
        }
    };
}

impl_detect!(Render, IS_RENDER);
impl_detect!(TextSink, IS_TEXT_SINK);

/// Whether a concrete type implements [`Render`](crate::Render).
///
/// Usable in `const` context.
///
/// ```
/// use tola_prims::is_render;
///
/// struct Opaque;
///
/// const STR_OK: bool = is_render!(str);
/// assert!(STR_OK);
/// assert!(is_render!([u8; 4]));
/// assert!(!is_render!(Opaque));
/// ```
#[macro_export]
macro_rules! is_render {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::render::detect::RenderFallback as _;
        $crate::render::detect::Detect::<$T>::IS_RENDER
    }};
}

/// Whether a concrete type implements [`TextSink`](crate::TextSink).
#[macro_export]
macro_rules! is_text_sink {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::render::detect::TextSinkFallback as _;
        $crate::render::detect::Detect::<$T>::IS_TEXT_SINK
    }};
}
