//! Procedural macros for tola-prims
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Render)]` | struct/enum | Implement the `Render` capability |
//! | `tuple_seq_impls!(N)` | - | `IntoFixedSeq` impls for tuples of arity 1..=N |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Render)]
//! struct Span {
//!     start: u32,
//!     end: u32,
//!     #[render(skip)]
//!     cache: Cache,
//! }
//! // renders as: Span { start: 3, end: 9 }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `IntoFixedSeq<CT>` impls for tuples `(A0,)` up to `(A0, .., A{N-1})`.
///
/// Must be invoked where `IntoFixedSeq` is in scope.
///
/// # Usage
/// ```ignore
/// tuple_seq_impls!(16);
/// ```
#[proc_macro]
pub fn tuple_seq_impls(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tuple_seq::TupleSeqInput);
    inner::tuple_seq::expand_tuple_seq_impls(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive the `Render` capability.
///
/// Output follows the shape of the type:
///
/// | Shape | Rendering |
/// |-------|-----------|
/// | `struct P { x, y }` | `P { x: <x>, y: <y> }` |
/// | `struct P(a, b)` | `P(<a>, <b>)` |
/// | `struct P;` | `P` |
/// | `enum E { V { .. } }` | variant rendered like a struct |
///
/// # Attributes
///
/// - `#[render(skip)]` on a field: leave it out.
/// - `#[render(transparent)]` on a struct with one rendered field: render
///   only that field.
///
/// Every type parameter gets a `Render` bound.
#[proc_macro_derive(Render, attributes(render))]
pub fn derive_render(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::render::expand_derive_render(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
