#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: String sink, Box impls, render_to_string
// - detect: is_render! / is_text_sink! probes

//! # tola-prims
//!
//! Small compile-time primitives shared across the tola crates.
//!
//! ## Architecture
//!
//! Three independent leaf components. None of them allocates, locks or
//! performs I/O on its own.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  render: capability-gated text output                             |
//! |  - TextSink (String, StackSink, FmtSink)                          |
//! |  - Render capability, render(), Out << value, derive(Render)      |
//! +-------------------------------------------------------------------+
//! |  seq: fixed-size sequence building                                |
//! |  - fixed_seq![CT; ..], build_fixed_seq, FixedSeqBuilder           |
//! +-------------------------------------------------------------------+
//! |  bits: bit reversal                                               |
//! |  - reverse_bits(u32), BitReverse, bit_reverse_permute             |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_prims::prelude::*;
//!
//! #[derive(Render)]
//! struct Point { x: i32, y: i32 }
//!
//! let mut out = String::from("at ");
//! render(&mut out, &Point { x: 1, y: -2 });
//! assert_eq!(out, "at Point { x: 1, y: -2 }");
//!
//! let seq: [u64; 3] = fixed_seq![u64; 1u8, 2u16, 3u32];
//! assert_eq!(seq, [1, 2, 3]);
//!
//! assert_eq!(reverse_bits(1), 0x8000_0000);
//! ```

// Allow `::tola_prims` to work inside the crate itself
extern crate self as tola_prims;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bits;
pub mod render;
pub mod seq;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use bits::{BitReverse, BitsError, bit_reverse_permute, reverse_bits};
pub use render::{
    FmtSink, Out, Render, RenderExt, Rendered, Shown, StackSink, TextSink, render,
};
pub use seq::{FixedSeq, FixedSeqBuilder, IntoFixedSeq, SeqError, build_fixed_seq, try_fixed_seq};

// Re-export proc-macros
pub use macros::Render;

/// Common items for everyday use.
pub mod prelude {
    pub use crate::bits::{BitReverse, reverse_bits};
    pub use crate::render::{Out, Render, RenderExt, TextSink, render};
    pub use crate::seq::{FixedSeq, IntoFixedSeq, build_fixed_seq};
    pub use crate::{fixed_seq, render_all};
    pub use macros::Render;
}
