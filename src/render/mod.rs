//! # Capability-gated rendering
//!
//! Any type can take part in text output by implementing [`Render`], a
//! single `render(&self, sink)` method. Whether a type qualifies is decided
//! at compile time by the trait bound; there is no runtime type check and no
//! shared base type.
//!
//! ## Module Structure
//!
//! ```text
//! render/
//! ├── sink.rs       - TextSink, StackSink, FmtSink
//! ├── capability.rs - Render + built-in impls, Shown, impl_render_via_display!
//! ├── stream.rs     - render(), Out <<, render_all!
//! ├── display.rs    - Rendered (Display bridge), RenderExt
//! └── detect.rs     - is_render!, is_text_sink! (feature = "detect")
//! ```

pub mod capability;
pub mod display;
pub mod sink;
pub mod stream;

#[cfg(feature = "detect")]
pub mod detect;

pub use capability::{Render, Shown};
pub use display::{RenderExt, Rendered};
pub use sink::{FmtSink, StackSink, TextSink};
pub use stream::{Out, render};

#[doc(hidden)]
pub use capability::render_display as __render_display;
