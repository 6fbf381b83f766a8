// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - attrs: `#[render(...)]` attribute parsing

mod attrs;

pub use attrs::*;
