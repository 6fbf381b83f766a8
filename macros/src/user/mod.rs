//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Render)]` | on struct/enum | Implement `Render` |

pub mod render;
