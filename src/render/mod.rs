//! Image handling for iconpack.
//!
//! Advancement icons are composited here; plain icons are copied verbatim
//! by `collect` and never decoded.

mod composite;
mod png;

pub use composite::{
    centered_offset, composite_advancement_icons, paste_with_alpha_mask, Compositor,
};
pub use png::{load_rgba, write_png};
