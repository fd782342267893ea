//! iconpack - Minecraft item icon resource pack generator
//!
//! Turns icon exporter renders and advancement definitions into a resource
//! pack: copied and composited textures, item models, an items atlas and a
//! bitmap font that maps every icon to a private use character.

pub mod atlas;
pub mod cli;
pub mod collect;
pub mod config;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use atlas::{extract_atlas_mappings, AtlasMapping};
pub use config::{AdvancementStyle, ModelSource, PackConfig};
pub use emit::FontMapping;
pub use error::{PackError, Result};
pub use pipeline::{generate, generate_atlas_mappings, BuildReport};
pub use render::Compositor;
pub use types::{Advancement, AdvancementsByCategory, ExportedIcon, ItemId};
