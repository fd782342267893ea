//! Core data types for iconpack.

mod advancement;
mod exported_icon;
mod item_id;

pub use advancement::{
    advancement_items, Advancement, AdvancementDefinition, AdvancementDisplay, AdvancementIcon,
    AdvancementsByCategory,
};
pub use exported_icon::{ExportedIcon, FLUID_NAMESPACE};
pub use item_id::{ItemId, DEFAULT_NAMESPACE};
