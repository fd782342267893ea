//! JSON emitters for the resource pack.

mod font;
mod json;
mod models;
mod pack;

pub use font::{write_font, FontMapping};
pub use json::{write_json, write_json_if_absent, WriteOutcome};
pub use models::{
    write_baked_advancement_models, write_composite_advancement_models, GeneratedModel,
    ItemAssets, ItemDefinition, ItemModel, ModelReport,
};
pub use pack::{write_items_atlas, write_pack_metadata};
