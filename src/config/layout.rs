//! Fixed file layout of the inputs and of the generated pack.

use std::path::{Path, PathBuf};

/// Paths inside the input directory.
#[derive(Debug, Clone)]
pub struct InputLayout {
    root: PathBuf,
}

impl InputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Written by the game with F3+S into `screenshots/debug`.
    pub fn atlas_dump(&self) -> PathBuf {
        self.root.join("minecraft_textures_atlas_items.png.txt")
    }

    pub fn advancements_dir(&self) -> PathBuf {
        self.root.join("advancement")
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.root.join("icon-exports-x16")
    }

    pub fn advancement_icons_dir(&self) -> PathBuf {
        self.root.join("icon-exports-x16-advancements")
    }

    pub fn background(&self) -> PathBuf {
        self.root.join("advancement_background.png")
    }

    pub fn item_assets(&self) -> PathBuf {
        self.root
            .join("assets")
            .join("minecraft")
            .join("items")
            .join("_all.json")
    }

    pub fn pack_icon(&self) -> PathBuf {
        self.root.join("pack.png")
    }
}

/// Paths inside the generated resource pack.
#[derive(Debug, Clone)]
pub struct PackLayout {
    root: PathBuf,
}

impl PackLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mcmeta(&self) -> PathBuf {
        self.root.join("pack.mcmeta")
    }

    pub fn pack_icon(&self) -> PathBuf {
        self.root.join("pack.png")
    }

    /// `assets/<namespace>`
    pub fn assets(&self, namespace: &str) -> PathBuf {
        self.root.join("assets").join(namespace)
    }

    /// `assets/minecraft/textures/<dir>`
    pub fn textures(&self, dir: &str) -> PathBuf {
        self.assets("minecraft").join("textures").join(dir)
    }

    /// Plain and advancement-variant icons used by the font.
    pub fn icons_dir(&self) -> PathBuf {
        self.textures("icons")
    }

    pub fn block_item_dir(&self) -> PathBuf {
        self.textures("block_item")
    }

    pub fn advancement_item_dir(&self) -> PathBuf {
        self.textures("advancement_item")
    }

    pub fn items_atlas(&self) -> PathBuf {
        self.assets("minecraft").join("atlases").join("items.json")
    }

    pub fn items_dir(&self, namespace: &str) -> PathBuf {
        self.assets(namespace).join("items")
    }

    pub fn item_models_dir(&self, namespace: &str) -> PathBuf {
        self.assets(namespace).join("models").join("item")
    }

    pub fn font(&self) -> PathBuf {
        self.assets("minecraft").join("font").join("default.json")
    }
}
