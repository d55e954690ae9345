pub mod block;
pub mod canvas;
pub mod gui;
pub mod palette;

use std::fmt;
use std::fmt::Formatter;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::RgbaImage;

use crate::util;
use block::BlockTexture;
use gui::{GuiTexture, Style};

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Texture {
    Gui(GuiTexture),
    Block(BlockTexture),
}

impl Texture {
    pub const ALL: [Texture; 5] = [
        Texture::Gui(GuiTexture::PrimalCatalyst),
        Texture::Gui(GuiTexture::PyramidCore),
        Texture::Gui(GuiTexture::AncientBattery),
        Texture::Block(BlockTexture::AncientCharger),
        Texture::Block(BlockTexture::AncientBattery),
    ];

    /// Location below the mod's asset directory
    pub fn asset_path(&self) -> &'static str {
        match self {
            Texture::Gui(GuiTexture::PrimalCatalyst) => { "textures/gui/primal_catalyst_gui.png" },
            Texture::Gui(GuiTexture::PyramidCore) => { "textures/gui/pyramid_core_gui.png" },
            Texture::Gui(GuiTexture::AncientBattery) => { "textures/gui/ancient_battery_gui.png" },
            Texture::Block(BlockTexture::AncientCharger) => { "textures/block/ancient_charger.png" },
            Texture::Block(BlockTexture::AncientBattery) => { "textures/block/ancient_battery.png" },
        }
    }

    /// Block textures have a single style
    pub fn render(&self, style: Style) -> RgbaImage {
        match self {
            Texture::Gui(g) => gui::render(*g, style),
            Texture::Block(b) => block::render(*b),
        }
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Texture::Gui(GuiTexture::PrimalCatalyst) => { write!(f, "gui/primal-catalyst") },
            Texture::Gui(GuiTexture::PyramidCore) => { write!(f, "gui/pyramid-core") },
            Texture::Gui(GuiTexture::AncientBattery) => { write!(f, "gui/ancient-battery") },
            Texture::Block(BlockTexture::AncientCharger) => { write!(f, "block/ancient-charger") },
            Texture::Block(BlockTexture::AncientBattery) => { write!(f, "block/ancient-battery") },
        }
    }
}

/// Renders a texture and writes it below `out_dir`, returning the written path
pub fn generate(texture: Texture, style: Style, out_dir: &Path) -> Result<PathBuf> {
    let img = texture.render(style);
    let path = out_dir.join(texture.asset_path());
    util::save_png(&path, &img)?;
    Ok(path)
}

#[cfg(test)]
mod tests;
