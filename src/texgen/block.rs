use image::{Rgba, RgbaImage};

use crate::texgen::canvas::fill_rect;
use crate::texgen::palette::{stone, WHITE};

pub const BLOCK_SIZE: u32 = 16;

#[derive(Clone,Copy,Debug,PartialEq,Eq,clap::ValueEnum)]
pub enum BlockTexture {
    AncientCharger,
    AncientBattery,
}

pub fn stone_shade(x: u32, y: u32) -> Rgba<u8> {
    if (x + y) % 3 == 0 {
        stone::DARK
    } else if (x * y) % 5 == 0 {
        stone::LIGHT
    } else {
        stone::BASE
    }
}

pub fn render(block: BlockTexture) -> RgbaImage {
    let mut img = RgbaImage::from_fn(BLOCK_SIZE, BLOCK_SIZE, stone_shade);
    match block {
        BlockTexture::AncientCharger => {
            fill_rect(&mut img, 0, 0, 15, 1, stone::GOLD);
            fill_rect(&mut img, 0, 14, 15, 15, stone::GOLD);
            fill_rect(&mut img, 0, 0, 1, 15, stone::GOLD);
            fill_rect(&mut img, 14, 0, 15, 15, stone::GOLD);

            fill_rect(&mut img, 5, 5, 10, 10, stone::CHARGER_ACCENT);
            // spark
            img.put_pixel(7, 7, WHITE);
        },
        BlockTexture::AncientBattery => {
            fill_rect(&mut img, 0, 0, 15, 2, stone::DARK);
            fill_rect(&mut img, 0, 13, 15, 15, stone::DARK);
            fill_rect(&mut img, 6, 3, 9, 12, stone::BATTERY_ACCENT);
        },
    }
    img
}
