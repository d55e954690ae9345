use image::{Rgba, RgbaImage};

use crate::texgen::canvas::{fill_polygon, fill_rect, fill_rect_wh, line, outline_rect};
use crate::texgen::palette::{atlas, egyptian, lapis, vanilla, TRANSPARENT};

pub const ATLAS_SIZE: u32 = 256;
pub const PANEL_WIDTH: i32 = 176;
pub const PANEL_HEIGHT: i32 = 166;
pub const SLOT_SIZE: i32 = 18;
pub const INVENTORY_X: i32 = 8;
pub const INVENTORY_Y: i32 = 84;
pub const HOTBAR_Y: i32 = 142;
/// Sprites drawn over the panel at runtime live right of it
pub const SPRITE_X: i32 = 176;

#[derive(Clone,Copy,Debug,PartialEq,Eq,clap::ValueEnum)]
pub enum GuiTexture {
    PrimalCatalyst,
    PyramidCore,
    AncientBattery,
}

#[derive(Clone,Copy,Debug,PartialEq,Eq,clap::ValueEnum)]
pub enum Style {
    /// Sand and lapis panels with gold trim
    Egyptian,
    /// Tan panels with vanilla-grey player inventory
    Atlas,
    /// Plain grey panels, no atlas sprites
    Vanilla,
}

pub fn render(gui: GuiTexture, style: Style) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(ATLAS_SIZE, ATLAS_SIZE, TRANSPARENT);
    match (style, gui) {
        (Style::Egyptian, GuiTexture::PrimalCatalyst) => { egyptian_primal_catalyst(&mut img) },
        (Style::Egyptian, GuiTexture::PyramidCore) => { egyptian_pyramid_core(&mut img) },
        (Style::Egyptian, GuiTexture::AncientBattery) => { lapis_ancient_battery(&mut img) },
        (Style::Atlas, GuiTexture::PrimalCatalyst) => { atlas_primal_catalyst(&mut img) },
        (Style::Atlas, GuiTexture::PyramidCore) => { atlas_pyramid_core(&mut img) },
        (Style::Atlas, GuiTexture::AncientBattery) => { atlas_ancient_battery(&mut img) },
        (Style::Vanilla, GuiTexture::PrimalCatalyst) => { vanilla_primal_catalyst(&mut img) },
        (Style::Vanilla, GuiTexture::PyramidCore) => { vanilla_pyramid_core(&mut img) },
        (Style::Vanilla, GuiTexture::AncientBattery) => { vanilla_ancient_battery(&mut img) },
    }
    img
}

fn egyptian_border(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32) {
    outline_rect(img, x, y, x + w - 1, y + h - 1, egyptian::GOLD_LIGHT);
    outline_rect(img, x + 1, y + 1, x + w - 2, y + h - 2, egyptian::GOLD);
    outline_rect(img, x + 2, y + 2, x + w - 3, y + h - 3, egyptian::GOLD_DARK);
}

/// Dashes along the top and bottom border
fn hieroglyphs(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32) {
    let step = 8;
    for i in ((x + step)..(x + w - step)).step_by((step * 2) as usize) {
        line(img, (i, y + 2), (i + 3, y + 2), egyptian::GOLD);
        line(img, (i, y + h - 3), (i + 3, y + h - 3), egyptian::GOLD);
    }
}

/// Inverted bevel: shadow on top/left, gold below/right
fn egyptian_slot(img: &mut RgbaImage, x: i32, y: i32) {
    let end = SLOT_SIZE - 1;
    fill_rect(img, x, y, x + end, y + end, egyptian::SLOT);
    line(img, (x, y), (x + end, y), egyptian::SLOT_EDGE);
    line(img, (x, y), (x, y + end), egyptian::SLOT_EDGE);
    line(img, (x, y + end), (x + end, y + end), egyptian::GOLD_DARK);
    line(img, (x + end, y), (x + end, y + end), egyptian::GOLD_DARK);
}

fn egyptian_energy_bar(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32) {
    fill_rect(img, x, y, x + w - 1, y + h - 1, egyptian::ENERGY_EMPTY);
    outline_rect(img, x, y, x + w - 1, y + h - 1, egyptian::GOLD);
    outline_rect(img, x - 1, y - 1, x + w, y + h, egyptian::GOLD_DARK);
}

fn egyptian_arrow(img: &mut RgbaImage, x: i32, y: i32, colour: Rgba<u8>) {
    fill_rect(img, x, y + 6, x + 18, y + 10, colour);
    for i in 0..8 {
        line(img, (x + 18 + i, y + 8 - i), (x + 18 + i, y + 8 + i), colour);
    }
}

/// Background, border, machine panel and empty energy bar
fn egyptian_frame(img: &mut RgbaImage) {
    fill_rect(img, 0, 0, PANEL_WIDTH - 1, PANEL_HEIGHT - 1, egyptian::SAND);
    egyptian_border(img, 0, 0, PANEL_WIDTH, PANEL_HEIGHT);
    hieroglyphs(img, 0, 0, PANEL_WIDTH, PANEL_HEIGHT);

    let (panel_x, panel_y, panel_w, panel_h) = (28, 14, 120, 60);
    fill_rect(img, panel_x, panel_y, panel_x + panel_w - 1, panel_y + panel_h - 1, egyptian::LAPIS_DARK);
    outline_rect(img, panel_x, panel_y, panel_x + panel_w - 1, panel_y + panel_h - 1, egyptian::GOLD);

    egyptian_energy_bar(img, 8, 14, 14, 60);
}

fn egyptian_inventory(img: &mut RgbaImage) {
    outline_rect(img, INVENTORY_X - 1, INVENTORY_Y - 1, 169, INVENTORY_Y + 53, egyptian::GOLD_DARK);
    for row in 0..3 {
        for col in 0..9 {
            egyptian_slot(img, INVENTORY_X + col * SLOT_SIZE, INVENTORY_Y + row * SLOT_SIZE);
        }
    }

    outline_rect(img, INVENTORY_X - 1, HOTBAR_Y - 1, 169, HOTBAR_Y + 17, egyptian::GOLD_DARK);
    for col in 0..9 {
        egyptian_slot(img, INVENTORY_X + col * SLOT_SIZE, HOTBAR_Y);
    }
}

fn egyptian_energy_sprite(img: &mut RgbaImage) {
    fill_rect_wh(img, SPRITE_X, 14, 14, 60, egyptian::ENERGY_FULL);
}

fn egyptian_primal_catalyst(img: &mut RgbaImage) {
    egyptian_frame(img);

    for y in [17, 37, 57] {
        egyptian_slot(img, 32, y);
    }
    egyptian_arrow(img, 78, 37, egyptian::SAND_DARK);
    egyptian_slot(img, 125, 29);

    egyptian_inventory(img);

    egyptian_arrow(img, SPRITE_X, 37, egyptian::ENERGY_FULL);
    egyptian_energy_sprite(img);
}

fn egyptian_pyramid_core(img: &mut RgbaImage) {
    egyptian_frame(img);
    egyptian_slot(img, 80, 35);
    egyptian_inventory(img);
    egyptian_energy_sprite(img);
}

/// Slot with a light top/left edge over a dark body
fn lapis_slot(img: &mut RgbaImage, x: i32, y: i32) {
    let end = SLOT_SIZE - 1;
    fill_rect(img, x, y, x + end, y + end, lapis::SLOT);
    fill_rect(img, x, y, x + end, y, lapis::SLOT_EDGE);
    fill_rect(img, x, y, x, y + end, lapis::SLOT_EDGE);
}

fn lapis_ancient_battery(img: &mut RgbaImage) {
    let (w, h) = (PANEL_WIDTH, PANEL_HEIGHT);
    fill_rect(img, 0, 0, w - 1, h - 1, lapis::SAND);
    fill_rect(img, 0, 0, w - 1, 3, lapis::GOLD_LIGHT);
    fill_rect(img, 0, 0, 3, h - 1, lapis::GOLD_LIGHT);
    fill_rect(img, 0, h - 4, w - 1, h - 1, lapis::GOLD_DARK);
    fill_rect(img, w - 4, 0, w - 1, h - 1, lapis::GOLD_DARK);

    let (px, py, pw, ph) = (26, 14, 124, 60);
    fill_rect(img, px, py, px + pw - 1, py + ph - 1, lapis::LAPIS);
    fill_rect(img, px, py, px + pw - 1, py + 2, lapis::LAPIS_LIGHT);
    fill_rect(img, px, py, px + 2, py + ph - 1, lapis::LAPIS_LIGHT);
    fill_rect(img, px, py + ph - 3, px + pw - 1, py + ph - 1, lapis::LAPIS_SHADOW);
    fill_rect(img, px + pw - 3, py, px + pw - 1, py + ph - 1, lapis::LAPIS_SHADOW);

    let (bx, by, bw, bh) = (8, 14, 14, 60);
    fill_rect(img, bx, by, bx + bw - 1, by + bh - 1, lapis::BAR);
    fill_rect(img, bx, by, bx + bw - 1, by + 1, lapis::BAR_LIGHT);
    fill_rect(img, bx, by + bh - 2, bx + bw - 1, by + bh - 1, lapis::BAR_SHADOW);

    // charge slot
    lapis_slot(img, 79, 34);

    for row in 0..3 {
        for col in 0..9 {
            lapis_slot(img, INVENTORY_X + col * SLOT_SIZE, INVENTORY_Y + row * SLOT_SIZE);
        }
    }
    for col in 0..9 {
        lapis_slot(img, INVENTORY_X + col * SLOT_SIZE, HOTBAR_Y);
    }

    // orange at the top fading to yellow
    let (ex, ey, rows) = (SPRITE_X, 14, 60);
    for y in 0..rows {
        let ratio = y as f64 / rows as f64;
        let r = (255.0 - ratio * 50.0) as u8;
        let g = (150.0 + ratio * 50.0) as u8;
        fill_rect(img, ex, ey + y, ex + 13, ey + y, Rgba([r, g, 30, 255]));
    }
    for y in (0..rows).step_by(4) {
        fill_rect(img, ex + 2, ey + y, ex + 4, ey + y, lapis::GLOW);
    }
}

fn atlas_background(img: &mut RgbaImage) {
    let (w, h) = (PANEL_WIDTH, PANEL_HEIGHT);
    fill_rect_wh(img, 0, 0, w, h, atlas::TAN);
    line(img, (0, 0), (w - 1, 0), atlas::GOLD_LIGHT);
    line(img, (0, 0), (0, h - 1), atlas::GOLD_LIGHT);
    line(img, (w - 1, 0), (w - 1, h - 1), atlas::GOLD_DARK);
    line(img, (0, h - 1), (w - 1, h - 1), atlas::GOLD_DARK);
}

fn atlas_bevel_box(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, body: Rgba<u8>, shadow: Rgba<u8>, light: Rgba<u8>) {
    fill_rect_wh(img, x, y, w, h, body);
    line(img, (x, y), (x + w - 1, y), shadow);
    line(img, (x, y), (x, y + h - 1), shadow);
    line(img, (x + w - 1, y + h - 1), (x + w - 1, y), light);
    line(img, (x + w - 1, y + h - 1), (x, y + h - 1), light);
}

fn atlas_custom_slot(img: &mut RgbaImage, x: i32, y: i32) {
    atlas_bevel_box(img, x, y, SLOT_SIZE, SLOT_SIZE, atlas::SLOT_BLUE, atlas::GOLD_DARK, atlas::GOLD_LIGHT);
}

fn atlas_large_slot(img: &mut RgbaImage, x: i32, y: i32) {
    atlas_bevel_box(img, x, y, 26, 26, atlas::SLOT_BLUE, atlas::GOLD_DARK, atlas::GOLD_LIGHT);
}

fn grey_player_slot(img: &mut RgbaImage, x: i32, y: i32) {
    atlas_bevel_box(img, x, y, SLOT_SIZE, SLOT_SIZE, atlas::SLOT_GRAY, atlas::SLOT_GRAY_DARK, atlas::SLOT_GRAY_LIGHT);
}

fn atlas_player_slots(img: &mut RgbaImage) {
    for row in 0..3 {
        for col in 0..9 {
            grey_player_slot(img, INVENTORY_X + col * SLOT_SIZE, INVENTORY_Y + row * SLOT_SIZE);
        }
    }
    for col in 0..9 {
        grey_player_slot(img, INVENTORY_X + col * SLOT_SIZE, HOTBAR_Y);
    }
}

fn atlas_energy_background(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32) {
    fill_rect_wh(img, x, y, w, h, atlas::ENERGY_BG);
    outline_rect(img, x, y, x + w - 1, y + h - 1, atlas::GOLD_DARK);
}

/// Full bar sprite; `highlight` is the width of the lit left edge
fn atlas_energy_fill(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, highlight: i32) {
    let (inner_x, inner_y, inner_w, inner_h) = (x + 1, y + 1, w - 2, h - 2);
    fill_rect_wh(img, inner_x, inner_y, inner_w, inner_h, atlas::ENERGY_FILL);
    fill_rect_wh(img, inner_x, inner_y, highlight, inner_h, atlas::ENERGY_HIGHLIGHT);
}

fn atlas_ancient_battery(img: &mut RgbaImage) {
    atlas_background(img);
    // charge, discharge
    atlas_custom_slot(img, 26, 20);
    atlas_custom_slot(img, 26, 50);
    atlas_energy_background(img, 66, 14, 44, 60);
    atlas_player_slots(img);

    atlas_energy_fill(img, SPRITE_X, 0, 44, 60, 4);
}

fn atlas_pyramid_core(img: &mut RgbaImage) {
    atlas_background(img);
    atlas_energy_background(img, 8, 14, 14, 60);
    atlas_custom_slot(img, 80, 35);
    atlas_player_slots(img);

    atlas_energy_fill(img, SPRITE_X, 14, 14, 60, 2);
}

fn atlas_primal_catalyst(img: &mut RgbaImage) {
    atlas_background(img);
    atlas_energy_background(img, 8, 14, 14, 60);
    for y in [18, 38, 58] {
        atlas_custom_slot(img, 33, y);
    }
    atlas_large_slot(img, 126, 30);
    fill_rect_wh(img, 70, 35, 24, 17, atlas::ARROW_SHADOW);
    atlas_player_slots(img);

    atlas_energy_fill(img, SPRITE_X, 14, 14, 60, 2);

    let (ax, ay) = (SPRITE_X, 37);
    fill_polygon(img, &[
        (ax, ay + 4), (ax + 16, ay + 4), (ax + 16, ay), (ax + 24, ay + 8),
        (ax + 16, ay + 17), (ax + 16, ay + 13), (ax, ay + 13),
    ], atlas::GOLD_LIGHT);
}

fn vanilla_background(img: &mut RgbaImage) {
    let (w, h) = (PANEL_WIDTH, PANEL_HEIGHT);
    fill_rect_wh(img, 0, 0, w, h, vanilla::BASE);
    line(img, (0, 0), (w - 1, 0), vanilla::BORDER_LIGHT);
    line(img, (0, 0), (0, h - 1), vanilla::BORDER_LIGHT);
    line(img, (w - 1, 0), (w - 1, h - 1), vanilla::BORDER_DARK);
    line(img, (0, h - 1), (w - 1, h - 1), vanilla::BORDER_DARK);
}

/// Grey rim around a dark 16x16 well with an inner top/left shadow
fn vanilla_machine_slot(img: &mut RgbaImage, x: i32, y: i32) {
    fill_rect_wh(img, x, y, SLOT_SIZE, SLOT_SIZE, vanilla::SLOT_BORDER);
    fill_rect_wh(img, x + 1, y + 1, 16, 16, vanilla::SLOT_INNER);
    line(img, (x + 1, y + 1), (x + 16, y + 1), vanilla::SLOT_SHADOW);
    line(img, (x + 1, y + 1), (x + 1, y + 16), vanilla::SLOT_SHADOW);
}

fn vanilla_energy_placeholder(img: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32) {
    fill_rect_wh(img, x, y, w, h, vanilla::ENERGY_BG);
    outline_rect(img, x, y, x + w - 1, y + h - 1, vanilla::BORDER_DARK);
}

fn vanilla_ancient_battery(img: &mut RgbaImage) {
    vanilla_background(img);
    // charge, discharge
    vanilla_machine_slot(img, 26, 20);
    vanilla_machine_slot(img, 26, 50);
    vanilla_energy_placeholder(img, 66, 14, 44, 60);
    atlas_player_slots(img);
}

fn vanilla_pyramid_core(img: &mut RgbaImage) {
    vanilla_background(img);
    vanilla_energy_placeholder(img, 8, 14, 14, 60);
    vanilla_machine_slot(img, 80, 35);
    atlas_player_slots(img);
}

fn vanilla_primal_catalyst(img: &mut RgbaImage) {
    vanilla_background(img);
    vanilla_energy_placeholder(img, 8, 14, 14, 60);
    for y in [18, 38, 58] {
        vanilla_machine_slot(img, 33, y);
    }
    // output, centred where the large atlas slot sits
    vanilla_machine_slot(img, 130, 34);
    atlas_player_slots(img);
}
