use super::*;
use super::canvas::{fill_rect, line, outline_rect};
use super::palette::{atlas, egyptian, lapis, stone, vanilla, TRANSPARENT, WHITE};
use image::Rgba;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn blank(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, TRANSPARENT)
}

#[test]
fn fill_rect_is_inclusive() {
    let mut img = blank(8);
    fill_rect(&mut img, 1, 2, 3, 4, RED);
    assert_eq!(*img.get_pixel(1, 2), RED);
    assert_eq!(*img.get_pixel(3, 4), RED);
    assert_eq!(*img.get_pixel(4, 4), TRANSPARENT);
    assert_eq!(*img.get_pixel(3, 5), TRANSPARENT);
    assert_eq!(img.pixels().filter(|p| **p == RED).count(), 9);
}

#[test]
fn fill_rect_clips_and_ignores_inverted_spans() {
    let mut img = blank(4);
    fill_rect(&mut img, -5, -5, 1, 1, RED);
    assert_eq!(img.pixels().filter(|p| **p == RED).count(), 4);

    let mut img = blank(4);
    fill_rect(&mut img, 3, 3, 1, 1, RED);
    assert!(img.pixels().all(|p| *p == TRANSPARENT));
}

#[test]
fn outline_leaves_interior() {
    let mut img = blank(8);
    outline_rect(&mut img, 1, 1, 5, 5, RED);
    assert_eq!(*img.get_pixel(1, 1), RED);
    assert_eq!(*img.get_pixel(5, 3), RED);
    assert_eq!(*img.get_pixel(3, 3), TRANSPARENT);
    assert_eq!(img.pixels().filter(|p| **p == RED).count(), 16);
}

#[test]
fn lines_include_both_ends_in_either_direction() {
    let mut img = blank(8);
    line(&mut img, (6, 2), (6, 0), RED);
    line(&mut img, (4, 7), (1, 7), RED);
    for y in 0..3 {
        assert_eq!(*img.get_pixel(6, y), RED);
    }
    for x in 1..5 {
        assert_eq!(*img.get_pixel(x, 7), RED);
    }
    assert_eq!(img.pixels().filter(|p| **p == RED).count(), 7);

    let mut img = blank(8);
    line(&mut img, (0, 0), (3, 3), RED);
    assert_eq!(*img.get_pixel(0, 0), RED);
    assert_eq!(*img.get_pixel(2, 2), RED);
    assert_eq!(*img.get_pixel(0, 3), TRANSPARENT);
}

#[test]
fn stone_pattern() {
    assert_eq!(block::stone_shade(0, 0), stone::DARK);
    assert_eq!(block::stone_shade(1, 0), stone::LIGHT);
    assert_eq!(block::stone_shade(4, 3), stone::BASE);
    assert_eq!(block::stone_shade(2, 5), stone::LIGHT);
}

#[test]
fn charger_block() {
    let img = block::render(BlockTexture::AncientCharger);
    assert_eq!(img.dimensions(), (16, 16));
    assert_eq!(*img.get_pixel(0, 0), stone::GOLD);
    assert_eq!(*img.get_pixel(15, 8), stone::GOLD);
    assert_eq!(*img.get_pixel(5, 5), stone::CHARGER_ACCENT);
    assert_eq!(*img.get_pixel(10, 10), stone::CHARGER_ACCENT);
    assert_eq!(*img.get_pixel(7, 7), WHITE);
    assert_eq!(*img.get_pixel(3, 3), stone::DARK);
    assert_eq!(*img.get_pixel(4, 3), stone::BASE);
    assert_eq!(*img.get_pixel(2, 5), stone::LIGHT);
}

#[test]
fn battery_block() {
    let img = block::render(BlockTexture::AncientBattery);
    assert_eq!(*img.get_pixel(0, 0), stone::DARK);
    assert_eq!(*img.get_pixel(1, 2), stone::DARK);
    assert_eq!(*img.get_pixel(1, 14), stone::DARK);
    assert_eq!(*img.get_pixel(6, 3), stone::BATTERY_ACCENT);
    assert_eq!(*img.get_pixel(9, 12), stone::BATTERY_ACCENT);
    assert_eq!(*img.get_pixel(3, 4), stone::BASE);
    assert_eq!(*img.get_pixel(2, 5), stone::LIGHT);
}

#[test]
fn gui_textures_use_a_transparent_atlas() {
    for gui in [GuiTexture::PrimalCatalyst, GuiTexture::PyramidCore, GuiTexture::AncientBattery] {
        for style in [Style::Egyptian, Style::Atlas, Style::Vanilla] {
            let img = gui::render(gui, style);
            assert_eq!(img.dimensions(), (256, 256));
            assert_eq!(*img.get_pixel(255, 255), TRANSPARENT);
            assert_eq!(*img.get_pixel(100, 200), TRANSPARENT);
        }
    }
}

#[test]
fn egyptian_primal_catalyst() {
    let img = gui::render(GuiTexture::PrimalCatalyst, Style::Egyptian);
    assert_eq!(*img.get_pixel(0, 0), egyptian::GOLD_LIGHT);
    assert_eq!(*img.get_pixel(1, 1), egyptian::GOLD);
    assert_eq!(*img.get_pixel(6, 2), egyptian::GOLD_DARK);
    assert_eq!(*img.get_pixel(8, 2), egyptian::GOLD);
    assert_eq!(*img.get_pixel(8, 163), egyptian::GOLD);
    assert_eq!(*img.get_pixel(5, 5), egyptian::SAND);

    assert_eq!(*img.get_pixel(7, 13), egyptian::GOLD_DARK);
    assert_eq!(*img.get_pixel(8, 14), egyptian::GOLD);
    assert_eq!(*img.get_pixel(10, 20), egyptian::ENERGY_EMPTY);

    assert_eq!(*img.get_pixel(32, 17), egyptian::SLOT_EDGE);
    assert_eq!(*img.get_pixel(40, 25), egyptian::SLOT);
    assert_eq!(*img.get_pixel(49, 34), egyptian::GOLD_DARK);
    assert_eq!(*img.get_pixel(90, 45), egyptian::SAND_DARK);

    assert_eq!(*img.get_pixel(180, 20), egyptian::ENERGY_FULL);
    assert_eq!(*img.get_pixel(198, 45), egyptian::ENERGY_FULL);
}

#[test]
fn egyptian_pyramid_core() {
    let img = gui::render(GuiTexture::PyramidCore, Style::Egyptian);
    assert_eq!(*img.get_pixel(88, 43), egyptian::SLOT);
    assert_eq!(*img.get_pixel(40, 25), egyptian::LAPIS_DARK);
    assert_eq!(*img.get_pixel(180, 40), egyptian::ENERGY_FULL);
    assert_eq!(*img.get_pixel(198, 45), TRANSPARENT);
}

#[test]
fn lapis_ancient_battery() {
    let img = gui::render(GuiTexture::AncientBattery, Style::Egyptian);
    assert_eq!(*img.get_pixel(0, 0), lapis::GOLD_LIGHT);
    assert_eq!(*img.get_pixel(175, 0), lapis::GOLD_DARK);
    assert_eq!(*img.get_pixel(0, 165), lapis::GOLD_DARK);
    assert_eq!(*img.get_pixel(50, 40), lapis::LAPIS);
    assert_eq!(*img.get_pixel(8, 84), lapis::SLOT_EDGE);
    assert_eq!(*img.get_pixel(9, 85), lapis::SLOT);

    assert_eq!(*img.get_pixel(176, 14), Rgba([255, 150, 30, 255]));
    assert_eq!(*img.get_pixel(178, 15), Rgba([254, 150, 30, 255]));
    assert_eq!(*img.get_pixel(183, 44), Rgba([230, 175, 30, 255]));
    assert_eq!(*img.get_pixel(178, 14), lapis::GLOW);
}

#[test]
fn atlas_primal_catalyst() {
    let img = gui::render(GuiTexture::PrimalCatalyst, Style::Atlas);
    assert_eq!(*img.get_pixel(0, 0), atlas::GOLD_LIGHT);
    assert_eq!(*img.get_pixel(175, 0), atlas::GOLD_DARK);
    assert_eq!(*img.get_pixel(33, 18), atlas::GOLD_DARK);
    assert_eq!(*img.get_pixel(40, 25), atlas::SLOT_BLUE);
    assert_eq!(*img.get_pixel(50, 35), atlas::GOLD_LIGHT);
    assert_eq!(*img.get_pixel(70, 35), atlas::ARROW_SHADOW);
    assert_eq!(*img.get_pixel(8, 84), atlas::SLOT_GRAY_DARK);
    assert_eq!(*img.get_pixel(10, 86), atlas::SLOT_GRAY);
    assert_eq!(*img.get_pixel(8, 142), atlas::SLOT_GRAY_DARK);
    assert_eq!(*img.get_pixel(177, 20), atlas::ENERGY_HIGHLIGHT);
    assert_eq!(*img.get_pixel(180, 20), atlas::ENERGY_FILL);
    assert_eq!(*img.get_pixel(180, 45), atlas::GOLD_LIGHT);
}

#[test]
fn vanilla_ancient_battery() {
    let img = gui::render(GuiTexture::AncientBattery, Style::Vanilla);
    assert_eq!(*img.get_pixel(0, 0), vanilla::BORDER_LIGHT);
    assert_eq!(*img.get_pixel(175, 0), vanilla::BORDER_DARK);
    assert_eq!(*img.get_pixel(5, 5), vanilla::BASE);
    assert_eq!(*img.get_pixel(26, 20), vanilla::SLOT_BORDER);
    assert_eq!(*img.get_pixel(43, 37), vanilla::SLOT_BORDER);
    assert_eq!(*img.get_pixel(27, 21), vanilla::SLOT_SHADOW);
    assert_eq!(*img.get_pixel(30, 30), vanilla::SLOT_INNER);
    assert_eq!(*img.get_pixel(66, 14), vanilla::BORDER_DARK);
    assert_eq!(*img.get_pixel(70, 20), vanilla::ENERGY_BG);
    assert_eq!(*img.get_pixel(8, 142), atlas::SLOT_GRAY_DARK);
    assert_eq!(*img.get_pixel(180, 20), TRANSPARENT);
}

#[test]
fn texture_names_and_paths() {
    let names: Vec<String> = Texture::ALL.iter().map(|t| t.to_string()).collect();
    assert_eq!(names[0], "gui/primal-catalyst");
    assert_eq!(names[4], "block/ancient-battery");
    assert_eq!(Texture::Block(BlockTexture::AncientCharger).asset_path(), "textures/block/ancient_charger.png");
}

#[test]
fn generate_writes_png_below_out_dir() {
    let out_dir = std::env::temp_dir().join(format!("alien-textures-gen-{}", std::process::id()));
    let texture = Texture::Block(BlockTexture::AncientCharger);

    let path = generate(texture, Style::Egyptian, &out_dir).unwrap();
    assert_eq!(path, out_dir.join("textures/block/ancient_charger.png"));

    let loaded = util::load_rgba(&path).unwrap();
    assert_eq!(loaded, texture.render(Style::Egyptian));

    std::fs::remove_dir_all(&out_dir).unwrap();
}
