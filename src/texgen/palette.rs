use image::Rgba;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Gold and lapis on sand, three-ring borders
pub mod egyptian {
    use image::Rgba;

    pub const GOLD_DARK: Rgba<u8> = Rgba([139, 115, 50, 255]);
    pub const GOLD: Rgba<u8> = Rgba([212, 175, 55, 255]);
    pub const GOLD_LIGHT: Rgba<u8> = Rgba([255, 223, 136, 255]);
    pub const LAPIS_DARK: Rgba<u8> = Rgba([26, 64, 103, 255]);
    pub const SAND: Rgba<u8> = Rgba([194, 178, 128, 255]);
    pub const SAND_DARK: Rgba<u8> = Rgba([139, 128, 92, 255]);
    pub const SLOT: Rgba<u8> = Rgba([20, 20, 20, 255]);
    pub const SLOT_EDGE: Rgba<u8> = Rgba([60, 60, 60, 255]);
    pub const ENERGY_FULL: Rgba<u8> = Rgba([255, 200, 50, 255]);
    pub const ENERGY_EMPTY: Rgba<u8> = Rgba([40, 40, 40, 255]);
}

/// Flat lapis panel with 3D bevels, used by the battery
pub mod lapis {
    use image::Rgba;

    pub const SAND: Rgba<u8> = Rgba([194, 178, 128, 255]);
    pub const GOLD_LIGHT: Rgba<u8> = Rgba([212, 175, 55, 255]);
    pub const GOLD_DARK: Rgba<u8> = Rgba([139, 115, 50, 255]);
    pub const LAPIS: Rgba<u8> = Rgba([38, 97, 156, 255]);
    pub const LAPIS_LIGHT: Rgba<u8> = Rgba([65, 148, 200, 255]);
    pub const LAPIS_SHADOW: Rgba<u8> = Rgba([20, 60, 100, 255]);
    pub const SLOT: Rgba<u8> = Rgba([55, 55, 70, 255]);
    pub const SLOT_EDGE: Rgba<u8> = Rgba([139, 139, 139, 255]);
    pub const BAR: Rgba<u8> = Rgba([40, 40, 50, 255]);
    pub const BAR_LIGHT: Rgba<u8> = Rgba([60, 60, 70, 255]);
    pub const BAR_SHADOW: Rgba<u8> = Rgba([20, 20, 30, 255]);
    pub const GLOW: Rgba<u8> = Rgba([255, 255, 200, 128]);
}

/// Tan panels with vanilla grey player slots
pub mod atlas {
    use image::Rgba;

    pub const TAN: Rgba<u8> = Rgba([0xd0, 0xc0, 0xa0, 255]);
    pub const GOLD_LIGHT: Rgba<u8> = Rgba([0xe0, 0xd0, 0x60, 255]);
    pub const GOLD_DARK: Rgba<u8> = Rgba([0xa0, 0x90, 0x30, 255]);
    pub const SLOT_BLUE: Rgba<u8> = Rgba([0x20, 0x30, 0x50, 255]);
    // SLOT_BLUE scaled by 0.7
    pub const ARROW_SHADOW: Rgba<u8> = Rgba([0x16, 0x21, 0x38, 255]);
    pub const SLOT_GRAY: Rgba<u8> = Rgba([0x8b, 0x8b, 0x8b, 255]);
    pub const SLOT_GRAY_DARK: Rgba<u8> = Rgba([0x37, 0x37, 0x37, 255]);
    pub const SLOT_GRAY_LIGHT: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 255]);
    pub const ENERGY_BG: Rgba<u8> = Rgba([0x14, 0x14, 0x14, 255]);
    pub const ENERGY_FILL: Rgba<u8> = Rgba([0x00, 0xff, 0x00, 255]);
    pub const ENERGY_HIGHLIGHT: Rgba<u8> = Rgba([0x40, 0xff, 0x40, 255]);
}

/// Stock grey container look
pub mod vanilla {
    use image::Rgba;

    pub const BASE: Rgba<u8> = Rgba([0xc6, 0xc6, 0xc6, 255]);
    pub const BORDER_LIGHT: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 255]);
    pub const BORDER_DARK: Rgba<u8> = Rgba([0x55, 0x55, 0x55, 255]);
    pub const SLOT_BORDER: Rgba<u8> = Rgba([0x8b, 0x8b, 0x8b, 255]);
    pub const SLOT_INNER: Rgba<u8> = Rgba([0x37, 0x37, 0x37, 255]);
    pub const SLOT_SHADOW: Rgba<u8> = Rgba([0x27, 0x27, 0x27, 255]);
    pub const ENERGY_BG: Rgba<u8> = Rgba([0x14, 0x14, 0x14, 255]);
}

/// Sandstone block shades
pub mod stone {
    use image::Rgba;

    pub const BASE: Rgba<u8> = Rgba([180, 170, 150, 255]);
    pub const DARK: Rgba<u8> = Rgba([160, 150, 130, 255]);
    pub const LIGHT: Rgba<u8> = Rgba([200, 190, 170, 255]);
    pub const GOLD: Rgba<u8> = Rgba([212, 175, 55, 255]);
    pub const CHARGER_ACCENT: Rgba<u8> = Rgba([0, 200, 255, 255]);
    pub const BATTERY_ACCENT: Rgba<u8> = Rgba([0, 255, 200, 255]);
}
