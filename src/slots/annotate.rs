use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_hollow_rect_mut, rect::Rect};

use crate::slots::SlotCandidate;

pub const MARKER: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Copies the image and outlines every slot's bounding box
pub fn annotate(image: &RgbaImage, slots: &[SlotCandidate]) -> RgbaImage {
    let mut out = image.clone();
    for slot in slots {
        let rect = Rect::at(slot.x_min as i32, slot.y_min as i32)
            .of_size(slot.width(), slot.height());
        draw_hollow_rect_mut(&mut out, rect, MARKER);
    }
    out
}
