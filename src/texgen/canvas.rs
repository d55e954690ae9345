//! Drawing primitives. Coordinates are inclusive on both ends unless the
//! function takes a width and height. Everything clips at the image edge
//! and overwrites pixels, alpha included.

use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut},
    point::Point,
    rect::Rect,
};

fn span(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Rect> {
    if x1 < x0 || y1 < y0 {
        return None;
    }
    Some(Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32))
}

pub fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, colour: Rgba<u8>) {
    if let Some(rect) = span(x0, y0, x1, y1) {
        draw_filled_rect_mut(img, rect, colour);
    }
}

pub fn outline_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, colour: Rgba<u8>) {
    if let Some(rect) = span(x0, y0, x1, y1) {
        draw_hollow_rect_mut(img, rect, colour);
    }
}

pub fn fill_rect_wh(img: &mut RgbaImage, x: i32, y: i32, width: i32, height: i32, colour: Rgba<u8>) {
    fill_rect(img, x, y, x + width - 1, y + height - 1, colour);
}

pub fn line(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), colour: Rgba<u8>) {
    if from.0 == to.0 || from.1 == to.1 {
        // axis-aligned, exact
        fill_rect(img, from.0.min(to.0), from.1.min(to.1), from.0.max(to.0), from.1.max(to.1), colour);
    } else {
        draw_line_segment_mut(img, (from.0 as f32, from.1 as f32), (to.0 as f32, to.1 as f32), colour);
    }
}

pub fn fill_polygon(img: &mut RgbaImage, points: &[(i32, i32)], colour: Rgba<u8>) {
    let points: Vec<Point<i32>> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    draw_polygon_mut(img, &points, colour);
}
