// src/pattern.rs
use crate::parse::{Color, Size};
use crate::utils::draw_line;
use image::RgbImage;
use ndarray::Array2;

/// Tick length relative to the spacing between ticks.
pub const DEFAULT_RATE: f64 = 0.75;

/// Length of the ticks drawn for a given spacing.
#[inline(always)]
pub fn tick_length(step: u32, rate: f64) -> f64 {
    f64::from(step) * rate
}

/// Build the coverage mask of the tick pattern, indexed `[[y, x]]`.
///
/// For every odd spacing `step` below the canvas width, ticks of length
/// `step * rate` are stamped inward from all four edges every `step` pixels.
/// The spacing range is bounded by the width for both the vertical and the
/// horizontal ticks, so on canvases taller than wide the spacings between
/// width and height never occur.
pub fn tick_mask(size: Size, rate: f64) -> Array2<bool> {
    let Size { width, height } = size;
    let (w, h) = (f64::from(width), f64::from(height));
    let mut mask = Array2::from_elem((height as usize, width as usize), false);

    for step in (1..width).step_by(2) {
        let length = tick_length(step, rate);

        // Top and bottom edges
        for i in (0..width).step_by(step as usize) {
            let x = f64::from(i);
            draw_line(&mut mask, (x, 0.0), (x, length));
            draw_line(&mut mask, (x, h), (x, h - length));
        }

        // Left and right edges
        for i in (0..height).step_by(step as usize) {
            let y = f64::from(i);
            draw_line(&mut mask, (0.0, y), (length, y));
            draw_line(&mut mask, (w, y), (w - length, y));
        }
    }

    mask
}

/// Render the tick pattern: `bg` everywhere, `fg` along every tick.
pub fn generate_tick_pattern(size: Size, bg: Color, fg: Color, rate: f64) -> RgbImage {
    let mask = tick_mask(size, rate);

    // Create and fill image buffer
    let mut img = RgbImage::from_pixel(size.width, size.height, bg);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if mask[[y as usize, x as usize]] {
            *pixel = fg;
        }
    }
    img
}
