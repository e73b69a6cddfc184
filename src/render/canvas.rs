use image::{Rgb, RgbImage};

use crate::models::GradientSpec;

/// Allocate an opaque canvas filled with `base`
pub fn new_canvas(width: u32, height: u32, base: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, base)
}

/// Paint every scanline with its gradient color
pub fn fill_vertical_gradient(canvas: &mut RgbImage, spec: &GradientSpec) {
    let height = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = spec.color_at(y, height);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}
