//! Phone mockup: device frame, screenshot and logo overlay

use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, Rgb, RgbImage, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use std::path::Path;

use crate::error::AssetError;
use crate::models::{MockupFrame, PixelRect};
use crate::render::assets::{Acquired, load_image};

/// Fill the frame body, then stroke `outline_width` rings inward from its edge
pub fn draw_frame(
    canvas: &mut RgbImage,
    frame: &MockupFrame,
    fill: Rgb<u8>,
    outline: Rgb<u8>,
    outline_width: u32,
) {
    draw_filled_rect_mut(canvas, frame.frame.to_rect(), fill);
    for ring in 0..outline_width {
        let rect = frame.frame.inset(ring);
        if rect.width == 0 || rect.height == 0 {
            break;
        }
        draw_hollow_rect_mut(canvas, rect.to_rect(), outline);
    }
}

/// Resize a screenshot to exactly the screen region
pub fn load_screenshot(path: &Path, screen: &PixelRect) -> Acquired<RgbImage> {
    load_image(path).map(|img| {
        img.resize_exact(screen.width, screen.height, FilterType::Lanczos3)
            .to_rgb8()
    })
}

/// Paste the screenshot into the screen region, or flat-fill it on any failure.
///
/// Returns the reason when the fallback was used.
pub fn composite_screenshot(
    canvas: &mut RgbImage,
    screen: &PixelRect,
    path: &Path,
    fallback: Rgb<u8>,
) -> Option<AssetError> {
    match load_screenshot(path, screen) {
        Acquired::Loaded(shot) => {
            imageops::replace(canvas, &shot, screen.x as i64, screen.y as i64);
            None
        }
        Acquired::Fallback(reason) => {
            draw_filled_rect_mut(canvas, screen.to_rect(), fallback);
            Some(reason)
        }
    }
}

/// A logo resized for the overlay
pub struct LogoImage {
    pub pixels: RgbaImage,
    /// Only RGBA sources are masked; grey+alpha sources are pasted opaquely
    pub has_alpha: bool,
}

pub fn prepare_logo(img: DynamicImage, size: u32) -> LogoImage {
    let has_alpha = matches!(
        img.color(),
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F
    );
    let pixels = imageops::resize(&img.to_rgba8(), size, size, FilterType::Lanczos3);
    LogoImage { pixels, has_alpha }
}

/// What the logo overlay ended up doing
#[derive(Debug)]
pub enum LogoOutcome {
    /// Plate and logo both drawn
    Composited,
    /// No file at the path; nothing drawn
    Skipped,
    /// Plate drawn, logo could not be loaded
    Failed(AssetError),
}

/// Draw the backing plate and composite the logo on top of it.
///
/// An absent file skips the overlay entirely. Once the file exists the plate is
/// drawn first, so a decode failure leaves the plate without a logo.
pub fn overlay_logo(
    canvas: &mut RgbImage,
    logo_rect: &PixelRect,
    plate_rect: &PixelRect,
    plate_color: Rgb<u8>,
    path: &Path,
) -> LogoOutcome {
    if !path.exists() {
        return LogoOutcome::Skipped;
    }

    draw_filled_rect_mut(canvas, plate_rect.to_rect(), plate_color);

    match load_image(path).map(|img| prepare_logo(img, logo_rect.width)) {
        Acquired::Loaded(logo) => {
            paste(canvas, &logo, logo_rect.x, logo_rect.y);
            LogoOutcome::Composited
        }
        Acquired::Fallback(reason) => LogoOutcome::Failed(reason),
    }
}

/// Paste a logo, blending by its alpha channel when it has one
pub fn paste(canvas: &mut RgbImage, logo: &LogoImage, x: u32, y: u32) {
    for (lx, ly, src) in logo.pixels.enumerate_pixels() {
        let (cx, cy) = (x + lx, y + ly);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }
        let dst = canvas.get_pixel_mut(cx, cy);
        let alpha = if logo.has_alpha { src[3] as u32 } else { 255 };
        for c in 0..3 {
            dst[c] = blend(src[c], dst[c], alpha);
        }
    }
}

fn blend(src: u8, dst: u8, alpha: u32) -> u8 {
    ((src as u32 * alpha + dst as u32 * (255 - alpha) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn mockup() -> MockupFrame {
        MockupFrame::new(PixelRect::new(10, 10, 60, 80), 8)
    }

    #[test]
    fn frame_has_outline_and_fill() {
        let mut canvas = RgbImage::new(100, 100);
        let outline = Rgb([51, 51, 51]);
        let fill = Rgb([26, 26, 26]);
        draw_frame(&mut canvas, &mockup(), fill, outline, 2);

        assert_eq!(*canvas.get_pixel(10, 10), outline);
        assert_eq!(*canvas.get_pixel(11, 40), outline);
        assert_eq!(*canvas.get_pixel(69, 89), outline);
        assert_eq!(*canvas.get_pixel(12, 40), fill);
        assert_eq!(*canvas.get_pixel(9, 9), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(70, 40), Rgb([0, 0, 0]));
    }

    #[test]
    fn missing_screenshot_fills_screen() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut canvas = RgbImage::new(100, 100);
        let screen = mockup().screen;
        let fallback = Rgb([248, 249, 250]);

        let path = dir.path().join("s.jpg");
        let reason = composite_screenshot(&mut canvas, &screen, &path, fallback);

        assert!(reason.unwrap().is_missing());
        for (x, y, p) in canvas.enumerate_pixels() {
            assert_eq!(*p == fallback, screen.contains(x, y), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn screenshot_is_scaled_to_screen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("s.png");
        RgbImage::from_pixel(500, 900, Rgb([200, 10, 10])).save(&path).unwrap();

        let screen = mockup().screen;
        let shot = load_screenshot(&path, &screen).ok().unwrap();
        assert_eq!(shot.dimensions(), (screen.width, screen.height));

        let mut canvas = RgbImage::new(100, 100);
        assert!(composite_screenshot(&mut canvas, &screen, &path, WHITE).is_none());
        let (cx, cy) = screen.center();
        assert_eq!(*canvas.get_pixel(cx, cy), Rgb([200, 10, 10]));
        assert_eq!(*canvas.get_pixel(screen.x - 1, cy), Rgb([0, 0, 0]));
    }

    #[test]
    fn transparent_pixels_keep_plate() {
        let mut canvas = RgbImage::from_pixel(4, 1, WHITE);
        let mut pixels = RgbaImage::new(4, 1);
        pixels.put_pixel(0, 0, Rgba([255, 0, 0, 0]));
        pixels.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        pixels.put_pixel(2, 0, Rgba([0, 0, 0, 128]));
        let logo = LogoImage { pixels, has_alpha: true };

        paste(&mut canvas, &logo, 0, 0);

        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
        assert_eq!(*canvas.get_pixel(1, 0), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(2, 0), Rgb([127, 127, 127]));
        assert_eq!(*canvas.get_pixel(3, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn opaque_logo_ignores_alpha_values() {
        let mut canvas = RgbImage::from_pixel(1, 1, WHITE);
        let pixels = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 255, 0]));
        let logo = LogoImage { pixels, has_alpha: false };
        paste(&mut canvas, &logo, 0, 0);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 255]));
    }

    #[test]
    fn only_rgba_sources_are_masked() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        assert!(prepare_logo(rgba, 4).has_alpha);

        let grey_alpha = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(8, 8));
        let logo = prepare_logo(grey_alpha, 4);
        assert!(!logo.has_alpha);
        assert_eq!(logo.pixels.dimensions(), (4, 4));

        let rgb = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
        assert!(!prepare_logo(rgb, 4).has_alpha);
    }

    #[test]
    fn grey_alpha_logo_covers_plate() {
        let mut canvas = RgbImage::from_pixel(2, 2, WHITE);
        let grey_alpha = image::GrayAlphaImage::from_pixel(2, 2, image::LumaA([40, 0]));
        let logo = prepare_logo(DynamicImage::ImageLumaA8(grey_alpha), 2);
        paste(&mut canvas, &logo, 0, 0);
        assert_eq!(*canvas.get_pixel(1, 1), Rgb([40, 40, 40]));
    }

    #[test]
    fn absent_logo_draws_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut canvas = RgbImage::new(50, 50);
        let logo = PixelRect::new(20, 20, 10, 10);
        let path = dir.path().join("l.png");
        let outcome = overlay_logo(&mut canvas, &logo, &logo.outset(5), WHITE, &path);

        assert!(matches!(outcome, LogoOutcome::Skipped));
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn corrupt_logo_leaves_plate() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("l.png");
        std::fs::write(&path, b"\x89PNG but not really").unwrap();

        let mut canvas = RgbImage::new(50, 50);
        let logo = PixelRect::new(20, 20, 10, 10);
        let plate = logo.outset(5);
        let outcome = overlay_logo(&mut canvas, &logo, &plate, WHITE, &path);

        assert!(matches!(outcome, LogoOutcome::Failed(_)));
        for (x, y, p) in canvas.enumerate_pixels() {
            assert_eq!(*p == WHITE, plate.contains(x, y), "pixel ({x}, {y})");
        }
    }
}
