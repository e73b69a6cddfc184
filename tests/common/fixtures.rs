use feature_graphic::GraphicConfig;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scalable face checked into the test fixtures (DejaVu, see DejaVu-LICENSE.txt)
pub fn fixture_font() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf")
}

/// Screenshot fill used by the fixtures
pub const SHOT_RED: Rgb<u8> = Rgb([200, 30, 30]);
/// Opaque half of the fixture logo
pub const LOGO_BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// A config whose assets and outputs all live in a fresh temp directory.
/// Nothing exists there yet, so every optional asset starts out missing.
/// Keep the TempDir alive for as long as the config is used.
pub fn isolated_config() -> (GraphicConfig, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = GraphicConfig::default()
        .with_asset_root(dir.path())
        .with_font_path(dir.path().join("arial.ttf"))
        .with_output_dir(dir.path());
    std::fs::create_dir_all(dir.path().join("public/screenshots"))
        .expect("Failed to create screenshots directory");
    (config, dir)
}

/// Write a solid screenshot at the configured path.
/// PNG bytes behind a .jpg name, so the loader has to sniff the format.
pub fn write_screenshot(config: &GraphicConfig) {
    let img = RgbImage::from_pixel(540, 1170, SHOT_RED);
    img.save_with_format(&config.mockup.screenshot_path, ImageFormat::Png)
        .expect("Failed to save screenshot fixture");
}

/// Write a 192x192 RGBA logo: left half fully transparent red, right half opaque blue
pub fn write_alpha_logo(config: &GraphicConfig) {
    let img = RgbaImage::from_fn(192, 192, |x, _| {
        if x < 96 {
            Rgba([255, 0, 0, 0])
        } else {
            Rgba([LOGO_BLUE[0], LOGO_BLUE[1], LOGO_BLUE[2], 255])
        }
    });
    img.save_with_format(&config.mockup.logo_path, ImageFormat::Png)
        .expect("Failed to save logo fixture");
}

/// Write a logo with no alpha channel
pub fn write_opaque_logo(config: &GraphicConfig, color: Rgb<u8>) {
    RgbImage::from_pixel(192, 192, color)
        .save_with_format(&config.mockup.logo_path, ImageFormat::Png)
        .expect("Failed to save logo fixture");
}

/// Write bytes that exist on disk but decode as nothing
pub fn write_corrupt(path: &Path) {
    std::fs::write(path, b"this is not a png").expect("Failed to write corrupt fixture");
}
