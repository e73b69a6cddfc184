use ab_glyph::{FontArc, PxScale};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;

use crate::config::FontConfig;
use crate::error::AssetError;
use crate::models::FontRole;
use crate::render::assets::{Acquired, read_bytes};

/// Built-in 8x8 bitmap face used when no scalable font is available
#[derive(Debug, Clone, Copy)]
pub struct BitmapFace {
    /// Each glyph cell is `8 * pixel_size` pixels square
    pub pixel_size: u32,
}

impl BitmapFace {
    const CELL: u32 = 8;

    fn glyph(ch: char) -> Option<[u8; 8]> {
        BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch))
    }

    fn advance(&self) -> u32 {
        Self::CELL * self.pixel_size
    }

    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let (w, h) = (canvas.width() as i64, canvas.height() as i64);
        let s = self.pixel_size as i64;

        for (i, ch) in text.chars().enumerate() {
            // Glyphs the face lacks still take up a cell
            let Some(rows) = Self::glyph(ch) else {
                continue;
            };
            let pen_x = x as i64 + i as i64 * self.advance() as i64;

            for (row, bits) in rows.iter().enumerate() {
                for bit in 0..8 {
                    if bits & (1u8 << bit) == 0 {
                        continue;
                    }
                    let ox = pen_x + bit as i64 * s;
                    let oy = y as i64 + row as i64 * s;
                    for dy in 0..s {
                        for dx in 0..s {
                            let (px, py) = (ox + dx, oy + dy);
                            if px >= 0 && py >= 0 && px < w && py < h {
                                canvas.put_pixel(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn measure(&self, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * self.advance(), self.advance())
    }
}

impl Default for BitmapFace {
    fn default() -> Self {
        Self { pixel_size: 1 }
    }
}

/// A face able to draw and measure text at one size
#[derive(Clone)]
pub enum FontFace {
    Scalable { font: FontArc, scale: PxScale },
    Fixed(BitmapFace),
}

impl FontFace {
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        match self {
            FontFace::Scalable { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, font, text)
            }
            FontFace::Fixed(face) => face.draw(canvas, x, y, text, color),
        }
    }

    /// Width and height of the rendered text
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            FontFace::Scalable { font, scale } => text_size(*scale, font, text),
            FontFace::Fixed(face) => face.measure(text),
        }
    }

    pub fn is_scalable(&self) -> bool {
        matches!(self, FontFace::Scalable { .. })
    }
}

/// The three faces used by the layout, from largest to smallest
#[derive(Clone)]
pub struct FontSet {
    pub title: FontFace,
    pub subtitle: FontFace,
    pub feature: FontFace,
}

impl FontSet {
    /// Load the configured font file at every size.
    ///
    /// One failed load falls back for all roles.
    pub fn resolve(config: &FontConfig) -> Acquired<FontSet> {
        load_font(&config.path)
            .map(|font| FontSet {
                title: scalable(&font, config.title_size),
                subtitle: scalable(&font, config.subtitle_size),
                feature: scalable(&font, config.feature_size),
            })
            .into()
    }

    /// Fixed-size default face for every role
    pub fn fallback() -> Self {
        let face = FontFace::Fixed(BitmapFace::default());
        Self {
            title: face.clone(),
            subtitle: face.clone(),
            feature: face,
        }
    }

    pub fn face(&self, role: FontRole) -> &FontFace {
        match role {
            FontRole::Title => &self.title,
            FontRole::Subtitle => &self.subtitle,
            FontRole::Feature => &self.feature,
        }
    }
}

fn scalable(font: &FontArc, size: f32) -> FontFace {
    FontFace::Scalable {
        font: font.clone(),
        scale: PxScale::from(size),
    }
}

fn load_font(path: &Path) -> Result<FontArc, AssetError> {
    let bytes = read_bytes(path)?;
    FontArc::try_from_vec(bytes).map_err(|source| AssetError::InvalidFont {
        path: path.to_path_buf(),
        source,
    })
}
