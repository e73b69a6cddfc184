use image::Rgb;
use std::path::PathBuf;

use crate::models::{GradientSpec, MockupFrame, PixelRect};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Text content and its placement
#[derive(Debug, Clone)]
pub struct TextConfig {
    pub title: String,
    pub subtitle: String,
    /// Display order of the feature lines
    pub features: Vec<String>,
    /// Prepended to every feature line
    pub bullet: String,
    pub margin_x: i32,
    pub title_y: i32,
    /// Distance from the title anchor to the subtitle anchor
    pub subtitle_offset: i32,
    /// Distance from the subtitle anchor to the first feature line
    pub features_offset: i32,
    pub feature_spacing: i32,
    pub color: Rgb<u8>,
}

/// Font candidate and the pixel size of each role
#[derive(Debug, Clone)]
pub struct FontConfig {
    pub path: PathBuf,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub feature_size: f32,
}

/// Phone mockup drawing parameters
#[derive(Debug, Clone)]
pub struct MockupConfig {
    /// Distance from the canvas right edge to the frame's left edge
    pub right_offset: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    pub screen_inset: u32,
    pub frame_fill: Rgb<u8>,
    pub frame_outline: Rgb<u8>,
    pub outline_width: u32,
    pub screen_fallback: Rgb<u8>,
    pub screenshot_path: PathBuf,
    pub logo_path: PathBuf,
    pub logo_size: u32,
    pub logo_margin_top: u32,
    pub logo_margin_right: u32,
    pub plate_padding: u32,
    pub plate_color: Rgb<u8>,
}

/// Output file naming and encoding
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub file_stem: String,
    pub jpeg_quality: u8,
}

/// Every constant the feature graphic is built from
#[derive(Debug, Clone)]
pub struct GraphicConfig {
    pub width: u32,
    pub height: u32,
    /// Solid color the canvas is allocated with before the gradient pass
    pub base_color: Rgb<u8>,
    pub gradient: GradientSpec,
    pub fonts: FontConfig,
    pub text: TextConfig,
    pub mockup: MockupConfig,
    pub export: ExportConfig,
}

impl GraphicConfig {
    /// Frame and screen rectangles for this canvas width
    pub fn mockup_frame(&self) -> MockupFrame {
        let frame = PixelRect::new(
            self.width.saturating_sub(self.mockup.right_offset),
            self.mockup.top,
            self.mockup.width,
            self.mockup.height,
        );
        MockupFrame::new(frame, self.mockup.screen_inset)
    }

    /// Where the logo lands inside the screen region
    pub fn logo_rect(&self) -> PixelRect {
        let screen = self.mockup_frame().screen;
        let m = &self.mockup;
        PixelRect::new(
            screen
                .right()
                .saturating_sub(m.logo_size + m.logo_margin_right),
            screen.y + m.logo_margin_top,
            m.logo_size,
            m.logo_size,
        )
    }

    /// Solid plate drawn behind the logo
    pub fn plate_rect(&self) -> PixelRect {
        self.logo_rect().outset(self.mockup.plate_padding)
    }

    /// Point the screenshot and logo at a different directory, keeping file names
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        for path in [&mut self.mockup.screenshot_path, &mut self.mockup.logo_path] {
            *path = root.join(&*path);
        }
        self
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fonts.path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export.output_dir = dir.into();
        self
    }
}

impl Default for GraphicConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 500,
            base_color: Rgb([0x38, 0x8e, 0x3c]),
            gradient: GradientSpec {
                top: Rgb([56, 142, 60]),
                bottom: Rgb([46, 125, 50]),
            },
            fonts: FontConfig {
                path: PathBuf::from("arial.ttf"),
                title_size: 48.0,
                subtitle_size: 24.0,
                feature_size: 18.0,
            },
            text: TextConfig {
                title: "HerdWise".to_string(),
                subtitle: "Complete Farm Management Solution".to_string(),
                features: vec![
                    "Animal Tracking & Health Records".to_string(),
                    "Financial Management".to_string(),
                    "Camp & Grazing Management".to_string(),
                    "Inventory & Task Management".to_string(),
                ],
                bullet: "✓ ".to_string(),
                margin_x: 80,
                title_y: 80,
                subtitle_offset: 80,
                features_offset: 80,
                feature_spacing: 35,
                color: WHITE,
            },
            mockup: MockupConfig {
                right_offset: 320,
                top: 50,
                width: 280,
                height: 400,
                screen_inset: 8,
                frame_fill: Rgb([0x1a, 0x1a, 0x1a]),
                frame_outline: Rgb([0x33, 0x33, 0x33]),
                outline_width: 2,
                screen_fallback: Rgb([0xf8, 0xf9, 0xfa]),
                screenshot_path: PathBuf::from("public/screenshots/dashboard.jpg"),
                logo_path: PathBuf::from("public/screenshots/paw-logo-192.png"),
                logo_size: 40,
                logo_margin_top: 20,
                logo_margin_right: 20,
                plate_padding: 10,
                plate_color: WHITE,
            },
            export: ExportConfig {
                output_dir: PathBuf::new(),
                file_stem: "herdwise-feature-graphic".to_string(),
                jpeg_quality: 95,
            },
        }
    }
}
