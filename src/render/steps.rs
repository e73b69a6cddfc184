use anyhow::Result;
use image::{Rgb, RgbImage};
use std::path::PathBuf;

use crate::config::TextConfig;
use crate::models::{GradientSpec, MockupFrame, PixelRect};
use crate::pipeline::{Diagnostic, RenderContext, RenderStep};
use crate::render::canvas::fill_vertical_gradient;
use crate::render::fonts::FontSet;
use crate::render::{mockup, text};

/// Vertical background gradient
pub struct GradientStep {
    pub spec: GradientSpec,
}

impl RenderStep for GradientStep {
    fn render(&self, canvas: &mut RgbImage, _context: &mut RenderContext) -> Result<()> {
        fill_vertical_gradient(canvas, &self.spec);
        Ok(())
    }

    fn name(&self) -> &str {
        "Gradient Background"
    }
}

/// Title, subtitle and feature list
pub struct TextStep {
    pub config: TextConfig,
    pub fonts: FontSet,
}

impl RenderStep for TextStep {
    fn render(&self, canvas: &mut RgbImage, context: &mut RenderContext) -> Result<()> {
        let blocks = text::layout_text(&self.config);

        if context.verbose {
            let (w, h) = self.fonts.title.measure(&self.config.title);
            println!("  Title measures {}x{}", w, h);
            for block in &blocks {
                println!("  '{}' at ({}, {})", block.text, block.x, block.y);
            }
        }

        text::draw_blocks(canvas, &blocks, &self.fonts);
        Ok(())
    }

    fn name(&self) -> &str {
        "Text Layout"
    }
}

/// Device body and outline
pub struct DeviceFrameStep {
    pub frame: MockupFrame,
    pub fill: Rgb<u8>,
    pub outline: Rgb<u8>,
    pub outline_width: u32,
}

impl RenderStep for DeviceFrameStep {
    fn render(&self, canvas: &mut RgbImage, _context: &mut RenderContext) -> Result<()> {
        mockup::draw_frame(canvas, &self.frame, self.fill, self.outline, self.outline_width);
        Ok(())
    }

    fn name(&self) -> &str {
        "Device Frame"
    }
}

/// Screenshot inside the screen region, flat fill when unavailable
pub struct ScreenshotStep {
    pub screen: PixelRect,
    pub path: PathBuf,
    pub fallback: Rgb<u8>,
}

impl RenderStep for ScreenshotStep {
    fn render(&self, canvas: &mut RgbImage, context: &mut RenderContext) -> Result<()> {
        if let Some(reason) =
            mockup::composite_screenshot(canvas, &self.screen, &self.path, self.fallback)
        {
            context.report(Diagnostic::ScreenshotFallback(reason));
        } else if context.verbose {
            println!("  Screenshot placed from {}", self.path.display());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Screenshot"
    }
}

/// Logo on a backing plate near the top-right of the screen
pub struct LogoStep {
    pub logo: PixelRect,
    pub plate: PixelRect,
    pub plate_color: Rgb<u8>,
    pub path: PathBuf,
}

impl RenderStep for LogoStep {
    fn render(&self, canvas: &mut RgbImage, context: &mut RenderContext) -> Result<()> {
        match mockup::overlay_logo(canvas, &self.logo, &self.plate, self.plate_color, &self.path) {
            mockup::LogoOutcome::Composited => {
                if context.verbose {
                    println!("  Logo placed from {}", self.path.display());
                }
            }
            mockup::LogoOutcome::Skipped => {
                context.report(Diagnostic::LogoSkipped(self.path.clone()));
            }
            mockup::LogoOutcome::Failed(reason) => {
                context.report(Diagnostic::LogoFailed(reason));
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Logo Overlay"
    }
}
