pub mod assets;
pub mod canvas;
pub mod export;
pub mod fonts;
pub mod mockup;
pub mod steps;
pub mod text;

use anyhow::Result;

use crate::config::GraphicConfig;
use crate::pipeline::{Diagnostic, DiagnosticSink, Pipeline, RenderOutput};
use crate::render::assets::Acquired;
use crate::render::fonts::FontSet;
use crate::render::steps::*;

/// Build the standard feature-graphic pipeline.
///
/// Fonts are resolved here, once; a fallback is reported when the pipeline runs.
pub fn build_standard_pipeline(config: &GraphicConfig, verbose: bool) -> Pipeline {
    let (fonts, font_issue) = match FontSet::resolve(&config.fonts) {
        Acquired::Loaded(fonts) => (fonts, None),
        Acquired::Fallback(reason) => (FontSet::fallback(), Some(reason)),
    };
    let frame = config.mockup_frame();
    let m = &config.mockup;

    let pipeline = Pipeline::new()
        .with_verbose(verbose)
        .add_step(Box::new(GradientStep {
            spec: config.gradient,
        }))
        .add_step(Box::new(TextStep {
            config: config.text.clone(),
            fonts,
        }))
        .add_step(Box::new(DeviceFrameStep {
            frame,
            fill: m.frame_fill,
            outline: m.frame_outline,
            outline_width: m.outline_width,
        }))
        .add_step(Box::new(ScreenshotStep {
            screen: frame.screen,
            path: m.screenshot_path.clone(),
            fallback: m.screen_fallback,
        }))
        .add_step(Box::new(LogoStep {
            logo: config.logo_rect(),
            plate: config.plate_rect(),
            plate_color: m.plate_color,
            path: m.logo_path.clone(),
        }));

    match font_issue {
        Some(reason) => pipeline.with_diagnostic(Diagnostic::FontFallback(reason)),
        None => pipeline,
    }
}

/// Allocate the canvas and run every stage, printing load failures to stdout
pub fn generate(config: &GraphicConfig) -> Result<RenderOutput> {
    let canvas = canvas::new_canvas(config.width, config.height, config.base_color);
    build_standard_pipeline(config, false).run(canvas)
}

/// Same as [`generate`] with a caller-supplied diagnostic sink
pub fn generate_with_sink(
    config: &GraphicConfig,
    sink: Box<dyn DiagnosticSink>,
) -> Result<RenderOutput> {
    let canvas = canvas::new_canvas(config.width, config.height, config.base_color);
    build_standard_pipeline(config, false)
        .with_sink(sink)
        .run(canvas)
}
