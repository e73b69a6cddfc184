use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;

/// Where the graphic was written
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub jpeg_path: PathBuf,
    pub png_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Encode the finished canvas as JPEG and PNG.
///
/// Both files come from the same buffer. Any write failure is returned as-is.
pub fn export_graphic(canvas: &RgbImage, config: &ExportConfig) -> Result<ExportReport> {
    let jpeg_path = config.output_dir.join(format!("{}.jpg", config.file_stem));
    let png_path = config.output_dir.join(format!("{}.png", config.file_stem));

    write_jpeg(canvas, &jpeg_path, config.jpeg_quality)?;
    canvas
        .save_with_format(&png_path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", png_path.display()))?;

    Ok(ExportReport {
        jpeg_path,
        png_path,
        width: canvas.width(),
        height: canvas.height(),
    })
}

fn write_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(canvas)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
