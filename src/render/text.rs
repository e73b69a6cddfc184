use image::RgbImage;

use crate::config::TextConfig;
use crate::models::{FontRole, LayoutBlock};
use crate::render::fonts::FontSet;

/// Place the title, subtitle and feature lines.
///
/// Anchors are fixed offsets from the previous block. Nothing is wrapped or
/// checked for overlap.
pub fn layout_text(config: &TextConfig) -> Vec<LayoutBlock> {
    let title_y = config.title_y;
    let subtitle_y = title_y + config.subtitle_offset;
    let features_y = subtitle_y + config.features_offset;

    let mut blocks = vec![
        LayoutBlock {
            text: config.title.clone(),
            x: config.margin_x,
            y: title_y,
            role: FontRole::Title,
            color: config.color,
        },
        LayoutBlock {
            text: config.subtitle.clone(),
            x: config.margin_x,
            y: subtitle_y,
            role: FontRole::Subtitle,
            color: config.color,
        },
    ];

    blocks.extend(config.features.iter().enumerate().map(|(i, feature)| LayoutBlock {
        text: format!("{}{}", config.bullet, feature),
        x: config.margin_x,
        y: features_y + i as i32 * config.feature_spacing,
        role: FontRole::Feature,
        color: config.color,
    }));

    blocks
}

/// Draw blocks in order with the face matching each block's role
pub fn draw_blocks(canvas: &mut RgbImage, blocks: &[LayoutBlock], fonts: &FontSet) {
    for block in blocks {
        fonts
            .face(block.role)
            .draw(canvas, block.x, block.y, &block.text, block.color);
    }
}
