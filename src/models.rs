use image::Rgb;
use imageproc::rect::Rect;

/// Axis-aligned pixel region on the canvas, covering `x..x + width` and `y..y + height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// First column past the right edge
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// First row past the bottom edge
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Shrink by `amount` pixels on every side
    pub fn inset(&self, amount: u32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width.saturating_sub(2 * amount),
            height: self.height.saturating_sub(2 * amount),
        }
    }

    /// Grow by `amount` pixels on every side
    pub fn outset(&self, amount: u32) -> Self {
        Self {
            x: self.x.saturating_sub(amount),
            y: self.y.saturating_sub(amount),
            width: self.width + 2 * amount,
            height: self.height + 2 * amount,
        }
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// True when `other` lies inside this rectangle and touches none of its edges
    pub fn strictly_contains(&self, other: &PixelRect) -> bool {
        other.x > self.x
            && other.y > self.y
            && other.right() < self.right()
            && other.bottom() < self.bottom()
    }

    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Convert for imageproc drawing calls
    pub fn to_rect(&self) -> Rect {
        Rect::at(self.x as i32, self.y as i32).of_size(self.width.max(1), self.height.max(1))
    }
}

/// Two-color vertical gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub top: Rgb<u8>,
    pub bottom: Rgb<u8>,
}

impl GradientSpec {
    /// Color of scanline `y` on a canvas `height` rows tall.
    ///
    /// The ratio is `y / height`, so it stays below 1.0 for every row in range.
    /// Channels are truncated toward zero.
    pub fn color_at(&self, y: u32, height: u32) -> Rgb<u8> {
        let ratio = if height == 0 { 0.0 } else { y as f64 / height as f64 };
        let mut out = [0u8; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            let top = self.top[c] as f64;
            let bottom = self.bottom[c] as f64;
            *slot = (top + (bottom - top) * ratio).clamp(0.0, 255.0) as u8;
        }
        Rgb(out)
    }
}

/// Phone mockup geometry: the device body and the screen nested inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockupFrame {
    pub frame: PixelRect,
    pub screen: PixelRect,
}

impl MockupFrame {
    pub fn new(frame: PixelRect, screen_inset: u32) -> Self {
        Self {
            frame,
            screen: frame.inset(screen_inset),
        }
    }
}

/// Which face of a [`crate::render::fonts::FontSet`] a block is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
    Feature,
}

/// A positioned piece of text, produced by layout and consumed by the draw call
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBlock {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub role: FontRole,
    pub color: Rgb<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_keeps_screen_inside_frame() {
        let frame = PixelRect::new(704, 50, 280, 400);
        let mockup = MockupFrame::new(frame, 8);
        assert_eq!(mockup.screen, PixelRect::new(712, 58, 264, 384));
        assert!(mockup.frame.strictly_contains(&mockup.screen));
    }

    #[test]
    fn outset_pads_every_side() {
        let logo = PixelRect::new(916, 78, 40, 40);
        assert_eq!(logo.outset(10), PixelRect::new(906, 68, 60, 60));
    }

    #[test]
    fn gradient_truncates_toward_zero() {
        let spec = GradientSpec {
            top: Rgb([56, 142, 60]),
            bottom: Rgb([46, 125, 50]),
        };
        // 142 - 17 * 0.5 = 133.5
        assert_eq!(spec.color_at(250, 500), Rgb([51, 133, 55]));
        assert_eq!(spec.color_at(0, 500), spec.top);
    }
}
