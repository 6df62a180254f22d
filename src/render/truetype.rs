use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use anyhow::Result;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use super::{LabelFont, TextBounds};

pub const DEFAULT_PX_HEIGHT: f32 = 32.0;

/// TrueType / OpenType font loaded from disk
pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
    name: String,
}

impl TrueTypeFont {
    pub fn from_file(path: impl AsRef<Path>, px_height: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read font {}: {}", path.display(), e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(data, px_height, name)
    }

    pub fn from_bytes(data: Vec<u8>, px_height: f32, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !(px_height.is_finite() && px_height > 0.0) {
            anyhow::bail!("Font size must be positive (got {})", px_height);
        }
        let font = FontVec::try_from_vec(data)
            .map_err(|e| anyhow::anyhow!("Failed to parse font {}: {}", name, e))?;
        Ok(Self {
            font,
            scale: PxScale::from(px_height),
            name,
        })
    }
}

impl TrueTypeFont {
    /// Pixel box of every outlined glyph, placed the same way `draw_text_mut` places them:
    /// pen starts at x = 0 with the baseline at the font ascent.
    fn glyph_boxes(&self, text: &str) -> Vec<(i32, i32, i32, i32)> {
        let scaled = self.font.as_scaled(self.scale);
        let mut pen = 0f32;
        let mut last: Option<GlyphId> = None;
        let mut boxes = Vec::new();

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            let glyph = id.with_scale_and_position(self.scale, point(pen, scaled.ascent()));
            pen += scaled.h_advance(id);
            if let Some(outline) = scaled.outline_glyph(glyph) {
                if let Some(last) = last {
                    pen += scaled.kern(id, last);
                }
                last = Some(id);
                let bb = outline.px_bounds();
                let x0 = bb.min.x.round() as i32;
                let y0 = bb.min.y.round() as i32;
                boxes.push((x0, y0, x0 + bb.width() as i32, y0 + bb.height() as i32));
            }
        }
        boxes
    }
}

impl LabelFont for TrueTypeFont {
    fn measure(&self, text: &str) -> TextBounds {
        let extent = self.glyph_boxes(text).into_iter().reduce(|a, b| {
            (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
        });

        match extent {
            Some((x0, y0, x1, y1)) => TextBounds {
                left: x0,
                top: y0,
                width: (x1 - x0).max(0) as u32,
                height: (y1 - y0).max(0) as u32,
            },
            None => TextBounds::default(),
        }
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
