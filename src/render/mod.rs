pub mod bitmap;
pub mod truetype;

use anyhow::Result;
use image::{Rgb, RgbImage};

use crate::config::GeneratorConfig;
use crate::models::Color;

pub use bitmap::BitmapFont;
pub use truetype::TrueTypeFont;

/// Ink extent of a piece of text, relative to the point it is drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// Trait implemented by anything that can measure and draw a label
pub trait LabelFont: Send + Sync {
    /// Measure the bounding box `text` would occupy if drawn at (0, 0)
    fn measure(&self, text: &str) -> TextBounds;

    /// Draw `text` with its origin at (x, y); pixels outside the canvas are clipped
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>);

    /// Human-readable name (used in verbose output)
    fn name(&self) -> &str;
}

/// Draw origin that puts `bounds` in the middle of a `width` x `height` canvas.
///
/// The result can be negative when the text is larger than the canvas.
pub fn centered_origin(bounds: TextBounds, width: u32, height: u32) -> (i32, i32) {
    let x = (width as i64 - bounds.width as i64).div_euclid(2) - bounds.left as i64;
    let y = (height as i64 - bounds.height as i64).div_euclid(2) - bounds.top as i64;
    (x as i32, y as i32)
}

/// A rendered placeholder plus where its label ended up
pub struct RenderedPlaceholder {
    pub image: RgbImage,
    pub background: Color,
    pub label: String,
    pub origin: (i32, i32),
    pub bounds: TextBounds,
}

/// Build the in-memory image for `index` without touching the filesystem
pub fn render_placeholder(
    config: &GeneratorConfig,
    font: &dyn LabelFont,
    index: u32,
) -> Result<RenderedPlaceholder> {
    let background = config.color_for(index).ok_or_else(|| {
        anyhow::anyhow!(
            "Index {} is outside the color table (1..={})",
            index,
            config.colors.len()
        )
    })?;

    let mut image = RgbImage::from_pixel(config.width, config.height, background.into());

    let label = config.label(index);
    let bounds = font.measure(&label);
    let origin = centered_origin(bounds, config.width, config.height);
    font.draw(&mut image, origin.0, origin.1, &label, config.label_color.into());

    Ok(RenderedPlaceholder {
        image,
        background,
        label,
        origin,
        bounds,
    })
}
