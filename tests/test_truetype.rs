//! Integration tests for labels drawn with a TrueType font.
//!
//! Tests cover:
//! - Ink-box centering of the label on the in-memory image
//! - A full run with a custom font writing valid JPEGs

mod common;

use common::*;
use placegen::render::truetype::DEFAULT_PX_HEIGHT;
use placegen::{TrueTypeFont, render_placeholder};

/// (left, right, top, bottom) gaps between the non-background pixels and the image edges
fn ink_gaps(img: &image::RgbImage, background: Color) -> (i64, i64, i64, i64) {
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0, 0);
    for (x, y, p) in img.enumerate_pixels() {
        if Color::from(*p) != background {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }
    assert!(min_x <= max_x, "no label pixels drawn");
    let (w, h) = img.dimensions();
    (
        min_x as i64,
        (w - 1 - max_x) as i64,
        min_y as i64,
        (h - 1 - max_y) as i64,
    )
}

#[test]
fn test_truetype_label_is_centered() -> anyhow::Result<()> {
    let font = TrueTypeFont::from_file(fixture_font_path(), DEFAULT_PX_HEIGHT)?;
    let config = GeneratorConfig::default();

    for index in [1, 12, 21] {
        let rendered = render_placeholder(&config, &font, index)?;
        let (left, right, top, bottom) = ink_gaps(&rendered.image, rendered.background);
        assert!((left - right).abs() <= 3, "index {}: L{} R{}", index, left, right);
        assert!((top - bottom).abs() <= 3, "index {}: T{} B{}", index, top, bottom);
    }

    Ok(())
}

#[test]
fn test_run_with_truetype_font() -> anyhow::Result<()> {
    let dir = create_output_dir();
    let font = TrueTypeFont::from_file(fixture_font_path(), DEFAULT_PX_HEIGHT)?;
    let config = GeneratorConfig::new(dir.path()).with_count(2);
    let report = Generator::new(config)?
        .with_font(Box::new(font))
        .with_quiet(true)
        .run()?;

    assert_eq!(report.created(), 2);
    let img = image::open(dir.path().join("memory2.jpg"))?.to_rgb8();
    assert_eq!(img.dimensions(), (400, 300));

    Ok(())
}
