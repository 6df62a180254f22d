use std::path::Path;

use image::{ImageBuffer, Rgb};
use placegen::{Generator, GeneratorConfig};
use tempfile::TempDir;

/// Creates an empty scratch directory that is removed when dropped.
pub fn create_output_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Generator writing into `dir` with default settings and no console output.
pub fn quiet_generator(dir: &Path) -> Generator {
    Generator::new(GeneratorConfig::new(dir))
        .expect("Default config should be valid")
        .with_quiet(true)
}

/// Writes a 1x1 PNG-encoded stub under `name` and returns its size in bytes.
/// The `.jpg` name is intentional: only existence matters to the generator.
pub fn write_stub(dir: &Path, name: &str) -> u64 {
    let img = ImageBuffer::from_fn(1, 1, |_, _| Rgb([0u8, 0u8, 0u8]));
    let path = dir.join(name);
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("Failed to save stub image");
    std::fs::metadata(&path).expect("stub metadata").len()
}

/// Sorted file names currently in `dir`
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read_dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Maximum per-channel drift tolerated after a JPEG round trip
pub const JPEG_TOLERANCE: u8 = 12;

/// DejaVu Sans, bundled so TrueType rendering can be tested without system fonts.
pub fn fixture_font_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
}
