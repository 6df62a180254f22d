use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Color;

pub const DEFAULT_COUNT: u32 = 21;
pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_QUALITY: u8 = 85;
pub const DEFAULT_FILE_STEM: &str = "memory";
pub const DEFAULT_LABEL_PREFIX: &str = "Memory";

/// Background for index `i` is `DEFAULT_PALETTE[i - 1]`
pub const DEFAULT_PALETTE: [Color; 21] = [
    Color::from_hex(0xFF6B6B),
    Color::from_hex(0x4ECDC4),
    Color::from_hex(0x45B7D1),
    Color::from_hex(0xFFA07A),
    Color::from_hex(0x98D8C8),
    Color::from_hex(0xF7DC6F),
    Color::from_hex(0xBB8FCE),
    Color::from_hex(0x85C1E2),
    Color::from_hex(0xF8B88B),
    Color::from_hex(0x82E0AA),
    Color::from_hex(0xF5B041),
    Color::from_hex(0xA9CCE3),
    Color::from_hex(0xF48FB1),
    Color::from_hex(0xABEBC6),
    Color::from_hex(0xD7BDE2),
    Color::from_hex(0xF9E79F),
    Color::from_hex(0xAED6F1),
    Color::from_hex(0xF5B7B1),
    Color::from_hex(0xD5F4E6),
    Color::from_hex(0xFADBD8),
    Color::from_hex(0xFAD7A0),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Image count must be at least 1")]
    ZeroCount,
    #[error("Image count {count} exceeds the color table length {colors}")]
    NotEnoughColors { count: u32, colors: usize },
    #[error("Image dimensions must be non-zero (got {width}x{height})")]
    ZeroDimensions { width: u32, height: u32 },
    #[error("JPEG quality must be in 1..=100 (got {0})")]
    InvalidQuality(u8),
    #[error("Invalid color spec: {0:?}")]
    InvalidColor(String),
}

/// Everything the generator needs to know about a run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the images are written to; must already exist
    pub output_dir: PathBuf,
    pub count: u32,
    pub colors: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub quality: u8,
    pub file_stem: String,
    pub label_prefix: String,
    pub label_color: Color,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            count: DEFAULT_COUNT,
            colors: DEFAULT_PALETTE.to_vec(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            quality: DEFAULT_QUALITY,
            file_stem: DEFAULT_FILE_STEM.to_string(),
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            label_color: Color::WHITE,
        }
    }
}

impl GeneratorConfig {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self::default().with_output_dir(output_dir)
    }

    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Check the invariants the generator relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if self.count as usize > self.colors.len() {
            return Err(ConfigError::NotEnoughColors {
                count: self.count,
                colors: self.colors.len(),
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::InvalidQuality(self.quality));
        }
        Ok(())
    }

    /// Background color for a 1-based index
    pub fn color_for(&self, index: u32) -> Option<Color> {
        let slot = (index as usize).checked_sub(1)?;
        self.colors.get(slot).copied()
    }

    pub fn file_name(&self, index: u32) -> String {
        format!("{}{}.jpg", self.file_stem, index)
    }

    pub fn label(&self, index: u32) -> String {
        format!("{} {}", self.label_prefix, index)
    }
}

/// Parse a comma separated list such as `#FF0000, 00ff00,#00F`
pub fn parse_color_list(list: &str) -> Result<Vec<Color>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse::<Color>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.count as usize, config.colors.len());
        assert_eq!((config.width, config.height, config.quality), (400, 300, 85));
    }

    #[test]
    fn count_larger_than_palette_is_rejected() {
        let config = GeneratorConfig::default().with_count(22);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotEnoughColors { count: 22, colors: 21 })
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        let config = GeneratorConfig::default().with_count(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCount));
    }

    #[test]
    fn bad_dimensions_and_quality_are_rejected() {
        let mut config = GeneratorConfig::default();
        config.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDimensions { .. })));

        let mut config = GeneratorConfig::default();
        config.quality = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidQuality(0)));
        config.quality = 101;
        assert_eq!(config.validate(), Err(ConfigError::InvalidQuality(101)));
    }

    #[test]
    fn color_lookup_is_one_based() {
        let config = GeneratorConfig::default();
        assert_eq!(config.color_for(1), Some(Color::from_hex(0xFF6B6B)));
        assert_eq!(config.color_for(21), Some(Color::from_hex(0xFAD7A0)));
        assert_eq!(config.color_for(0), None);
        assert_eq!(config.color_for(22), None);
    }

    #[test]
    fn names_follow_the_index() {
        let config = GeneratorConfig::default();
        assert_eq!(config.file_name(7), "memory7.jpg");
        assert_eq!(config.label(7), "Memory 7");
    }

    #[test]
    fn color_list_parsing() {
        let colors = parse_color_list("#FF0000, 00ff00,#00F,").unwrap();
        assert_eq!(
            colors,
            vec![Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)]
        );
        assert!(matches!(
            parse_color_list("#FF0000,nope"),
            Err(ConfigError::InvalidColor(_))
        ));
    }
}
