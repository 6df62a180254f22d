use std::path::PathBuf;
use std::str::FromStr;

use image::Rgb;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Largest per-channel difference between two colors
    pub fn max_channel_diff(&self, other: &Color) -> u8 {
        let dr = self.r.abs_diff(other.r);
        let dg = self.g.abs_diff(other.g);
        let db = self.b.abs_diff(other.b);
        dr.max(dg).max(db)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and a handful of CSS names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidColor(s.to_string());

        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Color::WHITE),
            "black" => return Ok(Color::BLACK),
            "red" => return Ok(Color::new(255, 0, 0)),
            "green" => return Ok(Color::new(0, 128, 0)),
            "blue" => return Ok(Color::new(0, 0, 255)),
            "gray" | "grey" => return Ok(Color::new(128, 128, 128)),
            _ => {}
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Color::from_hex(value))
            }
            3 => {
                // #RGB expands each nibble, so #F80 == #FF8800
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let expand = |n: u32| ((n & 0xF) * 0x11) as u8;
                Ok(Color::new(expand(value >> 8), expand(value >> 4), expand(value)))
            }
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Color::new(pixel[0], pixel[1], pixel[2])
    }
}

/// What happened to a single index during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Target file was already present and left untouched
    Skipped,
    /// A new file was written
    Created { bytes: usize },
}

#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub index: u32,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Ordered record of every index handled by a run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<ProcessedFile>,
}

impl GenerationReport {
    pub fn push(&mut self, index: u32, path: PathBuf, outcome: Outcome) {
        self.files.push(ProcessedFile { index, path, outcome });
    }

    pub fn created(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Created { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == Outcome::Skipped)
            .count()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
