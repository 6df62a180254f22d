pub mod config;
pub mod generator;
pub mod models;
pub mod render;

pub use config::{ConfigError, GeneratorConfig, DEFAULT_PALETTE, parse_color_list};
pub use generator::{Generator, GeneratorContext};
pub use models::{Color, GenerationReport, Outcome, ProcessedFile};
pub use render::{BitmapFont, LabelFont, TextBounds, TrueTypeFont, render_placeholder};
