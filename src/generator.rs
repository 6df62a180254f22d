use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use image::codecs::jpeg::JpegEncoder;

use crate::config::GeneratorConfig;
use crate::models::{GenerationReport, Outcome};
use crate::render::{self, BitmapFont, LabelFont};

/// Console behaviour for a run
#[derive(Clone, Debug, Default)]
pub struct GeneratorContext {
    /// Print per-file detail (color, label placement, encoded size)
    pub verbose: bool,
    /// Suppress the per-file and summary lines
    pub quiet: bool,
}

/// Writes one placeholder JPEG per index, skipping files that already exist
pub struct Generator {
    config: GeneratorConfig,
    font: Box<dyn LabelFont>,
    context: GeneratorContext,
}

impl Generator {
    /// Create a generator using the built-in bitmap font.
    /// Fails if the configuration is invalid.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            font: Box::new(BitmapFont::default()),
            context: GeneratorContext::default(),
        })
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.context.quiet = quiet;
        self
    }

    /// Replace the label font
    pub fn with_font(mut self, font: Box<dyn LabelFont>) -> Self {
        self.font = font;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn target_path(&self, index: u32) -> PathBuf {
        self.config.output_dir.join(self.config.file_name(index))
    }

    /// Generate every index in `1..=count`, stopping at the first failure
    pub fn run(&self) -> Result<GenerationReport> {
        if !self.config.output_dir.is_dir() {
            anyhow::bail!(
                "Output directory does not exist: {}",
                self.config.output_dir.display()
            );
        }

        if self.context.verbose {
            println!(
                "Generating {} placeholders ({}x{}, quality {}) in {} using {} font",
                self.config.count,
                self.config.width,
                self.config.height,
                self.config.quality,
                self.config.output_dir.display(),
                self.font.name()
            );
        }

        let mut report = GenerationReport::default();
        for index in 1..=self.config.count {
            let outcome = self.process_index(index)?;
            report.push(index, self.target_path(index), outcome);
        }

        if !self.context.quiet {
            println!(
                "\nAll {} placeholder images ready ({} created, {} skipped)",
                report.len(),
                report.created(),
                report.skipped()
            );
        }

        Ok(report)
    }

    /// Handle a single index: skip if the file exists, otherwise render and write it.
    /// Indices outside `1..=count` are rejected.
    pub fn process_index(&self, index: u32) -> Result<Outcome> {
        if !(1..=self.config.count).contains(&index) {
            anyhow::bail!("Index {} is outside 1..={}", index, self.config.count);
        }

        let path = self.target_path(index);
        let file_name = self.config.file_name(index);

        if path.exists() {
            if !self.context.quiet {
                println!("✓ {} already exists", file_name);
            }
            return Ok(Outcome::Skipped);
        }

        let rendered = render::render_placeholder(&self.config, self.font.as_ref(), index)?;

        let mut encoded: Vec<u8> = Vec::new();
        JpegEncoder::new_with_quality(&mut encoded, self.config.quality)
            .encode_image(&rendered.image)
            .map_err(|e| anyhow::anyhow!("Failed to encode {}: {}", file_name, e))?;

        // create_new so a file that appeared since the existence check is never clobbered
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
        file.write_all(&encoded)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;

        if !self.context.quiet {
            println!("✓ Created {}", file_name);
        }
        if self.context.verbose {
            println!(
                "  background {}, label {:?} at ({}, {}) size {}x{}, {} bytes",
                rendered.background,
                rendered.label,
                rendered.origin.0,
                rendered.origin.1,
                rendered.bounds.width,
                rendered.bounds.height,
                encoded.len()
            );
        }

        Ok(Outcome::Created {
            bytes: encoded.len(),
        })
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .field("font", &self.font.name())
            .field("context", &self.context)
            .finish()
    }
}
