use clap::Parser;
use std::path::PathBuf;

use placegen::render::truetype::DEFAULT_PX_HEIGHT;
use placegen::{Generator, GeneratorConfig, TrueTypeFont, parse_color_list};

#[derive(Parser, Debug)]
#[command(name = "placegen")]
#[command(about = "Fill a directory with numbered solid-color placeholder JPEGs")]
struct Cli {
    /// Directory to write the images into (must exist)
    #[arg(value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Number of images to generate
    #[arg(short = 'n', long, default_value_t = placegen::config::DEFAULT_COUNT)]
    count: u32,

    /// Comma separated background colors, e.g. "#FF6B6B,#4ECDC4"
    #[arg(long, value_name = "HEX,...")]
    colors: Option<String>,

    /// TrueType/OpenType font for the labels (defaults to a built-in bitmap font)
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn build_generator(args: Cli) -> anyhow::Result<Generator> {
    let mut config = GeneratorConfig::new(&args.output_dir).with_count(args.count);
    if let Some(list) = &args.colors {
        config = config.with_colors(parse_color_list(list)?);
    }

    let mut generator = Generator::new(config)?
        .with_verbose(args.verbose)
        .with_quiet(args.quiet);

    if let Some(path) = &args.font {
        generator = generator.with_font(Box::new(TrueTypeFont::from_file(path, DEFAULT_PX_HEIGHT)?));
    }

    Ok(generator)
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let generator = build_generator(args)?;
    generator.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_palette() {
        let args = Cli::try_parse_from(["placegen"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.count, 21);
        assert!(args.colors.is_none());
    }

    #[test]
    fn custom_colors_limit_the_count() {
        let args = Cli::try_parse_from(["placegen", "out", "-n", "3", "--colors", "#000,#111"]).unwrap();
        let err = build_generator(args).unwrap_err();
        assert!(err.to_string().contains("exceeds the color table length 2"));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["placegen", "-v", "-q"]).is_err());
    }
}
