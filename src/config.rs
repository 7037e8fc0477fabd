use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const MAX_FONT_SIZE: u32 = 4096;
pub const MAX_DPI: f32 = 4800.0;

fn parse_dpi(s: &str) -> Result<f32, String> {
    let dpi: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if dpi.is_finite() && dpi > 0.0 && dpi <= MAX_DPI {
        Ok(dpi)
    } else {
        Err(format!("must be above 0 and at most {}", MAX_DPI))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 512x256 grid image plus a metrics table on stdout
    Png,
    /// Trimmed bitmaps packed into a C header
    C,
}

#[derive(Parser, Debug)]
#[command(name = "atlas-builder", about = "Builds a glyph atlas from a TrueType font")]
pub struct Config {
    /// The path to the TrueType font to use
    #[arg(long)]
    pub font_path: PathBuf,

    /// The size, in points, of the font
    #[arg(
        long,
        default_value_t = 16,
        value_parser = clap::value_parser!(u32).range(1..=MAX_FONT_SIZE as i64)
    )]
    pub font_size: u32,

    /// The screen resolution to use, in dots per inch
    #[arg(long, default_value_t = 72.0, value_parser = parse_dpi)]
    pub dpi: f32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    pub output_format: OutputFormat,

    /// Directory atlas.png, atlas.h and debug/ are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}
