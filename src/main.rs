mod config;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use font_atlas::emit::{ImageEmitter, SourceHeader, SourceTableEmitter};
use font_atlas::glyph_packer::{GridLayout, StreamLayout};
use font_atlas::{build_atlas, load_font, CHARS};

use config::{Config, OutputFormat};

fn run(config: &Config) -> Result<()> {
    let font = load_font(&config.font_path)
        .with_context(|| format!("Loading font {}", config.font_path.display()))?;
    let family = font.family();
    let subfamily = font.subfamily();
    log::info!("Creating font atlas for '{}' ({})", family, subfamily);

    let face = font
        .at_size(config.font_size, config.dpi)
        .context("Scaling font")?;
    log::info!(
        "{}pt at {} dpi is {} px per em",
        config.font_size,
        config.dpi,
        face.ppem().to_f32()
    );
    // the pen starts one em down, using the point size as a pixel row
    let pen_y = config.font_size as i32;

    match config.output_format {
        OutputFormat::Png => {
            let stdout = std::io::stdout();
            let mut emitter = ImageEmitter::new(config.output_dir.join("atlas.png"), stdout.lock());
            build_atlas(&face, CHARS, GridLayout::new(pen_y), &mut emitter)
                .context("Building png atlas")?;
        }
        OutputFormat::C => {
            let debug_dir = config.output_dir.join("debug");
            fs::create_dir_all(&debug_dir)
                .with_context(|| format!("Creating {}", debug_dir.display()))?;
            let header = SourceHeader {
                family,
                subfamily,
                size: config.font_size,
            };
            let mut emitter = SourceTableEmitter::new(config.output_dir.join("atlas.h"), header);
            let layout = StreamLayout::new(pen_y).with_debug_dir(debug_dir);
            build_atlas(&face, CHARS, layout, &mut emitter).context("Building C atlas")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .context("Initializing logger")?;

    run(&config)
}
