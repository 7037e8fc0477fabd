use std::io::{self, Write};
use std::path::PathBuf;

use image::ImageFormat;

use super::{Emitter, GlyphMetricsTable};
use crate::glyph_packer::AtlasCanvas;
use crate::AtlasError;

/// Prints one `{code, CharMetrics{w, h}},` initializer per glyph.
pub fn write_metrics<W: Write>(out: &mut W, metrics: &GlyphMetricsTable) -> io::Result<()> {
    for (chr, m) in metrics {
        writeln!(
            out,
            "{{{}, CharMetrics{{{}, {}}}}},",
            *chr as u32, m.advance_width, m.advance_height
        )?;
    }
    out.flush()
}

/// Saves the grid canvas as a PNG and prints the metrics table to `out`.
pub struct ImageEmitter<W: Write> {
    path: PathBuf,
    out: W,
}

impl<W: Write> ImageEmitter<W> {
    pub fn new<P: Into<PathBuf>>(path: P, out: W) -> ImageEmitter<W> {
        ImageEmitter {
            path: path.into(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for ImageEmitter<W> {
    type Atlas = AtlasCanvas;

    fn emit(&mut self, atlas: AtlasCanvas, metrics: &GlyphMetricsTable) -> Result<(), AtlasError> {
        write_metrics(&mut self.out, metrics).map_err(AtlasError::Output)?;
        atlas
            .image()
            .save_with_format(&self.path, ImageFormat::Png)
            .map_err(|source| AtlasError::Image {
                path: self.path.clone(),
                source,
            })?;
        log::info!("wrote {}", self.path.display());
        Ok(())
    }
}
