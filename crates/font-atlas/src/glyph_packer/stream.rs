use std::path::{Path, PathBuf};
use std::slice::Chunks;

use super::{trim, Buffer2d, Layout};
use crate::rasterize::{Glyph, GlyphMetrics, GlyphRasterizer};
use crate::AtlasError;

/// Number of values in a glyph record header.
pub const HEADER_LEN: u32 = 6;

/// Placement of a glyph's trimmed bitmap inside its surface, plus its advance.
///
/// Glyphs without ink use the all-zero header.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GlyphHeader {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    pub advance_width: i32,
    pub advance_height: i32,
}

impl GlyphHeader {
    pub fn values(&self) -> [i64; HEADER_LEN as usize] {
        [
            self.left as i64,
            self.top as i64,
            self.width as i64,
            self.height as i64,
            self.advance_width as i64,
            self.advance_height as i64,
        ]
    }
}

/// One glyph record: header followed by `width * height` inverted alpha
/// samples, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedGlyph {
    pub chr: char,
    pub header: GlyphHeader,
    pub samples: Vec<u8>,
}

impl PackedGlyph {
    /// Trims `glyph` to its inked box and inverts the coverage, so that
    /// full ink encodes as 0 and background as 255.
    pub fn from_glyph(glyph: &Glyph) -> PackedGlyph {
        let bounds = match trim(&glyph.bitmap) {
            Some(bounds) => bounds,
            None => {
                return PackedGlyph {
                    chr: glyph.chr,
                    header: GlyphHeader::default(),
                    samples: Vec::new(),
                }
            }
        };
        let mut samples = Vec::with_capacity(bounds.area() as usize);
        for y in bounds.top()..bounds.bottom() {
            for x in bounds.left()..bounds.right() {
                samples.push(255 - glyph.bitmap.get(x, y).unwrap_or(0));
            }
        }
        PackedGlyph {
            chr: glyph.chr,
            header: GlyphHeader {
                left: bounds.x,
                top: bounds.y,
                width: bounds.w,
                height: bounds.h,
                advance_width: glyph.metrics.advance_width,
                advance_height: glyph.metrics.advance_height,
            },
            samples,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the record in the stream.
    pub fn len(&self) -> u32 {
        HEADER_LEN + self.samples.len() as u32
    }

    /// Sample rows from top to bottom.
    pub fn rows(&self) -> Chunks<'_, u8> {
        self.samples.chunks(self.header.width.max(1) as usize)
    }
}

/// Byte offset of every glyph record, in character order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexTable {
    offsets: Vec<u32>,
}

impl IndexTable {
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// The concatenated glyph records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedStream {
    glyphs: Vec<PackedGlyph>,
    len: u32,
}

impl PackedStream {
    pub fn glyphs(&self) -> &[PackedGlyph] {
        &self.glyphs
    }

    /// Total size of all records.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Output of `StreamLayout`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedAtlas {
    pub index: IndexTable,
    pub stream: PackedStream,
}

impl EmbeddedAtlas {
    /// Appends a record, returning the offset it was stored at.
    pub fn push(&mut self, glyph: PackedGlyph) -> u32 {
        let offset = self.stream.len;
        self.index.offsets.push(offset);
        self.stream.len += glyph.len();
        self.stream.glyphs.push(glyph);
        offset
    }
}

/// Renders each glyph on its own surface, trims it and appends the
/// result to a packed stream.
pub struct StreamLayout {
    pen_y: i32,
    atlas: EmbeddedAtlas,
    debug_dir: Option<PathBuf>,
}

impl StreamLayout {
    /// Glyphs are drawn with their origin at `(0, pen_y)`.
    pub fn new(pen_y: i32) -> StreamLayout {
        StreamLayout {
            pen_y,
            atlas: EmbeddedAtlas::default(),
            debug_dir: None,
        }
    }

    /// Also writes every glyph surface to `<dir>/<code>.png`.
    pub fn with_debug_dir<P: Into<PathBuf>>(mut self, dir: P) -> StreamLayout {
        self.debug_dir = Some(dir.into());
        self
    }

    fn write_debug_image(dir: &Path, glyph: &Glyph) -> Result<(), AtlasError> {
        let path = dir.join(format!("{}.png", glyph.chr as u32));
        let (w, h) = glyph.bitmap.dimensions();
        if w == 0 || h == 0 {
            log::warn!("{} has an empty surface, not writing {}", glyph.chr as u32, path.display());
            return Ok(());
        }
        image::save_buffer(&path, &glyph.bitmap.to_rgba(), w, h, image::ColorType::Rgba8)
            .map_err(|source| AtlasError::Image { path, source })
    }
}

impl Layout for StreamLayout {
    type Atlas = EmbeddedAtlas;

    fn place<R: GlyphRasterizer>(
        &mut self,
        rasterizer: &R,
        chr: char,
    ) -> Result<GlyphMetrics, AtlasError> {
        let glyph = rasterizer.rasterize(chr, self.pen_y);
        if let Some(dir) = &self.debug_dir {
            Self::write_debug_image(dir, &glyph)?;
        }

        let packed = PackedGlyph::from_glyph(&glyph);
        let h = packed.header;
        if packed.is_empty() {
            log::debug!("{} skip", chr as u32);
        } else {
            log::debug!(
                "{} box: ({}, {}, {}, {}) baseline {}",
                chr as u32,
                h.left,
                h.top,
                h.width,
                h.height,
                glyph.baseline
            );
        }
        self.atlas.push(packed);
        Ok(glyph.metrics)
    }

    fn finish(self) -> EmbeddedAtlas {
        self.atlas
    }
}
