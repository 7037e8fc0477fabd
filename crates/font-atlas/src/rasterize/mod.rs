#![deny(missing_docs)]

mod fixed;
mod metrics;

pub use self::fixed::Fixed;
pub use self::metrics::{scaled_descent, vertical_advance_units};

use super::glyph_packer::{self, composite, Buffer2d};
use super::AtlasError;

/// A TrueType font loaded into memory.
pub struct Font {
    font: rusttype::Font<'static>,
    data: Vec<u8>,
}

impl ::std::fmt::Debug for Font {
    fn fmt(&self, formatter: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        formatter.write_str("Font()")
    }
}

/// The advance of a glyph, rounded up to whole pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    /// Horizontal pen displacement after drawing the glyph
    pub advance_width: i32,
    /// Vertical pen displacement after drawing the glyph
    pub advance_height: i32,
}

/// A rectangular 2d-array of u8 where
/// the values 0 through 255 represent
/// alpha coverage.
#[derive(Debug, Clone)]
pub struct Bitmap {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
}

/// A character rendered onto its own surface.
///
/// The surface is `advance_width` wide and reaches from the top of the
/// em down to `baseline`, the row the glyph's bottom is anchored to.
#[derive(Debug)]
pub struct Glyph {
    /// The character in question
    pub chr: char,
    /// Advance metrics of the character
    pub metrics: GlyphMetrics,
    /// Height of the surface, the pen row plus the face descent, floored
    pub baseline: i32,
    /// Rendered coverage
    pub bitmap: Bitmap,
}

impl Bitmap {
    /// Construct a new empty (all zeros) bitmap
    /// of the given dimensions.
    pub fn new(w: usize, h: usize) -> Bitmap {
        Bitmap {
            bytes: vec![0; w * h],
            width: w,
            height: h,
        }
    }

    /// The width of this bitmap
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of this bitmap
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gain access to the underlying slice of u8.
    pub fn raw(&self) -> &[u8] {
        &self.bytes
    }

    /// Expands the coverage into black RGBA pixels.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.bytes.iter().flat_map(|&a| [0u8, 0, 0, a]).collect()
    }
}

impl glyph_packer::Buffer2d for Bitmap {
    type Pixel = u8;

    fn width(&self) -> u32 {
        self.width as u32
    }

    fn height(&self) -> u32 {
        self.height as u32
    }

    fn get(&self, x: u32, y: u32) -> Option<Self::Pixel> {
        let x = x as usize;
        let y = y as usize;
        if x >= self.width {
            return None;
        }
        self.bytes.get(x + self.width * y).cloned()
    }

    fn set(&mut self, x: u32, y: u32, val: Self::Pixel) {
        let x = x as usize;
        let y = y as usize;
        if x >= self.width {
            return;
        }
        if let Some(p) = self.bytes.get_mut(x + self.width * y) {
            *p = val;
        }
    }
}

/// Renders characters of one face at one fixed pixel scale.
pub trait GlyphRasterizer {
    /// Advance metrics for `chr`.
    fn glyph_metrics(&self, chr: char) -> GlyphMetrics;

    /// Distance from the baseline to the bottom of the face, positive downwards.
    fn descent(&self) -> Fixed;

    /// Composites the coverage of `chr` onto `target` with the glyph
    /// origin (left edge, baseline) placed at `pen`.
    ///
    /// Characters without an outline leave `target` untouched.
    fn draw<B: Buffer2d<Pixel = u8>>(&self, chr: char, pen: (i32, i32), target: &mut B);

    /// The row glyph bottoms are anchored to for a pen at `pen_y`.
    fn baseline(&self, pen_y: i32) -> i32 {
        (Fixed::from_int(pen_y) + self.descent()).floor()
    }

    /// Renders `chr` onto a private surface sized to its advance width
    /// and the baseline of a pen at `(0, pen_y)`.
    fn rasterize(&self, chr: char, pen_y: i32) -> Glyph {
        let metrics = self.glyph_metrics(chr);
        let baseline = self.baseline(pen_y);
        let mut bitmap = Bitmap::new(
            metrics.advance_width.max(0) as usize,
            baseline.max(0) as usize,
        );
        self.draw(chr, (0, pen_y), &mut bitmap);
        Glyph {
            chr,
            metrics,
            baseline,
            bitmap,
        }
    }
}

impl Font {
    /// Parses TrueType data, failing if either the metric tables or
    /// the outlines can't be read.
    pub fn from_bytes(data: Vec<u8>) -> Result<Font, AtlasError> {
        ttf_parser::Face::parse(&data, 0)
            .map_err(|e| AtlasError::InvalidFont(e.to_string()))?;
        let font = rusttype::Font::try_from_vec(data.clone())
            .ok_or_else(|| AtlasError::InvalidFont("no usable outlines".to_owned()))?;
        Ok(Font { font, data })
    }

    fn tables(&self) -> Result<ttf_parser::Face<'_>, AtlasError> {
        ttf_parser::Face::parse(&self.data, 0).map_err(|e| AtlasError::InvalidFont(e.to_string()))
    }

    fn name(&self, name_id: u16) -> String {
        self.tables()
            .ok()
            .and_then(|tables| {
                tables
                    .names()
                    .into_iter()
                    .filter(|name| name.name_id == name_id)
                    .find_map(|name| name.to_string())
            })
            .unwrap_or_else(|| "unknown".to_owned())
    }

    /// Font family, such as "DejaVu Sans Mono".
    pub fn family(&self) -> String {
        self.name(ttf_parser::name_id::FAMILY)
    }

    /// Font subfamily, such as "Bold".
    pub fn subfamily(&self) -> String {
        self.name(ttf_parser::name_id::SUBFAMILY)
    }

    /// Prepares the font for rendering at `points` on a `dpi` screen.
    pub fn at_size(&self, points: u32, dpi: f32) -> Result<Face<'_>, AtlasError> {
        let tables = self.tables()?;
        let ppem = Fixed::from_points(points, dpi);
        let units_per_em = tables.units_per_em();

        // rusttype scales so that ascent - descent spans the given height
        let v_metrics = self.font.v_metrics_unscaled();
        let span = v_metrics.ascent - v_metrics.descent;
        let height = ppem.to_f32() * span / self.font.units_per_em().max(1) as f32;

        // the face metrics use the rounded scale and hhea, whatever OS/2 says
        let descent = scaled_descent(
            Fixed::from_points_rounded(points, dpi),
            tables.tables().hhea.descender,
            units_per_em,
        );

        Ok(Face {
            font: &self.font,
            tables,
            ppem,
            scale: rusttype::Scale::uniform(height),
            descent,
        })
    }
}

/// A font at a fixed pixel scale.
pub struct Face<'a> {
    font: &'a rusttype::Font<'static>,
    tables: ttf_parser::Face<'a>,
    ppem: Fixed,
    scale: rusttype::Scale,
    descent: Fixed,
}

impl<'a> Face<'a> {
    /// Pixels per em.
    pub fn ppem(&self) -> Fixed {
        self.ppem
    }

    fn scale_units(&self, units: i32) -> Fixed {
        Fixed::from_font_units(units, self.ppem, self.tables.units_per_em())
    }

    fn vertical_advance(&self, id: ttf_parser::GlyphId) -> i32 {
        let typographic = self
            .tables
            .typographic_ascender()
            .zip(self.tables.typographic_descender());
        vertical_advance_units(
            self.tables.glyph_ver_advance(id),
            typographic,
            self.tables.units_per_em(),
        )
    }
}

impl<'a> GlyphRasterizer for Face<'a> {
    fn glyph_metrics(&self, chr: char) -> GlyphMetrics {
        let id = match self.tables.glyph_index(chr) {
            Some(id) => id,
            None => {
                log::warn!("no glyph for {:?} (0x{:x}), using .notdef metrics", chr, chr as u32);
                ttf_parser::GlyphId(0)
            }
        };
        let advance_width = self.tables.glyph_hor_advance(id).unwrap_or(0) as i32;
        GlyphMetrics {
            advance_width: self.scale_units(advance_width).ceil(),
            advance_height: self.scale_units(self.vertical_advance(id)).ceil(),
        }
    }

    fn descent(&self) -> Fixed {
        self.descent
    }

    fn draw<B: Buffer2d<Pixel = u8>>(&self, chr: char, pen: (i32, i32), target: &mut B) {
        if self.tables.glyph_index(chr).is_none() {
            return;
        }
        let glyph = self
            .font
            .glyph(chr)
            .scaled(self.scale)
            .positioned(rusttype::point(pen.0 as f32, pen.1 as f32));
        let bb = match glyph.pixel_bounding_box() {
            Some(bb) => bb,
            None => return,
        };
        glyph.draw(|x, y, v| {
            let coverage = (v.min(1.0) * 255.0).round() as u8;
            composite(target, bb.min.x + x as i32, bb.min.y + y as i32, coverage);
        });
    }
}
