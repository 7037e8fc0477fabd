pub mod buffer2d;
mod grid;
mod rect;
mod stream;
mod trim;

pub use self::buffer2d::{composite, Buffer2d};
pub use self::grid::{
    AtlasCanvas, Grid, GridLayout, Pen, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_HEIGHT, CELL_WIDTH,
};
pub use self::rect::Rect;
pub use self::stream::{
    EmbeddedAtlas, GlyphHeader, IndexTable, PackedGlyph, PackedStream, StreamLayout, HEADER_LEN,
};
pub use self::trim::{bottom_edge, left_edge, right_edge, top_edge, trim};

use crate::rasterize::{GlyphMetrics, GlyphRasterizer};
use crate::AtlasError;

/// A strategy for folding rendered glyphs into an atlas.
///
/// Glyphs must be placed in ascending character order; both strategies
/// carry cumulative state (a pen position or a stream offset) from one
/// glyph to the next.
pub trait Layout {
    type Atlas;

    /// Renders `chr` into the atlas and returns its metrics.
    fn place<R: GlyphRasterizer>(&mut self, rasterizer: &R, chr: char)
        -> Result<GlyphMetrics, AtlasError>;

    fn finish(self) -> Self::Atlas;
}
