use image::{Rgba, RgbaImage};

use super::{Buffer2d, Layout};
use crate::rasterize::{GlyphMetrics, GlyphRasterizer};
use crate::AtlasError;

pub const CANVAS_WIDTH: u32 = 512;
pub const CANVAS_HEIGHT: u32 = 256;
pub const CELL_WIDTH: u32 = 32;
pub const CELL_HEIGHT: u32 = 32;

/// Cell geometry of the grid, fixed before the first glyph is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cell_width: u32,
    pub cell_height: u32,
    /// Cells per row.
    pub row_size: u32,
}

impl Grid {
    pub fn new(canvas_width: u32, cell_width: u32, cell_height: u32) -> Grid {
        let cell_width = cell_width.max(1);
        Grid {
            cell_width,
            cell_height,
            row_size: (canvas_width / cell_width).max(1),
        }
    }
}

/// Position of the glyph origin for the next glyph to be drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pen {
    pub x: i32,
    pub y: i32,
}

impl Pen {
    pub fn start(origin_y: i32) -> Pen {
        Pen { x: 0, y: origin_y }
    }

    /// Moves the pen past the `placed`-th glyph, counting from 1.
    pub fn advance(self, placed: usize, grid: &Grid) -> Pen {
        if placed % grid.row_size as usize == 0 {
            Pen {
                x: 0,
                y: self.y + grid.cell_height as i32,
            }
        } else {
            Pen {
                x: self.x + grid.cell_width as i32,
                y: self.y,
            }
        }
    }

    /// Where the `k`-th glyph (counting from 1) is drawn.
    pub fn for_glyph(k: usize, origin_y: i32, grid: &Grid) -> Pen {
        let i = k.saturating_sub(1);
        let row_size = grid.row_size as usize;
        Pen {
            x: ((i % row_size) as u32 * grid.cell_width) as i32,
            y: origin_y + (i / row_size) as i32 * grid.cell_height as i32,
        }
    }
}

/// The RGBA surface every glyph of the grid is composited onto.
///
/// Ink is black, only the alpha channel carries coverage.
#[derive(Debug, Clone)]
pub struct AtlasCanvas {
    image: RgbaImage,
}

impl AtlasCanvas {
    pub fn new(width: u32, height: u32) -> AtlasCanvas {
        AtlasCanvas {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Buffer2d for AtlasCanvas {
    type Pixel = u8;

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y)[3])
        } else {
            None
        }
    }

    fn set(&mut self, x: u32, y: u32, val: u8) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Rgba([0, 0, 0, val]));
        }
    }
}

/// Draws every glyph straight onto a shared canvas, one fixed-size cell
/// per glyph, left to right and wrapping every `row_size` glyphs.
///
/// Glyphs larger than a cell are not reflowed and bleed into their
/// neighbours; anything past the canvas edge is clipped.
pub struct GridLayout {
    canvas: AtlasCanvas,
    grid: Grid,
    pen: Pen,
    placed: usize,
}

impl GridLayout {
    /// The 512x256 canvas with 32x32 cells, pen starting at row `origin_y`.
    pub fn new(origin_y: i32) -> GridLayout {
        GridLayout::with_geometry(
            AtlasCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            CELL_WIDTH,
            CELL_HEIGHT,
            origin_y,
        )
    }

    pub fn with_geometry(
        canvas: AtlasCanvas,
        cell_width: u32,
        cell_height: u32,
        origin_y: i32,
    ) -> GridLayout {
        let grid = Grid::new(canvas.width(), cell_width, cell_height);
        GridLayout {
            canvas,
            grid,
            pen: Pen::start(origin_y),
            placed: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }
}

impl Layout for GridLayout {
    type Atlas = AtlasCanvas;

    fn place<R: GlyphRasterizer>(
        &mut self,
        rasterizer: &R,
        chr: char,
    ) -> Result<GlyphMetrics, AtlasError> {
        let metrics = rasterizer.glyph_metrics(chr);
        log::debug!("{} at ({}, {})", chr as u32, self.pen.x, self.pen.y);
        rasterizer.draw(chr, (self.pen.x, self.pen.y), &mut self.canvas);
        self.placed += 1;
        self.pen = self.pen.advance(self.placed, &self.grid);
        Ok(metrics)
    }

    fn finish(self) -> AtlasCanvas {
        self.canvas
    }
}
