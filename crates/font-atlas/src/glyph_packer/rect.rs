/// A rectangle inside a glyph surface, in whole pixels.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle given the top-left corner and
    /// width + height
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Create a new rectangle from a pair of inclusive corner points
    pub fn from_inclusive(x1: u32, y1: u32, x2: u32, y2: u32) -> Rect {
        Rect {
            x: x1,
            y: y1,
            w: x2 - x1 + 1,
            h: y2 - y1 + 1,
        }
    }

    #[inline(always)]
    pub fn top(&self) -> u32 {
        self.y
    }

    /// One past the last row
    #[inline(always)]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    #[inline(always)]
    pub fn left(&self) -> u32 {
        self.x
    }

    /// One past the last column
    #[inline(always)]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    #[inline(always)]
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Returns true if (x, y) lies within the rectangle
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}
