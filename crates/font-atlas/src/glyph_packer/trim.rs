use super::{Buffer2d, Rect};

fn row_has_ink<B: Buffer2d<Pixel = u8>>(buf: &B, y: u32) -> bool {
    (0..buf.width()).any(|x| buf.get(x, y).unwrap_or(0) != 0)
}

fn column_has_ink<B: Buffer2d<Pixel = u8>>(buf: &B, x: u32) -> bool {
    (0..buf.height()).any(|y| buf.get(x, y).unwrap_or(0) != 0)
}

/// First row from the top containing a non-zero alpha sample.
pub fn top_edge<B: Buffer2d<Pixel = u8>>(buf: &B) -> Option<u32> {
    (0..buf.height()).find(|&y| row_has_ink(buf, y))
}

/// First row from the bottom containing a non-zero alpha sample.
pub fn bottom_edge<B: Buffer2d<Pixel = u8>>(buf: &B) -> Option<u32> {
    (0..buf.height()).rev().find(|&y| row_has_ink(buf, y))
}

/// First column from the left containing a non-zero alpha sample.
pub fn left_edge<B: Buffer2d<Pixel = u8>>(buf: &B) -> Option<u32> {
    (0..buf.width()).find(|&x| column_has_ink(buf, x))
}

/// First column from the right containing a non-zero alpha sample.
pub fn right_edge<B: Buffer2d<Pixel = u8>>(buf: &B) -> Option<u32> {
    (0..buf.width()).rev().find(|&x| column_has_ink(buf, x))
}

/// Returns the smallest rectangle holding every inked sample of `buf`,
/// or `None` when the surface is fully transparent.
pub fn trim<B: Buffer2d<Pixel = u8>>(buf: &B) -> Option<Rect> {
    let top = top_edge(buf)?;
    // a row with ink implies a column with ink, the remaining scans can't miss
    let bottom = bottom_edge(buf)?;
    let left = left_edge(buf)?;
    let right = right_edge(buf)?;
    Some(Rect::from_inclusive(left, top, right, bottom))
}
