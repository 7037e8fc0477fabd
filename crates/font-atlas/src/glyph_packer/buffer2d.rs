/// A rectangular grid of samples addressed by column and row.
///
/// Both the per-glyph surfaces of the embedded format and the shared
/// atlas canvas implement this, so rasterizers and the trimming scans
/// never need to know which one they are looking at.
pub trait Buffer2d: Sized {
    type Pixel;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn get(&self, x: u32, y: u32) -> Option<Self::Pixel>;
    fn set(&mut self, x: u32, y: u32, _val: Self::Pixel);

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Composites `coverage` over the alpha already stored at (x, y).
///
/// Coordinates outside of the buffer are clipped silently, which is how
/// glyphs overflowing their cell (or their private surface) are handled.
pub fn composite<B: Buffer2d<Pixel = u8>>(buf: &mut B, x: i32, y: i32, coverage: u8) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= buf.width() || y >= buf.height() {
        return;
    }
    let dst = buf.get(x, y).unwrap_or(0) as u32;
    let src = coverage as u32;
    // porter-duff over, rounded
    let out = src + (dst * (255 - src) + 127) / 255;
    buf.set(x, y, out.min(255) as u8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterize::Bitmap;

    #[test]
    fn composite_clips_outside() {
        let mut bitmap = Bitmap::new(2, 2);
        composite(&mut bitmap, -1, 0, 255);
        composite(&mut bitmap, 0, 2, 255);
        composite(&mut bitmap, 2, 0, 255);
        assert!(bitmap.raw().iter().all(|&a| a == 0));
    }

    #[test]
    fn composite_accumulates_over() {
        let mut bitmap = Bitmap::new(1, 1);
        composite(&mut bitmap, 0, 0, 128);
        assert_eq!(bitmap.get(0, 0), Some(128));
        composite(&mut bitmap, 0, 0, 128);
        assert_eq!(bitmap.get(0, 0), Some(192));
        composite(&mut bitmap, 0, 0, 255);
        assert_eq!(bitmap.get(0, 0), Some(255));
    }
}
