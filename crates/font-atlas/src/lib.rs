use std::fmt;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Contains methods and structures for laying glyphs out into an atlas.
pub mod glyph_packer;
/// Contains methods and structures for rasterizing font files to bitmaps.
pub mod rasterize;
/// Contains the sinks that write finished atlases out.
pub mod emit;

use emit::{Emitter, GlyphMetricsTable};
use glyph_packer::Layout;
use rasterize::GlyphRasterizer;

/// The printable ASCII characters every atlas holds, space excluded.
pub const CHARS: RangeInclusive<char> = '!'..='~';

/// Everything that can abort an atlas build.
#[derive(Debug)]
pub enum AtlasError {
    /// A file could not be read or written
    Io { path: PathBuf, source: io::Error },
    /// An image could not be encoded or written
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Writing to an output stream failed
    Output(io::Error),
    /// The font data could not be parsed
    InvalidFont(String),
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AtlasError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            AtlasError::Image { path, source } => write!(f, "{}: {}", path.display(), source),
            AtlasError::Output(e) => write!(f, "failed to write output: {}", e),
            AtlasError::InvalidFont(reason) => write!(f, "invalid font: {}", reason),
        }
    }
}

impl std::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AtlasError::Io { source, .. } => Some(source),
            AtlasError::Image { source, .. } => Some(source),
            AtlasError::Output(e) => Some(e),
            AtlasError::InvalidFont(_) => None,
        }
    }
}

/// Loads a font from a location on the file system.
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<rasterize::Font, AtlasError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AtlasError::Io {
        path: path.to_owned(),
        source,
    })?;
    load_font_from_bytes(bytes)
}

/// Loads a font from bytes in memory.
pub fn load_font_from_bytes(bytes: Vec<u8>) -> Result<rasterize::Font, AtlasError> {
    rasterize::Font::from_bytes(bytes)
}

/// Places every character of `chars` with `layout`, in order, and hands
/// the finished atlas to `emitter`.
///
/// Returns the metrics table that was passed to the emitter.
pub fn build_atlas<R, L, E, I>(
    rasterizer: &R,
    chars: I,
    mut layout: L,
    emitter: &mut E,
) -> Result<GlyphMetricsTable, AtlasError>
where
    R: GlyphRasterizer,
    L: Layout,
    E: Emitter<Atlas = L::Atlas>,
    I: IntoIterator<Item = char>,
{
    let mut metrics = GlyphMetricsTable::new();
    for chr in chars {
        let m = layout.place(rasterizer, chr)?;
        metrics.insert(chr, m);
    }
    emitter.emit(layout.finish(), &metrics)?;
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_printable_ascii() {
        assert_eq!(CHARS.clone().count(), 94);
        assert_eq!(CHARS.clone().next(), Some('!'));
        assert_eq!(CHARS.clone().last(), Some('~'));
    }

    #[test]
    fn garbage_is_not_a_font() {
        match load_font_from_bytes(b"definitely not a font".to_vec()) {
            Err(AtlasError::InvalidFont(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("font-atlas-missing/nope.ttf");
        let err = load_font(&path).unwrap_err();
        assert!(err.to_string().contains("nope.ttf"));
    }
}
