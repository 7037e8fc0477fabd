use std::collections::BTreeMap;

use crate::rasterize::GlyphMetrics;
use crate::AtlasError;

mod png;
mod source;

pub use self::png::{write_metrics, ImageEmitter};
pub use self::source::{render_source, SourceHeader, SourceTableEmitter};

/// Advance metrics of every glyph, ordered by character.
pub type GlyphMetricsTable = BTreeMap<char, GlyphMetrics>;

/// Writes a finished atlas to its destination.
pub trait Emitter {
    type Atlas;

    fn emit(&mut self, atlas: Self::Atlas, metrics: &GlyphMetricsTable) -> Result<(), AtlasError>;
}
