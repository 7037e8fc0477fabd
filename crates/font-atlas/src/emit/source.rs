use std::fs;
use std::path::PathBuf;

use super::{Emitter, GlyphMetricsTable};
use crate::glyph_packer::{EmbeddedAtlas, PackedGlyph};
use crate::AtlasError;

/// What the comment block at the top of the table names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHeader {
    pub family: String,
    pub subfamily: String,
    pub size: u32,
}

fn char_name(chr: char) -> String {
    match chr {
        '\\' => "backslash".to_owned(),
        _ => chr.to_string(),
    }
}

fn render_glyph(out: &mut String, glyph: &PackedGlyph) {
    out.push_str(&format!("\t\t// character: {}\n", char_name(glyph.chr)));
    let header: Vec<String> = glyph.header.values().iter().map(|v| v.to_string()).collect();
    out.push_str(&format!("\t\t{},\n", header.join(", ")));
    if glyph.is_empty() {
        return;
    }
    for row in glyph.rows() {
        let row: Vec<String> = row.iter().map(|b| format!("0x{:x}", b)).collect();
        out.push_str(&format!("\t\t{},\n", row.join(", ")));
    }
}

/// Renders the index table and packed stream as a `font_t` initializer.
pub fn render_source(header: &SourceHeader, atlas: &EmbeddedAtlas) -> String {
    let mut out = String::new();
    out.push_str("#include <stdint.h>\n\n");
    out.push_str("#include \"font/font.h\"\n\n");
    out.push_str(&format!("// font: {} ({})\n", header.family, header.subfamily));
    out.push_str(&format!("// size: {}\n", header.size));
    out.push_str("const font_t font = {\n");

    let indexes: Vec<String> = atlas.index.offsets().iter().map(|i| i.to_string()).collect();
    out.push_str(&format!("\t.indexes = {{{}}},\n", indexes.join(", ")));

    out.push_str("\t.data = {\n");
    for (i, glyph) in atlas.stream.glyphs().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_glyph(&mut out, glyph);
    }
    out.push_str("\t}\n");
    out.push_str("};\n");
    out
}

/// Writes the embedded atlas as a C header.
pub struct SourceTableEmitter {
    path: PathBuf,
    header: SourceHeader,
}

impl SourceTableEmitter {
    pub fn new<P: Into<PathBuf>>(path: P, header: SourceHeader) -> SourceTableEmitter {
        SourceTableEmitter {
            path: path.into(),
            header,
        }
    }
}

impl Emitter for SourceTableEmitter {
    type Atlas = EmbeddedAtlas;

    fn emit(&mut self, atlas: EmbeddedAtlas, _metrics: &GlyphMetricsTable) -> Result<(), AtlasError> {
        let source = render_source(&self.header, &atlas);
        fs::write(&self.path, source).map_err(|source| AtlasError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!(
            "wrote {} ({} glyphs, {} bytes of data)",
            self.path.display(),
            atlas.index.len(),
            atlas.stream.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph_packer::GlyphHeader;

    fn header() -> SourceHeader {
        SourceHeader {
            family: "Test Mono".to_owned(),
            subfamily: "Regular".to_owned(),
            size: 16,
        }
    }

    #[test]
    fn renders_full_table() {
        let mut atlas = EmbeddedAtlas::default();
        atlas.push(PackedGlyph {
            chr: '!',
            header: GlyphHeader {
                left: 1,
                top: 2,
                width: 2,
                height: 2,
                advance_width: 5,
                advance_height: 19,
            },
            samples: vec![0, 255, 16, 0],
        });
        atlas.push(PackedGlyph {
            chr: '\\',
            header: GlyphHeader::default(),
            samples: Vec::new(),
        });

        let expected = "#include <stdint.h>\n\
\n\
#include \"font/font.h\"\n\
\n\
// font: Test Mono (Regular)\n\
// size: 16\n\
const font_t font = {\n\
\t.indexes = {0, 10},\n\
\t.data = {\n\
\t\t// character: !\n\
\t\t1, 2, 2, 2, 5, 19,\n\
\t\t0x0, 0xff,\n\
\t\t0x10, 0x0,\n\
\n\
\t\t// character: backslash\n\
\t\t0, 0, 0, 0, 0, 0,\n\
\t}\n\
};\n";
        assert_eq!(render_source(&header(), &atlas), expected);
    }

    #[test]
    fn empty_atlas_still_closes() {
        let text = render_source(&header(), &EmbeddedAtlas::default());
        assert!(text.contains("\t.indexes = {},\n"));
        assert!(text.ends_with("\t.data = {\n\t}\n};\n"));
    }
}
