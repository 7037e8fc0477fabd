use std::fs;
use std::path::PathBuf;

use font_atlas::emit::{ImageEmitter, SourceHeader, SourceTableEmitter};
use font_atlas::glyph_packer::{
    composite, Buffer2d, GridLayout, Pen, StreamLayout, HEADER_LEN,
};
use font_atlas::rasterize::{Fixed, GlyphMetrics, GlyphRasterizer};
use font_atlas::{build_atlas, CHARS};

const PEN_Y: i32 = 16;

/// Draws every character as a solid block resting on the baseline.
/// Characters whose code is a multiple of five have no ink.
struct BlockFont;

impl BlockFont {
    fn block(chr: char) -> Option<(i32, i32)> {
        let code = chr as i32;
        if code % 5 == 0 {
            None
        } else {
            Some((3 + code % 4, 5 + code % 6))
        }
    }
}

impl GlyphRasterizer for BlockFont {
    fn glyph_metrics(&self, chr: char) -> GlyphMetrics {
        GlyphMetrics {
            advance_width: 8 + chr as i32 % 3,
            advance_height: 19,
        }
    }

    fn descent(&self) -> Fixed {
        Fixed(4 * 64 + 10)
    }

    fn draw<B: Buffer2d<Pixel = u8>>(&self, chr: char, pen: (i32, i32), target: &mut B) {
        if let Some((w, h)) = Self::block(chr) {
            for y in pen.1 - h..pen.1 {
                for x in pen.0 + 1..pen.0 + 1 + w {
                    composite(target, x, y, 255);
                }
            }
        }
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("font-atlas-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn grid_atlas_places_each_glyph_in_its_cell() {
    let dir = scratch_dir("grid");
    let path = dir.join("atlas.png");
    let mut emitter = ImageEmitter::new(&path, Vec::new());
    let layout = GridLayout::new(PEN_Y);
    let grid = *layout.grid();

    let metrics = build_atlas(&BlockFont, CHARS, layout, &mut emitter).unwrap();
    assert_eq!(metrics.len(), 94);

    let printed = String::from_utf8(emitter.into_inner()).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 94);
    assert_eq!(lines[0], "{33, CharMetrics{8, 19}},");
    assert_eq!(lines[93], "{126, CharMetrics{8, 19}},");

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (512, 256));
    for (i, chr) in CHARS.enumerate() {
        let pen = Pen::for_glyph(i + 1, PEN_Y, &grid);
        let inked = image.get_pixel((pen.x + 1) as u32, (pen.y - 1) as u32)[3];
        match BlockFont::block(chr) {
            Some(_) => assert_eq!(inked, 255, "{:?}", chr),
            None => assert_eq!(inked, 0, "{:?}", chr),
        }
    }
}

#[test]
fn metrics_come_out_sorted_whatever_the_order() {
    let dir = scratch_dir("reversed");
    let mut emitter = ImageEmitter::new(dir.join("atlas.png"), Vec::new());
    build_atlas(&BlockFont, CHARS.rev(), GridLayout::new(PEN_Y), &mut emitter).unwrap();

    let printed = String::from_utf8(emitter.into_inner()).unwrap();
    let codes: Vec<u32> = printed
        .lines()
        .map(|l| l[1..l.find(',').unwrap()].parse().unwrap())
        .collect();
    let expected: Vec<u32> = CHARS.map(|c| c as u32).collect();
    assert_eq!(codes, expected);
}

#[test]
fn stream_atlas_indexes_every_record() {
    let dir = scratch_dir("stream");
    let debug = dir.join("debug");
    fs::create_dir_all(&debug).unwrap();
    let path = dir.join("atlas.h");
    let header = SourceHeader {
        family: "Block".to_owned(),
        subfamily: "Regular".to_owned(),
        size: 16,
    };
    let mut emitter = SourceTableEmitter::new(&path, header);
    let layout = StreamLayout::new(PEN_Y).with_debug_dir(&debug);

    let metrics = build_atlas(&BlockFont, CHARS, layout, &mut emitter).unwrap();
    assert_eq!(metrics.len(), 94);
    assert_eq!(fs::read_dir(&debug).unwrap().count(), 94);

    // baseline = floor(16 + 4.15625)
    let surface = image::open(debug.join("65.png")).unwrap();
    assert_eq!(surface.to_rgba8().dimensions(), (10, 20));

    let text = fs::read_to_string(&path).unwrap();
    let indexes_line = text
        .lines()
        .find(|l| l.starts_with("\t.indexes = {"))
        .unwrap();
    let inner = &indexes_line["\t.indexes = {".len()..indexes_line.len() - 2];
    let indexes: Vec<u32> = inner.split(", ").map(|v| v.parse().unwrap()).collect();
    assert_eq!(indexes.len(), 94);

    let mut expected = 0;
    for (i, chr) in CHARS.enumerate() {
        assert_eq!(indexes[i], expected, "{:?}", chr);
        expected += HEADER_LEN;
        if let Some((w, h)) = BlockFont::block(chr) {
            expected += (w * h) as u32;
        }
    }
    let last = CHARS.last().unwrap();
    let last_len = HEADER_LEN
        + BlockFont::block(last)
            .map(|(w, h)| (w * h) as u32)
            .unwrap_or(0);
    assert_eq!(indexes[93] + last_len, expected);

    assert!(text.contains("\t\t// character: backslash\n"));
    // '#' is 35, a blank
    assert!(text.contains("\t\t// character: #\n\t\t0, 0, 0, 0, 0, 0,\n\n"));
    // 'A' is 65, also blank; 'B' is 66: 5x5 block at (1, 11)
    assert!(text.contains("\t\t// character: B\n\t\t1, 11, 5, 5, 8, 19,\n\t\t0x0, 0x0, 0x0, 0x0, 0x0,\n"));
}
