//! End-to-end decoding scenarios on hand-built fonts

use super::{sample_font, FontResourceBuilder};
use crate::data::bdf::{write_bdf, SWIDTH_SCALE};
use crate::font_source::{FontResource, FontSummary};
use crate::rendering::rasterizer::render_glyphs;

/// A 3x5 pixel font holding the digits 0, 1 and 2, with an empty slot
/// for '3' and the baseline below the last row.
fn digits_font() -> Vec<u8> {
    // Columns: '0' 0..3, '1' 3..6, '2' 6..9
    let rows = [
        0b1110_1011_1000_0000,
        0b1011_1000_1000_0000,
        0b1010_1011_1000_0000,
        0b1010_1010_0000_0000,
        0b1111_1111_1000_0000,
    ];
    FontResourceBuilder::new(0x30, 0x33)
        .height(5)
        .row_words(1)
        .rect_width(4)
        .ascent(5)
        .descent(0)
        .rows(&rows)
        .glyph(0, 3, 0x0004)
        .glyph(3, 6, 0x0004)
        .glyph(6, 9, 0x0004)
        .glyph(9, 9, 0x0000)
        .build()
}

fn bdf_text(data: &[u8], name: &str, size: u16) -> String {
    let resource = FontResource::parse(data).unwrap();
    let summary = FontSummary::from_resource(&resource);
    let mut out = Vec::new();
    write_bdf(&resource, &summary, name, size, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_two_character_scenario() {
    let text = bdf_text(&sample_font(), "Sample-12", 12);

    assert!(text.contains("CHARS 1\n"));
    assert!(text.contains("STARTCHAR GCID41\n"));
    assert!(!text.contains("GCID42"));
    assert!(text.contains("BBX 4 1 "));
    assert!(text.contains("BITMAP\nA0\nENDCHAR\n"));
}

#[test]
fn test_digits_font_document() {
    let text = bdf_text(&digits_font(), "Digits-5", 5);

    assert!(text.contains("FONTBOUNDINGBOX 3 5 0 0\n"));
    assert!(text.contains("CHARS 3\n"));
    assert_eq!(text.matches("STARTCHAR").count(), 3);
    assert_eq!(text.matches("ENDCHAR").count(), 3);
    assert!(!text.contains("ENCODING 51"));

    let one = "\
STARTCHAR GCID31
ENCODING 49
SWIDTH 2880 0
DWIDTH 4 0
BBX 3 5 0 0
BITMAP
40
C0
40
40
E0
ENDCHAR
";
    assert!(text.contains(one), "missing glyph '1' in:\n{text}");
}

#[test]
fn test_every_glyph_reproduces_its_pixels() {
    let data = digits_font();
    let resource = FontResource::parse(&data).unwrap();
    let image = resource.bit_image();

    for glyph in render_glyphs(&resource) {
        let bounds = glyph.bounds.unwrap();
        for row in 0..image.height() {
            for column in 0..glyph.entry.span() {
                let source = image.bit(row, glyph.entry.columns.start + column);
                assert_eq!(glyph.raster.get(row, column), source);
                if source {
                    assert!(bounds.contains(row, column));
                }
            }
        }
    }
}

#[test]
fn test_swidth_matches_dwidth_everywhere() {
    let text = bdf_text(&digits_font(), "Digits-5", 5);
    let pairs: Vec<(i32, i32)> = text
        .lines()
        .filter_map(|line| line.strip_prefix("SWIDTH "))
        .zip(text.lines().filter_map(|line| line.strip_prefix("DWIDTH ")))
        .map(|(s, d)| {
            let s = s.split(' ').next().unwrap().parse().unwrap();
            let d = d.split(' ').next().unwrap().parse().unwrap();
            (s, d)
        })
        .collect();

    assert_eq!(pairs.len(), 3);
    for (s, d) in pairs {
        assert_eq!(s, d * SWIDTH_SCALE);
    }
}

#[test]
fn test_same_first_and_last_char_is_empty() {
    let data = FontResourceBuilder::new(0x41, 0x41)
        .rows(&[0xffff])
        .glyph(0, 8, 0x0008)
        .build();
    let resource = FontResource::parse(&data).unwrap();
    let summary = FontSummary::from_resource(&resource);
    assert_eq!(summary.glyph_count, 0);
    assert_eq!(summary.ink_bounds, None);
    assert!(bdf_text(&data, "One-12", 12).is_empty());
}
