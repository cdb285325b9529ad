//! Test fixtures for building font resource buffers by hand

mod scenarios;

use super::resource::HEADER_LEN;

/// Builds a byte buffer laid out like a FONT/NFNT resource.
///
/// Glyphs are added in character order with `glyph(start, end, offset_width)`
/// and must abut, since the location table only stores start columns. The
/// last glyph's end fills the missing-glyph slot and the sentinel, and
/// characters without an explicit glyph get an empty column range there.
#[derive(Debug, Clone)]
pub(crate) struct FontResourceBuilder {
    font_type: u16,
    first_char: u16,
    last_char: u16,
    wid_max: i16,
    kern_max: i16,
    rect_width: Option<i16>,
    height: i16,
    row_words: i16,
    ascent: i16,
    descent: i16,
    leading: i16,
    rows: Vec<u16>,
    glyphs: Vec<(u16, u16, u16)>,
}

impl FontResourceBuilder {
    pub(crate) fn new(first_char: u16, last_char: u16) -> Self {
        Self {
            font_type: 0x9000,
            first_char,
            last_char,
            wid_max: 8,
            kern_max: 0,
            rect_width: None,
            height: 1,
            row_words: 1,
            ascent: 1,
            descent: 0,
            leading: 0,
            rows: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    pub(crate) fn font_type(mut self, font_type: u16) -> Self {
        self.font_type = font_type;
        self
    }

    pub(crate) fn kern_max(mut self, kern_max: i16) -> Self {
        self.kern_max = kern_max;
        self
    }

    pub(crate) fn rect_width(mut self, width: i16) -> Self {
        self.rect_width = Some(width);
        self
    }

    pub(crate) fn height(mut self, height: i16) -> Self {
        self.height = height;
        self
    }

    pub(crate) fn row_words(mut self, row_words: i16) -> Self {
        self.row_words = row_words;
        self
    }

    pub(crate) fn ascent(mut self, ascent: i16) -> Self {
        self.ascent = ascent;
        self
    }

    pub(crate) fn descent(mut self, descent: i16) -> Self {
        self.descent = descent;
        self
    }

    /// Strike words in row-major order. Missing words are zero.
    pub(crate) fn rows(mut self, words: &[u16]) -> Self {
        self.rows = words.to_vec();
        self
    }

    pub(crate) fn glyph(mut self, start: u16, end: u16, offset_width: u16) -> Self {
        self.glyphs.push((start, end, offset_width));
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let char_count = (self.last_char - self.first_char) as usize + 1;
        let strike_words = self.row_words as usize * self.height as usize;
        let rect_width = self.rect_width.unwrap_or(self.row_words * 16);
        let owt_loc = (strike_words + char_count + 2) as u16 + 4;

        let mut data = Vec::with_capacity(HEADER_LEN + strike_words * 2);
        for value in [
            self.font_type,
            self.first_char,
            self.last_char,
            self.wid_max as u16,
            self.kern_max as u16,
            (-self.descent) as u16,
            rect_width as u16,
            self.height as u16,
            owt_loc,
            self.ascent as u16,
            self.descent as u16,
            self.leading as u16,
            self.row_words as u16,
        ] {
            data.extend_from_slice(&value.to_be_bytes());
        }

        for index in 0..strike_words {
            let word = self.rows.get(index).copied().unwrap_or(0);
            data.extend_from_slice(&word.to_be_bytes());
        }

        for pair in self.glyphs.windows(2) {
            assert_eq!(pair[0].1, pair[1].0, "glyph columns must abut");
        }

        let last_end = self.glyphs.last().map(|glyph| glyph.1).unwrap_or(0);
        for index in 0..char_count + 2 {
            let location = self.glyphs.get(index).map(|glyph| glyph.0).unwrap_or(last_end);
            data.extend_from_slice(&location.to_be_bytes());
        }

        for index in 0..char_count {
            let offset_width = self.glyphs.get(index).map(|glyph| glyph.2).unwrap_or(0);
            data.extend_from_slice(&offset_width.to_be_bytes());
        }

        data
    }
}

/// The two-character font used throughout the tests: `A` is `1010` in
/// columns 0..4 with an advance of 8, `B` has no ink columns.
pub(crate) fn sample_font() -> Vec<u8> {
    FontResourceBuilder::new(65, 66)
        .height(1)
        .row_words(1)
        .rows(&[0b1010_0000_0000_0000])
        .glyph(0, 4, 0x0008)
        .glyph(4, 4, 0x0000)
        .build()
}
