//! FONT/NFNT resource layout
//!
//! A bitmap font resource is a 26-byte header followed, in the same buffer,
//! by the strike (packed 1-bit scanlines), the location table and the
//! offset/width table. [`FontResource::parse`] reads the header once and
//! splits the buffer into bounds-checked views of each region, so nothing
//! downstream ever indexes past the end of the caller's bytes.

use crate::core::errors::DecodeError;
use crate::data::bytes::{decode_words, read_i16, read_u16};
use serde::Serialize;
use std::ops::Range;
use tracing::debug;

/// Size in bytes of the fixed resource header.
pub const HEADER_LEN: usize = 26;

/// Number of pixel columns held by one 16-bit strike word.
const BITS_PER_WORD: usize = 16;

/// The fixed header at the start of every font resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontHeader {
    pub font_type: u16,
    pub first_char: u16,
    pub last_char: u16,
    pub wid_max: i16,
    pub kern_max: i16,
    pub n_descent: i16,
    pub rect_width: i16,
    pub rect_height: i16,
    pub owt_loc: u16,
    pub ascent: i16,
    pub descent: i16,
    pub leading: i16,
    pub row_words: i16,
}

impl FontHeader {
    /// Decode the header fields from the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < HEADER_LEN {
            return Err(DecodeError::TruncatedHeader {
                len: data.len(),
                needed: HEADER_LEN,
            });
        }

        let field = |index: usize| &data[index * 2..index * 2 + 2];

        let header = Self {
            font_type: read_u16(field(0)),
            first_char: read_u16(field(1)),
            last_char: read_u16(field(2)),
            wid_max: read_i16(field(3)),
            kern_max: read_i16(field(4)),
            n_descent: read_i16(field(5)),
            rect_width: read_i16(field(6)),
            rect_height: read_i16(field(7)),
            owt_loc: read_u16(field(8)),
            ascent: read_i16(field(9)),
            descent: read_i16(field(10)),
            leading: read_i16(field(11)),
            row_words: read_i16(field(12)),
        };

        for (name, value) in [
            ("fRectWidth", header.rect_width),
            ("fRectHeight", header.rect_height),
            ("rowWords", header.row_words),
        ] {
            if value < 0 {
                return Err(DecodeError::NegativeField { field: name, value });
            }
        }

        if header.last_char < header.first_char {
            return Err(DecodeError::InvalidCharRange {
                first: header.first_char,
                last: header.last_char,
            });
        }

        Ok(header)
    }

    /// Height of the strike in scanlines.
    pub fn height(&self) -> usize {
        self.rect_height.max(0) as usize
    }

    /// Width of the font bounding rectangle in pixels.
    pub fn width(&self) -> usize {
        self.rect_width.max(0) as usize
    }

    /// Number of 16-bit words in one strike scanline.
    pub fn row_words(&self) -> usize {
        self.row_words.max(0) as usize
    }

    /// Number of character codes to enumerate.
    ///
    /// A resource whose first and last codes are equal is treated as holding
    /// no glyphs at all.
    pub fn char_count(&self) -> usize {
        if self.first_char == self.last_char {
            0
        } else {
            (self.last_char - self.first_char) as usize + 1
        }
    }

    /// Baseline position measured in rows from the top of the strike.
    pub fn baseline(&self) -> i32 {
        self.rect_height as i32 - self.descent as i32
    }
}

/// One character with ink columns in the strike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    /// Character code
    pub code: u16,
    /// Bit columns of the strike that hold this glyph
    pub columns: Range<usize>,
    /// Raw offset/width table entry
    pub offset_width: u16,
}

impl GlyphEntry {
    /// Width of the glyph image in pixels.
    pub fn span(&self) -> usize {
        self.columns.end - self.columns.start
    }

    /// Advance width (escapement) in pixels.
    pub fn advance_width(&self) -> u8 {
        (self.offset_width & 0xff) as u8
    }

    /// Signed kerning offset stored in the high byte of the table entry.
    pub fn kern_offset(&self) -> i8 {
        (self.offset_width >> 8) as u8 as i8
    }

    /// Horizontal position of the glyph image relative to the origin.
    pub fn origin_offset(&self, kern_max: i16) -> i32 {
        self.kern_offset() as i32 + kern_max as i32
    }
}

/// The strike decoded into naturally aligned 16-bit words.
#[derive(Debug, Clone)]
pub struct BitImage {
    words: Vec<u16>,
    row_words: usize,
    height: usize,
}

impl BitImage {
    /// Whether the pixel at (`row`, `column`) is set. Bits are ordered most
    /// significant first within each word.
    pub fn bit(&self, row: usize, column: usize) -> bool {
        let word = self.words[row * self.row_words + column / BITS_PER_WORD];
        (word >> (15 - column % BITS_PER_WORD)) & 1 == 1
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixel columns in each scanline.
    pub fn width(&self) -> usize {
        self.row_words * BITS_PER_WORD
    }
}

/// A parsed view over a font resource buffer.
///
/// The buffer is borrowed and never modified; several resources may be
/// converted at once as long as each has its own `FontResource`.
#[derive(Debug, Clone)]
pub struct FontResource<'a> {
    header: FontHeader,
    bit_image: &'a [u8],
    location_table: &'a [u8],
    offset_width_table: &'a [u8],
}

impl<'a> FontResource<'a> {
    /// Parse and validate a font resource.
    ///
    /// Every region the header implies must fit inside `data`, location
    /// entries must not decrease between consecutive characters, and no
    /// glyph may reach past the strike's scanline width.
    ///
    /// The location table is taken to hold `lastChar - firstChar + 3`
    /// entries, one per character plus the missing-glyph slot and the
    /// sentinel, and the offset/width table starts right after it. A buffer
    /// that stores only `lastChar - firstChar + 2` location entries is
    /// therefore two bytes short and fails with
    /// [`DecodeError::RegionOutOfBounds`] on the offset/width table.
    pub fn parse(data: &'a [u8]) -> Result<Self, DecodeError> {
        let header = FontHeader::parse(data)?;

        let image_len = header.row_words() * header.height() * 2;
        let bit_image = region(data, "bitmap image", HEADER_LEN, image_len)?;

        let char_count = header.char_count();
        let (location_table, offset_width_table) = if char_count == 0 {
            (&data[0..0], &data[0..0])
        } else {
            // Glyph entries, the missing-glyph slot and the closing sentinel
            let location_start = HEADER_LEN + image_len;
            let location_len = (char_count + 2) * 2;
            let location_table = region(data, "location table", location_start, location_len)?;
            let offset_width_table = region(
                data,
                "offset/width table",
                location_start + location_len,
                char_count * 2,
            )?;
            (location_table, offset_width_table)
        };

        debug!(
            "Font resource: chars {}..={}, strike {}x{} ({} words/row), {} bytes",
            header.first_char,
            header.last_char,
            header.row_words() * BITS_PER_WORD,
            header.height(),
            header.row_words(),
            data.len()
        );

        let resource = Self {
            header,
            bit_image,
            location_table,
            offset_width_table,
        };
        resource.validate_locations()?;
        Ok(resource)
    }

    pub fn header(&self) -> &FontHeader {
        &self.header
    }

    /// Copy the strike into an aligned word buffer for pixel access.
    pub fn bit_image(&self) -> BitImage {
        BitImage {
            words: decode_words(self.bit_image),
            row_words: self.header.row_words(),
            height: self.header.height(),
        }
    }

    /// Iterate over every character that has ink columns, in code order.
    /// Characters whose location entries are equal are skipped.
    pub fn glyphs(&self) -> impl Iterator<Item = GlyphEntry> + '_ {
        (0..self.header.char_count()).filter_map(move |index| {
            let start = self.location(index);
            let end = self.location(index + 1);
            if start == end {
                return None;
            }
            Some(GlyphEntry {
                code: self.header.first_char + index as u16,
                columns: start as usize..end as usize,
                offset_width: read_u16(&self.offset_width_table[index * 2..]),
            })
        })
    }

    fn location(&self, index: usize) -> u16 {
        read_u16(&self.location_table[index * 2..])
    }

    fn validate_locations(&self) -> Result<(), DecodeError> {
        let width = self.header.row_words() * BITS_PER_WORD;
        for index in 0..self.header.char_count() {
            let code = self.header.first_char + index as u16;
            let start = self.location(index);
            let end = self.location(index + 1);
            if end < start {
                return Err(DecodeError::DecreasingLocation { code, start, end });
            }
            if end as usize > width {
                return Err(DecodeError::ColumnOutOfRange {
                    code,
                    column: end,
                    width,
                });
            }
        }
        Ok(())
    }
}

fn region<'a>(
    data: &'a [u8],
    name: &'static str,
    start: usize,
    len: usize,
) -> Result<&'a [u8], DecodeError> {
    let end = start + len;
    data.get(start..end).ok_or(DecodeError::RegionOutOfBounds {
        region: name,
        start,
        end,
        len: data.len(),
    })
}
