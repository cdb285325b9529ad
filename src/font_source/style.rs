//! QuickDraw style bits and the names derived from them

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

bitflags! {
    /// Style bits of a font family member, as stored in the family record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StyleMask: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const OUTLINE = 1 << 3;
        const SHADOW = 1 << 4;
        const CONDENSE = 1 << 5;
        const EXTEND = 1 << 6;
    }
}

/// Name fragment for each style bit, in output order.
const STYLE_FRAGMENTS: [(StyleMask, &str); 7] = [
    (StyleMask::BOLD, "Bold"),
    (StyleMask::ITALIC, "Italic"),
    (StyleMask::UNDERLINE, "Underlined"),
    (StyleMask::OUTLINE, "Outlined"),
    (StyleMask::SHADOW, "Shadowed"),
    (StyleMask::CONDENSE, "Condensed"),
    (StyleMask::EXTEND, "Extended"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleParseError {
    #[error("unknown style '{0}' (expected bold, italic, underline, outline, shadow, condense, extend or plain)")]
    UnknownName(String),

    #[error("style mask {0} does not fit in 8 bits")]
    OutOfRange(String),
}

impl StyleMask {
    /// Concatenated fragment names of every set bit, e.g. `"BoldItalic"`.
    /// The plain style yields an empty string.
    pub fn name(&self) -> String {
        style_name(*self)
    }

    /// Look up one user-facing style name such as `bold` or `Shadowed`.
    fn from_style_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "" | "plain" | "regular" => Some(Self::empty()),
            "bold" => Some(Self::BOLD),
            "italic" => Some(Self::ITALIC),
            "underline" | "underlined" => Some(Self::UNDERLINE),
            "outline" | "outlined" => Some(Self::OUTLINE),
            "shadow" | "shadowed" => Some(Self::SHADOW),
            "condense" | "condensed" => Some(Self::CONDENSE),
            "extend" | "extended" => Some(Self::EXTEND),
            _ => None,
        }
    }
}

impl FromStr for StyleMask {
    type Err = StyleParseError;

    /// Accepts a numeric mask (`3`, `0x03`) or a list of style names joined
    /// by `,` or `+` (`bold,italic`). Names are case-insensitive and bits
    /// above the seven known styles are ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        let numeric = if let Some(hex) = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            Some(u32::from_str_radix(hex, 16))
        } else if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            Some(value.parse::<u32>())
        } else {
            None
        };

        if let Some(parsed) = numeric {
            let bits = parsed
                .ok()
                .and_then(|bits| u8::try_from(bits).ok())
                .ok_or_else(|| StyleParseError::OutOfRange(value.to_string()))?;
            return Ok(Self::from_bits_truncate(bits));
        }

        value
            .split([',', '+'])
            .map(str::trim)
            .try_fold(Self::empty(), |mask, part| {
                Self::from_style_name(part)
                    .map(|style| mask | style)
                    .ok_or_else(|| StyleParseError::UnknownName(part.to_string()))
            })
    }
}

/// Build the style part of a font name from a style mask.
pub fn style_name(mask: StyleMask) -> String {
    STYLE_FRAGMENTS
        .iter()
        .filter(|(style, _)| mask.contains(*style))
        .map(|(_, fragment)| *fragment)
        .collect()
}

/// The identifier used for both the BDF `FONT` line and the output file
/// stem: family, style name and size, e.g. `GenevaBold-12`.
///
/// Runs of whitespace in the family name become a single hyphen. Family
/// names that already carry a style abbreviation are not shortened.
pub fn output_name(family: &str, style_name: &str, size: u16) -> String {
    let family = family.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{family}{style_name}-{size}")
}
