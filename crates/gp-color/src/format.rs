// SPDX-License-Identifier: MIT
//
// Textual color encodings and strict format detection.
//
// A color string is classified by full-string pattern match, tried in the
// fixed order Hex → Rgb → Rgba. The first pattern that matches wins; a
// string matching none of them is unknown. Digit counts are checked, value
// ranges are not: `rgb(999, 0, 0)` is a valid Rgb string as far as
// detection is concerned.
//
// The patterns use capture groups so the converters can pull channel text
// straight out of the same match instead of re-scanning the string.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

// ─── Patterns ───────────────────────────────────────────────────────────────

/// `#rgb` or `#rrggbb`. Group 1 holds the digits without the `#`.
pub(crate) static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("hex pattern compiles")
});

/// `rgb(r, g, b)`. Groups 1–3 hold the channel digits.
pub(crate) static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$")
        .expect("rgb pattern compiles")
});

/// `rgba(r, g, b, a)`. Groups 1–3 hold the channel digits, group 4 the alpha.
pub(crate) static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*(0|1|0?\.[0-9]+)\s*\)$",
    )
    .expect("rgba pattern compiles")
});

// ─── ColorFormat ────────────────────────────────────────────────────────────

/// One of the three supported textual color encodings.
///
/// This doubles as the picker's target encoding: the format a chosen swatch
/// is normalized into before it's written back to the host field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#rgb` / `#rrggbb`.
    #[default]
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `rgba(r, g, b, a)`.
    Rgba,
}

impl ColorFormat {
    /// Every encoding, in detection order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Rgba];

    /// Lowercase option name (`hex`, `rgb`, `rgba`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }

    /// True if `value` is a syntactically valid string in this encoding.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Hex => HEX_PATTERN.is_match(value),
            Self::Rgb => RGB_PATTERN.is_match(value),
            Self::Rgba => RGBA_PATTERN.is_match(value),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an option value names no known encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color format `{0}` (expected hex, rgb or rgba)")]
pub struct ParseFormatError(pub String);

impl FromStr for ColorFormat {
    type Err = ParseFormatError;

    /// Case-insensitive: `"RGBA"` and `"rgba"` are the same format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

// ─── Detection ──────────────────────────────────────────────────────────────

/// Classify a color string by strict pattern match.
///
/// Returns `None` for strings in no supported encoding. The patterns are
/// mutually exclusive (each pins its own prefix), so every string lands in
/// exactly one of Hex, Rgb, Rgba or unknown.
///
/// ```
/// use gp_color::{detect_format, ColorFormat};
///
/// assert_eq!(detect_format("#fff"), Some(ColorFormat::Hex));
/// assert_eq!(detect_format("rgb(1, 2, 3)"), Some(ColorFormat::Rgb));
/// assert_eq!(detect_format("tomato"), None);
/// ```
#[must_use]
pub fn detect_format(value: &str) -> Option<ColorFormat> {
    ColorFormat::ALL.into_iter().find(|format| format.matches(value))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
