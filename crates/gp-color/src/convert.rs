// SPDX-License-Identifier: MIT
//
// Conversion between the three textual encodings.
//
// Hex is decoded to numeric channels; the decimal encodings are rewritten
// from the channel text they were written with:
//
//   Hex  ──parse──▶ Channels ──format──▶ Rgb / Rgba
//   Rgb  ──parse──▶ Channels ──format──▶ Hex
//   Rgb  ──digits─────────────format──▶ Rgba
//   Rgba ──digits─────────────format──▶ Rgb          (alpha dropped)
//
// so `rgb(007, 0, 0)` becomes `rgba(007, 0, 0, 1)`, not `rgba(7, 0, 0, 1)`.
//
// Alpha is never carried across: leaving Rgba discards it, entering Rgba
// appends the caller's alpha (default 1), which must lie in [0, 1].
// Converting a string into its own encoding returns it untouched, so an
// Rgba value keeps its alpha and the supplied one is not looked at.
//
// Failures are reported in-band. `convert` returns the error message
// ("Invalid color format", "Conversion not supported", "Invalid alpha
// value") as the result string, which is what ends up in the host field.

use std::fmt;

use regex::Regex;

use crate::format::{ColorFormat, HEX_PATTERN, RGBA_PATTERN, RGB_PATTERN, detect_format};

/// Alpha used when a conversion synthesizes an Rgba value.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Why a conversion produced no color.
///
/// The `Display` text of each variant is the exact sentinel string that
/// [`convert`] returns in place of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input matches none of the supported encodings.
    #[error("Invalid color format")]
    InvalidFormat,

    /// Both encodings are known but no converter exists for the pair.
    ///
    /// Unreachable with the current three formats; kept so that a fourth
    /// encoding without a full set of converters degrades to a message
    /// instead of a wrong color.
    #[error("Conversion not supported")]
    Unsupported {
        /// Detected encoding of the input.
        from: ColorFormat,
        /// Requested encoding.
        to: ColorFormat,
    },

    /// An Rgba value had to be synthesized and the supplied alpha is not a
    /// number in [0, 1].
    #[error("Invalid alpha value")]
    InvalidAlpha,
}

/// Validate an alpha for a synthesized Rgba value.
///
/// Accepts any number in [0, 1] and folds `-0` into `0`, so the result
/// always prints as something [`detect_format`] recognizes.
///
/// # Errors
///
/// [`ConvertError::InvalidAlpha`] for NaN, infinities and values outside
/// the range.
pub fn check_alpha(alpha: f64) -> Result<f64, ConvertError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha.abs())
    } else {
        Err(ConvertError::InvalidAlpha)
    }
}

/// Convert `value` into `target`, appending [`DEFAULT_ALPHA`] when the
/// target is Rgba.
///
/// ```
/// use gp_color::{convert, ColorFormat};
///
/// assert_eq!(convert("#ff0000", ColorFormat::Rgb), "rgb(255, 0, 0)");
/// assert_eq!(convert("rgb(0, 0, 0)", ColorFormat::Hex), "#000000");
/// assert_eq!(convert("not-a-color", ColorFormat::Rgb), "Invalid color format");
/// ```
#[must_use]
pub fn convert(value: &str, target: ColorFormat) -> String {
    convert_with_alpha(value, target, DEFAULT_ALPHA)
}

/// Convert `value` into `target`, using `alpha` if an Rgba value has to be
/// synthesized. Errors come back as their sentinel strings.
#[must_use]
pub fn convert_with_alpha(value: &str, target: ColorFormat, alpha: f64) -> String {
    try_convert(value, target, alpha).unwrap_or_else(|err| err.to_string())
}

/// Typed form of [`convert_with_alpha`].
///
/// # Errors
///
/// [`ConvertError::InvalidFormat`] if `value` is in no supported encoding,
/// [`ConvertError::Unsupported`] if no converter handles the pair, and
/// [`ConvertError::InvalidAlpha`] if an Rgba value has to be built from an
/// `alpha` that [`check_alpha`] rejects.
pub fn try_convert(value: &str, target: ColorFormat, alpha: f64) -> Result<String, ConvertError> {
    let source = detect_format(value).ok_or(ConvertError::InvalidFormat)?;

    if source == target {
        return Ok(value.to_string());
    }

    match (source, target) {
        (ColorFormat::Hex, ColorFormat::Rgb) => hex_to_rgb(value),
        (ColorFormat::Hex, ColorFormat::Rgba) => hex_to_rgba(value, alpha),
        (ColorFormat::Rgb, ColorFormat::Hex) => rgb_to_hex(value),
        (ColorFormat::Rgb, ColorFormat::Rgba) => rgb_to_rgba(value, alpha),
        (ColorFormat::Rgba, ColorFormat::Rgb) => rgba_to_rgb(value),
        (ColorFormat::Rgba, ColorFormat::Hex) => rgba_to_hex(value),
        (from, to) => Err(ConvertError::Unsupported { from, to }),
    }
}

/// Decode `value` to 8-bit channels, for painting a swatch.
///
/// Returns `None` if `value` is in no supported encoding or a channel is
/// above 255. Alpha, if any, is ignored.
#[must_use]
pub fn to_rgb8(value: &str) -> Option<(u8, u8, u8)> {
    let channels = match detect_format(value)? {
        ColorFormat::Hex => parse_hex(value),
        ColorFormat::Rgb => parse_decimal(&RGB_PATTERN, value),
        ColorFormat::Rgba => parse_decimal(&RGBA_PATTERN, value),
    }
    .ok()?;

    Some((
        u8::try_from(channels.r).ok()?,
        u8::try_from(channels.g).ok()?,
        u8::try_from(channels.b).ok()?,
    ))
}

// ─── Converters ─────────────────────────────────────────────────────────────

fn hex_to_rgb(hex: &str) -> Result<String, ConvertError> {
    parse_hex(hex).map(|c| format_rgb([c.r, c.g, c.b]))
}

fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String, ConvertError> {
    let rgb = hex_to_rgb(hex)?;
    rgb_to_rgba(&rgb, alpha)
}

fn rgb_to_hex(rgb: &str) -> Result<String, ConvertError> {
    parse_decimal(&RGB_PATTERN, rgb).map(format_hex)
}

fn rgb_to_rgba(rgb: &str, alpha: f64) -> Result<String, ConvertError> {
    let alpha = check_alpha(alpha)?;
    decimal_digits(&RGB_PATTERN, rgb).map(|digits| format_rgba(digits, alpha))
}

fn rgba_to_rgb(rgba: &str) -> Result<String, ConvertError> {
    decimal_digits(&RGBA_PATTERN, rgba).map(format_rgb)
}

fn rgba_to_hex(rgba: &str) -> Result<String, ConvertError> {
    let rgb = rgba_to_rgb(rgba)?;
    rgb_to_hex(&rgb)
}

// ─── Canonical Form ─────────────────────────────────────────────────────────

/// Numeric channel triple, for conversions to and from Hex.
///
/// Channels are wider than a byte because the decimal patterns admit any
/// three-digit value. `rgb(999, 0, 0)` converts to `#3e70000` rather than
/// being clamped or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Channels {
    r: u16,
    g: u16,
    b: u16,
}

/// Parse `#rgb` / `#rrggbb`, expanding the shorthand by nibble duplication.
fn parse_hex(value: &str) -> Result<Channels, ConvertError> {
    let digits = HEX_PATTERN
        .captures(value)
        .and_then(|caps| caps.get(1))
        .ok_or(ConvertError::InvalidFormat)?
        .as_str();

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |at: usize| {
        u16::from_str_radix(&expanded[at..at + 2], 16).map_err(|_| ConvertError::InvalidFormat)
    };

    Ok(Channels {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// The channel text of an Rgb or Rgba match, exactly as written.
fn decimal_digits<'a>(pattern: &Regex, value: &'a str) -> Result<[&'a str; 3], ConvertError> {
    let caps = pattern.captures(value).ok_or(ConvertError::InvalidFormat)?;
    let digits = |group: usize| {
        caps.get(group)
            .map(|m| m.as_str())
            .ok_or(ConvertError::InvalidFormat)
    };
    Ok([digits(1)?, digits(2)?, digits(3)?])
}

/// Pull the first three decimal channels out of an Rgb or Rgba match.
fn parse_decimal(pattern: &Regex, value: &str) -> Result<Channels, ConvertError> {
    let [r, g, b] = decimal_digits(pattern, value)?
        .map(|digits| digits.parse::<u16>().map_err(|_| ConvertError::InvalidFormat));
    Ok(Channels {
        r: r?,
        g: g?,
        b: b?,
    })
}

fn format_rgb<T: fmt::Display>([r, g, b]: [T; 3]) -> String {
    format!("rgb({r}, {g}, {b})")
}

// `f64`'s Display prints the shortest exact form: 1.0 → "1", 0.5 → "0.5".
fn format_rgba<T: fmt::Display>([r, g, b]: [T; 3], alpha: f64) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

fn format_hex(c: Channels) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
