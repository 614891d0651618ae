// SPDX-License-Identifier: MIT
//
// gp-color — color encodings for grid-picker.
//
// Three textual encodings are understood: `#rgb`/`#rrggbb`, `rgb(r, g, b)`
// and `rgba(r, g, b, a)`. This crate detects which one a string uses,
// converts between them, and carries the built-in swatch palette.
//
// Everything here is pure: no I/O, no state, no allocation beyond the
// strings it returns. Failures are reported in-band as sentinel strings
// because the result of a conversion is shown to the user as-is.

pub mod convert;
pub mod format;
pub mod palette;

pub use convert::{
    ConvertError, DEFAULT_ALPHA, check_alpha, convert, convert_with_alpha, to_rgb8, try_convert,
};
pub use format::{ColorFormat, ParseFormatError, detect_format};
pub use palette::Palette;
