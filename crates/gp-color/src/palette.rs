// SPDX-License-Identifier: MIT
//
// Swatch palettes.
//
// A palette is two ordered lists of color strings: a short row of main
// colors shown across the top of the popup, and a larger grid below it.
// The built-in grid is 7 rows of 10, light tints at the top darkening
// toward the bottom.
//
// Entries are plain strings in any supported encoding. The palette does
// not validate them; a swatch that can't be parsed is normalized to the
// "Invalid color format" sentinel when picked.

/// Columns in the built-in swatch grid.
pub const GRID_COLUMNS: usize = 10;

/// The built-in top row.
pub const MAIN_COLORS: [&str; 10] = [
    "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#ffff00", //
    "#00ffff", "#ff00ff", "#000000", "#808080", "#800000",
];

/// The built-in 7×10 grid, row by row.
pub const OTHER_COLORS: [&str; 70] = [
    // Pale tints
    "#ffcccc", "#ffcc99", "#ffffcc", "#ccffcc", "#ccffff", //
    "#ccccff", "#ffccff", "#cccccc", "#cc9999", "#ff9966", //
    // Light
    "#ff9999", "#ffcc66", "#ffff99", "#99ff99", "#99ffff", //
    "#9999ff", "#ff99ff", "#999999", "#993366", "#339966", //
    // Soft
    "#ff6666", "#ff9933", "#ffff66", "#66ff66", "#66ffff", //
    "#6666ff", "#ff66ff", "#666666", "#660033", "#336600", //
    // Medium
    "#ff3333", "#ff6633", "#ffff33", "#33ff33", "#33ffff", //
    "#3333ff", "#ff33ff", "#333333", "#993300", "#003300", //
    // Pure
    "#ff0000", "#ff6600", "#ffff00", "#00ff00", "#00ffff", //
    "#0000ff", "#ff00ff", "#000000", "#800000", "#008000", //
    // Deep
    "#cc0000", "#cc6600", "#cccc00", "#00cc00", "#00cccc", //
    "#0000cc", "#cc00cc", "#4d4d4d", "#800080", "#008080", //
    // Dark
    "#990000", "#994c00", "#999900", "#009900", "#009999", //
    "#000099", "#990099", "#666666", "#993366", "#336699", //
];

/// The swatches a picker offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Top row, in display order.
    pub main: Vec<String>,
    /// Grid, in row-major display order.
    pub others: Vec<String>,
}

impl Default for Palette {
    /// The built-in 10-color row and 70-color grid.
    fn default() -> Self {
        Self {
            main: MAIN_COLORS.iter().map(ToString::to_string).collect(),
            others: OTHER_COLORS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Palette {
    /// Build a palette from explicit lists.
    #[must_use]
    pub const fn new(main: Vec<String>, others: Vec<String>) -> Self {
        Self { main, others }
    }

    /// The grid split into rows of `columns` swatches. The last row may be
    /// short. A `columns` of 0 is treated as 1.
    pub fn rows(&self, columns: usize) -> impl Iterator<Item = &[String]> {
        self.others.chunks(columns.max(1))
    }

    /// Every swatch, main row first.
    pub fn swatches(&self) -> impl Iterator<Item = &str> {
        self.main.iter().chain(&self.others).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
