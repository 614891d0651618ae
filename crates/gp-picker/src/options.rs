//! Picker options and the `key=value` directive parser.
//!
//! Options can be built in code with the `with_*` methods or folded in from
//! directives, the same `name=value` grammar a `:set` line uses.
//!
//! | Directive          | Alias            | Value                       | Default        |
//! |--------------------|------------------|-----------------------------|----------------|
//! | `select`           | `select-type`    | `hex` / `rgb` / `rgba`      | `hex`          |
//! | `main`             | `main-colors`    | comma-separated colors      | built-in 10    |
//! | `others`           | `others-colors`  | comma-separated colors      | built-in 70    |
//!
//! Color lists split on commas outside parentheses, so
//! `main=rgb(1, 2, 3),#fff` is two colors.

use std::fmt;

use gp_color::{ColorFormat, Palette, ParseFormatError};

/// Called with the normalized color after every selection.
pub type Callback = Box<dyn FnMut(&str)>;

// ---------------------------------------------------------------------------
// PickerOptions
// ---------------------------------------------------------------------------

/// Construction options for a picker.
#[derive(Default)]
pub struct PickerOptions {
    /// Encoding written back to the host field on selection.
    pub select_type: ColorFormat,
    /// Swatches offered in the popup.
    pub palette: Palette,
    callback: Option<Callback>,
}

impl PickerOptions {
    /// Defaults: hex output, built-in palette, no callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoding written back on selection.
    #[must_use]
    pub fn with_select_type(mut self, select_type: ColorFormat) -> Self {
        self.select_type = select_type;
        self
    }

    /// Replace the top row of swatches.
    #[must_use]
    pub fn with_main_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette.main = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the swatch grid.
    #[must_use]
    pub fn with_others_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette.others = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Call `callback` with the normalized color after every selection.
    #[must_use]
    pub fn with_callback(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Fold one directive into these options.
    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::SelectType(format) => self.select_type = format,
            Directive::MainColors(colors) => self.palette.main = colors,
            Directive::OthersColors(colors) => self.palette.others = colors,
        }
    }

    /// Defaults with every directive in `args` applied, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionError`] encountered; nothing is applied
    /// past it.
    pub fn from_directives<I, S>(args: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            options.apply(parse_directive(arg.as_ref())?);
        }
        Ok(options)
    }

    pub(crate) fn notify(&mut self, value: &str) {
        if let Some(callback) = self.callback.as_mut() {
            callback(value);
        }
    }
}

impl fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("select_type", &self.select_type)
            .field("palette", &self.palette)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// A parsed `key=value` option directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `select=rgba`
    SelectType(ColorFormat),
    /// `main=#fff,#000`
    MainColors(Vec<String>),
    /// `others=#fff,#000`
    OthersColors(Vec<String>),
}

/// Why a directive was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// No `=` separating name and value.
    #[error("expected `name=value`, got `{0}`")]
    MissingValue(String),

    /// The name isn't a known option.
    #[error("unknown option `{0}`")]
    Unknown(String),

    /// The value is empty (or a color list with no colors in it).
    #[error("option `{0}` needs a value")]
    Empty(String),

    /// `select=` named no known encoding.
    #[error(transparent)]
    Format(#[from] ParseFormatError),
}

/// Parse one `name=value` directive.
///
/// # Errors
///
/// See [`OptionError`].
pub fn parse_directive(arg: &str) -> Result<Directive, OptionError> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| OptionError::MissingValue(arg.to_string()))?;
    let name = name.trim();
    let value = value.trim();

    if value.is_empty() {
        return Err(OptionError::Empty(name.to_string()));
    }

    match name {
        "select" | "select-type" => Ok(Directive::SelectType(value.parse()?)),
        "main" | "main-colors" => color_list(name, value).map(Directive::MainColors),
        "others" | "others-colors" => color_list(name, value).map(Directive::OthersColors),
        _ => Err(OptionError::Unknown(name.to_string())),
    }
}

fn color_list(name: &str, value: &str) -> Result<Vec<String>, OptionError> {
    let colors = split_colors(value);
    if colors.is_empty() {
        return Err(OptionError::Empty(name.to_string()));
    }
    Ok(colors)
}

/// Split on commas at parenthesis depth 0, trimming and dropping empties.
fn split_colors(list: &str) -> Vec<String> {
    let mut colors = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                colors.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    colors.push(&list[start..]);

    colors
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    // -- parse_directive ----------------------------------------------------

    #[test]
    fn parse_select_type() {
        assert_eq!(
            parse_directive("select=rgb"),
            Ok(Directive::SelectType(ColorFormat::Rgb))
        );
        assert_eq!(
            parse_directive("select-type=RGBA"),
            Ok(Directive::SelectType(ColorFormat::Rgba))
        );
    }

    #[test]
    fn parse_bad_select_type() {
        assert_eq!(
            parse_directive("select=hsl"),
            Err(OptionError::Format(ParseFormatError("hsl".to_string())))
        );
    }

    #[test]
    fn parse_color_lists() {
        assert_eq!(
            parse_directive("main=#fff, #000"),
            Ok(Directive::MainColors(vec!["#fff".into(), "#000".into()]))
        );
        assert_eq!(
            parse_directive("others-colors=rgb(1, 2, 3),rgba(4,5,6,0.5),#abc"),
            Ok(Directive::OthersColors(vec![
                "rgb(1, 2, 3)".into(),
                "rgba(4,5,6,0.5)".into(),
                "#abc".into(),
            ]))
        );
    }

    #[test]
    fn parse_drops_empty_list_entries() {
        assert_eq!(
            parse_directive("main=#fff,,#000,"),
            Ok(Directive::MainColors(vec!["#fff".into(), "#000".into()]))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_directive("select"),
            Err(OptionError::MissingValue("select".into()))
        );
        assert_eq!(parse_directive("main="), Err(OptionError::Empty("main".into())));
        assert_eq!(parse_directive("main=,,"), Err(OptionError::Empty("main".into())));
        assert_eq!(
            parse_directive("theme=dark"),
            Err(OptionError::Unknown("theme".into()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            OptionError::Unknown("x".into()).to_string(),
            "unknown option `x`"
        );
        assert_eq!(
            OptionError::from(ParseFormatError("hsl".into())).to_string(),
            "unknown color format `hsl` (expected hex, rgb or rgba)"
        );
    }

    // -- PickerOptions ------------------------------------------------------

    #[test]
    fn defaults() {
        let options = PickerOptions::new();
        assert_eq!(options.select_type, ColorFormat::Hex);
        assert_eq!(options.palette, Palette::default());
        assert!(format!("{options:?}").contains("callback: None"));
    }

    #[test]
    fn from_directives_applies_in_order() {
        let options =
            PickerOptions::from_directives(["select=rgb", "main=#111", "select=rgba"]).unwrap();
        assert_eq!(options.select_type, ColorFormat::Rgba);
        assert_eq!(options.palette.main, vec!["#111".to_string()]);
        assert_eq!(options.palette.others.len(), 70);
    }

    #[test]
    fn from_directives_stops_at_first_error() {
        let err = PickerOptions::from_directives(["select=rgb", "bogus"]).unwrap_err();
        assert_eq!(err, OptionError::MissingValue("bogus".into()));
    }

    #[test]
    fn builders() {
        let options = PickerOptions::new()
            .with_select_type(ColorFormat::Rgb)
            .with_main_colors(["#f00"])
            .with_others_colors(vec![String::from("#0f0"), String::from("#00f")]);
        assert_eq!(options.select_type, ColorFormat::Rgb);
        assert_eq!(options.palette.main, ["#f00"]);
        assert_eq!(options.palette.others, ["#0f0", "#00f"]);
    }

    #[test]
    fn notify_calls_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut options =
            PickerOptions::new().with_callback(move |v| sink.borrow_mut().push(v.to_string()));

        options.notify("#abcdef");
        assert_eq!(*seen.borrow(), ["#abcdef"]);
    }

    #[test]
    fn notify_without_callback_is_a_no_op() {
        let mut options = PickerOptions::new();
        options.notify("#abcdef");
    }

    #[test]
    fn debug_hides_callback_body() {
        let options = PickerOptions::new().with_callback(|_| {});
        let debug = format!("{options:?}");
        assert!(debug.contains("<fn>"));
        assert!(debug.contains("Hex"));
    }
}
