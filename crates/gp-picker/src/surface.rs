//! The presentation seams a picker drives.
//!
//! A picker owns no UI. It is handed a [`HostField`] (the hidden backing
//! field holding the authoritative value) and a [`RenderSurface`] (the
//! popup plus the visible trigger field). Any toolkit can implement these;
//! [`MemoryField`] and [`MemorySurface`] are in-memory versions for headless
//! hosts and tests.

use std::cell::RefCell;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// The hidden field that holds the current color string.
pub trait HostField {
    /// Current value. Empty when the field has never been set.
    fn value(&self) -> String;

    /// Replace the value.
    fn set_value(&mut self, value: &str);
}

/// How the visible trigger field presents its value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TriggerStyle {
    /// Background color string, if the field is painted as a swatch.
    pub background: Option<String>,
    /// False when the text is hidden so only the background shows.
    pub text_visible: bool,
}

impl TriggerStyle {
    /// Paint the field as a swatch of `color` with its text hidden.
    #[must_use]
    pub fn swatch(color: &str) -> Self {
        Self {
            background: Some(color.to_string()),
            text_visible: false,
        }
    }
}

/// The popup and the visible trigger field.
pub trait RenderSurface {
    /// Make the popup visible.
    fn show_popup(&mut self);

    /// Hide the popup.
    fn hide_popup(&mut self);

    /// Set the trigger field's text and presentation.
    fn paint_trigger(&mut self, value: &str, style: &TriggerStyle);
}

// ---------------------------------------------------------------------------
// MemoryField
// ---------------------------------------------------------------------------

/// A [`HostField`] backed by a shared string.
///
/// Clones share the same value, so a caller can keep one handle and give
/// another to the picker.
#[derive(Debug, Default, Clone)]
pub struct MemoryField(Rc<RefCell<String>>);

impl MemoryField {
    /// A field holding `initial`.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(initial.into())))
    }
}

impl HostField for MemoryField {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_value(&mut self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

// ---------------------------------------------------------------------------
// MemorySurface
// ---------------------------------------------------------------------------

/// Everything a [`MemorySurface`] has been told to display.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SurfaceState {
    /// Whether the popup is currently shown.
    pub popup_visible: bool,
    /// Text of the visible trigger field.
    pub trigger_value: String,
    /// Presentation of the visible trigger field.
    pub trigger_style: TriggerStyle,
    /// Number of `show_popup` calls received.
    pub shows: usize,
    /// Number of `hide_popup` calls received.
    pub hides: usize,
    /// Number of `paint_trigger` calls received.
    pub paints: usize,
}

/// A [`RenderSurface`] that records calls instead of drawing.
///
/// Clones share the same [`SurfaceState`].
#[derive(Debug, Default, Clone)]
pub struct MemorySurface(Rc<RefCell<SurfaceState>>);

impl MemorySurface {
    /// A surface with the popup hidden and an empty trigger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of what's displayed.
    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.0.borrow().clone()
    }
}

impl RenderSurface for MemorySurface {
    fn show_popup(&mut self) {
        let mut state = self.0.borrow_mut();
        state.popup_visible = true;
        state.shows += 1;
    }

    fn hide_popup(&mut self) {
        let mut state = self.0.borrow_mut();
        state.popup_visible = false;
        state.hides += 1;
    }

    fn paint_trigger(&mut self, value: &str, style: &TriggerStyle) {
        let mut state = self.0.borrow_mut();
        state.trigger_value = value.to_string();
        state.trigger_style = style.clone();
        state.paints += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_field_clones_share_value() {
        let field = MemoryField::new("#fff");
        let mut handle = field.clone();
        handle.set_value("#000");
        assert_eq!(field.value(), "#000");
    }

    #[test]
    fn memory_field_default_is_empty() {
        assert_eq!(MemoryField::default().value(), "");
    }

    #[test]
    fn memory_surface_records_calls() {
        let surface = MemorySurface::new();
        let mut handle = surface.clone();

        handle.show_popup();
        assert!(surface.state().popup_visible);

        handle.paint_trigger("#123456", &TriggerStyle::swatch("#123456"));
        handle.hide_popup();

        let state = surface.state();
        assert!(!state.popup_visible);
        assert_eq!(state.trigger_value, "#123456");
        assert_eq!(state.trigger_style.background.as_deref(), Some("#123456"));
        assert!(!state.trigger_style.text_visible);
        assert_eq!((state.shows, state.hides, state.paints), (1, 1, 1));
    }

    #[test]
    fn default_trigger_style_is_unpainted() {
        let style = TriggerStyle::default();
        assert_eq!(style.background, None);
        assert!(!style.text_visible);
    }
}
