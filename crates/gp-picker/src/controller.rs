//! The popup visibility state machine.
//!
//! A [`PickerController`] is always either [`Closed`](PickerState::Closed)
//! or [`Open`](PickerState::Open). Events move it between the two:
//!
//! | State  | Event                | Next   | Side effect                                  |
//! |--------|----------------------|--------|----------------------------------------------|
//! | Closed | `TriggerActivated`   | Open   | show popup                                   |
//! | Open   | `OutsideInteraction` | Closed | hide popup                                   |
//! | Open   | `SwatchSelected(c)`  | Closed | write `c` (normalized), callback, hide popup |
//! | Closed | `OutsideInteraction` | Closed | —                                            |
//! | Closed | `SwatchSelected(c)`  | Closed | —                                            |
//! | Open   | `TriggerActivated`   | Open   | —                                            |
//!
//! [`open`](PickerController::open) and [`close`](PickerController::close)
//! set the state directly and are idempotent: asking for the state the
//! picker is already in touches nothing.
//!
//! A controller built without a host field is inert. It logs once at
//! construction and then ignores every event and every open/close request.

use std::fmt;

use gp_color::{convert, detect_format};

use crate::event::PickerEvent;
use crate::options::PickerOptions;
use crate::surface::{HostField, RenderSurface, TriggerStyle};

// ---------------------------------------------------------------------------
// PickerState
// ---------------------------------------------------------------------------

/// Whether the popup is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerState {
    /// Popup hidden. Initial state.
    #[default]
    Closed,
    /// Popup visible, swatches clickable.
    Open,
}

impl PickerState {
    /// True for [`Open`](Self::Open).
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for PickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("closed"),
            Self::Open => f.write_str("open"),
        }
    }
}

// ---------------------------------------------------------------------------
// PickerController
// ---------------------------------------------------------------------------

/// One popup color picker.
pub struct PickerController {
    state: PickerState,
    host: Option<Box<dyn HostField>>,
    surface: Box<dyn RenderSurface>,
    options: PickerOptions,
}

impl PickerController {
    /// Build a picker over `host` and `surface`.
    ///
    /// If the host field already holds a value, the trigger is painted with
    /// it as-is. That value is not normalized to the select type and the
    /// callback is not called; only selections do either.
    ///
    /// With no host field the picker is inert (see module docs).
    #[must_use]
    pub fn new(
        host: Option<Box<dyn HostField>>,
        surface: Box<dyn RenderSurface>,
        options: PickerOptions,
    ) -> Self {
        let mut picker = Self {
            state: PickerState::Closed,
            host,
            surface,
            options,
        };

        if picker.host.is_none() {
            tracing::error!("grid color picker: host field not found, picker left inert");
        } else {
            picker.seed_from_host();
        }

        picker
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> PickerState {
        self.state
    }

    /// True while the popup is showing.
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// True if the picker was built without a host field.
    #[inline]
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.host.is_none()
    }

    /// The host field's current value. `None` for an inert picker.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.host.as_ref().map(|host| host.value())
    }

    /// The options this picker was built with.
    #[must_use]
    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Show the popup. No-op if already open or inert.
    pub fn open(&mut self) {
        if self.is_inert() || self.state == PickerState::Open {
            return;
        }
        self.surface.show_popup();
        self.state = PickerState::Open;
        tracing::debug!("picker opened");
    }

    /// Hide the popup. No-op if already closed or inert.
    pub fn close(&mut self) {
        if self.is_inert() || self.state == PickerState::Closed {
            return;
        }
        self.surface.hide_popup();
        self.state = PickerState::Closed;
        tracing::debug!("picker closed");
    }

    /// Apply one transition event and return the resulting state.
    pub fn handle(&mut self, event: PickerEvent) -> PickerState {
        if self.is_inert() {
            tracing::trace!(?event, "inert picker ignored event");
            return self.state;
        }

        match (self.state, event) {
            (PickerState::Closed, PickerEvent::TriggerActivated) => self.open(),
            (PickerState::Open, PickerEvent::OutsideInteraction) => self.close(),
            (PickerState::Open, PickerEvent::SwatchSelected(color)) => {
                self.select(&color);
                self.close();
            }
            (state, event) => tracing::trace!(%state, ?event, "event ignored"),
        }

        self.state
    }

    /// Normalize `color`, write it out, and notify the callback.
    fn select(&mut self, color: &str) {
        let Some(host) = self.host.as_mut() else {
            return;
        };

        if detect_format(color).is_none() {
            tracing::warn!(color, "swatch color is in no supported format");
        }

        let value = convert(color, self.options.select_type);
        host.set_value(&value);
        self.surface.paint_trigger(&value, &TriggerStyle::swatch(&value));
        tracing::debug!(swatch = color, %value, "color selected");

        self.options.notify(&value);
    }

    fn seed_from_host(&mut self) {
        let Some(value) = self.value() else {
            return;
        };
        if value.is_empty() {
            return;
        }
        self.surface.paint_trigger(&value, &TriggerStyle::swatch(&value));
    }
}

impl fmt::Debug for PickerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerController")
            .field("state", &self.state)
            .field("inert", &self.is_inert())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
