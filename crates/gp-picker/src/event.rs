//! UI interaction events.
//!
//! The host toolkit reports raw [`Click`]s, each tagged with the [`Target`]
//! element it landed on. A picker never sees raw clicks directly: they are
//! translated per picker into one of three [`PickerEvent`]s, depending on
//! whether the click hit that picker's trigger, one of its swatches, its
//! popup body, or something it doesn't own.
//!
//! | Target                       | Owner picker          | Every other picker   |
//! |------------------------------|-----------------------|----------------------|
//! | `Trigger(id)`                | `TriggerActivated`    | `OutsideInteraction` |
//! | `Swatch { picker: id, .. }`  | `SwatchSelected`      | `OutsideInteraction` |
//! | `Popup(id)`                  | (nothing)             | `OutsideInteraction` |
//! | `Elsewhere`                  | —                     | `OutsideInteraction` |
//!
//! Because a swatch sits inside its own popup, a swatch click produces
//! exactly one event for its owner. There is no second "outside" event to
//! race with the selection.

use std::fmt;

// ---------------------------------------------------------------------------
// PickerId
// ---------------------------------------------------------------------------

/// Identity of one picker instance within a dispatcher.
///
/// Ids are handed out in increasing order and not reused while the 64-bit
/// counter lasts, so a stale id kept after `dispose` can't accidentally
/// address a newer picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickerId(u64);

impl PickerId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gcp-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Raw events
// ---------------------------------------------------------------------------

/// The element a click landed on, as resolved by the host toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A picker's visible field.
    Trigger(PickerId),
    /// A picker's popup, outside any swatch (header, padding, gaps).
    Popup(PickerId),
    /// A swatch cell inside a picker's popup.
    Swatch {
        /// Picker whose popup holds the swatch.
        picker: PickerId,
        /// The swatch's color string, exactly as configured.
        color: String,
    },
    /// Anything not belonging to a picker.
    Elsewhere,
}

impl Target {
    /// Shorthand for a swatch target.
    #[must_use]
    pub fn swatch(picker: PickerId, color: impl Into<String>) -> Self {
        Self::Swatch {
            picker,
            color: color.into(),
        }
    }

    /// The picker this element belongs to, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<PickerId> {
        match self {
            Self::Trigger(id) | Self::Popup(id) | Self::Swatch { picker: id, .. } => Some(*id),
            Self::Elsewhere => None,
        }
    }

    /// True if this element is inside `picker`'s popup or trigger.
    #[must_use]
    pub fn is_inside(&self, picker: PickerId) -> bool {
        self.owner() == Some(picker)
    }

    /// Translate a click on this element into `picker`'s transition event.
    ///
    /// Returns `None` for clicks inside the popup that don't hit a swatch.
    #[must_use]
    pub fn event_for(&self, picker: PickerId) -> Option<PickerEvent> {
        if !self.is_inside(picker) {
            return Some(PickerEvent::OutsideInteraction);
        }
        match self {
            Self::Trigger(_) => Some(PickerEvent::TriggerActivated),
            Self::Swatch { color, .. } => Some(PickerEvent::SwatchSelected(color.clone())),
            Self::Popup(_) | Self::Elsewhere => None,
        }
    }
}

/// A raw click reported by the host toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    /// The element under the pointer.
    pub target: Target,
}

impl Click {
    /// A click on `target`.
    #[must_use]
    pub const fn on(target: Target) -> Self {
        Self { target }
    }
}

// ---------------------------------------------------------------------------
// PickerEvent
// ---------------------------------------------------------------------------

/// A transition event, as seen by one picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The picker's trigger was activated.
    TriggerActivated,
    /// The user interacted with something outside the popup and trigger.
    OutsideInteraction,
    /// A swatch was chosen. Carries the swatch's raw color string.
    SwatchSelected(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
