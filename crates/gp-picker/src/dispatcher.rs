//! Shared routing of UI clicks to live pickers.
//!
//! One [`Dispatcher`] stands in for every picker's outside-click listener.
//! Pickers are attached to it, each click is offered to all of them in
//! attach order, and [`dispose`](Dispatcher::dispose) removes a picker so
//! the registry doesn't grow without bound as pickers come and go.

use std::collections::BTreeMap;

use crate::controller::{PickerController, PickerState};
use crate::event::{Click, PickerId};

/// Registry of live pickers.
#[derive(Debug, Default)]
pub struct Dispatcher {
    next_id: u64,
    pickers: BTreeMap<PickerId, PickerController>,
}

impl Dispatcher {
    /// An empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a picker and return its id.
    ///
    /// The host tags the picker's trigger, popup and swatches with this id
    /// when it reports clicks.
    pub fn attach(&mut self, picker: PickerController) -> PickerId {
        let id = self.fresh_id();
        self.pickers.insert(id, picker);
        tracing::debug!(%id, live = self.pickers.len(), "picker attached");
        id
    }

    /// Deregister a picker, handing it back. `None` if `id` isn't live.
    pub fn dispose(&mut self, id: PickerId) -> Option<PickerController> {
        let picker = self.pickers.remove(&id);
        if picker.is_some() {
            tracing::debug!(%id, live = self.pickers.len(), "picker disposed");
        } else {
            tracing::trace!(%id, "dispose of unknown picker");
        }
        picker
    }

    /// Offer one click to every live picker.
    ///
    /// Returns the ids of pickers whose state changed, in attach order.
    pub fn dispatch(&mut self, click: &Click) -> Vec<PickerId> {
        let mut changed = Vec::new();

        for (&id, picker) in &mut self.pickers {
            let Some(event) = click.target.event_for(id) else {
                continue;
            };
            let before = picker.state();
            let after = picker.handle(event);
            if before != after {
                changed.push(id);
            }
        }

        changed
    }

    /// Next id not held by a live picker. The counter wraps instead of
    /// overflowing.
    fn fresh_id(&mut self) -> PickerId {
        loop {
            let id = PickerId::new(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.pickers.contains_key(&id) {
                return id;
            }
        }
    }

    /// The picker registered under `id`.
    #[must_use]
    pub fn get(&self, id: PickerId) -> Option<&PickerController> {
        self.pickers.get(&id)
    }

    /// The picker registered under `id`, for programmatic open/close.
    pub fn get_mut(&mut self, id: PickerId) -> Option<&mut PickerController> {
        self.pickers.get_mut(&id)
    }

    /// State of the picker under `id`.
    #[must_use]
    pub fn state(&self, id: PickerId) -> Option<PickerState> {
        self.get(id).map(PickerController::state)
    }

    /// Number of live pickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    /// True if no pickers are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Target;
    use crate::options::PickerOptions;
    use crate::surface::{HostField, MemoryField, MemorySurface};
    use gp_color::ColorFormat;
    use pretty_assertions::assert_eq;

    fn picker(field: &MemoryField, select_type: ColorFormat) -> PickerController {
        PickerController::new(
            Some(Box::new(field.clone())),
            Box::new(MemorySurface::new()),
            PickerOptions::new().with_select_type(select_type),
        )
    }

    fn click(target: Target) -> Click {
        Click::on(target)
    }

    // -- attach / dispose ---------------------------------------------------

    #[test]
    fn attach_hands_out_fresh_ids() {
        let mut dispatcher = Dispatcher::new();
        let field = MemoryField::default();
        let a = dispatcher.attach(picker(&field, ColorFormat::Hex));
        let b = dispatcher.attach(picker(&field, ColorFormat::Hex));
        assert_ne!(a, b);
        assert_eq!(dispatcher.len(), 2);
        assert!(a < b);
    }

    #[test]
    fn id_counter_wraps_past_live_pickers() {
        let mut dispatcher = Dispatcher::new();
        let field = MemoryField::default();
        let first = dispatcher.attach(picker(&field, ColorFormat::Hex));
        assert_eq!(first, PickerId::new(0));

        dispatcher.next_id = u64::MAX;
        let last = dispatcher.attach(picker(&field, ColorFormat::Hex));
        let wrapped = dispatcher.attach(picker(&field, ColorFormat::Hex));

        assert_eq!(last, PickerId::new(u64::MAX));
        assert_eq!(wrapped, PickerId::new(1));
        assert_eq!(dispatcher.len(), 3);
        assert!(dispatcher.get(first).is_some());
    }

    #[test]
    fn ids_are_not_reused_after_dispose() {
        let mut dispatcher = Dispatcher::new();
        let field = MemoryField::default();
        let a = dispatcher.attach(picker(&field, ColorFormat::Hex));
        assert!(dispatcher.dispose(a).is_some());
        let b = dispatcher.attach(picker(&field, ColorFormat::Hex));
        assert_ne!(a, b);
        assert!(dispatcher.get(a).is_none());
    }

    #[test]
    fn dispose_unknown_is_none() {
        let mut dispatcher = Dispatcher::new();
        assert!(dispatcher.dispose(PickerId::new(42)).is_none());
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn disposed_picker_gets_no_events() {
        let mut dispatcher = Dispatcher::new();
        let field = MemoryField::default();
        let a = dispatcher.attach(picker(&field, ColorFormat::Hex));
        let mut disposed = dispatcher.dispose(a).expect("attached");

        assert!(dispatcher.dispatch(&click(Target::Trigger(a))).is_empty());
        assert!(!disposed.is_open());

        // Still usable on its own.
        disposed.open();
        assert!(disposed.is_open());
    }

    // -- Routing ------------------------------------------------------------

    #[test]
    fn full_session() {
        let mut dispatcher = Dispatcher::new();
        let field = MemoryField::default();
        let a = dispatcher.attach(picker(&field, ColorFormat::Hex));

        assert_eq!(dispatcher.dispatch(&click(Target::Trigger(a))), [a]);
        assert_eq!(dispatcher.state(a), Some(PickerState::Open));

        // Clicking the popup body keeps it open.
        assert!(dispatcher.dispatch(&click(Target::Popup(a))).is_empty());
        assert_eq!(dispatcher.state(a), Some(PickerState::Open));

        assert_eq!(
            dispatcher.dispatch(&click(Target::swatch(a, "rgb(0, 255, 0)"))),
            [a]
        );
        assert_eq!(dispatcher.state(a), Some(PickerState::Closed));
        assert_eq!(field.value(), "#00ff00");

        dispatcher.dispatch(&click(Target::Trigger(a)));
        assert_eq!(dispatcher.dispatch(&click(Target::Elsewhere)), [a]);
        assert_eq!(dispatcher.state(a), Some(PickerState::Closed));
    }

    #[test]
    fn swatch_click_closes_other_open_pickers() {
        let mut dispatcher = Dispatcher::new();
        let field_a = MemoryField::default();
        let field_b = MemoryField::default();
        let a = dispatcher.attach(picker(&field_a, ColorFormat::Hex));
        let b = dispatcher.attach(picker(&field_b, ColorFormat::Rgb));

        dispatcher.get_mut(a).expect("live").open();
        dispatcher.get_mut(b).expect("live").open();

        let changed = dispatcher.dispatch(&click(Target::swatch(b, "#0000ff")));
        assert_eq!(changed, [a, b]);
        assert_eq!(field_a.value(), "");
        assert_eq!(field_b.value(), "rgb(0, 0, 255)");
    }

    #[test]
    fn trigger_click_closes_other_pickers_only() {
        let mut dispatcher = Dispatcher::new();
        let field = MemoryField::default();
        let a = dispatcher.attach(picker(&field, ColorFormat::Hex));
        let b = dispatcher.attach(picker(&field, ColorFormat::Hex));

        dispatcher.dispatch(&click(Target::Trigger(a)));
        dispatcher.dispatch(&click(Target::Trigger(b)));
        assert_eq!(dispatcher.state(a), Some(PickerState::Closed));
        assert_eq!(dispatcher.state(b), Some(PickerState::Open));
    }

    #[test]
    fn outside_click_with_everything_closed_changes_nothing() {
        let mut dispatcher = Dispatcher::new();
        let field = MemoryField::default();
        dispatcher.attach(picker(&field, ColorFormat::Hex));
        dispatcher.attach(picker(&field, ColorFormat::Hex));
        assert!(dispatcher.dispatch(&click(Target::Elsewhere)).is_empty());
    }
}
