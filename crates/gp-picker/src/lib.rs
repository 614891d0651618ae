//! # gp-picker — popup color picker for grid-picker
//!
//! - **[`controller`]** — `PickerController`, the `Closed`/`Open` state machine
//! - **[`event`]** — raw clicks, their targets, and per-picker translation
//! - **[`surface`]** — `HostField` / `RenderSurface` seams plus in-memory versions
//! - **[`options`]** — `PickerOptions` and the `key=value` directive parser
//! - **[`dispatcher`]** — one registry routing clicks to every live picker
//!
//! Color detection and conversion live in `gp-color`.

pub mod controller;
pub mod dispatcher;
pub mod event;
pub mod options;
pub mod surface;

pub use controller::{PickerController, PickerState};
pub use dispatcher::Dispatcher;
pub use event::{Click, PickerEvent, PickerId, Target};
pub use options::{Directive, OptionError, PickerOptions, parse_directive};
pub use surface::{HostField, MemoryField, MemorySurface, RenderSurface, TriggerStyle};
