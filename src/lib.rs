//! Library side of the `msel` binary.
//!
//! The picker itself lives in `msel-core` (state machine) and `msel-tui`
//! (terminal front end); this crate adds directory discovery, logging setup
//! and item loading, and re-exports what embedders need to run a picker.

pub mod app_dirs;
pub mod logging;
pub mod sources;

pub use msel_core::{EmitPolicy, Item, MultiSelect, MultiSelectProps};
pub use msel_tui::{App, SelectOutcome, Theme, UiLabels, run};

pub use crate::sources::{ItemSource, SourceError, demo_items};
