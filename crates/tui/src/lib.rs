//! Interactive terminal front end for the `msel` multi-select picker.
//!
//! This crate draws a [`msel_core::MultiSelect`] with ratatui, feeds it
//! crossterm key and mouse events through a [`msel_core::Document`], and runs
//! the event loop until the user accepts or cancels.

mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;


pub use app::{App, HitMap};
pub use config::{DEFAULT_MAX_ROWS, UiLabels};
pub use outcome::SelectOutcome;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{StyleOverrides, Theme, builtin_themes, default_theme};
