//! Terminal application state and behaviour for the picker.
//!
//! The [`App`] type wraps a mounted [`msel_core::MultiSelect`] together with
//! the terminal-only pieces: filter input, labels, theme and the hit areas
//! recorded by the last draw. Supporting modules split the implementation
//! into input handling and rendering.

mod actions;
mod render;
mod state;

pub use state::{App, HitMap};
