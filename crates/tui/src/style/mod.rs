//! Visual styling for the picker.
//!
//! Themes are fixed colour schemes picked by name; [`StyleOverrides`] lets a
//! configuration file repaint individual parts of one.

mod overrides;
mod theme;

pub use overrides::{StyleOverrides, StyleSpec};
pub use theme::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};
