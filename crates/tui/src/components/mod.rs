//! UI building blocks shared by the render pass and pointer hit-testing.

/// Selected items drawn as removable chips.
pub mod chips;
/// Dropdown list of matching options.
pub mod options;
/// Scrollbar for the option list.
pub mod scrollbar;

pub use chips::{CLOSE_GLYPH, ChipHit, ChipRow, layout_chips};
pub use options::{OptionsLayout, options_height, render_options};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
