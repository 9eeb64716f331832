//! Headless state for the `msel` multi-select picker.
//!
//! [`MultiSelect`] combines three pieces that are useful on their own: the
//! [`SelectionSet`] holding chosen ids, the [`filter`] engine deriving the
//! visible rows from the filter text, and the keyboard [`Navigator`] moving a
//! focused row through them. Front ends feed events through a [`Document`]
//! and render whatever the widget exposes; nothing here touches a terminal.

pub mod document;
pub mod filter;
pub mod item;
pub mod listeners;
pub mod navigator;
pub mod outside;
pub mod scroll;
pub mod selection;
pub mod widget;

pub use document::{Document, KeyDown, Mount, PointerDown, mount};
pub use filter::{VisibleList, filter};
pub use item::Item;
pub use listeners::{Handled, ListenerGuard, ListenerSet};
pub use navigator::{DEFAULT_DEBOUNCE, Debounce, NavKey, NavStep, Navigator};
pub use outside::{Bounds, click_outside};
pub use scroll::ScrollWindow;
pub use selection::{EmitPolicy, SelectionSet, Toggled};
pub use widget::{Change, DEFAULT_PLACEHOLDER, MultiSelect, MultiSelectProps};
