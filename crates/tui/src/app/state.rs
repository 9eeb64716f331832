//! Core state container for the terminal front end.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use msel_core::{Change, Document, ListenerGuard, MultiSelect, Mount, mount};
use ratatui::layout::{Position, Rect};

use crate::components::{ChipHit, OptionsLayout};
use crate::config::{DEFAULT_MAX_ROWS, UiLabels};
use crate::input::QueryInput;
use crate::outcome::SelectOutcome;
use crate::style::Theme;

/// Screen areas recorded by the last draw, used to route pointer presses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
	/// The bordered control.
	pub control: Rect,
	pub chips: Vec<ChipHit>,
	/// Remove-all glyph, present while anything is selected.
	pub remove_all: Option<Rect>,
	/// Dropdown rows, present while the dropdown is open.
	pub options: Option<OptionsLayout>,
	/// Whole dropdown, border included.
	pub dropdown: Option<Rect>,
}

impl HitMap {
	/// Whether `position` lies on the control or the open dropdown.
	#[must_use]
	pub fn contains(&self, position: Position) -> bool {
		self.control.contains(position)
			|| self
				.dropdown
				.is_some_and(|dropdown| dropdown.contains(position))
	}

	/// Chip whose close glyph sits at `position`.
	#[must_use]
	pub fn chip_close_at(&self, position: Position) -> Option<&ChipHit> {
		self.chips.iter().find(|hit| hit.close.contains(position))
	}
}

/// A multi-select picker mounted onto its own document.
pub struct App<'a> {
	widget: Rc<RefCell<MultiSelect>>,
	document: Document,
	_mount: Mount,
	pub(crate) input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) max_rows: u16,
	pub(crate) hits: HitMap,
	dirty: Rc<Cell<bool>>,
	_redraw: ListenerGuard<Change>,
}

impl App<'_> {
	pub fn new(widget: MultiSelect) -> Self {
		let input = QueryInput::new(widget.input());
		let widget = Rc::new(RefCell::new(widget));
		let document = Document::new();
		let mount = mount(&widget, &document);

		let dirty = Rc::new(Cell::new(true));
		let redraw = {
			let dirty = Rc::clone(&dirty);
			widget.borrow().subscribe(move |_| dirty.set(true))
		};

		Self {
			widget,
			document,
			_mount: mount,
			input,
			ui: UiLabels::default(),
			theme: Theme::default(),
			max_rows: DEFAULT_MAX_ROWS,
			hits: HitMap::default(),
			dirty,
			_redraw: redraw,
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.ui = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Limit the dropdown to `rows` visible options.
	#[must_use]
	pub fn with_max_rows(mut self, rows: u16) -> Self {
		self.max_rows = rows.max(1);
		self
	}

	/// Borrow the picker state.
	///
	/// Release the borrow before handling further events.
	pub fn widget(&self) -> Ref<'_, MultiSelect> {
		self.widget.borrow()
	}

	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}

	#[must_use]
	pub fn hits(&self) -> &HitMap {
		&self.hits
	}

	/// Snapshot the session result.
	#[must_use]
	pub fn outcome(&self, accepted: bool) -> SelectOutcome {
		let selected = self.widget.borrow().selected_ids();
		let query = self.input.text();
		if accepted {
			SelectOutcome::accepted(selected, query)
		} else {
			SelectOutcome::cancelled(selected, query)
		}
	}

	pub(crate) fn with_widget_mut<R>(&self, apply: impl FnOnce(&mut MultiSelect) -> R) -> R {
		apply(&mut self.widget.borrow_mut())
	}

	pub(crate) fn mark_dirty(&self) {
		self.dirty.set(true);
	}

	/// Whether anything changed since the last call.
	pub(crate) fn take_dirty(&self) -> bool {
		self.dirty.replace(false)
	}
}
