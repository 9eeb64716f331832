use msel_core::{Item, MultiSelect};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::{App, HitMap};
use crate::components::{CLOSE_GLYPH, layout_chips, options_height, render_options};
use crate::input::QueryInput;
use crate::style::Theme;

/// Columns kept free for the filter input after the chips.
const MIN_INPUT_WIDTH: u16 = 8;
const CONTROL_HEIGHT: u16 = 3;

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let (open, visible) = {
			let widget = self.widget();
			(widget.is_open(), widget.visible_len())
		};
		let dropdown_height = if open {
			options_height(visible, self.max_rows)
		} else {
			0
		};

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(CONTROL_HEIGHT),
				Constraint::Length(dropdown_height),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(area);
		let (control, dropdown, spare, hint) = (layout[0], layout[1], layout[2], layout[3]);

		if open {
			let rows = usize::from(dropdown.height.saturating_sub(2));
			self.with_widget_mut(|widget| widget.set_viewport(rows));
		}

		let widget = self.widget();
		let mut hits = render_control(
			frame,
			control,
			&widget,
			&self.input,
			&self.theme,
			&self.ui.title,
		);
		if open && dropdown.height > 0 {
			let options = render_options(frame, dropdown, &widget, &self.ui.empty, &self.theme);
			hits.options = Some(options);
			hits.dropdown = Some(dropdown);
		}
		widget.bounds().set([control, hits.dropdown.unwrap_or_default()]);
		if spare.height > 0 {
			let value = Rect { height: 1, ..spare };
			frame.render_widget(
				Paragraph::new(Span::styled(value_json(&widget), self.theme.hint)),
				value,
			);
		}
		drop(widget);

		frame.render_widget(
			Paragraph::new(Span::styled(self.ui.hint.clone(), self.theme.hint)),
			hint,
		);
		self.hits = hits;
	}
}

/// Selected ids as a JSON array, in the order they were chosen.
fn value_json(widget: &MultiSelect) -> String {
	serde_json::to_string(&widget.selected_ids()).unwrap_or_default()
}

fn render_control(
	frame: &mut Frame,
	area: Rect,
	widget: &MultiSelect,
	input: &QueryInput<'_>,
	theme: &Theme,
	title: &str,
) -> HitMap {
	let border = if widget.is_focused() {
		theme.border_focused
	} else {
		theme.border
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(border)
		.title(title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let mut hits = HitMap {
		control: area,
		..HitMap::default()
	};
	if inner.height == 0 || inner.width == 0 {
		return hits;
	}

	let mut content = Rect { height: 1, ..inner };
	if !widget.selection().is_empty() && inner.width > 3 {
		let glyph = Rect::new(inner.x + inner.width - 2, inner.y, 1, 1);
		frame.render_widget(Span::styled(CLOSE_GLYPH, theme.hint), glyph);
		hits.remove_all = Some(glyph);
		content.width -= 3;
	}

	let chips: Vec<&Item> = widget.chips().collect();
	let row = layout_chips(&chips, content, MIN_INPUT_WIDTH, theme);
	frame.render_widget(Paragraph::new(Line::from(row.spans)), content);
	hits.chips = row.hits;

	let text_area = Rect {
		x: content.x + row.width,
		width: content.width - row.width,
		..content
	};
	let text = if input.text().is_empty() {
		Span::styled(widget.placeholder_text().to_string(), theme.placeholder)
	} else {
		Span::styled(input.text().to_string(), theme.prompt)
	};
	frame.render_widget(Paragraph::new(text), text_area);

	if widget.is_focused() && text_area.width > 0 {
		let offset = u16::try_from(input.cursor_offset())
			.unwrap_or(u16::MAX)
			.min(text_area.width - 1);
		frame.set_cursor_position((text_area.x + offset, text_area.y));
	}

	hits
}
