// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Overlay menu anchored under a header slot, used for sector navigation and
//! the language selector.
//!
//! The keypress that opens the menu must not also activate or dismiss it, so
//! [`DropdownState::open`] marks the state as just opened and the screen
//! swallows events until the next tick clears the mark.

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::Style,
	text::{Line, Span},
	widgets::{Block, Borders, Clear, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;
use vitrine_tui_core::TextDirection;
use vitrine_tui_theme::Theme;

#[derive(Debug, Clone)]
pub struct DropdownItem {
	pub label: String,
	/// Marked entries carry a check glyph, e.g. the active language.
	pub marked: bool,
}

impl DropdownItem {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			marked: false,
		}
	}

	pub fn marked(mut self, marked: bool) -> Self {
		self.marked = marked;
		self
	}
}

#[derive(Debug, Default, Clone)]
pub struct DropdownState {
	open: bool,
	just_opened: bool,
	selected: usize,
}

impl DropdownState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn open(&mut self) {
		self.open = true;
		self.just_opened = true;
		self.selected = 0;
	}

	pub fn close(&mut self) {
		self.open = false;
		self.just_opened = false;
	}

	pub fn toggle(&mut self) {
		if self.open {
			self.close();
		} else {
			self.open();
		}
	}

	/// Clears the open-debounce mark. Call once per application tick.
	pub fn tick(&mut self) {
		self.just_opened = false;
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Open and past the debounce window, so events may act on it.
	pub fn is_ready(&self) -> bool {
		self.open && !self.just_opened
	}

	pub fn select_next(&mut self, total: usize) {
		if total > 0 {
			self.selected = (self.selected + 1) % total;
		}
	}

	pub fn select_prev(&mut self, total: usize) {
		if total > 0 {
			self.selected = self.selected.checked_sub(1).unwrap_or(total - 1);
		}
	}

	pub fn selected(&self) -> usize {
		self.selected
	}

	pub fn set_selected(&mut self, selected: usize) {
		self.selected = selected;
	}
}

#[derive(Debug, Clone)]
pub struct Dropdown {
	items: Vec<DropdownItem>,
	title: Option<String>,
	theme: Theme,
	direction: TextDirection,
}

impl Dropdown {
	pub fn new(items: Vec<DropdownItem>) -> Self {
		Self {
			items,
			title: None,
			theme: Theme::default(),
			direction: TextDirection::default(),
		}
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	/// Columns and rows the menu needs; callers anchor the overlay with this.
	pub fn size(&self) -> (u16, u16) {
		let widest = self
			.items
			.iter()
			.map(|item| UnicodeWidthStr::width(item.label.as_str()))
			.max()
			.unwrap_or(0);
		let title_width = self
			.title
			.as_ref()
			.map(|t| UnicodeWidthStr::width(t.as_str()) + 2)
			.unwrap_or(0);
		// check glyph + space + label, one column padding each side, borders
		let width = (widest + 2).max(title_width) + 2 + 2;
		let height = self.items.len() as u16 + 2;
		(width as u16, height)
	}
}

impl StatefulWidget for Dropdown {
	type State = DropdownState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if !state.open || area.width < 3 || area.height < 3 {
			return;
		}

		state.selected = state.selected.min(self.items.len().saturating_sub(1));

		Clear.render(area, buf);

		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border_focused())
			.style(
				Style::default()
					.bg(self.theme.colors.surface)
					.fg(self.theme.colors.text),
			);
		if let Some(ref title) = self.title {
			block = block.title(format!(" {} ", title));
		}

		let inner = block.inner(area);
		block.render(area, buf);

		let is_rtl = self.direction.is_rtl();

		for (i, item) in self.items.iter().enumerate() {
			if i as u16 >= inner.height {
				break;
			}
			let y = inner.y + i as u16;

			let style = if i == state.selected {
				self.theme.selection_style()
			} else {
				Style::default().fg(self.theme.colors.text)
			};

			let check = if item.marked { "✓" } else { " " };
			let spans = if is_rtl {
				vec![
					Span::styled(item.label.as_str(), style),
					Span::styled(" ", style),
					Span::styled(check, style),
				]
			} else {
				vec![
					Span::styled(check, style),
					Span::styled(" ", style),
					Span::styled(item.label.as_str(), style),
				]
			};
			let line = Line::from(spans);
			let line_width = line.width() as u16;
			let x = if is_rtl {
				inner.right().saturating_sub(line_width + 1)
			} else {
				inner.x + 1
			};

			// Selection background across the full row.
			buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
			buf.set_line(x, y, &line, inner.width);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_open_sets_debounce_mark() {
		let mut state = DropdownState::new();
		state.open();
		assert!(state.is_open());
		assert!(!state.is_ready());

		state.tick();
		assert!(state.is_open());
		assert!(state.is_ready());
	}

	#[test]
	fn test_close_clears_everything() {
		let mut state = DropdownState::new();
		state.open();
		state.tick();
		state.close();
		assert!(!state.is_open());
		assert!(!state.is_ready());
	}

	#[test]
	fn test_toggle() {
		let mut state = DropdownState::new();
		state.toggle();
		assert!(state.is_open());
		state.toggle();
		assert!(!state.is_open());
	}

	#[test]
	fn test_selection_wraps() {
		let mut state = DropdownState::new();
		state.open();

		state.select_next(3);
		state.select_next(3);
		assert_eq!(state.selected(), 2);

		state.select_next(3);
		assert_eq!(state.selected(), 0);

		state.select_prev(3);
		assert_eq!(state.selected(), 2);
	}

	#[test]
	fn test_reopen_resets_selection() {
		let mut state = DropdownState::new();
		state.open();
		state.select_next(3);
		state.close();
		state.open();
		assert_eq!(state.selected(), 0);
	}

	#[test]
	fn test_size_accounts_for_widest_label() {
		let dropdown = Dropdown::new(vec![
			DropdownItem::new("English"),
			DropdownItem::new("Français"),
		]);
		// widest label 8 + check 2 + padding 2 + borders 2
		assert_eq!(dropdown.size(), (14, 4));
	}
}
