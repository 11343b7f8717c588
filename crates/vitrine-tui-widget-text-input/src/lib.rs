// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact-form field: a bordered input with label, placeholder, an inline
//! validation message, and an optional character counter.
//!
//! The bottom row of the widget area is a footer reserved for the validation
//! message (reading start) and the counter (reading end); the bordered input
//! occupies the rows above. Multi-line fields wrap per grapheme cluster and
//! scroll vertically to keep the cursor visible.

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::Style,
	text::{Line, Span},
	widgets::{Block, Borders, StatefulWidget, Widget},
};
use unicode_segmentation::UnicodeSegmentation;
use vitrine_tui_core::TextDirection;
use vitrine_tui_theme::Theme;

#[derive(Debug, Default, Clone)]
pub struct TextInputState {
	content: String,
	/// Byte offset, always on a grapheme boundary.
	cursor: usize,
	/// Grapheme offset (single line) or first visible wrapped row (multi-line).
	scroll: usize,
}

impl TextInputState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert_char(&mut self, c: char) {
		self.content.insert(self.cursor, c);
		self.cursor += c.len_utf8();
	}

	pub fn delete_char(&mut self) {
		if self.cursor > 0 {
			let start = self.content[..self.cursor]
				.grapheme_indices(true)
				.next_back()
				.map(|(i, _)| i)
				.unwrap_or(0);
			self.content.drain(start..self.cursor);
			self.cursor = start;
		}
	}

	pub fn delete_char_forward(&mut self) {
		if self.cursor < self.content.len() {
			if let Some((_, g)) = self.content[self.cursor..].grapheme_indices(true).next() {
				let end = self.cursor + g.len();
				self.content.drain(self.cursor..end);
			}
		}
	}

	/// Delete back to the start of the previous word.
	pub fn delete_prev_word(&mut self) {
		if self.cursor == 0 {
			return;
		}
		let before = &self.content[..self.cursor];
		let mut start = 0;
		let mut in_word = false;
		for (i, g) in before.grapheme_indices(true).rev() {
			let is_space = g.chars().all(char::is_whitespace);
			if !in_word {
				if !is_space {
					in_word = true;
				}
			} else if is_space {
				start = i + g.len();
				break;
			}
		}
		self.content.drain(start..self.cursor);
		self.cursor = start;
	}

	pub fn move_cursor_left(&mut self) {
		if self.cursor > 0 {
			self.cursor = self.content[..self.cursor]
				.grapheme_indices(true)
				.next_back()
				.map(|(i, _)| i)
				.unwrap_or(0);
		}
	}

	pub fn move_cursor_right(&mut self) {
		if self.cursor < self.content.len() {
			if let Some((_, g)) = self.content[self.cursor..].grapheme_indices(true).next() {
				self.cursor += g.len();
			}
		}
	}

	pub fn move_cursor_start(&mut self) {
		self.cursor = 0;
	}

	pub fn move_cursor_end(&mut self) {
		self.cursor = self.content.len();
	}

	pub fn clear(&mut self) {
		self.content.clear();
		self.cursor = 0;
		self.scroll = 0;
	}

	pub fn set_content(&mut self, content: impl Into<String>) {
		self.content = content.into();
		self.cursor = self.content.len();
		self.scroll = 0;
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn cursor_position(&self) -> usize {
		self.cursor
	}

	/// Character count as validation counts it.
	pub fn char_count(&self) -> usize {
		self.content.chars().count()
	}
}

/// One wrapped display row of a multi-line field.
struct WrappedRow<'a> {
	start: usize,
	cells: Vec<&'a str>,
}

/// Grapheme-wrap `content` to `width` columns, breaking on `\n`. Always
/// produces at least one row; the newline itself is never a cell.
fn wrap_rows(content: &str, width: usize) -> Vec<WrappedRow<'_>> {
	let mut rows = Vec::new();
	let mut row = WrappedRow {
		start: 0,
		cells: Vec::new(),
	};

	for (i, g) in content.grapheme_indices(true) {
		if g == "\n" {
			rows.push(row);
			row = WrappedRow {
				start: i + g.len(),
				cells: Vec::new(),
			};
			continue;
		}
		if row.cells.len() >= width {
			rows.push(row);
			row = WrappedRow {
				start: i,
				cells: Vec::new(),
			};
		}
		row.cells.push(g);
	}
	rows.push(row);

	rows
}

/// Row and column of the cursor within wrapped rows.
fn locate_cursor(rows: &[WrappedRow<'_>], cursor: usize) -> (usize, usize) {
	let mut row_idx = 0;
	for (i, row) in rows.iter().enumerate() {
		if row.start <= cursor {
			row_idx = i;
		} else {
			break;
		}
	}

	let row = &rows[row_idx];
	let mut byte = row.start;
	let mut col = 0;
	for cell in &row.cells {
		if byte >= cursor {
			break;
		}
		byte += cell.len();
		col += 1;
	}
	(row_idx, col)
}

#[derive(Debug, Clone)]
pub struct TextInput {
	label: Option<String>,
	placeholder: Option<String>,
	error: Option<String>,
	counter: Option<String>,
	multiline: bool,
	focused: bool,
	theme: Theme,
	direction: TextDirection,
}

impl Default for TextInput {
	fn default() -> Self {
		Self::new()
	}
}

impl TextInput {
	pub fn new() -> Self {
		Self {
			label: None,
			placeholder: None,
			error: None,
			counter: None,
			multiline: false,
			focused: false,
			theme: Theme::default(),
			direction: TextDirection::Ltr,
		}
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Localized validation message shown in the footer; also switches the
	/// border to the error style.
	pub fn error(mut self, error: Option<String>) -> Self {
		self.error = error;
		self
	}

	/// Preformatted counter text, e.g. "12/1000", shown at the footer end.
	pub fn counter(mut self, counter: impl Into<String>) -> Self {
		self.counter = Some(counter.into());
		self
	}

	pub fn multiline(mut self, multiline: bool) -> Self {
		self.multiline = multiline;
		self
	}

	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
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

	fn cursor_style(&self) -> Style {
		Style::default()
			.bg(self.theme.colors.text)
			.fg(self.theme.colors.background)
	}

	fn render_single_line(&self, inner: Rect, buf: &mut Buffer, state: &mut TextInputState) {
		let width = inner.width as usize;
		let is_rtl = self.direction.is_rtl();

		if state.content.is_empty() {
			if let Some(ref placeholder) = self.placeholder {
				let display: String = placeholder.graphemes(true).take(width).collect();
				let display_width = display.graphemes(true).count() as u16;
				let x = if is_rtl {
					inner.x + inner.width.saturating_sub(display_width)
				} else {
					inner.x
				};
				buf.set_string(x, inner.y, &display, self.theme.input_placeholder());
			}
			if self.focused {
				let x = if is_rtl { inner.right() - 1 } else { inner.x };
				buf.set_string(x, inner.y, " ", self.cursor_style());
			}
			return;
		}

		let cursor_pos = state.content[..state.cursor].graphemes(true).count();
		if cursor_pos < state.scroll {
			state.scroll = cursor_pos;
		} else if cursor_pos >= state.scroll + width {
			state.scroll = cursor_pos + 1 - width;
		}

		let visible: Vec<&str> = state
			.content
			.graphemes(true)
			.skip(state.scroll)
			.take(width)
			.collect();
		let cursor_col = cursor_pos - state.scroll;

		for (i, g) in visible.iter().enumerate() {
			let x = if is_rtl {
				inner.right() - 1 - i as u16
			} else {
				inner.x + i as u16
			};
			let style = if self.focused && i == cursor_col {
				self.cursor_style()
			} else {
				self.theme.input_text()
			};
			buf.set_string(x, inner.y, *g, style);
		}

		if self.focused && cursor_col >= visible.len() && cursor_col < width {
			let x = if is_rtl {
				inner.right() - 1 - cursor_col as u16
			} else {
				inner.x + cursor_col as u16
			};
			buf.set_string(x, inner.y, " ", self.cursor_style());
		}
	}

	fn render_multiline(&self, inner: Rect, buf: &mut Buffer, state: &mut TextInputState) {
		let width = inner.width as usize;
		let height = inner.height as usize;
		let is_rtl = self.direction.is_rtl();

		if state.content.is_empty() {
			if let Some(ref placeholder) = self.placeholder {
				let display: String = placeholder.graphemes(true).take(width).collect();
				let x = if is_rtl {
					let w = display.graphemes(true).count() as u16;
					inner.x + inner.width.saturating_sub(w)
				} else {
					inner.x
				};
				buf.set_string(x, inner.y, &display, self.theme.input_placeholder());
			}
			if self.focused {
				let x = if is_rtl { inner.right() - 1 } else { inner.x };
				buf.set_string(x, inner.y, " ", self.cursor_style());
			}
			return;
		}

		let mut rows = wrap_rows(&state.content, width);
		if state.cursor == state.content.len() {
			if let Some(last) = rows.last() {
				if last.cells.len() >= width {
					rows.push(WrappedRow {
						start: state.content.len(),
						cells: Vec::new(),
					});
				}
			}
		}

		let (cursor_row, cursor_col) = locate_cursor(&rows, state.cursor);

		if cursor_row < state.scroll {
			state.scroll = cursor_row;
		} else if cursor_row >= state.scroll + height {
			state.scroll = cursor_row + 1 - height;
		}
		state.scroll = state.scroll.min(rows.len().saturating_sub(1));

		for (vis, row) in rows.iter().skip(state.scroll).take(height).enumerate() {
			let y = inner.y + vis as u16;
			for (i, g) in row.cells.iter().enumerate() {
				let x = if is_rtl {
					inner.right() - 1 - i as u16
				} else {
					inner.x + i as u16
				};
				buf.set_string(x, y, *g, self.theme.input_text());
			}
		}

		if self.focused && cursor_row >= state.scroll && cursor_row < state.scroll + height {
			let y = inner.y + (cursor_row - state.scroll) as u16;
			let col = cursor_col.min(width.saturating_sub(1));
			let x = if is_rtl {
				inner.right() - 1 - col as u16
			} else {
				inner.x + col as u16
			};
			let under = rows[cursor_row].cells.get(cursor_col).copied().unwrap_or(" ");
			buf.set_string(x, y, under, self.cursor_style());
		}
	}

	fn render_footer(&self, footer: Rect, buf: &mut Buffer) {
		let is_rtl = self.direction.is_rtl();

		if let Some(ref error) = self.error {
			let line = Line::from(Span::styled(error.as_str(), self.theme.error_text()));
			let line_width = (line.width() as u16).min(footer.width);
			let x = if is_rtl {
				footer.right().saturating_sub(line_width)
			} else {
				footer.x
			};
			buf.set_line(x, footer.y, &line, line_width);
		}

		if let Some(ref counter) = self.counter {
			let line = Line::from(Span::styled(counter.as_str(), self.theme.text.dim));
			let line_width = (line.width() as u16).min(footer.width);
			let x = if is_rtl {
				footer.x
			} else {
				footer.right().saturating_sub(line_width)
			};
			buf.set_line(x, footer.y, &line, line_width);
		}
	}
}

impl StatefulWidget for TextInput {
	type State = TextInputState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width < 3 || area.height < 3 {
			return;
		}

		let body = Rect::new(area.x, area.y, area.width, area.height - 1);
		let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);

		let border_style = if self.error.is_some() {
			self.theme.border_error()
		} else {
			self.theme.border_style_for(self.focused, self.direction)
		};

		let mut block = Block::default().borders(Borders::ALL).border_style(border_style);
		if let Some(ref label) = self.label {
			block = block.title(Span::styled(format!(" {} ", label), self.theme.text.normal));
		}

		let inner = block.inner(body);
		block.render(body, buf);

		if inner.width > 0 && inner.height > 0 {
			if self.multiline && inner.height > 1 {
				self.render_multiline(inner, buf, state);
			} else {
				self.render_single_line(inner, buf, state);
			}
		}

		self.render_footer(footer, buf);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod state_ops {
		use super::*;

		#[test]
		fn test_insert_and_delete() {
			let mut state = TextInputState::new();
			state.insert_char('h');
			state.insert_char('i');
			assert_eq!(state.content(), "hi");

			state.delete_char();
			assert_eq!(state.content(), "h");
			assert_eq!(state.cursor_position(), 1);
		}

		#[test]
		fn test_grapheme_cursor_movement() {
			let mut state = TextInputState::new();
			for c in "héllo".chars() {
				state.insert_char(c);
			}
			state.move_cursor_start();
			state.move_cursor_right();
			state.move_cursor_right();
			// h is 1 byte, é is 2
			assert_eq!(state.cursor_position(), 3);
			state.move_cursor_left();
			assert_eq!(state.cursor_position(), 1);
		}

		#[test]
		fn test_delete_forward() {
			let mut state = TextInputState::new();
			state.set_content("ab");
			state.move_cursor_start();
			state.delete_char_forward();
			assert_eq!(state.content(), "b");
		}

		#[test]
		fn test_delete_prev_word() {
			let mut state = TextInputState::new();
			state.set_content("demande de devis");
			state.delete_prev_word();
			assert_eq!(state.content(), "demande de ");

			state.delete_prev_word();
			assert_eq!(state.content(), "demande ");
		}

		#[test]
		fn test_char_count_matches_validation() {
			let mut state = TextInputState::new();
			state.set_content("éé");
			assert_eq!(state.char_count(), 2);
			assert_eq!(state.content().len(), 4);
		}

		#[test]
		fn test_clear() {
			let mut state = TextInputState::new();
			state.set_content("x");
			state.clear();
			assert_eq!(state.content(), "");
			assert_eq!(state.cursor_position(), 0);
		}
	}

	mod wrapping {
		use super::*;

		#[test]
		fn test_wrap_plain_text() {
			let rows = wrap_rows("abcdefgh", 3);
			let cells: Vec<usize> = rows.iter().map(|r| r.cells.len()).collect();
			assert_eq!(cells, vec![3, 3, 2]);
			assert_eq!(rows[1].start, 3);
			assert_eq!(rows[2].start, 6);
		}

		#[test]
		fn test_wrap_hard_breaks() {
			let rows = wrap_rows("ab\ncd", 10);
			assert_eq!(rows.len(), 2);
			assert_eq!(rows[0].cells, vec!["a", "b"]);
			assert_eq!(rows[1].cells, vec!["c", "d"]);
			assert_eq!(rows[1].start, 3);
		}

		#[test]
		fn test_wrap_trailing_newline_gives_empty_row() {
			let rows = wrap_rows("ab\n", 10);
			assert_eq!(rows.len(), 2);
			assert!(rows[1].cells.is_empty());
			assert_eq!(rows[1].start, 3);
		}

		#[test]
		fn test_wrap_empty_content() {
			let rows = wrap_rows("", 10);
			assert_eq!(rows.len(), 1);
			assert!(rows[0].cells.is_empty());
		}

		#[test]
		fn test_locate_cursor_inside_and_between_rows() {
			let rows = wrap_rows("abcdef", 3);

			assert_eq!(locate_cursor(&rows, 0), (0, 0));
			assert_eq!(locate_cursor(&rows, 2), (0, 2));
			// Boundary byte belongs to the start of the next row.
			assert_eq!(locate_cursor(&rows, 3), (1, 0));
			assert_eq!(locate_cursor(&rows, 5), (1, 2));
		}

		#[test]
		fn test_locate_cursor_at_newline() {
			let rows = wrap_rows("ab\ncd", 10);
			// Cursor sitting on the newline byte stays on the first row.
			assert_eq!(locate_cursor(&rows, 2), (0, 2));
			assert_eq!(locate_cursor(&rows, 3), (1, 0));
		}
	}
}
