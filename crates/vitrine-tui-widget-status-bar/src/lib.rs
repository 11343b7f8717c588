// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Style, Stylize},
	text::{Line, Span},
	widgets::Widget,
};
use vitrine_tui_core::TextDirection;

#[derive(Debug, Clone)]
pub struct StatusItem {
	pub label: String,
	pub value: String,
}

/// One-row bottom bar: session items (language, theme) at the reading start,
/// keyboard shortcuts at the reading end. Shortcuts that do not fit are
/// dropped whole rather than truncated mid-word.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
	items: Vec<StatusItem>,
	shortcuts: Vec<(String, String)>,
	style: Style,
	key_style: Style,
	direction: TextDirection,
}

impl StatusBar {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn item(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
		self.items.push(StatusItem {
			label: label.into(),
			value: value.into(),
		});
		self
	}

	pub fn shortcut(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
		self.shortcuts.push((key.into(), desc.into()));
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	/// Style for shortcut keys, normally the theme accent.
	pub fn key_style(mut self, style: Style) -> Self {
		self.key_style = style;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	fn item_line(&self) -> Line<'_> {
		let mut spans = Vec::new();
		for (i, item) in self.items.iter().enumerate() {
			if i > 0 {
				spans.push(Span::styled(" | ", self.style));
			}
			spans.push(Span::styled(item.label.as_str(), self.style).bold());
			spans.push(Span::styled(": ", self.style));
			spans.push(Span::styled(item.value.as_str(), self.style));
		}
		Line::from(spans)
	}

	/// Shortcut line built left to right, dropping entries once `max_width`
	/// would be exceeded.
	fn shortcut_line(&self, max_width: usize) -> Line<'_> {
		let mut spans = Vec::new();
		let mut used = 0usize;
		for (key, desc) in &self.shortcuts {
			let sep = if spans.is_empty() { 0 } else { 3 };
			let entry_width = sep + key.chars().count() + 1 + desc.chars().count();
			if used + entry_width > max_width {
				break;
			}
			if !spans.is_empty() {
				spans.push(Span::styled(" | ", self.style));
			}
			spans.push(Span::styled(key.as_str(), self.key_style).bold());
			spans.push(Span::styled(" ", self.style));
			spans.push(Span::styled(desc.as_str(), self.style));
			used += entry_width;
		}
		Line::from(spans)
	}
}

impl Widget for StatusBar {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 || area.width == 0 {
			return;
		}

		if self.style != Style::default() {
			buf.set_style(area, self.style);
		}

		let is_rtl = self.direction.is_rtl();

		let item_line = self.item_line();
		let item_width = item_line.width() as u16;

		let available_for_shortcuts = area.width.saturating_sub(item_width + 1) as usize;
		let shortcut_line = self.shortcut_line(available_for_shortcuts);
		let shortcut_width = shortcut_line.width() as u16;

		if is_rtl {
			buf.set_line(area.x, area.y, &shortcut_line, shortcut_width);

			let items_x = area.right().saturating_sub(item_width);
			if item_width > 0 && items_x >= area.x {
				buf.set_line(items_x, area.y, &item_line, item_width);
			}
		} else {
			buf.set_line(area.x, area.y, &item_line, item_width);

			let shortcut_x = area.right().saturating_sub(shortcut_width);
			if shortcut_width > 0 && shortcut_x >= area.x {
				buf.set_line(shortcut_x, area.y, &shortcut_line, shortcut_width);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_bar_builder() {
		let bar = StatusBar::new()
			.item("Lang", "FR")
			.item("Theme", "dark")
			.shortcut("q", "quit")
			.shortcut("t", "theme");

		assert_eq!(bar.items.len(), 2);
		assert_eq!(bar.items[0].label, "Lang");
		assert_eq!(bar.shortcuts.len(), 2);
	}

	#[test]
	fn test_shortcut_line_drops_whole_entries() {
		let bar = StatusBar::new()
			.shortcut("q", "quit")
			.shortcut("Tab", "next field")
			.shortcut("Enter", "submit");

		// "q quit" = 6, " | Tab next field" = 17, " | Enter submit" = 15
		let line = bar.shortcut_line(24);
		assert_eq!(line.width(), 23);

		let line = bar.shortcut_line(10);
		assert_eq!(line.width(), 6);

		let line = bar.shortcut_line(3);
		assert_eq!(line.width(), 0);
	}
}
