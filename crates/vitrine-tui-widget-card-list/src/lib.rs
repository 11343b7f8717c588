// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::StatefulWidget,
};
use unicode_width::UnicodeWidthStr;
use vitrine_content::IconId;
use vitrine_tui_core::TextDirection;

/// Terminal glyph for a catalog icon identifier. The catalog stores only the
/// identifier; the glyph choice is a presentation concern and lives here.
pub fn icon_glyph(icon: IconId) -> &'static str {
	match icon {
		IconId::LightBulb => "✦",
		IconId::ChartBar => "▮",
		IconId::Chat => "❞",
		IconId::Eye => "◉",
		IconId::Wifi => "≈",
		IconId::Chip => "▦",
		IconId::DeviceMobile => "▯",
		IconId::Globe => "◍",
		IconId::ShoppingBag => "⬢",
		IconId::BookOpen => "❒",
		IconId::ShieldCheck => "✪",
		IconId::LockClosed => "▣",
	}
}

fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
	if UnicodeWidthStr::width(s) <= max_width {
		return s.to_string();
	}
	match max_width {
		0 => String::new(),
		1 => "…".to_string(),
		_ => {
			let mut out = String::new();
			let mut used = 0;
			for c in s.chars() {
				let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
				if used + w > max_width - 1 {
					break;
				}
				out.push(c);
				used += w;
			}
			out.push('…');
			out
		}
	}
}

/// One entry in the list: a sector or solution card.
#[derive(Debug, Clone)]
pub struct Card {
	pub slug: String,
	pub title: String,
	pub description: String,
	pub badge: Option<String>,
	pub icon: Option<IconId>,
}

impl Card {
	pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			slug: slug.into(),
			title: title.into(),
			description: String::new(),
			badge: None,
			icon: None,
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn badge(mut self, badge: impl Into<String>) -> Self {
		self.badge = Some(badge.into());
		self
	}

	pub fn icon(mut self, icon: IconId) -> Self {
		self.icon = Some(icon);
		self
	}
}

/// Rows each card occupies: title row, description row, separator row.
pub const CARD_HEIGHT: usize = 3;

#[derive(Debug, Default, Clone)]
pub struct CardListState {
	selected: usize,
	scroll_offset: usize,
}

impl CardListState {
	pub fn clamp_to_total(&mut self, total: usize) {
		if total == 0 {
			self.selected = 0;
			self.scroll_offset = 0;
		} else {
			self.selected = self.selected.min(total - 1);
			self.scroll_offset = self.scroll_offset.min(total - 1);
		}
	}

	pub fn select_next(&mut self, total: usize) {
		if total > 0 {
			self.selected = (self.selected + 1).min(total - 1);
		}
	}

	pub fn select_prev(&mut self) {
		self.selected = self.selected.saturating_sub(1);
	}

	pub fn page_down(&mut self, visible_cards: usize, total: usize) {
		if total > 0 {
			self.selected = (self.selected + visible_cards).min(total - 1);
		}
	}

	pub fn page_up(&mut self, visible_cards: usize) {
		self.selected = self.selected.saturating_sub(visible_cards);
	}

	pub fn selected(&self) -> usize {
		self.selected
	}

	pub fn set_selected(&mut self, selected: usize) {
		self.selected = selected;
	}

	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}
}

#[derive(Debug, Clone)]
pub struct CardList {
	cards: Vec<Card>,
	style: Style,
	accent_style: Style,
	badge_style: Style,
	direction: TextDirection,
}

impl CardList {
	pub fn new(cards: Vec<Card>) -> Self {
		Self {
			cards,
			style: Style::default(),
			accent_style: Style::default(),
			badge_style: Style::default(),
			direction: TextDirection::default(),
		}
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	/// Style for icon glyphs, normally the theme accent.
	pub fn accent_style(mut self, style: Style) -> Self {
		self.accent_style = style;
		self
	}

	pub fn badge_style(mut self, style: Style) -> Self {
		self.badge_style = style;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}
}

impl StatefulWidget for CardList {
	type State = CardListState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.height == 0 || area.width == 0 {
			return;
		}

		state.clamp_to_total(self.cards.len());

		let visible_cards = (area.height as usize / CARD_HEIGHT).max(1);
		if state.selected >= state.scroll_offset + visible_cards {
			state.scroll_offset = state.selected + 1 - visible_cards;
		} else if state.selected < state.scroll_offset {
			state.scroll_offset = state.selected;
		}

		let is_rtl = self.direction.is_rtl();
		let mut y = area.y;
		let max_y = area.y + area.height;

		for (idx, card) in self.cards.iter().enumerate().skip(state.scroll_offset) {
			if y + 1 > max_y {
				break;
			}

			let is_selected = idx == state.selected;
			let row_style = if is_selected {
				self.style.add_modifier(Modifier::REVERSED)
			} else {
				self.style
			};
			let glyph_style = if is_selected {
				self.accent_style.add_modifier(Modifier::REVERSED)
			} else {
				self.accent_style
			};

			let glyph = card.icon.map(icon_glyph).unwrap_or(" ");
			let badge_text = card.badge.as_ref().map(|b| format!(" {} ", b));

			let width = area.width as usize;
			let glyph_width = UnicodeWidthStr::width(glyph) + 1;
			let badge_width = badge_text
				.as_ref()
				.map(|b| UnicodeWidthStr::width(b.as_str()) + 1)
				.unwrap_or(0);
			let title_max = width.saturating_sub(glyph_width + badge_width);
			let title = truncate_with_ellipsis(&card.title, title_max);
			let title_width = UnicodeWidthStr::width(title.as_str());
			let padding = width.saturating_sub(glyph_width + title_width + badge_width);

			let mut spans = vec![
				Span::styled(glyph, glyph_style),
				Span::styled(" ", row_style),
				Span::styled(title, row_style.add_modifier(Modifier::BOLD)),
				Span::styled(" ".repeat(padding), row_style),
			];
			if let Some(badge) = &badge_text {
				spans.push(Span::styled(badge.clone(), self.badge_style));
				spans.push(Span::styled(" ", row_style));
			}
			if is_rtl {
				spans.reverse();
			}
			buf.set_line(area.x, y, &Line::from(spans), area.width);
			y += 1;

			if y >= max_y {
				break;
			}

			let desc_max = width.saturating_sub(4);
			let description = truncate_with_ellipsis(&card.description, desc_max);
			let desc_style = if is_selected {
				row_style
			} else {
				self.style.add_modifier(Modifier::DIM)
			};
			let desc_spans = if is_rtl {
				vec![
					Span::styled(description, desc_style),
					Span::styled("  ", desc_style),
				]
			} else {
				vec![
					Span::styled("  ", desc_style),
					Span::styled(description, desc_style),
				]
			};
			let desc_line = Line::from(desc_spans);
			let desc_x = if is_rtl {
				let desc_width = desc_line.width() as u16;
				area.right().saturating_sub(desc_width)
			} else {
				area.x
			};
			buf.set_line(desc_x, y, &desc_line, area.width);
			y += 1;

			if y < max_y {
				y += 1;
			}
		}
	}
}
