// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Progressive text reveal for the home-screen tagline.
//!
//! One grapheme cluster appears per tick, so accented French text reveals a
//! user-visible character at a time rather than a bare combining mark. A
//! block cursor blinks alongside the text and hides shortly after the reveal
//! completes.

use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Rect},
	style::Style,
	text::{Line, Span},
	widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_segmentation::UnicodeSegmentation;
use vitrine_tui_core::TextDirection;

/// Ticks the cursor lingers after the full text is revealed.
pub const CURSOR_HOLD_TICKS: u32 = 10;
/// Half period of the cursor blink, in ticks.
const BLINK_TICKS: u32 = 3;

const CURSOR_GLYPH: &str = "▌";

#[derive(Debug, Clone)]
pub struct TypewriterState {
	text: String,
	revealed: usize,
	ticks: u32,
	done_ticks: u32,
	interval: u32,
}

impl Default for TypewriterState {
	fn default() -> Self {
		Self::new("")
	}
}

impl TypewriterState {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			revealed: 0,
			ticks: 0,
			done_ticks: 0,
			interval: 1,
		}
	}

	/// Reveal one grapheme every `interval` ticks instead of every tick.
	pub fn interval(mut self, interval: u32) -> Self {
		self.interval = interval.max(1);
		self
	}

	fn total(&self) -> usize {
		self.text.graphemes(true).count()
	}

	pub fn tick(&mut self) {
		self.ticks = self.ticks.wrapping_add(1);
		if self.revealed < self.total() {
			if self.ticks % self.interval == 0 {
				self.revealed += 1;
			}
		} else {
			self.done_ticks = self.done_ticks.saturating_add(1);
		}
	}

	/// Complete the reveal immediately.
	pub fn skip(&mut self) {
		self.revealed = self.total();
	}

	/// Restart with new text.
	pub fn reset(&mut self, text: impl Into<String>) {
		self.text = text.into();
		self.revealed = 0;
		self.ticks = 0;
		self.done_ticks = 0;
	}

	pub fn is_complete(&self) -> bool {
		self.revealed >= self.total()
	}

	/// The revealed prefix of the text.
	pub fn visible_text(&self) -> &str {
		match self.text.grapheme_indices(true).nth(self.revealed) {
			Some((byte_idx, _)) => &self.text[..byte_idx],
			None => &self.text,
		}
	}

	/// Whether the cursor should be drawn this frame. The cursor blinks
	/// while active and disappears once the post-reveal hold elapses.
	pub fn cursor_visible(&self) -> bool {
		if self.is_complete() && self.done_ticks >= CURSOR_HOLD_TICKS {
			return false;
		}
		(self.ticks / BLINK_TICKS) % 2 == 0
	}
}

#[derive(Debug, Clone, Default)]
pub struct Typewriter {
	style: Style,
	cursor_style: Style,
	direction: TextDirection,
}

impl Typewriter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn cursor_style(mut self, style: Style) -> Self {
		self.cursor_style = style;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}
}

impl StatefulWidget for Typewriter {
	type State = TypewriterState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let mut spans = vec![Span::styled(state.visible_text().to_string(), self.style)];
		if state.cursor_visible() {
			spans.push(Span::styled(CURSOR_GLYPH, self.cursor_style));
		}

		let alignment = if self.direction.is_rtl() {
			Alignment::Right
		} else {
			Alignment::Left
		};

		let paragraph = Paragraph::new(Line::from(spans))
			.alignment(alignment)
			.wrap(Wrap { trim: false });
		paragraph.render(area, buf);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reveals_one_grapheme_per_tick() {
		let mut state = TypewriterState::new("Créé");
		assert_eq!(state.visible_text(), "");

		state.tick();
		assert_eq!(state.visible_text(), "C");

		state.tick();
		assert_eq!(state.visible_text(), "Cr");

		state.tick();
		assert_eq!(state.visible_text(), "Cré");

		state.tick();
		assert_eq!(state.visible_text(), "Créé");
		assert!(state.is_complete());
	}

	#[test]
	fn test_interval_slows_reveal() {
		let mut state = TypewriterState::new("ab").interval(3);
		state.tick();
		state.tick();
		assert_eq!(state.visible_text(), "");
		state.tick();
		assert_eq!(state.visible_text(), "a");
	}

	#[test]
	fn test_skip_completes_immediately() {
		let mut state = TypewriterState::new("L'IA au service de votre transformation");
		state.tick();
		state.skip();
		assert!(state.is_complete());
		assert_eq!(state.visible_text(), "L'IA au service de votre transformation");
	}

	#[test]
	fn test_cursor_hides_after_hold() {
		let mut state = TypewriterState::new("ab");
		state.tick();
		state.tick();
		assert!(state.is_complete());
		assert_eq!(state.done_ticks, 0);

		for _ in 0..CURSOR_HOLD_TICKS {
			state.tick();
		}
		assert!(!state.cursor_visible());
	}

	#[test]
	fn test_cursor_blinks_while_typing() {
		let mut state = TypewriterState::new("abcdefghijkl");
		// ticks 0..2 -> visible phase, ticks 3..5 -> hidden phase
		assert!(state.cursor_visible());
		state.tick();
		state.tick();
		state.tick();
		assert!(!state.cursor_visible());
		state.tick();
		state.tick();
		state.tick();
		assert!(state.cursor_visible());
	}

	#[test]
	fn test_reset_restarts() {
		let mut state = TypewriterState::new("ab");
		state.skip();
		state.reset("cd");
		assert_eq!(state.visible_text(), "");
		assert!(!state.is_complete());
	}
}
