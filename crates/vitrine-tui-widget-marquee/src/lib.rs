// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Endless horizontal scroller, used on the home screen for the partner and
//! technology strips. The item list is joined with a separator into one
//! cycle; each tick shifts the visible window by one column, wrapping
//! seamlessly.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::StatefulWidget};
use unicode_segmentation::UnicodeSegmentation;
use vitrine_tui_core::TextDirection;

#[derive(Clone, Debug)]
pub struct MarqueeState {
	offset: usize,
	ticks: u32,
	interval: u32,
}

impl Default for MarqueeState {
	fn default() -> Self {
		Self {
			offset: 0,
			ticks: 0,
			interval: 1,
		}
	}
}

impl MarqueeState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Scroll one column every `interval` ticks instead of every tick.
	pub fn with_interval(interval: u32) -> Self {
		Self {
			offset: 0,
			ticks: 0,
			interval: interval.max(1),
		}
	}

	pub fn tick(&mut self) {
		self.ticks = self.ticks.wrapping_add(1);
		if self.ticks % self.interval == 0 {
			self.offset = self.offset.wrapping_add(1);
		}
	}

	pub fn offset(&self) -> usize {
		self.offset
	}
}

#[derive(Clone, Debug, Default)]
pub struct Marquee {
	items: Vec<String>,
	separator: String,
	style: Style,
	direction: TextDirection,
}

impl Marquee {
	pub fn new(items: Vec<String>) -> Self {
		Self {
			items,
			separator: "  •  ".to_string(),
			style: Style::default(),
			direction: TextDirection::default(),
		}
	}

	pub fn separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	/// The full cycle that scrolls through the window, separator-terminated
	/// so the wrap point reads like every other item boundary.
	fn cycle(&self) -> String {
		let mut cycle = String::new();
		for item in &self.items {
			cycle.push_str(item);
			cycle.push_str(&self.separator);
		}
		cycle
	}
}

impl StatefulWidget for Marquee {
	type State = MarqueeState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 || self.items.is_empty() {
			return;
		}

		let cycle = self.cycle();
		let glyphs: Vec<&str> = cycle.graphemes(true).collect();
		if glyphs.is_empty() {
			return;
		}

		let width = area.width as usize;
		let shift = state.offset % glyphs.len();
		// RTL strips enter from the left edge, so the window walks backwards.
		let start = if self.direction.is_rtl() {
			(glyphs.len() - shift) % glyphs.len()
		} else {
			shift
		};

		let window: String = glyphs
			.iter()
			.cycle()
			.skip(start)
			.take(width)
			.copied()
			.collect();

		buf.set_string(area.x, area.y, &window, self.style);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_state_advances_every_tick() {
		let mut state = MarqueeState::new();
		state.tick();
		state.tick();
		state.tick();
		assert_eq!(state.offset(), 3);
	}

	#[test]
	fn test_state_interval_throttles() {
		let mut state = MarqueeState::with_interval(3);
		for _ in 0..9 {
			state.tick();
		}
		assert_eq!(state.offset(), 3);
	}

	#[test]
	fn test_cycle_is_separator_terminated() {
		let marquee = Marquee::new(vec!["Ericsson".into(), "Huawei".into()]).separator(" / ");
		assert_eq!(marquee.cycle(), "Ericsson / Huawei / ");
	}
}
