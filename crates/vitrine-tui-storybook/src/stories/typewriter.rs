// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::StatefulWidget, Frame};
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_typewriter::{Typewriter, TypewriterState};

struct TypewriterDemo {
	state: TypewriterState,
	interval: u32,
	text: String,
}

impl TypewriterDemo {
	fn new(interval: u32) -> Self {
		Self {
			state: TypewriterState::new("").interval(interval),
			interval,
			text: String::new(),
		}
	}
}

impl StoryComponent for TypewriterDemo {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		// Restart the animation when the locale swaps the tagline out.
		let tagline = locale.t("home.subtitle");
		if tagline != self.text {
			self.state = TypewriterState::new(tagline.clone()).interval(self.interval);
			self.text = tagline;
		}
		let typewriter = Typewriter::new()
			.style(theme.accent_text())
			.cursor_style(theme.accent_text())
			.direction(locale.direction);
		typewriter.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => self.state.skip(),
			KeyCode::Char('r') => self.state.reset(self.text.clone()),
			_ => {}
		}
	}

	fn tick(&mut self) {
		self.state.tick();
	}
}

pub fn typewriter_story() -> Story {
	Story::new("Typewriter", "Hero tagline revealed one grapheme at a time")
		.variant("Tagline", TypewriterDemo::new(1))
		.variant("Slow reveal", TypewriterDemo::new(3))
}
