// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::StatefulWidget, Frame};
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_text_input::{TextInput, TextInputState};

fn apply_key(state: &mut TextInputState, key: KeyEvent) {
	match key.code {
		KeyCode::Char(c) => state.insert_char(c),
		KeyCode::Backspace => state.delete_char(),
		KeyCode::Delete => state.delete_char_forward(),
		KeyCode::Left => state.move_cursor_left(),
		KeyCode::Right => state.move_cursor_right(),
		KeyCode::Home => state.move_cursor_start(),
		KeyCode::End => state.move_cursor_end(),
		_ => {}
	}
}

struct EmptyInput {
	state: TextInputState,
}

impl StoryComponent for EmptyInput {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let input = TextInput::new()
			.label(locale.t("contact.form.name"))
			.placeholder(locale.t("contact.form.name.placeholder"))
			.focused(true)
			.theme(theme.clone())
			.direction(locale.direction);
		input.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		apply_key(&mut self.state, key);
	}
}

struct FilledInput {
	state: TextInputState,
}

impl FilledInput {
	fn new() -> Self {
		let mut state = TextInputState::new();
		state.set_content("contact@aiunivers.ai");
		Self { state }
	}
}

impl StoryComponent for FilledInput {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let input = TextInput::new()
			.label(locale.t("contact.form.email"))
			.focused(true)
			.theme(theme.clone())
			.direction(locale.direction);
		input.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		apply_key(&mut self.state, key);
	}
}

struct ErrorInput {
	state: TextInputState,
}

impl ErrorInput {
	fn new() -> Self {
		let mut state = TextInputState::new();
		state.set_content("not-an-email");
		Self { state }
	}
}

impl StoryComponent for ErrorInput {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let input = TextInput::new()
			.label(locale.t("contact.form.email"))
			.error(Some(locale.t("contact.error.email")))
			.focused(true)
			.theme(theme.clone())
			.direction(locale.direction);
		input.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		apply_key(&mut self.state, key);
	}
}

struct MultilineInput {
	state: TextInputState,
}

impl StoryComponent for MultilineInput {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let count = self.state.char_count().to_string();
		let input = TextInput::new()
			.label(locale.t("contact.form.message"))
			.placeholder(locale.t("contact.form.message.placeholder"))
			.counter(locale.t_fmt("contact.form.char_count", &[("count", &count), ("max", "1000")]))
			.multiline(true)
			.focused(true)
			.theme(theme.clone())
			.direction(locale.direction);
		input.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => self.state.insert_char('\n'),
			_ => apply_key(&mut self.state, key),
		}
	}
}

pub fn text_input_story() -> Story {
	Story::new("TextInput", "Form fields with labels, errors and counters")
		.variant(
			"Empty",
			EmptyInput {
				state: TextInputState::new(),
			},
		)
		.variant("With Content", FilledInput::new())
		.variant("With Error", ErrorInput::new())
		.variant(
			"Multiline",
			MultilineInput {
				state: TextInputState::new(),
			},
		)
}
