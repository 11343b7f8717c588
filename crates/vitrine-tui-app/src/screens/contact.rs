// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form: five validated fields plus a submit control, cycled with
//! Tab. Validation runs on submit only; editing a field clears its error.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
	layout::{Constraint, Direction, Layout, Rect},
	text::{Line, Span},
	widgets::Paragraph,
	Frame,
};

use vitrine_contact::{ContactForm, FieldError, FieldId};
use vitrine_tui_component::{Component, RenderContext};
use vitrine_tui_core::{Action, ComponentError, Event, FocusState};
use vitrine_tui_widget_text_input::{TextInput, TextInputState};

use super::text_alignment;

/// Custom action kind emitted after an accepted submission. The payload
/// carries the sender's name.
pub const SUBMITTED_KIND: &str = "contact.submitted";

const SUBMIT_ID: &str = "submit";

fn focus_id(field: FieldId) -> &'static str {
	match field {
		FieldId::Name => "name",
		FieldId::Email => "email",
		FieldId::Company => "company",
		FieldId::Subject => "subject",
		FieldId::Message => "message",
	}
}

pub struct ContactScreen {
	focus: FocusState,
	name: TextInputState,
	email: TextInputState,
	company: TextInputState,
	subject: TextInputState,
	message: TextInputState,
	errors: Vec<FieldError>,
}

impl ContactScreen {
	pub fn new() -> Self {
		Self {
			focus: FocusState::default(),
			name: TextInputState::new(),
			email: TextInputState::new(),
			company: TextInputState::new(),
			subject: TextInputState::new(),
			message: TextInputState::new(),
			errors: Vec::new(),
		}
	}

	pub fn errors(&self) -> &[FieldError] {
		&self.errors
	}

	pub fn field_content(&self, field: FieldId) -> &str {
		self.input(field).content()
	}

	fn input(&self, field: FieldId) -> &TextInputState {
		match field {
			FieldId::Name => &self.name,
			FieldId::Email => &self.email,
			FieldId::Company => &self.company,
			FieldId::Subject => &self.subject,
			FieldId::Message => &self.message,
		}
	}

	fn input_mut(&mut self, field: FieldId) -> &mut TextInputState {
		match field {
			FieldId::Name => &mut self.name,
			FieldId::Email => &mut self.email,
			FieldId::Company => &mut self.company,
			FieldId::Subject => &mut self.subject,
			FieldId::Message => &mut self.message,
		}
	}

	fn focused_field(&self) -> Option<FieldId> {
		FieldId::ALL
			.into_iter()
			.find(|field| self.focus.is_focused(focus_id(*field)))
	}

	fn error_message(&self, field: FieldId, locale: &str) -> Option<String> {
		self.errors
			.iter()
			.find(|error| error.field == field)
			.map(|error| error.error.message(locale))
	}

	fn clear_error(&mut self, field: FieldId) {
		self.errors.retain(|error| error.field != field);
	}

	fn to_form(&self) -> ContactForm {
		let mut form = ContactForm::new();
		for field in FieldId::ALL {
			form.set_field(field, self.input(field).content());
		}
		form
	}

	fn submit(&mut self) -> Vec<Action> {
		let form = self.to_form();
		let errors = form.validate();
		if errors.is_empty() {
			tracing::info!(
				name = %form.field(FieldId::Name),
				email = %form.field(FieldId::Email),
				"contact form submitted"
			);
			let sender = form.field(FieldId::Name).to_string();
			for field in FieldId::ALL {
				self.input_mut(field).clear();
			}
			self.errors.clear();
			self.focus.set_focus(focus_id(FieldId::Name));
			vec![Action::Custom {
				kind: SUBMITTED_KIND.into(),
				payload: sender,
			}]
		} else {
			tracing::debug!(count = errors.len(), "contact form rejected");
			self.focus.set_focus(focus_id(errors[0].field));
			self.errors = errors;
			vec![]
		}
	}
}

impl Default for ContactScreen {
	fn default() -> Self {
		Self::new()
	}
}

impl Component for ContactScreen {
	fn id(&self) -> &str {
		"contact"
	}

	fn init(&mut self) -> Result<(), ComponentError> {
		for field in FieldId::ALL {
			self.focus.register(focus_id(field).to_string());
		}
		self.focus.register(SUBMIT_ID.to_string());
		self.focus.set_focus(focus_id(FieldId::Name));
		Ok(())
	}

	fn handle_event(&mut self, event: &Event) -> Vec<Action> {
		let Event::Key(key) = event else {
			return vec![];
		};

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Tab | KeyCode::Down => {
				self.focus.focus_next();
				vec![]
			}
			KeyCode::BackTab | KeyCode::Up => {
				self.focus.focus_prev();
				vec![]
			}
			KeyCode::Enter => {
				if self.focus.is_focused(SUBMIT_ID) {
					return self.submit();
				}
				match self.focused_field() {
					Some(FieldId::Message) => {
						self.message.insert_char('\n');
						self.clear_error(FieldId::Message);
					}
					Some(_) => self.focus.focus_next(),
					None => {}
				}
				vec![]
			}
			KeyCode::Char('s') if ctrl => self.submit(),
			KeyCode::Char('w') if ctrl => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).delete_prev_word();
					self.clear_error(field);
				}
				vec![]
			}
			KeyCode::Char(c) if !ctrl => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).insert_char(c);
					self.clear_error(field);
				}
				vec![]
			}
			KeyCode::Backspace => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).delete_char();
					self.clear_error(field);
				}
				vec![]
			}
			KeyCode::Delete => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).delete_char_forward();
					self.clear_error(field);
				}
				vec![]
			}
			KeyCode::Left => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).move_cursor_left();
				}
				vec![]
			}
			KeyCode::Right => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).move_cursor_right();
				}
				vec![]
			}
			KeyCode::Home => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).move_cursor_start();
				}
				vec![]
			}
			KeyCode::End => {
				if let Some(field) = self.focused_field() {
					self.input_mut(field).move_cursor_end();
				}
				vec![]
			}
			_ => vec![],
		}
	}

	fn update(&mut self, _action: &Action) -> Vec<Action> {
		vec![]
	}

	fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(2),
				Constraint::Length(4),
				Constraint::Length(4),
				Constraint::Min(7),
				Constraint::Length(1),
			])
			.split(area);

		let title = Paragraph::new(vec![
			Line::styled(ctx.t("contact.form.title"), ctx.theme.text.bold),
			Line::styled(ctx.t("contact.form.description"), ctx.theme.text.dim),
		])
		.alignment(text_alignment(ctx));
		frame.render_widget(title, rows[0]);

		let half = rows[1].width / 2;
		let (name_area, email_area) = ctx.layout().split_horizontal(rows[1], half);
		let (company_area, subject_area) = ctx.layout().split_horizontal(rows[2], half);

		self.render_field(frame, name_area, ctx, FieldId::Name, false);
		self.render_field(frame, email_area, ctx, FieldId::Email, false);
		self.render_field(frame, company_area, ctx, FieldId::Company, false);
		self.render_field(frame, subject_area, ctx, FieldId::Subject, false);
		self.render_field(frame, rows[3], ctx, FieldId::Message, true);

		let submit_focused = self.focus.is_focused(SUBMIT_ID);
		let submit_style = if submit_focused {
			ctx.theme.selection_style()
		} else {
			ctx.theme.accent_text()
		};
		let submit = Paragraph::new(Line::from(vec![
			Span::styled(format!("[ {} ]", ctx.t("contact.form.submit")), submit_style),
			Span::styled("  Ctrl+S", ctx.theme.text.dim),
		]))
		.alignment(text_alignment(ctx));
		frame.render_widget(submit, rows[4]);
	}
}

impl ContactScreen {
	fn render_field(
		&mut self,
		frame: &mut Frame,
		area: Rect,
		ctx: &RenderContext,
		field: FieldId,
		multiline: bool,
	) {
		let error = self.error_message(field, &ctx.locale.locale);
		let focused = self.focus.is_focused(focus_id(field));

		let mut input = TextInput::new()
			.label(ctx.t(field.label_key()))
			.placeholder(ctx.t(field.placeholder_key()))
			.error(error)
			.focused(focused)
			.multiline(multiline)
			.theme(ctx.theme.clone())
			.direction(ctx.direction());

		if field == FieldId::Message {
			let count = self.message.char_count().to_string();
			let max = ContactForm::MESSAGE_MAX.to_string();
			input = input.counter(ctx.t_fmt(
				"contact.form.char_count",
				&[("count", &count), ("max", &max)],
			));
		}

		frame.render_stateful_widget(input, area, self.input_mut(field));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::KeyEvent;
	use vitrine_contact::ValidationError;
	use vitrine_tui_core::LocaleContext;
	use vitrine_tui_testing::TestHarness;
	use vitrine_tui_theme::Theme;

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn ctrl(c: char) -> Event {
		Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
	}

	fn screen() -> ContactScreen {
		let mut screen = ContactScreen::new();
		screen.init().expect("init");
		screen
	}

	fn type_str(screen: &mut ContactScreen, text: &str) {
		for c in text.chars() {
			screen.handle_event(&key(KeyCode::Char(c)));
		}
	}

	fn fill_valid_except_message(screen: &mut ContactScreen, message: &str) {
		type_str(screen, "Amina Benali");
		screen.handle_event(&key(KeyCode::Tab));
		type_str(screen, "amina@aiunivers.ai");
		screen.handle_event(&key(KeyCode::Tab));
		// Company stays empty: optional.
		screen.handle_event(&key(KeyCode::Tab));
		type_str(screen, "Demande de démonstration");
		screen.handle_event(&key(KeyCode::Tab));
		type_str(screen, message);
	}

	#[test]
	fn test_tab_cycles_through_all_slots() {
		let mut screen = screen();
		for expected in ["email", "company", "subject", "message", "submit", "name"] {
			screen.handle_event(&key(KeyCode::Tab));
			assert!(screen.focus.is_focused(expected), "expected {expected}");
		}
	}

	#[test]
	fn test_typing_lands_in_the_focused_field() {
		let mut screen = screen();
		type_str(&mut screen, "Sami");
		screen.handle_event(&key(KeyCode::Tab));
		type_str(&mut screen, "sami@example.com");

		assert_eq!(screen.field_content(FieldId::Name), "Sami");
		assert_eq!(screen.field_content(FieldId::Email), "sami@example.com");
	}

	#[test]
	fn test_enter_advances_except_in_message() {
		let mut screen = screen();
		screen.handle_event(&key(KeyCode::Enter));
		assert!(screen.focus.is_focused("email"));

		screen.focus.set_focus("message");
		type_str(&mut screen, "line one");
		screen.handle_event(&key(KeyCode::Enter));
		type_str(&mut screen, "line two");
		assert_eq!(screen.field_content(FieldId::Message), "line one\nline two");
	}

	#[test]
	fn test_submit_with_empty_form_collects_errors() {
		let mut screen = screen();
		screen.focus.set_focus(SUBMIT_ID);
		let actions = screen.handle_event(&key(KeyCode::Enter));

		assert!(actions.is_empty());
		// Name, email, subject and message fail; company is optional.
		assert_eq!(screen.errors().len(), 4);
		assert!(screen.focus.is_focused("name"));
	}

	#[test]
	fn test_editing_a_field_clears_only_its_error() {
		let mut screen = screen();
		screen.focus.set_focus(SUBMIT_ID);
		screen.handle_event(&key(KeyCode::Enter));
		let before = screen.errors().len();

		// Focus moved to the first failing field; typing clears its error.
		type_str(&mut screen, "A");
		assert_eq!(screen.errors().len(), before - 1);
		assert!(!screen.errors().iter().any(|e| e.field == FieldId::Name));
	}

	#[test]
	fn test_message_just_below_minimum_is_rejected() {
		let mut screen = screen();
		fill_valid_except_message(&mut screen, &"x".repeat(19));
		let actions = screen.handle_event(&ctrl('s'));

		assert!(actions.is_empty());
		assert_eq!(screen.errors().len(), 1);
		assert_eq!(screen.errors()[0].field, FieldId::Message);
		assert_eq!(
			screen.errors()[0].error,
			ValidationError::TooShort {
				min: ContactForm::MESSAGE_MIN
			}
		);
		assert!(screen.focus.is_focused("message"));
	}

	#[test]
	fn test_message_at_minimum_submits_and_resets() {
		let mut screen = screen();
		fill_valid_except_message(&mut screen, &"x".repeat(20));
		let actions = screen.handle_event(&ctrl('s'));

		assert_eq!(actions.len(), 1);
		match &actions[0] {
			Action::Custom { kind, payload } => {
				assert_eq!(kind, SUBMITTED_KIND);
				assert_eq!(payload, "Amina Benali");
			}
			other => panic!("expected submission action, got {other:?}"),
		}
		for field in FieldId::ALL {
			assert_eq!(screen.field_content(field), "");
		}
		assert!(screen.errors().is_empty());
		assert!(screen.focus.is_focused("name"));
	}

	#[test]
	fn test_ctrl_s_submits_from_any_slot() {
		let mut screen = screen();
		fill_valid_except_message(&mut screen, &"x".repeat(25));
		screen.handle_event(&key(KeyCode::BackTab));
		let actions = screen.handle_event(&ctrl('s'));
		assert_eq!(actions.len(), 1);
	}

	#[test]
	fn test_render_shows_labels_errors_and_counter() {
		let mut screen = screen();
		screen.focus.set_focus(SUBMIT_ID);
		screen.handle_event(&key(KeyCode::Enter));

		let locale = LocaleContext::new("en");
		let focus = FocusState::default();
		let theme = Theme::dark();
		let mut harness = TestHarness::new(100, 30);
		harness.render(|frame, area, _theme| {
			let ctx = RenderContext::new(&theme, &focus, &locale);
			screen.render(frame, area, &ctx);
		});

		harness.assert_contains("Send us a message");
		harness.assert_contains("Full Name *");
		harness.assert_contains("0/1000");
		harness.assert_contains("at least 2 characters");
		harness.assert_contains("Send Message");
	}
}
