// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::borrow::Cow;

use crossterm::event::KeyEvent;
use thiserror::Error;

pub use vitrine_i18n::{
	available_locales, is_rtl, resolve_locale, t, t_fmt, Direction, LocaleInfo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
	#[default]
	Ltr,
	Rtl,
}

impl From<vitrine_i18n::Direction> for TextDirection {
	fn from(dir: vitrine_i18n::Direction) -> Self {
		match dir {
			vitrine_i18n::Direction::Ltr => TextDirection::Ltr,
			vitrine_i18n::Direction::Rtl => TextDirection::Rtl,
		}
	}
}

impl TextDirection {
	pub fn from_locale(locale: &str) -> Self {
		if vitrine_i18n::is_rtl(locale) {
			TextDirection::Rtl
		} else {
			TextDirection::Ltr
		}
	}

	pub fn is_rtl(&self) -> bool {
		matches!(self, TextDirection::Rtl)
	}

	pub fn is_ltr(&self) -> bool {
		matches!(self, TextDirection::Ltr)
	}
}

#[derive(Debug, Clone)]
pub struct LocaleContext {
	pub locale: String,
	pub direction: TextDirection,
}

impl Default for LocaleContext {
	fn default() -> Self {
		Self {
			locale: "en".to_string(),
			direction: TextDirection::Ltr,
		}
	}
}

impl LocaleContext {
	pub fn new(locale: impl Into<String>) -> Self {
		let locale = locale.into();
		let direction = TextDirection::from_locale(&locale);
		Self { locale, direction }
	}

	pub fn is_rtl(&self) -> bool {
		self.direction.is_rtl()
	}

	/// Translate a key using this context's locale
	pub fn t(&self, key: &str) -> String {
		vitrine_i18n::t(&self.locale, key)
	}

	/// Translate a key with format variables
	pub fn t_fmt(&self, key: &str, vars: &[(&str, &str)]) -> String {
		vitrine_i18n::t_fmt(&self.locale, key, vars)
	}
}

/// Type alias for focus identifiers.
pub type FocusId = String;

/// Actions that components can emit in response to events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Request application shutdown.
	Quit,
	/// Cancel the current operation or go back one screen.
	Cancel,
	/// Navigate to a route path such as `/secteurs/cybersecurite`.
	Navigate(Cow<'static, str>),
	/// Switch the interface language.
	SetLanguage(&'static str),
	/// Toggle between the dark and light theme.
	ToggleTheme,
	/// Custom action with a kind identifier and payload.
	Custom {
		kind: Cow<'static, str>,
		payload: String,
	},
}

impl Action {
	/// Navigation action from any route representation.
	pub fn navigate(route: impl Into<Cow<'static, str>>) -> Self {
		Action::Navigate(route.into())
	}
}

/// Events delivered to components by the application loop.
#[derive(Debug, Clone)]
pub enum Event {
	/// Keyboard input.
	Key(KeyEvent),
	/// Periodic tick driving animations and timers.
	Tick,
}

/// Outcome of event handling, indicating whether the event was consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome<A> {
	/// Event was not handled; propagate to other handlers.
	Ignored,
	/// Event was handled, optionally producing an action.
	Handled(Option<A>),
}

/// Tracks which component currently has focus.
#[derive(Debug, Default, Clone)]
pub struct FocusState {
	pub focused_id: Option<FocusId>,
	pub focusable_ids: Vec<FocusId>,
}

impl FocusState {
	/// Register a new focusable component.
	pub fn register(&mut self, id: FocusId) {
		if !self.focusable_ids.contains(&id) {
			self.focusable_ids.push(id);
		}
	}

	/// Unregister a focusable component.
	pub fn unregister(&mut self, id: &str) {
		self.focusable_ids.retain(|i| i != id);
		if self.focused_id.as_deref() == Some(id) {
			self.focused_id = None;
		}
	}

	/// Move focus to the next component.
	pub fn focus_next(&mut self) {
		if self.focusable_ids.is_empty() {
			return;
		}
		let next_idx = match self.focused_index() {
			Some(idx) => (idx + 1) % self.focusable_ids.len(),
			None => 0,
		};
		self.focused_id = Some(self.focusable_ids[next_idx].clone());
	}

	/// Move focus to the previous component.
	pub fn focus_prev(&mut self) {
		if self.focusable_ids.is_empty() {
			return;
		}
		let prev_idx = match self.focused_index() {
			Some(idx) => {
				if idx == 0 {
					self.focusable_ids.len() - 1
				} else {
					idx - 1
				}
			}
			None => self.focusable_ids.len() - 1,
		};
		self.focused_id = Some(self.focusable_ids[prev_idx].clone());
	}

	/// Set focus to a specific component by id.
	pub fn set_focus(&mut self, id: &str) {
		if self.focusable_ids.iter().any(|i| i == id) {
			self.focused_id = Some(id.to_string());
		}
	}

	/// Check if a component has focus.
	pub fn is_focused(&self, id: &str) -> bool {
		self.focused_id.as_deref() == Some(id)
	}

	fn focused_index(&self) -> Option<usize> {
		self.focused_id
			.as_ref()
			.and_then(|id| self.focusable_ids.iter().position(|i| i == id))
	}
}

/// Trait for mapping key events to actions based on focus state.
pub trait Keymap<A> {
	fn key_to_action(&self, key: &KeyEvent, focus: &FocusState) -> Option<A>;
}

#[derive(Debug, Error)]
pub enum ComponentError {
	#[error("initialization failed: {0}")]
	Init(String),
	#[error("render failed: {0}")]
	Render(String),
}
