// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::layout::Rect;
use ratatui::Frame;

use vitrine_tui_core::{Action, ComponentError, Event, FocusState};
use vitrine_tui_theme::Theme;

pub use vitrine_tui_core::{LocaleContext, TextDirection};
pub use vitrine_tui_theme::LayoutDirection;

pub struct RenderContext<'a> {
	pub theme: &'a Theme,
	pub focus: &'a FocusState,
	pub locale: &'a LocaleContext,
}

impl<'a> RenderContext<'a> {
	pub fn new(theme: &'a Theme, focus: &'a FocusState, locale: &'a LocaleContext) -> Self {
		Self {
			theme,
			focus,
			locale,
		}
	}

	pub fn direction(&self) -> TextDirection {
		self.locale.direction
	}

	pub fn layout(&self) -> LayoutDirection {
		LayoutDirection::new(self.locale.direction)
	}

	pub fn is_rtl(&self) -> bool {
		self.locale.is_rtl()
	}

	pub fn t(&self, key: &str) -> String {
		self.locale.t(key)
	}

	pub fn t_fmt(&self, key: &str, vars: &[(&str, &str)]) -> String {
		self.locale.t_fmt(key, vars)
	}
}

/// Core trait for TUI screens and composite views.
///
/// Components are the building blocks of the interface. They handle events,
/// produce actions, and render themselves to the terminal.
pub trait Component: Send + Sync {
	fn id(&self) -> &str;

	/// Called once when the component is attached to the UI tree ("on_mount").
	/// Use this for one-time initialization that requires the component to be fully constructed.
	fn init(&mut self) -> Result<(), ComponentError> {
		Ok(())
	}

	fn handle_event(&mut self, event: &Event) -> Vec<Action>;

	fn update(&mut self, action: &Action) -> Vec<Action>;

	/// Takes `&mut self` so implementors can hand widget state to
	/// `StatefulWidget::render` without interior mutability.
	fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext);

	fn focusable(&self) -> bool {
		true
	}
}
