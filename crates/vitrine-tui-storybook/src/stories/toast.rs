// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::StatefulWidget, Frame};
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_toast::{Toast, ToastAnchor, ToastStack, ToastState, ToastVariant};

struct ToastDemo {
	variant: ToastVariant,
	anchor: ToastAnchor,
	state: ToastState,
	/// Set by Enter, consumed on the next render where the locale is known.
	pending: bool,
}

impl ToastDemo {
	fn new(variant: ToastVariant, anchor: ToastAnchor) -> Self {
		Self {
			variant,
			anchor,
			state: ToastState::new(),
			pending: false,
		}
	}

	fn push(&mut self, locale: &LocaleContext) {
		let toast = match self.variant {
			ToastVariant::Success => Toast::success(locale.t("contact.form.success"))
				.description(locale.t("contact.form.success.description")),
			ToastVariant::Error => Toast::error(locale.t("contact.error.too_short")),
			ToastVariant::Info => Toast::info(locale.t("contact.connected")),
		};
		self.state.push(toast);
	}
}

impl StoryComponent for ToastDemo {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		if self.state.is_empty() || self.pending {
			self.push(locale);
			self.pending = false;
		}
		let stack = ToastStack::new()
			.anchor(self.anchor)
			.theme(theme.clone())
			.direction(locale.direction);
		stack.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		if key.code == KeyCode::Enter {
			self.pending = true;
		}
	}

	fn tick(&mut self) {
		self.state.tick();
	}
}

pub fn toast_story() -> Story {
	Story::new("Toast", "Transient notifications that fade after a few seconds")
		.variant(
			"Success",
			ToastDemo::new(ToastVariant::Success, ToastAnchor::BottomRight),
		)
		.variant(
			"Error",
			ToastDemo::new(ToastVariant::Error, ToastAnchor::BottomRight),
		)
		.variant(
			"Info top-left",
			ToastDemo::new(ToastVariant::Info, ToastAnchor::TopLeft),
		)
}
