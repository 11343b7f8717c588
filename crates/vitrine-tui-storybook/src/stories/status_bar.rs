// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use ratatui::{layout::Rect, widgets::Widget, Frame};
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_status_bar::StatusBar;

struct ItemsOnly;

impl StoryComponent for ItemsOnly {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let bar = StatusBar::new()
			.item("Lang", locale.locale.to_uppercase())
			.item("Theme", theme.name.clone())
			.style(theme.text.dim);
		bar.render(area, frame.buffer_mut());
	}
}

struct WithShortcuts;

impl StoryComponent for WithShortcuts {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let bar = StatusBar::new()
			.item("Lang", locale.locale.to_uppercase())
			.shortcut("q", locale.t("status.quit"))
			.shortcut("t", locale.t("status.theme"))
			.shortcut("l", locale.t("status.language"))
			.style(theme.text.dim)
			.key_style(theme.accent_text())
			.direction(locale.direction);
		bar.render(area, frame.buffer_mut());
	}
}

pub fn status_bar_story() -> Story {
	Story::new("StatusBar", "Bottom bar with items and keyboard shortcuts")
		.variant("Items", ItemsOnly)
		.variant("With Shortcuts", WithShortcuts)
}
