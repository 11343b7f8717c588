// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use ratatui::{layout::Rect, widgets::Widget, Frame};
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_header::Header;

struct BrandOnly;

impl StoryComponent for BrandOnly {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, _locale: &LocaleContext) {
		let header = Header::new("AIUNIVERS").brand_style(theme.accent_text());
		header.render(area, frame.buffer_mut());
	}
}

struct FullHeader;

impl StoryComponent for FullHeader {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let header = Header::new("AIUNIVERS")
			.nav_item(locale.t("nav.home"), true)
			.nav_item(locale.t("nav.sectors"), false)
			.nav_item(locale.t("nav.contact"), false)
			.indicator(format!("[{}]", locale.locale.to_uppercase()))
			.indicator(if theme.name == "dark" { "◐" } else { "◑" })
			.style(theme.text.normal)
			.brand_style(theme.accent_text())
			.active_style(theme.accent_text())
			.direction(locale.direction);
		header.render(area, frame.buffer_mut());
	}
}

pub fn header_story() -> Story {
	Story::new("Header", "Brand and navigation bar")
		.variant("Brand Only", BrandOnly)
		.variant("With Navigation", FullHeader)
}
