// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use ratatui::{layout::Rect, widgets::StatefulWidget, Frame};
use vitrine_content::{PARTNERS, TECHNOLOGIES};
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_marquee::{Marquee, MarqueeState};

struct TechnologyTicker {
	state: MarqueeState,
}

impl StoryComponent for TechnologyTicker {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let items = TECHNOLOGIES.iter().map(|t| t.to_string()).collect();
		let marquee = Marquee::new(items)
			.style(theme.text.dim)
			.direction(locale.direction);
		marquee.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn tick(&mut self) {
		self.state.tick();
	}
}

struct PartnerTicker {
	state: MarqueeState,
}

impl StoryComponent for PartnerTicker {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let items = PARTNERS.iter().map(|p| p.to_string()).collect();
		let marquee = Marquee::new(items)
			.separator("   ◆   ")
			.style(theme.accent_text())
			.direction(locale.direction);
		marquee.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn tick(&mut self) {
		self.state.tick();
	}
}

pub fn marquee_story() -> Story {
	Story::new("Marquee", "Scrolling technology and partner tickers")
		.variant(
			"Technologies",
			TechnologyTicker {
				state: MarqueeState::new(),
			},
		)
		.variant(
			"Partners",
			PartnerTicker {
				state: MarqueeState::with_interval(2),
			},
		)
}
