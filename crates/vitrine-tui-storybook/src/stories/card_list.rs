// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::StatefulWidget, Frame};
use vitrine_content::sectors;
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_card_list::{Card, CardList, CardListState};

fn sector_cards() -> Vec<Card> {
	sectors()
		.iter()
		.map(|sector| {
			Card::new(sector.slug.clone(), sector.title.clone())
				.description(sector.description.clone())
				.badge(sector.badge.clone())
				.icon(sector.icon)
		})
		.collect()
}

struct SectorCards {
	state: CardListState,
}

impl StoryComponent for SectorCards {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let list = CardList::new(sector_cards())
			.style(theme.text.normal)
			.accent_style(theme.accent_text())
			.badge_style(theme.badge_style())
			.direction(locale.direction);
		list.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		let total = sectors().len();
		match key.code {
			KeyCode::Down => self.state.select_next(total),
			KeyCode::Up => self.state.select_prev(),
			_ => {}
		}
	}
}

struct SolutionCards {
	state: CardListState,
}

impl SolutionCards {
	fn cards() -> Vec<Card> {
		let sector = &sectors()[0];
		sector
			.solutions
			.iter()
			.map(|solution| {
				Card::new(solution.slug.clone(), solution.title.clone())
					.description(solution.description.clone())
					.icon(solution.icon)
			})
			.collect()
	}
}

impl StoryComponent for SolutionCards {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		let list = CardList::new(Self::cards())
			.style(theme.text.normal)
			.accent_style(theme.accent_text())
			.direction(locale.direction);
		list.render(area, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		let total = sectors()[0].solutions.len();
		match key.code {
			KeyCode::Down => self.state.select_next(total),
			KeyCode::Up => self.state.select_prev(),
			_ => {}
		}
	}
}

pub fn card_list_story() -> Story {
	Story::new("CardList", "Selectable sector and solution cards")
		.variant(
			"Sectors",
			SectorCards {
				state: CardListState::default(),
			},
		)
		.variant(
			"Solutions",
			SolutionCards {
				state: CardListState::default(),
			},
		)
}
