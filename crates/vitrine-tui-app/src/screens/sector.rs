// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sector detail: badge, prose, and the card list of its solutions.

use crossterm::event::KeyCode;
use ratatui::{
	layout::{Constraint, Direction, Layout, Rect},
	text::{Line, Span},
	widgets::{Paragraph, Wrap},
	Frame,
};

use vitrine_content::{Sector, Solution};
use vitrine_tui_component::{Component, RenderContext};
use vitrine_tui_core::{Action, Event};
use vitrine_tui_widget_card_list::{Card, CardList, CardListState};

use super::text_alignment;

const PAGE: usize = 3;

pub struct SectorScreen {
	sector: &'static Sector,
	list_state: CardListState,
}

impl SectorScreen {
	pub fn new(sector: &'static Sector) -> Self {
		Self {
			sector,
			list_state: CardListState::default(),
		}
	}

	pub fn sector(&self) -> &'static Sector {
		self.sector
	}

	fn selected_solution(&self) -> &'static Solution {
		let solutions = &self.sector.solutions;
		&solutions[self.list_state.selected().min(solutions.len() - 1)]
	}
}

impl Component for SectorScreen {
	fn id(&self) -> &str {
		"sector"
	}

	fn handle_event(&mut self, event: &Event) -> Vec<Action> {
		let Event::Key(key) = event else {
			return vec![];
		};
		match key.code {
			KeyCode::Up => {
				self.list_state.select_prev();
				vec![]
			}
			KeyCode::Down => {
				self.list_state.select_next(self.sector.solutions.len());
				vec![]
			}
			KeyCode::PageUp => {
				self.list_state.page_up(PAGE);
				vec![]
			}
			KeyCode::PageDown => {
				self.list_state.page_down(PAGE, self.sector.solutions.len());
				vec![]
			}
			KeyCode::Enter => {
				let solution = self.selected_solution();
				vec![Action::navigate(format!(
					"/secteurs/{}/solutions/{}",
					self.sector.slug, solution.slug
				))]
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
				Constraint::Length(5),
				Constraint::Length(1),
				Constraint::Min(3),
			])
			.split(area);

		let title = Line::from(vec![
			Span::styled(format!(" {} ", self.sector.badge), ctx.theme.badge_style()),
			Span::raw("  "),
			Span::styled(self.sector.title.clone(), ctx.theme.accent_text()),
		]);
		let title_widget = Paragraph::new(title).alignment(text_alignment(ctx));
		frame.render_widget(title_widget, rows[0]);

		let prose = Paragraph::new(self.sector.full_description.clone())
			.style(ctx.theme.text.normal)
			.wrap(Wrap { trim: true })
			.alignment(text_alignment(ctx));
		frame.render_widget(prose, rows[1]);

		let heading = Paragraph::new(ctx.t("sectors.solutions"))
			.style(ctx.theme.text.bold)
			.alignment(text_alignment(ctx));
		frame.render_widget(heading, rows[2]);

		let cards: Vec<Card> = self
			.sector
			.solutions
			.iter()
			.map(|solution| {
				Card::new(solution.slug.clone(), solution.title.clone())
					.description(solution.description.clone())
					.icon(solution.icon)
			})
			.collect();
		self.list_state.clamp_to_total(cards.len());
		let list = CardList::new(cards)
			.style(ctx.theme.text.normal)
			.accent_style(ctx.theme.accent_text())
			.badge_style(ctx.theme.badge_style())
			.direction(ctx.direction());
		frame.render_stateful_widget(list, rows[3], &mut self.list_state);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::{KeyEvent, KeyModifiers};
	use vitrine_content::find_sector_by_slug;
	use vitrine_tui_core::{FocusState, LocaleContext};
	use vitrine_tui_testing::TestHarness;
	use vitrine_tui_theme::Theme;

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn cyber() -> &'static Sector {
		find_sector_by_slug("cybersecurite").expect("catalog sector")
	}

	#[test]
	fn test_enter_opens_the_selected_solution() {
		let mut screen = SectorScreen::new(cyber());
		screen.handle_event(&key(KeyCode::Down));
		let actions = screen.handle_event(&key(KeyCode::Enter));
		let expected = format!(
			"/secteurs/cybersecurite/solutions/{}",
			cyber().solutions[1].slug
		);
		assert_eq!(actions, vec![Action::navigate(expected)]);
	}

	#[test]
	fn test_selection_clamps_to_solution_count() {
		let mut screen = SectorScreen::new(cyber());
		for _ in 0..10 {
			screen.handle_event(&key(KeyCode::Down));
		}
		let actions = screen.handle_event(&key(KeyCode::Enter));
		let last = cyber().solutions.last().expect("solutions");
		assert_eq!(
			actions,
			vec![Action::navigate(format!(
				"/secteurs/cybersecurite/solutions/{}",
				last.slug
			))]
		);
	}

	#[test]
	fn test_render_shows_badge_title_and_solutions() {
		let mut screen = SectorScreen::new(cyber());
		let locale = LocaleContext::new("en");
		let focus = FocusState::default();
		let theme = Theme::dark();

		let mut harness = TestHarness::new(80, 24);
		harness.render(|frame, area, _theme| {
			let ctx = RenderContext::new(&theme, &focus, &locale);
			screen.render(frame, area, &ctx);
		});

		harness.assert_contains("Cybersécurité");
		harness.assert_contains(&cyber().badge);
		harness.assert_contains("Audit & Pentesting");
	}
}
