// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Landing screen: typewriter hero, sector cards, partner and technology
//! tickers.

use crossterm::event::KeyCode;
use ratatui::{
	layout::{Constraint, Direction, Layout, Rect},
	text::Line,
	widgets::Paragraph,
	Frame,
};

use vitrine_content::{sectors, Sector, PARTNERS, TECHNOLOGIES};
use vitrine_tui_component::{Component, RenderContext};
use vitrine_tui_core::{Action, Event, LocaleContext};
use vitrine_tui_widget_card_list::{Card, CardList, CardListState};
use vitrine_tui_widget_marquee::{Marquee, MarqueeState};
use vitrine_tui_widget_typewriter::{Typewriter, TypewriterState};

use super::text_alignment;

pub struct HomeScreen {
	typewriter: TypewriterState,
	list_state: CardListState,
	partner_ticker: MarqueeState,
	technology_ticker: MarqueeState,
}

impl HomeScreen {
	pub fn new(locale: &LocaleContext) -> Self {
		Self {
			typewriter: TypewriterState::new(locale.t("home.subtitle")),
			list_state: CardListState::default(),
			partner_ticker: MarqueeState::with_interval(3),
			technology_ticker: MarqueeState::with_interval(2),
		}
	}

	/// Entry point for slug redirects: the hero reveal is skipped so the
	/// sector listing is immediately readable.
	pub fn at_sectors(locale: &LocaleContext) -> Self {
		let mut screen = Self::new(locale);
		screen.typewriter.skip();
		screen
	}

	pub fn is_revealing(&self) -> bool {
		!self.typewriter.is_complete()
	}

	fn selected_sector(&self) -> &'static Sector {
		let all = sectors();
		&all[self.list_state.selected().min(all.len() - 1)]
	}
}

impl Component for HomeScreen {
	fn id(&self) -> &str {
		"home"
	}

	fn handle_event(&mut self, event: &Event) -> Vec<Action> {
		match event {
			Event::Key(key) => match key.code {
				KeyCode::Up => {
					self.list_state.select_prev();
					vec![]
				}
				KeyCode::Down => {
					self.list_state.select_next(sectors().len());
					vec![]
				}
				KeyCode::Enter => {
					if self.is_revealing() {
						self.typewriter.skip();
						vec![]
					} else {
						let slug = &self.selected_sector().slug;
						vec![Action::navigate(format!("/secteurs/{slug}"))]
					}
				}
				_ => vec![],
			},
			Event::Tick => {
				self.typewriter.tick();
				self.partner_ticker.tick();
				self.technology_ticker.tick();
				vec![]
			}
		}
	}

	fn update(&mut self, action: &Action) -> Vec<Action> {
		// A language change replays the hero reveal in the new language.
		if let Action::SetLanguage(code) = action {
			self.typewriter.reset(vitrine_i18n::t(code, "home.subtitle"));
		}
		vec![]
	}

	fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(3),
				Constraint::Length(2),
				Constraint::Min(3),
				Constraint::Length(2),
			])
			.split(area);

		self.render_hero(frame, rows[0], ctx);
		self.render_heading(frame, rows[1], ctx);
		self.render_sector_cards(frame, rows[2], ctx);
		self.render_tickers(frame, rows[3], ctx);
	}
}

impl HomeScreen {
	fn render_hero(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
		let hero_rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
			])
			.split(area);

		let brand = Paragraph::new("✦ AIUNIVERS")
			.style(ctx.theme.accent_text())
			.alignment(text_alignment(ctx));
		frame.render_widget(brand, hero_rows[0]);

		let subtitle = Typewriter::new()
			.style(ctx.theme.text.normal)
			.cursor_style(ctx.theme.accent_text())
			.direction(ctx.direction());
		frame.render_stateful_widget(subtitle, hero_rows[1], &mut self.typewriter);

		if !self.is_revealing() {
			let hint = Paragraph::new(format!("↓ {}", ctx.t("home.discover")))
				.style(ctx.theme.text.dim)
				.alignment(text_alignment(ctx));
			frame.render_widget(hint, hero_rows[2]);
		}
	}

	fn render_heading(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
		let heading = Paragraph::new(vec![
			Line::styled(ctx.t("home.sectors"), ctx.theme.text.bold),
			Line::styled(ctx.t("home.sectors.description"), ctx.theme.text.dim),
		])
		.alignment(text_alignment(ctx));
		frame.render_widget(heading, area);
	}

	fn render_sector_cards(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
		let cards: Vec<Card> = sectors()
			.iter()
			.map(|sector| {
				Card::new(sector.slug.clone(), sector.title.clone())
					.description(sector.description.clone())
					.badge(sector.badge.clone())
					.icon(sector.icon)
			})
			.collect();

		self.list_state.clamp_to_total(cards.len());
		let list = CardList::new(cards)
			.style(ctx.theme.text.normal)
			.accent_style(ctx.theme.accent_text())
			.badge_style(ctx.theme.badge_style())
			.direction(ctx.direction());
		frame.render_stateful_widget(list, area, &mut self.list_state);
	}

	fn render_tickers(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
		if area.height == 0 {
			return;
		}

		let partners_row = Rect::new(area.x, area.y, area.width, 1);
		let label = format!("{} ", ctx.t("home.partners"));
		let label_width = (label.chars().count() as u16).min(partners_row.width);
		let (label_area, ticker_area) = ctx.layout().split_horizontal(partners_row, label_width);
		let label_widget = Paragraph::new(label)
			.style(ctx.theme.text.dim)
			.alignment(text_alignment(ctx));
		frame.render_widget(label_widget, label_area);

		let partners = Marquee::new(PARTNERS.iter().map(|name| name.to_string()).collect())
			.separator(" ✦ ")
			.style(ctx.theme.text.normal)
			.direction(ctx.direction());
		frame.render_stateful_widget(partners, ticker_area, &mut self.partner_ticker);

		if area.height < 2 {
			return;
		}
		let tech_row = Rect::new(area.x, area.y + 1, area.width, 1);
		let technologies = Marquee::new(TECHNOLOGIES.iter().map(|name| name.to_string()).collect())
			.separator(" · ")
			.style(ctx.theme.text.dim)
			.direction(ctx.direction());
		frame.render_stateful_widget(technologies, tech_row, &mut self.technology_ticker);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::{KeyEvent, KeyModifiers};
	use vitrine_tui_core::FocusState;
	use vitrine_tui_testing::TestHarness;
	use vitrine_tui_theme::Theme;

	fn key(code: KeyCode) -> Event {
		Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn english() -> LocaleContext {
		LocaleContext::new("en")
	}

	#[test]
	fn test_enter_skips_reveal_then_opens_sector() {
		let mut screen = HomeScreen::new(&english());
		assert!(screen.is_revealing());

		let actions = screen.handle_event(&key(KeyCode::Enter));
		assert!(actions.is_empty());
		assert!(!screen.is_revealing());

		let actions = screen.handle_event(&key(KeyCode::Enter));
		assert_eq!(
			actions,
			vec![Action::navigate("/secteurs/intelligence-artificielle")]
		);
	}

	#[test]
	fn test_arrows_move_the_selection() {
		let mut screen = HomeScreen::new(&english());
		screen.handle_event(&key(KeyCode::Enter));

		screen.handle_event(&key(KeyCode::Down));
		screen.handle_event(&key(KeyCode::Down));
		screen.handle_event(&key(KeyCode::Up));
		let actions = screen.handle_event(&key(KeyCode::Enter));
		assert_eq!(actions, vec![Action::navigate("/secteurs/telecommunications")]);
	}

	#[test]
	fn test_selection_stops_at_the_last_sector() {
		let mut screen = HomeScreen::new(&english());
		for _ in 0..20 {
			screen.handle_event(&key(KeyCode::Down));
		}
		screen.handle_event(&key(KeyCode::Enter));
		let actions = screen.handle_event(&key(KeyCode::Enter));
		let last = &sectors()[sectors().len() - 1];
		assert_eq!(
			actions,
			vec![Action::navigate(format!("/secteurs/{}", last.slug))]
		);
	}

	#[test]
	fn test_reveal_completes_after_enough_ticks() {
		let mut screen = HomeScreen::new(&english());
		for _ in 0..120 {
			screen.handle_event(&Event::Tick);
		}
		assert!(!screen.is_revealing());
	}

	#[test]
	fn test_language_change_replays_the_reveal() {
		let mut screen = HomeScreen::new(&english());
		screen.handle_event(&key(KeyCode::Enter));
		assert!(!screen.is_revealing());

		screen.update(&Action::SetLanguage("fr"));
		assert!(screen.is_revealing());
	}

	#[test]
	fn test_redirect_entry_skips_the_reveal() {
		let screen = HomeScreen::at_sectors(&english());
		assert!(!screen.is_revealing());
	}

	#[test]
	fn test_render_shows_brand_and_sectors() {
		let mut screen = HomeScreen::at_sectors(&english());
		let locale = english();
		let focus = FocusState::default();
		let theme = Theme::dark();

		let mut harness = TestHarness::new(80, 24);
		harness.render(|frame, area, _theme| {
			let ctx = RenderContext::new(&theme, &focus, &locale);
			screen.render(frame, area, &ctx);
		});

		harness.assert_contains("AIUNIVERS");
		harness.assert_contains("Sectors of Activity");
		harness.assert_contains("Intelligence Artificielle");
	}
}
