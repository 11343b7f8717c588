// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Story, StoryComponent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::StatefulWidget, Frame};
use vitrine_content::sectors;
use vitrine_i18n::LOCALES;
use vitrine_tui_core::LocaleContext;
use vitrine_tui_theme::Theme;
use vitrine_tui_widget_dropdown::{Dropdown, DropdownItem, DropdownState};

struct LanguageDropdown {
	state: DropdownState,
}

impl StoryComponent for LanguageDropdown {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		if !self.state.is_open() {
			self.state.open();
		}
		let items = LOCALES
			.iter()
			.map(|info| DropdownItem::new(info.native_name).marked(info.code == locale.locale))
			.collect();
		let dropdown = Dropdown::new(items)
			.title(locale.t("status.language"))
			.theme(theme.clone())
			.direction(locale.direction);
		let (width, height) = dropdown.size();
		let popup = Rect {
			x: area.x,
			y: area.y,
			width: width.min(area.width),
			height: height.min(area.height),
		};
		dropdown.render(popup, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Down => self.state.select_next(LOCALES.len()),
			KeyCode::Up => self.state.select_prev(LOCALES.len()),
			KeyCode::Esc => self.state.close(),
			_ => {}
		}
	}

	fn tick(&mut self) {
		self.state.tick();
	}
}

struct SectorDropdown {
	state: DropdownState,
}

impl StoryComponent for SectorDropdown {
	fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, locale: &LocaleContext) {
		if !self.state.is_open() {
			self.state.open();
		}
		let items = sectors()
			.iter()
			.map(|sector| DropdownItem::new(sector.title.clone()))
			.collect();
		let dropdown = Dropdown::new(items)
			.title(locale.t("status.sectors"))
			.theme(theme.clone())
			.direction(locale.direction);
		let (width, height) = dropdown.size();
		let popup = Rect {
			x: area.x,
			y: area.y,
			width: width.min(area.width),
			height: height.min(area.height),
		};
		dropdown.render(popup, frame.buffer_mut(), &mut self.state);
	}

	fn handle_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Down => self.state.select_next(sectors().len()),
			KeyCode::Up => self.state.select_prev(sectors().len()),
			KeyCode::Esc => self.state.close(),
			_ => {}
		}
	}

	fn tick(&mut self) {
		self.state.tick();
	}
}

pub fn dropdown_story() -> Story {
	Story::new("Dropdown", "Overlay menus for language and sector selection")
		.variant(
			"Language",
			LanguageDropdown {
				state: DropdownState::new(),
			},
		)
		.variant(
			"Sectors",
			SectorDropdown {
				state: DropdownState::new(),
			},
		)
}
