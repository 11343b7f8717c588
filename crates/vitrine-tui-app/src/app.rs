// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
	layout::Rect,
	style::Modifier,
	widgets::{Block, Borders},
	Frame,
};

use vitrine_config::{PreferenceStore, ThemeChoice};
use vitrine_content::sectors;
use vitrine_i18n::{available_locales, resolve_locale};
use vitrine_tui_component::{Component, RenderContext};
use vitrine_tui_core::{Action, Event, EventOutcome, FocusState, Keymap, LocaleContext};
use vitrine_tui_theme::{LayoutDirection, Theme};
use vitrine_tui_widget_dropdown::{Dropdown, DropdownItem, DropdownState};
use vitrine_tui_widget_header::Header;
use vitrine_tui_widget_status_bar::StatusBar;
use vitrine_tui_widget_toast::{Toast, ToastStack, ToastState};

use crate::keymap::{
	GlobalKeymap, FOCUS_CONTENT, FOCUS_FORM, FOCUS_LANGUAGE_MENU, FOCUS_SECTOR_MENU,
	MENU_OPEN_KIND, SECTORS_JUMP_KIND,
};
use crate::layout::create_main_layout;
use crate::route::{resolve, Resolution, Route};
use crate::screens::{
	ContactScreen, HomeScreen, Screen, SectorScreen, SolutionScreen, SUBMITTED_KIND,
};

pub struct AppState {
	pub route: Route,
	pub screen: Screen,
	pub focus: FocusState,
	pub toasts: ToastState,
	pub sector_menu: DropdownState,
	pub language_menu: DropdownState,
	pub locale: LocaleContext,
	pub should_quit: bool,
}

pub struct App {
	pub state: AppState,
	pub theme: Theme,
	theme_choice: ThemeChoice,
	keymap: GlobalKeymap,
	store: PreferenceStore,
	prefs: vitrine_config::Preferences,
}

fn theme_for(choice: ThemeChoice) -> Theme {
	match choice {
		ThemeChoice::Dark => Theme::dark(),
		ThemeChoice::Light => Theme::light(),
	}
}

impl App {
	pub fn new(store: PreferenceStore) -> Self {
		Self::with_session(store, None, None, None)
	}

	/// Command-line overrides shadow the stored preferences for this session
	/// without writing them back; the next explicit change in the interface
	/// persists whatever is current at that point.
	pub fn with_session(
		store: PreferenceStore,
		route: Option<&str>,
		language: Option<&str>,
		theme: Option<ThemeChoice>,
	) -> Self {
		let prefs = store.load();

		let code = resolve_locale(language, &prefs.language);
		if let Some(requested) = language {
			if requested != code {
				tracing::warn!(language = requested, "unsupported language override ignored");
			}
		}
		let locale = LocaleContext::new(code);
		let theme_choice = theme.unwrap_or(prefs.theme);

		let mut focus = FocusState::default();
		for id in [FOCUS_CONTENT, FOCUS_FORM, FOCUS_SECTOR_MENU, FOCUS_LANGUAGE_MENU] {
			focus.register(id.to_string());
		}
		focus.set_focus(FOCUS_CONTENT);

		let screen = Screen::Home(HomeScreen::new(&locale));
		let mut app = Self {
			state: AppState {
				route: Route::Home,
				screen,
				focus,
				toasts: ToastState::new(),
				sector_menu: DropdownState::new(),
				language_menu: DropdownState::new(),
				locale,
				should_quit: false,
			},
			theme: theme_for(theme_choice),
			theme_choice,
			keymap: GlobalKeymap,
			store,
			prefs,
		};

		let initial = Route::parse(route.unwrap_or("/"));
		if initial != Route::Home {
			app.goto(initial);
		}
		app
	}

	pub fn handle_key_event(&mut self, key: KeyEvent) {
		if let Some(action) = self.keymap.key_to_action(&key, &self.state.focus) {
			self.apply(action);
			return;
		}

		match self.handle_menu_key(&key) {
			EventOutcome::Handled(Some(action)) => self.apply(action),
			EventOutcome::Handled(None) => {}
			EventOutcome::Ignored => {
				let actions = self.state.screen.component_mut().handle_event(&Event::Key(key));
				for action in actions {
					self.apply(action);
				}
			}
		}
	}

	/// An open menu owns the keyboard. Keys arriving inside the open-debounce
	/// window are swallowed so the keystroke that opened the menu cannot also
	/// activate an entry.
	fn handle_menu_key(&mut self, key: &KeyEvent) -> EventOutcome<Action> {
		if self.state.sector_menu.is_open() {
			if !self.state.sector_menu.is_ready() {
				return EventOutcome::Handled(None);
			}
			let total = sectors().len();
			return match key.code {
				KeyCode::Up => {
					self.state.sector_menu.select_prev(total);
					EventOutcome::Handled(None)
				}
				KeyCode::Down => {
					self.state.sector_menu.select_next(total);
					EventOutcome::Handled(None)
				}
				KeyCode::Enter => {
					let slug = sectors()[self.state.sector_menu.selected()].slug.clone();
					self.close_menus();
					EventOutcome::Handled(Some(Action::navigate(format!("/secteurs/{slug}"))))
				}
				KeyCode::Esc => {
					self.close_menus();
					EventOutcome::Handled(None)
				}
				_ => EventOutcome::Handled(None),
			};
		}

		if self.state.language_menu.is_open() {
			if !self.state.language_menu.is_ready() {
				return EventOutcome::Handled(None);
			}
			let total = available_locales().len();
			return match key.code {
				KeyCode::Up => {
					self.state.language_menu.select_prev(total);
					EventOutcome::Handled(None)
				}
				KeyCode::Down => {
					self.state.language_menu.select_next(total);
					EventOutcome::Handled(None)
				}
				KeyCode::Enter => {
					let code = available_locales()[self.state.language_menu.selected()].code;
					self.close_menus();
					EventOutcome::Handled(Some(Action::SetLanguage(code)))
				}
				KeyCode::Esc => {
					self.close_menus();
					EventOutcome::Handled(None)
				}
				_ => EventOutcome::Handled(None),
			};
		}

		EventOutcome::Ignored
	}

	fn apply(&mut self, action: Action) {
		match action {
			Action::Quit => self.state.should_quit = true,
			Action::Cancel => self.back(),
			Action::ToggleTheme => self.set_theme(self.theme_choice.toggled()),
			Action::SetLanguage(code) => self.set_language(code),
			Action::Navigate(path) => self.goto(Route::parse(&path)),
			Action::Custom { kind, payload } => self.apply_custom(kind.as_ref(), payload),
		}
	}

	fn apply_custom(&mut self, kind: &str, payload: String) {
		match kind {
			MENU_OPEN_KIND => self.open_menu(&payload),
			SECTORS_JUMP_KIND => {
				let screen = Screen::Home(HomeScreen::at_sectors(&self.state.locale));
				self.mount(Route::Home, screen);
			}
			SUBMITTED_KIND => {
				let message = self.state.locale.t("contact.form.success");
				let description = self.state.locale.t("contact.form.success.description");
				self.state.toasts.push(Toast::success(message).description(description));
			}
			other => tracing::debug!(kind = other, "unhandled custom action"),
		}
	}

	fn goto(&mut self, route: Route) {
		match resolve(&route) {
			Resolution::Home => {
				let screen = Screen::Home(HomeScreen::new(&self.state.locale));
				self.mount(Route::Home, screen);
			}
			Resolution::SectorsListing => {
				let screen = Screen::Home(HomeScreen::at_sectors(&self.state.locale));
				self.mount(Route::Home, screen);
			}
			Resolution::Contact => {
				self.mount(Route::Contact, Screen::Contact(ContactScreen::new()));
			}
			Resolution::Sector(sector) => {
				let route = Route::Sector {
					sector: sector.slug.clone(),
				};
				self.mount(route, Screen::Sector(SectorScreen::new(sector)));
			}
			Resolution::Solution(sector, solution) => {
				let route = Route::Solution {
					sector: sector.slug.clone(),
					solution: solution.slug.clone(),
				};
				self.mount(route, Screen::Solution(SolutionScreen::new(sector, solution)));
			}
		}
	}

	fn mount(&mut self, route: Route, mut screen: Screen) {
		if let Err(error) = screen.component_mut().init() {
			tracing::warn!(%error, "screen init failed");
		}
		let focus_id = match &screen {
			Screen::Contact(_) => FOCUS_FORM,
			_ => FOCUS_CONTENT,
		};
		self.state.focus.set_focus(focus_id);
		tracing::debug!(path = %route.path(), "navigated");
		self.state.route = route;
		self.state.screen = screen;
	}

	/// Esc walks up one level: solution to its sector, sector to the listing,
	/// contact to home. On home it does nothing.
	fn back(&mut self) {
		match self.state.route.clone() {
			Route::Home => {}
			Route::Contact => self.goto(Route::Home),
			Route::Sector { .. } => {
				let screen = Screen::Home(HomeScreen::at_sectors(&self.state.locale));
				self.mount(Route::Home, screen);
			}
			Route::Solution { sector, .. } => self.goto(Route::Sector { sector }),
		}
	}

	fn open_menu(&mut self, which: &str) {
		match which {
			"sectors" => {
				self.state.language_menu.close();
				self.state.sector_menu.open();
				if let Some(slug) = self.current_sector_slug() {
					if let Some(index) = sectors().iter().position(|s| s.slug == slug) {
						self.state.sector_menu.set_selected(index);
					}
				}
				self.state.focus.set_focus(FOCUS_SECTOR_MENU);
			}
			"language" => {
				self.state.sector_menu.close();
				self.state.language_menu.open();
				let current = available_locales()
					.iter()
					.position(|info| info.code == self.state.locale.locale);
				if let Some(index) = current {
					self.state.language_menu.set_selected(index);
				}
				self.state.focus.set_focus(FOCUS_LANGUAGE_MENU);
			}
			other => tracing::debug!(menu = other, "unknown menu"),
		}
	}

	fn close_menus(&mut self) {
		self.state.sector_menu.close();
		self.state.language_menu.close();
		let focus_id = match &self.state.screen {
			Screen::Contact(_) => FOCUS_FORM,
			_ => FOCUS_CONTENT,
		};
		self.state.focus.set_focus(focus_id);
	}

	fn current_sector_slug(&self) -> Option<&'static str> {
		match &self.state.screen {
			Screen::Sector(screen) => Some(screen.sector().slug.as_str()),
			Screen::Solution(screen) => Some(screen.sector().slug.as_str()),
			_ => None,
		}
	}

	fn set_language(&mut self, code: &'static str) {
		if self.state.locale.locale == code {
			return;
		}
		self.state.locale = LocaleContext::new(code);
		self.prefs.language = code.to_string();
		self.persist();

		// Screens translate at render time; the active screen may still want
		// to react, e.g. home replays its hero reveal.
		let followups = self.state.screen.component_mut().update(&Action::SetLanguage(code));
		for action in followups {
			self.apply(action);
		}
	}

	fn set_theme(&mut self, choice: ThemeChoice) {
		self.theme_choice = choice;
		self.theme = theme_for(choice);
		self.prefs.theme = choice;
		self.persist();
	}

	fn persist(&mut self) {
		if let Err(error) = self.store.save(&self.prefs) {
			tracing::warn!(%error, "failed to save preferences");
		}
	}

	pub fn tick(&mut self) {
		self.state.toasts.tick();
		self.state.sector_menu.tick();
		self.state.language_menu.tick();

		let actions = self.state.screen.component_mut().handle_event(&Event::Tick);
		for action in actions {
			self.apply(action);
		}
	}

	pub fn render(&mut self, frame: &mut Frame) {
		let main_layout = create_main_layout(frame.area());
		let areas = main_layout.split(frame.area());

		let header_area = areas[0];
		let content_area = areas[1];
		let status_area = areas[2];

		self.render_header(frame, header_area);

		let ctx = RenderContext::new(&self.theme, &self.state.focus, &self.state.locale);
		self.state.screen.component_mut().render(frame, content_area, &ctx);

		self.render_menus(frame, content_area);

		let status_bar = self.build_status_bar();
		frame.render_widget(status_bar, status_area);

		// Last, so notifications overlay everything inside the chrome.
		let toast_stack = ToastStack::new()
			.theme(self.theme.clone())
			.direction(self.state.locale.direction);
		frame.render_stateful_widget(toast_stack, content_area, &mut self.state.toasts);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let locale = &self.state.locale;
		let theme_glyph = match self.theme_choice {
			ThemeChoice::Dark => "◐",
			ThemeChoice::Light => "◑",
		};
		let header = Header::new("AIUNIVERS")
			.nav_item(locale.t("nav.home"), matches!(self.state.route, Route::Home))
			.nav_item(
				locale.t("nav.sectors"),
				matches!(self.state.route, Route::Sector { .. } | Route::Solution { .. }),
			)
			.nav_item(locale.t("nav.contact"), matches!(self.state.route, Route::Contact))
			.indicator(format!("[{}]", locale.locale.to_uppercase()))
			.indicator(theme_glyph)
			.style(self.theme.text.dim)
			.brand_style(self.theme.accent_text().add_modifier(Modifier::BOLD))
			.active_style(self.theme.text.bold)
			.direction(locale.direction);

		if area.height < 3 {
			frame.render_widget(header, area);
		} else {
			let block = Block::default()
				.borders(Borders::BOTTOM)
				.border_style(self.theme.borders.normal);
			frame.render_widget(block, area);
			let inner = Rect {
				x: area.x + 1,
				y: area.y + 1,
				width: area.width.saturating_sub(2),
				height: 1,
			};
			frame.render_widget(header, inner);
		}
	}

	/// Menu overlays anchor below the header: sectors at the reading start,
	/// language at the reading end, mirroring the header slots they belong to.
	fn render_menus(&mut self, frame: &mut Frame, content_area: Rect) {
		let layout = LayoutDirection::new(self.state.locale.direction);

		if self.state.sector_menu.is_open() {
			let current = self.current_sector_slug();
			let items: Vec<DropdownItem> = sectors()
				.iter()
				.map(|sector| {
					DropdownItem::new(sector.title.clone())
						.marked(current == Some(sector.slug.as_str()))
				})
				.collect();
			let dropdown = Dropdown::new(items)
				.title(self.state.locale.t("nav.sectors"))
				.theme(self.theme.clone())
				.direction(self.state.locale.direction);
			let (width, height) = dropdown.size();
			let width = width.min(content_area.width);
			let height = height.min(content_area.height);
			let x = layout.start_x(content_area.x, content_area.width, width);
			let area = Rect::new(x, content_area.y, width, height);
			frame.render_stateful_widget(dropdown, area, &mut self.state.sector_menu);
		}

		if self.state.language_menu.is_open() {
			let items: Vec<DropdownItem> = available_locales()
				.iter()
				.map(|info| {
					DropdownItem::new(info.native_name)
						.marked(info.code == self.state.locale.locale)
				})
				.collect();
			let dropdown = Dropdown::new(items)
				.title(self.state.locale.t("status.language"))
				.theme(self.theme.clone())
				.direction(self.state.locale.direction);
			let (width, height) = dropdown.size();
			let width = width.min(content_area.width);
			let height = height.min(content_area.height);
			let x = layout.end_x(content_area.x, content_area.width, width);
			let area = Rect::new(x, content_area.y, width, height);
			frame.render_stateful_widget(dropdown, area, &mut self.state.language_menu);
		}
	}

	fn build_status_bar(&self) -> StatusBar {
		let locale = &self.state.locale;
		let locale_display = format!("[{}]", locale.locale.to_uppercase());
		let status = StatusBar::new()
			.item(locale.t("status.language"), &locale_display)
			.item(locale.t("status.theme"), self.theme_choice.as_str())
			.style(self.theme.text.dim)
			.key_style(self.theme.accent_text())
			.direction(locale.direction);

		if self.state.sector_menu.is_open() || self.state.language_menu.is_open() {
			return status
				.shortcut("↑↓", locale.t("status.move"))
				.shortcut("⏎", locale.t("status.select"))
				.shortcut("Esc", locale.t("status.back"));
		}

		match &self.state.screen {
			Screen::Home(home) => {
				let enter = if home.is_revealing() {
					locale.t("status.skip")
				} else {
					locale.t("status.select")
				};
				status
					.shortcut("↑↓", locale.t("status.move"))
					.shortcut("⏎", enter)
					.shortcut("s", locale.t("status.sectors"))
					.shortcut("l", locale.t("status.language"))
					.shortcut("t", locale.t("status.theme"))
					.shortcut("q", locale.t("status.quit"))
			}
			Screen::Sector(_) => status
				.shortcut("↑↓", locale.t("status.move"))
				.shortcut("⏎", locale.t("status.select"))
				.shortcut("Esc", locale.t("status.back"))
				.shortcut("q", locale.t("status.quit")),
			Screen::Solution(_) => status
				.shortcut("↑↓", locale.t("status.move"))
				.shortcut("⏎", locale.t("nav.contact"))
				.shortcut("Esc", locale.t("status.back"))
				.shortcut("q", locale.t("status.quit")),
			Screen::Contact(_) => status
				.shortcut("Tab", locale.t("status.move"))
				.shortcut("Ctrl+S", locale.t("status.submit"))
				.shortcut("Esc", locale.t("status.back")),
		}
	}

	pub fn should_quit(&self) -> bool {
		self.state.should_quit
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::KeyModifiers;
	use tempfile::TempDir;
	use vitrine_config::Preferences;
	use vitrine_contact::FieldId;
	use vitrine_tui_testing::TestHarness;

	fn store_in(dir: &TempDir) -> PreferenceStore {
		PreferenceStore::at_path(dir.path().join("preferences.toml"))
	}

	fn app() -> (App, TempDir) {
		let dir = TempDir::new().unwrap();
		let app = App::new(store_in(&dir));
		(app, dir)
	}

	fn app_at(route: &str) -> (App, TempDir) {
		let dir = TempDir::new().unwrap();
		let app = App::with_session(store_in(&dir), Some(route), None, None);
		(app, dir)
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(c: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
	}

	fn type_str(app: &mut App, text: &str) {
		for c in text.chars() {
			app.handle_key_event(key(KeyCode::Char(c)));
		}
	}

	fn fill_contact_form(app: &mut App) {
		type_str(app, "Amina Benali");
		app.handle_key_event(key(KeyCode::Tab));
		type_str(app, "amina@aiunivers.ai");
		app.handle_key_event(key(KeyCode::Tab));
		app.handle_key_event(key(KeyCode::Tab));
		type_str(app, "Demande de démonstration");
		app.handle_key_event(key(KeyCode::Tab));
		type_str(app, &"x".repeat(20));
	}

	#[test]
	fn test_q_quits_from_content() {
		let (mut app, _dir) = app();
		app.handle_key_event(key(KeyCode::Char('q')));
		assert!(app.should_quit());
	}

	#[test]
	fn test_ctrl_c_quits_even_while_typing() {
		let (mut app, _dir) = app_at("/contact");
		type_str(&mut app, "hello");
		assert!(!app.should_quit());
		app.handle_key_event(ctrl('c'));
		assert!(app.should_quit());
	}

	fn assert_home_revealing(app: &App, revealing: bool) {
		match &app.state.screen {
			Screen::Home(home) => assert_eq!(home.is_revealing(), revealing),
			_ => panic!("expected home screen"),
		}
	}

	#[test]
	fn test_number_keys_jump_between_screens() {
		let (mut app, _dir) = app();

		app.handle_key_event(key(KeyCode::Char('2')));
		assert_eq!(app.state.route, Route::Home);
		assert_home_revealing(&app, false);

		app.handle_key_event(key(KeyCode::Char('3')));
		assert_eq!(app.state.route, Route::Contact);
		assert!(app.state.focus.is_focused(FOCUS_FORM));

		// Inside the form the digit keys type, so leave with Esc first.
		app.handle_key_event(key(KeyCode::Esc));
		assert_eq!(app.state.route, Route::Home);
		assert!(app.state.focus.is_focused(FOCUS_CONTENT));
		assert_home_revealing(&app, true);

		app.handle_key_event(key(KeyCode::Char('2')));
		assert_home_revealing(&app, false);
		app.handle_key_event(key(KeyCode::Char('1')));
		assert_home_revealing(&app, true);
	}

	#[test]
	fn test_home_enter_skips_reveal_then_opens_sector() {
		let (mut app, _dir) = app();

		app.handle_key_event(key(KeyCode::Enter));
		assert_eq!(app.state.route, Route::Home);
		assert_home_revealing(&app, false);

		app.handle_key_event(key(KeyCode::Enter));
		assert_eq!(
			app.state.route,
			Route::Sector {
				sector: "intelligence-artificielle".to_string()
			}
		);
	}

	#[test]
	fn test_sector_menu_opens_debounces_and_navigates() {
		let (mut app, _dir) = app();

		app.handle_key_event(key(KeyCode::Char('s')));
		assert!(app.state.sector_menu.is_open());
		assert!(app.state.focus.is_focused(FOCUS_SECTOR_MENU));

		// Within the debounce window every key is swallowed.
		app.handle_key_event(key(KeyCode::Enter));
		assert_eq!(app.state.route, Route::Home);
		assert!(app.state.sector_menu.is_open());

		app.tick();
		app.handle_key_event(key(KeyCode::Down));
		app.handle_key_event(key(KeyCode::Enter));

		assert_eq!(
			app.state.route,
			Route::Sector {
				sector: "telecommunications".to_string()
			}
		);
		assert!(!app.state.sector_menu.is_open());
		assert!(app.state.focus.is_focused(FOCUS_CONTENT));
	}

	#[test]
	fn test_language_menu_switches_locale_and_persists() {
		let (mut app, _dir) = app();
		for _ in 0..300 {
			app.tick();
		}
		assert_home_revealing(&app, false);

		app.handle_key_event(key(KeyCode::Char('l')));
		app.tick();
		app.handle_key_event(key(KeyCode::Down));
		app.handle_key_event(key(KeyCode::Enter));

		assert_eq!(app.state.locale.locale, "fr");
		assert_eq!(app.store.load().language, "fr");
		// The hero reveal replays in the new language.
		assert_home_revealing(&app, true);
	}

	#[test]
	fn test_arabic_flips_direction() {
		let (mut app, _dir) = app();

		app.handle_key_event(key(KeyCode::Char('l')));
		app.tick();
		app.handle_key_event(key(KeyCode::Down));
		app.handle_key_event(key(KeyCode::Down));
		app.handle_key_event(key(KeyCode::Enter));

		assert_eq!(app.state.locale.locale, "ar");
		assert!(app.state.locale.is_rtl());
	}

	#[test]
	fn test_theme_toggle_persists_and_flips_back() {
		let (mut app, _dir) = app();
		assert_eq!(app.theme.name, "dark");

		app.handle_key_event(key(KeyCode::Char('t')));
		assert_eq!(app.theme.name, "light");
		assert_eq!(app.store.load().theme, ThemeChoice::Light);

		app.handle_key_event(key(KeyCode::Char('t')));
		assert_eq!(app.theme.name, "dark");
		assert_eq!(app.store.load().theme, ThemeChoice::Dark);
	}

	#[test]
	fn test_esc_walks_back_to_home() {
		let (mut app, _dir) = app_at("/secteurs/cybersecurite/solutions/audit-pentesting");
		assert!(matches!(app.state.route, Route::Solution { .. }));

		app.handle_key_event(key(KeyCode::Esc));
		assert_eq!(
			app.state.route,
			Route::Sector {
				sector: "cybersecurite".to_string()
			}
		);

		app.handle_key_event(key(KeyCode::Esc));
		assert_eq!(app.state.route, Route::Home);

		// Esc on home is a no-op, not a quit.
		app.handle_key_event(key(KeyCode::Esc));
		assert_eq!(app.state.route, Route::Home);
		assert!(!app.should_quit());
	}

	#[test]
	fn test_unknown_sector_redirects_to_listing() {
		let (app, _dir) = app_at("/secteurs/blockchain");
		assert_eq!(app.state.route, Route::Home);
		assert_home_revealing(&app, false);
	}

	#[test]
	fn test_unknown_solution_redirects_to_parent_sector() {
		let (app, _dir) = app_at("/secteurs/cybersecurite/solutions/nonexistent");
		assert_eq!(
			app.state.route,
			Route::Sector {
				sector: "cybersecurite".to_string()
			}
		);
	}

	#[test]
	fn test_contact_flow_submits_and_toasts() {
		let (mut app, _dir) = app_at("/contact");
		assert!(app.state.focus.is_focused(FOCUS_FORM));

		fill_contact_form(&mut app);
		assert!(app.state.toasts.is_empty());

		app.handle_key_event(ctrl('s'));
		assert_eq!(app.state.toasts.len(), 1);
		assert_eq!(app.state.route, Route::Contact);
		match &app.state.screen {
			Screen::Contact(contact) => {
				assert_eq!(contact.field_content(FieldId::Name), "");
				assert!(contact.errors().is_empty());
			}
			_ => panic!("expected contact screen"),
		}

		let mut harness = TestHarness::new(100, 32);
		harness.render(|frame, _, _| app.render(frame));
		harness.assert_contains("Message sent successfully!");
	}

	#[test]
	fn test_shortcuts_type_into_form_instead() {
		let (mut app, _dir) = app_at("/contact");

		type_str(&mut app, "qt123");
		assert!(!app.should_quit());
		assert_eq!(app.theme.name, "dark");
		assert_eq!(app.state.route, Route::Contact);
		match &app.state.screen {
			Screen::Contact(contact) => {
				assert_eq!(contact.field_content(FieldId::Name), "qt123");
			}
			_ => panic!("expected contact screen"),
		}
	}

	#[test]
	fn test_session_overrides_do_not_persist() {
		let dir = TempDir::new().unwrap();
		let app = App::with_session(
			store_in(&dir),
			None,
			Some("ar"),
			Some(ThemeChoice::Light),
		);

		assert_eq!(app.state.locale.locale, "ar");
		assert!(app.state.locale.is_rtl());
		assert_eq!(app.theme.name, "light");

		// Nothing was written: a fresh load still yields the defaults.
		assert_eq!(app.store.load(), Preferences::default());
	}

	#[test]
	fn test_stored_preferences_restore_on_launch() {
		let dir = TempDir::new().unwrap();
		let store = store_in(&dir);
		store
			.save(&Preferences {
				language: "fr".to_string(),
				theme: ThemeChoice::Light,
			})
			.unwrap();

		let app = App::new(store);
		assert_eq!(app.state.locale.locale, "fr");
		assert_eq!(app.theme.name, "light");
	}

	#[test]
	fn test_render_smoke() {
		let (mut app, _dir) = app();

		let mut harness = TestHarness::new(100, 32);
		harness.render(|frame, _, _| app.render(frame));

		harness.assert_contains("AIUNIVERS");
		harness.assert_contains("[EN]");
		harness.assert_contains("Sectors of Activity");
	}
}
