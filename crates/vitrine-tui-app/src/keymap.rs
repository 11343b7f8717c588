// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application-level key bindings shared by every screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vitrine_tui_core::{Action, FocusState, Keymap};

/// Focus id of the main content region.
pub const FOCUS_CONTENT: &str = "content";
/// Focus id set while the contact form captures typed characters.
pub const FOCUS_FORM: &str = "form";
/// Focus id set while the sector menu overlay is open.
pub const FOCUS_SECTOR_MENU: &str = "menu.sectors";
/// Focus id set while the language menu overlay is open.
pub const FOCUS_LANGUAGE_MENU: &str = "menu.language";

/// Custom action kind asking the app to open a menu overlay.
pub const MENU_OPEN_KIND: &str = "menu.open";
/// Custom action kind asking the app to show home scrolled to the sectors.
pub const SECTORS_JUMP_KIND: &str = "jump.sectors";

/// Global bindings. Single-letter shortcuts are suppressed while a text
/// field has focus so typing "trust" does not flip the theme, and while a
/// menu is open so the app can route keys to the overlay instead.
pub struct GlobalKeymap;

impl Keymap<Action> for GlobalKeymap {
	fn key_to_action(&self, key: &KeyEvent, focus: &FocusState) -> Option<Action> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			return if key.code == KeyCode::Char('c') {
				Some(Action::Quit)
			} else {
				None
			};
		}

		if focus.is_focused(FOCUS_SECTOR_MENU) || focus.is_focused(FOCUS_LANGUAGE_MENU) {
			return None;
		}

		if key.code == KeyCode::Esc {
			return Some(Action::Cancel);
		}

		if focus.is_focused(FOCUS_FORM) {
			return None;
		}

		match key.code {
			KeyCode::Char('q') => Some(Action::Quit),
			KeyCode::Char('t') => Some(Action::ToggleTheme),
			KeyCode::Char('l') => Some(Action::Custom {
				kind: MENU_OPEN_KIND.into(),
				payload: "language".to_string(),
			}),
			KeyCode::Char('s') => Some(Action::Custom {
				kind: MENU_OPEN_KIND.into(),
				payload: "sectors".to_string(),
			}),
			KeyCode::Char('1') => Some(Action::navigate("/")),
			KeyCode::Char('2') => Some(Action::Custom {
				kind: SECTORS_JUMP_KIND.into(),
				payload: String::new(),
			}),
			KeyCode::Char('3') => Some(Action::navigate("/contact")),
			_ => None,
		}
	}
}
