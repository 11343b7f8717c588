// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One screen per route, each implementing [`Component`].

use ratatui::layout::Alignment;
use vitrine_tui_component::{Component, RenderContext};

mod contact;
mod home;
mod sector;
mod solution;

pub use contact::{ContactScreen, SUBMITTED_KIND};
pub use home::HomeScreen;
pub use sector::SectorScreen;
pub use solution::SolutionScreen;

/// The active screen, owned by the app and swapped on navigation.
pub enum Screen {
	Home(HomeScreen),
	Sector(SectorScreen),
	Solution(SolutionScreen),
	Contact(ContactScreen),
}

impl Screen {
	pub fn component_mut(&mut self) -> &mut dyn Component {
		match self {
			Screen::Home(screen) => screen,
			Screen::Sector(screen) => screen,
			Screen::Solution(screen) => screen,
			Screen::Contact(screen) => screen,
		}
	}
}

/// Paragraph alignment following the reading direction.
pub(crate) fn text_alignment(ctx: &RenderContext) -> Alignment {
	if ctx.is_rtl() {
		Alignment::Right
	} else {
		Alignment::Left
	}
}
