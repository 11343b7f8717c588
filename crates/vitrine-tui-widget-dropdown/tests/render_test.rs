// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use vitrine_tui_testing::TestHarness;
use vitrine_tui_widget_dropdown::{Dropdown, DropdownItem, DropdownState};

fn language_items() -> Vec<DropdownItem> {
	vec![
		DropdownItem::new("English"),
		DropdownItem::new("Français").marked(true),
		DropdownItem::new("العربية"),
	]
}

#[test]
fn test_closed_dropdown_renders_nothing() {
	let mut state = DropdownState::new();
	let mut harness = TestHarness::new(30, 8);
	harness.render(|frame, area, theme| {
		let dropdown = Dropdown::new(language_items()).theme(theme.clone());
		dropdown.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_not_contains("Français");
}

#[test]
fn test_open_dropdown_lists_items_with_mark() {
	let mut state = DropdownState::new();
	state.open();

	let mut harness = TestHarness::new(30, 8);
	harness.render(|frame, area, theme| {
		let dropdown = Dropdown::new(language_items())
			.title("Langue")
			.theme(theme.clone());
		let (w, h) = dropdown.size();
		let overlay = Rect::new(area.x, area.y, w.min(area.width), h.min(area.height));
		dropdown.render(overlay, frame.buffer_mut(), &mut state);
	});

	harness.assert_contains("Langue");
	harness.assert_contains("English");
	harness.assert_contains("✓ Français");
	harness.assert_contains("العربية");
}

#[test]
fn test_overlay_clears_content_behind() {
	let mut state = DropdownState::new();
	state.open();

	let mut harness = TestHarness::new(20, 6);
	harness.render(|frame, area, theme| {
		let backdrop = ratatui::widgets::Paragraph::new("XXXXXXXXXXXXXXXXXXXX");
		frame.render_widget(backdrop, Rect::new(area.x, area.y, area.width, 1));

		let dropdown = Dropdown::new(vec![DropdownItem::new("Accueil")]).theme(theme.clone());
		dropdown.render(Rect::new(0, 0, 13, 3), frame.buffer_mut(), &mut state);
	});

	// Overlay wipes the backdrop within its rectangle.
	let lines = harness.buffer_lines();
	assert!(!lines[0].starts_with("XXX"));
	assert!(lines[0].ends_with("XXXXXXX"));
	harness.assert_contains("Accueil");
}
