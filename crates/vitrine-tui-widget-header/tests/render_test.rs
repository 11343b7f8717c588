// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::widgets::Widget;
use vitrine_tui_core::TextDirection;
use vitrine_tui_testing::TestHarness;
use vitrine_tui_widget_header::Header;

#[test]
fn test_header_layout_ltr() {
	let mut harness = TestHarness::new(60, 1);
	harness.render(|frame, area, theme| {
		let header = Header::new("AIUNIVERS")
			.nav_item("Accueil", true)
			.nav_item("Contact", false)
			.indicator("[FR]")
			.brand_style(theme.accent_text())
			.active_style(theme.accent_text());
		header.render(area, frame.buffer_mut());
	});

	let (_, brand_col) = harness.find_text("AIUNIVERS").unwrap();
	assert_eq!(brand_col, 0);

	let (_, indicator_col) = harness.find_text("[FR]").unwrap();
	assert_eq!(indicator_col, 60 - 4);

	harness.assert_contains("Accueil");
	harness.assert_contains("Contact");
}

#[test]
fn test_header_layout_rtl_mirrors_sides() {
	let mut harness = TestHarness::new(60, 1);
	harness.render(|frame, area, _theme| {
		let header = Header::new("AIUNIVERS")
			.indicator("[AR]")
			.direction(TextDirection::Rtl);
		header.render(area, frame.buffer_mut());
	});

	let (_, brand_col) = harness.find_text("AIUNIVERS").unwrap();
	assert_eq!(brand_col, 60 - 9);

	let (_, indicator_col) = harness.find_text("[AR]").unwrap();
	assert_eq!(indicator_col, 0);
}

#[test]
fn test_header_drops_nav_when_too_narrow() {
	let mut harness = TestHarness::new(16, 1);
	harness.render(|frame, area, _theme| {
		let header = Header::new("AIUNIVERS")
			.nav_item("Accueil", false)
			.nav_item("Secteurs", false)
			.indicator("[EN]");
		header.render(area, frame.buffer_mut());
	});

	harness.assert_contains("AIUNIVERS");
	harness.assert_contains("[EN]");
	harness.assert_not_contains("Accueil");
}
