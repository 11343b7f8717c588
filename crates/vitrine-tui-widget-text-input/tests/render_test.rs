// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::widgets::StatefulWidget;
use vitrine_tui_testing::TestHarness;
use vitrine_tui_widget_text_input::{TextInput, TextInputState};

#[test]
fn test_label_placeholder_and_counter() {
	let mut state = TextInputState::new();
	let mut harness = TestHarness::new(40, 4);
	harness.render(|frame, area, theme| {
		let input = TextInput::new()
			.label("Message")
			.placeholder("Votre message...")
			.counter("0/1000")
			.theme(theme.clone());
		input.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_contains("Message");
	harness.assert_contains("Votre message...");

	// Counter sits at the end of the footer row.
	let (row, col) = harness.find_text("0/1000").unwrap();
	assert_eq!(row, 3);
	assert_eq!(col, 40 - 6);
}

#[test]
fn test_typed_content_replaces_placeholder() {
	let mut state = TextInputState::new();
	state.set_content("Jean Dupont");

	let mut harness = TestHarness::new(40, 4);
	harness.render(|frame, area, theme| {
		let input = TextInput::new()
			.label("Nom")
			.placeholder("Votre nom")
			.theme(theme.clone());
		input.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_contains("Jean Dupont");
	harness.assert_not_contains("Votre nom");
}

#[test]
fn test_error_message_in_footer() {
	let mut state = TextInputState::new();
	state.set_content("a");

	let mut harness = TestHarness::new(40, 4);
	harness.render(|frame, area, theme| {
		let input = TextInput::new()
			.label("Nom")
			.error(Some("Minimum 2 caractères".to_string()))
			.theme(theme.clone());
		input.render(area, frame.buffer_mut(), &mut state);
	});

	let (row, col) = harness.find_text("Minimum 2 caractères").unwrap();
	assert_eq!(row, 3);
	assert_eq!(col, 0);
}

#[test]
fn test_multiline_wraps_per_grapheme() {
	let mut state = TextInputState::new();
	// 12 columns inside the border; three wrapped rows.
	state.set_content("abcdefghijkl mnopqr uvwxyz");

	let mut harness = TestHarness::new(14, 6);
	harness.render(|frame, area, theme| {
		let input = TextInput::new().multiline(true).theme(theme.clone());
		input.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_contains("abcdefghijkl");
	harness.assert_contains(" mnopqr uvwx");
	harness.assert_contains("yz");
}

#[test]
fn test_multiline_scrolls_to_keep_cursor_visible() {
	let mut state = TextInputState::new();
	// Four wrapped rows but only two visible; cursor at the end.
	state.set_content("abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGH");

	let mut harness = TestHarness::new(14, 5);
	harness.render(|frame, area, theme| {
		let input = TextInput::new().multiline(true).theme(theme.clone());
		input.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_not_contains("abcdefghijkl");
	harness.assert_contains("ABCDEFGH");
}

#[test]
fn test_long_single_line_scrolls_horizontally() {
	let mut state = TextInputState::new();
	state.set_content("contact@aiunivers.ai");

	let mut harness = TestHarness::new(12, 4);
	harness.render(|frame, area, theme| {
		let input = TextInput::new().focused(true).theme(theme.clone());
		input.render(area, frame.buffer_mut(), &mut state);
	});

	// Cursor is at the end, so the window shows the tail.
	harness.assert_contains("nivers.ai");
	harness.assert_not_contains("contact@");
}
