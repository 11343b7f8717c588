// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::widgets::StatefulWidget;
use vitrine_tui_testing::TestHarness;
use vitrine_tui_widget_typewriter::{Typewriter, TypewriterState, CURSOR_HOLD_TICKS};

#[test]
fn test_partial_text_with_cursor() {
	let mut state = TypewriterState::new("Innovation");
	for _ in 0..4 {
		state.tick();
	}

	let mut harness = TestHarness::new(30, 1);
	harness.render(|frame, area, theme| {
		let typewriter = Typewriter::new().style(theme.text.bold);
		typewriter.render(area, frame.buffer_mut(), &mut state);
	});

	// 4 ticks revealed, blink phase visible again at tick 4 is false:
	// ticks 3..5 are the hidden half period, so only the text shows.
	harness.assert_contains("Inno");
	harness.assert_not_contains("Innov");
}

#[test]
fn test_completed_text_after_hold_has_no_cursor() {
	let mut state = TypewriterState::new("IA");
	state.skip();
	for _ in 0..CURSOR_HOLD_TICKS {
		state.tick();
	}

	let mut harness = TestHarness::new(20, 1);
	harness.render(|frame, area, _theme| {
		let typewriter = Typewriter::new();
		typewriter.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_contains("IA");
	harness.assert_not_contains("▌");
}

#[test]
fn test_long_text_wraps() {
	let mut state = TypewriterState::new("L'intelligence artificielle au service de votre transformation");
	state.skip();

	let mut harness = TestHarness::new(30, 4);
	harness.render(|frame, area, _theme| {
		let typewriter = Typewriter::new();
		typewriter.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_contains("L'intelligence");
	harness.assert_contains("transformation");
	let (row, _) = harness.find_text("transformation").unwrap();
	assert!(row > 0);
}
