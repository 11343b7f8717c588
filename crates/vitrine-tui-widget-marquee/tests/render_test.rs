// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::widgets::StatefulWidget;
use vitrine_tui_testing::TestHarness;
use vitrine_tui_widget_marquee::{Marquee, MarqueeState};

fn render_at(offset_ticks: u32, width: u16) -> String {
	let mut state = MarqueeState::new();
	for _ in 0..offset_ticks {
		state.tick();
	}

	let mut harness = TestHarness::new(width, 1);
	harness.render(|frame, area, _theme| {
		let marquee = Marquee::new(vec!["ABC".into(), "DE".into()]).separator("|");
		marquee.render(area, frame.buffer_mut(), &mut state);
	});
	harness.buffer_text()
}

#[test]
fn test_window_at_origin() {
	// Cycle is "ABC|DE|" (7 columns).
	assert_eq!(render_at(0, 7), "ABC|DE|");
}

#[test]
fn test_window_shifts_one_column_per_tick() {
	assert_eq!(render_at(1, 7), "BC|DE|A");
	assert_eq!(render_at(3, 7), "|DE|ABC");
}

#[test]
fn test_window_wraps_past_full_cycle() {
	assert_eq!(render_at(7, 7), "ABC|DE|");
	assert_eq!(render_at(8, 7), "BC|DE|A");
}

#[test]
fn test_window_wider_than_cycle_repeats() {
	assert_eq!(render_at(0, 10), "ABC|DE|ABC");
}
