// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::widgets::StatefulWidget;
use vitrine_tui_testing::TestHarness;
use vitrine_tui_widget_toast::{Toast, ToastAnchor, ToastStack, ToastState};

#[test]
fn test_toast_renders_message_and_description() {
	let mut state = ToastState::new();
	state.push(Toast::success("Message envoyé !").description("Nous vous répondrons."));

	let mut harness = TestHarness::new(60, 12);
	harness.render(|frame, area, theme| {
		let stack = ToastStack::new().theme(theme.clone());
		stack.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_contains("Message envoyé !");
	harness.assert_contains("Nous vous répondrons.");
}

#[test]
fn test_default_anchor_is_bottom_right() {
	let mut state = ToastState::new();
	state.push(Toast::info("ok"));

	let mut harness = TestHarness::new(40, 10);
	harness.render(|frame, area, theme| {
		let stack = ToastStack::new().theme(theme.clone());
		stack.render(area, frame.buffer_mut(), &mut state);
	});

	let (row, col) = harness.find_text("ok").unwrap();
	assert!(row >= 7, "expected bottom placement, got row {row}");
	assert!(col >= 20, "expected right placement, got col {col}");
}

#[test]
fn test_top_left_anchor() {
	let mut state = ToastState::new();
	state.push(Toast::info("ok"));

	let mut harness = TestHarness::new(40, 10);
	harness.render(|frame, area, theme| {
		let stack = ToastStack::new()
			.anchor(ToastAnchor::TopLeft)
			.theme(theme.clone());
		stack.render(area, frame.buffer_mut(), &mut state);
	});

	let (row, col) = harness.find_text("ok").unwrap();
	assert_eq!(row, 2);
	assert_eq!(col, 3);
}

#[test]
fn test_two_toasts_stack_vertically() {
	let mut state = ToastState::new();
	state.push(Toast::info("first"));
	state.push(Toast::info("second"));

	let mut harness = TestHarness::new(40, 12);
	harness.render(|frame, area, theme| {
		let stack = ToastStack::new().theme(theme.clone());
		stack.render(area, frame.buffer_mut(), &mut state);
	});

	let (first_row, _) = harness.find_text("first").unwrap();
	let (second_row, _) = harness.find_text("second").unwrap();
	// Bottom anchor: the earlier toast sits closest to the bottom edge.
	assert!(second_row < first_row);
}

#[test]
fn test_expired_toast_disappears() {
	let mut state = ToastState::new();
	state.push(Toast::info("gone"));
	for _ in 0..40 {
		state.tick();
	}

	let mut harness = TestHarness::new(40, 10);
	harness.render(|frame, area, theme| {
		let stack = ToastStack::new().theme(theme.clone());
		stack.render(area, frame.buffer_mut(), &mut state);
	});

	harness.assert_not_contains("gone");
}
