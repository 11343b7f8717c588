// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical chrome: header, content, status bar. The header collapses to a
/// single row on short terminals.
pub fn create_main_layout(area: Rect) -> Layout {
	let header_height = if area.height >= 20 { 3 } else { 1 };

	Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(header_height),
			Constraint::Min(1),
			Constraint::Length(1),
		])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tall_terminal_gets_bordered_header() {
		let area = Rect::new(0, 0, 80, 24);
		let areas = create_main_layout(area).split(area);
		assert_eq!(areas[0].height, 3);
		assert_eq!(areas[2].height, 1);
		assert_eq!(areas[1].height, 20);
	}

	#[test]
	fn test_short_terminal_compacts_header() {
		let area = Rect::new(0, 0, 80, 12);
		let areas = create_main_layout(area).split(area);
		assert_eq!(areas[0].height, 1);
		assert_eq!(areas[1].height, 10);
	}
}
