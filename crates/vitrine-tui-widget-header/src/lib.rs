// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::Style,
	text::{Line, Span},
	widgets::Widget,
};
use unicode_width::UnicodeWidthStr;
use vitrine_tui_core::TextDirection;

#[derive(Debug, Clone)]
pub struct NavItem {
	pub label: String,
	pub active: bool,
}

/// Single-row top bar: brand at the reading start, navigation entries in the
/// middle, session indicators (language, theme) at the reading end. RTL swaps
/// the start and end sides.
#[derive(Debug, Clone)]
pub struct Header {
	brand: String,
	nav: Vec<NavItem>,
	indicators: Vec<String>,
	style: Style,
	brand_style: Style,
	active_style: Style,
	direction: TextDirection,
}

impl Header {
	pub fn new(brand: impl Into<String>) -> Self {
		Self {
			brand: brand.into(),
			nav: Vec::new(),
			indicators: Vec::new(),
			style: Style::default(),
			brand_style: Style::default(),
			active_style: Style::default(),
			direction: TextDirection::Ltr,
		}
	}

	pub fn nav_item(mut self, label: impl Into<String>, active: bool) -> Self {
		self.nav.push(NavItem {
			label: label.into(),
			active,
		});
		self
	}

	pub fn indicator(mut self, text: impl Into<String>) -> Self {
		self.indicators.push(text.into());
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn brand_style(mut self, style: Style) -> Self {
		self.brand_style = style;
		self
	}

	pub fn active_style(mut self, style: Style) -> Self {
		self.active_style = style;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	fn nav_line(&self) -> Line<'_> {
		let mut spans = Vec::new();
		for (i, item) in self.nav.iter().enumerate() {
			if i > 0 {
				spans.push(Span::styled("  ", self.style));
			}
			let style = if item.active { self.active_style } else { self.style };
			spans.push(Span::styled(item.label.as_str(), style));
		}
		Line::from(spans)
	}

	fn indicator_line(&self) -> Line<'_> {
		let mut spans = Vec::new();
		for (i, indicator) in self.indicators.iter().enumerate() {
			if i > 0 {
				spans.push(Span::styled(" ", self.style));
			}
			spans.push(Span::styled(indicator.as_str(), self.style));
		}
		Line::from(spans)
	}
}

impl Widget for Header {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 || area.width == 0 {
			return;
		}

		buf.set_style(area, self.style);

		let is_rtl = self.direction.is_rtl();

		let brand_width = UnicodeWidthStr::width(self.brand.as_str()) as u16;
		let nav_line = self.nav_line();
		let nav_width = nav_line.width() as u16;
		let indicator_line = self.indicator_line();
		let indicator_width = indicator_line.width() as u16;

		let brand_x = if is_rtl {
			area.right().saturating_sub(brand_width)
		} else {
			area.x
		};
		let brand_line = Line::from(Span::styled(self.brand.as_str(), self.brand_style));
		buf.set_line(brand_x, area.y, &brand_line, brand_width);

		if indicator_width > 0 {
			let indicator_x = if is_rtl {
				area.x
			} else {
				area.right().saturating_sub(indicator_width)
			};
			buf.set_line(indicator_x, area.y, &indicator_line, indicator_width);
		}

		// Nav entries centered between the brand and the indicators.
		let reserved = brand_width + indicator_width + 4;
		let center_width = area.width.saturating_sub(reserved);
		if nav_width > 0 && nav_width <= center_width {
			let center_start = if is_rtl {
				area.x + indicator_width + 2
			} else {
				area.x + brand_width + 2
			};
			let nav_x = center_start + (center_width - nav_width) / 2;
			buf.set_line(nav_x, area.y, &nav_line, nav_width);
		}
	}
}
