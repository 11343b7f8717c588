// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Transient notifications stacked at a screen corner.
//!
//! Toasts are fire-and-forget: push one into [`ToastState`], tick the state
//! from the application loop, and render [`ToastStack`] last so it overlays
//! the screen. At a 100 ms tick a toast stays fully visible for 3 s, spends
//! a short fade phase dimmed, then is dropped.

use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, Clear, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;
use vitrine_tui_core::TextDirection;
use vitrine_tui_theme::Theme;

/// Ticks a toast stays fully visible.
pub const VISIBLE_TICKS: u32 = 30;
/// Ticks of the dimmed fade-out phase that follows.
pub const FADE_TICKS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
	Success,
	Error,
	Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastAnchor {
	TopLeft,
	TopRight,
	BottomLeft,
	#[default]
	BottomRight,
}

impl ToastAnchor {
	/// RTL mirrors the anchor to the opposite horizontal edge.
	pub fn resolve(self, direction: TextDirection) -> Self {
		if !direction.is_rtl() {
			return self;
		}
		match self {
			ToastAnchor::TopLeft => ToastAnchor::TopRight,
			ToastAnchor::TopRight => ToastAnchor::TopLeft,
			ToastAnchor::BottomLeft => ToastAnchor::BottomRight,
			ToastAnchor::BottomRight => ToastAnchor::BottomLeft,
		}
	}

	fn is_top(self) -> bool {
		matches!(self, ToastAnchor::TopLeft | ToastAnchor::TopRight)
	}

	fn is_left(self) -> bool {
		matches!(self, ToastAnchor::TopLeft | ToastAnchor::BottomLeft)
	}
}

#[derive(Debug, Clone)]
pub struct Toast {
	pub message: String,
	pub description: Option<String>,
	pub variant: ToastVariant,
}

impl Toast {
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			description: None,
			variant: ToastVariant::Success,
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			description: None,
			variant: ToastVariant::Error,
		}
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			description: None,
			variant: ToastVariant::Info,
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

#[derive(Debug, Clone)]
struct ActiveToast {
	toast: Toast,
	age: u32,
}

impl ActiveToast {
	fn is_fading(&self) -> bool {
		self.age >= VISIBLE_TICKS
	}

	fn is_expired(&self) -> bool {
		self.age >= VISIBLE_TICKS + FADE_TICKS
	}
}

#[derive(Debug, Default, Clone)]
pub struct ToastState {
	toasts: Vec<ActiveToast>,
}

impl ToastState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fire-and-forget: no coalescing, overlapping pushes stack in insertion
	/// order.
	pub fn push(&mut self, toast: Toast) {
		self.toasts.push(ActiveToast { toast, age: 0 });
	}

	pub fn tick(&mut self) {
		for active in &mut self.toasts {
			active.age += 1;
		}
		self.toasts.retain(|active| !active.is_expired());
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}

	pub fn len(&self) -> usize {
		self.toasts.len()
	}
}

#[derive(Debug, Clone, Default)]
pub struct ToastStack {
	anchor: ToastAnchor,
	theme: Theme,
	direction: TextDirection,
}

impl ToastStack {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn anchor(mut self, anchor: ToastAnchor) -> Self {
		self.anchor = anchor;
		self
	}

	pub fn theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn direction(mut self, direction: TextDirection) -> Self {
		self.direction = direction;
		self
	}

	fn border_style(&self, variant: ToastVariant) -> Style {
		match variant {
			ToastVariant::Success => Style::default().fg(self.theme.colors.success),
			ToastVariant::Error => Style::default().fg(self.theme.colors.error),
			ToastVariant::Info => Style::default().fg(self.theme.colors.accent),
		}
	}
}

impl StatefulWidget for ToastStack {
	type State = ToastState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if state.toasts.is_empty() || area.width < 8 || area.height < 3 {
			return;
		}

		let anchor = self.anchor.resolve(self.direction);
		let max_width = (area.width.saturating_sub(4)).min(44);

		// First pushed renders closest to the anchor edge.
		let mut next_y = if anchor.is_top() {
			area.y + 1
		} else {
			area.bottom().saturating_sub(1)
		};

		for active in &state.toasts {
			let toast = &active.toast;
			let message_width = UnicodeWidthStr::width(toast.message.as_str()) as u16;
			let desc_width = toast
				.description
				.as_ref()
				.map(|d| UnicodeWidthStr::width(d.as_str()) as u16)
				.unwrap_or(0);
			let width = (message_width.max(desc_width) + 4).min(max_width);
			let height = if toast.description.is_some() { 4 } else { 3 };

			let x = if anchor.is_left() {
				area.x + 1
			} else {
				area.right().saturating_sub(width + 1)
			};
			let y = if anchor.is_top() {
				let y = next_y;
				next_y = next_y.saturating_add(height);
				if y + height > area.bottom() {
					break;
				}
				y
			} else {
				if next_y < area.y + height {
					break;
				}
				next_y -= height;
				next_y
			};

			let toast_area = Rect::new(x, y, width, height);
			Clear.render(toast_area, buf);

			let mut border_style = self.border_style(toast.variant);
			let mut text_style = Style::default().fg(self.theme.colors.text);
			if active.is_fading() {
				border_style = border_style.add_modifier(Modifier::DIM);
				text_style = text_style.add_modifier(Modifier::DIM);
			}

			let block = Block::default()
				.borders(Borders::ALL)
				.border_style(border_style)
				.style(Style::default().bg(self.theme.colors.surface));
			let inner = block.inner(toast_area);
			block.render(toast_area, buf);

			let message_line = Line::from(Span::styled(
				toast.message.as_str(),
				text_style.add_modifier(Modifier::BOLD),
			));
			buf.set_line(inner.x + 1, inner.y, &message_line, inner.width.saturating_sub(2));

			if let Some(ref description) = toast.description {
				if inner.height > 1 {
					let desc_line = Line::from(Span::styled(
						description.as_str(),
						text_style.add_modifier(Modifier::DIM),
					));
					buf.set_line(inner.x + 1, inner.y + 1, &desc_line, inner.width.saturating_sub(2));
				}
			}
		}
	}
}
