// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Solution detail: long-form prose, advantage/client/feature/use-case
//! sections, the media gallery, and the quote call-to-action.

use crossterm::event::KeyCode;
use ratatui::{
	layout::Rect,
	text::{Line, Span},
	widgets::{Paragraph, Wrap},
	Frame,
};

use vitrine_content::{MediaKind, Sector, Solution};
use vitrine_tui_component::{Component, RenderContext};
use vitrine_tui_core::{Action, Event};

use super::text_alignment;

const PAGE: u16 = 5;

pub struct SolutionScreen {
	sector: &'static Sector,
	solution: &'static Solution,
	scroll: u16,
}

impl SolutionScreen {
	pub fn new(sector: &'static Sector, solution: &'static Solution) -> Self {
		Self {
			sector,
			solution,
			scroll: 0,
		}
	}

	pub fn sector(&self) -> &'static Sector {
		self.sector
	}

	pub fn scroll(&self) -> u16 {
		self.scroll
	}

	fn content_lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
		let theme = ctx.theme;
		let mut lines = vec![
			Line::styled(self.solution.title.clone(), theme.accent_text()),
			Line::raw(""),
			Line::styled(self.solution.full_description.clone(), theme.text.normal),
			Line::raw(""),
		];

		let mut section = |title: String, items: &[String], bullet: &str, style| {
			if items.is_empty() {
				return;
			}
			lines.push(Line::styled(title, theme.text.bold));
			for item in items {
				lines.push(Line::from(vec![
					Span::styled(format!("  {bullet} "), style),
					Span::styled(item.clone(), theme.text.normal),
				]));
			}
			lines.push(Line::raw(""));
		};

		section(
			ctx.t("solutions.advantages"),
			&self.solution.advantages,
			"✓",
			theme.success_text(),
		);
		section(
			ctx.t("solutions.clients"),
			&self.solution.target_clients,
			"•",
			theme.text.dim,
		);
		section(
			ctx.t("solutions.features"),
			&self.solution.features,
			"•",
			theme.text.dim,
		);
		section(
			ctx.t("solutions.usecases"),
			&self.solution.use_cases,
			"•",
			theme.text.dim,
		);

		if !self.solution.media.is_empty() {
			lines.push(Line::styled(ctx.t("solutions.demos"), theme.text.bold));
			for item in &self.solution.media {
				let glyph = match item.kind {
					MediaKind::Video => "▶",
					MediaKind::Image => "◆",
				};
				let label = item.title.clone().unwrap_or_else(|| item.url.clone());
				lines.push(Line::from(vec![
					Span::styled(format!("  {glyph} "), theme.accent_text()),
					Span::styled(label, theme.text.normal),
				]));
			}
			lines.push(Line::raw(""));
		}

		lines.push(Line::styled(ctx.t("solutions.cta.title"), theme.text.bold));
		lines.push(Line::styled(
			ctx.t("solutions.cta.description"),
			theme.text.dim,
		));
		lines.push(Line::from(vec![
			Span::styled(
				format!("[ {} ]", ctx.t("solutions.cta.button")),
				theme.selection_style(),
			),
			Span::styled("  ⏎", theme.text.dim),
		]));

		lines
	}
}

/// Rows the lines occupy once wrapped to `width`, rounded up per line so
/// scroll clamping never hides reachable content.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
	let width = width.max(1) as usize;
	lines
		.iter()
		.map(|line| {
			let cols = line.width().max(1);
			((cols - 1) / width + 1) as u16
		})
		.sum()
}

impl Component for SolutionScreen {
	fn id(&self) -> &str {
		"solution"
	}

	fn handle_event(&mut self, event: &Event) -> Vec<Action> {
		let Event::Key(key) = event else {
			return vec![];
		};
		match key.code {
			KeyCode::Up => {
				self.scroll = self.scroll.saturating_sub(1);
				vec![]
			}
			KeyCode::Down => {
				self.scroll = self.scroll.saturating_add(1);
				vec![]
			}
			KeyCode::PageUp => {
				self.scroll = self.scroll.saturating_sub(PAGE);
				vec![]
			}
			KeyCode::PageDown => {
				self.scroll = self.scroll.saturating_add(PAGE);
				vec![]
			}
			KeyCode::Enter => vec![Action::navigate("/contact")],
			_ => vec![],
		}
	}

	fn update(&mut self, _action: &Action) -> Vec<Action> {
		vec![]
	}

	fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
		let lines = self.content_lines(ctx);
		let max_scroll = wrapped_height(&lines, area.width).saturating_sub(area.height);
		self.scroll = self.scroll.min(max_scroll);

		let body = Paragraph::new(lines)
			.wrap(Wrap { trim: true })
			.scroll((self.scroll, 0))
			.alignment(text_alignment(ctx));
		frame.render_widget(body, area);
	}
}
