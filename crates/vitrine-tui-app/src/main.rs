// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod app;
mod keymap;
mod layout;
mod route;
mod screens;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use vitrine_config::{PreferenceStore, ThemeChoice};
use vitrine_tui_storybook::{run_tui_app, TuiApp};

use app::App;

const TICK_RATE: Duration = Duration::from_millis(100);

/// AIUNIVERS company showcase for the terminal.
#[derive(Parser, Debug)]
#[command(name = "vitrine", about = "AIUNIVERS company showcase", version)]
struct Args {
	/// Path to open on launch, e.g. `/secteurs/cybersecurite`.
	#[arg(long, default_value = "/")]
	route: String,

	/// Language override for this session (not saved).
	#[arg(long)]
	language: Option<String>,

	/// Theme override for this session (not saved).
	#[arg(long, value_enum)]
	theme: Option<ThemeArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
	Dark,
	Light,
}

impl From<ThemeArg> for ThemeChoice {
	fn from(arg: ThemeArg) -> Self {
		match arg {
			ThemeArg::Dark => ThemeChoice::Dark,
			ThemeArg::Light => ThemeChoice::Light,
		}
	}
}

struct AppWrapper(App);

impl TuiApp for AppWrapper {
	fn render(&mut self, frame: &mut Frame) {
		self.0.render(frame);
	}

	fn on_key(&mut self, key: KeyEvent) {
		self.0.handle_key_event(key);
	}

	fn on_tick(&mut self) {
		self.0.tick();
	}

	fn should_quit(&self) -> bool {
		self.0.should_quit()
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt::init();

	let args = Args::parse();
	let store = PreferenceStore::from_env()?;
	let app = App::with_session(
		store,
		Some(&args.route),
		args.language.as_deref(),
		args.theme.map(ThemeChoice::from),
	);

	run_tui_app(AppWrapper(app), TICK_RATE)
}
