// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language and theme preference persistence.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vitrine_i18n::{is_supported, DEFAULT_LOCALE};

use crate::error::ConfigError;
use crate::paths::preferences_path;

/// Interface theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
	#[default]
	Dark,
	Light,
}

impl ThemeChoice {
	/// The other theme.
	pub fn toggled(self) -> Self {
		match self {
			ThemeChoice::Dark => ThemeChoice::Light,
			ThemeChoice::Light => ThemeChoice::Dark,
		}
	}

	/// Wire name, matching the serialized form.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeChoice::Dark => "dark",
			ThemeChoice::Light => "light",
		}
	}

	/// Parse a wire name. Unknown names yield `None`.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"dark" => Some(ThemeChoice::Dark),
			"light" => Some(ThemeChoice::Light),
			_ => None,
		}
	}
}

impl fmt::Display for ThemeChoice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// User preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
	pub language: String,
	pub theme: ThemeChoice,
}

impl Default for Preferences {
	fn default() -> Self {
		Self {
			language: DEFAULT_LOCALE.to_string(),
			theme: ThemeChoice::default(),
		}
	}
}

/// Tolerant mirror of the on-disk document. Fields the application no
/// longer understands degrade individually instead of rejecting the file.
#[derive(Debug, Default, Deserialize)]
struct RawPreferences {
	language: Option<String>,
	theme: Option<String>,
}

/// Reads and writes the preference file.
///
/// Loading never fails: corrupt or stale state falls back to defaults so
/// the interface always starts. Saving reports errors to the caller, who
/// is expected to log and carry on.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
	path: PathBuf,
}

impl PreferenceStore {
	/// Store backed by the standard XDG location.
	pub fn from_env() -> Result<Self, ConfigError> {
		Ok(Self {
			path: preferences_path()?,
		})
	}

	/// Store backed by an explicit file path.
	pub fn at_path(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Load preferences, degrading to defaults where needed.
	pub fn load(&self) -> Preferences {
		let text = match fs::read_to_string(&self.path) {
			Ok(text) => text,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				tracing::debug!(path = %self.path.display(), "no preference file, using defaults");
				return Preferences::default();
			}
			Err(e) => {
				tracing::warn!(
					path = %self.path.display(),
					error = %e,
					"failed to read preferences, using defaults"
				);
				return Preferences::default();
			}
		};

		let raw: RawPreferences = match toml::from_str(&text) {
			Ok(parsed) => parsed,
			Err(e) => {
				tracing::warn!(
					path = %self.path.display(),
					error = %e,
					"failed to parse preferences, using defaults"
				);
				RawPreferences::default()
			}
		};

		let mut prefs = Preferences::default();

		if let Some(language) = raw.language {
			if is_supported(&language) {
				prefs.language = language;
			} else {
				tracing::debug!(language, "stored language is not supported, keeping default");
			}
		}

		if let Some(theme) = raw.theme {
			match ThemeChoice::from_name(&theme) {
				Some(parsed) => prefs.theme = parsed,
				None => tracing::debug!(theme, "stored theme is not recognized, keeping default"),
			}
		}

		prefs
	}

	/// Persist preferences, creating the parent directory as needed.
	pub fn save(&self, prefs: &Preferences) -> Result<(), ConfigError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}

		let body = toml::to_string_pretty(prefs)?;
		fs::write(&self.path, body)?;

		tracing::debug!(path = %self.path.display(), "preferences saved");
		Ok(())
	}
}
