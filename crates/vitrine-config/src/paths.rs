// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

/// Resolve the preference file path.
///
/// Uses `XDG_CONFIG_HOME` if set, otherwise falls back to `~/.config`:
/// the file lives at `$XDG_CONFIG_HOME/vitrine/preferences.toml`.
pub fn preferences_path() -> Result<PathBuf, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	tracing::debug!(config_home = %config_home.display(), "resolved XDG config home");

	Ok(config_home.join("vitrine/preferences.toml"))
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Path resolution works in the test environment without panicking.
	#[test]
	fn test_preferences_path_succeeds() {
		let result = preferences_path();
		assert!(result.is_ok());

		let path = result.unwrap();
		assert!(path.to_string_lossy().contains("vitrine"));
		assert!(path.ends_with("vitrine/preferences.toml"));
	}
}
