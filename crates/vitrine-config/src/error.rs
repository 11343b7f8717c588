// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

/// Errors that can occur while resolving or writing preferences.
///
/// Reading has no error type: the store degrades to defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// I/O error touching the preference file
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// TOML serialization error
	#[error("TOML serialize error: {0}")]
	TomlSerialize(#[from] toml::ser::Error),

	/// Home directory not found
	#[error("Could not determine home directory")]
	HomeDirNotFound,
}
