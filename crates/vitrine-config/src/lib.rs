// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Preference persistence for the AIUNIVERS showcase.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - TOML preference file parsing and writing
//! - Tolerant loading: a missing, unreadable, or stale file never blocks
//!   startup, it degrades to defaults field by field

pub mod error;
pub mod paths;
pub mod store;

pub use error::ConfigError;
pub use paths::preferences_path;
pub use store::{PreferenceStore, Preferences, ThemeChoice};
