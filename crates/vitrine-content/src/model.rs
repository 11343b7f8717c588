// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// Abstract icon identifier rendered by the presentation layer.
///
/// The catalog names icons; how they are drawn (glyph choice, color) is
/// decided by whichever frontend consumes the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
	LightBulb,
	ChartBar,
	Chat,
	Eye,
	Wifi,
	Chip,
	DeviceMobile,
	Globe,
	ShoppingBag,
	BookOpen,
	ShieldCheck,
	LockClosed,
}

/// Kind of media attached to a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
	Image,
	Video,
}

/// A single media attachment in a solution's gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
	pub kind: MediaKind,
	pub url: String,
	pub thumbnail: Option<String>,
	pub title: Option<String>,
}

/// A single offering inside a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
	pub title: String,
	/// Short teaser shown on listing cards.
	pub description: String,
	/// Long-form prose shown on the solution detail view.
	pub full_description: String,
	/// URL-safe identifier derived from the title.
	pub slug: String,
	pub icon: IconId,
	/// Hero image path.
	pub image: String,
	pub media: Vec<MediaItem>,
	pub advantages: Vec<String>,
	pub target_clients: Vec<String>,
	pub features: Vec<String>,
	pub use_cases: Vec<String>,
}

/// A business sector grouping related solutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
	pub title: String,
	/// Short teaser shown on listing cards.
	pub description: String,
	/// Long-form prose shown on the sector detail view.
	pub full_description: String,
	/// URL-safe identifier derived from the title.
	pub slug: String,
	/// Category label shown on the sector card, e.g. "AI & Data".
	pub badge: String,
	pub icon: IconId,
	pub solutions: Vec<Solution>,
}
