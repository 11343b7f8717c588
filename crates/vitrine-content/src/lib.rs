// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sector and solution catalog for the AIUNIVERS showcase.
//!
//! This crate holds the static company catalog: five business sectors, each
//! carrying a set of solutions, plus the partner and technology rosters shown
//! on the home screen. Every entry is addressable by a URL-safe slug derived
//! from its title.
//!
//! Catalog prose is authored in French regardless of the interface locale;
//! only interface chrome is translated.
//!
//! # Example
//!
//! ```
//! use vitrine_content::{find_sector_by_slug, find_solution_by_slug};
//!
//! let sector = find_sector_by_slug("cybersecurite").unwrap();
//! assert_eq!(sector.title, "Cybersécurité");
//!
//! let solution = find_solution_by_slug("cybersecurite", "audit-pentesting").unwrap();
//! assert_eq!(solution.title, "Audit & Pentesting");
//! ```

pub mod data;
pub mod model;
pub mod slug;

pub use data::{
	find_sector_by_slug, find_solution_by_slug, sectors, PARTNERS, TECHNOLOGIES,
};
pub use model::{IconId, MediaItem, MediaKind, Sector, Solution};
pub use slug::slugify;
