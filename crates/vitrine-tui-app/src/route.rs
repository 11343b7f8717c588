// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route parsing and catalog-backed resolution.
//!
//! Paths mirror the public site: `/`, `/contact`, `/secteurs/{sector}` and
//! `/secteurs/{sector}/solutions/{solution}`. Slugs are only checked against
//! the catalog at resolution time, so a stale deep link degrades to the
//! nearest valid parent instead of an error view.

use vitrine_content::{find_sector_by_slug, find_solution_by_slug, Sector, Solution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Home,
	Contact,
	Sector { sector: String },
	Solution { sector: String, solution: String },
}

impl Route {
	/// Parse a URL-style path. Unknown shapes fall back to the home route.
	pub fn parse(path: &str) -> Self {
		let segments: Vec<&str> = path
			.trim()
			.split('/')
			.filter(|segment| !segment.is_empty())
			.collect();

		match segments.as_slice() {
			[] => Route::Home,
			["contact"] => Route::Contact,
			["secteurs", sector] => Route::Sector {
				sector: (*sector).to_string(),
			},
			["secteurs", sector, "solutions", solution] => Route::Solution {
				sector: (*sector).to_string(),
				solution: (*solution).to_string(),
			},
			_ => {
				tracing::debug!(path, "unrecognized path, falling back to home");
				Route::Home
			}
		}
	}

	pub fn path(&self) -> String {
		match self {
			Route::Home => "/".to_string(),
			Route::Contact => "/contact".to_string(),
			Route::Sector { sector } => format!("/secteurs/{sector}"),
			Route::Solution { sector, solution } => {
				format!("/secteurs/{sector}/solutions/{solution}")
			}
		}
	}
}

/// What a route points at once checked against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
	Home,
	/// Home, scrolled to the sector listing. Target of slug redirects.
	SectorsListing,
	Contact,
	Sector(&'static Sector),
	Solution(&'static Sector, &'static Solution),
}

pub fn resolve(route: &Route) -> Resolution {
	match route {
		Route::Home => Resolution::Home,
		Route::Contact => Resolution::Contact,
		Route::Sector { sector } => match find_sector_by_slug(sector) {
			Some(found) => Resolution::Sector(found),
			None => {
				tracing::debug!(slug = %sector, "unknown sector, redirecting to listing");
				Resolution::SectorsListing
			}
		},
		Route::Solution { sector, solution } => match find_sector_by_slug(sector) {
			None => {
				tracing::debug!(slug = %sector, "unknown sector, redirecting to listing");
				Resolution::SectorsListing
			}
			Some(parent) => match find_solution_by_slug(sector, solution) {
				Some(found) => Resolution::Solution(parent, found),
				None => {
					tracing::debug!(
						sector = %sector,
						slug = %solution,
						"unknown solution, redirecting to its sector"
					);
					Resolution::Sector(parent)
				}
			},
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_shapes() {
		assert_eq!(Route::parse("/"), Route::Home);
		assert_eq!(Route::parse("/contact"), Route::Contact);
		assert_eq!(
			Route::parse("/secteurs/cybersecurite"),
			Route::Sector {
				sector: "cybersecurite".to_string()
			}
		);
		assert_eq!(
			Route::parse("/secteurs/cybersecurite/solutions/audit-pentesting"),
			Route::Solution {
				sector: "cybersecurite".to_string(),
				solution: "audit-pentesting".to_string()
			}
		);
	}

	#[test]
	fn test_parse_tolerates_extra_slashes() {
		assert_eq!(
			Route::parse("/secteurs/telecommunications/"),
			Route::Sector {
				sector: "telecommunications".to_string()
			}
		);
		assert_eq!(Route::parse(""), Route::Home);
		assert_eq!(Route::parse("//"), Route::Home);
	}

	#[test]
	fn test_parse_unknown_shape_is_home() {
		assert_eq!(Route::parse("/about"), Route::Home);
		assert_eq!(Route::parse("/secteurs/a/b"), Route::Home);
		assert_eq!(Route::parse("/secteurs/a/solutions/b/c"), Route::Home);
	}

	#[test]
	fn test_path_round_trips() {
		let routes = [
			Route::Home,
			Route::Contact,
			Route::Sector {
				sector: "lms-e-learning".to_string(),
			},
			Route::Solution {
				sector: "intelligence-artificielle".to_string(),
				solution: "computer-vision".to_string(),
			},
		];
		for route in routes {
			assert_eq!(Route::parse(&route.path()), route);
		}
	}

	#[test]
	fn test_resolve_known_slugs() {
		match resolve(&Route::parse("/secteurs/cybersecurite")) {
			Resolution::Sector(sector) => assert_eq!(sector.slug, "cybersecurite"),
			other => panic!("expected sector, got {other:?}"),
		}
		match resolve(&Route::parse("/secteurs/cybersecurite/solutions/audit-pentesting")) {
			Resolution::Solution(sector, solution) => {
				assert_eq!(sector.slug, "cybersecurite");
				assert_eq!(solution.slug, "audit-pentesting");
			}
			other => panic!("expected solution, got {other:?}"),
		}
	}

	#[test]
	fn test_unknown_sector_redirects_to_listing() {
		assert_eq!(
			resolve(&Route::parse("/secteurs/blockchain")),
			Resolution::SectorsListing
		);
	}

	#[test]
	fn test_unknown_solution_redirects_to_parent_sector() {
		match resolve(&Route::parse("/secteurs/cybersecurite/solutions/nonexistent")) {
			Resolution::Sector(sector) => assert_eq!(sector.slug, "cybersecurite"),
			other => panic!("expected parent sector, got {other:?}"),
		}
	}

	#[test]
	fn test_unknown_sector_wins_over_solution() {
		assert_eq!(
			resolve(&Route::parse("/secteurs/blockchain/solutions/audit-pentesting")),
			Resolution::SectorsListing
		);
	}
}
