// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Slug derivation for catalog titles.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a URL-safe slug from a display title.
///
/// The title is lowercased, decomposed (NFD) so accented letters lose their
/// diacritics, and every run of characters outside `[a-z0-9]` collapses into
/// a single hyphen. Leading and trailing hyphens are dropped.
///
/// # Example
///
/// ```
/// use vitrine_content::slugify;
///
/// assert_eq!(slugify("Télécommunications"), "telecommunications");
/// assert_eq!(slugify("LMS & E-Learning"), "lms-e-learning");
/// assert_eq!(
///     slugify("Traitement du Langage Naturel (NLP)"),
///     "traitement-du-langage-naturel-nlp"
/// );
/// ```
pub fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	let mut pending_hyphen = false;

	for ch in text.nfd() {
		if is_combining_mark(ch) {
			continue;
		}

		for lower in ch.to_lowercase() {
			if lower.is_ascii_alphanumeric() {
				if pending_hyphen && !slug.is_empty() {
					slug.push('-');
				}
				pending_hyphen = false;
				slug.push(lower);
			} else {
				pending_hyphen = true;
			}
		}
	}

	slug
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_slugify_basic() {
		assert_eq!(slugify("Intelligence Artificielle"), "intelligence-artificielle");
		assert_eq!(slugify("Computer Vision"), "computer-vision");
	}

	#[test]
	fn test_slugify_strips_accents() {
		assert_eq!(slugify("Télécommunications"), "telecommunications");
		assert_eq!(slugify("Cybersécurité"), "cybersecurite");
		assert_eq!(slugify("Plateforme LMS Complète"), "plateforme-lms-complete");
	}

	#[test]
	fn test_slugify_collapses_punctuation() {
		assert_eq!(slugify("LMS & E-Learning"), "lms-e-learning");
		assert_eq!(slugify("IoT & Connectivité"), "iot-connectivite");
		assert_eq!(slugify("E-Commerce & Marketplaces"), "e-commerce-marketplaces");
	}

	#[test]
	fn test_slugify_drops_parentheses() {
		assert_eq!(
			slugify("Traitement du Langage Naturel (NLP)"),
			"traitement-du-langage-naturel-nlp"
		);
		assert_eq!(
			slugify("Applications Web Progressives (PWA)"),
			"applications-web-progressives-pwa"
		);
	}

	#[test]
	fn test_slugify_trims_edges() {
		assert_eq!(slugify("  hello  "), "hello");
		assert_eq!(slugify("(5G)"), "5g");
		assert_eq!(slugify("---"), "");
		assert_eq!(slugify(""), "");
	}

	proptest! {
		/// Slugs only ever contain lowercase alphanumerics and inner hyphens.
		#[test]
		fn slug_alphabet_is_closed(text in "\\PC{0,60}") {
			let slug = slugify(&text);
			prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
			prop_assert!(!slug.starts_with('-'));
			prop_assert!(!slug.ends_with('-'));
			prop_assert!(!slug.contains("--"));
		}

		/// Slugifying a slug changes nothing.
		#[test]
		fn slugify_is_idempotent(text in "\\PC{0,60}") {
			let slug = slugify(&text);
			prop_assert_eq!(slugify(&slug), slug);
		}
	}
}
