// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and direction support.

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Left-to-right (e.g., English, French)
	Ltr,
	/// Right-to-left (e.g., Arabic)
	Rtl,
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 language code (e.g., "en", "fr", "ar")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	/// Text direction
	pub direction: Direction,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en";

/// All supported locales, in language-selector display order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "es",
		name: "Spanish",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "de",
		name: "German",
		native_name: "Deutsch",
		direction: Direction::Ltr,
	},
];

/// Get metadata for a locale.
///
/// Returns `None` if the locale is not supported.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Check if a locale uses right-to-left text direction.
///
/// Returns `false` for unsupported locales.
pub fn is_rtl(locale: &str) -> bool {
	locale_info(locale).is_some_and(|info| info.direction == Direction::Rtl)
}

/// Check if a locale is supported.
pub fn is_supported(locale: &str) -> bool {
	LOCALES.iter().any(|l| l.code == locale)
}

/// Get all supported locales.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locale_info_found() {
		let info = locale_info("fr").unwrap();
		assert_eq!(info.code, "fr");
		assert_eq!(info.name, "French");
		assert_eq!(info.native_name, "Français");
		assert_eq!(info.direction, Direction::Ltr);
	}

	#[test]
	fn test_locale_info_not_found() {
		assert!(locale_info("xx").is_none());
		assert!(locale_info("he").is_none());
	}

	#[test]
	fn test_is_rtl() {
		assert!(!is_rtl("en"));
		assert!(!is_rtl("fr"));
		assert!(is_rtl("ar"));
		assert!(!is_rtl("es"));
		assert!(!is_rtl("de"));
		assert!(!is_rtl("unknown"));
	}

	#[test]
	fn test_is_supported() {
		assert!(is_supported("en"));
		assert!(is_supported("fr"));
		assert!(is_supported("ar"));
		assert!(is_supported("es"));
		assert!(is_supported("de"));
		assert!(!is_supported("pt"));
		assert!(!is_supported(""));
		assert!(!is_supported("EN"));
	}

	#[test]
	fn test_available_locales_order_matches_selector() {
		let codes: Vec<&str> = available_locales().iter().map(|l| l.code).collect();
		assert_eq!(codes, vec!["en", "fr", "ar", "es", "de"]);
	}

	#[test]
	fn test_default_locale_is_supported() {
		assert!(is_supported(DEFAULT_LOCALE));
	}
}
