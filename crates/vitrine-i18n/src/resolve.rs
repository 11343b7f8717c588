// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{is_supported, DEFAULT_LOCALE};

/// Resolve the effective locale from user preference and application default.
///
/// Resolution order (highest to lowest priority):
/// 1. User's stored locale preference (if valid)
/// 2. Application default locale (if valid)
/// 3. Fallback to English ("en")
///
/// # Arguments
///
/// * `user_locale` - User's preferred locale from the preference store or CLI
///   (may be None or invalid)
/// * `app_default` - Application default locale
///
/// # Returns
///
/// A valid locale code that is guaranteed to be supported.
///
/// # Example
///
/// ```
/// use vitrine_i18n::resolve_locale;
///
/// // User preference takes priority
/// assert_eq!(resolve_locale(Some("fr"), "en"), "fr");
///
/// // Falls back to application default if user has no preference
/// assert_eq!(resolve_locale(None, "es"), "es");
///
/// // Falls back to English if both are invalid
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
/// ```
pub fn resolve_locale(user_locale: Option<&str>, app_default: &str) -> &'static str {
	if let Some(locale) = user_locale {
		if is_supported(locale) {
			return locale_to_static(locale);
		}
	}

	if is_supported(app_default) {
		return locale_to_static(app_default);
	}

	DEFAULT_LOCALE
}

fn locale_to_static(locale: &str) -> &'static str {
	match locale {
		"en" => "en",
		"fr" => "fr",
		"ar" => "ar",
		"es" => "es",
		"de" => "de",
		_ => DEFAULT_LOCALE,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_preference_takes_priority() {
		assert_eq!(resolve_locale(Some("fr"), "en"), "fr");
		assert_eq!(resolve_locale(Some("ar"), "en"), "ar");
		assert_eq!(resolve_locale(Some("de"), "es"), "de");
	}

	#[test]
	fn test_app_default_when_no_user_preference() {
		assert_eq!(resolve_locale(None, "es"), "es");
		assert_eq!(resolve_locale(None, "ar"), "ar");
	}

	#[test]
	fn test_fallback_to_english_when_user_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "en"), "en");
		assert_eq!(resolve_locale(Some("pt"), "en"), "en");
	}

	#[test]
	fn test_fallback_to_english_when_both_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), "en");
		assert_eq!(resolve_locale(None, "invalid"), "en");
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some(""), "en"), "en");
		assert_eq!(resolve_locale(None, ""), "en");
	}
}
