// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the AIUNIVERS showcase.
//!
//! This crate provides translation support for every user-facing string in
//! the application. It supports both left-to-right (LTR) and right-to-left
//! (RTL) languages.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format:
//!
//! - `nav.` prefix for navigation labels
//! - `home.` prefix for home screen sections
//! - `footer.` prefix for footer strings
//! - `contact.` prefix for the contact screen and form
//! - `sectors.` / `solutions.` prefixes for the catalog detail screens
//! - `status.` prefix for status-bar shortcut labels
//!
//! Example: `contact.form.success`
//!
//! # Example
//!
//! ```
//! use vitrine_i18n::{t, t_fmt, is_rtl, resolve_locale};
//!
//! // Simple translation
//! let title = t("fr", "contact.form.title");
//!
//! // Translation with variables
//! let counter = t_fmt("fr", "contact.form.char_count", &[
//!     ("count", "42"),
//!     ("max", "1000"),
//! ]);
//!
//! // Check for RTL language
//! if is_rtl("ar") {
//!     // Mirror the layout
//! }
//!
//! // Resolve the effective locale
//! let locale = resolve_locale(Some("es"), "en");
//! ```

mod catalog;
mod locale;
mod resolve;

pub use catalog::{t, t_fmt};
pub use locale::{available_locales, is_rtl, is_supported, locale_info, Direction, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
