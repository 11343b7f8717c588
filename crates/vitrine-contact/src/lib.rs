// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form model and validation.
//!
//! The form carries five fields. All except `company` are required;
//! `company` may be left empty but is length-checked once filled in.
//! Validation reports at most one error per field, and error messages
//! localize through [`vitrine_i18n`].
//!
//! Lengths are counted in characters, not bytes, so accented and Arabic
//! input is measured the way users perceive it.
//!
//! # Example
//!
//! ```
//! use vitrine_contact::{ContactForm, FieldId};
//!
//! let mut form = ContactForm::default();
//! form.set_field(FieldId::Name, "Amina Benali");
//! form.set_field(FieldId::Email, "amina@example.com");
//! form.set_field(FieldId::Subject, "Demande de devis");
//! form.set_field(FieldId::Message, "Nous cherchons un partenaire pour un projet IA.");
//!
//! assert!(form.validate().is_empty());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use vitrine_i18n::{t, t_fmt};

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check that an email address is syntactically plausible.
///
/// This validates shape (local part, `@`, domain with a dot), not whether
/// the address actually exists.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

/// Identifies one field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
	Name,
	Email,
	Company,
	Subject,
	Message,
}

impl FieldId {
	/// All fields in form order.
	pub const ALL: [FieldId; 5] = [
		FieldId::Name,
		FieldId::Email,
		FieldId::Company,
		FieldId::Subject,
		FieldId::Message,
	];

	/// Translation key for the field label.
	pub fn label_key(&self) -> &'static str {
		match self {
			FieldId::Name => "contact.form.name",
			FieldId::Email => "contact.form.email",
			FieldId::Company => "contact.form.company",
			FieldId::Subject => "contact.form.subject",
			FieldId::Message => "contact.form.message",
		}
	}

	/// Translation key for the field placeholder.
	pub fn placeholder_key(&self) -> &'static str {
		match self {
			FieldId::Name => "contact.form.name.placeholder",
			FieldId::Email => "contact.form.email.placeholder",
			FieldId::Company => "contact.form.company.placeholder",
			FieldId::Subject => "contact.form.subject.placeholder",
			FieldId::Message => "contact.form.message.placeholder",
		}
	}
}

/// A single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("must contain at least {min} characters")]
	TooShort { min: usize },

	#[error("must contain at most {max} characters")]
	TooLong { max: usize },

	#[error("invalid email address")]
	InvalidEmail,
}

impl ValidationError {
	/// Localized, user-facing message for this failure.
	pub fn message(&self, locale: &str) -> String {
		match self {
			ValidationError::TooShort { min } => {
				t_fmt(locale, "contact.error.too_short", &[("min", &min.to_string())])
			}
			ValidationError::TooLong { max } => {
				t_fmt(locale, "contact.error.too_long", &[("max", &max.to_string())])
			}
			ValidationError::InvalidEmail => t(locale, "contact.error.email"),
		}
	}
}

/// A validation failure attached to the field it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
	pub field: FieldId,
	pub error: ValidationError,
}

/// In-memory contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub company: String,
	pub subject: String,
	pub message: String,
}

impl ContactForm {
	pub const NAME_MIN: usize = 2;
	pub const NAME_MAX: usize = 50;
	pub const COMPANY_MIN: usize = 2;
	pub const COMPANY_MAX: usize = 100;
	pub const SUBJECT_MIN: usize = 5;
	pub const SUBJECT_MAX: usize = 100;
	pub const MESSAGE_MIN: usize = 20;
	pub const MESSAGE_MAX: usize = 1000;

	pub fn new() -> Self {
		Self::default()
	}

	/// Current value of a field.
	pub fn field(&self, id: FieldId) -> &str {
		match id {
			FieldId::Name => &self.name,
			FieldId::Email => &self.email,
			FieldId::Company => &self.company,
			FieldId::Subject => &self.subject,
			FieldId::Message => &self.message,
		}
	}

	/// Replace the value of a field.
	pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
		let value = value.into();
		match id {
			FieldId::Name => self.name = value,
			FieldId::Email => self.email = value,
			FieldId::Company => self.company = value,
			FieldId::Subject => self.subject = value,
			FieldId::Message => self.message = value,
		}
	}

	/// Clear every field back to its initial empty state.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Validate the whole form.
	///
	/// Returns at most one error per field, in form order. An empty result
	/// means the form may be submitted.
	pub fn validate(&self) -> Vec<FieldError> {
		let mut errors = Vec::new();

		if let Some(error) = check_length(&self.name, Self::NAME_MIN, Self::NAME_MAX) {
			errors.push(FieldError {
				field: FieldId::Name,
				error,
			});
		}

		if !is_valid_email(&self.email) {
			errors.push(FieldError {
				field: FieldId::Email,
				error: ValidationError::InvalidEmail,
			});
		}

		// Company is optional: empty passes, anything else is length-checked.
		if !self.company.is_empty() {
			if let Some(error) = check_length(&self.company, Self::COMPANY_MIN, Self::COMPANY_MAX) {
				errors.push(FieldError {
					field: FieldId::Company,
					error,
				});
			}
		}

		if let Some(error) = check_length(&self.subject, Self::SUBJECT_MIN, Self::SUBJECT_MAX) {
			errors.push(FieldError {
				field: FieldId::Subject,
				error,
			});
		}

		if let Some(error) = check_length(&self.message, Self::MESSAGE_MIN, Self::MESSAGE_MAX) {
			errors.push(FieldError {
				field: FieldId::Message,
				error,
			});
		}

		errors
	}

	/// True when [`validate`](Self::validate) reports no errors.
	pub fn is_valid(&self) -> bool {
		self.validate().is_empty()
	}
}

fn check_length(value: &str, min: usize, max: usize) -> Option<ValidationError> {
	let count = value.chars().count();

	if count < min {
		return Some(ValidationError::TooShort { min });
	}

	if count > max {
		return Some(ValidationError::TooLong { max });
	}

	None
}
