// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field-level validation and input normalization.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::models::email::is_valid_email;
use crate::models::phone::format_phone_number;

/// Error shown when an email field fails the structural check.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Built-in formatting/validation behavior attached to a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    None,
    Phone,
    Email,
}

/// Verdict for a single field. Defaults to valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Caller-supplied validator. Returns `Some(message)` to reject the value;
/// `None` or an empty string accepts it.
#[derive(Clone)]
pub struct CustomValidator(Arc<dyn Fn(&str) -> Option<String> + Send + Sync>);

impl CustomValidator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the validator, folding empty messages into "valid".
    pub fn check(&self, value: &str) -> Option<String> {
        (self.0)(value).filter(|msg| !msg.is_empty())
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}

// Two validators are equal only when they share the same closure.
impl PartialEq for CustomValidator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for CustomValidator {}

/// Decide whether `value` passes for a field.
///
/// - An untouched field is always valid so errors stay hidden until the
///   first blur or an explicit re-validation.
/// - A custom validator, when present, has the final say.
/// - Otherwise a non-empty `Email` field must pass [`is_valid_email`].
///
/// # Examples
///
/// ```
/// use formcheck::{FormatKind, validate_field};
///
/// assert!(validate_field("bad-email", false, None, FormatKind::Email).is_valid);
/// assert!(!validate_field("bad-email", true, None, FormatKind::Email).is_valid);
/// assert!(validate_field("a@b.com", true, None, FormatKind::Email).is_valid);
/// ```
pub fn validate_field(
    value: &str,
    touched: bool,
    custom: Option<&CustomValidator>,
    format: FormatKind,
) -> ValidationOutcome {
    if !touched {
        return ValidationOutcome::valid();
    }

    if let Some(validator) = custom {
        return match validator.check(value) {
            Some(message) => ValidationOutcome::invalid(message),
            None => ValidationOutcome::valid(),
        };
    }

    if format == FormatKind::Email && !value.is_empty() && !is_valid_email(value) {
        return ValidationOutcome::invalid(INVALID_EMAIL_MESSAGE);
    }

    ValidationOutcome::valid()
}

/// Keep at most `max_chars` characters. `None` or `Some(0)` means no limit.
pub fn truncate_chars(value: &str, max_chars: Option<usize>) -> String {
    match max_chars.filter(|max| *max > 0) {
        Some(max) => value.chars().take(max).collect(),
        None => value.to_string(),
    }
}

/// Apply the per-keystroke transformation: phone mask first, then the
/// character limit.
pub fn normalize_input(raw: &str, format: FormatKind, max_chars: Option<usize>) -> String {
    let formatted = match format {
        FormatKind::Phone => format_phone_number(raw),
        FormatKind::None | FormatKind::Email => raw.to_string(),
    };
    truncate_chars(&formatted, max_chars)
}
