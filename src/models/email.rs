// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Structural email check used for inline field feedback.

use std::sync::LazyLock;

use regex::Regex;

// Deliberately loose: `local@domain.tld` with no whitespace or extra `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Return `true` when `value` looks like `local@domain.tld`.
///
/// This is a single structural pass, not an RFC 5322 parser. No DNS or
/// deliverability checks are made.
///
/// # Examples
///
/// ```
/// use formcheck::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email(""));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
