// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Password strength scoring used by the strength meter.

/// Coarse strength bucket derived from the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Bucket a raw score: `<=2` weak, `3..=4` medium, `>=5` strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    pub fn color_hint(&self) -> ColorHint {
        match self {
            Self::Weak => ColorHint::Red,
            Self::Medium => ColorHint::Amber,
            Self::Strong => ColorHint::Green,
        }
    }
}

/// Opaque color token passed through to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorHint {
    Red,
    Amber,
    Green,
}

impl ColorHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Amber => "amber",
            Self::Green => "green",
        }
    }
}

/// Result of scoring a password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordStrengthResult {
    /// Number of satisfied rules, `0..=6`.
    pub score: u8,
    pub label: StrengthLabel,
    pub color_hint: ColorHint,
    /// Hints for unmet rules, in rule order.
    pub feedback: Vec<&'static str>,
}

pub const MSG_MIN_LENGTH: &str = "At least 8 characters";
pub const MSG_LOWERCASE: &str = "One lowercase letter";
pub const MSG_UPPERCASE: &str = "One uppercase letter";
pub const MSG_DIGIT: &str = "One number";
pub const MSG_SPECIAL: &str = "One special character";

/// Score a password against six independent rules.
///
/// Each of the following adds one point when satisfied: at least 8
/// characters, at least 12 characters, an ASCII lowercase letter, an ASCII
/// uppercase letter, an ASCII digit, and any character that is not ASCII
/// alphanumeric. Every rule except the 12-character bonus contributes a
/// feedback line when unmet.
///
/// # Examples
///
/// ```
/// use formcheck::{StrengthLabel, evaluate_password_strength};
///
/// let result = evaluate_password_strength("Abcdef1!");
/// assert_eq!(result.score, 5);
/// assert_eq!(result.label, StrengthLabel::Strong);
/// assert!(result.feedback.is_empty());
/// ```
pub fn evaluate_password_strength(password: &str) -> PasswordStrengthResult {
    let length = password.chars().count();
    let bonus_length = length >= 12;

    // Order matters: feedback is emitted in this sequence.
    let rules: [(bool, &'static str); 5] = [
        (length >= 8, MSG_MIN_LENGTH),
        (password.chars().any(|c| c.is_ascii_lowercase()), MSG_LOWERCASE),
        (password.chars().any(|c| c.is_ascii_uppercase()), MSG_UPPERCASE),
        (password.chars().any(|c| c.is_ascii_digit()), MSG_DIGIT),
        (password.chars().any(|c| !c.is_ascii_alphanumeric()), MSG_SPECIAL),
    ];

    let mut score = u8::from(bonus_length);
    let mut feedback = Vec::new();
    for (met, message) in rules {
        if met {
            score += 1;
        } else {
            feedback.push(message);
        }
    }

    let label = StrengthLabel::from_score(score);
    PasswordStrengthResult {
        score,
        label,
        color_hint: label.color_hint(),
        feedback,
    }
}
