// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validation and formatting engine for form components, plus MVU-shaped
//! state for fields, a login form, and a multi-step wizard.
//!
//! The `models` layer is pure; `components` hold per-field state and decide
//! when validation runs. Rendering is left to the host.

pub mod components;
pub mod models;

pub use models::email::is_valid_email;
pub use models::field::{FormatKind, ValidationOutcome, normalize_input, validate_field};
pub use models::password::{PasswordStrengthResult, StrengthLabel, evaluate_password_strength};
pub use models::phone::format_phone_number;
