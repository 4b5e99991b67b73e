// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single input field with focus-driven validation, in MVU shape.

use tracing::debug;

use crate::models::field::{CustomValidator, ValidationOutcome, normalize_input, validate_field};
use crate::models::schema::FieldConfig;

/// Where the field is in its focus/validation lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Never focused; errors are suppressed.
    #[default]
    Untouched,
    Focused,
    BlurredValid,
    BlurredInvalid,
}

/// Field state owned by the component hosting the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldModel {
    config: FieldConfig,
    validator: Option<CustomValidator>,
    value: String,
    state: FieldState,
    touched: bool,
    outcome: ValidationOutcome,
}

/// Messages emitted by the input's event handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldMsg {
    Focus,
    Blur,
    Changed(String),
    /// Validate now, e.g. on submit, without waiting for a blur.
    Revalidate,
    Reset,
}

/// User-facing feedback surfaced next to the field or in a status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEvent {
    /// Text shown next to the field.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl FieldModel {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Attach a validator that overrides the built-in checks.
    pub fn with_validator(mut self, validator: CustomValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// Error to display, if any. Always `None` before the first blur.
    pub fn error(&self) -> Option<&str> {
        self.outcome.message.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid
    }

    /// Run validation against the current value using this field's config.
    fn evaluate(&self) -> ValidationOutcome {
        // A custom validator replaces every built-in rule, including `required`.
        if self.validator.is_none() && self.config.required && self.value.trim().is_empty() {
            return ValidationOutcome::invalid(format!(
                "{} is required",
                self.config.display_label()
            ));
        }
        validate_field(
            &self.value,
            self.touched,
            self.validator.as_ref(),
            self.config.format,
        )
    }

    fn settle(&mut self, leaving_focus: bool) -> Option<FieldEvent> {
        self.touched = true;
        self.outcome = self.evaluate();
        if leaving_focus || self.state != FieldState::Focused {
            self.state = if self.outcome.is_valid {
                FieldState::BlurredValid
            } else {
                FieldState::BlurredInvalid
            };
        }
        debug!(
            field = %self.config.name,
            valid = self.outcome.is_valid,
            "field validated"
        );
        self.outcome.message.clone().map(|message| FieldEvent {
            message,
            is_error: true,
        })
    }
}

/// Apply a message to the field. Returns an error event when validation fails.
pub fn update(model: &mut FieldModel, msg: FieldMsg) -> Option<FieldEvent> {
    match msg {
        FieldMsg::Focus => {
            model.state = FieldState::Focused;
            None
        }
        FieldMsg::Blur => model.settle(true),
        FieldMsg::Changed(raw) => {
            // Formatting only; validation waits for the next blur.
            model.value = normalize_input(&raw, model.config.format, model.config.max_chars);
            None
        }
        FieldMsg::Revalidate => model.settle(false),
        FieldMsg::Reset => {
            model.value.clear();
            model.state = FieldState::Untouched;
            model.touched = false;
            model.outcome = ValidationOutcome::valid();
            None
        }
    }
}
