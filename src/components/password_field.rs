// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Password input with a live strength meter and show/hide toggle.

use crate::components::field::{self, FieldEvent, FieldModel, FieldMsg};
use crate::models::field::FormatKind;
use crate::models::password::{PasswordStrengthResult, evaluate_password_strength};
use crate::models::schema::FieldConfig;

/// Password field state. Strength is recomputed on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordFieldModel {
    field: FieldModel,
    strength: Option<PasswordStrengthResult>,
    revealed: bool,
    show_meter: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasswordFieldMsg {
    Field(FieldMsg),
    ToggleVisibility,
}

impl PasswordFieldModel {
    /// Build a password field. `show_meter` enables the strength meter
    /// (sign-up forms); login forms usually leave it off.
    pub fn new(config: FieldConfig, show_meter: bool) -> Self {
        Self {
            field: FieldModel::new(FieldConfig {
                format: FormatKind::None,
                ..config
            }),
            show_meter,
            ..Default::default()
        }
    }

    pub fn field(&self) -> &FieldModel {
        &self.field
    }

    pub fn value(&self) -> &str {
        self.field.value()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Current strength, or `None` while the meter is off or the input is empty.
    pub fn strength(&self) -> Option<&PasswordStrengthResult> {
        self.strength.as_ref()
    }
}

pub fn update(model: &mut PasswordFieldModel, msg: PasswordFieldMsg) -> Option<FieldEvent> {
    match msg {
        PasswordFieldMsg::ToggleVisibility => {
            model.revealed = !model.revealed;
            None
        }
        PasswordFieldMsg::Field(m) => {
            let recompute = matches!(m, FieldMsg::Changed(_) | FieldMsg::Reset);
            let event = field::update(&mut model.field, m);
            if recompute {
                // The meter is cosmetic and ignores the touched flag.
                model.strength = (model.show_meter && !model.field.value().is_empty())
                    .then(|| evaluate_password_strength(model.field.value()));
            }
            event
        }
    }
}
