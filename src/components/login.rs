// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Login form: email + password + remember-me, emitting an authenticate command.

use tracing::{debug, warn};

use crate::components::field::{self, FieldModel, FieldMsg};
use crate::components::password_field::{self, PasswordFieldModel, PasswordFieldMsg};
use crate::models::field::FormatKind;
use crate::models::schema::FieldConfig;

/// Login form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginModel {
    email: FieldModel,
    password: PasswordFieldModel,
    remember_me: bool,
    submitting: bool,
}

impl Default for LoginModel {
    fn default() -> Self {
        let email = FieldConfig {
            label: "Email".into(),
            placeholder: Some("you@example.com".into()),
            required: true,
            ..FieldConfig::new("email", FormatKind::Email)
        };
        let password = FieldConfig {
            label: "Password".into(),
            required: true,
            ..FieldConfig::new("password", FormatKind::None)
        };
        Self {
            email: FieldModel::new(email),
            password: PasswordFieldModel::new(password, false),
            remember_me: false,
            submitting: false,
        }
    }
}

impl LoginModel {
    pub fn email(&self) -> &FieldModel {
        &self.email
    }

    pub fn password(&self) -> &PasswordFieldModel {
        &self.password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// True while an authenticate command is in flight.
    pub fn submitting(&self) -> bool {
        self.submitting
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMsg {
    Email(FieldMsg),
    Password(PasswordFieldMsg),
    ToggleRememberMe(bool),
    Submit,
    AuthCompleted(Result<(), String>),
}

/// Side effects the host must run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginCommand {
    Authenticate {
        email: String,
        password: String,
        remember_me: bool,
    },
}

/// Feedback surfaced to the status bar/modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginEvent {
    /// Text shown in the status bar/modal.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

pub fn update(
    model: &mut LoginModel,
    msg: LoginMsg,
    cmds: &mut Vec<LoginCommand>,
) -> Option<LoginEvent> {
    match msg {
        // Field errors are shown inline, not as form-level events.
        LoginMsg::Email(m) => {
            field::update(&mut model.email, m);
            None
        }
        LoginMsg::Password(m) => {
            password_field::update(&mut model.password, m);
            None
        }
        LoginMsg::ToggleRememberMe(on) => {
            model.remember_me = on;
            None
        }
        LoginMsg::Submit => submit(model, cmds),
        LoginMsg::AuthCompleted(result) => {
            model.submitting = false;
            match result {
                Ok(()) => {
                    debug!("login succeeded");
                    Some(LoginEvent {
                        message: "Signed in.".into(),
                        is_error: false,
                    })
                }
                Err(err) => {
                    warn!(error = %err, "login failed");
                    Some(LoginEvent {
                        message: err,
                        is_error: true,
                    })
                }
            }
        }
    }
}

/// Validate both fields and enqueue the authenticate command when they pass.
fn submit(model: &mut LoginModel, cmds: &mut Vec<LoginCommand>) -> Option<LoginEvent> {
    if model.submitting {
        return None;
    }

    let email_err = field::update(&mut model.email, FieldMsg::Revalidate);
    let password_err = password_field::update(
        &mut model.password,
        PasswordFieldMsg::Field(FieldMsg::Revalidate),
    );

    if let Some(err) = email_err.or(password_err) {
        warn!(reason = %err.message, "login submission blocked");
        return Some(LoginEvent {
            message: err.message,
            is_error: true,
        });
    }

    model.submitting = true;
    cmds.push(LoginCommand::Authenticate {
        email: model.email.value().trim().to_string(),
        password: model.password.value().to_string(),
        remember_me: model.remember_me,
    });
    None
}
