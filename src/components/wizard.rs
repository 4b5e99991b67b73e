// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Multi-step form whose navigation is gated on per-step validation.

use tracing::{debug, warn};

use crate::components::field::{self, FieldModel, FieldMsg};
use crate::models::field::CustomValidator;
use crate::models::schema::WizardSchema;

pub const STEP_INVALID_MESSAGE: &str = "Please fix the highlighted fields before continuing.";

/// One page of the wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardStep {
    pub title: String,
    pub fields: Vec<FieldModel>,
}

impl WizardStep {
    fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldModel::is_valid)
    }
}

/// Wizard state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardModel {
    steps: Vec<WizardStep>,
    current: usize,
    /// Highest step index reached so far.
    furthest: usize,
    finished: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardMsg {
    Field {
        step: usize,
        index: usize,
        msg: FieldMsg,
    },
    Next,
    Back,
    /// Jump to a step that has already been visited.
    GoTo(usize),
    Finish,
}

/// Commands that require side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardCommand {
    /// Collected `(name, value)` pairs in step and field order.
    Submit(Vec<(String, String)>),
}

/// Feedback surfaced to the status bar/modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardEvent {
    /// Text shown in the status bar/modal.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl WizardModel {
    pub fn from_schema(schema: WizardSchema) -> Self {
        let steps = schema
            .steps
            .into_iter()
            .map(|step| WizardStep {
                title: step.title,
                fields: step.fields.into_iter().map(FieldModel::new).collect(),
            })
            .collect();
        Self {
            steps,
            ..Default::default()
        }
    }

    /// Attach a custom validator to the field called `name`, wherever it lives.
    pub fn with_validator(mut self, name: &str, validator: CustomValidator) -> Self {
        for step in &mut self.steps {
            for slot in &mut step.fields {
                if slot.name() == name {
                    *slot = std::mem::take(slot).with_validator(validator.clone());
                }
            }
        }
        self
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&WizardStep> {
        self.steps.get(self.current)
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    pub fn can_go_to(&self, step: usize) -> bool {
        step <= self.furthest && step < self.steps.len()
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// `(current, total)` with a 1-based current step for progress labels.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.steps.len())
    }

    /// Force validation of every field on `index`.
    fn validate_step(&mut self, index: usize) -> bool {
        let Some(step) = self.steps.get_mut(index) else {
            return false;
        };
        for f in &mut step.fields {
            field::update(f, FieldMsg::Revalidate);
        }
        step.is_valid()
    }

    fn validate_current(&mut self) -> bool {
        self.validate_step(self.current)
    }

    /// Revalidate all steps and return the first one that fails.
    fn first_invalid_step(&mut self) -> Option<usize> {
        // Every step is checked so all errors are visible, not just the first.
        let verdicts: Vec<bool> = (0..self.steps.len()).map(|i| self.validate_step(i)).collect();
        verdicts.iter().position(|valid| !valid)
    }

    fn collect_values(&self) -> Vec<(String, String)> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|f| (f.name().to_string(), f.value().to_string()))
            .collect()
    }
}

/// Update the model based on a message.
pub fn update(
    model: &mut WizardModel,
    msg: WizardMsg,
    cmds: &mut Vec<WizardCommand>,
) -> Option<WizardEvent> {
    match msg {
        WizardMsg::Field { step, index, msg } => {
            if let Some(f) = model
                .steps
                .get_mut(step)
                .and_then(|s| s.fields.get_mut(index))
            {
                field::update(f, msg);
            }
            None
        }
        WizardMsg::Next => {
            if model.is_last_step() {
                return None;
            }
            if !model.validate_current() {
                warn!(step = model.current, "wizard step has invalid fields");
                return Some(WizardEvent {
                    message: STEP_INVALID_MESSAGE.into(),
                    is_error: true,
                });
            }
            model.current += 1;
            model.furthest = model.furthest.max(model.current);
            debug!(step = model.current, "wizard advanced");
            None
        }
        WizardMsg::Back => {
            model.current = model.current.saturating_sub(1);
            None
        }
        WizardMsg::GoTo(step) => {
            if model.can_go_to(step) {
                model.current = step;
                None
            } else {
                Some(WizardEvent {
                    message: format!("Step {} is not available yet.", step.saturating_add(1)),
                    is_error: true,
                })
            }
        }
        WizardMsg::Finish => {
            if !model.is_last_step() || model.finished {
                return None;
            }
            // Earlier steps stay editable, so all of them are checked again.
            if let Some(invalid) = model.first_invalid_step() {
                warn!(step = invalid, "wizard finish blocked");
                model.current = invalid;
                return Some(WizardEvent {
                    message: STEP_INVALID_MESSAGE.into(),
                    is_error: true,
                });
            }
            model.finished = true;
            cmds.push(WizardCommand::Submit(model.collect_values()));
            Some(WizardEvent {
                message: "All steps completed.".into(),
                is_error: false,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::parse_wizard_schema;

    fn sample_wizard() -> WizardModel {
        let json = r#"
        {
          "steps": [
            { "title": "Account", "fields": [
                { "name": "email", "label": "Email", "format": "email", "required": true }
            ] },
            { "title": "Contact", "fields": [
                { "name": "phone", "format": "phone" },
                { "name": "city" }
            ] }
          ]
        }
        "#;
        WizardModel::from_schema(parse_wizard_schema(json).unwrap())
    }

    fn type_into(model: &mut WizardModel, step: usize, index: usize, text: &str) {
        let mut cmds = Vec::new();
        update(
            model,
            WizardMsg::Field {
                step,
                index,
                msg: FieldMsg::Changed(text.into()),
            },
            &mut cmds,
        );
    }

    #[test]
    fn next_is_blocked_by_invalid_step() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();

        let event = update(&mut model, WizardMsg::Next, &mut cmds).expect("error event");

        assert!(event.is_error);
        assert_eq!(event.message, STEP_INVALID_MESSAGE);
        assert_eq!(model.current(), 0);
        let email = &model.steps()[0].fields[0];
        assert_eq!(email.error(), Some("Email is required"));
    }

    #[test]
    fn valid_step_advances_and_back_returns() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();
        type_into(&mut model, 0, 0, "a@b.com");

        assert!(update(&mut model, WizardMsg::Next, &mut cmds).is_none());
        assert_eq!(model.progress(), (2, 2));
        assert_eq!(model.current_step().map(|s| s.title.as_str()), Some("Contact"));

        update(&mut model, WizardMsg::Back, &mut cmds);
        assert_eq!(model.current(), 0);
        // Already visited, so jumping forward is allowed.
        assert!(update(&mut model, WizardMsg::GoTo(1), &mut cmds).is_none());
        assert_eq!(model.current(), 1);
    }

    #[test]
    fn goto_unvisited_step_is_rejected() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();

        let event = update(&mut model, WizardMsg::GoTo(1), &mut cmds).expect("error event");

        assert!(event.message.contains("Step 2"));
        assert_eq!(model.current(), 0);
    }

    #[test]
    fn finish_submits_all_values_once() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();
        type_into(&mut model, 0, 0, "a@b.com");
        update(&mut model, WizardMsg::Next, &mut cmds);
        type_into(&mut model, 1, 0, "5551234567");
        type_into(&mut model, 1, 1, "Berlin");

        let event = update(&mut model, WizardMsg::Finish, &mut cmds).expect("completion event");
        update(&mut model, WizardMsg::Finish, &mut cmds);

        assert!(!event.is_error);
        assert!(model.finished());
        assert_eq!(
            cmds,
            vec![WizardCommand::Submit(vec![
                ("email".into(), "a@b.com".into()),
                ("phone".into(), "(555) 123-4567".into()),
                ("city".into(), "Berlin".into()),
            ])]
        );
    }

    #[test]
    fn finish_before_last_step_is_ignored() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();
        type_into(&mut model, 0, 0, "a@b.com");

        assert!(update(&mut model, WizardMsg::Finish, &mut cmds).is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn custom_validator_is_attached_by_name() {
        let mut model = sample_wizard().with_validator(
            "email",
            CustomValidator::new(|v| (!v.ends_with(".edu")).then(|| "Use your school email".into())),
        );
        let mut cmds = Vec::new();
        type_into(&mut model, 0, 0, "a@b.com");

        update(&mut model, WizardMsg::Next, &mut cmds);

        assert_eq!(model.current(), 0);
        assert_eq!(model.steps()[0].fields[0].error(), Some("Use your school email"));
    }

    #[test]
    fn finish_rechecks_steps_edited_after_next() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();
        type_into(&mut model, 0, 0, "a@b.com");
        update(&mut model, WizardMsg::Next, &mut cmds);
        type_into(&mut model, 0, 0, "not-an-email");
        type_into(&mut model, 1, 1, "Berlin");

        let event = update(&mut model, WizardMsg::Finish, &mut cmds).expect("error event");

        assert!(event.is_error);
        assert_eq!(event.message, STEP_INVALID_MESSAGE);
        assert!(cmds.is_empty());
        assert!(!model.finished());
        // Sent back to the step holding the broken field.
        assert_eq!(model.current(), 0);
        assert!(model.steps()[0].fields[0].error().is_some());
    }

    #[test]
    fn finish_is_refused_when_last_step_is_invalid() {
        let mut model = sample_wizard().with_validator(
            "city",
            CustomValidator::new(|v| v.is_empty().then(|| "City is required".into())),
        );
        let mut cmds = Vec::new();
        type_into(&mut model, 0, 0, "a@b.com");
        update(&mut model, WizardMsg::Next, &mut cmds);

        let event = update(&mut model, WizardMsg::Finish, &mut cmds).expect("error event");

        assert_eq!(event.message, STEP_INVALID_MESSAGE);
        assert!(cmds.is_empty());
        assert_eq!(model.current(), 1);
        assert_eq!(model.steps()[1].fields[1].error(), Some("City is required"));
    }

    #[test]
    fn second_finish_after_completion_is_a_no_op() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();
        type_into(&mut model, 0, 0, "a@b.com");
        update(&mut model, WizardMsg::Next, &mut cmds);
        update(&mut model, WizardMsg::Finish, &mut cmds);

        assert!(update(&mut model, WizardMsg::Finish, &mut cmds).is_none());
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn back_on_first_step_stays_put() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();

        assert!(update(&mut model, WizardMsg::Back, &mut cmds).is_none());
        assert_eq!(model.current(), 0);
    }

    #[test]
    fn goto_out_of_range_index_is_rejected_without_overflow() {
        let mut model = sample_wizard();
        let mut cmds = Vec::new();

        let event =
            update(&mut model, WizardMsg::GoTo(usize::MAX), &mut cmds).expect("error event");

        assert!(event.is_error);
        assert!(event.message.contains(&usize::MAX.to_string()));
        assert_eq!(model.current(), 0);
    }
}
