// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form definitions loaded from JSON.
//! Parsing is kept pure so hosts can embed definitions or read them from disk.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::models::field::FormatKind;

/// Static configuration for one field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldConfig {
    /// Key used when collecting submitted values.
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub format: FormatKind,
    /// Character limit applied after formatting; `0` or absent means none.
    #[serde(default)]
    pub max_chars: Option<usize>,
    /// Reject empty values once the field has been touched.
    #[serde(default)]
    pub required: bool,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, format: FormatKind) -> Self {
        Self {
            name: name.into(),
            format,
            ..Default::default()
        }
    }

    /// Label for messages, falling back to the field name.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// Flat list of fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldConfig>,
}

/// One wizard page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StepConfig {
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// Ordered wizard pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WizardSchema {
    pub steps: Vec<StepConfig>,
}

/// Parse a flat form definition.
///
/// # Errors
///
/// Fails on malformed JSON, unknown `format` tokens, empty or duplicate
/// field names.
///
/// # Examples
///
/// ```
/// use formcheck::models::field::FormatKind;
/// use formcheck::models::schema::parse_form_schema;
///
/// let schema = parse_form_schema(r#"{ "fields": [ { "name": "phone", "format": "phone" } ] }"#).unwrap();
/// assert_eq!(schema.fields[0].format, FormatKind::Phone);
/// ```
pub fn parse_form_schema(json: &str) -> Result<FormSchema> {
    let schema: FormSchema =
        serde_json::from_str(json).context("Failed to parse form definition JSON")?;
    check_field_names(&schema.fields)?;
    Ok(schema)
}

/// Parse a wizard definition. Field names must be unique across all steps.
///
/// # Errors
///
/// Fails on malformed JSON, a wizard without steps, or invalid field names.
pub fn parse_wizard_schema(json: &str) -> Result<WizardSchema> {
    let schema: WizardSchema =
        serde_json::from_str(json).context("Failed to parse wizard definition JSON")?;
    if schema.steps.is_empty() {
        bail!("Wizard definition must contain at least one step");
    }
    let all_fields: Vec<FieldConfig> = schema
        .steps
        .iter()
        .flat_map(|s| s.fields.iter().cloned())
        .collect();
    check_field_names(&all_fields)?;
    Ok(schema)
}

/// Read and parse a wizard definition from disk.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not parse.
pub fn load_wizard_schema(path: &Path) -> Result<WizardSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wizard definition: {}", path.display()))?;
    parse_wizard_schema(&content)
        .with_context(|| format!("Invalid wizard definition in {}", path.display()))
}

fn check_field_names(fields: &[FieldConfig]) -> Result<()> {
    let mut seen = Vec::<&str>::with_capacity(fields.len());
    for field in fields {
        let name = field.name.trim();
        if name.is_empty() {
            bail!("Field name cannot be empty");
        }
        if seen.contains(&name) {
            bail!("Duplicate field name '{name}'");
        }
        seen.push(name);
    }
    Ok(())
}
