//! Form field rendering shared by the create/edit pages

use super::escape;
use crate::forms::{FieldErrors, CHECKBOX_MARKER};

/// Whether a form page creates a new row or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

fn error_line(errors: &FieldErrors, name: &str) -> String {
    errors
        .get(name)
        .map(|message| format!(r#"<span class="field-error">{}</span>"#, escape(message)))
        .unwrap_or_default()
}

/// Labelled text input keeping the submitted value
pub fn text_field(
    name: &str,
    label: &str,
    value: &str,
    required: bool,
    errors: &FieldErrors,
) -> String {
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <input type="text" id="{name}" name="{name}" value="{value}"{required}>
            {error}
        </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        required = if required { " required" } else { "" },
        error = error_line(errors, name),
    )
}

/// Labelled textarea keeping the submitted value
pub fn text_area(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <textarea id="{name}" name="{name}">{value}</textarea>
            {error}
        </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        error = error_line(errors, name),
    )
}

/// Checkbox submitting the literal marker when ticked
pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<div class="field checkbox">
            <input type="checkbox" id="{name}" name="{name}" value="{marker}"{checked}>
            <label for="{name}">{label}</label>
        </div>"#,
        name = name,
        marker = CHECKBOX_MARKER,
        label = escape(label),
        checked = if checked { " checked" } else { "" },
    )
}

/// `<form>` wrapper with a heading and submit button
pub fn form(heading: &str, action: &str, fields: &[String], submit: &str) -> String {
    format!(
        r#"<section class="form">
        <h2>{heading}</h2>
        <form method="post" action="{action}">
            {fields}
            <button type="submit">{submit}</button>
        </form>
    </section>"#,
        heading = escape(heading),
        action = escape(action),
        fields = fields.join("\n            "),
        submit = escape(submit),
    )
}
