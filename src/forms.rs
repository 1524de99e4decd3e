//! Required-field check for the contact form.

use crate::config::{INVALID_BORDER_COLOR, VALID_BORDER_COLOR};
use crate::context::PageContext;
use crate::dom::{self, listen, set_style};
use crate::error::BehaviorError;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Outcome of validating the required fields of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// One flag per field, in document order.
    pub field_valid: Vec<bool>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.field_valid.iter().all(|ok| *ok)
    }
}

/// A required field is valid when its trimmed value is non-empty.
pub fn validate_required<S: AsRef<str>>(values: &[S]) -> ValidationReport {
    ValidationReport {
        field_valid: values.iter().map(|v| !v.as_ref().trim().is_empty()).collect(),
    }
}

pub fn border_color(valid: bool) -> &'static str {
    if valid {
        VALID_BORDER_COLOR
    } else {
        INVALID_BORDER_COLOR
    }
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn attach(ctx: &Rc<PageContext>) -> Result<(), BehaviorError> {
    let Some(form) = dom::query_html(".contact-form") else {
        return Ok(());
    };
    let alert_message = ctx.config.form_alert_message.clone();
    let form_el: Element = form.clone().into();

    listen(&form, "submit", move |e| {
        let fields = dom::query_all_within(&form_el, "[required]");
        let values: Vec<String> = fields.iter().map(field_value).collect();
        let report = validate_required(&values);

        for (field, valid) in fields.iter().zip(&report.field_valid) {
            if let Some(field) = field.dyn_ref::<HtmlElement>() {
                set_style(field, "border-color", border_color(*valid));
            }
        }

        if !report.is_valid() {
            e.prevent_default();
            log::info!("Contact form blocked: required fields are empty");
            if let Err(err) = gloo_utils::window().alert_with_message(&alert_message) {
                log::warn!("Could not show alert: {:?}", err);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_fields_are_invalid() {
        let report = validate_required(&["Mario", "   ", "\n\t", "ciao"]);
        assert_eq!(report.field_valid, vec![true, false, false, true]);
        assert!(!report.is_valid());
    }

    #[test]
    fn all_filled_is_valid() {
        let report = validate_required(&["Mario", "mario@example.com", "Hello"]);
        assert!(report.is_valid());
    }

    #[test]
    fn form_without_required_fields_passes() {
        let report = validate_required::<&str>(&[]);
        assert!(report.is_valid());
    }

    #[test]
    fn border_colors() {
        assert_eq!(border_color(false), "#dc3545");
        assert_eq!(border_color(true), "var(--border-color)");
    }
}
