//! Preview customization forms
//!
//! A preview may declare a small form whose validated values parameterize
//! the message view it builds. The form is driven by the detail page's
//! query string: no parameters means the form is unbound and the entry
//! page is shown instead of a rendered message.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Text,
    TextArea,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub default: Option<String>,
    pub widget: Widget,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: true,
            default: None,
            widget: Widget::Text,
        }
    }

    pub fn text_area(mut self) -> Self {
        self.widget = Widget::TextArea;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormSpec {
    fields: Vec<FormField>,
}

/// Outcome of binding request data against a [`FormSpec`].
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    /// No data submitted; show the entry form.
    Unbound,
    /// Data submitted but invalid; show the form again with messages.
    Invalid {
        values: HashMap<String, String>,
        errors: Vec<String>,
    },
    /// Validated values, defaults filled in for absent optional fields.
    Valid(HashMap<String, String>),
}

impl FormSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Binds query data against the spec.
    pub fn bind(&self, data: &HashMap<String, String>) -> FormState {
        if data.is_empty() {
            return FormState::Unbound;
        }

        let mut values = HashMap::new();
        let mut errors = Vec::new();

        for field in &self.fields {
            let submitted = data.get(&field.name).filter(|value| !value.is_empty());
            match submitted.or(field.default.as_ref()) {
                Some(value) => {
                    values.insert(field.name.clone(), value.clone());
                }
                None if field.required => {
                    errors.push(format!("{} is required", field.label));
                }
                None => {}
            }
        }

        if errors.is_empty() {
            FormState::Valid(values)
        } else {
            FormState::Invalid { values, errors }
        }
    }
}
