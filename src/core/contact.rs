//! Quote-request form state and client-side validation.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::core::content::site_content;

/// Focusable elements of the quote form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
    Submit,
}

impl FormField {
    pub const TAB_ORDER: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::LicenseType,
        FormField::Message,
        FormField::Submit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::LicenseType => "License Type",
            FormField::Message => "Message",
            FormField::Submit => "Request Valuation",
        }
    }
}

/// Shape test carried over from the site: something before the `@`,
/// something between `@` and a later `.`, and something after that `.`,
/// none of it whitespace.
pub fn is_email_shaped(value: &str) -> bool {
    let Some(at) = value.find('@') else {
        return false;
    };
    let local = &value[..at];
    let domain = &value[at + 1..];
    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    let host = &domain[..dot];
    let tld = &domain[dot + 1..];

    let solid = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    solid(local) && solid(host) && solid(tld)
}

#[derive(Debug, Default)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Index into the configured license types; `None` until chosen.
    pub license_type: Option<usize>,
    pub message: String,
    pub focus_index: usize,
    pub errors: HashMap<FormField, &'static str>,
    /// Set after a successful submit until the next edit.
    pub submitted: bool,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> FormField {
        FormField::TAB_ORDER[self.focus_index]
    }

    pub fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % FormField::TAB_ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        let len = FormField::TAB_ORDER.len();
        self.focus_index = (self.focus_index + len - 1) % len;
    }

    pub fn license_type_label(&self) -> Option<&'static str> {
        let types = &site_content().quote_form.license_types;
        self.license_type
            .and_then(|i| types.get(i))
            .map(|s| s.as_str())
    }

    pub fn cycle_license_type(&mut self, forward: bool) {
        let len = site_content().quote_form.license_types.len();
        if len == 0 {
            return;
        }
        self.license_type = Some(match (self.license_type, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
        self.touch(FormField::LicenseType);
    }

    /// Append typed text to the focused field. Only the text fields accept
    /// input; selects and the submit control ignore it.
    pub fn insert_char(&mut self, c: char) {
        let field = self.focused();
        if let Some(value) = self.text_field_mut(field) {
            value.push(c);
            self.touch(field);
        }
    }

    /// Remove the last grapheme cluster from the focused field so combined
    /// characters delete as one unit.
    pub fn delete_backward(&mut self) {
        let field = self.focused();
        if let Some(value) = self.text_field_mut(field) {
            if let Some((offset, _)) = value.grapheme_indices(true).next_back() {
                value.truncate(offset);
                self.touch(field);
            }
        }
    }

    fn text_field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Company => Some(&mut self.company),
            FormField::Message => Some(&mut self.message),
            FormField::LicenseType | FormField::Submit => None,
        }
    }

    pub fn text_field(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(self.name.as_str()),
            FormField::Email => Some(self.email.as_str()),
            FormField::Company => Some(self.company.as_str()),
            FormField::Message => Some(self.message.as_str()),
            FormField::LicenseType | FormField::Submit => None,
        }
    }

    /// Editing a field clears its error and any stale success notice.
    fn touch(&mut self, field: FormField) {
        self.errors.remove(&field);
        self.submitted = false;
    }

    /// Populate `errors` and report whether the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.name.trim().is_empty() {
            self.errors.insert(FormField::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            self.errors.insert(FormField::Email, "Email is required");
        } else if !is_email_shaped(self.email.trim()) {
            self.errors.insert(FormField::Email, "Email is invalid");
        }
        if self.company.trim().is_empty() {
            self.errors.insert(FormField::Company, "Company is required");
        }
        if self.license_type.is_none() {
            self.errors
                .insert(FormField::LicenseType, "Please select a license type");
        }
        if self.message.trim().is_empty() {
            self.errors.insert(FormField::Message, "Message is required");
        }

        self.errors.is_empty()
    }

    /// Validate and, on success, reset the fields while keeping the
    /// confirmation notice up.
    pub fn submit(&mut self) -> bool {
        if !self.validate() {
            return false;
        }
        *self = Self {
            submitted: true,
            ..Self::default()
        };
        true
    }
}
