//! Contact form fields, per-field validation, and the submitted state.
//!
//! Validation failures populate a per-field error map and block submission;
//! editing a field clears that field's error. A successful submission shows
//! a confirmation for [`CONFIRMATION_MS`], then the component layer calls
//! `reset` to clear everything.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// How long the post-submit confirmation stays visible.
pub const CONFIRMATION_MS: u32 = 3000;

/// One error slot per form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        [self.name, self.email, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Validate the three fields, returning an error per offending field.
#[must_use]
pub fn validate(name: &str, email: &str, message: &str) -> FieldErrors {
    FieldErrors {
        name: name.trim().is_empty().then_some("Name is required"),
        email: (!email.contains('@')).then_some("Email must contain an @"),
        message: message.trim().is_empty().then_some("Message is required"),
    }
}

/// State for the contact form card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub submitted: bool,
}

impl ContactForm {
    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.errors.name = None;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.errors.email = None;
    }

    pub fn set_message(&mut self, value: String) {
        self.message = value;
        self.errors.message = None;
    }

    /// Validate and, when clean, enter the submitted state. Returns whether
    /// the submission was accepted.
    pub fn submit(&mut self) -> bool {
        self.errors = validate(&self.name, &self.email, &self.message);
        if self.errors.is_empty() {
            self.submitted = true;
        }
        self.submitted
    }

    /// Clear all fields, errors, and the submitted flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
