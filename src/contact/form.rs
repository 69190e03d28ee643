use serde::Serialize;

use super::validation::{Field, FieldError};

/// Outcome of the most recent validation run for a field.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldStatus {
    #[default]
    Unchecked,
    Valid,
    Invalid(FieldError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All checked fields passed; the form is now sending.
    Sending,
    /// Validation failed. Nothing is sent.
    Rejected { first_invalid: Field },
    /// A submission is already in flight.
    Busy,
}

/// What would be posted to the server.
#[derive(Debug, Serialize, PartialEq)]
pub struct ContactRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    pub service: &'a str,
    pub message: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: [FieldState; 5],
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        &self.fields[field.index()].value
    }

    pub fn status(&self, field: Field) -> &FieldStatus {
        &self.fields[field.index()].status
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        matches!(self.status(field), FieldStatus::Invalid(_))
    }

    pub fn error_text(&self, field: Field) -> String {
        match self.status(field) {
            FieldStatus::Invalid(err) => err.to_string(),
            _ => String::new(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    /// Run the field's rule against its current value and record the result.
    pub fn validate_field(&mut self, field: Field) -> bool {
        let state = &mut self.fields[field.index()];
        match field.validate(&state.value) {
            Ok(()) => {
                state.status = FieldStatus::Valid;
                true
            }
            Err(err) => {
                state.status = FieldStatus::Invalid(err);
                false
            }
        }
    }

    /// Store a new value. A field that is already showing an error is
    /// re-checked right away; otherwise checking waits for blur.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.fields[field.index()].value = value.into();
        if self.is_invalid(field) {
            self.validate_field(field);
        }
    }

    pub fn blur(&mut self, field: Field) -> bool {
        self.validate_field(field)
    }

    /// Check every required or non-empty field. Each one is checked even
    /// after a failure so all errors show at once.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Busy;
        }

        let mut first_invalid = None;
        for field in Field::ALL {
            let checked = field.is_required() || !self.value(field).is_empty();
            if checked && !self.validate_field(field) {
                first_invalid.get_or_insert(field);
            }
        }

        match first_invalid {
            Some(first_invalid) => SubmitOutcome::Rejected { first_invalid },
            None => {
                self.phase = SubmitPhase::Sending;
                SubmitOutcome::Sending
            }
        }
    }

    /// Called when the simulated send completes: clears values, statuses and
    /// re-enables submission.
    pub fn finish_sending(&mut self) {
        *self = Self::default();
    }

    pub fn request(&self) -> ContactRequest<'_> {
        let phone = self.value(Field::Phone).trim();
        ContactRequest {
            name: self.value(Field::Name).trim(),
            email: self.value(Field::Email).trim(),
            phone: (!phone.is_empty()).then_some(phone),
            service: self.value(Field::Service),
            message: self.value(Field::Message).trim(),
        }
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        Field::ALL
            .into_iter()
            .filter(|f| self.is_invalid(*f))
            .map(Field::name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.input(Field::Name, "Алексей");
        form.input(Field::Email, "alex@example.com");
        form.input(Field::Service, "web");
        form.input(Field::Message, "Нужен лендинг для нового продукта");
        form
    }

    #[test]
    fn validate_field_matches_rule_result() {
        let samples = ["", "A", "Alex", "bad", "a@b.c", "12345", "+1 (555) 123-4567", "web"];
        for field in Field::ALL {
            for sample in samples {
                let mut form = ContactForm::default();
                form.input(field, sample);
                let valid = form.validate_field(field);
                assert_eq!(valid, field.validate(sample).is_ok(), "{:?} {:?}", field, sample);
                assert_eq!(form.error_text(field).is_empty(), valid);
            }
        }
    }

    #[test]
    fn input_waits_for_blur_until_an_error_shows() {
        let mut form = ContactForm::default();
        form.input(Field::Email, "a");
        assert_eq!(form.status(Field::Email), &FieldStatus::Unchecked);

        assert!(!form.blur(Field::Email));
        assert!(form.is_invalid(Field::Email));

        form.input(Field::Email, "a@b.c");
        assert_eq!(form.status(Field::Email), &FieldStatus::Valid);

        // Once valid, typing again does not re-check until the next blur.
        form.input(Field::Email, "a@");
        assert_eq!(form.status(Field::Email), &FieldStatus::Valid);
    }

    #[test]
    fn valid_submission_sends_then_resets() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Sending);
        assert!(form.is_sending());
        assert_eq!(form.submit(), SubmitOutcome::Busy);

        form.finish_sending();
        assert!(!form.is_sending());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.status(field), &FieldStatus::Unchecked);
            assert_eq!(form.error_text(field), "");
        }
    }

    #[test]
    fn invalid_submission_keeps_values_and_reports_first_error() {
        let mut form = filled();
        form.input(Field::Email, "bad");
        form.input(Field::Message, "short");

        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected { first_invalid: Field::Email }
        );
        assert!(!form.is_sending());
        assert_eq!(form.value(Field::Name), "Алексей");
        assert_eq!(form.value(Field::Email), "bad");
        assert_eq!(form.invalid_fields(), vec!["email", "message"]);
    }

    #[test]
    fn empty_optional_phone_is_skipped() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Sending);
        assert_eq!(form.status(Field::Phone), &FieldStatus::Unchecked);
    }

    #[test]
    fn filled_phone_is_checked_on_submit() {
        let mut form = filled();
        form.input(Field::Phone, "12345");
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected { first_invalid: Field::Phone }
        );
    }

    #[test]
    fn request_omits_blank_phone() {
        let form = filled();
        let json = serde_json::to_value(form.request()).unwrap();
        assert_eq!(json["name"], "Алексей");
        assert_eq!(json["service"], "web");
        assert!(json.get("phone").is_none());

        let mut form = filled();
        form.input(Field::Phone, " +7 999 123-45-67 ");
        let json = serde_json::to_value(form.request()).unwrap();
        assert_eq!(json["phone"], "+7 999 123-45-67");
    }
}
