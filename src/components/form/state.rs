//! Editing/submitted state machine for the contact form.
//!
//! `FormState` owns the current field values and the latest validation
//! result. The submitted snapshot lives inside the `Submitted` phase
//! variant, so a snapshot exists exactly when the form was submitted.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{
    rules::{validate, ValidationErrors},
    FieldId,
};

/// Current (or frozen) values of the four fields. Keys serialize under
/// their wire names (`firstName`, `lastName`, `email`, `message`).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        match id {
            FieldId::FirstName => self.first_name = value,
            FieldId::LastName => self.last_name = value,
            FieldId::Email => self.email = value,
            FieldId::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Editing,
    Submitted(FieldValues),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; values are frozen and the form is submitted.
    Accepted,
    /// Validation failed; the form stays editable with errors surfaced.
    Rejected,
    /// The form had already been submitted; nothing changed.
    AlreadySubmitted,
}

#[derive(Debug, Clone)]
pub struct FormState {
    values: FieldValues,
    errors: ValidationErrors,
    touched: BTreeSet<FieldId>,
    phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let values = FieldValues::default();
        let errors = validate(&values);
        Self {
            values,
            errors,
            touched: BTreeSet::new(),
            phase: Phase::Editing,
        }
    }

    /// Replace one field's value and re-run validation. Ignored once the
    /// form was submitted; the snapshot must not drift.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        if self.is_submitted() {
            return;
        }
        self.values.set(id, value);
        self.touched.insert(id);
        self.errors = validate(&self.values);
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.values.get(id)
    }

    /// The error to surface for a field: present only when the field is
    /// invalid *and* the user has touched it (a submit touches everything).
    pub fn error_for(&self, id: FieldId) -> Option<&str> {
        if !self.touched.contains(&id) {
            return None;
        }
        self.errors.get(id)
    }

    /// Number of error indicators currently surfaced.
    pub fn visible_error_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|(id, _)| self.touched.contains(id))
            .count()
    }

    /// Attempt to submit. Only transitions when every rule passes.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitted() {
            return SubmitOutcome::AlreadySubmitted;
        }
        self.touched.extend(FieldId::ALL);
        self.errors = validate(&self.values);
        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected;
        }
        self.phase = Phase::Submitted(self.values.clone());
        SubmitOutcome::Accepted
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    /// The frozen snapshot captured by a successful submit.
    pub fn submitted_values(&self) -> Option<&FieldValues> {
        match &self.phase {
            Phase::Editing => None,
            Phase::Submitted(snapshot) => Some(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_state() -> FormState {
        let mut state = FormState::new();
        state.set_value(FieldId::FirstName, "tafiqul");
        state.set_value(FieldId::LastName, "tosuak");
        state.set_value(FieldId::Email, "tosuak@gmail.com");
        state
    }

    #[test]
    fn starts_editing_with_no_visible_errors() {
        let state = FormState::new();
        assert!(!state.is_submitted());
        assert!(state.submitted_values().is_none());
        assert_eq!(state.visible_error_count(), 0);
    }

    #[test]
    fn short_first_name_surfaces_exactly_one_error() {
        let mut state = FormState::new();
        state.set_value(FieldId::FirstName, "123");
        assert_eq!(state.visible_error_count(), 1);
        assert_eq!(
            state.error_for(FieldId::FirstName),
            Some("firstName must have at least 5 characters")
        );
        // The other fields are just as invalid but were never touched.
        assert_eq!(state.error_for(FieldId::LastName), None);
        assert_eq!(state.error_for(FieldId::Email), None);
    }

    #[test]
    fn empty_submit_surfaces_three_errors() {
        let mut state = FormState::new();
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        assert!(!state.is_submitted());
        assert_eq!(state.visible_error_count(), 3);
        assert_eq!(state.error_for(FieldId::Message), None);
        assert_eq!(
            state.error_for(FieldId::LastName),
            Some("lastName is a required field")
        );
    }

    #[test]
    fn valid_names_without_email_leave_one_error() {
        let mut state = FormState::new();
        state.set_value(FieldId::FirstName, "tafiqul");
        state.set_value(FieldId::LastName, "tosuak");
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        assert_eq!(state.visible_error_count(), 1);
        assert_eq!(
            state.error_for(FieldId::Email),
            Some("email is a required field")
        );
    }

    #[test]
    fn invalid_email_blocks_submission_until_corrected() {
        let mut state = FormState::new();
        state.set_value(FieldId::FirstName, "tafiqul");
        state.set_value(FieldId::LastName, "tosuak");
        state.set_value(FieldId::Email, "tosuak@gmail");
        assert_eq!(
            state.error_for(FieldId::Email),
            Some("email must be a valid email address")
        );
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        assert!(!state.is_submitted());

        state.set_value(FieldId::Email, "tosuak@gmail.com");
        assert_eq!(state.submit(), SubmitOutcome::Accepted);
        assert!(state.is_submitted());
    }

    #[test]
    fn accepted_submit_freezes_a_snapshot() {
        let mut state = filled_state();
        state.set_value(FieldId::Message, "hello there");
        assert_eq!(state.submit(), SubmitOutcome::Accepted);

        let snapshot = state.submitted_values().cloned().unwrap();
        assert_eq!(snapshot.first_name, "tafiqul");
        assert_eq!(snapshot.last_name, "tosuak");
        assert_eq!(snapshot.email, "tosuak@gmail.com");
        assert_eq!(snapshot.message, "hello there");

        // Edits after submit are rejected and leave the snapshot alone.
        state.set_value(FieldId::FirstName, "someone else");
        assert_eq!(state.value(FieldId::FirstName), "tafiqul");
        assert_eq!(state.submitted_values(), Some(&snapshot));
    }

    #[test]
    fn resubmit_is_idempotent() {
        let mut state = filled_state();
        assert_eq!(state.submit(), SubmitOutcome::Accepted);
        let snapshot = state.submitted_values().cloned();
        assert_eq!(state.submit(), SubmitOutcome::AlreadySubmitted);
        assert_eq!(state.submitted_values().cloned(), snapshot);
    }

    #[test]
    fn snapshot_exists_iff_submitted() {
        let mut state = FormState::new();
        assert_eq!(state.is_submitted(), state.submitted_values().is_some());
        state.submit();
        assert_eq!(state.is_submitted(), state.submitted_values().is_some());

        let mut state = filled_state();
        state.submit();
        assert_eq!(state.is_submitted(), state.submitted_values().is_some());
        assert!(state.is_submitted());
    }

    #[test]
    fn serialized_submission_uses_wire_keys() {
        let mut state = filled_state();
        state.submit();
        let json = serde_json::to_value(state.submitted_values().unwrap()).unwrap();
        assert_eq!(json["firstName"], "tafiqul");
        assert_eq!(json["lastName"], "tosuak");
        assert_eq!(json["email"], "tosuak@gmail.com");
        assert_eq!(json["message"], "");
    }
}
