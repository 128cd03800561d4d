//! Pure validation over the current field values.
//!
//! `validate` never touches UI state; it maps a `FieldValues` snapshot to
//! the complete set of per-field errors. Whether an error is *shown* is the
//! state machine's business (untouched fields stay quiet until a submit).

use std::collections::BTreeMap;

use super::{state::FieldValues, FieldId};

/// Minimum number of characters (after trimming) for the first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Per-field validation errors. At most one entry per field; iteration
/// follows field declaration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: BTreeMap<FieldId, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.by_field.get(&id).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.by_field.iter().map(|(id, msg)| (*id, msg.as_str()))
    }

    fn insert(&mut self, id: FieldId, message: String) {
        self.by_field.insert(id, message);
    }
}

/// Run every field rule against the given values.
pub fn validate(values: &FieldValues) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for id in FieldId::ALL {
        if let Err(msg) = check_field(id, values.get(id)) {
            errors.insert(id, msg);
        }
    }
    errors
}

/// Validate a single field value. Rules are independent per field; the
/// required check always wins over any further constraint on empty input.
pub fn check_field(id: FieldId, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    match id {
        FieldId::FirstName => {
            if trimmed.is_empty() {
                return Err(required_message(id));
            }
            if trimmed.chars().count() < FIRST_NAME_MIN_LEN {
                return Err(format!(
                    "{} must have at least {} characters",
                    id.key(),
                    FIRST_NAME_MIN_LEN
                ));
            }
            Ok(())
        }
        FieldId::LastName => {
            if trimmed.is_empty() {
                return Err(required_message(id));
            }
            Ok(())
        }
        FieldId::Email => {
            if trimmed.is_empty() {
                return Err(required_message(id));
            }
            if !is_plausible_email(trimmed) {
                return Err(format!("{} must be a valid email address", id.key()));
            }
            Ok(())
        }
        FieldId::Message => Ok(()),
    }
}

fn required_message(id: FieldId) -> String {
    format!("{} is a required field", id.key())
}

/// Minimal address shape: no whitespace, exactly one `@` with a non-empty
/// local part, and a `.` somewhere inside the domain (not first, not last).
fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
