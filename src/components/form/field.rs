use serde::{Deserialize, Serialize};

/// The four input slots of the contact form, in display order.
///
/// The wire key (`key()`) is what error messages and serialized submissions
/// refer to; the label is what the terminal shows next to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Message,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldId::Message)
    }

    /// Hint text shown beneath the field, where one is worth the row.
    pub fn help(self) -> Option<&'static str> {
        match self {
            FieldId::Email => Some("name@example.com"),
            FieldId::Message => Some("Optional"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_stable() {
        assert_eq!(FieldId::FirstName.key(), "firstName");
        assert_eq!(FieldId::LastName.key(), "lastName");
        assert_eq!(FieldId::Email.key(), "email");
        assert_eq!(FieldId::Message.key(), "message");
    }

    #[test]
    fn only_message_is_optional() {
        for id in FieldId::ALL {
            assert_eq!(id.is_required(), id != FieldId::Message, "{:?}", id);
        }
    }
}
