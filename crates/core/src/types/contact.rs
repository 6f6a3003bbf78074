//! Contact records for the vCard and MeCard builders.

use serde::{Deserialize, Serialize};

/// Input record for the vCard 3.0 builder.
///
/// All fields are free text; an empty string means the field is absent and
/// the builder will omit its line entirely. There are no cross-field
/// invariants - a card with nothing but a phone number is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactCard {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub note: String,
}

impl ContactCard {
    /// Returns true when either name component is present.
    ///
    /// The builder emits the `FN`/`N` lines only in that case.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty()
    }
}

/// Input record for the MeCard builder.
///
/// MeCard is the compact single-line dialect: one `name` field instead of
/// split name components, and no organization or title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MeCardContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_name_with_either_component() {
        let first_only = ContactCard {
            first_name: "Ada".to_string(),
            ..ContactCard::default()
        };
        let last_only = ContactCard {
            last_name: "Lovelace".to_string(),
            ..ContactCard::default()
        };
        assert!(first_only.has_name());
        assert!(last_only.has_name());
        assert!(!ContactCard::default().has_name());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let card: ContactCard =
            serde_json::from_str(r#"{"first_name":"Ada"}"#).expect("partial record");
        assert_eq!(card.first_name, "Ada");
        assert_eq!(card.last_name, "");
    }
}
