use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_NUMBER_LEN: usize = 8;

/// A directory entry. The id is assigned by the store on creation and stays
/// stable across updates; it serializes as a plain string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub number: String,
}

/// Create/update input model: no id, both fields optional so a missing
/// field surfaces as a validation message rather than a decode failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl ContactInput {
    /// Presence and minimum-length checks, in the order the API reports
    /// them. Uniqueness is the store's job, not the input's.
    pub fn validate(&self) -> Result<(&str, &str), ServiceError> {
        let name = match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => return Err(ServiceError::Validation("name is missing".into())),
        };
        let number = match self.number.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => return Err(ServiceError::Validation("number is missing".into())),
        };
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ServiceError::Validation(format!(
                "name must be at least {} characters long",
                MIN_NAME_LEN
            )));
        }
        if number.chars().count() < MIN_NUMBER_LEN {
            return Err(ServiceError::Validation(format!(
                "number must be at least {} characters long",
                MIN_NUMBER_LEN
            )));
        }
        Ok((name, number))
    }
}

/// Insert a new contact into the collection, enforcing name uniqueness.
/// Runs under the store's write lock, so concurrent duplicates cannot race.
pub fn insert_contact(
    contacts: &mut Vec<Contact>,
    input: &ContactInput,
) -> Result<Contact, ServiceError> {
    let (name, number) = input.validate()?;
    if contacts.iter().any(|c| c.name == name) {
        return Err(ServiceError::Validation("name must be unique".into()));
    }
    let contact = Contact {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        number: number.to_owned(),
    };
    contacts.push(contact.clone());
    Ok(contact)
}

/// Replace the name/number of the matching contact, keeping its id.
pub fn replace_contact(
    contacts: &mut Vec<Contact>,
    id: Uuid,
    input: &ContactInput,
) -> Result<Contact, ServiceError> {
    let (name, number) = input.validate()?;
    if contacts.iter().any(|c| c.id != id && c.name == name) {
        return Err(ServiceError::Validation("name must be unique".into()));
    }
    let existing = contacts
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ServiceError::not_found("contact"))?;
    existing.name = name.to_owned();
    existing.number = number.to_owned();
    Ok(existing.clone())
}

/// Remove the matching contact; returns whether it existed.
pub fn remove_contact(contacts: &mut Vec<Contact>, id: Uuid) -> bool {
    let before = contacts.len();
    contacts.retain(|c| c.id != id);
    contacts.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, number: &str) -> ContactInput {
        ContactInput {
            name: Some(name.to_string()),
            number: Some(number.to_string()),
        }
    }

    #[test]
    fn missing_name_reported_first() {
        let i = ContactInput { name: None, number: None };
        let err = i.validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "name is missing"));
    }

    #[test]
    fn empty_number_counts_as_missing() {
        let i = input("Arto Hellas", "");
        let err = i.validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "number is missing"));
    }

    #[test]
    fn short_fields_fail_length_checks() {
        let err = input("Al", "040-123456").validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.starts_with("name must be at least")));

        let err = input("Arto Hellas", "1234567").validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.starts_with("number must be at least")));
    }

    #[test]
    fn insert_rejects_duplicate_name_regardless_of_number() {
        let mut contacts = Vec::new();
        insert_contact(&mut contacts, &input("Arto Hellas", "040-123456")).unwrap();
        let err = insert_contact(&mut contacts, &input("Arto Hellas", "999-999999")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "name must be unique"));
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn replace_keeps_id_and_allows_same_name_on_self() {
        let mut contacts = Vec::new();
        let created = insert_contact(&mut contacts, &input("Ada Lovelace", "39-44-5323523")).unwrap();
        let updated =
            replace_contact(&mut contacts, created.id, &input("Ada Lovelace", "39-44-0000000"))
                .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.number, "39-44-0000000");
    }

    #[test]
    fn replace_rejects_name_taken_by_another_contact() {
        let mut contacts = Vec::new();
        insert_contact(&mut contacts, &input("Ada Lovelace", "39-44-5323523")).unwrap();
        let other = insert_contact(&mut contacts, &input("Dan Abramov", "12-43-234345")).unwrap();
        let err = replace_contact(&mut contacts, other.id, &input("Ada Lovelace", "12-43-234345"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "name must be unique"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut contacts = Vec::new();
        let created = insert_contact(&mut contacts, &input("Mary Poppendieck", "39-23-6423122")).unwrap();
        assert!(remove_contact(&mut contacts, created.id));
        assert!(!remove_contact(&mut contacts, created.id));
        assert!(contacts.is_empty());
    }

    #[test]
    fn contact_serializes_id_as_string() {
        let c = Contact {
            id: Uuid::new_v4(),
            name: "Arto Hellas".into(),
            number: "040-123456".into(),
        };
        let v = serde_json::to_value(&c).unwrap();
        assert!(v["id"].is_string());
        assert_eq!(v["name"], "Arto Hellas");
    }
}
