use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::contact::{Contact, Name};
use crate::errors::AppError;

/// All contacts, keyed by name. Iteration is in ascending name order, which
/// is the order used for listing, phone lookup and birthday scheduling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Contact>", into = "Vec<Contact>")]
pub struct AddressBook {
    contacts: BTreeMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        let key = contact.name().as_str().to_string();
        if self.contacts.contains_key(&key) {
            return Err(AppError::DuplicateContact(key));
        }

        debug!(contact = %key, "adding contact");
        self.contacts.insert(key, contact);
        Ok(())
    }

    // Keys are stored as validated names, so lookups trim the same way.
    pub fn find(&self, name: &str) -> Result<&Contact, AppError> {
        self.contacts
            .get(name.trim())
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Contact, AppError> {
        self.contacts
            .get_mut(name.trim())
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))
    }

    /// Name of the first contact, in store order, holding `phone`.
    pub fn find_by_phone(&self, phone: &str) -> Option<&Name> {
        self.contacts
            .values()
            .find(|contact| contact.find_phone(phone))
            .map(Contact::name)
    }

    /// Removes the contact and hands it back.
    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        match self.contacts.remove(name.trim()) {
            Some(contact) => {
                debug!(contact = name, "deleted contact");
                Ok(contact)
            }
            None => Err(AppError::NotFound(format!("Contact '{}'", name))),
        }
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Contact> + Clone + '_ {
        self.contacts.values()
    }
}

/// Rebuilds a book from a stored list; a repeated name is rejected rather
/// than silently overwritten.
impl TryFrom<Vec<Contact>> for AddressBook {
    type Error = AppError;

    fn try_from(contacts: Vec<Contact>) -> Result<Self, Self::Error> {
        let mut book = AddressBook::new();
        for contact in contacts {
            book.add(contact)?;
        }
        Ok(book)
    }
}

impl From<AddressBook> for Vec<Contact> {
    fn from(book: AddressBook) -> Self {
        book.contacts.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phones: &[&str]) -> Contact {
        let mut contact = Contact::new(name).unwrap();
        for phone in phones {
            contact.add_phone(phone).unwrap();
        }
        contact
    }

    #[test]
    fn adding_duplicate_name_leaves_book_unchanged() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        book.add(contact("Alice", &["0123456789"]))?;
        let before = book.clone();

        let err = book.add(contact("Alice", &["9876543210"])).unwrap_err();

        assert!(matches!(err, AppError::DuplicateContact(_)));
        assert_eq!(book, before);
        assert!(book.find("Alice")?.find_phone("0123456789"));
        Ok(())
    }

    #[test]
    fn find_and_mutate_through_store() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        book.add(contact("Alice", &[]))?;

        book.find_mut("Alice")?.add_phone("0123456789")?;

        assert!(book.find("Alice")?.find_phone("0123456789"));
        assert!(matches!(book.find("Bob"), Err(AppError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn find_by_phone_on_empty_book() {
        let book = AddressBook::new();

        assert!(book.find_by_phone("0123456789").is_none());
        assert!(book.find_by_phone("").is_none());
    }

    #[test]
    fn find_by_phone_returns_first_in_store_order() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        book.add(contact("Zed", &["1111111111"]))?;
        book.add(contact("Amy", &["2222222222", "1111111111"]))?;

        assert_eq!(
            book.find_by_phone("1111111111").map(Name::as_str),
            Some("Amy")
        );
        assert_eq!(
            book.find_by_phone("2222222222").map(Name::as_str),
            Some("Amy")
        );
        assert!(book.find_by_phone("3333333333").is_none());
        Ok(())
    }

    #[test]
    fn deleting_missing_contact_keeps_size() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        book.add(contact("Alice", &[]))?;

        assert!(matches!(book.delete("Bob"), Err(AppError::NotFound(_))));
        assert_eq!(book.len(), 1);

        let removed = book.delete("Alice")?;
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.is_empty());
        Ok(())
    }

    #[test]
    fn list_all_is_restartable() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        book.add(contact("Carl", &[]))?;
        book.add(contact("Alice", &[]))?;
        book.add(contact("Bob", &[]))?;

        let listing = book.list_all();
        let first: Vec<&str> = listing.clone().map(|c| c.name().as_str()).collect();
        let second: Vec<&str> = listing.map(|c| c.name().as_str()).collect();

        assert_eq!(first, vec!["Alice", "Bob", "Carl"]);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn serializes_as_contact_list() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        book.add(contact("Alice", &["0123456789"]))?;
        book.find_mut("Alice")?.set_birthday("15.06.1990")?;

        let json = serde_json::to_string(&book)?;
        assert!(json.starts_with('['));

        let restored: AddressBook = serde_json::from_str(&json)?;
        assert_eq!(restored, book);
        Ok(())
    }

    #[test]
    fn lookups_use_the_trimmed_name_key() -> Result<(), AppError> {
        let mut book = AddressBook::new();
        book.add(contact(" Alice ", &["0123456789"]))?;

        assert_eq!(book.find(" Alice")?.name().as_str(), "Alice");
        book.find_mut("Alice ")?.add_phone("9876543210")?;
        assert!(book.find("Alice")?.find_phone("9876543210"));
        assert!(matches!(
            book.add(contact("Alice", &[])),
            Err(AppError::DuplicateContact(_))
        ));

        book.delete("  Alice")?;
        assert!(book.is_empty());
        Ok(())
    }

    #[test]
    fn stored_list_with_repeated_name_is_rejected() {
        let json = r#"[{"name":"Alice","phones":["0123456789"]},{"name":"Alice","phones":[]}]"#;

        let err = serde_json::from_str::<AddressBook>(json).unwrap_err();
        assert!(err.to_string().contains("Alice"));
    }
}
