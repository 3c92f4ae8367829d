//! Contact message storage.
//!
//! # Responsibilities
//! - Assign identifiers and submission timestamps
//! - Hold every stored message for the process lifetime
//! - List messages in insertion order
//!
//! # Design Decisions
//! - `ContactStore` is a trait so handlers can be tested against any backing store
//! - The id counter lives under the same lock as the records, so ids are
//!   unique and ordered the same way as the listing

use std::sync::RwLock;

use chrono::Utc;
use thiserror::Error;

use crate::contacts::model::{Contact, ContactId, NewContact};

/// Failure inside a contact store. Always surfaced as an internal error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("contact store lock poisoned")]
    Poisoned,
    #[error("contact store unavailable: {0}")]
    Unavailable(String),
}

/// Backing storage for contact messages.
pub trait ContactStore: Send + Sync {
    /// Store a validated message and return the stored record.
    fn create(&self, new: NewContact) -> Result<Contact, StoreError>;

    /// All stored messages, oldest first.
    fn list(&self) -> Result<Vec<Contact>, StoreError>;

    /// Number of stored messages.
    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    contacts: Vec<Contact>,
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    inner: RwLock<Inner>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryContactStore {
    fn create(&self, new: NewContact) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        inner.next_id += 1;
        let contact = Contact::from_new(ContactId(inner.next_id), new, Utc::now());
        inner.contacts.push(contact.clone());

        tracing::debug!(id = %contact.id, total = inner.contacts.len(), "Contact stored");
        Ok(contact)
    }

    fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.contacts.clone())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.contacts.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "Hi".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = InMemoryContactStore::new();
        let a = store.create(new_contact("Alice")).unwrap();
        let b = store.create(new_contact("Bob")).unwrap();
        assert_eq!(a.id, ContactId(1));
        assert_eq!(b.id, ContactId(2));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryContactStore::new();
        assert!(store.list().unwrap().is_empty());

        for name in ["Alice", "Bob", "Carol"] {
            store.create(new_contact(name)).unwrap();
        }

        let names: Vec<_> = store.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn list_is_stable_without_writes() {
        let store = InMemoryContactStore::new();
        store.create(new_contact("Alice")).unwrap();
        assert_eq!(store.list().unwrap(), store.list().unwrap());
    }

    struct Snapshot(Vec<Contact>);

    impl ContactStore for Snapshot {
        fn create(&self, _new: NewContact) -> Result<Contact, StoreError> {
            Err(StoreError::Unavailable("read-only".into()))
        }

        fn list(&self) -> Result<Vec<Contact>, StoreError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn default_count_uses_list() {
        let source = InMemoryContactStore::new();
        source.create(new_contact("Alice")).unwrap();
        source.create(new_contact("Bob")).unwrap();

        let snapshot = Snapshot(source.list().unwrap());
        assert_eq!(snapshot.count().unwrap(), 2);
    }

    #[test]
    fn concurrent_creates_never_share_an_id() {
        let store = Arc::new(InMemoryContactStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| store.create(new_contact(&format!("T{t}N{i}"))).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<ContactId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(store.count().unwrap(), 400);
        assert_eq!(ids.iter().max(), Some(&ContactId(400)));
    }
}
