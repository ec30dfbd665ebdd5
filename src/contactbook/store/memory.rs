use super::{DataStore, snapshot};
use crate::directory::Directory;
use crate::error::Result;

/// In-memory storage for testing.
/// Holds the serialized bytes so tests go through the same schema as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    bytes: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Directory> {
        match &self.bytes {
            Some(bytes) => snapshot::from_bytes(bytes),
            None => Ok(Directory::new()),
        }
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.bytes = Some(snapshot::to_bytes(directory)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::record::Record;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        directory: Directory,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                directory: Directory::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.directory.add(record);
            self.store.save(&self.directory).unwrap();
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let mut record = self
                .directory
                .find(name)
                .cloned()
                .unwrap_or_else(|| Record::new(name).unwrap());
            record.replace_birthday(birthday).unwrap();
            self.directory.add(record);
            self.store.save(&self.directory).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn empty_store_loads_empty_directory() {
        let store = InMemoryStore::new();
        assert!(store.bytes().is_none());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn loads_from_raw_bytes() {
        let bytes = br#"{"version":1,"records":[{"name":"Ann","phones":["0501234567"]}]}"#;
        let store = InMemoryStore::from_bytes(bytes.to_vec());
        assert_eq!(store.load().unwrap().find("Ann").unwrap().list_phones(), vec!["0501234567"]);
    }

    #[test]
    fn fixture_persists_contacts() {
        let fixture = StoreFixture::new()
            .with_contact("John", &["1111111111"])
            .with_birthday("John", "05.03.1990");

        let dir = fixture.store.load().unwrap();
        assert_eq!(
            dir.find("John").unwrap().describe(),
            "Contact name: John, phones: 1111111111, birthday: 05.03.1990"
        );
    }
}
