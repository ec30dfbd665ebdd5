use crate::directory::Directory;
use crate::error::{ContactsError, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub records: Vec<RecordSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl From<&Record> for RecordSnapshot {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.list_phones(),
            birthday: record.birthday().map(|b| b.to_string()),
        }
    }
}

impl From<&Directory> for DirectorySnapshot {
    fn from(directory: &Directory) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records: directory.all().map(RecordSnapshot::from).collect(),
        }
    }
}

impl TryFrom<RecordSnapshot> for Record {
    type Error = ContactsError;

    fn try_from(snapshot: RecordSnapshot) -> Result<Self> {
        let mut record = Record::new(snapshot.name)?;
        for phone in &snapshot.phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = &snapshot.birthday {
            record.replace_birthday(birthday)?;
        }
        Ok(record)
    }
}

impl TryFrom<DirectorySnapshot> for Directory {
    type Error = ContactsError;

    fn try_from(snapshot: DirectorySnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ContactsError::Config(format!(
                "Unsupported data version: {}",
                snapshot.version
            )));
        }
        let mut directory = Directory::new();
        for record in snapshot.records {
            directory.add(Record::try_from(record)?);
        }
        Ok(directory)
    }
}

pub fn to_bytes(directory: &Directory) -> Result<Vec<u8>> {
    let snapshot = DirectorySnapshot::from(directory);
    Ok(serde_json::to_vec_pretty(&snapshot)?)
}

pub fn from_bytes(bytes: &[u8]) -> Result<Directory> {
    let snapshot: DirectorySnapshot = serde_json::from_slice(bytes)?;
    Directory::try_from(snapshot)
}
