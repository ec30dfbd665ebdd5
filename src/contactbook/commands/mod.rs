use crate::config::ContactsConfig;
use crate::directory::UpcomingBirthday;
use crate::error::Result;
use crate::record::Record;
use std::path::PathBuf;

pub mod birthday;
pub mod config;
pub mod contact;
pub mod help;
pub mod list;
pub mod parse;

pub use config::ConfigAction;
pub use parse::{Command, parse_input};

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Where the config file and (by default) the contacts file live.
#[derive(Debug, Clone)]
pub struct ContactsPaths {
    pub home: PathBuf,
}

impl ContactsPaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn data_file(&self, config: &ContactsConfig) -> PathBuf {
        config.data_path(&self.home)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub phones: Vec<String>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub config: Option<ContactsConfig>,
    pub messages: Vec<CmdMessage>,
    /// Whether the directory changed and needs saving.
    pub modified: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_phones(mut self, phones: Vec<String>) -> Self {
        self.phones = phones;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn with_config(mut self, config: ContactsConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

/// Result for commands naming a contact that does not exist.
pub(crate) fn not_found() -> Result<CmdResult> {
    Ok(CmdResult::default().with_message(CmdMessage::error(CONTACT_NOT_FOUND)))
}
