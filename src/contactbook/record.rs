use crate::error::{ContactsError, Result};
use crate::fields::{Birthday, PhoneNumber, parse_birthday, validate_phone};
use std::fmt;

/// Marker shown by [`Record::describe`] when no birthday is stored.
pub const NO_BIRTHDAY: &str = "None";

/// Outcome of [`Record::clear_birthday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearBirthday {
    Cleared,
    NothingToClear,
}

/// One contact: a name, its phone numbers and at most one birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContactsError::InvalidName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validates and appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, text: &str) -> Result<()> {
        let phone = validate_phone(text)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes every stored phone equal to `text`. Not an error if none match.
    pub fn remove_phone(&mut self, text: &str) {
        self.phones.retain(|p| p.as_str() != text);
    }

    /// Removes every phone equal to `old`, then validates and appends `new`.
    ///
    /// The removal is not rolled back when `new` is rejected: the record ends
    /// up without `old` and the error is still returned.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        self.remove_phone(old);
        self.add_phone(new)
    }

    pub fn list_phones(&self) -> Vec<String> {
        self.phones.iter().map(|p| p.to_string()).collect()
    }

    /// Stores a birthday unless one is already set.
    pub fn set_birthday_if_absent(&mut self, text: &str) -> Result<()> {
        if self.birthday.is_some() {
            return Err(ContactsError::BirthdayAlreadySet(self.name.clone()));
        }
        self.birthday = Some(parse_birthday(text)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> ClearBirthday {
        match self.birthday.take() {
            Some(_) => ClearBirthday::Cleared,
            None => ClearBirthday::NothingToClear,
        }
    }

    /// Overwrites any stored birthday. A rejected date leaves the old one in place.
    pub fn replace_birthday(&mut self, text: &str) -> Result<()> {
        self.birthday = Some(parse_birthday(text)?);
        Ok(())
    }

    pub fn describe(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string());
        format!(
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
