use crate::commands::{CmdMessage, CmdResult, not_found};
use crate::directory::{DeleteOutcome, Directory};
use crate::error::Result;
use crate::record::Record;

/// Adds `phone` to `name`, creating the contact if needed.
///
/// A new contact is only inserted once its first phone validated, so a bad
/// number never leaves an empty contact behind.
pub fn add(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    if let Some(record) = directory.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(CmdResult::default()
            .with_message(CmdMessage::success("Contact updated."))
            .modified());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    directory.add(record);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact added."))
        .modified())
}

pub fn change(directory: &mut Directory, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let Some(record) = directory.find_mut(name) else {
        return not_found();
    };
    record.edit_phone(old, new)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact successfully updated."))
        .modified())
}

pub fn phone(directory: &Directory, name: &str) -> Result<CmdResult> {
    let Some(record) = directory.find(name) else {
        return not_found();
    };
    let phones = record.list_phones();
    let mut result = CmdResult::default().with_phones(phones);
    if result.phones.is_empty() {
        result.add_message(CmdMessage::info("No phone numbers saved."));
    }
    Ok(result)
}

pub fn remove_phone(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let Some(record) = directory.find_mut(name) else {
        return not_found();
    };
    record.remove_phone(phone);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Phone removed."))
        .modified())
}

pub fn delete(directory: &mut Directory, name: &str) -> Result<CmdResult> {
    match directory.delete(name) {
        DeleteOutcome::Deleted(_) => Ok(CmdResult::default()
            .with_message(CmdMessage::success("Record deleted"))
            .modified()),
        DeleteOutcome::NotFound => Ok(CmdResult::default()
            .with_message(CmdMessage::error("Record not found"))),
    }
}
