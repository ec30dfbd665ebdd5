use crate::commands::{CmdMessage, CmdResult, not_found};
use crate::directory::{Directory, UpcomingBirthdays};
use crate::error::{ContactsError, Result};
use crate::record::ClearBirthday;
use chrono::NaiveDate;

pub const BIRTHDAY_NOT_SET: &str = "Birthday was not set.";
pub const NO_UPCOMING: &str = "No upcoming birthdays found";

pub fn add(directory: &mut Directory, name: &str, date: &str) -> Result<CmdResult> {
    let Some(record) = directory.find_mut(name) else {
        return not_found();
    };
    match record.set_birthday_if_absent(date) {
        Ok(()) => Ok(CmdResult::default()
            .with_message(CmdMessage::success("Birthday successfully added."))
            .modified()),
        Err(ContactsError::BirthdayAlreadySet(_)) => Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Birthday already exists."))),
        Err(e) => Err(e),
    }
}

pub fn show(directory: &Directory, name: &str) -> Result<CmdResult> {
    let Some(record) = directory.find(name) else {
        return not_found();
    };
    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(birthday.to_string()),
        None => CmdMessage::info(BIRTHDAY_NOT_SET),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn edit(directory: &mut Directory, name: &str, date: &str) -> Result<CmdResult> {
    let Some(record) = directory.find_mut(name) else {
        return not_found();
    };
    record.replace_birthday(date)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Birthday successfully edited"))
        .modified())
}

pub fn remove(directory: &mut Directory, name: &str) -> Result<CmdResult> {
    let Some(record) = directory.find_mut(name) else {
        return not_found();
    };
    match record.clear_birthday() {
        ClearBirthday::Cleared => Ok(CmdResult::default()
            .with_message(CmdMessage::success("Birthday removed."))
            .modified()),
        ClearBirthday::NothingToClear => {
            Ok(CmdResult::default().with_message(CmdMessage::info(BIRTHDAY_NOT_SET)))
        }
    }
}

pub fn upcoming(directory: &Directory, today: NaiveDate, window_days: u32) -> Result<CmdResult> {
    match directory.upcoming_birthdays(today, window_days) {
        UpcomingBirthdays::Found(entries) => Ok(CmdResult::default().with_upcoming(entries)),
        UpcomingBirthdays::NoneFound => {
            Ok(CmdResult::default().with_message(CmdMessage::info(NO_UPCOMING)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CONTACT_NOT_FOUND, contact};

    fn directory_with_john() -> Directory {
        let mut dir = Directory::new();
        contact::add(&mut dir, "John", "1111111111").unwrap();
        dir
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn add_then_show() {
        let mut dir = directory_with_john();
        let added = add(&mut dir, "John", "12.06.1990").unwrap();
        assert_eq!(added.messages[0].content, "Birthday successfully added.");

        let shown = show(&dir, "John").unwrap();
        assert_eq!(shown.messages[0].content, "12.06.1990");
    }

    #[test]
    fn second_add_is_rejected_with_message() {
        let mut dir = directory_with_john();
        add(&mut dir, "John", "12.06.1990").unwrap();
        let again = add(&mut dir, "John", "13.06.1990").unwrap();
        assert_eq!(again.messages[0].content, "Birthday already exists.");
        assert!(!again.modified);
        assert_eq!(show(&dir, "John").unwrap().messages[0].content, "12.06.1990");
    }

    #[test]
    fn bad_date_is_an_error() {
        let mut dir = directory_with_john();
        assert!(matches!(
            add(&mut dir, "John", "1990-06-12"),
            Err(ContactsError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn missing_contact() {
        let mut dir = Directory::new();
        assert_eq!(
            add(&mut dir, "Nobody", "12.06.1990").unwrap().messages[0].content,
            CONTACT_NOT_FOUND
        );
        assert_eq!(show(&dir, "Nobody").unwrap().messages[0].content, CONTACT_NOT_FOUND);
    }

    #[test]
    fn show_without_birthday() {
        let dir = directory_with_john();
        assert_eq!(show(&dir, "John").unwrap().messages[0].content, BIRTHDAY_NOT_SET);
    }

    #[test]
    fn edit_and_remove() {
        let mut dir = directory_with_john();
        add(&mut dir, "John", "12.06.1990").unwrap();
        edit(&mut dir, "John", "01.01.1991").unwrap();
        assert_eq!(show(&dir, "John").unwrap().messages[0].content, "01.01.1991");

        assert!(remove(&mut dir, "John").unwrap().modified);
        let again = remove(&mut dir, "John").unwrap();
        assert_eq!(again.messages[0].content, BIRTHDAY_NOT_SET);
        assert!(!again.modified);
    }

    #[test]
    fn upcoming_lists_matches() {
        let mut dir = directory_with_john();
        add(&mut dir, "John", "12.06.1990").unwrap();

        let result = upcoming(&dir, today(), 7).unwrap();
        assert_eq!(result.upcoming.len(), 1);
        assert_eq!(result.upcoming[0].name, "John");
        assert_eq!(result.upcoming[0].celebration_date, "12.06.2024");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn upcoming_none_found() {
        let dir = directory_with_john();
        let result = upcoming(&dir, today(), 7).unwrap();
        assert!(result.upcoming.is_empty());
        assert_eq!(result.messages[0].content, NO_UPCOMING);
    }
}
