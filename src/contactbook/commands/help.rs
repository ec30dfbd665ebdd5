use crate::commands::{CmdMessage, CmdResult};

pub const GREETING: &str = "How can I help you?";

pub const HELP_TEXT: &str = "\
Here's the valid syntax for using the bot commands:
  1. add [name] [phone]. Phone number MUST contain 10 digits only.
  2. change [name] [old phone] [new phone]. Same rules apply for the phone numbers.
  3. phone [name] - shows all the phone numbers for a given name.
  4. all - shows all the records in the address book.
  5. add-birthday [name] [birthday]. Birthday format MUST be DD.MM.YYYY.
  6. show-birthday [name] - gets the birthday for a given name.
  7. birthdays - gets all upcoming birthdays for the next week.
  8. edit-birthday [name] [birthday] - replaces a stored birthday.
  9. remove-birthday [name] - clears a stored birthday.
 10. remove-phone [name] [phone] - removes a phone number.
 11. delete [name] - removes a contact.
 12. hello - greets the bot.
 13. close or exit - saves and exits the program.";

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(GREETING))
}

pub fn help() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(HELP_TEXT))
}
