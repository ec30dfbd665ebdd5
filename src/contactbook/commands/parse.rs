//! Turns one line of user input into a [`Command`].
//!
//! The first whitespace-separated word names the command (case-insensitive),
//! the rest are positional arguments. Missing arguments are an error; extra
//! ones are ignored.

use crate::error::{ContactsError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    RemovePhone { name: String, phone: String },
    EditBirthday { name: String, date: String },
    RemoveBirthday { name: String },
}

impl Command {
    /// Whether running this command can change the directory.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Change { .. }
                | Command::AddBirthday { .. }
                | Command::Delete { .. }
                | Command::RemovePhone { .. }
                | Command::EditBirthday { .. }
                | Command::RemoveBirthday { .. }
        )
    }
}

/// Parses a line. Blank lines yield `Ok(None)`.
pub fn parse_input(line: &str) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    parse_command(&cmd.to_lowercase(), &args).map(Some)
}

fn parse_command(cmd: &str, args: &[&str]) -> Result<Command> {
    let command = match cmd {
        "hello" => Command::Hello,
        "help" => Command::Help,
        "close" | "exit" => Command::Exit,
        "add" => {
            let [name, phone] = take(args)?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old, new] = take(args)?;
            Command::Change { name, old, new }
        }
        "phone" => {
            let [name] = take(args)?;
            Command::Phone { name }
        }
        "all" => Command::All,
        "add-birthday" => {
            let [name, date] = take(args)?;
            Command::AddBirthday { name, date }
        }
        "show-birthday" => {
            let [name] = take(args)?;
            Command::ShowBirthday { name }
        }
        "birthdays" => Command::Birthdays,
        "delete" => {
            let [name] = take(args)?;
            Command::Delete { name }
        }
        "remove-phone" => {
            let [name, phone] = take(args)?;
            Command::RemovePhone { name, phone }
        }
        "edit-birthday" => {
            let [name, date] = take(args)?;
            Command::EditBirthday { name, date }
        }
        "remove-birthday" => {
            let [name] = take(args)?;
            Command::RemoveBirthday { name }
        }
        other => return Err(ContactsError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

/// The first `N` arguments as owned strings.
fn take<const N: usize>(args: &[&str]) -> Result<[String; N]> {
    if args.len() < N {
        return Err(ContactsError::MalformedCommandArguments);
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
