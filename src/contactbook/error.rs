use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Phone number must be 10 digits.")]
    InvalidPhoneFormat(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat(String),

    #[error("Birthday already exists.")]
    BirthdayAlreadySet(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Contact name cannot be empty.")]
    InvalidName,

    #[error("Please enter the info according to the instructions. To see instructions, enter 'help'")]
    MalformedCommandArguments,

    #[error("Invalid command.")]
    UnknownCommand(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
