use clap::{Parser, Subcommand};
use contactbook::commands::Command;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(version, about = "Personal contact directory with birthday reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json and the contacts file
    #[arg(long, global = true, env = "CONTACTBOOK_HOME")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a phone number, creating the contact if needed
    Add { name: String, phone: String },

    /// Replace one phone number with another
    Change {
        name: String,
        old: String,
        new: String,
    },

    /// Show a contact's phone numbers
    Phone { name: String },

    /// Show every contact
    #[command(alias = "ls")]
    All,

    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday { name: String, date: String },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// List birthdays coming up in the configured window
    Birthdays,

    /// Remove a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, birthday-window-days)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start the interactive session (the default)
    Repl,
}

impl Commands {
    /// The session command this subcommand stands for, if any.
    pub fn into_command(self) -> Option<Command> {
        let command = match self {
            Commands::Add { name, phone } => Command::Add { name, phone },
            Commands::Change { name, old, new } => Command::Change { name, old, new },
            Commands::Phone { name } => Command::Phone { name },
            Commands::All => Command::All,
            Commands::AddBirthday { name, date } => Command::AddBirthday { name, date },
            Commands::ShowBirthday { name } => Command::ShowBirthday { name },
            Commands::Birthdays => Command::Birthdays,
            Commands::Delete { name } => Command::Delete { name },
            Commands::Config { .. } | Commands::Repl => return None,
        };
        Some(command)
    }
}
