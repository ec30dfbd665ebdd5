//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every contactbook operation, whatever the UI.
//!
//! `ContactsApi<S: DataStore>` loads the [`Directory`] from its store when it
//! is opened, keeps it in memory while commands run, and writes it back on
//! [`ContactsApi::save`]. Production uses `ContactsApi<FileStore>`, tests use
//! `ContactsApi<InMemoryStore>`.
//!
//! The API does no I/O of its own beyond the store and never prints: it
//! returns [`CmdResult`] values for the caller to render.

use crate::commands::{self, Command, ConfigAction, ContactsPaths};
use crate::config::ContactsConfig;
use crate::directory::Directory;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub struct ContactsApi<S: DataStore> {
    store: S,
    directory: Directory,
    paths: ContactsPaths,
    config: ContactsConfig,
}

impl<S: DataStore> ContactsApi<S> {
    /// Loads the directory from `store`.
    pub fn open(store: S, paths: ContactsPaths, config: ContactsConfig) -> Result<Self> {
        let directory = store.load()?;
        Ok(Self {
            store,
            directory,
            paths,
            config,
        })
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contact::add(&mut self.directory, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::contact::change(&mut self.directory, name, old, new)
    }

    pub fn list_phones(&self, name: &str) -> Result<CmdResult> {
        commands::contact::phone(&self.directory, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::contact::remove_phone(&mut self.directory, name, phone)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::contact::delete(&mut self.directory, name)
    }

    pub fn list_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.directory)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        commands::birthday::add(&mut self.directory, name, date)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthday::show(&self.directory, name)
    }

    pub fn edit_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        commands::birthday::edit(&mut self.directory, name, date)
    }

    pub fn remove_birthday(&mut self, name: &str) -> Result<CmdResult> {
        commands::birthday::remove(&mut self.directory, name)
    }

    /// Upcoming birthdays from today's local date, over the configured window.
    pub fn upcoming_birthdays(&self) -> Result<CmdResult> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::upcoming(&self.directory, today, self.config.birthday_window_days)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Runs one parsed command.
    ///
    /// [`Command::Exit`] only saves; ending the session is up to the caller.
    pub fn execute(&mut self, command: Command) -> Result<CmdResult> {
        tracing::debug!(?command, "executing");
        match command {
            Command::Hello => Ok(commands::help::hello()),
            Command::Help => Ok(commands::help::help()),
            Command::Exit => {
                self.save()?;
                Ok(CmdResult::default())
            }
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change { name, old, new } => self.change_phone(&name, &old, &new),
            Command::Phone { name } => self.list_phones(&name),
            Command::All => self.list_all(),
            Command::AddBirthday { name, date } => self.add_birthday(&name, &date),
            Command::ShowBirthday { name } => self.show_birthday(&name),
            Command::Birthdays => self.upcoming_birthdays(),
            Command::Delete { name } => self.delete_contact(&name),
            Command::RemovePhone { name, phone } => self.remove_phone(&name, &phone),
            Command::EditBirthday { name, date } => self.edit_birthday(&name, &date),
            Command::RemoveBirthday { name } => self.remove_birthday(&name),
        }
    }

    /// Writes the whole directory back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.directory)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_input;
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::StoreFixture;

    fn api(store: InMemoryStore) -> ContactsApi<InMemoryStore> {
        ContactsApi::open(store, ContactsPaths::new("unused"), ContactsConfig::default()).unwrap()
    }

    fn run(api: &mut ContactsApi<InMemoryStore>, line: &str) -> Result<CmdResult> {
        let command = parse_input(line)?.expect("non-blank line");
        api.execute(command)
    }

    #[test]
    fn opens_with_stored_contacts() {
        let fixture = StoreFixture::new().with_contact("John", &["1111111111"]);
        let api = api(fixture.store);
        assert_eq!(api.directory().len(), 1);
    }

    #[test]
    fn dispatches_commands() {
        let mut api = api(InMemoryStore::new());
        run(&mut api, "add John 1111111111").unwrap();
        run(&mut api, "change John 1111111111 2222222222").unwrap();
        run(&mut api, "add-birthday John 12.06.1990").unwrap();

        let phones = run(&mut api, "phone John").unwrap();
        assert_eq!(phones.phones, vec!["2222222222"]);

        let all = run(&mut api, "all").unwrap();
        assert_eq!(
            all.listed_records[0].describe(),
            "Contact name: John, phones: 2222222222, birthday: 12.06.1990"
        );

        let shown = run(&mut api, "show-birthday John").unwrap();
        assert_eq!(shown.messages[0].content, "12.06.1990");
    }

    #[test]
    fn errors_propagate_without_mutation() {
        let mut api = api(InMemoryStore::new());
        assert!(run(&mut api, "add John 12").is_err());
        assert!(api.directory().is_empty());
    }

    #[test]
    fn exit_saves_directory() {
        let mut api = api(InMemoryStore::new());
        run(&mut api, "add John 1111111111").unwrap();
        assert!(api.store().bytes().is_none());

        run(&mut api, "exit").unwrap();
        let reloaded = api.store().load().unwrap();
        assert_eq!(reloaded.find("John").unwrap().list_phones(), vec!["1111111111"]);
    }

    #[test]
    fn upcoming_uses_configured_window() {
        let fixture = StoreFixture::new()
            .with_contact("John", &[])
            .with_birthday("John", "20.06.1990");
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let default_window = api(fixture.store);
        assert!(default_window.upcoming_birthdays_from(today).unwrap().upcoming.is_empty());

        let config = ContactsConfig {
            birthday_window_days: 10,
            ..ContactsConfig::default()
        };
        let mut store = InMemoryStore::new();
        store.save(default_window.directory()).unwrap();
        let wide = ContactsApi::open(store, ContactsPaths::new("unused"), config).unwrap();
        let result = wide.upcoming_birthdays_from(today).unwrap();
        assert_eq!(result.upcoming[0].celebration_date, "20.06.2024");
    }
}
