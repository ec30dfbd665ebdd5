use clap::Parser;
use colored::*;
use contactbook::api::{CmdMessage, CmdResult, ContactsApi, MessageLevel};
use contactbook::commands::{Command, ConfigAction, ContactsPaths, parse_input};
use contactbook::config::ContactsConfig;
use contactbook::error::{ContactsError, Result};
use contactbook::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

const LOG_ENV: &str = "CONTACTBOOK_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        Some(Commands::Repl) | None => run_session(&mut api),
        Some(other) => match other.into_command() {
            Some(command) => handle_once(&mut api, command),
            None => Ok(()),
        },
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "contactbook=debug"
    } else {
        "contactbook=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_api(cli: &Cli) -> Result<ContactsApi<FileStore>> {
    let home = match &cli.home {
        Some(home) => home.clone(),
        None => default_home()?,
    };

    let config = ContactsConfig::load(&home)?;
    let paths = ContactsPaths::new(home);
    let store = FileStore::new(paths.data_file(&config));
    tracing::debug!(home = %paths.home.display(), data = %store.path().display(), "opening contacts");

    ContactsApi::open(store, paths, config)
}

fn default_home() -> Result<PathBuf> {
    ProjectDirs::from("com", "contactbook", "contactbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ContactsError::Config("Could not determine data directory".to_string()))
}

fn run_session(api: &mut ContactsApi<FileStore>) -> Result<()> {
    println!("Welcome to the assistant bot!");
    let mut input = io::stdin().lock();
    let mut buf = Vec::new();

    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                print_error(&ContactsError::Io(e));
                break;
            }
        }
        // Undecodable bytes become U+FFFD and fall through to "Invalid command."
        let line = String::from_utf8_lossy(&buf);
        let command = match parse_input(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_error(&e);
                continue;
            }
        };
        if command == Command::Exit {
            break;
        }

        match api.execute(command) {
            Ok(result) => print_result(&result),
            Err(e) => print_error(&e),
        }
    }

    api.save()?;
    println!("Goodbye!");
    Ok(())
}

fn handle_once(api: &mut ContactsApi<FileStore>, command: Command) -> Result<()> {
    let result = api.execute(command)?;
    if result.modified {
        api.save()?;
    }
    print_result(&result);
    Ok(())
}

fn handle_config(
    api: &ContactsApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("data-file = {}", config.data_file);
            println!("birthday-window-days = {}", config.birthday_window_days);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) {
    for record in &result.listed_records {
        println!("{}", record);
    }
    for phone in &result.phones {
        println!("{}", phone);
    }
    for entry in &result.upcoming {
        println!("{}: {}", entry.name.bold(), entry.celebration_date);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_error(error: &ContactsError) {
    println!("{}", error.to_string().red());
}
