//! # Contactbook Architecture
//!
//! Contactbook is a small personal contact directory: named records with phone
//! numbers and an optional birthday, plus a "who has a birthday this week"
//! query. Like any UI-agnostic library, the core knows nothing about terminals;
//! the binary is just one client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses arguments, runs the interactive session           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the loaded Directory     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Line parsing and one handler per command                 │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (fields.rs, record.rs, directory.rs)                  │
//! │  - Validated values, records, the name-keyed directory      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: whole-directory load/save               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<T>` with [`error::ContactsError`], and never writes to
//! stdout/stderr or exits the process. Validation failures are values, not
//! panics.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Line parser and per-command logic
//! - [`directory`]: The name-keyed store and the upcoming-birthdays query
//! - [`record`]: One contact
//! - [`fields`]: `PhoneNumber` and `Birthday` validators
//! - [`store`]: Persistence boundary
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod fields;
pub mod record;
pub mod store;
