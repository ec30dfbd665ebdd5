//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary: it loads the whole
//! [`Directory`] at startup and saves the whole thing back at shutdown. The
//! core never sees the byte format.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file on disk.
//! - [`memory::InMemoryStore`]: keeps the serialized bytes in memory, for tests.
//!
//! Both go through [`snapshot`], so they share one explicit schema:
//!
//! ```text
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "John", "phones": ["0501234567"], "birthday": "05.03.1990" }
//!   ]
//! }
//! ```
//!
//! A store with no prior state loads as an empty directory rather than failing.

use crate::directory::Directory;
use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod snapshot;

/// Whole-directory persistence.
pub trait DataStore {
    /// Load the stored directory, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<Directory>;

    /// Replace the stored state with `directory`.
    fn save(&mut self, directory: &Directory) -> Result<()>;
}
