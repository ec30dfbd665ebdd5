//! # Directory
//!
//! The directory is the single owner of every [`Record`], keyed by name.
//!
//! Records are kept in a `Vec` in insertion order, with a `HashMap` from name
//! to position for exact-key lookups. Overwriting an existing name replaces the
//! record in place, so it keeps its original position.
//!
//! ## Upcoming birthdays
//!
//! [`Directory::upcoming_birthdays`] projects every stored birthday onto the
//! year of the reference date and keeps the ones landing within
//! `0..=window_days` days from it. Birthdays already passed this year are not
//! wrapped into next year. A 29 February birthday has no projection in a
//! non-leap year and is skipped.

use crate::fields::format_date;
use crate::record::Record;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Outcome of [`Directory::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Record),
    NotFound,
}

/// A contact whose birthday falls within the query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Projected date in `DD.MM.YYYY` form.
    pub celebration_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpcomingBirthdays {
    Found(Vec<UpcomingBirthday>),
    NoneFound,
}

impl UpcomingBirthdays {
    pub fn entries(&self) -> &[UpcomingBirthday] {
        match self {
            UpcomingBirthdays::Found(entries) => entries,
            UpcomingBirthdays::NoneFound => &[],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<Record>,
    positions: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts `record`, replacing any record stored under the same name.
    pub fn add(&mut self, record: Record) {
        match self.positions.get(record.name()) {
            Some(&pos) => {
                tracing::debug!(name = record.name(), "replacing contact");
                self.records[pos] = record;
            }
            None => {
                tracing::debug!(name = record.name(), "adding contact");
                self.positions
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.positions.get(name).map(|&pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.positions.get(name).map(|&pos| &mut self.records[pos])
    }

    pub fn delete(&mut self, name: &str) -> DeleteOutcome {
        let Some(pos) = self.positions.remove(name) else {
            return DeleteOutcome::NotFound;
        };
        let record = self.records.remove(pos);
        for (i, r) in self.records.iter().enumerate().skip(pos) {
            self.positions.insert(r.name().to_string(), i);
        }
        tracing::debug!(name, "deleted contact");
        DeleteOutcome::Deleted(record)
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> UpcomingBirthdays {
        let window = i64::from(window_days);
        let mut found = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(projected) = birthday.date().with_year(today.year()) else {
                tracing::debug!(
                    name = record.name(),
                    year = today.year(),
                    "skipping birthday with no date in reference year"
                );
                continue;
            };
            let difference = (projected - today).num_days();
            if (0..=window).contains(&difference) {
                found.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    celebration_date: format_date(projected),
                });
            }
        }

        if found.is_empty() {
            UpcomingBirthdays::NoneFound
        } else {
            UpcomingBirthdays::Found(found)
        }
    }
}
