use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// One row of the record store.
///
/// Field names map to the `Platform` and `Senha` columns of the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Platform")]
    pub platform: String,

    #[serde(rename = "Senha")]
    pub password: String,
}

impl Record {
    pub fn new(platform: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            password: password.into(),
        }
    }
}

/// Whether an upsert created a new row or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// In-memory platform -> password table.
///
/// Keeps first-seen order: new platforms go to the end, updates keep their
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    entries: IndexMap<String, String>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new platform at the end or replace an existing password in place
    pub fn upsert(&mut self, platform: &str, password: &str) -> UpsertOutcome {
        match self.entries.entry(platform.to_string()) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() = password.to_string();
                UpsertOutcome::Updated
            }
            Entry::Vacant(entry) => {
                entry.insert(password.to_string());
                UpsertOutcome::Inserted
            }
        }
    }

    /// Look up the password stored for a platform (exact, case-sensitive)
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.entries.get(platform).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(platform, password)` pairs in stored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(platform, password)| (platform.as_str(), password.as_str()))
    }

    /// Platforms in stored order
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Owned rows in stored order
    pub fn to_records(&self) -> Vec<Record> {
        self.iter()
            .map(|(platform, password)| Record::new(platform, password))
            .collect()
    }
}

impl FromIterator<Record> for RecordTable {
    /// Later rows for a platform overwrite earlier ones but keep the first position
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut table = RecordTable::new();
        for record in iter {
            table.upsert(&record.platform, &record.password);
        }
        table
    }
}
