use crate::models::{Record, RecordTable, UpsertOutcome};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors that can occur while reading or writing the record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on record store {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record store {path}: {source}")]
    Format {
        path: Utf8PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl StoreError {
    fn io(path: &Utf8Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn format(path: &Utf8Path, source: csv::Error) -> Self {
        // csv wraps plain I/O failures too; keep those as I/O errors
        if let csv::ErrorKind::Io(err) = source.kind() {
            return StoreError::io(path, io::Error::new(err.kind(), err.to_string()));
        }
        StoreError::Format {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Persistence backend for a [`RecordStore`].
///
/// A backend hands out the whole table and takes it back whole; there is no
/// partial update.
pub trait StoreBackend {
    /// Load the full table. A backend with nothing stored yet returns an empty table.
    fn load(&mut self) -> Result<RecordTable, StoreError>;

    /// Replace everything stored with `table`
    fn save(&mut self, table: &RecordTable) -> Result<(), StoreError>;
}

/// CSV file with a `Platform,Senha` header, one row per platform.
///
/// Saves write a temporary file next to the target and rename it over the
/// target, so readers see either the old table or the new one.
#[derive(Debug, Clone)]
pub struct CsvFileBackend {
    path: Utf8PathBuf,
}

impl CsvFileBackend {
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn parent_dir(&self) -> &Utf8Path {
        match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        }
    }
}

impl StoreBackend for CsvFileBackend {
    fn load(&mut self) -> Result<RecordTable, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Record store {} not found, starting empty", self.path);
                return Ok(RecordTable::new());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        // The deserialize iterator swallows a failed header read; surface it here
        reader
            .headers()
            .map_err(|err| StoreError::format(&self.path, err))?;

        let records = reader
            .deserialize::<Record>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| StoreError::format(&self.path, err))?;

        let table: RecordTable = records.into_iter().collect();
        tracing::debug!("Loaded {} records from {}", table.len(), self.path);
        Ok(table)
    }

    fn save(&mut self, table: &RecordTable) -> Result<(), StoreError> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|err| StoreError::io(dir, err))?;

        let temp = NamedTempFile::new_in(dir).map_err(|err| StoreError::io(dir, err))?;
        let mut writer = csv::Writer::from_writer(temp);

        // Header comes from the serde field names; write it even for an empty table
        if table.is_empty() {
            writer
                .write_record(["Platform", "Senha"])
                .map_err(|err| StoreError::format(&self.path, err))?;
        }
        for record in table.to_records() {
            writer
                .serialize(&record)
                .map_err(|err| StoreError::format(&self.path, err))?;
        }

        let mut temp = writer
            .into_inner()
            .map_err(|err| StoreError::io(&self.path, err.into_error()))?;
        temp.flush().map_err(|err| StoreError::io(&self.path, err))?;
        temp.as_file()
            .sync_all()
            .map_err(|err| StoreError::io(&self.path, err))?;
        temp.persist(&self.path)
            .map_err(|err| StoreError::io(&self.path, err.error))?;

        tracing::debug!("Wrote {} records to {}", table.len(), self.path);
        Ok(())
    }
}

/// In-memory backend for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    table: RecordTable,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing table
    pub fn with_table(table: RecordTable) -> Self {
        Self { table, saves: 0 }
    }

    /// What a reload would return
    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    /// Number of completed saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&mut self) -> Result<RecordTable, StoreError> {
        Ok(self.table.clone())
    }

    fn save(&mut self, table: &RecordTable) -> Result<(), StoreError> {
        self.table = table.clone();
        self.saves += 1;
        Ok(())
    }
}

/// Platform -> password store with upsert semantics.
///
/// Every write is a full read-modify-write cycle against the backend: load the
/// table, change it, save it back whole. Nothing is cached between calls, so
/// the backend is the single source of truth.
#[derive(Debug)]
pub struct RecordStore<B> {
    backend: B,
}

impl RecordStore<CsvFileBackend> {
    /// Store backed by a CSV file at `path`, created on first save
    pub fn open<P: AsRef<Utf8Path>>(path: P) -> Self {
        Self::new(CsvFileBackend::new(path))
    }
}

impl RecordStore<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl<B: StoreBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Insert `platform` at the end of the table or replace its password in place.
    ///
    /// Platform keys match exactly (case-sensitive). If saving fails the error
    /// is returned and the change is not persisted.
    pub fn upsert(&mut self, platform: &str, password: &str) -> Result<UpsertOutcome, StoreError> {
        let mut table = self.backend.load()?;
        let outcome = table.upsert(platform, password);

        if let Err(err) = self.backend.save(&table) {
            tracing::error!("Failed to save record for '{}': {}", platform, err);
            return Err(err);
        }

        tracing::info!("Record for '{}' {:?}", platform, outcome);
        Ok(outcome)
    }

    /// Load the full table
    pub fn load_table(&mut self) -> Result<RecordTable, StoreError> {
        self.backend.load()
    }

    /// Stored password for a platform
    pub fn get(&mut self, platform: &str) -> Result<Option<String>, StoreError> {
        Ok(self.backend.load()?.get(platform).map(str::to_string))
    }

    /// All records in stored order
    pub fn records(&mut self) -> Result<Vec<Record>, StoreError> {
        Ok(self.backend.load()?.to_records())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
