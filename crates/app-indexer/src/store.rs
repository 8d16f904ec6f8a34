use croplog_records::{Record, RecordKind, Store};
use parking_lot::RwLock;
use std::{collections::HashMap, convert::Infallible};

/// In-process [`Store`], mostly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<(RecordKind, String), Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: RecordKind, key: &str) -> Option<Record> {
        self.records.read().get(&(kind, key.to_string())).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Store for MemoryStore {
    type Error = Infallible;

    fn put(&self, kind: RecordKind, key: &str, record: &Record) -> Result<(), Self::Error> {
        self.records
            .write()
            .insert((kind, key.to_string()), record.clone());
        Ok(())
    }
}
