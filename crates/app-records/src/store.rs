use crate::{Record, RecordKind};

/// Destination for finished records. Writes are upserts keyed by
/// `(kind, key)`; a later record with the same pair replaces the earlier one.
pub trait Store {
    type Error: std::error::Error + Send + Sync + 'static;

    fn put(&self, kind: RecordKind, key: &str, record: &Record) -> Result<(), Self::Error>;
}
