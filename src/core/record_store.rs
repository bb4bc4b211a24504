use tracing::{debug, info, warn};

use crate::{
    domain::{Record, RecordCollection},
    errors::PersistenceError,
    storage::{decode_collection, encode_collection, PersistenceBackend},
};

/// Owns the in-memory record list and keeps it in step with the persisted slot.
pub struct RecordStore {
    backend: Box<dyn PersistenceBackend>,
    records: RecordCollection,
}

impl RecordStore {
    /// Opens the store and loads whatever the backend holds.
    pub fn open(backend: Box<dyn PersistenceBackend>) -> Self {
        let records = load_collection(backend.as_ref());
        Self { backend, records }
    }

    /// Reads the backend slot.
    ///
    /// An absent, unreadable or malformed slot is treated as a first run and yields
    /// the seed records. Nothing is written back until the next append.
    pub fn load(&self) -> RecordCollection {
        load_collection(self.backend.as_ref())
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    /// Appends `record` and persists the full list.
    ///
    /// The in-memory list only advances once the write succeeded, so a failed
    /// persist leaves both sides on the previous version.
    pub fn append(&mut self, record: Record) -> Result<&RecordCollection, PersistenceError> {
        let next = self.records.with_appended(record);
        let blob = encode_collection(&next)?;
        if let Err(err) = self.backend.write(&blob) {
            warn!(error = %err, "failed to persist record list; append discarded");
            return Err(err);
        }
        self.records = next;
        debug!(count = self.records.len(), "record list persisted");
        Ok(&self.records)
    }
}

fn load_collection(backend: &dyn PersistenceBackend) -> RecordCollection {
    let blob = match backend.read() {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!("no stored records found; using seed records");
            return RecordCollection::seeded();
        }
        Err(err) => {
            warn!(error = %err, "could not read stored records; using seed records");
            return RecordCollection::seeded();
        }
    };
    match decode_collection(&blob) {
        Ok(records) => {
            debug!(count = records.len(), "loaded stored records");
            records
        }
        Err(err) => {
            warn!(error = %err, "stored records are malformed; using seed records");
            RecordCollection::seeded()
        }
    }
}
